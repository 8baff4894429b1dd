//! Errors reported by the suffix tree

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors that can occur while building a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A new string was started while suffixes of the current one were
    /// still implicit. Appending a symbol unique to the current string
    /// resolves them.
    UnresolvedSuffixes {
        /// Suffixes still waiting to be inserted
        pending: usize,
    },
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::UnresolvedSuffixes { pending } => write!(
                f,
                "Cannot start a new string: {} suffix(es) of the current string are unresolved \
                 (terminate it with a unique symbol first)",
                pending
            ),
        }
    }
}

impl std::error::Error for TreeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_pending_count() {
        let err = TreeError::UnresolvedSuffixes { pending: 3 };
        let msg = err.to_string();
        assert!(msg.contains("3 suffix(es)"));
        assert!(msg.contains("unique symbol"));
    }
}
