//! Concrete end-to-end scenarios for the public API

use gstree::{Location, Occurrence, SuffixTree, TreeConfig, TreeError};

fn bytes(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

#[test]
fn abab_scenario() {
    let mut tree = SuffixTree::new();
    tree.add_string(bytes("abab$")).unwrap();

    assert!(tree.is_substring(b"bab"));
    assert_eq!(tree.substring_count(b"ab"), 2);
    assert!(tree.is_suffix(b"b$"));
    assert!(!tree.is_suffix(b"ab"));
    assert_eq!(
        tree.occurrences(b"ab"),
        vec![
            Occurrence { string: 0, offset: 0 },
            Occurrence { string: 0, offset: 2 }
        ]
    );
}

#[test]
fn multi_string_isolation() {
    let mut tree = SuffixTree::new();
    tree.add_string(bytes("aba$")).unwrap();
    tree.add_string(bytes("bab#")).unwrap();

    assert!(!tree.is_substring(b"a$b"));
    assert!(!tree.is_substring(b"$b"));
    assert!(tree.is_substring(b"aba$"));
    assert!(tree.is_substring(b"bab#"));
    assert_eq!(tree.substring_count(b"b"), 3);
}

#[test]
fn empty_pattern_is_always_found() {
    let mut tree: SuffixTree<u8> = SuffixTree::new();
    assert!(tree.is_substring(b""));
    assert!(tree.is_suffix(b""));

    tree.add_string(bytes("xyz")).unwrap();
    assert!(tree.is_substring(b""));
    assert!(tree.is_suffix(b""));

    tree.clear();
    assert!(tree.is_substring(b""));
    assert!(tree.is_suffix(b""));
}

#[test]
fn clear_forgets_everything() {
    let mut tree = SuffixTree::new();
    tree.add_string(bytes("aaaa$")).unwrap();
    assert_eq!(tree.substring_count(b"a"), 4);

    tree.clear();
    assert!(!tree.is_substring(b"a"));
    assert_eq!(tree.substring_count(b"a"), 0);
    assert!(tree.occurrences(b"a").is_empty());
    assert_eq!(tree.node_count(), 1);

    // Usable again after clearing
    tree.add_string(bytes("ba$")).unwrap();
    assert!(tree.is_substring(b"a"));
    assert_eq!(tree.substring_count(b"a"), 1);
    assert_eq!(tree.occurrences(b"a"), vec![Occurrence { string: 0, offset: 1 }]);
}

#[test]
fn unresolved_string_cannot_be_followed() {
    let mut tree = SuffixTree::new();
    tree.add_string(bytes("abcab")).unwrap();
    let pending = tree.pending_suffixes();
    assert_eq!(pending, 2);

    let before = tree.stats();
    assert_eq!(
        tree.add_string(bytes("zz#")),
        Err(TreeError::UnresolvedSuffixes { pending })
    );
    assert_eq!(tree.stats(), before);
    assert!(!tree.is_substring(b"z"));

    // Terminating the string resolves it
    tree.append(b'$');
    assert!(tree.is_resolved());
    tree.add_string(bytes("zz#")).unwrap();
    assert!(tree.is_substring(b"zz#"));
    assert_eq!(tree.string_count(), 2);
}

#[test]
fn append_symbol_by_symbol_matches_add_string() {
    let mut online = SuffixTree::new();
    online.begin_new_string().unwrap();
    for symbol in "mississippi$".chars() {
        online.append(symbol);
    }

    let mut whole = SuffixTree::new();
    whole.add_string("mississippi$".chars()).unwrap();

    assert_eq!(online.stats(), whole.stats());
    for pattern in ["ssi", "issi", "ppi$", "i", "s", "mis", "sip"] {
        let pattern: Vec<char> = pattern.chars().collect();
        assert_eq!(
            online.substring_count(&pattern),
            whole.substring_count(&pattern)
        );
    }
}

#[test]
fn locate_reports_mid_edge_position() {
    let mut tree = SuffixTree::new();
    tree.add_string(bytes("xabcd$")).unwrap();

    match tree.locate(b"abc") {
        Some(Location::Edge { first, consumed, .. }) => {
            assert_eq!(first, b'a');
            assert_eq!(consumed, 3);
        }
        other => panic!("unexpected location: {:?}", other),
    }
    assert!(matches!(tree.locate(b"abcd$"), Some(Location::Node(_))));
    assert_eq!(tree.locate(b"abd"), None);
}

#[test]
fn symbols_can_be_any_hashable_type() {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Token {
        Word(u16),
        End(u8),
    }

    let mut tree = SuffixTree::with_config(TreeConfig::for_text_len(16));
    tree.add_string([Token::Word(1), Token::Word(2), Token::Word(1), Token::End(0)])
        .unwrap();
    tree.add_string([Token::Word(2), Token::Word(1), Token::End(1)])
        .unwrap();

    assert_eq!(tree.substring_count(&[Token::Word(2), Token::Word(1)]), 2);
    assert!(tree.is_suffix(&[Token::Word(1), Token::End(1)]));
    assert!(!tree.is_substring(&[Token::End(0), Token::Word(2)]));
}

#[test]
fn strings_round_trip() {
    let mut tree = SuffixTree::new();
    tree.add_string(bytes("one\0")).unwrap();
    tree.add_string(bytes("two\x01")).unwrap();

    let strings: Vec<&[u8]> = tree.strings().collect();
    assert_eq!(strings, vec![&b"one\0"[..], &b"two\x01"[..]]);
    assert_eq!(tree.len(), 8);
}

#[test]
fn batch_reports_follow_input_order() {
    let mut tree = SuffixTree::new();
    tree.add_string(bytes("banana$")).unwrap();

    let patterns = [bytes("ana"), bytes("nab"), bytes("a$"), bytes("")];
    let reports = tree.query_batch(&patterns);

    assert_eq!(reports.len(), 4);
    assert_eq!(reports[0].count, 2);
    assert!(!reports[1].is_substring);
    assert!(reports[2].is_suffix);
    assert_eq!(reports[3].count, 7);
}
