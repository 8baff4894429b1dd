//! Progress reporting while the tree is built.
//! Compiles to nothing when the `progress` feature is disabled.

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// Progress over the symbols appended to the tree
pub struct BuildProgress {
    #[cfg(feature = "progress")]
    bar: Option<ProgressBar>,
}

impl BuildProgress {
    /// Show a bar over `total_symbols` if `enabled`
    #[cfg(feature = "progress")]
    pub fn new(total_symbols: u64, enabled: bool) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::new(total_symbols);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} symbols {msg}")
            {
                bar.set_style(style.progress_chars("=> "));
            }
            bar
        });
        Self { bar }
    }

    #[cfg(not(feature = "progress"))]
    pub fn new(_total_symbols: u64, _enabled: bool) -> Self {
        Self {}
    }

    /// One record of `symbols` symbols was added
    pub fn record_done(&self, symbols: u64) {
        #[cfg(feature = "progress")]
        {
            if let Some(bar) = &self.bar {
                bar.inc(symbols);
            }
        }
        #[cfg(not(feature = "progress"))]
        let _ = symbols;
    }

    pub fn finish(&self, strings: usize) {
        #[cfg(feature = "progress")]
        {
            if let Some(bar) = &self.bar {
                bar.finish_with_message(format!("({} strings)", strings));
            }
        }
        #[cfg(not(feature = "progress"))]
        let _ = strings;
    }
}
