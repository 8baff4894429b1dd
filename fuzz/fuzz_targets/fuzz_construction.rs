#![no_main]

use gstree::SuffixTree;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Build over arbitrary bytes, one string per 0xFF-separated chunk.
    // Every window of every chunk must be found and counted.
    let chunks: Vec<&[u8]> = data.split(|&b| b == 0xFF).take(8).collect();

    let mut tree = SuffixTree::new();
    for (i, chunk) in chunks.iter().enumerate() {
        let symbols = chunk
            .iter()
            .map(|&b| u16::from(b))
            .chain(std::iter::once(0x100 + i as u16));
        tree.add_string(symbols).unwrap();
    }

    for chunk in &chunks {
        let chunk: Vec<u16> = chunk.iter().map(|&b| u16::from(b)).collect();
        for len in 1..=chunk.len().min(6) {
            for window in chunk.windows(len) {
                assert!(tree.is_substring(window));
                assert!(tree.substring_count(window) >= 1);
                assert_eq!(tree.occurrences(window).len(), tree.substring_count(window));
            }
        }
    }
});
