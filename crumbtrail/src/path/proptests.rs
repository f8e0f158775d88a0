//! Property-based tests for path normalization and prefix chains.

use super::chain::PrefixChain;
use super::normalize::{normalize_route_path, segments};
use proptest::prelude::*;

// Strategy for generating URL path segments
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

// Paths with arbitrary separator noise between segments
fn messy_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((segment_strategy(), 1..4usize), 0..8).prop_map(|parts| {
        let mut path = String::new();
        for (segment, slashes) in parts {
            path.push_str(&"/".repeat(slashes));
            path.push_str(&segment);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent
    #[test]
    fn normalization_idempotent(path in messy_path_strategy()) {
        let once = normalize_route_path(&path);
        let twice = normalize_route_path(&once);
        prop_assert_eq!(once, twice);
    }

    // Normalized paths are absolute and never contain "//"
    #[test]
    fn normalized_paths_are_clean(path in messy_path_strategy()) {
        let normalized = normalize_route_path(&path);
        prop_assert!(normalized.starts_with('/'));
        prop_assert!(!normalized.contains("//"));
        prop_assert!(normalized == "/" || !normalized.ends_with('/'));
    }

    // Chain length is segment count plus the root
    #[test]
    fn chain_length_is_segments_plus_one(path in messy_path_strategy()) {
        let chain = PrefixChain::new(&path);
        prop_assert_eq!(chain.len(), segments(&path).count() + 1);
        prop_assert_eq!(chain.prefixes().count(), chain.len());
    }

    // Each prefix extends the previous one by exactly its own segment
    #[test]
    fn prefixes_extend_one_segment(path in messy_path_strategy()) {
        let chain = PrefixChain::new(&path);
        let prefixes: Vec<_> = chain.prefixes().collect();
        prop_assert_eq!(prefixes[0].path, "/");
        for pair in prefixes.windows(2) {
            let parent = if pair[0].path == "/" { "" } else { pair[0].path };
            prop_assert_eq!(pair[1].path, format!("{parent}/{}", pair[1].segment));
        }
        prop_assert_eq!(prefixes.last().unwrap().path, chain.leaf());
    }

    // Exactly the final prefix is marked last
    #[test]
    fn exactly_one_last_prefix(path in messy_path_strategy()) {
        let chain = PrefixChain::new(&path);
        let flags: Vec<_> = chain.prefixes().map(|p| p.is_last).collect();
        prop_assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        prop_assert!(*flags.last().unwrap());
    }
}
