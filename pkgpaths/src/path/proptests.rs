//! Property-based tests for recursive expansion against real directory trees.
//!
//! The inline property tests in `filter`, `normalize` and `resolver` cover
//! the pure parts. These build random trees on disk, so they are slower and
//! only run with the `property-tests` feature.

use super::filter::PathFilter;
use super::resolver::{OutputOrder, PathResolver};
use proptest::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-c]{1,2}",
        1 => "[._][a-c]{1,2}",
    ]
}

fn tree_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(segment_strategy(), 1..4), 0..8)
}

fn build_tree(dirs: &[Vec<String>]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for parts in dirs {
        let path = parts
            .iter()
            .fold(temp.path().to_path_buf(), |p, part| p.join(part));
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("file.go"), "package p").unwrap();
    }
    temp
}

fn expand_all(base: &Path, skip: &[String]) -> Vec<String> {
    PathResolver::new(base)
        .with_order(OutputOrder::Discovery)
        .with_source_files_required(false)
        .resolve(&["./..."], &PathFilter::new(skip))
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        .. ProptestConfig::default()
    })]

    // No emitted path has an excluded segment anywhere below the root
    #[test]
    fn expansion_never_contains_excluded_segments(
        dirs in tree_strategy(),
        skip in prop::collection::vec("[a-c]{1,2}", 0..3),
    ) {
        let temp = build_tree(&dirs);
        let filter = PathFilter::new(&skip);

        for path in expand_all(temp.path(), &skip) {
            let mut prefix = super::RelativePath::new();
            for segment in super::RelativePath::parse(&path).segments() {
                prefix = prefix.join(segment.clone());
                prop_assert!(!filter.is_excluded_path(&prefix), "{} leaked", path);
            }
        }
    }

    // Every emitted path is canonical and unique
    #[test]
    fn expansion_is_canonical_and_unique(dirs in tree_strategy()) {
        let temp = build_tree(&dirs);
        let paths = expand_all(temp.path(), &[]);

        let unique: HashSet<&String> = paths.iter().collect();
        prop_assert_eq!(unique.len(), paths.len());
        for path in &paths {
            prop_assert!(super::normalize::is_canonical(path));
        }
        prop_assert_eq!(paths.first().map(String::as_str), Some("."));
    }

    // Sorted and discovery orders contain the same set
    #[test]
    fn orders_agree_on_contents(dirs in tree_strategy()) {
        let temp = build_tree(&dirs);
        let filter = PathFilter::default();
        let base = PathResolver::new(temp.path());

        let mut sorted = base.clone().resolve(&["...", "extra"], &filter).unwrap();
        let mut discovered = base
            .with_order(OutputOrder::Discovery)
            .resolve(&["...", "extra"], &filter)
            .unwrap();

        sorted.sort();
        discovered.sort();
        prop_assert_eq!(sorted, discovered);
    }
}
