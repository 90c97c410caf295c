//! End-to-end resolution tests against real directory trees.
//!
//! These exercise the public API only: spec parsing, filtering, walking,
//! normalization, deduplication and ordering together.

mod common;

use common::{scenario_tree, SourceTree};
use pkgpaths::{resolve_paths, OutputOrder, PathFilter, PathResolver};
use std::thread;

#[test]
fn test_reference_scenario() {
    let tree = scenario_tree();
    let paths = resolve_paths(
        tree.path(),
        &["./...", "foo", "duplicate"],
        &["exclude", "other/exclude"],
    )
    .unwrap();

    assert_eq!(
        paths,
        [".", "./duplicate", "./foo", "./include", "./include/foo"]
    );
}

#[test]
fn test_empty_specs_resolve_to_current_dir() {
    let tree = SourceTree::new();
    let paths = resolve_paths(tree.path(), &[] as &[&str], &["anything"]).unwrap();
    assert_eq!(paths, ["."]);
}

#[test]
fn test_literal_specs_ignore_skip_list_and_disk() {
    let tree = SourceTree::new();
    let paths = resolve_paths(tree.path(), &[".", "foo", "foo/bar"], &["foo/bar"]).unwrap();
    assert_eq!(paths, [".", "./foo", "./foo/bar"]);
}

#[test]
fn test_filter_reference_table() {
    let filter = PathFilter::new(["exclude", "skip.go"]);

    let cases = [
        ("exclude", true),
        ("something/skip.go", true),
        ("skip.go", true),
        (".git", true),
        ("_ignore", true),
        ("include.go", false),
        (".", false),
        ("..", false),
    ];

    for (path, expected) in cases {
        assert_eq!(filter.is_excluded(path), expected, "{path}");
    }
}

#[test]
fn test_pruned_subtree_never_leaks() {
    let tree = SourceTree::new();
    tree.package(&["vendor", "github.com", "lib"]);
    tree.package(&[".git", "hooks"]);
    tree.package(&["_build", "gen"]);
    tree.package(&["cmd", "tool"]);

    let resolver = PathResolver::new(tree.path()).with_source_files_required(false);
    let paths = resolver
        .resolve(&["./..."], &PathFilter::new(["vendor"]))
        .unwrap();

    assert_eq!(paths, [".", "./cmd", "./cmd/tool"]);
}

#[test]
fn test_multiple_expansions_deduplicate() {
    let tree = scenario_tree();
    let resolver = PathResolver::new(tree.path()).with_order(OutputOrder::Discovery);
    let filter = PathFilter::new(["exclude"]);

    let paths = resolver
        .resolve(&["include/...", "./...", "include"], &filter)
        .unwrap();

    assert_eq!(
        paths,
        ["./include", "./include/foo", ".", "./duplicate"]
    );
}

#[test]
fn test_error_discards_earlier_results() {
    let tree = scenario_tree();
    let result = resolve_paths(tree.path(), &["./...", "nowhere/..."], &[] as &[&str]);

    let err = result.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("nowhere/..."));
}

#[test]
fn test_concurrent_calls_share_resolver_and_filter() {
    let tree = scenario_tree();
    let resolver = PathResolver::new(tree.path());
    let filter = PathFilter::new(["exclude", "other/exclude"]);

    let results: Vec<Vec<String>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| resolver.resolve(&["./...", "foo", "duplicate"], &filter)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });

    for paths in results {
        assert_eq!(
            paths,
            [".", "./duplicate", "./foo", "./include", "./include/foo"]
        );
    }
}
