//! Canonical form for output paths.
//!
//! Every path handed back to callers is either `.`, `..`, absolute, or
//! explicitly relative (prefixed with `./`). Normalization is purely textual:
//! it never touches the filesystem and never cleans `.`/`..` components.

use std::path::Path;

/// Convert a path string to its canonical form.
///
/// - `.` and `..` are returned unchanged
/// - absolute paths are returned unchanged
/// - paths already starting with `./` are returned unchanged
/// - everything else is prefixed with `./`
///
/// # Examples
///
/// ```
/// use pkgpaths::path::normalize::normalize;
///
/// assert_eq!(normalize("."), ".");
/// assert_eq!(normalize("/abs/path"), "/abs/path");
/// assert_eq!(normalize("./foo"), "./foo");
/// assert_eq!(normalize("relative/path"), "./relative/path");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    if is_canonical(path) {
        path.to_string()
    } else {
        format!("./{path}")
    }
}

/// Returns true if `path` is already in canonical form.
///
/// # Examples
///
/// ```
/// use pkgpaths::path::normalize::is_canonical;
///
/// assert!(is_canonical(".."));
/// assert!(!is_canonical("foo"));
/// ```
#[must_use]
pub fn is_canonical(path: &str) -> bool {
    path == "."
        || path == ".."
        || path.starts_with("./")
        || (cfg!(windows) && path.starts_with(".\\"))
        || path.starts_with('/')
        || Path::new(path).is_absolute()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_current_and_parent() {
        assert_eq!(normalize("."), ".");
        assert_eq!(normalize(".."), "..");
    }

    #[test]
    fn test_normalize_absolute_unchanged() {
        assert_eq!(normalize("/abs/path"), "/abs/path");
        assert_eq!(normalize("/"), "/");
    }

    #[test]
    fn test_normalize_explicit_relative_unchanged() {
        assert_eq!(normalize("./foo"), "./foo");
        assert_eq!(normalize("./foo/../bar"), "./foo/../bar");
    }

    #[test]
    fn test_normalize_prefixes_bare_relative() {
        assert_eq!(normalize("relative/path"), "./relative/path");
        assert_eq!(normalize("foo"), "./foo");
        assert_eq!(normalize(".hidden"), "./.hidden");
        assert_eq!(normalize("../sibling"), "./../sibling");
    }

    #[test]
    fn test_normalize_does_not_clean() {
        assert_eq!(normalize("foo/./bar"), "./foo/./bar");
        assert_eq!(normalize("foo/"), "./foo/");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn path_strategy() -> impl Strategy<Value = String> {
            (
                prop_oneof![Just(""), Just("./"), Just("/"), Just("../")],
                prop::collection::vec(
                    prop_oneof![
                        Just(".".to_string()),
                        Just("..".to_string()),
                        "[a-zA-Z0-9_.-]{1,10}",
                    ],
                    0..=5,
                ),
            )
                .prop_map(|(prefix, parts)| format!("{prefix}{}", parts.join("/")))
        }

        proptest! {
            /// normalize(normalize(p)) == normalize(p)
            #[test]
            fn normalize_idempotent(s in path_strategy()) {
                let once = normalize(&s);
                let twice = normalize(&once);
                prop_assert_eq!(once, twice);
            }

            /// Output is always in canonical form
            #[test]
            fn normalize_output_is_canonical(s in path_strategy()) {
                prop_assert!(is_canonical(&normalize(&s)));
            }

            /// Canonical input is never rewritten
            #[test]
            fn normalize_preserves_canonical(s in path_strategy()) {
                if is_canonical(&s) {
                    prop_assert_eq!(normalize(&s), s);
                }
            }
        }
    }
}
