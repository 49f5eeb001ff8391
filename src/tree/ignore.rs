//! Fixed ignore set for tree walking

use std::ffi::OsStr;

/// Names excluded from every directory listing, for the lifetime of the
/// process. Matching is exact on the entry name, never on the full path
/// and never as a glob: a directory called `build` is pruned wherever it
/// appears, `rebuild` is not.
pub const IGNORED_NAMES: &[&str] = &[
    "node_modules",
    ".git",
    "build",
    "dist",
    ".next",
    ".vscode",
    "__pycache__",
    "coverage",
    ".DS_Store",
];

/// Check whether an entry name is in the ignore set.
pub fn is_ignored(name: &OsStr) -> bool {
    IGNORED_NAMES.iter().any(|ignored| name == *ignored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn test_ignored_names_match_exactly() {
        assert!(is_ignored(OsStr::new("node_modules")));
        assert!(is_ignored(OsStr::new(".git")));
        assert!(is_ignored(OsStr::new("build")));
        assert!(is_ignored(OsStr::new(".DS_Store")));
    }

    #[test]
    fn test_near_misses_are_not_ignored() {
        // Exact string match only - supersets and case variants pass through
        assert!(!is_ignored(OsStr::new("rebuild")));
        assert!(!is_ignored(OsStr::new("builds")));
        assert!(!is_ignored(OsStr::new("Build")));
        assert!(!is_ignored(OsStr::new("git")));
        assert!(!is_ignored(OsStr::new("node_modules2")));
    }

    #[test]
    fn test_owned_names_match() {
        let name = OsString::from("__pycache__");
        assert!(is_ignored(&name));
    }
}
