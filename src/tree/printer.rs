//! TreePrinter - recursive pre-order traversal with prefix rendering

use std::fs;
use std::io;
use std::path::Path;

use crate::output::TreeSink;

use super::ignore::is_ignored;

/// Recursive depth-first tree printer.
///
/// Lists each directory, drops ignored names, sorts siblings by file name,
/// and emits one line per entry through a [`TreeSink`]. Uses O(depth)
/// memory: only the current listing and the accumulated prefix are held
/// per level.
pub struct TreePrinter;

impl TreePrinter {
    pub fn new() -> Self {
        Self
    }

    /// Walk `root` and emit tree lines through `sink`.
    ///
    /// Any listing failure (root missing, permission denied, a descendant
    /// becoming unreadable mid-walk) aborts the whole traversal and is
    /// returned to the caller. There is no skip-and-continue fallback.
    pub fn print<S: TreeSink>(&self, root: &Path, sink: &mut S) -> io::Result<()> {
        self.print_dir(root, "", sink)
    }

    fn print_dir<S: TreeSink>(&self, dir: &Path, prefix: &str, sink: &mut S) -> io::Result<()> {
        let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
        entries.retain(|entry| !is_ignored(&entry.file_name()));
        // Sibling order is byte-wise ascending over names, independent of
        // whatever order the filesystem reported.
        entries.sort_by_key(|entry| entry.file_name());

        let total = entries.len();
        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i + 1 == total;
            let name = entry.file_name().to_string_lossy().to_string();
            let path = entry.path();
            let is_dir = path.is_dir();

            sink.entry(&name, is_dir, is_last, prefix)?;

            if is_dir {
                // The last sibling's descendants get clean spacing; everyone
                // else's get a continuing branch.
                let child_prefix = if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };
                self.print_dir(&path, &child_prefix, sink)?;
            }
        }

        Ok(())
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new()
    }
}
