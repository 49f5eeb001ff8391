//! Output sink for tree traversal

use std::io;

/// Connector glyph for an entry's position among its siblings.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Callback for tree output - receives one entry per line, in display order.
pub trait TreeSink {
    fn entry(&mut self, name: &str, is_dir: bool, is_last: bool, prefix: &str) -> io::Result<()>;
}

/// Sink that renders entries into an in-memory line buffer.
///
/// Produces the same characters as the console formatter with color
/// disabled. Used by unit tests to assert on exact tree geometry.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub lines: Vec<String>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TreeSink for CollectingSink {
    fn entry(&mut self, name: &str, _is_dir: bool, is_last: bool, prefix: &str) -> io::Result<()> {
        self.lines.push(format!("{}{}{}", prefix, connector(is_last), name));
        Ok(())
    }
}
