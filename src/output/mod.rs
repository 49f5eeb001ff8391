//! Tree rendering
//!
//! - `sink` - the `TreeSink` trait the traversal emits entries through,
//!   plus an in-memory collector used by tests
//! - `console` - termcolor-backed formatter for terminal output

mod console;
mod sink;

pub use console::ConsoleFormatter;
pub use sink::{CollectingSink, TreeSink, connector};
