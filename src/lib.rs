//! Twig - print a directory tree, skipping well-known noise directories

pub mod output;
pub mod tree;

pub use output::{CollectingSink, ConsoleFormatter, TreeSink};
pub use tree::{IGNORED_NAMES, TreePrinter, is_ignored};
