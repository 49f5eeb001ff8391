//! Directory tree traversal
//!
//! This module provides the recursive walk that drives twig:
//!
//! - `ignore` - the fixed set of noise names pruned from every listing
//! - `printer` - `TreePrinter`, the pre-order traversal that emits tree lines

mod ignore;
mod printer;

pub use ignore::{IGNORED_NAMES, is_ignored};
pub use printer::TreePrinter;
