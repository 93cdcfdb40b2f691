//! Core utilities for assetscan tools.
//!
//! This crate provides shared functionality for scanning web-asset trees,
//! including:
//! - Walking a root directory into a classified file inventory
//! - Lexical resolution of relative reference strings
//! - Enclosing-function context tracking for data references
//! - Rendering the directory tree shown in reports

mod collector;
mod constants;
mod context;
mod resolver;
mod tree;
mod types;

// Re-export public API
pub use collector::collect_inventory;
pub use constants::{DATA_EXTENSIONS, MARKUP_EXTENSIONS, SCRIPT_EXTENSIONS};
pub use context::context_labels;
pub use resolver::{resolve, strip_dot_slash};
pub use tree::render_tree;
pub use types::{FileClass, FileInventory};
