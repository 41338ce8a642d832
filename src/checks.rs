// src/checks.rs
//! AST-based secret detection checks.

mod private_keys;

use tree_sitter::Node;

pub use private_keys::check_private_keys;

/// Context for running checks on a single file.
pub struct CheckContext<'a> {
    pub root: Node<'a>,
    pub source: &'a str,
    pub filename: &'a str,
}
