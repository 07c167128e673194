//! # yaml2php-ast
//!
//! YAML document loading for the yaml2php converter.
//!
//! This crate wraps the `yaml-rust2` event parser and builds an owned, typed
//! AST (`Node`) with exactly the node kinds the emitter needs: scalars with
//! inferred primitive types, maps as ordered key/value entry lists,
//! sequences, and `!include` references to other documents.
//!
//! ## Example
//!
//! ```rust
//! use yaml2php_ast::parse_document;
//!
//! let doc = parse_document("title: My App").unwrap().unwrap();
//! assert!(doc.is_map());
//! assert!(doc.get("title").is_some());
//! ```

mod error;
mod node;
mod parser;

pub use error::{Error, Result};
pub use node::{MapEntry, Node, Scalar};
pub use parser::parse_document;
