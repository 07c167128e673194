//! # yaml2php-emit
//!
//! Renders a parsed YAML document as a loadable PHP source file of the form
//! `<?php\nreturn array(...);`, so PHP applications can consume YAML-authored
//! configuration without a YAML parser at load time.
//!
//! The emitter owns all conversion semantics: scalar typing, string
//! quoting/escaping, structural nesting, pretty-printing, merge-key
//! suppression, and `!include` resolution across files. Parsing itself is
//! delegated to `yaml2php-ast`.
//!
//! ## Example
//!
//! ```rust
//! use yaml2php_emit::{from_string, EmitOptions};
//!
//! let php = from_string("port: 8080", &EmitOptions::default()).unwrap();
//! assert_eq!(php, "<?php\nreturn array('port' => 8080);");
//! ```
//!
//! Strings matching `%PHP{<expr>}` are emitted as raw PHP expressions
//! instead of quoted strings, letting YAML authors reference constants:
//!
//! ```rust
//! use yaml2php_emit::{from_string, EmitOptions};
//!
//! let php = from_string("level: '%PHP{E_ALL}'", &EmitOptions::default()).unwrap();
//! assert_eq!(php, "<?php\nreturn array('level' => E_ALL);");
//! ```

mod emitter;
mod error;
mod format;

pub use emitter::{EmitOptions, from_file, from_string, from_string_with_base};
pub use error::{Error, Result};
