//! # gson-core
//!
//! A single-pass recursive-descent parser for a JSON-like grammar. It turns an
//! in-memory byte buffer into a [`Value`] tree and does nothing else: no
//! serialization, no streaming, no schema checks.
//!
//! ## Quick start
//!
//! ```rust
//! use gson_core::{parse, Value};
//!
//! let value = parse(r#"{"name": "Alice", "scores": [95, 87.5]}"#).unwrap();
//! assert_eq!(value.get("name"), Some(&Value::String("Alice".into())));
//! assert_eq!(value.get("scores").and_then(|s| s.as_array()).map(|s| s.len()), Some(2));
//! ```
//!
//! Strings are taken verbatim between quotes (escapes are not decoded), and number
//! literals are typed by their spelling: `10` is an integer, `10.0` a float.
//!
//! ## Modules
//!
//! - [`parser`] — value dispatcher, per-type scanners, and the `parse*` entry points
//! - [`scanner`] — byte classifiers and bounds-checked cursor helpers
//! - [`value`] — the `Value` tree
//! - [`error`] — `ParseError` and its `ErrorKind`

pub mod error;
pub mod parser;
pub mod scanner;
pub mod value;

pub use error::{ErrorKind, ParseError, Result};
pub use parser::{parse, parse_prefix, parse_with_options, ParseOptions, DEFAULT_MAX_DEPTH};
pub use value::{Map, Value, ValueKind};
