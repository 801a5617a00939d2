//! # arrify-core
//!
//! Bidirectional codec between JSON-like value trees and PHP array-literal
//! source (`array(key => value, ...)`).
//!
//! The renderer turns a value tree (or JSON text) into literal PHP, with
//! configurable indentation, quote style, and trailing commas, plus a raw
//! "literal" escape hatch for injecting unescaped code fragments such as
//! function calls. The parser walks the literal text back into a value tree,
//! with a caller-supplied rule tree disambiguating the one structural
//! ambiguity: `array()` is both the empty object and the empty array.
//!
//! ## Quick start
//!
//! ```rust
//! use arrify_core::{arrify, parse, ParseOptions, RenderOptions, PhpValue};
//!
//! // JSON → PHP
//! let json = r#"{"foo":["42","52"]}"#;
//! let php = arrify(json, &RenderOptions::default());
//! assert_eq!(php, "array(\"foo\"=>array(\"42\",\"52\"));");
//!
//! // PHP → value tree (roundtrip)
//! let back = parse(&php, &ParseOptions::default()).unwrap();
//! assert_eq!(back.get("foo").unwrap(), &PhpValue::Array(vec![
//!     PhpValue::String("42".into()),
//!     PhpValue::String("52".into()),
//! ]));
//! ```
//!
//! ## Modules
//!
//! - [`render`] — value tree / JSON text → PHP array-literal source
//! - [`parse`] — PHP array-literal source → value tree
//! - [`expr`] — the PHP expression grammar backing the parser
//! - [`rules`] — empty-container disambiguation pass
//! - [`error`] — error types for the parsing path
//! - [`types`] — the `PhpValue` tree both pipelines share

pub mod error;
pub mod expr;
pub mod parse;
pub mod render;
pub mod rules;
pub mod types;

pub use error::ArrifyError;
pub use parse::{parse, parse_to_json, ParseOptions};
pub use render::{arrify, render_value, Quote, RenderOptions};
pub use rules::apply_empty_rules;
pub use types::{literal, PhpValue};
