//! Deserializer — converts PHP array-literal source back into a value tree.
//!
//! Parsing delegates the grammar work to the [`crate::expr`] module and keeps
//! only the projection logic here: a tree-walking reducer over array-literal
//! items, followed by the empty-container disambiguation pass
//! ([`crate::rules::apply_empty_rules`]).
//!
//! # Key semantics
//!
//! - **Keyed vs. positional**: a literal whose items all carry `=>` keys
//!   reduces to an object; bare items reduce to an array. When both appear in
//!   the same literal, the positional bucket wins and keyed entries are
//!   discarded. This is a deliberate sharp edge kept for round-trip fidelity,
//!   not validation-worthy input.
//! - **Numbers** reduce with integer-prefix semantics: `3.14` becomes `3`.
//! - **Function calls** are not evaluated; they are projected back into a
//!   [`PhpValue::Literal`] of the shape `name( arg1, arg2 )`, with string
//!   arguments re-wrapped in single quotes.
//! - **Anything else** (bare constants, `null`) degrades to its source text
//!   as a string — best effort, never an error.
//!
//! # Example
//! ```
//! use arrify_core::{parse, ParseOptions, PhpValue};
//!
//! let value = parse("array(\"foo\"=>array(\"42\",\"52\"));", &ParseOptions::default()).unwrap();
//! assert_eq!(
//!     value,
//!     PhpValue::Object(vec![(
//!         "foo".to_string(),
//!         PhpValue::Array(vec![
//!             PhpValue::String("42".to_string()),
//!             PhpValue::String("52".to_string()),
//!         ]),
//!     )])
//! );
//! ```

use crate::error::Result;
use crate::expr::{self, Entry, Expr};
use crate::rules::apply_empty_rules;
use crate::types::PhpValue;

/// Options for a single parse invocation.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Rule tree mirroring the expected output shape, used to disambiguate
    /// empty containers. `array()` text cannot distinguish "was an empty
    /// object" from "was an empty array"; a rule at the matching key path
    /// replaces the default empty array with its declared value. See
    /// [`apply_empty_rules`].
    pub empty_rules: PhpValue,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            empty_rules: PhpValue::Object(Vec::new()),
        }
    }
}

/// Parse PHP array-literal source into a value tree.
///
/// Syntax errors from the expression grammar propagate unchanged; empty
/// input is one of them. Source that parses but is not a single
/// array-literal expression yields an empty object.
pub fn parse(source: &str, options: &ParseOptions) -> Result<PhpValue> {
    let value = match expr::parse_program(source)? {
        Expr::Array(items) => reduce_items(&items),
        _ => PhpValue::Object(Vec::new()),
    };
    Ok(apply_empty_rules(&value, &options.empty_rules))
}

/// Parse PHP array-literal source and re-encode the result as JSON text —
/// the string-output surface for callers that never touch the value model.
pub fn parse_to_json(source: &str, options: &ParseOptions) -> Result<String> {
    let value = parse(source, options)?;
    Ok(serde_json::to_string(&serde_json::Value::from(value))?)
}

/// Reduce an array literal's item list with the two-bucket rule: keyed items
/// accumulate into an object, bare items into a positional array, and any
/// positional entries make the whole literal positional.
fn reduce_items(items: &[Entry]) -> PhpValue {
    let mut object: Vec<(String, PhpValue)> = Vec::new();
    let mut positional: Vec<PhpValue> = Vec::new();

    for item in items {
        let value = normalize_value(&item.value);
        match &item.key {
            Some(key) => insert_entry(&mut object, key_text(key), value),
            None => positional.push(value),
        }
    }

    if !positional.is_empty() {
        PhpValue::Array(positional)
    } else {
        PhpValue::Object(object)
    }
}

/// Insert a key, overwriting an earlier entry with the same key. Later
/// duplicates win, as they do in PHP array literals.
fn insert_entry(object: &mut Vec<(String, PhpValue)>, key: String, value: PhpValue) {
    if let Some(slot) = object.iter_mut().find(|(k, _)| *k == key) {
        slot.1 = value;
    } else {
        object.push((key, value));
    }
}

/// Project an entry key into its string form. Only string keys are supported;
/// other key kinds degrade to their source text.
fn key_text(key: &Expr) -> String {
    match key {
        Expr::Str(s) => s.clone(),
        other => dump_expr(other),
    }
}

/// Convert one expression node into a value, by node kind.
fn normalize_value(value: &Expr) -> PhpValue {
    match value {
        Expr::Number(raw) => int_prefix(raw),
        Expr::Array(items) if items.is_empty() => PhpValue::Array(Vec::new()),
        Expr::Array(items) => reduce_items(items),
        Expr::Str(s) => PhpValue::String(s.clone()),
        Expr::Bool(b) => PhpValue::Bool(*b),
        Expr::Call { name, args } => PhpValue::Literal(render_call(name, args)),
        other => PhpValue::String(dump_expr(other)),
    }
}

/// Re-serialize a call expression into its literal-call form:
/// `name( arg1, arg2 )` with one space of padding inside the parentheses when
/// arguments exist. String arguments are re-wrapped in single quotes, numbers
/// normalized to their integer prefix, and anything else passed through as
/// source text.
fn render_call(name: &str, args: &[Expr]) -> String {
    let rendered: Vec<String> = args
        .iter()
        .map(|arg| match arg {
            Expr::Str(s) => format!("'{}'", s),
            Expr::Bool(b) => b.to_string(),
            Expr::Number(raw) => match int_prefix(raw) {
                PhpValue::Int(i) => i.to_string(),
                _ => raw.clone(),
            },
            other => dump_expr(other),
        })
        .collect();

    if rendered.is_empty() {
        format!("{}()", name)
    } else {
        format!("{}( {} )", name, rendered.join(", "))
    }
}

/// Integer-prefix parse of a numeric token: sign plus leading digits, the
/// fractional part dropped (`"3.14"` → 3). Tokens whose integer prefix
/// overflows `i64` fall back to a float of that prefix.
fn int_prefix(raw: &str) -> PhpValue {
    let mut end = 0;
    let bytes = raw.as_bytes();
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
    }
    let prefix = &raw[..end];
    match prefix.parse::<i64>() {
        Ok(i) => PhpValue::Int(i),
        Err(_) => PhpValue::Float(prefix.parse::<f64>().unwrap_or(f64::NAN)),
    }
}

/// Generic textual dump for node kinds the reducer has no conversion for.
fn dump_expr(value: &Expr) -> String {
    match value {
        Expr::Null => "null".to_string(),
        Expr::Ident(name) => name.clone(),
        Expr::Number(raw) => raw.clone(),
        Expr::Str(s) => s.clone(),
        Expr::Bool(b) => b.to_string(),
        Expr::Call { name, args } => render_call(name, args),
        Expr::Array(_) => "array".to_string(),
    }
}
