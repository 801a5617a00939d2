//! Renderer — converts a value tree into PHP array-literal source.
//!
//! The renderer is a pure recursive descent over [`PhpValue`], concatenating
//! bottom-up into a single output string:
//!
//! - **Objects**: `array("key" => value, ...)` in insertion order
//! - **Arrays**: `array(value, ...)`, positionally keyed
//! - **Strings**: quote-wrapped with both quote characters and newlines escaped
//! - **Literals**: emitted verbatim, bypassing every other rule
//! - **Minified by default**: no indentation, no spaces around `=>`; enable
//!   `prettify` for one-entry-per-line output with configurable indentation
//!
//! The whole render ends with a `;` statement terminator, so the output can be
//! pasted into PHP source as-is.
//!
//! # Example
//! ```
//! use arrify_core::{arrify, RenderOptions};
//! let json = r#"{"foo":["42","52"]}"#;
//! let php = arrify(json, &RenderOptions::default());
//! assert_eq!(php, "array(\"foo\"=>array(\"42\",\"52\"));");
//! ```

use crate::types::PhpValue;

/// The quote character wrapping rendered strings and object keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quote {
    Single,
    #[default]
    Double,
}

impl Quote {
    fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

/// Formatting options for a single render invocation. Options affect text
/// layout only, never the parsed-back value shape.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Insert newlines and indentation between entries. Off by default:
    /// minified single-line output.
    pub prettify: bool,
    /// Indentation units per tree level. Ignored (treated as 0) unless
    /// `prettify` is set.
    pub indent: usize,
    /// Indent with spaces instead of tabs.
    pub space: bool,
    /// Emit a comma after the last entry of every non-empty literal.
    pub trailing_comma: bool,
    /// Quote character for strings and keys.
    pub quote: Quote,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            prettify: false,
            indent: 1,
            space: false,
            trailing_comma: false,
            quote: Quote::Double,
        }
    }
}

/// Resolved per-invocation layout: zero-width indentation when minified.
struct Layout {
    indent: usize,
    indent_char: char,
    quote: char,
    trailing_comma: bool,
}

impl Layout {
    fn new(options: &RenderOptions) -> Self {
        Self {
            indent: if options.prettify { options.indent } else { 0 },
            indent_char: if options.space { ' ' } else { '\t' },
            quote: options.quote.as_char(),
            trailing_comma: options.trailing_comma,
        }
    }

    fn has_indent(&self) -> bool {
        self.indent > 0
    }

    fn push_indent(&self, out: &mut String, depth: usize) {
        if self.has_indent() {
            for _ in 0..self.indent * depth {
                out.push(self.indent_char);
            }
        }
    }

    fn push_newline(&self, out: &mut String) {
        if self.has_indent() {
            out.push('\n');
        }
    }

    fn push_space(&self, out: &mut String) {
        if self.has_indent() {
            out.push(' ');
        }
    }
}

/// Render a JSON document as a PHP array literal.
///
/// The input is normalized first: valid JSON text is parsed into the value
/// model; unparseable text degrades to an empty object and renders as
/// `array();`. Falsy scalar documents (`null`, `false`, zero, the empty
/// string) degrade the same way; truthy scalars render as bare values. This
/// entry point never fails.
pub fn arrify(json: &str, options: &RenderOptions) -> String {
    let value = serde_json::from_str::<serde_json::Value>(json)
        .map(PhpValue::from)
        .map(degrade_falsy)
        .unwrap_or_else(|_| PhpValue::Object(Vec::new()));
    render_value(&value, options)
}

/// Collapse falsy scalars to the empty object, the same degradation
/// unparseable input gets. Containers pass through even when empty.
fn degrade_falsy(value: PhpValue) -> PhpValue {
    let falsy = match &value {
        PhpValue::Null => true,
        PhpValue::Bool(b) => !b,
        PhpValue::Int(i) => *i == 0,
        PhpValue::Float(f) => *f == 0.0,
        PhpValue::String(s) => s.is_empty(),
        _ => false,
    };
    if falsy {
        PhpValue::Object(Vec::new())
    } else {
        value
    }
}

/// Render a native value tree as a PHP array literal.
///
/// Unlike [`arrify`], this path can carry [`PhpValue::Literal`] values, which
/// are emitted verbatim — the escape hatch for injecting function calls or
/// constants into otherwise-literal output.
pub fn render_value(value: &PhpValue, options: &RenderOptions) -> String {
    let layout = Layout::new(options);
    let mut out = String::new();
    render_node(value, &layout, 1, &mut out);
    out.push(';');
    out
}

/// Recursive render dispatch. `depth` is the tree level, starting at 1 for
/// the entries of the outermost literal.
fn render_node(value: &PhpValue, layout: &Layout, depth: usize, out: &mut String) {
    match value {
        PhpValue::Literal(source) => out.push_str(source),
        PhpValue::Object(entries) => render_object(entries, layout, depth, out),
        PhpValue::Array(items) => render_array(items, layout, depth, out),
        PhpValue::String(s) => {
            out.push(layout.quote);
            push_escaped(s, out);
            out.push(layout.quote);
        }
        PhpValue::Null => out.push_str("null"),
        PhpValue::Float(f) if f.is_nan() => out.push_str("''"),
        PhpValue::Float(f) => out.push_str(&f.to_string()),
        PhpValue::Int(i) => out.push_str(&i.to_string()),
        PhpValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
    }
}

/// Emit `array("key" => value, ...)`. Entries keep insertion order; the
/// closing parenthesis is indented one level shallower than the entries.
fn render_object(entries: &[(String, PhpValue)], layout: &Layout, depth: usize, out: &mut String) {
    out.push_str("array(");
    if !entries.is_empty() {
        layout.push_newline(out);
    }

    let size = entries.len();
    for (index, (key, value)) in entries.iter().enumerate() {
        layout.push_indent(out, depth);
        out.push(layout.quote);
        push_escaped(key, out);
        out.push(layout.quote);
        layout.push_space(out);
        out.push_str("=>");
        layout.push_space(out);
        render_node(value, layout, depth + 1, out);

        let last = index + 1 == size;
        if !last || layout.trailing_comma {
            out.push(',');
        }
        if !last {
            layout.push_newline(out);
        }
    }

    if !entries.is_empty() {
        layout.push_newline(out);
        layout.push_indent(out, depth.saturating_sub(1));
    }
    out.push(')');
}

/// Emit `array(value, ...)` — the same bracketing as objects, without keys.
fn render_array(items: &[PhpValue], layout: &Layout, depth: usize, out: &mut String) {
    out.push_str("array(");

    let size = items.len();
    for (index, item) in items.iter().enumerate() {
        layout.push_newline(out);
        layout.push_indent(out, depth);
        render_node(item, layout, depth + 1, out);

        let last = index + 1 == size;
        if !last || layout.trailing_comma {
            out.push(',');
        }
        if last {
            layout.push_newline(out);
            layout.push_indent(out, depth.saturating_sub(1));
        }
    }

    out.push(')');
}

/// Escape a string for quote-wrapping: both quote characters and newlines are
/// backslash-escaped regardless of which quote wraps the output, so switching
/// quote styles never changes the escaped body.
fn push_escaped(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
}
