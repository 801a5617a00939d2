//! The PHP-side value model shared by the serializer and the deserializer.
//!
//! `PhpValue` mirrors JSON types but separates integers from floats and uses
//! `Vec<(String, PhpValue)>` for objects to maintain insertion order without
//! depending on `IndexMap`. It adds one variant JSON has no counterpart for:
//! [`PhpValue::Literal`], a raw PHP fragment emitted verbatim by the renderer
//! (function calls, constants, anything the caller wants unescaped).

/// A value in a PHP array literal.
#[derive(Debug, Clone, PartialEq)]
pub enum PhpValue {
    Null,
    Bool(bool),
    Int(i64),
    /// No dedicated formatting path; rendered via `Display`. `NaN` renders
    /// as the empty-string marker `''` rather than a keyword.
    Float(f64),
    String(String),
    Array(Vec<PhpValue>),
    /// Key-value pairs in insertion order. Keys are always strings.
    Object(Vec<(String, PhpValue)>),
    /// Raw PHP source, bypassing all quoting and escaping.
    Literal(String),
}

impl PhpValue {
    /// An empty object and an empty array render to the same `array()` text,
    /// which is what the empty-rule pass disambiguates on the way back.
    pub fn is_empty_container(&self) -> bool {
        match self {
            PhpValue::Array(items) => items.is_empty(),
            PhpValue::Object(entries) => entries.is_empty(),
            _ => false,
        }
    }

    /// Look up a key in an object value. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&PhpValue> {
        match self {
            PhpValue::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Tag a raw PHP fragment so the renderer emits it verbatim.
///
/// ```
/// use arrify_core::{literal, render_value, RenderOptions};
/// use arrify_core::PhpValue;
///
/// let value = PhpValue::Object(vec![
///     ("galaxy".to_string(), literal("__php_fn(\"andromeda\")")),
/// ]);
/// let php = render_value(&value, &RenderOptions::default());
/// assert_eq!(php, "array(\"galaxy\"=>__php_fn(\"andromeda\"));");
/// ```
pub fn literal(source: impl Into<String>) -> PhpValue {
    PhpValue::Literal(source.into())
}

impl From<serde_json::Value> for PhpValue {
    /// Convert a parsed JSON document into the PHP value model. Relies on
    /// `serde_json`'s `preserve_order` feature so object entries keep their
    /// original insertion order.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => PhpValue::Null,
            serde_json::Value::Bool(b) => PhpValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    PhpValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    PhpValue::Float(f)
                } else {
                    // u64 above i64::MAX with no f64 form; should not occur
                    PhpValue::Float(n.as_u64().map(|u| u as f64).unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => PhpValue::String(s),
            serde_json::Value::Array(items) => {
                PhpValue::Array(items.into_iter().map(PhpValue::from).collect())
            }
            serde_json::Value::Object(map) => {
                PhpValue::Object(map.into_iter().map(|(k, v)| (k, PhpValue::from(v))).collect())
            }
        }
    }
}

impl From<PhpValue> for serde_json::Value {
    /// Re-encode a PHP value as JSON. `Literal` carries no JSON structure and
    /// serializes as its raw source text; a non-finite `Float` becomes null.
    fn from(value: PhpValue) -> Self {
        match value {
            PhpValue::Null => serde_json::Value::Null,
            PhpValue::Bool(b) => serde_json::Value::Bool(b),
            PhpValue::Int(i) => serde_json::Value::Number(i.into()),
            PhpValue::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            PhpValue::String(s) => serde_json::Value::String(s),
            PhpValue::Literal(s) => serde_json::Value::String(s),
            PhpValue::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            PhpValue::Object(entries) => {
                let mut map = serde_json::Map::new();
                for (k, v) in entries {
                    map.insert(k, serde_json::Value::from(v));
                }
                serde_json::Value::Object(map)
            }
        }
    }
}
