//! Empty-container disambiguation — the rule-tree pass run after parsing.
//!
//! `array()` is the rendering of both the empty object and the empty array,
//! so the text alone cannot say which one a parsed literal was. The caller
//! supplies a rule tree mirroring the expected output shape; wherever a key
//! exists in both the parsed object and the rule tree, a structurally empty
//! parsed value is replaced by the rule's declared value (typically an
//! explicit empty object). Non-empty values recurse into the nested rule so
//! corrections apply at any depth.
//!
//! The pass builds a fresh tree rather than mutating the parsed result, so
//! `parse` stays referentially transparent and rule trees can be shared
//! between calls.
//!
//! # Example
//!
//! ```
//! use arrify_core::{apply_empty_rules, PhpValue};
//!
//! let parsed = PhpValue::Object(vec![
//!     ("emptyobj".to_string(), PhpValue::Array(vec![])),
//! ]);
//! let rules = PhpValue::Object(vec![
//!     ("emptyobj".to_string(), PhpValue::Object(vec![])),
//! ]);
//! let fixed = apply_empty_rules(&parsed, &rules);
//! assert_eq!(fixed.get("emptyobj"), Some(&PhpValue::Object(vec![])));
//! ```

use crate::types::PhpValue;

/// Apply an empty-container rule tree to a parsed value, producing a new
/// tree. Keys without a matching rule pass through untouched; non-object
/// values are returned as-is.
pub fn apply_empty_rules(value: &PhpValue, rules: &PhpValue) -> PhpValue {
    let PhpValue::Object(rule_entries) = rules else {
        return value.clone();
    };
    if rule_entries.is_empty() {
        return value.clone();
    }

    match value {
        PhpValue::Object(entries) => {
            let corrected = entries
                .iter()
                .map(|(key, child)| {
                    let corrected = match rules.get(key) {
                        Some(rule) if child.is_empty_container() => rule.clone(),
                        Some(rule) => apply_empty_rules(child, rule),
                        None => child.clone(),
                    };
                    (key.clone(), corrected)
                })
                .collect();
            PhpValue::Object(corrected)
        }
        other => other.clone(),
    }
}
