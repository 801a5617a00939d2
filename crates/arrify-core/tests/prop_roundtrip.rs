//! Property-based round-trip tests.
//!
//! Uses `proptest` to generate random value trees and verify that
//! `parse(render(v)) == v` holds across every formatting option, and that
//! formatting options never leak into parsed structure.
//!
//! Known lossy edges excluded from generation (each pinned by a unit test in
//! `roundtrip_tests.rs` instead):
//! - Empty containers (`array()` is ambiguous without an empty rule)
//! - `Null` (reduces to the string "null")
//! - Floats (numbers reduce with integer-prefix semantics)
//! - Strings containing backslashes (escaping is not backslash-safe, matching
//!   the renderer's escape set)

use arrify_core::{parse, render_value, ParseOptions, PhpValue, Quote, RenderOptions};
use proptest::prelude::*;

/// Object keys: identifier-like, non-empty, unique enough in practice.
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,12}").unwrap()
}

/// String values: printable ASCII without backslashes, plus quote characters
/// and newlines (both escape-roundtrip cleanly).
fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z0-9 ,.:=>()\\[\\]{}-]{0,24}").unwrap(),
        prop::string::string_regex("[a-z'\" ]{1,16}").unwrap(),
        Just("line1\nline2".to_string()),
        Just("it's \"quoted\"".to_string()),
    ]
}

fn arb_leaf() -> impl Strategy<Value = PhpValue> {
    prop_oneof![
        (-1_000_000i64..1_000_000i64).prop_map(PhpValue::Int),
        any::<bool>().prop_map(PhpValue::Bool),
        arb_string().prop_map(PhpValue::String),
    ]
}

/// Unique-key object entries: duplicate keys collapse during parsing, so the
/// generator avoids them rather than normalizing afterwards.
fn arb_entries(depth: u32) -> impl Strategy<Value = Vec<(String, PhpValue)>> {
    prop::collection::btree_map(arb_key(), arb_value(depth), 1..5)
        .prop_map(|map| map.into_iter().collect())
}

/// Non-empty containers only; empty ones are the documented ambiguity.
fn arb_value(depth: u32) -> BoxedStrategy<PhpValue> {
    if depth == 0 {
        arb_leaf().boxed()
    } else {
        prop_oneof![
            4 => arb_leaf(),
            1 => prop::collection::vec(arb_value(depth - 1), 1..5).prop_map(PhpValue::Array),
            1 => arb_entries(depth - 1).prop_map(PhpValue::Object),
        ]
        .boxed()
    }
}

/// Roots are containers: a bare scalar program is not an array literal and
/// parses to an empty object by contract.
fn arb_root() -> impl Strategy<Value = PhpValue> {
    prop_oneof![
        arb_entries(2).prop_map(PhpValue::Object),
        prop::collection::vec(arb_value(2), 1..5).prop_map(PhpValue::Array),
    ]
}

fn arb_options() -> impl Strategy<Value = RenderOptions> {
    (
        any::<bool>(),
        1usize..5,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(prettify, indent, space, trailing_comma, single)| RenderOptions {
            prettify,
            indent,
            space,
            trailing_comma,
            quote: if single { Quote::Single } else { Quote::Double },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(400))]

    /// Core property: rendering then parsing reproduces the input tree.
    #[test]
    fn roundtrip_preserves_tree(value in arb_root(), options in arb_options()) {
        let source = render_value(&value, &options);
        let parsed = parse(&source, &ParseOptions::default()).unwrap();
        prop_assert_eq!(
            &parsed,
            &value,
            "roundtrip failed\n  source: {}",
            source
        );
    }

    /// Formatting options affect layout only: every option combination parses
    /// back to the same tree as the minified default.
    #[test]
    fn options_do_not_change_structure(value in arb_root(), options in arb_options()) {
        let default_parsed = parse(
            &render_value(&value, &RenderOptions::default()),
            &ParseOptions::default(),
        ).unwrap();
        let styled_parsed = parse(
            &render_value(&value, &options),
            &ParseOptions::default(),
        ).unwrap();
        prop_assert_eq!(default_parsed, styled_parsed);
    }

    /// Minified output is single-line: no newlines or tabs beyond those
    /// escaped inside string content.
    #[test]
    fn minified_is_single_line(value in arb_root()) {
        let source = render_value(&value, &RenderOptions::default());
        prop_assert!(!source.contains('\n'), "unexpected newline in {}", source);
        prop_assert!(!source.contains('\t'), "unexpected tab in {}", source);
    }

    /// The statement terminator is always present.
    #[test]
    fn output_ends_with_semicolon(value in arb_root(), options in arb_options()) {
        let source = render_value(&value, &options);
        prop_assert!(source.ends_with(';'));
    }

    /// Rendering never panics for any tree, including the excluded kinds.
    #[test]
    fn render_never_panics(value in arb_value(3), options in arb_options()) {
        let _ = render_value(&value, &options);
    }
}
