//! Proptest support for htmlgen
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. Htmlgen helps you write a proptest by letting you
//! generate arbitrary variable text and environments to expand it with.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! htmlgen = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use proptest::prelude::*;

use crate::environment::Environment;

const VAR_NAMES: &[&str] = &["name", "a", "_x", "item_1", "Title"];
const LITERAL: &str = "[a-z0-9 <>&'\",.!?é]{0,8}";
const VALUE: &str = "[a-zA-Z0-9 <>&'\"]{0,8}";

/// A variable name, sometimes one that no environment binds.
pub fn arb_var_name() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(VAR_NAMES).prop_map(|name| name.to_string()),
        1 => "[a-zA-Z_][a-zA-Z0-9_]{0,6}",
    ]
}

fn arb_piece() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => LITERAL.prop_map(|s| s.to_string()),
        3 => arb_var_name().prop_map(|name| format!("${}", name)),
        1 => Just("$$".to_string()),
        1 => Just("$".to_string()),
    ]
}

/// Text for variable text nodes: literal runs mixed with variable
/// references, escaped delimiters and stray delimiters.
pub fn arb_template() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_piece(), 0..8).prop_map(|pieces| pieces.concat())
}

/// An environment binding some of the variable names [`arb_template`]
/// uses.
pub fn arb_environment() -> impl Strategy<Value = Environment> {
    prop::collection::vec(
        (prop::sample::select(VAR_NAMES), VALUE.prop_map(|s| s.to_string())),
        0..5,
    )
    .prop_map(|bindings| bindings.into_iter().collect())
}
