//! Proptest support
//!
//! Strategies that generate class tokens and class strings, including the
//! irregular spacing found in hand written markup.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! microlib-utils = { version = "1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use proptest::prelude::*;

const CLASS_TOKEN: &str = "[a-zA-Z_-][a-zA-Z0-9_-]{0,8}";
const SEPARATOR: &str = " {1,3}";

/// A single class token: no spaces and never empty.
pub fn arb_class_token() -> impl Strategy<Value = String> {
    CLASS_TOKEN
}

/// A class string of up to `max_tokens` tokens joined by single spaces.
pub fn arb_class_name(max_tokens: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(arb_class_token(), 0..=max_tokens).prop_map(|tokens| tokens.join(" "))
}

/// A class string with runs of spaces between tokens and optional leading
/// and trailing spaces.
pub fn arb_irregular_class_name(max_tokens: usize) -> impl Strategy<Value = String> {
    (
        prop::collection::vec((arb_class_token(), SEPARATOR), 1..=max_tokens.max(1)),
        prop::bool::ANY,
    )
        .prop_map(|(parts, leading)| {
            let mut class_name = String::new();
            if leading {
                class_name.push(' ');
            }
            for (token, separator) in parts {
                class_name.push_str(&token);
                class_name.push_str(&separator);
            }
            class_name
        })
}
