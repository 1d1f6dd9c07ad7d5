//! Built-in rule definitions.
//!
//! These ship pre-registered in [`Registry::new()`](crate::Registry::new)
//! under the names below. Registering a different definition under the same
//! name replaces the built-in.

mod number;
mod required;

pub use number::number;
pub use required::required;

/// The registered name of the [`required`] rule.
///
/// The name is load-bearing for the evaluator: the rule registered under it
/// always runs, while every other rule is skipped when the value is empty.
pub const REQUIRED: &str = "required";

/// The registered name of the [`number`] rule.
pub const NUMBER: &str = "number";
