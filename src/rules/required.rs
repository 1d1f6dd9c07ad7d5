//! Requires a property to have a non-empty value.

use crate::value;
use crate::Rule;
use crate::Verdict;

/// The default message template.
const MESSAGE: &str = "%1 is required";

/// Creates the `required` rule.
///
/// Fails when the value is empty: absent, `null`, the empty string, or an
/// empty collection. Any other value passes, including `0` and `false`.
pub fn required() -> Rule {
    Rule::new(|value, _| Verdict::from(!value::is_empty(value))).with_message(MESSAGE)
}
