//! Requires a property value to be numeric.

use crate::value;
use crate::Rule;
use crate::Verdict;

/// The default message template.
const MESSAGE: &str = "%1 is not a number";

/// Creates the `number` rule.
///
/// Passes when the value is a finite number or a string that parses as one.
/// Like every non-`required` rule, it is skipped entirely when the property
/// has no value, so an optional numeric field only validates when something
/// was actually supplied.
pub fn number() -> Rule {
    Rule::new(|value, _| {
        Verdict::from(value.is_some_and(|v| value::as_number(v).is_some()))
    })
    .with_message(MESSAGE)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::Context;

    use super::*;

    #[test]
    fn it_passes_numbers_and_numeric_strings() {
        let host = serde_json::Map::new();
        let cx = Context::new("balance", &host);
        let rule = number();

        assert!(rule.check(Some(&json!(12.59)), &cx).passed());
        assert!(rule.check(Some(&json!("4111111111111111")), &cx).passed());
        assert!(rule.check(Some(&json!(0)), &cx).passed());
    }

    #[test]
    fn it_fails_non_numeric_values() {
        let host = serde_json::Map::new();
        let cx = Context::new("balance", &host);
        let rule = number();

        assert!(!rule.check(Some(&json!("twelve")), &cx).passed());
        assert!(!rule.check(Some(&json!(true)), &cx).passed());
        assert!(!rule.check(None, &cx).passed());
    }
}
