//! Evaluation of a single property against its configured rules.

use serde_json::Value;

use crate::message;
use crate::resolve::resolve;
use crate::rules;
use crate::value;
use crate::ConfigError;
use crate::Context;
use crate::Failure;
use crate::Options;
use crate::Registry;
use crate::Schema;
use crate::Validatable;
use crate::Verdict;

/// Evaluates one property key against its configured rules.
///
/// Rules run in their declared order. The rule registered as
/// [`rules::REQUIRED`] always runs; every other rule runs only when the
/// (normalized) value is non-empty, so optional fields validate their other
/// rules only when a value was actually supplied. The first failing rule
/// produces the key's single [`Failure`] and ends the key's evaluation.
///
/// A key with no resolvable rule list is not an error: it is reported through
/// a warning diagnostic and skipped as always-valid, so one misconfigured key
/// cannot halt the rest of the pass. Unresolvable rule *names* are
/// [`ConfigError`]s, surfaced even for rules that gating would have skipped.
pub(crate) fn evaluate_key(
    host: &mut dyn Validatable,
    registry: &Registry,
    schema: &Schema,
    key: &str,
    options: &Options,
) -> Result<Option<Failure>, ConfigError> {
    let field = match schema.get(key) {
        Some(field) if !field.rules().is_empty() => field,
        _ => {
            tracing::warn!("no validation rules configured for property `{key}`");
            return Ok(None);
        }
    };

    let current = normalize(host, key, options);
    let cx = Context::new(key, host);

    for name in field.rules() {
        let resolved = resolve(registry, field, key, name)?;

        if name != rules::REQUIRED && value::is_empty(current.as_ref()) {
            continue;
        }

        if let Verdict::Fail(args) = resolved.rule.check(current.as_ref(), &cx) {
            let message = match options.squelch {
                true => None,
                false => {
                    let template =
                        resolved
                            .rule
                            .message()
                            .ok_or_else(|| ConfigError::MissingMessage {
                                key: key.to_string(),
                                rule: name.to_string(),
                            })?;
                    let subject = resolved.rule.subject().unwrap_or(key);

                    Some(message::format(template, subject, &args))
                }
            };

            return Ok(Some(Failure::new(key, resolved.name, message)));
        }
    }

    Ok(None)
}

/// Reads the property's current value, trimming string values per the
/// options.
///
/// With `trim_apply` set, the trimmed string is written back to the host —
/// the engine's only mutation of host state. Non-string values pass through
/// unchanged.
fn normalize(host: &mut dyn Validatable, key: &str, options: &Options) -> Option<Value> {
    let current = host.property(key);

    if !options.trim {
        return current;
    }

    match current {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.len() == s.len() {
                return Some(Value::String(s));
            }

            let trimmed = trimmed.to_string();
            if options.trim_apply {
                host.set_property(key, Value::String(trimmed.clone()));
            }

            Some(Value::String(trimmed))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use serde_json::Map;

    use crate::FieldRules;

    use super::*;

    /// A host with a single `name` property.
    fn host_with_name(value: serde_json::Value) -> Map<String, serde_json::Value> {
        let mut host = Map::new();
        host.insert("name".to_string(), value);
        host
    }

    #[test]
    fn it_skips_non_required_rules_on_empty_values() {
        let registry = Registry::new();
        let schema = Schema::new().field("name", FieldRules::new(["number"]));
        let mut host = Map::new();

        let failure = evaluate_key(
            &mut host,
            &registry,
            &schema,
            "name",
            &Options::default(),
        )
        .unwrap();
        assert_eq!(failure, None);
    }

    #[test]
    fn it_always_runs_the_required_rule() {
        let registry = Registry::new();
        let schema = Schema::new().field("name", FieldRules::new(["required"]));
        let mut host = Map::new();

        let failure = evaluate_key(
            &mut host,
            &registry,
            &schema,
            "name",
            &Options::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(failure.rule(), "required");
        assert_eq!(failure.message(), Some("name is required"));
    }

    #[test]
    fn it_stops_at_the_first_failing_rule() {
        let registry = Registry::new();
        let schema = Schema::new().field("name", FieldRules::new(["required", "number"]));
        let mut host = host_with_name(json!(null));

        let failure = evaluate_key(
            &mut host,
            &registry,
            &schema,
            "name",
            &Options::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(failure.rule(), "required");
    }

    #[test]
    fn it_skips_an_unconfigured_key_without_failing_the_pass() {
        let registry = Registry::new();
        let schema = Schema::new().field("name", FieldRules::new::<[&str; 0]>([]));
        let mut host = Map::new();

        let failure = evaluate_key(
            &mut host,
            &registry,
            &schema,
            "name",
            &Options::default(),
        )
        .unwrap();
        assert_eq!(failure, None);

        // A key absent from the schema entirely behaves the same way.
        let failure = evaluate_key(
            &mut host,
            &registry,
            &schema,
            "missing",
            &Options::default(),
        )
        .unwrap();
        assert_eq!(failure, None);
    }

    #[test]
    fn it_surfaces_unknown_rules_even_when_gating_would_skip_them() {
        let registry = Registry::new();
        let schema = Schema::new().field("name", FieldRules::new(["phone"]));
        let mut host = Map::new();

        let error = evaluate_key(
            &mut host,
            &registry,
            &schema,
            "name",
            &Options::default(),
        )
        .unwrap_err();
        assert_eq!(
            error,
            ConfigError::UnknownRule {
                key: "name".to_string(),
                rule: "phone".to_string(),
            }
        );
    }

    #[test]
    fn it_trims_and_writes_back_by_default() {
        let mut host = host_with_name(json!("  Michael  "));

        let value = normalize(&mut host, "name", &Options::default());
        assert_eq!(value, Some(json!("Michael")));
        assert_eq!(host.get("name"), Some(&json!("Michael")));
    }

    #[test]
    fn it_trims_without_writing_back_when_asked() {
        let mut host = host_with_name(json!("  Michael  "));

        let value = normalize(&mut host, "name", &Options::default().trim_apply(false));
        assert_eq!(value, Some(json!("Michael")));
        assert_eq!(host.get("name"), Some(&json!("  Michael  ")));
    }

    #[test]
    fn it_leaves_values_untouched_without_trim() {
        let mut host = host_with_name(json!("  Michael  "));

        let value = normalize(&mut host, "name", &Options::default().trim(false));
        assert_eq!(value, Some(json!("  Michael  ")));

        let mut host = host_with_name(json!(42));
        let value = normalize(&mut host, "name", &Options::default());
        assert_eq!(value, Some(json!(42)));
    }
}
