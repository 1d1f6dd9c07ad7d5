//! Resolution of rule names into runnable rules.

use crate::ConfigError;
use crate::FieldRules;
use crate::Registry;
use crate::Rule;

/// A rule resolved for one (property, rule name) pair: the merged definition
/// bound to the name it resolved under.
///
/// Resolution produces a fresh value every time; nothing mutable is shared
/// across properties or validation runs.
#[derive(Clone, Debug)]
pub(crate) struct Resolved {
    /// The rule name the definition resolved under.
    pub(crate) name: String,

    /// The merged rule definition.
    pub(crate) rule: Rule,
}

/// Resolves a rule name for a property against the field's inline overrides
/// and the registry.
///
/// The policy, in order:
///
/// 1. An override merged over a registry definition of the same name: the
///    override wins on every part it carries, the registry definition fills
///    the rest (including the check function, so a message-only override of a
///    built-in keeps the built-in check).
/// 2. An override with no registry counterpart is a fully custom rule; it
///    must carry its own check function, and the absence of one is a
///    [`ConfigError::MissingCheck`] here, at resolution time, not later when
///    the rule would first run.
/// 3. A registry definition alone is used as-is.
/// 4. Neither is a [`ConfigError::UnknownRule`].
pub(crate) fn resolve(
    registry: &Registry,
    field: &FieldRules,
    key: &str,
    name: &str,
) -> Result<Resolved, ConfigError> {
    let rule = match (field.override_for(name), registry.get(name)) {
        (Some(custom), Some(builtin)) => Rule {
            check: custom.check.clone().unwrap_or_else(|| builtin.check.clone()),
            message: custom.message.clone().or_else(|| builtin.message.clone()),
            subject: custom.subject.clone().or_else(|| builtin.subject.clone()),
        },
        (Some(custom), None) => Rule {
            check: custom.check.clone().ok_or_else(|| ConfigError::MissingCheck {
                key: key.to_string(),
                rule: name.to_string(),
            })?,
            message: custom.message.clone(),
            subject: custom.subject.clone(),
        },
        (None, Some(builtin)) => builtin.clone(),
        (None, None) => {
            return Err(ConfigError::UnknownRule {
                key: key.to_string(),
                rule: name.to_string(),
            });
        }
    };

    Ok(Resolved {
        name: name.to_string(),
        rule,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::rules;
    use crate::Context;
    use crate::RuleOverride;
    use crate::Verdict;

    use super::*;

    #[test]
    fn it_uses_a_registry_definition_as_is() {
        let registry = Registry::new();
        let field = FieldRules::new(["required"]);

        let resolved = resolve(&registry, &field, "name", "required").unwrap();
        assert_eq!(resolved.name, "required");
        assert_eq!(resolved.rule.message(), Some("%1 is required"));
    }

    #[test]
    fn it_merges_an_override_over_a_registry_definition() {
        let registry = Registry::new();
        let field = FieldRules::new(["required"]).with_override(
            rules::REQUIRED,
            RuleOverride::new()
                .with_message("%1 must not be blank")
                .with_subject("full name"),
        );

        let resolved = resolve(&registry, &field, "name", "required").unwrap();
        assert_eq!(resolved.rule.message(), Some("%1 must not be blank"));
        assert_eq!(resolved.rule.subject(), Some("full name"));

        // The built-in check survives a message-only override.
        let host = serde_json::Map::new();
        let cx = Context::new("name", &host);
        assert!(!resolved.rule.check(Some(&json!("")), &cx).passed());
        assert!(resolved.rule.check(Some(&json!("x")), &cx).passed());
    }

    #[test]
    fn it_accepts_a_fully_custom_rule() {
        let registry = Registry::new();
        let field = FieldRules::new(["cvv_length"]).with_override(
            "cvv_length",
            RuleOverride::new()
                .with_check(|_, _| Verdict::fail())
                .with_message("invalid %1"),
        );

        let resolved = resolve(&registry, &field, "cvv", "cvv_length").unwrap();
        assert_eq!(resolved.rule.message(), Some("invalid %1"));
    }

    #[test]
    fn it_rejects_a_custom_rule_without_a_check() {
        let registry = Registry::new();
        let field =
            FieldRules::new(["cvv_length"]).with_override("cvv_length", RuleOverride::new());

        let error = resolve(&registry, &field, "cvv", "cvv_length").unwrap_err();
        assert_eq!(
            error,
            ConfigError::MissingCheck {
                key: "cvv".to_string(),
                rule: "cvv_length".to_string(),
            }
        );
    }

    #[test]
    fn it_rejects_an_unknown_rule_name() {
        let registry = Registry::new();
        let field = FieldRules::new(["phone"]);

        let error = resolve(&registry, &field, "phone", "phone").unwrap_err();
        assert_eq!(
            error,
            ConfigError::UnknownRule {
                key: "phone".to_string(),
                rule: "phone".to_string(),
            }
        );
    }
}
