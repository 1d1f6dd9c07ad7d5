//! The host seam and the validation entry point.

use serde_json::Map;
use serde_json::Value;

use crate::evaluate::evaluate_key;
use crate::ConfigError;
use crate::Options;
use crate::Registry;
use crate::Report;
use crate::Schema;

/// A host object the engine can validate.
///
/// The engine only ever reads properties through this trait, with one
/// exception: the trim-apply normalization step writes a trimmed string back
/// through [`set_property`](Validatable::set_property).
///
/// An absent property ([`None`]) and a property set to [`Value::Null`] are
/// distinct: both are "empty" to the `required` rule, but hosts backed by
/// maps naturally produce the former and form models the latter.
pub trait Validatable {
    /// Gets the current value of a property, by key.
    fn property(&self, key: &str) -> Option<Value>;

    /// Sets the value of a property, by key.
    fn set_property(&mut self, key: &str, value: Value);
}

impl Validatable for Map<String, Value> {
    fn property(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }

    fn set_property(&mut self, key: &str, value: Value) {
        self.insert(key.to_string(), value);
    }
}

/// The validation engine: a registry and a schema bound together, ready to
/// run against host objects.
///
/// The validator borrows its collaborators, so one registry and one schema
/// can serve any number of hosts (and any number of validators) at once. A
/// run is synchronous and runs to completion on the caller's thread.
///
/// # Examples
///
/// ```
/// use fieldcheck::FieldRules;
/// use fieldcheck::Registry;
/// use fieldcheck::Schema;
/// use fieldcheck::Validator;
/// use serde_json::json;
///
/// let registry = Registry::new();
/// let schema = Schema::new()
///     .field("name", FieldRules::new(["required"]))
///     .field("balance", FieldRules::new(["required", "number"]));
///
/// let mut card = serde_json::Map::new();
/// card.insert("balance".to_string(), json!("twelve"));
///
/// let report = Validator::new(&registry, &schema).validate_all(&mut card)?;
///
/// assert!(!report.is_valid());
/// assert_eq!(report.message_for("name"), Some("name is required"));
/// assert_eq!(report.message_for("balance"), Some("balance is not a number"));
///
/// # Ok::<(), fieldcheck::ConfigError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Validator<'a> {
    /// The rule catalog.
    registry: &'a Registry,

    /// The per-property rule configuration.
    schema: &'a Schema,
}

impl<'a> Validator<'a> {
    /// Creates a validator from a registry and a schema.
    pub fn new(registry: &'a Registry, schema: &'a Schema) -> Self {
        Self { registry, schema }
    }

    /// Validates a host object into a caller-owned report.
    ///
    /// Without [`Options::properties`], this is a whole-object run: the
    /// report is cleared and every key in the schema is evaluated, in
    /// declaration order. With it, this is a scoped run: exactly the listed
    /// keys are evaluated and only their entries are replaced or cleared —
    /// every other key keeps its prior state, so scoped runs compose
    /// predictably.
    ///
    /// A [`ConfigError`] aborts the call: it means the schema itself is
    /// broken. Ordinary validation failures are never errors; they land in
    /// the report.
    pub fn validate(
        &self,
        host: &mut dyn Validatable,
        report: &mut Report,
        options: &Options,
    ) -> Result<(), ConfigError> {
        match &options.properties {
            None => {
                report.clear();
                for key in self.schema.keys() {
                    if let Some(failure) =
                        evaluate_key(host, self.registry, self.schema, key, options)?
                    {
                        report.insert(failure);
                    }
                }
            }
            Some(keys) => {
                for key in keys {
                    match evaluate_key(host, self.registry, self.schema, key, options)? {
                        Some(failure) => report.insert(failure),
                        None => report.remove(key),
                    }
                }
            }
        }

        Ok(())
    }

    /// Runs a whole-object validation with default options into a fresh
    /// report.
    pub fn validate_all(&self, host: &mut dyn Validatable) -> Result<Report, ConfigError> {
        let mut report = Report::new();
        self.validate(host, &mut report, &Options::default())?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use serde_json::Map;

    use crate::FieldRules;

    use super::*;

    #[test]
    fn it_reuses_one_report_across_runs() {
        let registry = Registry::new();
        let schema = Schema::new().field("name", FieldRules::new(["required"]));
        let validator = Validator::new(&registry, &schema);

        let mut host = Map::new();
        let mut report = Report::new();

        validator
            .validate(&mut host, &mut report, &Options::default())
            .unwrap();
        assert!(!report.is_valid());

        host.insert("name".to_string(), json!("Michael"));
        validator
            .validate(&mut host, &mut report, &Options::default())
            .unwrap();
        assert!(report.is_valid());
    }

    #[test]
    fn it_reads_absent_map_keys_as_undefined() {
        let host = Map::new();
        assert_eq!(host.property("name"), None);

        let mut host = Map::new();
        host.set_property("name", json!(null));
        assert_eq!(host.property("name"), Some(json!(null)));
    }
}
