//! The declarative map of per-property validation rules.

use indexmap::IndexMap;

use crate::RuleOverride;

/// The validation schema for a host object: each property key maps to the
/// rules it must satisfy.
///
/// Keys validate in declaration order, and each key's rules run in the order
/// they were listed.
///
/// # Examples
///
/// ```
/// use fieldcheck::FieldRules;
/// use fieldcheck::Schema;
///
/// let schema = Schema::new()
///     .field("name", FieldRules::new(["required"]))
///     .field("balance", FieldRules::new(["required", "number"]));
///
/// assert_eq!(schema.keys().collect::<Vec<_>>(), ["name", "balance"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Schema {
    /// The per-property rule configurations, in declaration order.
    fields: IndexMap<String, FieldRules>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the rule configuration for a property key.
    pub fn field(mut self, key: impl Into<String>, rules: FieldRules) -> Self {
        self.fields.insert(key.into(), rules);
        self
    }

    /// Gets the rule configuration for a property key.
    pub fn get(&self, key: &str) -> Option<&FieldRules> {
        self.fields.get(key)
    }

    /// Gets the configured property keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// The rule configuration for a single property: an ordered list of rule
/// names, plus any per-field overrides for those names.
///
/// A name in the rule list resolves against the override first and the
/// [`Registry`](crate::Registry) second; see
/// [`RuleOverride`] for the merge semantics.
#[derive(Clone, Debug, Default)]
pub struct FieldRules {
    /// The rule names to evaluate, in order.
    rules: Vec<String>,

    /// Inline overrides, keyed by the rule name they apply to.
    overrides: IndexMap<String, RuleOverride>,
}

impl FieldRules {
    /// Creates a configuration from an ordered list of rule names.
    pub fn new<I>(rules: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            rules: rules.into_iter().map(Into::into).collect(),
            overrides: IndexMap::new(),
        }
    }

    /// Attaches an inline override for one of the listed rule names.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::FieldRules;
    /// use fieldcheck::RuleOverride;
    /// use fieldcheck::Verdict;
    ///
    /// let rules = FieldRules::new(["required", "cvv_length"]).with_override(
    ///     "cvv_length",
    ///     RuleOverride::new()
    ///         .with_check(|value, _| {
    ///             Verdict::from(value.and_then(|v| v.as_str()).is_some_and(|s| s.len() == 3))
    ///         })
    ///         .with_message("invalid %1"),
    /// );
    /// ```
    pub fn with_override(mut self, name: impl Into<String>, rule: RuleOverride) -> Self {
        self.overrides.insert(name.into(), rule);
        self
    }

    /// Gets the rule names to evaluate, in order.
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// Gets the override for a rule name, if one was attached.
    pub(crate) fn override_for(&self, name: &str) -> Option<&RuleOverride> {
        self.overrides.get(name)
    }
}
