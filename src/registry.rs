//! The catalog of named, reusable rule definitions.

use indexmap::IndexMap;

use crate::rules;
use crate::Rule;

/// A catalog of named rule definitions.
///
/// The registry is an explicit value constructed once at application start
/// and lent to every [`Validator`](crate::Validator); nothing here is process
/// global, so tests and tenants cannot contaminate one another through a
/// shared catalog.
///
/// Registration is additive: a new name augments the catalog and an existing
/// name is replaced.
///
/// # Examples
///
/// ```
/// use fieldcheck::Registry;
/// use fieldcheck::Rule;
/// use fieldcheck::Verdict;
/// use fieldcheck::rules;
///
/// let mut registry = Registry::new();
/// assert!(registry.get(rules::REQUIRED).is_some());
///
/// registry.register(
///     "max_length",
///     Rule::new(|value, _| {
///         Verdict::from(value.and_then(|v| v.as_str()).is_some_and(|s| s.len() <= 64))
///     })
///     .with_message("%1 is too long"),
/// );
/// assert!(registry.get("max_length").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Registry {
    /// The registered rules, in registration order.
    rules: IndexMap<String, Rule>,
}

impl Registry {
    /// Creates a registry pre-populated with the built-in rules
    /// ([`rules::required`] and [`rules::number`]).
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(rules::REQUIRED, rules::required());
        registry.register(rules::NUMBER, rules::number());
        registry
    }

    /// Creates a registry with no rules at all, not even the built-ins.
    pub fn empty() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Registers a rule under a name, replacing any existing rule of that
    /// name.
    pub fn register(&mut self, name: impl Into<String>, rule: Rule) {
        self.rules.insert(name.into(), rule);
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Gets the registered rule names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::Verdict;

    use super::*;

    #[test]
    fn it_ships_the_built_in_rules() {
        let registry = Registry::new();

        assert_eq!(registry.names().collect::<Vec<_>>(), ["required", "number"]);
        assert_eq!(
            registry.get(rules::REQUIRED).unwrap().message(),
            Some("%1 is required")
        );
        assert_eq!(
            registry.get(rules::NUMBER).unwrap().message(),
            Some("%1 is not a number")
        );
    }

    #[test]
    fn it_replaces_a_rule_registered_under_an_existing_name() {
        let mut registry = Registry::new();
        registry.register(
            rules::REQUIRED,
            Rule::new(|_, _| Verdict::Pass).with_message("%1 is mandatory"),
        );

        assert_eq!(
            registry.get(rules::REQUIRED).unwrap().message(),
            Some("%1 is mandatory")
        );
        assert_eq!(registry.names().count(), 2);
    }

    #[test]
    fn it_starts_empty_when_asked() {
        let registry = Registry::empty();
        assert!(registry.get(rules::REQUIRED).is_none());
    }
}
