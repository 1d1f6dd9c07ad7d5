//! The queryable result of a validation run.

use indexmap::IndexMap;
use serde::Serialize;

/// One recorded validation failure.
///
/// At most one failure exists per property key per run: the first failing
/// rule wins and the key's remaining rules are never evaluated. The record is
/// immutable once created and replaced wholesale when the key revalidates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// The property key that failed.
    key: String,

    /// The name of the rule that failed.
    rule: String,

    /// The formatted message, or [`None`] when the run squelched message
    /// generation.
    message: Option<String>,
}

impl Failure {
    /// Creates a new failure record.
    pub(crate) fn new(
        key: impl Into<String>,
        rule: impl Into<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            key: key.into(),
            rule: rule.into(),
            message,
        }
    }

    /// Gets the property key that failed.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Gets the name of the rule that failed.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Gets the formatted message, if one was generated.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// The accumulated result of validating a host object.
///
/// Only failing keys are present; a key that passed (or was never validated)
/// has no entry. The caller keeps one long-lived `Report` per host and lends
/// it to each run: whole-object runs clear it first, scoped runs replace or
/// clear entries only for the keys they validate.
///
/// Serializes as a map from property key to failure, ready for a
/// presentation layer.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Report {
    /// The recorded failures, keyed by property.
    failures: IndexMap<String, Failure>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the last run recorded no failures.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Gets the number of recorded failures.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns whether the report holds no failures.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Gets the recorded failures, in the key order of the last run that
    /// touched them.
    pub fn failures(&self) -> impl Iterator<Item = &Failure> {
        self.failures.values()
    }

    /// Gets the generated messages, in the same order as [`failures`](Self::failures).
    ///
    /// A squelched run records failures without messages, which this iterator
    /// skips.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.failures.values().filter_map(Failure::message)
    }

    /// Gets the failure for a property key, if it failed.
    pub fn failure_for(&self, key: &str) -> Option<&Failure> {
        self.failures.get(key)
    }

    /// Gets the message for a property key.
    ///
    /// [`None`] means the key passed, was never validated, or failed under a
    /// squelched run.
    pub fn message_for(&self, key: &str) -> Option<&str> {
        self.failures.get(key).and_then(Failure::message)
    }

    /// Removes every recorded failure.
    pub(crate) fn clear(&mut self) {
        self.failures.clear();
    }

    /// Records a failure, replacing any previous entry for its key.
    pub(crate) fn insert(&mut self, failure: Failure) {
        self.failures.insert(failure.key.clone(), failure);
    }

    /// Clears the entry for a single key, preserving the order of the rest.
    pub(crate) fn remove(&mut self, key: &str) {
        self.failures.shift_remove(key);
    }
}
