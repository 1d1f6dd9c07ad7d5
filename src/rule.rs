//! Rule definitions and their outcomes.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::Validatable;

/// The signature of a rule's check function.
///
/// The first argument is the (possibly normalized) value of the property
/// under evaluation; [`None`] means the host has no such property. The
/// [`Context`] gives read access to the rest of the host object, so a check
/// can depend on sibling properties.
///
/// Checks must be pure apart from their verdict: they run synchronously, they
/// never mutate the host, and anything they want interpolated into the error
/// message travels back inside [`Verdict::Fail`].
pub type CheckFn = dyn Fn(Option<&Value>, &Context<'_>) -> Verdict + Send + Sync;

/// The outcome of running a single rule against a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The value satisfied the rule.
    Pass,

    /// The value violated the rule.
    ///
    /// The payload carries extra message-format arguments, bound in order to
    /// placeholders `%2` onward of the rule's message template (placeholder
    /// `%1` is always the subject label).
    Fail(Vec<Value>),
}

impl Verdict {
    /// Creates a failing verdict with no extra message arguments.
    pub fn fail() -> Self {
        Self::Fail(Vec::new())
    }

    /// Creates a failing verdict carrying extra message arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Verdict;
    /// use serde_json::json;
    ///
    /// // Binds "maximum" to `%2` and 10 to `%3` of the message template.
    /// let verdict = Verdict::fail_with([json!("maximum"), json!(10)]);
    /// assert!(!verdict.passed());
    /// ```
    pub fn fail_with<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Fail(args.into_iter().map(Into::into).collect())
    }

    /// Returns whether the value satisfied the rule.
    pub fn passed(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        if passed { Self::Pass } else { Self::fail() }
    }
}

/// Read-only context handed to a check function.
pub struct Context<'a> {
    /// The property key under evaluation.
    key: &'a str,

    /// The host object being validated.
    host: &'a dyn Validatable,
}

impl<'a> Context<'a> {
    /// Creates a new evaluation context.
    pub(crate) fn new(key: &'a str, host: &'a dyn Validatable) -> Self {
        Self { key, host }
    }

    /// Gets the property key under evaluation.
    pub fn key(&self) -> &str {
        self.key
    }

    /// Gets a property of the host object, by key.
    ///
    /// This is how a check inspects sibling properties; [`None`] means the
    /// host has no such property.
    pub fn property(&self, key: &str) -> Option<Value> {
        self.host.property(key)
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("key", &self.key).finish_non_exhaustive()
    }
}

/// A named, reusable rule definition: a check function plus message settings.
///
/// A rule always has a check function — a definition without one is
/// unrepresentable. The message template and subject label are optional; a
/// rule that can fail while a message is requested must carry a template by
/// then, or the run aborts with
/// [`ConfigError::MissingMessage`](crate::ConfigError::MissingMessage).
///
/// # Examples
///
/// ```
/// use fieldcheck::Rule;
/// use fieldcheck::Verdict;
///
/// let rule = Rule::new(|value, _| {
///     Verdict::from(value.and_then(|v| v.as_str()).is_some_and(|s| s.len() <= 16))
/// })
/// .with_message("%1 is too long");
/// ```
#[derive(Clone)]
pub struct Rule {
    /// The check function.
    pub(crate) check: Arc<CheckFn>,

    /// The message template, with `%1` bound to the subject label.
    pub(crate) message: Option<String>,

    /// Overrides the subject label, which otherwise defaults to the property
    /// key being validated.
    pub(crate) subject: Option<String>,
}

impl Rule {
    /// Creates a new rule from a check function.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(Option<&Value>, &Context<'_>) -> Verdict + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
            message: None,
            subject: None,
        }
    }

    /// Sets the message template for the rule.
    pub fn with_message(mut self, template: impl Into<String>) -> Self {
        self.message = Some(template.into());
        self
    }

    /// Sets the subject label substituted for `%1` in the message, replacing
    /// the default (the property key).
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Runs the rule's check function.
    pub fn check(&self, value: Option<&Value>, cx: &Context<'_>) -> Verdict {
        (self.check)(value, cx)
    }

    /// Gets the message template, if one is set.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Gets the subject label override, if one is set.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

/// A per-field, inline rule override.
///
/// Every part is optional: an override merged over a registry definition of
/// the same name replaces just the parts it carries, while an override whose
/// name matches nothing in the registry is a fully custom rule and must carry
/// its own check function.
///
/// # Examples
///
/// ```
/// use fieldcheck::RuleOverride;
///
/// // Reuse the built-in `required` check, but reword its message.
/// let overridden = RuleOverride::new().with_message("%1 must not be blank");
/// ```
#[derive(Clone, Default)]
pub struct RuleOverride {
    /// The replacement check function, if any.
    pub(crate) check: Option<Arc<CheckFn>>,

    /// The replacement message template, if any.
    pub(crate) message: Option<String>,

    /// The replacement subject label, if any.
    pub(crate) subject: Option<String>,
}

impl RuleOverride {
    /// Creates an empty override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the check function for the override.
    pub fn with_check<F>(mut self, check: F) -> Self
    where
        F: Fn(Option<&Value>, &Context<'_>) -> Verdict + Send + Sync + 'static,
    {
        self.check = Some(Arc::new(check));
        self
    }

    /// Sets the message template for the override.
    pub fn with_message(mut self, template: impl Into<String>) -> Self {
        self.message = Some(template.into());
        self
    }

    /// Sets the subject label for the override.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}

impl fmt::Debug for RuleOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleOverride")
            .field("check", &self.check.as_ref().map(|_| ".."))
            .field("message", &self.message)
            .field("subject", &self.subject)
            .finish()
    }
}
