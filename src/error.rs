//! Configuration errors.

/// An error caused by a broken validation schema.
///
/// These indicate programmer error, not invalid user data: a rule name that
/// resolves to nothing, an inline rule with nothing to check, a failing rule
/// with no message template to format. They abort the validation call rather
/// than being recorded in the [`Report`](crate::Report) — invalid user data
/// never produces a [`ConfigError`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A rule name in a field's rule list matched neither a registry
    /// definition nor a per-field override.
    UnknownRule {
        /// The property key whose rule list referenced the name.
        key: String,

        /// The unresolvable rule name.
        rule: String,
    },

    /// A per-field override had no check function and no registry definition
    /// of the same name to fall back to.
    MissingCheck {
        /// The property key carrying the override.
        key: String,

        /// The name of the override.
        rule: String,
    },

    /// A rule failed and a message was requested, but the resolved rule has
    /// no message template.
    MissingMessage {
        /// The property key being validated.
        key: String,

        /// The name of the failing rule.
        rule: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnknownRule { key, rule } => {
                write!(f, "no rule named `{rule}` for property `{key}`")
            }
            ConfigError::MissingCheck { key, rule } => {
                write!(
                    f,
                    "custom rule `{rule}` for property `{key}` has no check function"
                )
            }
            ConfigError::MissingMessage { key, rule } => {
                write!(
                    f,
                    "rule `{rule}` for property `{key}` has no message template"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
