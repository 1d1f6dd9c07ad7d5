//! Declarative, rule-based validation for UI-bound data objects.
//!
//! Given a host object and a [`Schema`] mapping each property key to an
//! ordered list of rule names, a [`Validator`] evaluates every property and
//! produces a [`Report`] describing which properties failed, under which
//! rule, and with what human-readable message. Validation is synchronous and
//! re-runnable, which suits form-backed models that revalidate on every edit.
//!
//! Rules resolve from two places: a [`Registry`] of named, reusable
//! definitions (shipping with [`rules::required`] and [`rules::number`]
//! built in) and per-field [`RuleOverride`]s that customize or wholly replace
//! a definition for one property. Messages are printf-style templates where
//! `%1` is the subject label and `%2` onward are arguments supplied by the
//! failing rule.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::FieldRules;
//! use fieldcheck::Registry;
//! use fieldcheck::RuleOverride;
//! use fieldcheck::Schema;
//! use fieldcheck::Validator;
//! use fieldcheck::Verdict;
//! use serde_json::json;
//!
//! let registry = Registry::new();
//! let schema = Schema::new()
//!     .field("name", FieldRules::new(["required"]))
//!     .field(
//!         "cvv",
//!         FieldRules::new(["required", "cvv_length"]).with_override(
//!             "cvv_length",
//!             RuleOverride::new()
//!                 .with_check(|value, _| {
//!                     Verdict::from(
//!                         value.and_then(|v| v.as_str()).is_some_and(|s| s.len() == 3),
//!                     )
//!                 })
//!                 .with_message("invalid %1"),
//!         ),
//!     );
//!
//! let mut card = serde_json::Map::new();
//! card.insert("name".to_string(), json!("Michael"));
//! card.insert("cvv".to_string(), json!("9444"));
//!
//! let report = Validator::new(&registry, &schema).validate_all(&mut card)?;
//!
//! assert!(!report.is_valid());
//! assert_eq!(report.message_for("cvv"), Some("invalid cvv"));
//! assert_eq!(report.message_for("name"), None);
//!
//! # Ok::<(), fieldcheck::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

mod error;
mod evaluate;
mod message;
mod options;
mod registry;
mod report;
mod resolve;
mod rule;
pub mod rules;
mod schema;
mod validate;
pub mod value;

pub use error::ConfigError;
pub use options::Options;
pub use registry::Registry;
pub use report::Failure;
pub use report::Report;
pub use rule::CheckFn;
pub use rule::Context;
pub use rule::Rule;
pub use rule::RuleOverride;
pub use rule::Verdict;
pub use schema::FieldRules;
pub use schema::Schema;
pub use serde_json::Value;
pub use validate::Validatable;
pub use validate::Validator;
