//! Options for a validation run.

/// Options recognized by [`Validator::validate`](crate::Validator::validate).
///
/// The defaults match an argument-less run: whole-object validation with
/// string trimming applied and written back, and messages generated.
///
/// # Examples
///
/// ```
/// use fieldcheck::Options;
///
/// // Revalidate just `number`, without touching the host's stored values.
/// let options = Options::new().trim_apply(false).properties(["number"]);
/// ```
#[derive(Clone, Debug)]
pub struct Options {
    /// Whether string values are evaluated in trimmed form.
    pub(crate) trim: bool,

    /// Whether the trimmed form is written back to the host.
    ///
    /// Only meaningful when `trim` is set; this is the one place the engine
    /// mutates host state.
    pub(crate) trim_apply: bool,

    /// Whether message generation is suppressed.
    ///
    /// Failures are still recorded, with no message.
    pub(crate) squelch: bool,

    /// The subset of property keys to validate; [`None`] means every key in
    /// the schema.
    pub(crate) properties: Option<Vec<String>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            trim: true,
            trim_apply: true,
            squelch: false,
            properties: None,
        }
    }
}

impl Options {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether string values are evaluated in trimmed form (default
    /// `true`).
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Sets whether the trimmed form is written back to the host (default
    /// `true`).
    pub fn trim_apply(mut self, trim_apply: bool) -> Self {
        self.trim_apply = trim_apply;
        self
    }

    /// Sets whether message generation is suppressed (default `false`).
    pub fn squelch(mut self, squelch: bool) -> Self {
        self.squelch = squelch;
        self
    }

    /// Restricts the run to an explicit subset of property keys.
    ///
    /// A scoped run only ever adds, replaces, or clears report entries for
    /// the keys listed here; every other key keeps whatever state the
    /// previous run left it.
    pub fn properties<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.properties = Some(keys.into_iter().map(Into::into).collect());
        self
    }
}
