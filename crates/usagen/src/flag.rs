//! Read-only per-flag view consumed by the renderer.

/// Everything the synopsis renderer needs to know about one registered
/// flag. Instances are extracted from the application's argument parser
/// (the `usagen-clap` crate does this for `clap`) or built directly with
/// the chained setters.
///
/// Slice order is rendering order; the renderer never sorts.
///
/// # Example
///
/// ```rust
/// use usagen::FlagInfo;
///
/// let flag = FlagInfo::new("output")
///     .shorthand("o")
///     .value_hint("<FILE>")
///     .default_value("-")
///     .help("write the report to FILE");
///
/// assert_eq!(flag.name, "output");
/// assert!(!flag.hidden);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagInfo {
    /// Long name, rendered as `--name`.
    pub name: String,
    /// Single-letter form, rendered as `-s`. Empty when the flag has none.
    pub shorthand: String,
    /// Non-empty when the shorthand is deprecated; the synopsis then shows
    /// the long form only.
    pub shorthand_deprecated: String,
    /// Hidden flags are excluded from the synopsis entirely.
    pub hidden: bool,
    /// Non-empty when the whole flag is deprecated; appended to the help
    /// column as a notice.
    pub deprecated: String,
    /// Display string for the default value.
    pub default_value: String,
    /// Value placeholder shown after the flag forms, e.g. `<FILE>`.
    pub value_hint: String,
    /// Help text for the right-hand column.
    pub help: String,
}

impl FlagInfo {
    /// Creates a visible flag with the given long name and everything
    /// else empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the single-letter shorthand.
    pub fn shorthand(mut self, shorthand: impl Into<String>) -> Self {
        self.shorthand = shorthand.into();
        self
    }

    /// Marks the shorthand as deprecated with the given notice.
    pub fn shorthand_deprecated(mut self, notice: impl Into<String>) -> Self {
        self.shorthand_deprecated = notice.into();
        self
    }

    /// Excludes the flag from the synopsis.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Marks the whole flag as deprecated with the given notice.
    pub fn deprecated(mut self, notice: impl Into<String>) -> Self {
        self.deprecated = notice.into();
        self
    }

    /// Sets the default-value display string.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Sets the value placeholder.
    pub fn value_hint(mut self, hint: impl Into<String>) -> Self {
        self.value_hint = hint.into();
        self
    }

    /// Sets the help text.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }
}
