use std::fmt;

/// The signal reported by every call into a model instance.
///
/// Variants are ordered by severity, so `status >= Status::Discard` selects
/// every status that invalidates the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// The call succeeded.
    Ok,

    /// The call succeeded with caveats worth logging.
    Warning,

    /// The result of the call should not be trusted (for example, the step
    /// was too large).
    Discard,

    /// The call failed and the current step is invalid.
    ///
    /// The instance may still be released but must not be used further.
    Error,

    /// The instance is no longer usable.
    Fatal,
}

impl Status {
    /// Returns `true` if the caller may use the result of the call.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Ok | Self::Warning)
    }

    /// Returns `true` if the instance must not receive any call other than
    /// its release.
    #[must_use]
    pub fn is_unrecoverable(self) -> bool {
        matches!(self, Self::Error | Self::Fatal)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Discard => "discard",
            Self::Error => "error",
            Self::Fatal => "fatal",
        };
        f.write_str(name)
    }
}
