//! Pass/fail outcome of a single validation check.

use std::fmt;

/// Outcome of validating a value, a parameter bag, or a return value.
///
/// The empty message is the only true-success signal: constructing a verdict
/// with a non-empty message forces it invalid regardless of the flag passed,
/// so a validator cannot accidentally report success while carrying a
/// diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    is_valid: bool,
    message: String,
}

impl Verdict {
    /// Creates a passing verdict.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    /// Creates a failing verdict with the given message.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }

    /// Creates a verdict from raw parts, normalizing the convention:
    /// a non-empty message always yields an invalid verdict.
    #[must_use]
    pub fn from_parts(is_valid: bool, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            is_valid: is_valid && message.is_empty(),
            message,
        }
    }

    /// Returns true when the check passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the diagnostic message (empty on success).
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Converts into a result, yielding the message on failure.
    ///
    /// # Errors
    /// Returns the diagnostic message when the verdict is invalid.
    pub fn into_result(self) -> Result<(), String> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.message)
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            write!(f, "valid")
        } else {
            write!(f, "invalid: {}", self.message)
        }
    }
}
