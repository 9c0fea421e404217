//! Configuration for signature parsing.

/// Configuration for the signature parser.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseConfig {
    /// Fail loudly on a malformed nested continuation line instead of
    /// silently ending the nesting scan.
    ///
    /// The lenient default mirrors the historical behavior: a misindented
    /// continuation line truncates the rest of that nested schema without
    /// an error.
    pub strict_nesting: bool,
}

impl ParseConfig {
    /// Creates the lenient default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that rejects malformed nested declarations.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_nesting: true,
        }
    }

    /// Builder method to set strict nesting.
    #[must_use]
    pub const fn with_strict_nesting(mut self, strict: bool) -> Self {
        self.strict_nesting = strict;
        self
    }
}
