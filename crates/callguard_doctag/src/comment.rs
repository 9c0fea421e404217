//! Normalized line view of a raw doc comment.

/// A doc comment with block delimiters and star prefixes stripped.
///
/// Every extractor shares this view: `/**` and `*/` are removed, and each
/// line loses its leading whitespace-then-`*` prefix plus at most one space
/// after the star. Indentation *after* the star is preserved, since nested
/// schema declarations encode their depth there (4 spaces per level).
#[derive(Clone, Debug)]
pub struct CommentBlock {
    lines: Vec<String>,
}

impl CommentBlock {
    /// Normalizes the given raw comment text.
    ///
    /// Lines holding only a closing delimiter are dropped. Comments written
    /// without star prefixes pass through unchanged, so plain-text input is
    /// accepted too.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut lines = Vec::new();
        for raw in text.lines() {
            let trimmed = raw.trim_start();
            if trimmed.starts_with("*/") {
                continue;
            }
            let rest = match trimmed.strip_prefix("/**") {
                Some(after) => {
                    let after = after.trim_start();
                    if after.is_empty() {
                        continue;
                    }
                    after
                }
                None => trimmed,
            };
            let rest = match rest.strip_prefix('*') {
                Some(after) => after.strip_prefix(' ').unwrap_or(after),
                None => rest,
            };
            let rest = rest.strip_suffix("*/").map_or(rest, str::trim_end);
            lines.push(rest.to_string());
        }
        Self { lines }
    }

    /// Returns the normalized lines in source order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the normalized line at the given index.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Returns the number of normalized lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true when the comment held no content lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
