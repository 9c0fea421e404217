//! Best-effort extraction of description, version, and internal tags.
//!
//! Extraction never fails: unmatched patterns degrade to empty defaults.
//! The comment format is hand-rolled and intentionally lenient, so this is
//! text segmentation rather than a grammar.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::comment::CommentBlock;

static SINCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@since\s+([0-9][0-9.]*)").expect("since pattern"));

static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@version\s+([0-9][0-9.]*)").expect("version pattern"));

static INTERNAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{@internal\s+(\w+)\s+([^}]*)\}").expect("internal pattern"));

/// Version metadata extracted from `@since` / `@version` tags.
///
/// Absent tags yield empty strings, not errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VersionTags {
    /// Value of the `@since` tag.
    pub since: String,
    /// Value of the `@version` tag.
    pub version: String,
}

/// Extracts the short and long description from a comment.
///
/// Non-empty lines accumulate into the short description until the first
/// blank line after content, then into the long description until the first
/// line carrying a tag marker. A comment with no blank separator has an
/// empty long part. Multi-line pieces join with a single space.
#[must_use]
pub fn extract_description(block: &CommentBlock) -> (String, String) {
    let mut short = Vec::new();
    let mut long = Vec::new();
    let mut in_long = false;

    for line in block.lines() {
        let text = line.trim();
        if text.contains('@') {
            break;
        }
        if text.is_empty() {
            if !short.is_empty() {
                in_long = true;
            }
            continue;
        }
        if in_long {
            long.push(text);
        } else {
            short.push(text);
        }
    }

    (short.join(" "), long.join(" "))
}

/// Extracts `@since` and `@version` tags with independent searches.
#[must_use]
pub fn extract_version_tags(block: &CommentBlock) -> VersionTags {
    let mut tags = VersionTags::default();
    for line in block.lines() {
        if tags.since.is_empty() {
            if let Some(cap) = SINCE_RE.captures(line) {
                tags.since = cap[1].to_string();
            }
        }
        if tags.version.is_empty() {
            if let Some(cap) = VERSION_RE.captures(line) {
                tags.version = cap[1].to_string();
            }
        }
    }
    tags
}

/// Extracts `{@internal <name> <value>}` tags.
///
/// All differently-named tags are captured; a duplicate name overwrites the
/// earlier value (last wins).
#[must_use]
pub fn extract_internal_tags(block: &CommentBlock) -> IndexMap<String, String> {
    let mut tags = IndexMap::new();
    for line in block.lines() {
        for cap in INTERNAL_RE.captures_iter(line) {
            tags.insert(cap[1].to_string(), cap[2].trim().to_string());
        }
    }
    tags
}
