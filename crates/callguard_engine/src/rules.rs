//! Rule payload parsing and rule predicates.
//!
//! Rule payloads stay raw in the schema and are parsed here at validation
//! time, so a malformed payload only surfaces when a value is checked
//! against it.

use once_cell::sync::Lazy;
use regex::Regex;

use callguard_foundation::{Value, Verdict};

/// Caller-supplied validation callback.
///
/// Receives the parameter name, the value under validation, and the name of
/// the callable being guarded. When a schema node declares the `custom`
/// rule, this callback replaces every built-in check for that node.
pub type CustomRule = fn(param_name: &str, value: &Value, callable: &str) -> Verdict;

static RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(-?\d+)\s*-\s*(-?\d+)\s*$").expect("range pattern"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern")
});

/// Parses an inclusive `min-max` range payload. Signed bounds are allowed.
#[must_use]
pub fn parse_range(data: &str) -> Option<(i64, i64)> {
    let cap = RANGE_RE.captures(data)?;
    let min = cap[1].parse().ok()?;
    let max = cap[2].parse().ok()?;
    Some((min, max))
}

/// Returns true when `value` is a member of the comma-separated allow-list.
///
/// Membership is an exact match: no case folding, no partial matches.
#[must_use]
pub fn in_list(data: &str, value: &str) -> bool {
    data.split(',').any(|entry| entry.trim() == value)
}

/// Returns true when `value` is a syntactically valid email address.
#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
