//! Parsed schema shapes for one callable.

use indexmap::IndexMap;

use callguard_foundation::{ParamType, Rule};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tags::VersionTags;

/// One declared parameter, return value, or nested array key.
///
/// `rule_data` stays raw here; rule payloads are parsed at validation time,
/// so a malformed payload only surfaces when a value is checked against it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SchemaNode {
    /// Declared name (parameter name or nested key).
    pub name: String,
    /// Declared type.
    pub param_type: ParamType,
    /// Declared rule, if any.
    pub rule: Option<Rule>,
    /// Raw rule payload, e.g. `1-100` or `a,b,c`.
    pub rule_data: String,
    /// Free-text description.
    pub description: String,
    /// Nested keys; non-empty only for array/json nodes.
    pub children: Vec<SchemaNode>,
}

impl SchemaNode {
    /// Creates a node with no rule, description, or children.
    #[must_use]
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            rule: None,
            rule_data: String::new(),
            description: String::new(),
            children: Vec::new(),
        }
    }

    /// Attaches a rule and its raw payload.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule, rule_data: impl Into<String>) -> Self {
        self.rule = Some(rule);
        self.rule_data = rule_data.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a nested key schema.
    #[must_use]
    pub fn with_child(mut self, child: SchemaNode) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the nested key schema by name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&SchemaNode> {
        self.children.iter().find(|c| c.name == name)
    }
}

/// Contexts a callable may be invoked from.
///
/// Parsed from the `{@internal context ...}` tag value, comma separated.
/// The literal `any` (also the default when the tag is absent) allows every
/// context.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContextSet {
    entries: Vec<String>,
}

impl ContextSet {
    /// Creates the permissive default set.
    #[must_use]
    pub fn any() -> Self {
        Self {
            entries: vec!["any".to_string()],
        }
    }

    /// Parses a comma-separated tag value.
    ///
    /// An empty value degrades to the permissive default.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let entries: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if entries.is_empty() {
            Self::any()
        } else {
            Self { entries }
        }
    }

    /// Returns true when the given context may invoke the callable.
    #[must_use]
    pub fn allows(&self, context: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e == "any" || e == context)
    }

    /// Returns the declared entries.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for ContextSet {
    fn default() -> Self {
        Self::any()
    }
}

/// The full parsed schema for one callable.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signature {
    /// Declared parameters in source order.
    pub parameters: Vec<SchemaNode>,
    /// Declared return value, if any.
    pub return_value: Option<SchemaNode>,
    /// Contexts allowed to invoke the callable.
    #[cfg_attr(feature = "serde", serde(default))]
    pub contexts: ContextSet,
    /// First description paragraph.
    pub short_description: String,
    /// Remaining description text.
    pub long_description: String,
    /// `@since` / `@version` metadata.
    pub version_tags: VersionTags,
    /// All `{@internal ...}` tags by name.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub internal_tags: IndexMap<String, String>,
}

impl Signature {
    /// Returns the declared parameter schema by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&SchemaNode> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
