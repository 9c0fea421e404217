//! Declaration scanning for `@param` / `@return` tags with recursive nesting.
//!
//! Nested array keys mirror literal indentation in the comment text: each
//! nesting level is indented 4 more spaces after the star prefix. The scan
//! for a level ends at the first blank line, at any line carrying a tag
//! marker that is not itself a nested declaration, or at the first line that
//! fails to parse at the expected depth.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use callguard_foundation::{Error, ParamType, Result, Rule};

use crate::comment::CommentBlock;
use crate::config::ParseConfig;
use crate::schema::{ContextSet, SchemaNode, Signature};
use crate::tags;

/// Spaces of indentation per nesting level.
const INDENT: usize = 4;

static PARAM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*@param\s+(array|json|string|int|bool|object|mixed|callable)\s+\$([A-Za-z_][A-Za-z0-9_]*)(?:\s+(list|range|custom|email)(?:\s*\[([^\]]*)\])?)?\s*(.*)$",
    )
    .expect("param pattern")
});

static RETURN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*@return\s+(array|json|string|int|bool|object|mixed|callable)\s+\$([A-Za-z_][A-Za-z0-9_]*)(?:\s+(list|range|custom|email)(?:\s*\[([^\]]*)\])?)?\s*(.*)$",
    )
    .expect("return pattern")
});

static NESTED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([A-Za-z_][A-Za-z0-9_]*)\s*=>\s*(array|json|string|int|bool|object|mixed|callable)(?:\s+(list|range|custom|email)(?:\s*\[([^\]]*)\])?)?\s*(.*)$",
    )
    .expect("nested pattern")
});

/// Parser turning a doc comment into a [`Signature`].
///
/// The parser is stateless between calls; every invocation re-reads the
/// supplied comment text in full.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignatureParser {
    config: ParseConfig,
}

impl SignatureParser {
    /// Creates a parser with the given configuration.
    #[must_use]
    pub const fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parses raw comment text into a signature.
    ///
    /// # Errors
    /// Returns [`callguard_foundation::ErrorKind::MalformedSchema`] when
    /// strict nesting is enabled and a continuation line fails to parse.
    pub fn parse(&self, text: &str) -> Result<Signature> {
        self.parse_block(&CommentBlock::new(text))
    }

    /// Parses an already-normalized comment block into a signature.
    ///
    /// # Errors
    /// Returns [`callguard_foundation::ErrorKind::MalformedSchema`] when
    /// strict nesting is enabled and a continuation line fails to parse.
    pub fn parse_block(&self, block: &CommentBlock) -> Result<Signature> {
        let lines = block.lines();
        let mut parameters = Vec::new();
        let mut return_value = None;

        let mut i = 0;
        while i < lines.len() {
            if let Some(cap) = PARAM_RE.captures(&lines[i]) {
                let (node, next) = self.declaration(&cap, lines, i)?;
                parameters.push(node);
                i = next;
            } else if let Some(cap) = RETURN_RE.captures(&lines[i]) {
                let (node, next) = self.declaration(&cap, lines, i)?;
                return_value = Some(node);
                i = next;
            } else {
                i += 1;
            }
        }

        let (short_description, long_description) = tags::extract_description(block);
        let version_tags = tags::extract_version_tags(block);
        let internal_tags = tags::extract_internal_tags(block);
        let contexts = internal_tags
            .get("context")
            .map_or_else(ContextSet::any, |value| ContextSet::parse(value));

        Ok(Signature {
            parameters,
            return_value,
            contexts,
            short_description,
            long_description,
            version_tags,
            internal_tags,
        })
    }

    /// Builds a node from a top-level match and consumes any nested body.
    fn declaration(
        &self,
        cap: &Captures<'_>,
        lines: &[String],
        index: usize,
    ) -> Result<(SchemaNode, usize)> {
        let mut node = node_from_captures(cap);
        let mut next = index + 1;
        if node.param_type.is_composite() {
            let (children, resumed) = self.scan_children(lines, next, 1)?;
            node.children = children;
            next = resumed;
        }
        Ok((node, next))
    }

    /// Scans continuation lines for nested keys at the given level.
    ///
    /// Returns the collected children and the index of the first line not
    /// consumed by this level or any level below it.
    fn scan_children(
        &self,
        lines: &[String],
        start: usize,
        level: usize,
    ) -> Result<(Vec<SchemaNode>, usize)> {
        let expected = INDENT * level;
        let mut children = Vec::new();
        let mut i = start;

        while i < lines.len() {
            let line = &lines[i];
            if line.trim().is_empty() {
                break;
            }

            let stripped = line.trim_start_matches(' ');
            let indent = line.len() - stripped.len();

            if indent == expected {
                if let Some(cap) = NESTED_RE.captures(stripped) {
                    let mut node = node_from_nested_captures(&cap);
                    i += 1;
                    if node.param_type.is_composite() {
                        let (grandchildren, resumed) = self.scan_children(lines, i, level + 1)?;
                        node.children = grandchildren;
                        i = resumed;
                    }
                    children.push(node);
                    continue;
                }
            }

            // A tag line ends the scan normally.
            if line.contains('@') {
                break;
            }

            // A well-formed declaration at a shallower depth pops back to
            // the enclosing scan.
            if indent < expected && indent % INDENT == 0 && NESTED_RE.is_match(stripped) {
                break;
            }

            // Anything else is a malformed continuation line. The lenient
            // default silently truncates the rest of this nested schema.
            if self.config.strict_nesting {
                return Err(Error::malformed_schema(i + 1, line.clone()));
            }
            break;
        }

        Ok((children, i))
    }
}

/// Builds a node from a `@param`/`@return` capture.
///
/// Group order: type, name, rule, rule data, description. The type and rule
/// keywords come from closed regex alternations, so conversion cannot fail.
fn node_from_captures(cap: &Captures<'_>) -> SchemaNode {
    build_node(&cap[1], &cap[2], cap.get(3), cap.get(4), &cap[5])
}

/// Builds a node from a nested `key => type` capture.
///
/// Group order: name, type, rule, rule data, description.
fn node_from_nested_captures(cap: &Captures<'_>) -> SchemaNode {
    build_node(&cap[2], &cap[1], cap.get(3), cap.get(4), &cap[5])
}

fn build_node(
    type_keyword: &str,
    name: &str,
    rule: Option<regex::Match<'_>>,
    rule_data: Option<regex::Match<'_>>,
    description: &str,
) -> SchemaNode {
    let param_type = ParamType::from_keyword(type_keyword).expect("type keyword from alternation");
    let mut node = SchemaNode::new(name, param_type).with_description(description.trim_end());
    if let Some(rule) = rule {
        let rule = Rule::from_keyword(rule.as_str()).expect("rule keyword from alternation");
        let data = rule_data.map_or("", |m| m.as_str()).trim();
        node = node.with_rule(rule, data);
    }
    node
}
