//! Recursive validation of one value against one schema node.

use callguard_foundation::{ParamType, Rule, Value, ValueMap, Verdict};
use callguard_doctag::SchemaNode;

use crate::rules::{self, CustomRule};

/// Validates runtime values against schema nodes, recursively.
///
/// The validator is scoped to one callable: the name flows into diagnostic
/// messages and into the custom callback, which receives
/// `(param_name, value, callable_name)` and replaces every built-in check
/// for nodes declaring the `custom` rule.
#[derive(Clone, Copy, Debug)]
pub struct ValueValidator<'a> {
    callable: &'a str,
    custom: Option<CustomRule>,
}

impl<'a> ValueValidator<'a> {
    /// Creates a validator for the given callable.
    #[must_use]
    pub const fn new(callable: &'a str, custom: Option<CustomRule>) -> Self {
        Self { callable, custom }
    }

    /// Validates a value against a schema node.
    ///
    /// Descends recursively into nested array/json schemas; the first
    /// failing check anywhere yields its verdict unchanged.
    #[must_use]
    pub fn validate(&self, node: &SchemaNode, value: &Value) -> Verdict {
        if node.rule == Some(Rule::Custom) {
            return match self.custom {
                Some(callback) => callback(&node.name, value, self.callable),
                None => Verdict::fail(format!(
                    "No custom validator registered for the parameter: {}",
                    node.name
                )),
            };
        }

        match node.param_type {
            ParamType::Int => self.check_int(node, value),
            ParamType::String => self.check_string(node, value),
            ParamType::Bool => match value {
                Value::Bool(_) => Verdict::pass(),
                _ => type_failure(node, value),
            },
            ParamType::Object => match value {
                Value::Map(_) => Verdict::pass(),
                _ => type_failure(node, value),
            },
            ParamType::Callable => match value {
                Value::Fn(_) => Verdict::pass(),
                _ => type_failure(node, value),
            },
            ParamType::Mixed => Verdict::pass(),
            ParamType::Array => self.check_array(node, value),
            ParamType::Json => self.check_json(node, value),
        }
    }

    fn check_int(&self, node: &SchemaNode, value: &Value) -> Verdict {
        let Some(coerced) = value.coerce_int() else {
            return type_failure(node, value);
        };
        if node.rule == Some(Rule::Range) {
            let Some((min, max)) = rules::parse_range(&node.rule_data) else {
                return Verdict::fail(format!(
                    "Invalid range rule data for the parameter: {}: {}",
                    node.name, node.rule_data
                ));
            };
            if coerced < min || coerced > max {
                return Verdict::fail(format!(
                    "Value of the parameter: {} is not in the range: {}",
                    node.name, node.rule_data
                ));
            }
        }
        Verdict::pass()
    }

    fn check_string(&self, node: &SchemaNode, value: &Value) -> Verdict {
        let Some(text) = value.as_str() else {
            return type_failure(node, value);
        };
        match node.rule {
            Some(Rule::List) => {
                if rules::in_list(&node.rule_data, text) {
                    Verdict::pass()
                } else {
                    Verdict::fail(format!(
                        "Value of the parameter: {} is not in the list: {}",
                        node.name, node.rule_data
                    ))
                }
            }
            Some(Rule::Email) => {
                if rules::is_email(text) {
                    Verdict::pass()
                } else {
                    Verdict::fail(format!(
                        "Value of the parameter: {} is not a valid email address",
                        node.name
                    ))
                }
            }
            _ => Verdict::pass(),
        }
    }

    fn check_array(&self, node: &SchemaNode, value: &Value) -> Verdict {
        match value {
            Value::Map(map) => self.check_map_keys(node, map),
            Value::List(elements) => self.check_record_list(node, elements),
            _ => type_failure(node, value),
        }
    }

    /// One associative structure: every declared key must be present and
    /// satisfy its child schema.
    fn check_map_keys(&self, node: &SchemaNode, map: &ValueMap) -> Verdict {
        for child in &node.children {
            let Some(entry) = map.get(&child.name) else {
                return missing_key(&child.name);
            };
            let verdict = self.validate(child, entry);
            if !verdict.is_valid() {
                return verdict;
            }
        }
        Verdict::pass()
    }

    /// A list of associative structures: every element must contain and
    /// satisfy every declared key. An empty list passes vacuously.
    fn check_record_list(&self, node: &SchemaNode, elements: &[Value]) -> Verdict {
        for child in &node.children {
            for element in elements {
                let Some(entry) = element.as_map().and_then(|m| m.get(&child.name)) else {
                    return missing_key(&child.name);
                };
                let verdict = self.validate(child, entry);
                if !verdict.is_valid() {
                    return verdict;
                }
            }
        }
        Verdict::pass()
    }

    fn check_json(&self, node: &SchemaNode, value: &Value) -> Verdict {
        let Some(text) = value.as_str() else {
            return Verdict::fail(json_message(&node.name));
        };
        match Value::from_json(text) {
            Ok(decoded) => self.check_array(node, &decoded),
            Err(_) => Verdict::fail(json_message(&node.name)),
        }
    }
}

fn type_failure(node: &SchemaNode, value: &Value) -> Verdict {
    Verdict::fail(format!(
        "Invalid type for the parameter: {}. Expected {}, found {}",
        node.name,
        node.param_type,
        value.type_name()
    ))
}

fn missing_key(key: &str) -> Verdict {
    Verdict::fail(format!("Array element: {key} could not be found"))
}

fn json_message(name: &str) -> String {
    format!("Value of the parameter: {name} is not valid JSON")
}
