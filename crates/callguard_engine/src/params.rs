//! Validation of a whole argument bag against a signature's parameter list.

use callguard_foundation::{Value, ValueMap, Verdict};
use callguard_doctag::SchemaNode;

use crate::rules::CustomRule;
use crate::variable::ValueValidator;

/// Named arguments supplied for one guarded call.
///
/// Insertion order is preserved for display purposes only; validation and
/// invocation both key off the declared parameter names, never off bag
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArgumentBag {
    values: ValueMap,
}

impl ArgumentBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add an argument.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Adds or replaces an argument.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Returns the argument with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns true when an argument with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when the bag holds no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the arguments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<ValueMap> for ArgumentBag {
    fn from(values: ValueMap) -> Self {
        Self { values }
    }
}

/// Validates an argument bag against a signature's declared parameters.
#[derive(Clone, Copy, Debug)]
pub struct ParameterValidator<'a> {
    validator: ValueValidator<'a>,
}

impl<'a> ParameterValidator<'a> {
    /// Creates a validator for the given callable.
    #[must_use]
    pub const fn new(callable: &'a str, custom: Option<CustomRule>) -> Self {
        Self {
            validator: ValueValidator::new(callable, custom),
        }
    }

    /// Validates the bag against the parameters in declared order.
    ///
    /// A parameter name absent from the bag fails immediately and no later
    /// parameter is inspected; a present value delegates to the value
    /// validator, and the first non-empty message anywhere aborts the walk.
    #[must_use]
    pub fn validate(&self, parameters: &[SchemaNode], bag: &ArgumentBag) -> Verdict {
        for parameter in parameters {
            let Some(value) = bag.get(&parameter.name) else {
                return Verdict::fail(format!(
                    "Value not given for the parameter: {}",
                    parameter.name
                ));
            };
            let verdict = self.validator.validate(parameter, value);
            if !verdict.is_valid() {
                return verdict;
            }
        }
        Verdict::pass()
    }
}
