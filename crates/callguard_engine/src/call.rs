//! The guarded invocation primitive.
//!
//! A guarded call is linear: parse the signature, gate on context, validate
//! the arguments, invoke, validate the return value. Each stage either
//! passes control to the next or aborts the whole call; there are no
//! retries and no partial-success states. Side effects of an invocation
//! whose return value fails validation are not undone.

use callguard_foundation::{Error, Result, Value};
use callguard_doctag::SignatureParser;

use crate::params::{ArgumentBag, ParameterValidator};
use crate::rules::CustomRule;
use crate::variable::ValueValidator;

/// A function registered for guarded invocation.
///
/// The owner/method pair names the callable in messages and registry
/// lookups; the doc comment is the source of its validation schema. The
/// schema is re-parsed on every guarded call, so edits to the doc text take
/// effect immediately at the cost of repeated parsing.
#[derive(Clone, Debug)]
pub struct Callable {
    /// Declaring type or module name.
    pub owner: String,
    /// Method name within the owner.
    pub method: String,
    /// Raw doc comment text carrying the schema.
    pub doc: String,
    /// The function itself; arguments arrive in declared parameter order.
    pub func: fn(&[Value]) -> Result<Value>,
}

impl Callable {
    /// Creates a callable.
    #[must_use]
    pub fn new(
        owner: impl Into<String>,
        method: impl Into<String>,
        doc: impl Into<String>,
        func: fn(&[Value]) -> Result<Value>,
    ) -> Self {
        Self {
            owner: owner.into(),
            method: method.into(),
            doc: doc.into(),
            func,
        }
    }

    /// Returns the `owner::method` name used in messages and lookups.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.owner, self.method)
    }
}

/// Guarded-call orchestrator.
///
/// Stateless apart from its configuration; construct one and share it, or
/// build one per call site. The optional custom rule callback is forwarded
/// to both argument and return-value validation.
#[derive(Clone, Copy, Debug, Default)]
pub struct CallGate {
    parser: SignatureParser,
    custom: Option<CustomRule>,
}

impl CallGate {
    /// Creates a gate with the default parser and no custom rule callback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to use a specific signature parser.
    #[must_use]
    pub const fn with_parser(mut self, parser: SignatureParser) -> Self {
        self.parser = parser;
        self
    }

    /// Builder method to install the custom rule callback.
    #[must_use]
    pub const fn with_custom_rule(mut self, custom: CustomRule) -> Self {
        self.custom = Some(custom);
        self
    }

    /// Invokes a callable behind the full validation pipeline.
    ///
    /// # Errors
    /// - [`ErrorKind::ContextRejected`] when the caller's context is not in
    ///   the declared allow-list; arguments are never inspected.
    /// - [`ErrorKind::ParametersRejected`] when the bag fails validation;
    ///   the function is never invoked.
    /// - [`ErrorKind::ReturnRejected`] when the invocation result fails
    ///   validation against the declared return schema.
    /// - Any error the callable itself returns.
    ///
    /// [`ErrorKind::ContextRejected`]: callguard_foundation::ErrorKind::ContextRejected
    /// [`ErrorKind::ParametersRejected`]: callguard_foundation::ErrorKind::ParametersRejected
    /// [`ErrorKind::ReturnRejected`]: callguard_foundation::ErrorKind::ReturnRejected
    pub fn invoke(&self, callable: &Callable, bag: &ArgumentBag, context: &str) -> Result<Value> {
        let name = callable.qualified_name();

        let signature = self.parser.parse(&callable.doc)?;
        tracing::debug!(
            callable = %name,
            parameters = signature.parameters.len(),
            "parsed signature"
        );

        if !signature.contexts.allows(context) {
            return Err(Error::context_rejected(format!(
                "The function {name} cannot be called from the context: {context}"
            )));
        }

        let verdict =
            ParameterValidator::new(&name, self.custom).validate(&signature.parameters, bag);
        if !verdict.is_valid() {
            return Err(Error::parameters_rejected(verdict.message()));
        }
        tracing::trace!(callable = %name, "arguments validated");

        // Values are taken from the bag by declared name, in signature
        // order, and handed to the function positionally.
        let mut args = Vec::with_capacity(signature.parameters.len());
        for parameter in &signature.parameters {
            let value = bag.get(&parameter.name).ok_or_else(|| {
                Error::internal(format!(
                    "validated parameter missing from bag: {}",
                    parameter.name
                ))
            })?;
            args.push(value.clone());
        }

        let result = (callable.func)(&args)?;
        tracing::debug!(callable = %name, "invoked");

        if let Some(return_schema) = &signature.return_value {
            let verdict =
                ValueValidator::new(&name, self.custom).validate(return_schema, &result);
            if !verdict.is_valid() {
                return Err(Error::return_rejected(verdict.message()));
            }
            tracing::trace!(callable = %name, "return value validated");
        }

        Ok(result)
    }
}
