//! Registry of callables resolvable for guarded invocation.

use std::collections::HashMap;

use callguard_foundation::{Error, Result, Value};

use crate::call::{CallGate, Callable};
use crate::params::ArgumentBag;

/// Stores callables by qualified name and invokes them through a gate.
///
/// The registry replaces live method receivers: registering a callable
/// binds the function to its owner/method name, and every later invocation
/// resolves that name and runs the full guarded-call pipeline.
#[derive(Clone, Debug, Default)]
pub struct CallableRegistry {
    callables: HashMap<String, Callable>,
    gate: CallGate,
}

impl CallableRegistry {
    /// Creates an empty registry with a default gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry invoking through the given gate.
    #[must_use]
    pub fn with_gate(gate: CallGate) -> Self {
        Self {
            callables: HashMap::new(),
            gate,
        }
    }

    /// Registers a callable under its qualified name.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register(&mut self, callable: Callable) {
        self.callables.insert(callable.qualified_name(), callable);
    }

    /// Looks up a callable by qualified name.
    #[must_use]
    pub fn get(&self, qualified_name: &str) -> Option<&Callable> {
        self.callables.get(qualified_name)
    }

    /// Returns true when a callable is registered under the given name.
    #[must_use]
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.callables.contains_key(qualified_name)
    }

    /// Returns all registered qualified names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.callables.keys().map(String::as_str).collect()
    }

    /// Resolves a callable and invokes it through the gate.
    ///
    /// # Errors
    /// Returns [`callguard_foundation::ErrorKind::UnknownCallable`] when no
    /// callable is registered under the name, or any error the guarded call
    /// itself produces.
    pub fn invoke(
        &self,
        qualified_name: &str,
        bag: &ArgumentBag,
        context: &str,
    ) -> Result<Value> {
        let callable = self
            .get(qualified_name)
            .ok_or_else(|| Error::unknown_callable(qualified_name))?;
        self.gate.invoke(callable, bag, context)
    }
}
