//! Integration tests for guarded calls and the registry.

use callguard_engine::{ArgumentBag, CallGate, Callable, CallableRegistry};
use callguard_foundation::{ErrorKind, Result, Value, Verdict};

fn lookup(args: &[Value]) -> Result<Value> {
    let needle = args[0].as_str().unwrap_or_default();
    Ok(Value::List(vec![
        vec![
            ("id".to_string(), Value::Int(1)),
            ("text".to_string(), Value::from(needle)),
        ]
        .into_iter()
        .collect(),
    ]))
}

const LOOKUP_DOC: &str = "/**\n\
 * Searches stored texts for a phrase\n\
 *\n\
 * {@internal context cli}\n\
 * @param string $needle the phrase to find\n\
 * @param int $limit range [1-50] maximum results\n\
 * @return array $matches the result rows\n\
 *     id => int the row id\n\
 *     text => string the matched text\n\
 */";

fn lookup_callable() -> Callable {
    Callable::new("TextSearch", "lookup", LOOKUP_DOC, lookup)
}

// =============================================================================
// Context gate
// =============================================================================

#[test]
fn wrong_context_fails_before_arguments_are_inspected() {
    let gate = CallGate::new();
    // The bag is deliberately invalid; the context message must win.
    let bag = ArgumentBag::new().with("limit", 999i64);
    let err = gate.invoke(&lookup_callable(), &bag, "web").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ContextRejected(_)));
    let msg = format!("{err}");
    assert!(msg.starts_with("Context could not be validated. Details:"));
    assert!(msg.contains("web"));
    assert!(!msg.contains("limit"));
}

#[test]
fn allowed_context_proceeds() {
    let gate = CallGate::new();
    let bag = ArgumentBag::new().with("needle", "mercy").with("limit", 10i64);
    assert!(gate.invoke(&lookup_callable(), &bag, "cli").is_ok());
}

#[test]
fn undeclared_context_set_allows_everything() {
    fn noop(_: &[Value]) -> Result<Value> {
        Ok(Value::Null)
    }
    let callable = Callable::new("Anything", "go", "/** No context tag */", noop);
    let gate = CallGate::new();
    assert!(gate.invoke(&callable, &ArgumentBag::new(), "web").is_ok());
}

// =============================================================================
// Full pipeline
// =============================================================================

#[test]
fn guarded_call_validates_and_returns_the_raw_result() {
    let gate = CallGate::new();
    let bag = ArgumentBag::new().with("needle", "mercy").with("limit", 5i64);
    let result = gate.invoke(&lookup_callable(), &bag, "cli").unwrap();
    let rows = result.as_list().unwrap();
    assert_eq!(rows[0].as_map().unwrap()["text"], Value::from("mercy"));
}

#[test]
fn parameter_failure_carries_the_phase_tagged_message() {
    let gate = CallGate::new();
    let bag = ArgumentBag::new().with("needle", "mercy").with("limit", 0i64);
    let err = gate.invoke(&lookup_callable(), &bag, "cli").unwrap_err();
    assert_eq!(
        format!("{err}"),
        "Parameters could not be validated. Details: Value of the parameter: limit is not in the range: 1-50"
    );
}

#[test]
fn return_schema_failures_surface_after_invocation() {
    fn wrong_shape(_: &[Value]) -> Result<Value> {
        Ok(Value::Int(5))
    }
    let callable = Callable::new(
        "TextSearch",
        "broken",
        "/**\n * @return array $matches the rows\n *     id => int the row id\n */",
        wrong_shape,
    );
    let gate = CallGate::new();
    let err = gate.invoke(&callable, &ArgumentBag::new(), "cli").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ReturnRejected(_)));
    assert!(format!("{err}").starts_with("Return value could not be validated. Details:"));
}

#[test]
fn custom_rule_flows_through_the_gate() {
    fn echo(args: &[Value]) -> Result<Value> {
        Ok(args[0].clone())
    }
    fn forbid_zed(_name: &str, value: &Value, _callable: &str) -> Verdict {
        if value.as_str() == Some("zed") {
            Verdict::fail("zed is reserved")
        } else {
            Verdict::pass()
        }
    }
    let callable = Callable::new(
        "Names",
        "echo",
        "/**\n * @param string $name custom the name\n */",
        echo,
    );
    let gate = CallGate::new().with_custom_rule(forbid_zed);

    let ok = gate.invoke(&callable, &ArgumentBag::new().with("name", "ann"), "cli");
    assert!(ok.is_ok());

    let err = gate
        .invoke(&callable, &ArgumentBag::new().with("name", "zed"), "cli")
        .unwrap_err();
    assert!(format!("{err}").contains("zed is reserved"));
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn registry_resolves_by_qualified_name() {
    let mut registry = CallableRegistry::new();
    registry.register(lookup_callable());

    let bag = ArgumentBag::new().with("needle", "patience").with("limit", 1i64);
    let result = registry.invoke("TextSearch::lookup", &bag, "cli").unwrap();
    assert!(result.as_list().is_some());
}

#[test]
fn registry_rejects_unknown_names() {
    let registry = CallableRegistry::new();
    let err = registry
        .invoke("Nobody::home", &ArgumentBag::new(), "cli")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCallable(_)));
}
