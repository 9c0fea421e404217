//! Integration tests for signature parsing.

use callguard_doctag::{ParseConfig, SignatureParser};
use callguard_foundation::{ErrorKind, ParamType, Rule};

fn parse(text: &str) -> callguard_doctag::Signature {
    SignatureParser::default().parse(text).unwrap()
}

// =============================================================================
// Round-trip extraction
// =============================================================================

#[test]
fn int_param_with_range_round_trips() {
    let sig = parse("/**\n * @param int $x range [1-100] desc\n */");
    assert_eq!(sig.parameters.len(), 1);
    let node = &sig.parameters[0];
    assert_eq!(node.name, "x");
    assert_eq!(node.param_type, ParamType::Int);
    assert_eq!(node.rule, Some(Rule::Range));
    assert_eq!(node.rule_data, "1-100");
}

#[test]
fn every_declarable_type_parses() {
    let comment = "/**\n\
 * @param array $a the a\n\
 * @param json $j the j\n\
 * @param string $s the s\n\
 * @param int $i the i\n\
 * @param bool $b the b\n\
 * @param object $o the o\n\
 * @param mixed $m the m\n\
 * @param callable $c the c\n\
 */";
    let sig = parse(comment);
    let types: Vec<ParamType> = sig.parameters.iter().map(|p| p.param_type).collect();
    assert_eq!(
        types,
        [
            ParamType::Array,
            ParamType::Json,
            ParamType::String,
            ParamType::Int,
            ParamType::Bool,
            ParamType::Object,
            ParamType::Mixed,
            ParamType::Callable,
        ]
    );
}

#[test]
fn full_signature_with_nested_params_and_return() {
    let comment = "/**\n\
 * Imports a batch of records\n\
 *\n\
 * {@internal context cli}\n\
 * @param array $batch the records\n\
 *     id => int range [1-1000] the record id\n\
 *     meta => array the metadata\n\
 *         source => string list [feed,manual] the origin\n\
 *     label => string the label\n\
 * @param bool $dry_run skip the writes\n\
 * @return array $report the import report\n\
 *     imported => int how many made it\n\
 */";
    let sig = parse(comment);

    assert_eq!(sig.parameters.len(), 2);
    let batch = &sig.parameters[0];
    assert_eq!(batch.children.len(), 3);
    let meta = batch.child("meta").unwrap();
    assert_eq!(meta.children.len(), 1);
    assert_eq!(meta.children[0].rule, Some(Rule::List));
    assert_eq!(meta.children[0].rule_data, "feed,manual");
    assert_eq!(batch.children[2].name, "label");

    let report = sig.return_value.as_ref().unwrap();
    assert_eq!(report.child("imported").unwrap().param_type, ParamType::Int);

    assert!(sig.contexts.allows("cli"));
    assert!(!sig.contexts.allows("web"));
    assert_eq!(sig.short_description, "Imports a batch of records");
}

// =============================================================================
// Nesting termination
// =============================================================================

#[test]
fn blank_line_ends_a_nested_scan() {
    let sig = parse(
        "/**\n * @param array $data the data\n *     kept => int fine\n *\n *     lost => int after blank\n */",
    );
    assert_eq!(sig.parameters[0].children.len(), 1);
}

#[test]
fn misindented_continuation_truncates_silently_by_default() {
    let sig = parse(
        "/**\n * @param array $data the data\n *     kept => int fine\n *      off => int five spaces deep\n */",
    );
    let children = &sig.parameters[0].children;
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name, "kept");
}

#[test]
fn strict_config_rejects_misindented_continuation() {
    let parser = SignatureParser::new(ParseConfig::strict());
    let err = parser
        .parse(
            "/**\n * @param array $data the data\n *     kept => int fine\n *      off => int five spaces deep\n */",
        )
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedSchema { .. }));
}

#[test]
fn strict_config_still_accepts_level_pops() {
    let parser = SignatureParser::new(ParseConfig::strict());
    let sig = parser
        .parse(
            "/**\n * @param array $outer the outer\n *     inner => array the inner\n *         leaf => bool the leaf\n *     sibling => int after the pop\n */",
        )
        .unwrap();
    let outer = &sig.parameters[0];
    assert_eq!(outer.children.len(), 2);
    assert_eq!(outer.children[1].name, "sibling");
}

#[test]
fn schema_free_comment_parses_to_empty_signature() {
    let sig = parse("/** Nothing declared here */");
    assert!(sig.parameters.is_empty());
    assert!(sig.return_value.is_none());
    assert!(sig.contexts.allows("anything"));
}

// =============================================================================
// Properties
// =============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn range_declarations_round_trip(
            name in "[a-z_][a-z0-9_]{0,12}",
            min in -1000i64..1000,
            span in 0i64..1000,
        ) {
            let max = min + span;
            let comment = format!("/**\n * @param int ${name} range [{min}-{max}] bounded\n */");
            let sig = SignatureParser::default().parse(&comment).unwrap();
            prop_assert_eq!(sig.parameters.len(), 1);
            let node = &sig.parameters[0];
            prop_assert_eq!(&node.name, &name);
            prop_assert_eq!(node.rule, Some(Rule::Range));
            prop_assert_eq!(&node.rule_data, &format!("{min}-{max}"));
        }

        #[test]
        fn arbitrary_text_never_panics(text in ".{0,200}") {
            // Lenient parsing may produce anything, but must not panic.
            let _ = SignatureParser::default().parse(&text);
        }
    }
}
