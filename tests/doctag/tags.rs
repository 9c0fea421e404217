//! Integration tests for description, version, and internal tag extraction.

use callguard_doctag::tags::{extract_description, extract_internal_tags, extract_version_tags};
use callguard_doctag::CommentBlock;

const FULL_COMMENT: &str = "/**\n\
 * Imports a batch of records\n\
 *\n\
 * Reads the supplied rows, validates each one\n\
 * and writes the survivors to storage\n\
 *\n\
 * {@internal context cli,api}\n\
 * {@internal audit full}\n\
 * @since 1.0.0\n\
 * @version 1.4.2\n\
 * @param array $batch the records\n\
 */";

#[test]
fn description_short_and_long() {
    let block = CommentBlock::new(FULL_COMMENT);
    let (short, long) = extract_description(&block);
    assert_eq!(short, "Imports a batch of records");
    assert_eq!(
        long,
        "Reads the supplied rows, validates each one and writes the survivors to storage"
    );
}

#[test]
fn description_with_no_blank_line_has_empty_long() {
    let block = CommentBlock::new("/**\n * All of it is short\n * @param int $x the x\n */");
    let (short, long) = extract_description(&block);
    assert_eq!(short, "All of it is short");
    assert_eq!(long, "");
}

#[test]
fn version_tags_found_anywhere_in_the_block() {
    let block = CommentBlock::new(FULL_COMMENT);
    let tags = extract_version_tags(&block);
    assert_eq!(tags.since, "1.0.0");
    assert_eq!(tags.version, "1.4.2");
}

#[test]
fn absent_tags_degrade_to_empty_defaults() {
    let block = CommentBlock::new("/** Just a sentence */");
    let (short, long) = extract_description(&block);
    assert_eq!(short, "Just a sentence");
    assert_eq!(long, "");
    let tags = extract_version_tags(&block);
    assert_eq!(tags.since, "");
    assert_eq!(tags.version, "");
    assert!(extract_internal_tags(&block).is_empty());
}

#[test]
fn internal_tags_by_name_with_last_wins() {
    let block = CommentBlock::new(FULL_COMMENT);
    let tags = extract_internal_tags(&block);
    assert_eq!(tags["context"], "cli,api");
    assert_eq!(tags["audit"], "full");

    let block = CommentBlock::new(
        "/**\n * {@internal context cli}\n * {@internal context web}\n */",
    );
    let tags = extract_internal_tags(&block);
    assert_eq!(tags["context"], "web");
}

#[test]
fn extraction_degrades_on_garbage() {
    let block = CommentBlock::new("*** // {@internal} @since @version ???");
    let (short, long) = extract_description(&block);
    assert_eq!(short, "");
    assert_eq!(long, "");
    let tags = extract_version_tags(&block);
    assert_eq!(tags.since, "");
    assert_eq!(tags.version, "");
    assert!(extract_internal_tags(&block).is_empty());
}
