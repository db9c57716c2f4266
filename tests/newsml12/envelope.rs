//! NewsEnvelope Tests
//!
//! Transmission id, envelope date-time and priority.

use super::common::{clock, format_and_parse, formatter, published, wire};
use newsml_rs::ArticleBuilder;

#[test]
fn test_transmission_id_is_sequence_number() {
    let formatter = formatter();
    let first = formatter.format(&published(), &wire()).unwrap();
    let second = formatter.format(&published(), &wire()).unwrap();

    assert_eq!(first.sequence_number, "1");
    assert_eq!(second.sequence_number, "2");

    let root = super::common::parse(&second.document);
    assert_eq!(root.at(&["NewsEnvelope", "TransmissionId"]).text, "2");
}

#[test]
fn test_date_and_time_uses_clock() {
    let root = format_and_parse(&published());
    assert_eq!(
        root.at(&["NewsEnvelope", "DateAndTime"]).text,
        "20240101T093000+0000"
    );
    assert_eq!(clock().date_and_time(), "20240101T093000+0000");
}

#[test]
fn test_priority_formal_name() {
    let mut article = published();
    article.priority = Some(6);
    let root = format_and_parse(&article);
    assert_eq!(
        root.at(&["NewsEnvelope", "Priority"]).attr("FormalName"),
        Some("6")
    );
}

#[test]
fn test_priority_absent_is_empty() {
    let root = format_and_parse(&published());
    let priority = root.at(&["NewsEnvelope", "Priority"]);
    assert_eq!(priority.attr("FormalName"), Some(""));
    assert!(priority.children.is_empty());
}

#[test]
fn test_envelope_child_order() {
    let root = format_and_parse(&published());
    assert_eq!(
        root.child("NewsEnvelope").child_names(),
        vec!["TransmissionId", "DateAndTime", "Priority"]
    );
}

#[test]
fn test_sequence_numbers_per_destination() {
    let formatter = formatter();
    let article = ArticleBuilder::new("x")
        .state("published")
        .firstcreated("a")
        .versioncreated("b")
        .pubstatus("usable")
        .urgency(1)
        .keywords(vec!["k"])
        .category("c")
        .build();

    let a = formatter
        .format(&article, &newsml_rs::Destination::newsml12("a"))
        .unwrap();
    let b = formatter
        .format(&article, &newsml_rs::Destination::newsml12("b"))
        .unwrap();
    assert_eq!(a.sequence_number, "1");
    assert_eq!(b.sequence_number, "1");
}
