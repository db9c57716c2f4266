//! Content System JSON Tests
//!
//! Articles deserialized from the content system's JSON item shape.

use super::common::{format_and_parse, formatter, wire};
use newsml_rs::{Article, ArticleState, ArticleType, FormatError};

const ITEM: &str = r#"{
    "_id": "urn:newsml:localhost:2024-01-01T09:00:00.000000:abc1",
    "_version": 3,
    "type": "text",
    "state": "corrected",
    "firstcreated": "2024-01-01T09:00:00+0000",
    "versioncreated": "2024-01-01T10:00:00+0000",
    "pubstatus": "usable",
    "priority": 5,
    "urgency": 2,
    "headline": "Bushfire update",
    "keywords": ["bushfire", "nsw"],
    "source": "AAP",
    "place": "NSW",
    "subject": [{"qcode": "06000000", "name": "environmental issue"}],
    "anpa-category": {"qcode": "a", "name": "Australian General News"},
    "abstract": "Fire crews gain ground",
    "body_html": "<p>Crews worked overnight.</p>",
    "unrelated_field": true
}"#;

#[test]
fn test_deserialize_item() {
    let article: Article = serde_json::from_str(ITEM).unwrap();
    assert_eq!(article.version, Some(3));
    assert_eq!(article.state, Some(ArticleState::Corrected));
    assert_eq!(article.item_type, Some(ArticleType::Text));
    assert_eq!(article.keywords, vec!["bushfire", "nsw"]);
    assert_eq!(
        article.anpa_category.as_ref().and_then(|c| c.qcode.as_deref()),
        Some("a")
    );
    assert_eq!(article.abstract_text.as_deref(), Some("Fire crews gain ground"));
}

#[test]
fn test_format_deserialized_item() {
    let article: Article = serde_json::from_str(ITEM).unwrap();
    let root = format_and_parse(&article);

    let revision = root.at(&["NewsItem", "Identification", "NewsIdentifier", "RevisionId"]);
    assert_eq!(revision.text, "3");
    assert_eq!(revision.attr("PreviousRevision"), Some("2"));
    assert_eq!(
        root.at(&["NewsEnvelope", "Priority"]).attr("FormalName"),
        Some("5")
    );
    assert_eq!(
        root.at(&[
            "NewsItem",
            "NewsComponent",
            "NewsComponent",
            "NewsLines",
            "KeywordLine"
        ])
        .text,
        "bushfire"
    );
}

#[test]
fn test_unknown_state_deserializes() {
    let article: Article = serde_json::from_str(r#"{"state": "unpublished"}"#).unwrap();
    assert_eq!(
        article.state,
        Some(ArticleState::Other("unpublished".to_string()))
    );
}

#[test]
fn test_sparse_item_reports_first_missing_field() {
    let article: Article =
        serde_json::from_str(r#"{"_id": "x", "state": "published"}"#).unwrap();
    let err = formatter().format(&article, &wire()).unwrap_err();
    assert_eq!(err.kind(), &FormatError::MissingRequiredField("firstcreated"));
}
