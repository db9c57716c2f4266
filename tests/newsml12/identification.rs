//! Identification Tests
//!
//! NewsIdentifier fields and the revision attributes on RevisionId.

use super::common::{corrected, format_and_parse, published};

#[test]
fn test_news_identifier_fields() {
    let root = format_and_parse(&published());
    let ident = root.at(&["NewsItem", "Identification", "NewsIdentifier"]);

    assert_eq!(
        ident.child_names(),
        vec![
            "ProviderId",
            "DateId",
            "NewsItemId",
            "RevisionId",
            "PublicIdentifier"
        ]
    );
    assert_eq!(ident.child("ProviderId").text, "aap.com.au");
    assert_eq!(ident.child("DateId").text, "20240101");
    assert_eq!(ident.child("NewsItemId").text, "abc1");
    assert_eq!(ident.child("PublicIdentifier").text, "abc1");
}

#[test]
fn test_date_label() {
    let root = format_and_parse(&published());
    assert_eq!(
        root.at(&["NewsItem", "Identification", "DateLabel"]).text,
        "Monday 01 January 2024"
    );
}

#[test]
fn test_revision_first_publication() {
    for state in ["draft", "submitted", "published", "killed", "in_progress"] {
        let mut article = published();
        article.version = Some(5);
        article.state = Some(state.into());

        let root = format_and_parse(&article);
        let revision = root.at(&["NewsItem", "Identification", "NewsIdentifier", "RevisionId"]);
        assert_eq!(revision.text, "5");
        assert_eq!(revision.attr("PreviousRevision"), Some("0"), "state {state}");
        assert_eq!(revision.attr("Update"), Some("N"), "state {state}");
    }
}

#[test]
fn test_revision_corrected() {
    let root = format_and_parse(&corrected());
    let revision = root.at(&["NewsItem", "Identification", "NewsIdentifier", "RevisionId"]);
    assert_eq!(revision.text, "2");
    assert_eq!(revision.attr("PreviousRevision"), Some("1"));
    assert_eq!(revision.attr("Update"), Some("A"));
}

#[test]
fn test_revision_corrected_many_versions() {
    for version in [1u32, 3, 17, 250] {
        let mut article = corrected();
        article.version = Some(version);

        let root = format_and_parse(&article);
        let revision = root.at(&["NewsItem", "Identification", "NewsIdentifier", "RevisionId"]);
        assert_eq!(revision.text, version.to_string());
        assert_eq!(
            revision.attr("PreviousRevision"),
            Some((version - 1).to_string().as_str())
        );
    }
}

#[test]
fn test_revision_without_version_when_not_corrected() {
    let mut article = published();
    article.version = None;

    let root = format_and_parse(&article);
    let revision = root.at(&["NewsItem", "Identification", "NewsIdentifier", "RevisionId"]);
    assert_eq!(revision.text, "");
    assert_eq!(revision.attr("PreviousRevision"), Some("0"));
}
