//! NewsManagement Tests

use super::common::{corrected, format_and_parse, published};
use newsml_rs::ArticleState;

#[test]
fn test_management_fields() {
    let root = format_and_parse(&published());
    let mgmt = root.at(&["NewsItem", "NewsManagement"]);

    assert_eq!(
        mgmt.child_names(),
        vec![
            "NewsItemType",
            "FirstCreated",
            "ThisRevisionCreated",
            "Status",
            "Urgency",
            "Instruction"
        ]
    );
    assert_eq!(mgmt.child("NewsItemType").attr("FormalName"), Some("News"));
    assert_eq!(mgmt.child("FirstCreated").text, "20240101T0000Z");
    assert_eq!(mgmt.child("ThisRevisionCreated").text, "20240101T0100Z");
    assert_eq!(mgmt.child("Status").attr("FormalName"), Some("usable"));
    assert_eq!(mgmt.child("Urgency").attr("FormalName"), Some("3"));
}

#[test]
fn test_instruction_update() {
    for state in [
        ArticleState::Draft,
        ArticleState::Published,
        ArticleState::Scheduled,
        ArticleState::Other("unknown".to_string()),
    ] {
        let mut article = published();
        article.state = Some(state);
        let root = format_and_parse(&article);
        assert_eq!(
            root.at(&["NewsItem", "NewsManagement", "Instruction"])
                .attr("FormalName"),
            Some("Update")
        );
    }
}

#[test]
fn test_instruction_correction() {
    let root = format_and_parse(&corrected());
    assert_eq!(
        root.at(&["NewsItem", "NewsManagement", "Instruction"])
            .attr("FormalName"),
        Some("Correction")
    );
}

#[test]
fn test_timestamps_passed_verbatim() {
    let mut article = published();
    article.firstcreated = Some("2024-01-01T00:00:00+0000".to_string());
    article.versioncreated = Some("not a date".to_string());

    let root = format_and_parse(&article);
    let mgmt = root.at(&["NewsItem", "NewsManagement"]);
    assert_eq!(mgmt.child("FirstCreated").text, "2024-01-01T00:00:00+0000");
    assert_eq!(mgmt.child("ThisRevisionCreated").text, "not a date");
}
