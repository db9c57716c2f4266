//! Required-field validation
//!
//! NewsML 1.2 output needs a handful of article fields that the content system
//! does not guarantee. They are checked up front so a document is either
//! written completely or not at all.

use crate::article::{Article, ArticleState};
use crate::error::FormatError;
use crate::revision::{RevisionInfo, revision_for};

/// An article whose required NewsML fields are known to be present
///
/// Borrows the article; optional display fields are still read from
/// [`ValidatedArticle::article`] with empty-string defaults.
#[derive(Debug, Clone)]
pub struct ValidatedArticle<'a> {
    /// The underlying article
    pub article: &'a Article,
    /// Item id, written as `NewsItemId` and `PublicIdentifier`
    pub id: &'a str,
    /// Workflow state; drives the revision attributes and instruction
    pub state: &'a ArticleState,
    /// Creation timestamp as supplied by the content system
    pub firstcreated: &'a str,
    /// Timestamp of this revision
    pub versioncreated: &'a str,
    /// Publication status, e.g. `usable`
    pub pubstatus: &'a str,
    /// Urgency code
    pub urgency: u32,
    /// First keyword, emitted as the keyword line
    pub keyword: &'a str,
    /// ANPA category code
    pub category: &'a str,
    /// Revision attributes derived from state and version
    pub revision: RevisionInfo,
}

/// Validate an article for NewsML 1.2 output
///
/// Fields are checked in document order and the first missing one is reported.
/// Every text value that ends up in the document must also consist of
/// characters XML 1.0 allows; control characters other than tab, line feed
/// and carriage return are rejected with [`FormatError::InvalidField`].
///
/// # Examples
///
/// ```
/// use newsml_rs::{ArticleBuilder, FormatError, validate_article};
///
/// let article = ArticleBuilder::new("abc1")
///     .state("published")
///     .firstcreated("20240101T0000Z")
///     .versioncreated("20240101T0100Z")
///     .pubstatus("usable")
///     .urgency(3)
///     .keywords(vec!["sport"])
///     .build();
///
/// // No category
/// let err = validate_article(&article).unwrap_err();
/// assert_eq!(err, FormatError::MissingRequiredField("anpa-category"));
/// ```
pub fn validate_article(
    article: &Article,
) -> std::result::Result<ValidatedArticle<'_>, FormatError> {
    let id = required(article.id.as_deref(), "_id")?;
    let state = article
        .state
        .as_ref()
        .ok_or(FormatError::MissingRequiredField("state"))?;
    let firstcreated = required(article.firstcreated.as_deref(), "firstcreated")?;
    let versioncreated = required(article.versioncreated.as_deref(), "versioncreated")?;
    let pubstatus = required(article.pubstatus.as_deref(), "pubstatus")?;
    let urgency = article
        .urgency
        .ok_or(FormatError::MissingRequiredField("urgency"))?;
    let keyword = required(article.first_keyword(), "keywords")?;
    let category = required(
        article
            .anpa_category
            .as_ref()
            .and_then(|c| c.qcode.as_deref()),
        "anpa-category",
    )?;
    let revision = revision_for(state, article.version)?;

    let text_fields = [
        ("_id", Some(id)),
        ("firstcreated", Some(firstcreated)),
        ("versioncreated", Some(versioncreated)),
        ("pubstatus", Some(pubstatus)),
        ("headline", article.headline.as_deref()),
        ("byline", article.byline.as_deref()),
        ("dateline", article.dateline.as_deref()),
        ("creditline", article.creditline.as_deref()),
        ("keywords", Some(keyword)),
        ("source", article.source.as_deref()),
        ("original_source", article.original_source.as_deref()),
        ("place", article.place.as_deref()),
        ("located", article.located.as_deref()),
        ("anpa-category", Some(category)),
        ("abstract", article.abstract_text.as_deref()),
        ("body_html", article.body_html.as_deref()),
    ];
    for (field, value) in text_fields {
        xml_text(value, field)?;
    }
    for subject in &article.subject {
        xml_text(subject.qcode.as_deref(), "subject")?;
    }

    Ok(ValidatedArticle {
        article,
        id,
        state,
        firstcreated,
        versioncreated,
        pubstatus,
        urgency,
        keyword,
        category,
        revision,
    })
}

fn required<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> std::result::Result<&'a str, FormatError> {
    value.ok_or(FormatError::MissingRequiredField(field))
}

fn xml_text(value: Option<&str>, field: &'static str) -> std::result::Result<(), FormatError> {
    match value.and_then(|v| v.chars().find(|&c| !is_xml_char(c))) {
        Some(c) => Err(FormatError::InvalidField {
            field,
            reason: format!("character U+{:04X} is not allowed in XML 1.0", u32::from(c)),
        }),
        None => Ok(()),
    }
}

/// Whether `c` is in the XML 1.0 `Char` production
pub(crate) fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}
