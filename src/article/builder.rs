//! Article builder
//!
//! This module provides the ArticleBuilder for assembling articles field by
//! field, mostly for callers that do not receive items as deserialized JSON.

use super::types::{Article, ArticleState, ArticleType, Category, Subject};

#[must_use]
#[derive(Debug, Clone, Default)]
pub struct ArticleBuilder {
    article: Article,
}

impl ArticleBuilder {
    /// Create a new ArticleBuilder for the given item identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            article: Article {
                id: Some(id.into()),
                ..Article::default()
            },
        }
    }

    /// Set the item version
    pub fn version(mut self, version: u32) -> Self {
        self.article.version = Some(version);
        self
    }

    /// Set the workflow state
    pub fn state(mut self, state: impl Into<ArticleState>) -> Self {
        self.article.state = Some(state.into());
        self
    }

    /// Set the item type
    pub fn item_type(mut self, item_type: ArticleType) -> Self {
        self.article.item_type = Some(item_type);
        self
    }

    /// Set the creation timestamp (passed through verbatim)
    pub fn firstcreated(mut self, firstcreated: impl Into<String>) -> Self {
        self.article.firstcreated = Some(firstcreated.into());
        self
    }

    /// Set the version timestamp (passed through verbatim)
    pub fn versioncreated(mut self, versioncreated: impl Into<String>) -> Self {
        self.article.versioncreated = Some(versioncreated.into());
        self
    }

    /// Set the priority code
    pub fn priority(mut self, priority: u32) -> Self {
        self.article.priority = Some(priority);
        self
    }

    /// Set the urgency code
    pub fn urgency(mut self, urgency: u32) -> Self {
        self.article.urgency = Some(urgency);
        self
    }

    /// Set the publication status
    pub fn pubstatus(mut self, pubstatus: impl Into<String>) -> Self {
        self.article.pubstatus = Some(pubstatus.into());
        self
    }

    pub fn headline(mut self, headline: impl Into<String>) -> Self {
        self.article.headline = Some(headline.into());
        self
    }

    pub fn byline(mut self, byline: impl Into<String>) -> Self {
        self.article.byline = Some(byline.into());
        self
    }

    pub fn dateline(mut self, dateline: impl Into<String>) -> Self {
        self.article.dateline = Some(dateline.into());
        self
    }

    pub fn creditline(mut self, creditline: impl Into<String>) -> Self {
        self.article.creditline = Some(creditline.into());
        self
    }

    /// Set the keyword list
    pub fn keywords(mut self, keywords: Vec<impl Into<String>>) -> Self {
        self.article.keywords = keywords.into_iter().map(|k| k.into()).collect();
        self
    }

    /// Add a single keyword
    pub fn add_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.article.keywords.push(keyword.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.article.source = Some(source.into());
        self
    }

    pub fn original_source(mut self, original_source: impl Into<String>) -> Self {
        self.article.original_source = Some(original_source.into());
        self
    }

    pub fn place(mut self, place: impl Into<String>) -> Self {
        self.article.place = Some(place.into());
        self
    }

    pub fn located(mut self, located: impl Into<String>) -> Self {
        self.article.located = Some(located.into());
        self
    }

    /// Add a subject code
    pub fn add_subject(mut self, qcode: impl Into<String>) -> Self {
        self.article.subject.push(Subject::new(qcode));
        self
    }

    /// Set the ANPA category code
    pub fn category(mut self, qcode: impl Into<String>) -> Self {
        self.article.anpa_category = Some(Category::new(qcode));
        self
    }

    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.article.abstract_text = Some(abstract_text.into());
        self
    }

    /// Set the body markup
    pub fn body_html(mut self, body_html: impl Into<String>) -> Self {
        self.article.body_html = Some(body_html.into());
        self
    }

    /// Finish building
    ///
    /// Never fails: required NewsML fields are checked when the article is
    /// formatted, not here.
    pub fn build(self) -> Article {
        self.article
    }
}
