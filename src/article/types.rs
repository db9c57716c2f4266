//! Article type definitions
//!
//! This module contains the data structures describing the news item handed
//! to the formatter by the publishing pipeline.

use std::fmt;
use std::str::FromStr;

/// News item as stored by the content system
///
/// Only the fields the NewsML 1.2 output needs are modelled. Fields the output
/// requires are still `Option`s here: the article is owned upstream and the
/// formatter validates it before writing anything (see
/// [`validate_article`](crate::validate_article)).
///
/// # Examples
///
/// ```
/// use newsml_rs::article::{Article, ArticleState, Category};
///
/// let article = Article {
///     id: Some("urn:newsml:localhost:2024-01-01:abc1".to_string()),
///     version: Some(1),
///     state: Some(ArticleState::Published),
///     keywords: vec!["sport".to_string()],
///     anpa_category: Some(Category::new("s")),
///     ..Article::default()
/// };
///
/// assert!(!article.is_corrected());
/// assert_eq!(article.first_keyword(), Some("sport"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Article {
    /// Unique item identifier (`_id`)
    #[cfg_attr(feature = "serde", serde(rename = "_id"))]
    pub id: Option<String>,

    /// Item version (`_version`)
    #[cfg_attr(feature = "serde", serde(rename = "_version"))]
    pub version: Option<u32>,

    /// Workflow state
    pub state: Option<ArticleState>,

    /// Item type (text, preformatted, picture, ...)
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub item_type: Option<ArticleType>,

    /// Creation timestamp, already formatted by the content system
    pub firstcreated: Option<String>,

    /// Timestamp of this version, already formatted by the content system
    pub versioncreated: Option<String>,

    /// Priority code
    pub priority: Option<u32>,

    /// Urgency code
    pub urgency: Option<u32>,

    /// Publication status (e.g., "usable", "withheld")
    pub pubstatus: Option<String>,

    /// Headline
    pub headline: Option<String>,

    /// By-line
    pub byline: Option<String>,

    /// Date-line
    pub dateline: Option<String>,

    /// Credit-line
    pub creditline: Option<String>,

    /// Keywords; the first one becomes the NewsML keyword line
    pub keywords: Vec<String>,

    /// Source of the item (e.g., "AAP")
    pub source: Option<String>,

    /// Original source, used when `source` is absent
    pub original_source: Option<String>,

    /// Place name
    pub place: Option<String>,

    /// Located, used when `place` is absent
    pub located: Option<String>,

    /// Subject codes
    pub subject: Vec<Subject>,

    /// ANPA category
    #[cfg_attr(feature = "serde", serde(rename = "anpa-category"))]
    pub anpa_category: Option<Category>,

    /// Abstract text
    #[cfg_attr(feature = "serde", serde(rename = "abstract"))]
    pub abstract_text: Option<String>,

    /// Body markup, passed through as text
    pub body_html: Option<String>,
}

impl Article {
    /// Check if the article is a correction of a published item
    pub fn is_corrected(&self) -> bool {
        self.state == Some(ArticleState::Corrected)
    }

    /// First keyword, if any
    pub fn first_keyword(&self) -> Option<&str> {
        self.keywords.first().map(String::as_str)
    }

    /// Copyright and rights holder: `source`, then `original_source`
    pub fn rights_holder(&self) -> &str {
        self.source
            .as_deref()
            .or(self.original_source.as_deref())
            .unwrap_or("")
    }

    /// Usage geography: `place`, then `located`
    pub fn geography(&self) -> &str {
        self.place
            .as_deref()
            .or(self.located.as_deref())
            .unwrap_or("")
    }
}

/// Workflow state of an article
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum ArticleState {
    Draft,
    Ingested,
    Routed,
    Fetched,
    Submitted,
    InProgress,
    Spiked,
    Scheduled,
    Published,
    /// Published item that has been corrected
    Corrected,
    Killed,
    /// State not known to this crate
    Other(String),
}

impl ArticleState {
    /// State name as used by the content system
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Ingested => "ingested",
            Self::Routed => "routed",
            Self::Fetched => "fetched",
            Self::Submitted => "submitted",
            Self::InProgress => "in_progress",
            Self::Spiked => "spiked",
            Self::Scheduled => "scheduled",
            Self::Published => "published",
            Self::Corrected => "corrected",
            Self::Killed => "killed",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for ArticleState {
    fn from(s: &str) -> Self {
        match s {
            "draft" => Self::Draft,
            "ingested" => Self::Ingested,
            "routed" => Self::Routed,
            "fetched" => Self::Fetched,
            "submitted" => Self::Submitted,
            "in_progress" => Self::InProgress,
            "spiked" => Self::Spiked,
            "scheduled" => Self::Scheduled,
            "published" => Self::Published,
            "corrected" => Self::Corrected,
            "killed" => Self::Killed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ArticleState {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<ArticleState> for String {
    fn from(state: ArticleState) -> Self {
        match state {
            ArticleState::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ArticleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content type of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ArticleType {
    Text,
    Preformatted,
    Composite,
    Picture,
    Graphic,
    Audio,
    Video,
}

impl ArticleType {
    /// Type name as used by the content system
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Preformatted => "preformatted",
            Self::Composite => "composite",
            Self::Picture => "picture",
            Self::Graphic => "graphic",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

impl FromStr for ArticleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "preformatted" => Ok(Self::Preformatted),
            "composite" => Ok(Self::Composite),
            "picture" => Ok(Self::Picture),
            "graphic" => Ok(Self::Graphic),
            "audio" => Ok(Self::Audio),
            "video" => Ok(Self::Video),
            other => Err(format!("Unknown article type: {other}")),
        }
    }
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject code entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Subject {
    /// IPTC subject code (e.g., "15000000")
    pub qcode: Option<String>,
    /// Display name
    pub name: Option<String>,
}

impl Subject {
    /// Create a subject from its qcode
    pub fn new(qcode: impl Into<String>) -> Self {
        Self {
            qcode: Some(qcode.into()),
            name: None,
        }
    }
}

/// ANPA category entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Category {
    /// Category code (e.g., "s" for sport)
    pub qcode: Option<String>,
    /// Display name
    pub name: Option<String>,
}

impl Category {
    /// Create a category from its qcode
    pub fn new(qcode: impl Into<String>) -> Self {
        Self {
            qcode: Some(qcode.into()),
            name: None,
        }
    }
}
