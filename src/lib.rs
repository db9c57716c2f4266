#![doc = include_str!("../README.md")]

/// News article model
pub mod article;
/// Formatter timestamp
pub mod clock;
mod config;
mod error;
mod formatter;
/// NewsML 1.2 document assembly
pub mod newsml;
/// Revision and correction policy
pub mod revision;
/// Publish sequence numbers
pub mod sequence;
/// Required-field validation
pub mod validation;

pub use article::{Article, ArticleBuilder, ArticleState, ArticleType, Category, Subject};
pub use clock::FormatterClock;
pub use config::{FormatterConfig, NEWSML12_FORMAT};
pub use error::{FormatError, FormatterError, Result, SequenceError};
pub use formatter::{Formatter, FormatterOutput};
pub use newsml::NewsMl12Formatter;
pub use revision::{Instruction, RevisionInfo, UpdateMarker, revision_for};
pub use sequence::{Destination, InMemorySequenceProvider, SequenceNumberProvider, SequenceRange};
pub use validation::{ValidatedArticle, validate_article};
