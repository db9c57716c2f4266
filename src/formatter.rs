//! Output formatter abstraction

use crate::Result;
use crate::article::Article;
use crate::sequence::Destination;

/// Document produced for one destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterOutput {
    /// Sequence number issued for this transmission
    pub sequence_number: String,
    /// Serialized document, preamble included
    pub document: String,
}

/// A publishing output format
///
/// A dispatcher holds formatters as `dyn Formatter`, asks each
/// [`can_format`](Formatter::can_format) for a destination's format type and
/// the article's type, and calls [`format`](Formatter::format) on the match.
pub trait Formatter: Send + Sync {
    /// Format type tag (e.g., "newsml12")
    fn format_type(&self) -> &str;

    /// Format an article for a destination
    fn format(&self, article: &Article, destination: &Destination) -> Result<FormatterOutput>;

    /// Check whether this formatter handles a format type and article type
    fn can_format(&self, format_type: &str, article_type: &str) -> bool;
}
