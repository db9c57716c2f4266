//! NewsML 1.2 document assembler

use super::elements::{
    DocumentContext, write_identification, write_news_component, write_news_envelope,
    write_news_management,
};
use super::xml::{CatalogRef, NewsMlWriter};
use crate::article::Article;
use crate::clock::FormatterClock;
use crate::config::FormatterConfig;
use crate::error::{FormatError, FormatterError};
use crate::formatter::{Formatter, FormatterOutput};
use crate::sequence::{Destination, SequenceNumberProvider};
use crate::validation::{ValidatedArticle, validate_article};
use crate::Result;
use tracing::{debug, warn};

/// NewsML 1.2 formatter
///
/// Produces one `NewsML` document per call, consuming one sequence number from
/// the provider for the destination. Dates in the document come from the clock
/// given at construction.
///
/// # Example
///
/// ```
/// use newsml_rs::{
///     ArticleBuilder, Destination, FormatterClock, InMemorySequenceProvider, NewsMl12Formatter,
/// };
///
/// let clock = FormatterClock::from_ymd_hms(2024, 1, 1, 9, 30, 0).unwrap();
/// let formatter = NewsMl12Formatter::new(InMemorySequenceProvider::new(), clock);
///
/// let article = ArticleBuilder::new("abc1")
///     .version(1)
///     .state("published")
///     .firstcreated("20240101T0000Z")
///     .versioncreated("20240101T0100Z")
///     .pubstatus("usable")
///     .urgency(3)
///     .keywords(vec!["sport"])
///     .category("s")
///     .headline("Test headline")
///     .build();
///
/// let output = formatter
///     .format(&article, &Destination::newsml12("aap-wire"))
///     .unwrap();
/// assert_eq!(output.sequence_number, "1");
/// assert!(output.document.contains("<Headline>Test headline</Headline>"));
/// ```
#[derive(Debug)]
pub struct NewsMl12Formatter<P> {
    provider: P,
    clock: FormatterClock,
    config: FormatterConfig,
}

impl<P: SequenceNumberProvider> NewsMl12Formatter<P> {
    /// Create a formatter with the AAP configuration
    pub fn new(provider: P, clock: FormatterClock) -> Self {
        Self::with_config(provider, clock, FormatterConfig::aap())
    }

    /// Create a formatter with a custom configuration
    pub fn with_config(provider: P, clock: FormatterClock, config: FormatterConfig) -> Self {
        Self {
            provider,
            clock,
            config,
        }
    }

    /// Configuration supplying the catalog, DTD and licensing text
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Instant stamped on every document this formatter writes
    pub fn clock(&self) -> &FormatterClock {
        &self.clock
    }

    /// Sequence number provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Format an article for a destination
    ///
    /// The article is validated before a sequence number is requested, so an
    /// article missing required fields does not consume one. Any failure is
    /// returned as a [`FormatterError`] naming the destination; no partial
    /// document is ever returned.
    pub fn format(&self, article: &Article, destination: &Destination) -> Result<FormatterOutput> {
        match self.try_format(article, destination) {
            Ok(output) => {
                debug!(
                    "Formatted article {} for {} (sequence {}, {} bytes)",
                    article.id.as_deref().unwrap_or(""),
                    destination.name,
                    output.sequence_number,
                    output.document.len()
                );
                Ok(output)
            }
            Err(e) => {
                warn!(
                    "NewsML 1.2 formatting failed for {}: {}",
                    destination.name, e
                );
                Err(FormatterError::new(destination.name.clone(), e))
            }
        }
    }

    fn try_format(
        &self,
        article: &Article,
        destination: &Destination,
    ) -> std::result::Result<FormatterOutput, FormatError> {
        let item = validate_article(article)?;
        let sequence_number = self.provider.generate_sequence_number(destination)?;
        let document = self.write_document(&item, &sequence_number)?;

        Ok(FormatterOutput {
            sequence_number,
            document,
        })
    }

    /// Render the document for a given sequence number without touching the provider
    ///
    /// Output depends only on the article, the sequence number, the clock and
    /// the configuration.
    pub fn render(
        &self,
        article: &Article,
        sequence_number: &str,
    ) -> std::result::Result<String, FormatError> {
        let item = validate_article(article)?;
        self.write_document(&item, sequence_number)
    }

    fn write_document(
        &self,
        item: &ValidatedArticle<'_>,
        sequence_number: &str,
    ) -> std::result::Result<String, FormatError> {
        let ctx = DocumentContext {
            config: &self.config,
            clock: &self.clock,
        };

        let mut w = NewsMlWriter::new();
        w.element("NewsML", |w| {
            w.empty(
                "Catalog",
                &CatalogRef {
                    href: &self.config.catalog_href,
                },
            )?;
            write_news_envelope(w, &ctx, item, sequence_number)?;
            w.element("NewsItem", |w| {
                write_identification(w, &ctx, item)?;
                write_news_management(w, item)?;
                write_news_component(w, &ctx, item)
            })
        })?;

        let body = w.into_string()?;
        let mut document = self.config.preamble();
        document.push_str(&body);
        Ok(document)
    }

    /// Check whether this formatter handles a format type and article type
    ///
    /// # Example
    ///
    /// ```
    /// use newsml_rs::{FormatterClock, InMemorySequenceProvider, NewsMl12Formatter};
    ///
    /// let formatter =
    ///     NewsMl12Formatter::new(InMemorySequenceProvider::new(), FormatterClock::now());
    /// assert!(formatter.can_format("newsml12", "text"));
    /// assert!(!formatter.can_format("newsml12", "picture"));
    /// assert!(!formatter.can_format("other", "text"));
    /// ```
    pub fn can_format(&self, format_type: &str, article_type: &str) -> bool {
        format_type == self.config.format_type && self.config.supports_article_type(article_type)
    }
}

impl<P: SequenceNumberProvider> Formatter for NewsMl12Formatter<P> {
    fn format_type(&self) -> &str {
        &self.config.format_type
    }

    fn format(&self, article: &Article, destination: &Destination) -> Result<FormatterOutput> {
        NewsMl12Formatter::format(self, article, destination)
    }

    fn can_format(&self, format_type: &str, article_type: &str) -> bool {
        NewsMl12Formatter::can_format(self, format_type, article_type)
    }
}
