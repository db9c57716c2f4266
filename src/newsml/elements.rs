//! NewsML 1.2 element builders
//!
//! One function per subtree of the document. Each writes its subtree at the
//! writer's current position; the assembler calls them in document order.

use super::xml::{CategoryProperty, FormalName, NewsMlWriter};
use crate::clock::FormatterClock;
use crate::config::FormatterConfig;
use crate::error::FormatError;
use crate::revision::Instruction;
use crate::validation::ValidatedArticle;
use tracing::trace;

type WriteResult = std::result::Result<(), FormatError>;

/// Values shared by every builder for one document
pub(crate) struct DocumentContext<'a> {
    pub config: &'a FormatterConfig,
    pub clock: &'a FormatterClock,
}

/// `NewsEnvelope`: transmission id, envelope time, priority
pub(crate) fn write_news_envelope(
    w: &mut NewsMlWriter,
    ctx: &DocumentContext<'_>,
    item: &ValidatedArticle<'_>,
    sequence_number: &str,
) -> WriteResult {
    trace!("Writing NewsEnvelope");
    let priority = item
        .article
        .priority
        .map(|p| p.to_string())
        .unwrap_or_default();

    w.element("NewsEnvelope", |w| {
        w.text_element("TransmissionId", sequence_number)?;
        w.text_element("DateAndTime", &ctx.clock.date_and_time())?;
        w.empty("Priority", &FormalName(&priority))
    })
}

/// `Identification`: news identifier with revision, and date label
pub(crate) fn write_identification(
    w: &mut NewsMlWriter,
    ctx: &DocumentContext<'_>,
    item: &ValidatedArticle<'_>,
) -> WriteResult {
    trace!("Writing Identification");
    let version = item
        .article
        .version
        .map(|v| v.to_string())
        .unwrap_or_default();

    w.element("Identification", |w| {
        w.element("NewsIdentifier", |w| {
            w.text_element("ProviderId", &ctx.config.provider_id)?;
            w.text_element("DateId", &ctx.clock.date_id())?;
            w.text_element("NewsItemId", item.id)?;
            w.text_element_with("RevisionId", &item.revision, &version)?;
            w.text_element("PublicIdentifier", item.id)
        })?;
        w.text_element("DateLabel", &ctx.clock.date_label())
    })
}

/// `NewsManagement`: item type, timestamps, status, urgency, instruction
pub(crate) fn write_news_management(
    w: &mut NewsMlWriter,
    item: &ValidatedArticle<'_>,
) -> WriteResult {
    trace!("Writing NewsManagement");
    let urgency = item.urgency.to_string();
    let instruction = Instruction::for_state(item.state);

    w.element("NewsManagement", |w| {
        w.empty("NewsItemType", &FormalName("News"))?;
        w.text_element("FirstCreated", item.firstcreated)?;
        w.text_element("ThisRevisionCreated", item.versioncreated)?;
        w.empty("Status", &FormalName(item.pubstatus))?;
        w.empty("Urgency", &FormalName(&urgency))?;
        w.empty("Instruction", &FormalName(instruction.formal_name()))
    })
}

/// Outer `NewsComponent` holding the main component and its parts
pub(crate) fn write_news_component(
    w: &mut NewsMlWriter,
    ctx: &DocumentContext<'_>,
    item: &ValidatedArticle<'_>,
) -> WriteResult {
    trace!("Writing NewsComponent");
    w.element("NewsComponent", |w| {
        w.element("NewsComponent", |w| {
            w.empty("Role", &FormalName("Main"))?;
            write_news_lines(w, item)?;
            write_rights_metadata(w, ctx, item)?;
            write_descriptive_metadata(w, item)?;
            write_abstract(w, item)?;
            write_body(w, item)
        })
    })
}

fn write_news_lines(w: &mut NewsMlWriter, item: &ValidatedArticle<'_>) -> WriteResult {
    let article = item.article;
    w.element("NewsLines", |w| {
        w.text_element("Headline", article.headline.as_deref().unwrap_or(""))?;
        w.text_element("ByLine", article.byline.as_deref().unwrap_or(""))?;
        w.text_element("DateLine", article.dateline.as_deref().unwrap_or(""))?;
        w.text_element("CreditLine", article.creditline.as_deref().unwrap_or(""))?;
        w.text_element("KeywordLine", item.keyword)
    })
}

fn write_rights_metadata(
    w: &mut NewsMlWriter,
    ctx: &DocumentContext<'_>,
    item: &ValidatedArticle<'_>,
) -> WriteResult {
    let holder = item.article.rights_holder();
    let date_and_time = ctx.clock.date_and_time();

    w.element("RightsMetadata", |w| {
        w.element("Copyright", |w| {
            w.text_element("CopyrightHolder", holder)?;
            w.text_element("CopyrightDate", &ctx.clock.year())
        })?;
        w.element("UsageRights", |w| {
            w.text_element("UsageType", &ctx.config.usage_type)?;
            w.text_element("Geography", item.article.geography())?;
            w.text_element("RightsHolder", holder)?;
            w.text_element("Limitations", &ctx.config.limitations)?;
            w.text_element("StartDate", &date_and_time)?;
            w.text_element("EndDate", &date_and_time)
        })
    })
}

fn write_descriptive_metadata(w: &mut NewsMlWriter, item: &ValidatedArticle<'_>) -> WriteResult {
    let subjects = &item.article.subject;
    w.element("DescriptiveMetadata", |w| {
        if subjects.is_empty() {
            w.text_element("SubjectCode", "")?;
        } else {
            w.element("SubjectCode", |w| {
                for subject in subjects {
                    w.empty("Subject", &FormalName(subject.qcode.as_deref().unwrap_or("")))?;
                }
                Ok(())
            })?;
        }
        w.empty("Property", &CategoryProperty { value: item.category })
    })
}

fn write_abstract(w: &mut NewsMlWriter, item: &ValidatedArticle<'_>) -> WriteResult {
    w.element("NewsComponent", |w| {
        w.empty("Role", &FormalName("Abstract"))?;
        write_text_content_item(w, item.article.abstract_text.as_deref().unwrap_or(""))
    })
}

fn write_body(w: &mut NewsMlWriter, item: &ValidatedArticle<'_>) -> WriteResult {
    w.element("NewsComponent", |w| {
        w.empty("Role", &FormalName("BodyText"))?;
        w.empty("Format", &FormalName("Text"))?;
        write_text_content_item(w, item.article.body_html.as_deref().unwrap_or(""))
    })
}

fn write_text_content_item(w: &mut NewsMlWriter, content: &str) -> WriteResult {
    w.element("ContentItem", |w| {
        w.empty("MediaType", &FormalName("Text"))?;
        w.empty("Format", &FormalName("Text"))?;
        w.text_element("DataContent", content)
    })
}
