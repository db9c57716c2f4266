//! Typed NewsML element writer
//!
//! Thin layer over `quick_xml::Writer`. Each element kind that carries
//! attributes has its own small record type implementing [`Attributes`], so a
//! builder cannot put an attribute on the wrong element by typo.

use crate::error::FormatError;
use crate::revision::RevisionInfo;
use crate::validation::is_xml_char;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

/// Attribute set written onto a start or empty tag
pub(crate) trait Attributes {
    fn apply(&self, start: &mut BytesStart<'_>);
}

/// Single `FormalName` attribute
pub(crate) struct FormalName<'a>(pub &'a str);

impl Attributes for FormalName<'_> {
    fn apply(&self, start: &mut BytesStart<'_>) {
        start.push_attribute(("FormalName", self.0));
    }
}

/// `Catalog` reference
pub(crate) struct CatalogRef<'a> {
    pub href: &'a str,
}

impl Attributes for CatalogRef<'_> {
    fn apply(&self, start: &mut BytesStart<'_>) {
        start.push_attribute(("Href", self.href));
    }
}

/// `Property FormalName="Category"` with its value
pub(crate) struct CategoryProperty<'a> {
    pub value: &'a str,
}

impl Attributes for CategoryProperty<'_> {
    fn apply(&self, start: &mut BytesStart<'_>) {
        start.push_attribute(("FormalName", "Category"));
        start.push_attribute(("Value", self.value));
    }
}

impl Attributes for RevisionInfo {
    fn apply(&self, start: &mut BytesStart<'_>) {
        start.push_attribute(("PreviousRevision", self.previous_revision.as_str()));
        start.push_attribute(("Update", self.update.as_str()));
    }
}

/// In-memory NewsML document writer
///
/// Output is compact (no indentation). Text and attribute values are escaped
/// by quick-xml. Characters XML 1.0 cannot represent are refused with
/// [`FormatError::Serialization`] instead of being written.
pub(crate) struct NewsMlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl NewsMlWriter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(Cursor::new(Vec::new())),
        }
    }

    fn write(&mut self, event: Event<'_>) -> std::result::Result<(), FormatError> {
        let raw: &[u8] = match &event {
            Event::Start(e) | Event::Empty(e) => &**e,
            Event::Text(e) => &**e,
            _ => &[],
        };
        if let Some(c) = String::from_utf8_lossy(raw).chars().find(|&c| !is_xml_char(c)) {
            return Err(FormatError::Serialization(format!(
                "character U+{:04X} cannot be written in XML 1.0",
                u32::from(c)
            )));
        }

        self.writer
            .write_event(event)
            .map_err(|e| FormatError::Serialization(e.to_string()))
    }

    /// Write `<name>`, the children produced by `children`, then `</name>`
    pub fn element<F>(&mut self, name: &str, children: F) -> std::result::Result<(), FormatError>
    where
        F: FnOnce(&mut Self) -> std::result::Result<(), FormatError>,
    {
        self.write(Event::Start(BytesStart::new(name)))?;
        children(self)?;
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Attribute-only element, e.g. `<Role FormalName="Main"/>`
    pub fn empty<A>(&mut self, name: &str, attrs: &A) -> std::result::Result<(), FormatError>
    where
        A: Attributes + ?Sized,
    {
        let mut start = BytesStart::new(name);
        attrs.apply(&mut start);
        self.write(Event::Empty(start))
    }

    /// Element holding only text; empty text is written as an empty tag
    pub fn text_element(&mut self, name: &str, text: &str) -> std::result::Result<(), FormatError> {
        if text.is_empty() {
            return self.write(Event::Empty(BytesStart::new(name)));
        }
        self.write(Event::Start(BytesStart::new(name)))?;
        self.write(Event::Text(BytesText::new(text)))?;
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Text element with attributes
    pub fn text_element_with<A>(
        &mut self,
        name: &str,
        attrs: &A,
        text: &str,
    ) -> std::result::Result<(), FormatError>
    where
        A: Attributes + ?Sized,
    {
        if text.is_empty() {
            return self.empty(name, attrs);
        }
        let mut start = BytesStart::new(name);
        attrs.apply(&mut start);
        self.write(Event::Start(start))?;
        self.write(Event::Text(BytesText::new(text)))?;
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Finish and return the document body
    pub fn into_string(self) -> std::result::Result<String, FormatError> {
        String::from_utf8(self.writer.into_inner().into_inner())
            .map_err(|e| FormatError::Serialization(e.to_string()))
    }
}
