//! NewsML 1.2 output
//!
//! Reference: IPTC NewsML 1.2, as constrained by the AAP NewsML 1.2 DTD
//!
//! This module is organized into:
//! - `xml`: typed element writer over quick-xml
//! - `elements`: one builder per document subtree
//! - `formatter`: the document assembler (`NewsMl12Formatter`)

mod elements;
mod formatter;
mod xml;

pub use self::formatter::NewsMl12Formatter;
