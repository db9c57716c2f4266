//! NewsML 1.2 formatter configuration

/// Format type tag the formatter registers under
pub const NEWSML12_FORMAT: &str = "newsml12";

const AAP_PROVIDER_ID: &str = "aap.com.au";
const AAP_CATALOG_HREF: &str = "http://www.aap.com.au/xml-res/aap-master-catalog.xml";
const AAP_DTD_URL: &str = "http://www.aap.com.au/xml-res/NewsML_1.2.dtd";

const AAP_USAGE_TYPE: &str = "AAP content is owned by or licensed to Australian Associated Press Pty Limited (AAP) and is \
copyright protected.  AAP content is published on an \"as is\" basis for personal use only and \
must not be copied, republished, rewritten, resold or redistributed, whether by caching, \
framing or similar means, without AAP's prior written permission.  AAP and its licensors \
are not liable for any loss, through negligence or otherwise, resulting from errors or \
omissions in or reliance on AAP content.  The globe symbol and \"AAP\" are registered trade marks. \
Further this AAP content is supplied to the direct recipient pursuant to an Information Supply \
Agreement with AAP (AAP Information Supply Agreement).  The direct recipient has a non-exclusive, \
non-transferable right to display this AAP content in accordance with and subject to the \
terms of the AAP Information Supply Agreement.";

const AAP_LIMITATIONS: &str = "The direct recipient must comply with the limitations specified in the AAP Information \
Supply Agreement relating to the AAP content including, without limitation, not permitting \
redistribution and storage of the content (outside the terms of the Agreement) and not \
permitting deep hyperlinking to the content, framing of the content on a web site, \
posting the content to usenet newsgroups or facilitating such actions.";

/// Formatter configuration
///
/// Holds the fixed strings injected into every document: provider identity,
/// catalog and DTD references, and the licensing boilerplate.
///
/// # Example
///
/// ```
/// use newsml_rs::FormatterConfig;
///
/// let config = FormatterConfig::aap();
/// assert_eq!(config.format_type, "newsml12");
/// assert!(config.preamble().starts_with("<?xml version=\"1.0\"?>"));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatterConfig {
    /// Format type tag matched by `can_format` (e.g., "newsml12")
    pub format_type: String,

    /// Text of `NewsIdentifier/ProviderId`
    pub provider_id: String,

    /// `Href` attribute of the `Catalog` element
    pub catalog_href: String,

    /// System identifier in the DOCTYPE declaration
    pub dtd_url: String,

    /// Text of `UsageRights/UsageType`
    pub usage_type: String,

    /// Text of `UsageRights/Limitations`
    pub limitations: String,

    /// Article types this formatter accepts
    pub supported_article_types: Vec<String>,
}

impl FormatterConfig {
    /// Configuration for the AAP NewsML 1.2 feed
    pub fn aap() -> Self {
        Self {
            format_type: NEWSML12_FORMAT.to_string(),
            provider_id: AAP_PROVIDER_ID.to_string(),
            catalog_href: AAP_CATALOG_HREF.to_string(),
            dtd_url: AAP_DTD_URL.to_string(),
            usage_type: AAP_USAGE_TYPE.to_string(),
            limitations: AAP_LIMITATIONS.to_string(),
            supported_article_types: vec![
                "text".to_string(),
                "preformatted".to_string(),
                "composite".to_string(),
            ],
        }
    }

    /// XML declaration and DOCTYPE prepended to every document
    pub fn preamble(&self) -> String {
        format!(
            "<?xml version=\"1.0\"?><!DOCTYPE NewsML SYSTEM \"{}\">",
            self.dtd_url
        )
    }

    /// Check whether an article type is in the accepted set
    pub fn supports_article_type(&self, article_type: &str) -> bool {
        self.supported_article_types
            .iter()
            .any(|t| t == article_type)
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::aap()
    }
}
