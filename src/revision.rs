//! Revision and correction policy
//!
//! Maps an article's workflow state and version onto the NewsML revision
//! attributes (`PreviousRevision`, `Update`) and the management `Instruction`.

use crate::article::ArticleState;
use crate::error::FormatError;

/// Value of the `Update` attribute on `RevisionId`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMarker {
    /// First publication ("N")
    New,
    /// Amendment of a previous revision ("A")
    Amendment,
}

impl UpdateMarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "N",
            Self::Amendment => "A",
        }
    }
}

/// Attributes attached to `NewsIdentifier/RevisionId`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionInfo {
    /// Revision this one replaces ("0" for first publication)
    pub previous_revision: String,
    /// Update marker
    pub update: UpdateMarker,
}

impl RevisionInfo {
    /// Revision metadata for a first publication
    pub fn first_publication() -> Self {
        Self {
            previous_revision: "0".to_string(),
            update: UpdateMarker::New,
        }
    }
}

/// Management instruction emitted for an article
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Update,
    Correction,
}

impl Instruction {
    /// Instruction for a workflow state
    pub fn for_state(state: &ArticleState) -> Self {
        if *state == ArticleState::Corrected {
            Self::Correction
        } else {
            Self::Update
        }
    }

    /// `FormalName` attribute value
    pub fn formal_name(&self) -> &'static str {
        match self {
            Self::Update => "Update",
            Self::Correction => "Correction",
        }
    }
}

/// Derive revision metadata from state and version
///
/// Only corrected articles carry a previous revision. A corrected article must
/// have a version of at least 1; version 1 yields previous revision "0".
///
/// # Examples
///
/// ```
/// use newsml_rs::article::ArticleState;
/// use newsml_rs::revision::{UpdateMarker, revision_for};
///
/// let info = revision_for(&ArticleState::Corrected, Some(2)).unwrap();
/// assert_eq!(info.previous_revision, "1");
/// assert_eq!(info.update, UpdateMarker::Amendment);
///
/// let info = revision_for(&ArticleState::Published, Some(5)).unwrap();
/// assert_eq!(info.previous_revision, "0");
/// assert_eq!(info.update, UpdateMarker::New);
/// ```
pub fn revision_for(
    state: &ArticleState,
    version: Option<u32>,
) -> std::result::Result<RevisionInfo, FormatError> {
    if *state != ArticleState::Corrected {
        return Ok(RevisionInfo::first_publication());
    }

    let version = version.ok_or(FormatError::MissingRequiredField("_version"))?;
    let previous = version
        .checked_sub(1)
        .ok_or_else(|| FormatError::InvalidField {
            field: "_version",
            reason: "corrected article has no previous revision (version 0)".to_string(),
        })?;

    Ok(RevisionInfo {
        previous_revision: previous.to_string(),
        update: UpdateMarker::Amendment,
    })
}
