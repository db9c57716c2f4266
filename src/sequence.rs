//! Publish sequence numbers
//!
//! Every document sent to a destination carries a transmission identifier
//! issued by a sequence-number provider. The provider is normally a service
//! owned by the publishing pipeline; [`InMemorySequenceProvider`] covers
//! tests and single-process setups.
//!
//! # Example
//!
//! ```
//! use newsml_rs::{Destination, InMemorySequenceProvider, SequenceNumberProvider};
//!
//! let provider = InMemorySequenceProvider::new();
//! let wire = Destination::newsml12("aap-wire");
//!
//! assert_eq!(provider.generate_sequence_number(&wire).unwrap(), "1");
//! assert_eq!(provider.generate_sequence_number(&wire).unwrap(), "2");
//! ```

use crate::config::NEWSML12_FORMAT;
use crate::error::SequenceError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Subscriber endpoint a document is formatted for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    /// Destination name, also the sequence-number key
    pub name: String,
    /// Format type requested by the destination (e.g., "newsml12")
    pub format: String,
}

impl Destination {
    /// Create a destination
    pub fn new(name: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: format.into(),
        }
    }

    /// Create a destination requesting NewsML 1.2
    pub fn newsml12(name: impl Into<String>) -> Self {
        Self::new(name, NEWSML12_FORMAT)
    }
}

/// Source of per-destination publish sequence numbers
///
/// Implementations must be safe to call from several formatting threads.
/// Each call consumes a number; a failed format call does not give it back.
pub trait SequenceNumberProvider: Send + Sync {
    /// Issue the next sequence number for a destination
    fn generate_sequence_number(
        &self,
        destination: &Destination,
    ) -> std::result::Result<String, SequenceError>;
}

impl<P: SequenceNumberProvider + ?Sized> SequenceNumberProvider for Arc<P> {
    fn generate_sequence_number(
        &self,
        destination: &Destination,
    ) -> std::result::Result<String, SequenceError> {
        (**self).generate_sequence_number(destination)
    }
}

impl<P: SequenceNumberProvider + ?Sized> SequenceNumberProvider for Box<P> {
    fn generate_sequence_number(
        &self,
        destination: &Destination,
    ) -> std::result::Result<String, SequenceError> {
        (**self).generate_sequence_number(destination)
    }
}

/// Inclusive range sequence numbers cycle through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceRange {
    /// First number issued, and the number issued after `max`
    pub min: u64,
    /// Largest number issued before wrapping
    pub max: u64,
}

impl SequenceRange {
    /// Create a range, rejecting `min > max`
    pub fn new(min: u64, max: u64) -> std::result::Result<Self, SequenceError> {
        if min > max {
            return Err(SequenceError::new(format!(
                "Invalid sequence range: min {min} is greater than max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    fn next_after(&self, current: u64) -> u64 {
        if current >= self.max || current < self.min {
            self.min
        } else {
            current + 1
        }
    }
}

impl Default for SequenceRange {
    fn default() -> Self {
        Self { min: 1, max: 9999 }
    }
}

/// Per-destination counters held in memory
///
/// Numbers start at `range.min` for each destination and wrap back to it
/// after `range.max`.
#[derive(Debug, Default)]
pub struct InMemorySequenceProvider {
    range: SequenceRange,
    counters: Mutex<HashMap<String, u64>>,
}

impl InMemorySequenceProvider {
    /// Create a provider using the default range (1..=9999)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider using a custom range
    pub fn with_range(range: SequenceRange) -> Self {
        Self {
            range,
            counters: Mutex::new(HashMap::new()),
        }
    }

    /// Last number issued for a destination, if any
    ///
    /// Still answers after a panic poisoned the counter lock. Issuing a new
    /// number from a poisoned provider fails with a [`SequenceError`].
    pub fn last_issued(&self, destination: &str) -> Option<u64> {
        self.counters
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(destination)
            .copied()
    }
}

impl SequenceNumberProvider for InMemorySequenceProvider {
    fn generate_sequence_number(
        &self,
        destination: &Destination,
    ) -> std::result::Result<String, SequenceError> {
        let mut counters = self
            .counters
            .lock()
            .map_err(|_| SequenceError::new("Sequence counter lock poisoned"))?;

        let next = match counters.get(&destination.name) {
            Some(&current) => self.range.next_after(current),
            None => self.range.min,
        };
        counters.insert(destination.name.clone(), next);

        Ok(next.to_string())
    }
}
