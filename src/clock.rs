//! Formatter timestamp
//!
//! All generated dates in a document (envelope time, date id, date label,
//! copyright year, usage rights start/end) come from one instant captured when
//! the formatter is constructed. A long-lived formatter keeps stamping that
//! instant; build a new formatter (or use [`FormatterClock::now`] per batch)
//! when fresh envelope times matter.

use chrono::{DateTime, TimeZone, Utc};

/// Envelope date-time, e.g. `20240101T093000+0000`
const DATE_AND_TIME_FORMAT: &str = "%Y%m%dT%H%M%S+0000";
/// Identification date id, e.g. `20240101`
const DATE_ID_FORMAT: &str = "%Y%m%d";
/// Identification date label, e.g. `Monday 01 January 2024`
const DATE_LABEL_FORMAT: &str = "%A %d %B %Y";

/// Immutable UTC instant shared by every document a formatter writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatterClock {
    instant: DateTime<Utc>,
}

impl FormatterClock {
    /// Capture the current UTC time
    pub fn now() -> Self {
        Self { instant: Utc::now() }
    }

    /// Use a fixed instant
    pub fn fixed(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Fixed instant from calendar fields, `None` if they do not form a valid time
    ///
    /// # Example
    ///
    /// ```
    /// use newsml_rs::FormatterClock;
    ///
    /// let clock = FormatterClock::from_ymd_hms(2024, 1, 1, 9, 30, 0).unwrap();
    /// assert_eq!(clock.date_and_time(), "20240101T093000+0000");
    /// assert_eq!(clock.date_label(), "Monday 01 January 2024");
    /// ```
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
    ) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Self::fixed)
    }

    /// The captured instant
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// `NewsEnvelope/DateAndTime` and usage-rights start/end dates
    pub fn date_and_time(&self) -> String {
        self.instant.format(DATE_AND_TIME_FORMAT).to_string()
    }

    /// `NewsIdentifier/DateId`
    pub fn date_id(&self) -> String {
        self.instant.format(DATE_ID_FORMAT).to_string()
    }

    /// `Identification/DateLabel`
    pub fn date_label(&self) -> String {
        self.instant.format(DATE_LABEL_FORMAT).to_string()
    }

    /// `Copyright/CopyrightDate`
    pub fn year(&self) -> String {
        self.instant.format("%Y").to_string()
    }
}

impl Default for FormatterClock {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<Utc>> for FormatterClock {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::fixed(instant)
    }
}
