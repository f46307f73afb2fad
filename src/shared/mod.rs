//! Shared newtypes and formatting utilities used across domain modules.
//!
//! `SampleDate` is serialization-transparent: it serializes/deserializes
//! identically to the raw chart-label string the host page carries, so it can
//! be used directly in wire types without conversion overhead.

pub mod fmt;

pub use fmt::{format_day, parse_dollar_price, parse_leading_int};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── SampleDate ──────────────────────────────────────────────────────────────

/// One traded day, as displayed by the host page's chart (e.g. `"Jan 5, 2024"`).
///
/// The display string is the source of truth: it doubles as the lookup key
/// sent to the day-stats endpoint, so it is kept verbatim and only converted
/// to a calendar day on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SampleDate(String);

impl SampleDate {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the display string into a calendar day.
    ///
    /// Returns `None` for malformed labels; callers decide how to treat
    /// unparseable dates (see `domain::dates`).
    pub fn parse_day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.0.trim(), "%b %d, %Y").ok()
    }

    /// Build a `SampleDate` from a calendar day, using the chart-label format.
    pub fn from_day(day: NaiveDate) -> Self {
        Self(format_day(day))
    }
}

impl std::fmt::Display for SampleDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SampleDate {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SampleDate {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for SampleDate {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SampleDate(s.to_string()))
    }
}

impl Serialize for SampleDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SampleDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SampleDate(s))
    }
}
