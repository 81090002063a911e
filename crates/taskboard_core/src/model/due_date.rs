//! Optional ISO calendar dates as stored on items.
//!
//! Stored payloads write an absent due date as `""`; `null` and a missing
//! field are accepted too. Values longer than a date keep only their leading
//! `YYYY-MM-DD` part. A string that is not a date at all is kept verbatim and
//! treated as unscheduled.

use chrono::NaiveDate;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Wire format of a due date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Due date exactly as far as the stored payload allows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DueDate {
    #[default]
    Unset,
    On(NaiveDate),
    /// A stored string that does not parse as a date.
    Unparsed(String),
}

impl DueDate {
    /// Calendar day used for sorting and scheduling.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::On(date) => Some(*date),
            Self::Unset | Self::Unparsed(_) => None,
        }
    }
}

impl From<Option<NaiveDate>> for DueDate {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(Self::Unset, Self::On)
    }
}

impl From<NaiveDate> for DueDate {
    fn from(value: NaiveDate) -> Self {
        Self::On(value)
    }
}

impl Serialize for DueDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset => serializer.serialize_str(""),
            Self::On(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            Self::Unparsed(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for DueDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw {
            None => Self::Unset,
            Some(value) => match parse_due_date(&value) {
                Ok(date) => date.into(),
                Err(_) => Self::Unparsed(value),
            },
        })
    }
}

/// Parses a stored or user-entered due date; blank input means no date.
pub fn parse_due_date(value: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .map(Some)
        .map_err(|err| format!("invalid due date `{trimmed}`: {err}"))
}
