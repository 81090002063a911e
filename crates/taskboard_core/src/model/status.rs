//! Workflow status and priority vocabularies.
//!
//! # Responsibility
//! - Define the four workflow columns and the three priority levels.
//! - Preserve unknown stored status and priority values verbatim.
//!
//! # Invariants
//! - Reads coerce unknown/missing values to the defaults.
//! - Coercion never rewrites the stored value.

use crate::model::defaults;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Workflow column an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not started.
    Todo,
    /// Work is in progress.
    InProgress,
    /// Waiting for a second look.
    Review,
    /// Completed; excluded from scheduling.
    Done,
}

impl Status {
    /// All columns in board display order.
    pub const ALL: [Status; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Done];

    /// Stable string id used in persisted payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    /// Parses one canonical status id.
    pub fn parse(value: &str) -> Result<Self, ParseStatusError> {
        match value {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            other => Err(ParseStatusError(other.to_string())),
        }
    }

    /// Maps older stored spellings onto a column.
    pub fn from_legacy(value: &str) -> Option<Self> {
        match value {
            "in progress" => Some(Self::InProgress),
            _ => None,
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not one of the four columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl Display for ParseStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown workflow status: {}", self.0)
    }
}

impl Error for ParseStatusError {}

/// Status exactly as stored.
///
/// Keeps whatever the persisted payload carried so that a read followed by a
/// write reproduces the same value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusValue {
    Known(Status),
    /// A string outside the four-value vocabulary.
    Other(String),
    /// The field was absent or `null`.
    #[default]
    Missing,
}

impl StatusValue {
    /// Status used for column grouping and scheduling.
    pub fn effective(&self) -> Status {
        match self {
            Self::Known(status) => *status,
            Self::Other(raw) => Status::from_legacy(raw).unwrap_or(defaults::DEFAULT_STATUS),
            Self::Missing => defaults::DEFAULT_STATUS,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<Status> for StatusValue {
    fn from(value: Status) -> Self {
        Self::Known(value)
    }
}

impl Serialize for StatusValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(status) => serializer.serialize_str(status.as_str()),
            Self::Other(raw) => serializer.serialize_str(raw),
            Self::Missing => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for StatusValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw {
            None => Self::Missing,
            Some(value) => match Status::parse(&value) {
                Ok(status) => Self::Known(status),
                Err(_) => Self::Other(value),
            },
        })
    }
}

/// Task urgency chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort rank: lower ranks are shown first.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        defaults::DEFAULT_PRIORITY
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PriorityValue {
    Known(Priority),
    /// A string outside `low`/`medium`/`high`.
    Other(String),
    /// The field was absent or `null`.
    #[default]
    Missing,
}

impl PriorityValue {
    /// Priority used for sorting and display.
    pub fn effective(&self) -> Priority {
        match self {
            Self::Known(priority) => *priority,
            Self::Other(_) | Self::Missing => defaults::DEFAULT_PRIORITY,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<Priority> for PriorityValue {
    fn from(value: Priority) -> Self {
        Self::Known(value)
    }
}

impl Serialize for PriorityValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(priority) => serializer.serialize_str(priority.as_str()),
            Self::Other(raw) => serializer.serialize_str(raw),
            Self::Missing => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for PriorityValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw {
            None => Self::Missing,
            Some(value) => match Priority::parse(&value) {
                Some(priority) => Self::Known(priority),
                None => Self::Other(value),
            },
        })
    }
}
