//! Temporal status classification.
//!
//! Turns stored dates into display-ready status buckets:
//!
//! - [`relative_label`]: "Tomorrow", "3 days ago", "2 months" for any date.
//! - [`issue_status`]: how long ago a document was issued.
//! - [`service_status`]: how long ago a vehicle was last serviced.
//! - [`next_service_due`]: where the next service falls on the
//!   overdue / due soon / due this month / future ladder.
//!
//! Every function takes the current moment explicitly. Reading a real clock
//! is the caller's job (see [`crate::clock`]).
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use glovebox::status::{issue_status, next_service_due, Status};
//!
//! let now = Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap();
//!
//! let issued = issue_status(Some("2024-07-18"), &now);
//! assert_eq!(issued.text, "Issued 14 days ago");
//!
//! let due = next_service_due(Some("2024-01-01"), Some(6), &now);
//! assert_eq!(due.status, Status::Overdue);
//! assert_eq!(due.short_text, "31d overdue");
//! ```

mod age;
pub mod anchor;
mod relative;
mod service;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use age::{issue_status, service_status, AgePhrases, ISSUE_PHRASES, SERVICE_PHRASES};
pub use anchor::{age_in_days, parse_anchor, Anchor};
pub use relative::{relative_label, relative_label_for};
pub use service::{next_service_due, DUE_MONTH_DAYS, DUE_SOON_DAYS};

/// Long text shown for a present but unparseable date.
pub const INVALID_TEXT: &str = "Invalid date";

/// Short text shown for a present but unparseable date.
pub const INVALID_SHORT_TEXT: &str = "Invalid";

/// Short text shown whenever a date is missing.
pub const NOT_SET: &str = "Not set";

/// The bucket a date falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// No date recorded.
    Unknown,
    /// A date is recorded and nothing needs attention.
    Valid,
    /// The due date has passed.
    Overdue,
    /// Due within a week.
    DueSoon,
    /// Due within a month.
    DueMonth,
    /// Due more than a month from now.
    Future,
    /// A date is recorded but could not be understood.
    Invalid,
}

impl Status {
    /// Whether the bucket calls for prompt action.
    #[must_use]
    pub fn is_attention_needed(self) -> bool {
        matches!(self, Self::Overdue | Self::DueSoon)
    }

    /// Presentation color suggested for this bucket.
    #[must_use]
    pub fn tone(self) -> Color {
        match self {
            Self::Overdue => Color::Danger,
            Self::DueSoon | Self::DueMonth => Color::Warning,
            Self::Valid | Self::Future => Color::Success,
            Self::Unknown | Self::Invalid => Color::Secondary,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Valid => "valid",
            Self::Overdue => "overdue",
            Self::DueSoon => "due_soon",
            Self::DueMonth => "due_month",
            Self::Future => "future",
            Self::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// Presentation hint attached to a [`StatusResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Neutral.
    Secondary,
    /// All good.
    Success,
    /// Needs attention soon.
    Warning,
    /// Needs attention now.
    Danger,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        };
        f.write_str(name)
    }
}

/// Classification of an anchor date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResult {
    /// The bucket.
    pub status: Status,
    /// Full sentence, e.g. "Issued 3 months ago".
    pub text: String,
    /// Compact label, e.g. "3m ago".
    pub short_text: String,
    /// Presentation hint.
    pub color: Color,
}

impl StatusResult {
    pub(crate) fn new(
        status: Status,
        text: impl Into<String>,
        short_text: impl Into<String>,
        color: Color,
    ) -> Self {
        Self {
            status,
            text: text.into(),
            short_text: short_text.into(),
            color,
        }
    }

    pub(crate) fn invalid() -> Self {
        Self::new(
            Status::Invalid,
            INVALID_TEXT,
            INVALID_SHORT_TEXT,
            Color::Secondary,
        )
    }
}

impl fmt::Display for StatusResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Classification of the next service, with the computed due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextServiceDue {
    /// Calendar date the next service falls on, if computable.
    pub date: Option<NaiveDate>,
    /// The bucket.
    pub status: Status,
    /// Full sentence, e.g. "Service due in 5 days".
    pub text: String,
    /// Compact label, e.g. "5d left".
    pub short_text: String,
}

impl NextServiceDue {
    /// Presentation color for this result.
    #[must_use]
    pub fn tone(&self) -> Color {
        self.status.tone()
    }
}

impl fmt::Display for NextServiceDue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// `"1 day"`, `"0 days"`, `"2 days"`.
pub(crate) fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "day"), "0 days");
        assert_eq!(plural(1, "day"), "1 day");
        assert_eq!(plural(2, "day"), "2 days");
        assert_eq!(plural(1, "month"), "1 month");
        assert_eq!(plural(12, "month"), "12 months");
    }

    #[test]
    fn test_status_display_matches_serde() {
        for status in [
            Status::Unknown,
            Status::Valid,
            Status::Overdue,
            Status::DueSoon,
            Status::DueMonth,
            Status::Future,
            Status::Invalid,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn test_status_tone() {
        assert_eq!(Status::Overdue.tone(), Color::Danger);
        assert_eq!(Status::DueSoon.tone(), Color::Warning);
        assert_eq!(Status::DueMonth.tone(), Color::Warning);
        assert_eq!(Status::Future.tone(), Color::Success);
        assert_eq!(Status::Unknown.tone(), Color::Secondary);
        assert_eq!(Status::Invalid.tone(), Color::Secondary);
    }

    #[test]
    fn test_is_attention_needed() {
        assert!(Status::Overdue.is_attention_needed());
        assert!(Status::DueSoon.is_attention_needed());
        assert!(!Status::DueMonth.is_attention_needed());
        assert!(!Status::Valid.is_attention_needed());
    }

    #[test]
    fn test_status_result_serializes_camel_case() {
        let result = StatusResult::new(Status::Valid, "Issued 1 day ago", "1d ago", Color::Success);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "valid");
        assert_eq!(json["shortText"], "1d ago");
        assert_eq!(json["color"], "success");
        assert_eq!(result.to_string(), "Issued 1 day ago");
    }

    #[test]
    fn test_next_service_due_serializes_date() {
        let due = NextServiceDue {
            date: NaiveDate::from_ymd_opt(2024, 7, 1),
            status: Status::Future,
            text: "Service due in 2 months".to_string(),
            short_text: "2m left".to_string(),
        };
        let json = serde_json::to_value(&due).unwrap();
        assert_eq!(json["date"], "2024-07-01");
        assert_eq!(json["status"], "future");
        assert_eq!(json["shortText"], "2m left");
        assert_eq!(due.tone(), Color::Success);
    }

    #[test]
    fn test_invalid_result() {
        let result = StatusResult::invalid();
        assert_eq!(result.status, Status::Invalid);
        assert_eq!(result.text, INVALID_TEXT);
        assert_eq!(result.short_text, INVALID_SHORT_TEXT);
        assert_eq!(result.color, Color::Secondary);
    }
}
