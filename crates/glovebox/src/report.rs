//! Combined classification of one vehicle's dates.

use std::fmt::Write as _;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use serde::Serialize;

use crate::error::Result;
use crate::status::{
    issue_status, next_service_due, service_status, NextServiceDue, StatusResult,
};

/// Issue, last-service and next-service status evaluated at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Wall-clock moment the dates were evaluated against.
    pub evaluated_at: NaiveDateTime,
    /// Document issue status.
    pub issue: StatusResult,
    /// Last-service status.
    pub service: StatusResult,
    /// Next-service status.
    pub next_service: NextServiceDue,
}

impl Summary {
    /// Classify all three dates against the same `now`.
    #[must_use]
    pub fn evaluate<Tz: TimeZone>(
        issued: Option<&str>,
        serviced: Option<&str>,
        interval_months: Option<u32>,
        now: &DateTime<Tz>,
    ) -> Self {
        Self {
            evaluated_at: now.naive_local(),
            issue: issue_status(issued, now),
            service: service_status(serviced, now),
            next_service: next_service_due(serviced, interval_months, now),
        }
    }

    /// Whether anything in the summary calls for prompt action.
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.next_service.status.is_attention_needed()
    }

    /// Render as aligned human-readable lines.
    #[must_use]
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Evaluated at:  {}", self.evaluated_at.format("%Y-%m-%d %H:%M"));
        let _ = writeln!(out, "Document:      {}", status_line(&self.issue));
        let _ = writeln!(out, "Last service:  {}", status_line(&self.service));
        let _ = writeln!(out, "Next service:  {}", next_service_line(&self.next_service));
        if self.needs_attention() {
            out.push_str("Attention:     service needs scheduling\n");
        }
        out
    }
}

/// Render any classification result as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] if `value` cannot be serialized.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// `"Issued 14 days ago (14d ago) [valid]"`.
#[must_use]
pub fn status_line(result: &StatusResult) -> String {
    format!("{} ({}) [{}]", result.text, result.short_text, result.status)
}

/// `"Service due in 5 days (5d left) [due_soon] on 2024-07-01"`.
#[must_use]
pub fn next_service_line(result: &NextServiceDue) -> String {
    let mut line = format!("{} ({}) [{}]", result.text, result.short_text, result.status);
    if let Some(date) = result.date {
        let _ = write!(line, " on {date}");
    }
    line
}
