use chrono::{DateTime, TimeZone};
use tracing::trace;

use super::anchor::{age_in_days, Anchor};
use super::{plural, Color, Status, StatusResult, NOT_SET};

/// Ages up to this many days are reported in days.
const DAY_BUCKET_MAX: i64 = 30;

/// Ages up to this many days are reported in months.
const MONTH_BUCKET_MAX: i64 = 365;

const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 365;

/// Wording for one kind of age classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgePhrases {
    /// Leading verb phrase, e.g. `"Issued"` in "Issued 3 days ago".
    pub prefix: &'static str,
    /// Long text when no date is recorded.
    pub absent: &'static str,
}

/// Wording for document issue dates.
pub const ISSUE_PHRASES: AgePhrases = AgePhrases {
    prefix: "Issued",
    absent: "Not set",
};

/// Wording for last-service dates.
pub const SERVICE_PHRASES: AgePhrases = AgePhrases {
    prefix: "Last serviced",
    absent: "No service date recorded",
};

impl AgePhrases {
    /// Classify how long ago `input` was, relative to `now`.
    ///
    /// A future date is a data-entry slip rather than an error and reports as
    /// `Valid` / "Future date". Nothing here ever reports expiry.
    pub fn classify<Tz: TimeZone>(self, input: Option<&str>, now: &DateTime<Tz>) -> StatusResult {
        match Anchor::resolve(input, &now.timezone()) {
            Anchor::Absent => {
                StatusResult::new(Status::Unknown, self.absent, NOT_SET, Color::Secondary)
            }
            Anchor::Invalid => StatusResult::invalid(),
            Anchor::At(anchor) => self.bucket(age_in_days(anchor, now.naive_local())),
        }
    }

    fn bucket(self, days_since: i64) -> StatusResult {
        trace!(prefix = self.prefix, days_since, "classifying age");

        if days_since < 0 {
            return StatusResult::new(Status::Valid, "Future date", "Future", Color::Secondary);
        }

        let (long, short) = if days_since <= DAY_BUCKET_MAX {
            (plural(days_since, "day"), format!("{days_since}d"))
        } else if days_since <= MONTH_BUCKET_MAX {
            let months = days_since / DAYS_PER_MONTH;
            (plural(months, "month"), format!("{months}m"))
        } else {
            let years = days_since / DAYS_PER_YEAR;
            let months = (days_since % DAYS_PER_YEAR) / DAYS_PER_MONTH;
            if months > 0 {
                (
                    format!("{} {}", plural(years, "year"), plural(months, "month")),
                    format!("{years}y {months}m"),
                )
            } else {
                (plural(years, "year"), format!("{years}y"))
            }
        };

        StatusResult::new(
            Status::Valid,
            format!("{} {long} ago", self.prefix),
            format!("{short} ago"),
            Color::Success,
        )
    }
}

/// Classify a document by how long ago it was issued.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use glovebox::status::{issue_status, Color, Status};
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
/// let result = issue_status(Some("2024-01-01"), &now);
///
/// assert_eq!(result.status, Status::Valid);
/// assert_eq!(result.text, "Issued 14 days ago");
/// assert_eq!(result.short_text, "14d ago");
/// assert_eq!(result.color, Color::Success);
/// ```
#[must_use]
pub fn issue_status<Tz: TimeZone>(issued: Option<&str>, now: &DateTime<Tz>) -> StatusResult {
    ISSUE_PHRASES.classify(issued, now)
}

/// Classify a vehicle by how long ago it was last serviced.
#[must_use]
pub fn service_status<Tz: TimeZone>(serviced: Option<&str>, now: &DateTime<Tz>) -> StatusResult {
    SERVICE_PHRASES.classify(serviced, now)
}
