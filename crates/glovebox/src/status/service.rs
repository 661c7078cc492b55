use chrono::{DateTime, TimeZone};
use tracing::{debug, trace};

use super::anchor::{add_months, days_until, Anchor};
use super::{plural, NextServiceDue, Status, INVALID_SHORT_TEXT, INVALID_TEXT, NOT_SET};

/// A service due within this many days is `DueSoon`.
pub const DUE_SOON_DAYS: i64 = 7;

/// A service due within this many days is at least `DueMonth`.
pub const DUE_MONTH_DAYS: i64 = 30;

const DAYS_PER_MONTH: i64 = 30;

/// Work out when the next service is due and how urgent it is.
///
/// The due date is `last_serviced` plus `interval_months` calendar months.
/// A missing date or a missing (or zero) interval yields `Unknown`; the
/// interval is not consulted when the date is missing.
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use glovebox::status::{next_service_due, Status};
///
/// let now = Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap();
/// let due = next_service_due(Some("2024-01-01"), Some(6), &now);
///
/// assert_eq!(due.date, NaiveDate::from_ymd_opt(2024, 7, 1));
/// assert_eq!(due.status, Status::Overdue);
/// assert_eq!(due.text, "Service overdue by 31 days");
/// ```
#[must_use]
pub fn next_service_due<Tz: TimeZone>(
    last_serviced: Option<&str>,
    interval_months: Option<u32>,
    now: &DateTime<Tz>,
) -> NextServiceDue {
    let anchor = match Anchor::resolve(last_serviced, &now.timezone()) {
        Anchor::Absent => return unavailable(),
        Anchor::Invalid => return invalid(),
        Anchor::At(anchor) => anchor,
    };

    let Some(months) = interval_months.filter(|months| *months > 0) else {
        return unavailable();
    };

    let next = match add_months(anchor, months) {
        Ok(next) => next,
        Err(err) => {
            debug!("cannot compute next service date: {err}");
            return invalid();
        }
    };

    let days_diff = days_until(next, now.naive_local());
    trace!(%next, days_diff, "classifying next service");

    let (status, text, short_text) = if days_diff < 0 {
        let overdue = days_diff.abs();
        (
            Status::Overdue,
            format!("Service overdue by {}", plural(overdue, "day")),
            format!("{overdue}d overdue"),
        )
    } else if days_diff <= DUE_MONTH_DAYS {
        let status = if days_diff <= DUE_SOON_DAYS {
            Status::DueSoon
        } else {
            Status::DueMonth
        };
        (
            status,
            format!("Service due in {}", plural(days_diff, "day")),
            format!("{days_diff}d left"),
        )
    } else {
        let months = days_diff / DAYS_PER_MONTH;
        (
            Status::Future,
            format!("Service due in {}", plural(months, "month")),
            format!("{months}m left"),
        )
    };

    NextServiceDue {
        date: Some(next.date()),
        status,
        text,
        short_text,
    }
}

fn unavailable() -> NextServiceDue {
    NextServiceDue {
        date: None,
        status: Status::Unknown,
        text: "Service info not available".to_string(),
        short_text: NOT_SET.to_string(),
    }
}

fn invalid() -> NextServiceDue {
    NextServiceDue {
        date: None,
        status: Status::Invalid,
        text: INVALID_TEXT.to_string(),
        short_text: INVALID_SHORT_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Utc};

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    /// Classify a one-month interval whose due date lies `days` days after `now`.
    fn due_in(days: i64) -> NextServiceDue {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let due = now.date_naive() + Duration::days(days);
        let last = due - chrono::Months::new(1);
        next_service_due(Some(&last.to_string()), Some(1), &now)
    }

    #[test]
    fn test_overdue_concrete_scenario() {
        let now = Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap();
        let due = next_service_due(Some("2024-01-01"), Some(6), &now);
        assert_eq!(
            due,
            NextServiceDue {
                date: NaiveDate::from_ymd_opt(2024, 7, 1),
                status: Status::Overdue,
                text: "Service overdue by 31 days".to_string(),
                short_text: "31d overdue".to_string(),
            }
        );
    }

    #[test]
    fn test_absent_inputs_are_unknown() {
        let now = noon(2024, 6, 15);
        let expected = NextServiceDue {
            date: None,
            status: Status::Unknown,
            text: "Service info not available".to_string(),
            short_text: "Not set".to_string(),
        };
        assert_eq!(next_service_due(None, Some(6), &now), expected);
        assert_eq!(next_service_due(None, None, &now), expected);
        assert_eq!(next_service_due(Some("2024-01-01"), None, &now), expected);
        assert_eq!(next_service_due(Some("2024-01-01"), Some(0), &now), expected);
        assert_eq!(next_service_due(Some(""), Some(6), &now), expected);
    }

    #[test]
    fn test_ladder_boundaries() {
        assert_eq!(due_in(-1).status, Status::Overdue);
        assert_eq!(due_in(0).status, Status::DueSoon);
        assert_eq!(due_in(7).status, Status::DueSoon);
        assert_eq!(due_in(8).status, Status::DueMonth);
        assert_eq!(due_in(30).status, Status::DueMonth);
        assert_eq!(due_in(31).status, Status::Future);
    }

    #[test]
    fn test_due_earlier_today_is_overdue() {
        // Due at midnight, evaluated at noon: half a day late floors to -1
        let now = noon(2024, 6, 15);
        let late = next_service_due(Some("2024-05-15"), Some(1), &now);
        assert_eq!(late.date, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert_eq!(late.status, Status::Overdue);
        assert_eq!(late.text, "Service overdue by 1 day");
    }

    #[test]
    fn test_due_soon_and_due_month_share_wording() {
        let soon = due_in(1);
        assert_eq!(soon.text, "Service due in 1 day");
        assert_eq!(soon.short_text, "1d left");

        let month = due_in(12);
        assert_eq!(month.status, Status::DueMonth);
        assert_eq!(month.text, "Service due in 12 days");
        assert_eq!(month.short_text, "12d left");
    }

    #[test]
    fn test_overdue_wording() {
        let due = due_in(-2);
        assert_eq!(due.text, "Service overdue by 2 days");
        assert_eq!(due.short_text, "2d overdue");
    }

    #[test]
    fn test_future_wording() {
        let due = due_in(31);
        assert_eq!(due.text, "Service due in 1 month");
        assert_eq!(due.short_text, "1m left");

        let now = noon(2024, 6, 15);
        let far = next_service_due(Some("2024-06-01"), Some(12), &now);
        assert_eq!(far.status, Status::Future);
        assert_eq!(far.text, "Service due in 11 months");
        assert_eq!(far.short_text, "11m left");
    }

    #[test]
    fn test_due_today_at_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let due = next_service_due(Some("2024-05-15"), Some(1), &now);
        assert_eq!(due.status, Status::DueSoon);
        assert_eq!(due.text, "Service due in 0 days");
        assert_eq!(due.short_text, "0d left");
    }

    #[test]
    fn test_month_end_overflow_rolls_forward() {
        let now = noon(2024, 1, 1);
        let leap = next_service_due(Some("2024-01-31"), Some(1), &now);
        assert_eq!(leap.date, NaiveDate::from_ymd_opt(2024, 3, 2));

        let now = noon(2023, 1, 1);
        let common = next_service_due(Some("2023-01-31"), Some(1), &now);
        assert_eq!(common.date, NaiveDate::from_ymd_opt(2023, 3, 3));

        let six = next_service_due(Some("2023-08-31"), Some(6), &now);
        assert_eq!(six.date, NaiveDate::from_ymd_opt(2024, 3, 2));
    }

    #[test]
    fn test_invalid_date() {
        let now = noon(2024, 6, 15);
        let due = next_service_due(Some("yesterday"), Some(6), &now);
        assert_eq!(due.status, Status::Invalid);
        assert_eq!(due.date, None);
        assert_eq!(due.text, "Invalid date");
    }

    #[test]
    fn test_invalid_date_without_interval_is_still_invalid() {
        let now = noon(2024, 6, 15);
        assert_eq!(
            next_service_due(Some("yesterday"), None, &now).status,
            Status::Invalid
        );
    }

    #[test]
    fn test_unrepresentable_due_date_is_invalid() {
        let now = noon(2024, 6, 15);
        let due = next_service_due(Some("2024-01-01"), Some(u32::MAX), &now);
        assert_eq!(due.status, Status::Invalid);
    }

    #[test]
    fn test_idempotent() {
        let now = noon(2024, 6, 15);
        assert_eq!(
            next_service_due(Some("2024-02-29"), Some(3), &now),
            next_service_due(Some("2024-02-29"), Some(3), &now)
        );
    }
}
