//! Anchor parsing and whole-day arithmetic.
//!
//! Every classifier reduces to "how many whole days lie between these two
//! wall-clock moments". Moments are compared as naive wall-clock values in
//! the evaluation time zone, so a date-only anchor means local midnight and
//! a DST transition never turns a calendar day into 23 or 25 hours.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use tracing::debug;

use crate::error::{Error, Result};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Timestamp layouts accepted when the input carries no UTC offset.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A date input after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// No date recorded.
    Absent,
    /// A date was recorded but could not be parsed.
    Invalid,
    /// A wall-clock moment in the evaluation time zone.
    At(NaiveDateTime),
}

impl Anchor {
    /// Resolve an optional stored date against the evaluation time zone.
    ///
    /// Empty and whitespace-only strings count as absent, like a blank form
    /// field.
    pub fn resolve<Tz: TimeZone>(input: Option<&str>, zone: &Tz) -> Self {
        match input.map(str::trim) {
            None | Some("") => Self::Absent,
            Some(raw) => match parse_anchor(raw, zone) {
                Ok(at) => Self::At(at),
                Err(err) => {
                    debug!("treating unparseable anchor as invalid: {err}");
                    Self::Invalid
                }
            },
        }
    }
}

/// Parse a stored date into a wall-clock moment in `zone`.
///
/// Accepts `YYYY-MM-DD` (midnight), RFC 3339 timestamps (converted into
/// `zone`) and offset-less ISO timestamps (taken as already in `zone`).
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if no accepted layout matches.
pub fn parse_anchor<Tz: TimeZone>(raw: &str, zone: &Tz) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(stamp.with_timezone(zone).naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| Error::invalid_date(raw, "expected YYYY-MM-DD or an ISO-8601 timestamp"))
}

/// Whole days elapsed from `reference` to `now`, rounded toward negative
/// infinity. Negative when `reference` is in the future.
#[must_use]
pub fn age_in_days(reference: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (now - reference).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Whole days remaining from `now` until `target`, rounded toward negative
/// infinity.
#[must_use]
pub fn days_until(target: NaiveDateTime, now: NaiveDateTime) -> i64 {
    age_in_days(now, target)
}

/// Days remaining from `now` until `target`, rounded toward positive
/// infinity, so anything later today still counts as today and anything
/// after the next midnight-equivalent counts as arriving.
#[must_use]
pub fn days_until_ceil(target: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let millis = (target - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Advance `anchor` by `months` calendar months, keeping the time of day.
///
/// A day-of-month that does not exist in the target month rolls forward
/// into the following month: Jan 31 plus one month is Mar 2 in a leap year
/// and Mar 3 otherwise.
///
/// # Errors
///
/// Returns [`Error::DateOutOfRange`] if the result is not representable.
pub fn add_months(anchor: NaiveDateTime, months: u32) -> Result<NaiveDateTime> {
    let date = anchor.date();
    let overflow = || Error::out_of_range(format!("{anchor} + {months} months"));

    let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
    let year = i32::try_from(total.div_euclid(12)).map_err(|_| overflow())?;
    let month = u32::try_from(total.rem_euclid(12)).map_err(|_| overflow())? + 1;

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day0()))))
        .map(|shifted| shifted.and_time(anchor.time()))
        .ok_or_else(overflow)
}
