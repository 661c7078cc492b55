use chrono::{DateTime, TimeZone};

use super::anchor::{days_until_ceil, parse_anchor};
use super::plural;
use crate::error::Result;

/// Describe how far `target` lies from `now`: "Today", "Tomorrow",
/// "5 days", "3 months", "2 years", or "4 days ago".
///
/// Days are rounded up, so a moment later today reads "Today" and anything
/// past the next day boundary reads as arriving. `target` is read in `now`'s
/// offset, so two values naming the same instant always read "Today".
#[must_use]
pub fn relative_label<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let target = target.with_timezone(&now.timezone()).naive_local();
    label_for_days(days_until_ceil(target, now.naive_local()))
}

/// [`relative_label`] for a stored date string.
///
/// Returns `Ok(None)` when no date is recorded.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidDate`] if `input` is present but unparseable.
pub fn relative_label_for<Tz: TimeZone>(
    input: Option<&str>,
    now: &DateTime<Tz>,
) -> Result<Option<String>> {
    let Some(raw) = input.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    let zone = now.timezone();
    let target = parse_anchor(raw, &zone)?;
    Ok(Some(label_for_days(days_until_ceil(target, now.naive_local()))))
}

fn label_for_days(diff: i64) -> String {
    match diff {
        d if d < 0 => format!("{} ago", plural(d.abs(), "day")),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        d if d < 30 => plural(d, "day"),
        d if d < 365 => plural(d / 30, "month"),
        d => plural(d / 365, "year"),
    }
}
