//! Sources of "now".
//!
//! The status functions never read a clock themselves. Callers pick a
//! [`Clock`] once at the edge and pass its reading down.

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};

use crate::config::TimeZoneSetting;
use crate::error::{Error, Result};
use crate::status::parse_anchor;

/// Something that can report the current moment.
pub trait Clock {
    /// The current moment, carrying the offset of the evaluation time zone.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The host's real-time clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    zone: TimeZoneSetting,
}

impl SystemClock {
    /// Create a clock reading wall time in `zone`.
    #[must_use]
    pub fn new(zone: TimeZoneSetting) -> Self {
        Self { zone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.zone {
            TimeZoneSetting::Local => Local::now().fixed_offset(),
            TimeZoneSetting::Utc => Utc::now().fixed_offset(),
        }
    }
}

/// A clock frozen at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Create a clock that always reports `now`.
    #[must_use]
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    /// Parse a date or timestamp into a frozen clock.
    ///
    /// A date-only value means midnight in `zone`. A timestamp carrying its
    /// own offset names that exact instant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if `raw` does not parse or names a local
    /// time skipped by a DST transition.
    pub fn parse(raw: &str, zone: TimeZoneSetting) -> Result<Self> {
        let now = match zone {
            TimeZoneSetting::Local => {
                if let Ok(instant) = DateTime::parse_from_rfc3339(raw.trim()) {
                    return Ok(Self::new(instant.with_timezone(&Local).fixed_offset()));
                }
                let wall = parse_anchor(raw, &Local)?;
                Local
                    .from_local_datetime(&wall)
                    .earliest()
                    .ok_or_else(|| Error::invalid_date(raw, "does not exist in local time"))?
                    .fixed_offset()
            }
            TimeZoneSetting::Utc => parse_anchor(raw, &Utc)?.and_utc().fixed_offset(),
        };
        Ok(Self::new(now))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}
