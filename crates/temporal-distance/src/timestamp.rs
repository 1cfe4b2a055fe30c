//! Point-in-time values the distance calculations operate on.
//!
//! [`Timestamp`] captures exactly what the calculations need from a civil
//! (proleptic Gregorian) instant: elapsed milliseconds, calendar components
//! via [`chrono::Datelike`], "add N months" under a [`MonthOverflow`] policy,
//! and a total order. It is implemented for [`NaiveDate`], [`NaiveDateTime`]
//! and [`DateTime<Tz>`] for any time zone.
//!
//! Constructing timestamps from strings is the caller's job; the
//! [`parse_timestamp`] and [`parse_timezone`] helpers cover the common
//! RFC 3339 / ISO 8601 inputs.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{DistanceError, Result};

// ── Month overflow policy ───────────────────────────────────────────────────

/// How "add N months" treats a day-of-month that the target month lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthOverflow {
    /// Clamp to the last day of the target month (Jan 31 + 1 month = Feb 29 in 2024).
    #[default]
    Clamp,
    /// Carry the excess days into the following month (Jan 31 + 1 month = Mar 2 in 2024).
    Rollover,
}

impl MonthOverflow {
    /// Advance a wall-clock reading by `months` calendar months.
    ///
    /// Returns `None` if the result falls outside chrono's representable range.
    /// The time of day is preserved in both policies.
    pub fn step(self, dt: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
        match self {
            MonthOverflow::Clamp => dt.checked_add_months(Months::new(months)),
            MonthOverflow::Rollover => {
                let total = dt.month0().checked_add(months)?;
                let year = dt.year().checked_add(i32::try_from(total / 12).ok()?)?;
                let first = NaiveDate::from_ymd_opt(year, total % 12 + 1, 1)?;
                let date = first.checked_add_days(Days::new(u64::from(dt.day() - 1)))?;
                Some(date.and_time(dt.time()))
            }
        }
    }
}

impl fmt::Display for MonthOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthOverflow::Clamp => f.write_str("clamp"),
            MonthOverflow::Rollover => f.write_str("rollover"),
        }
    }
}

impl FromStr for MonthOverflow {
    type Err = DistanceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clamp" => Ok(MonthOverflow::Clamp),
            "rollover" | "roll-over" => Ok(MonthOverflow::Rollover),
            _ => Err(DistanceError::InvalidOption(format!(
                "month overflow must be 'clamp' or 'rollover': '{}'",
                s.trim()
            ))),
        }
    }
}

// ── Timestamp ───────────────────────────────────────────────────────────────

/// A civil instant usable as an endpoint or calendar anchor.
pub trait Timestamp: Datelike + Ord + Clone {
    /// Milliseconds from `self` to `later` (negative if `later` is earlier).
    fn millis_until(&self, later: &Self) -> i128;

    /// This timestamp moved forward by `months` calendar months.
    ///
    /// `None` when the result is not representable.
    fn step_months(&self, months: u32, overflow: MonthOverflow) -> Option<Self>;
}

impl Timestamp for NaiveDateTime {
    fn millis_until(&self, later: &Self) -> i128 {
        i128::from(later.signed_duration_since(*self).num_milliseconds())
    }

    fn step_months(&self, months: u32, overflow: MonthOverflow) -> Option<Self> {
        overflow.step(*self, months)
    }
}

impl Timestamp for NaiveDate {
    fn millis_until(&self, later: &Self) -> i128 {
        i128::from(later.signed_duration_since(*self).num_milliseconds())
    }

    fn step_months(&self, months: u32, overflow: MonthOverflow) -> Option<Self> {
        overflow
            .step(self.and_time(NaiveTime::MIN), months)
            .map(|dt| dt.date())
    }
}

impl<T: TimeZone> Timestamp for DateTime<T> {
    fn millis_until(&self, later: &Self) -> i128 {
        i128::from(
            later
                .clone()
                .signed_duration_since(self.clone())
                .num_milliseconds(),
        )
    }

    /// Steps the local wall-clock reading. A local time that does not exist
    /// after stepping (DST gap) keeps the UTC offset `self` had.
    fn step_months(&self, months: u32, overflow: MonthOverflow) -> Option<Self> {
        let local = overflow.step(self.naive_local(), months)?;
        let tz = self.timezone();
        if let Some(dt) = tz.from_local_datetime(&local).earliest() {
            return Some(dt);
        }
        let offset = i64::from(self.offset().fix().local_minus_utc());
        let utc = local.checked_sub_signed(chrono::Duration::seconds(offset))?;
        Some(tz.from_utc_datetime(&utc))
    }
}

// ── Caller-side parsing ─────────────────────────────────────────────────────

/// Parse an IANA timezone name into `Tz`.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| DistanceError::InvalidTimezone(format!("'{}'", s.trim())))
}

/// Parse a timestamp string in the given zone.
///
/// Accepts, in order:
/// - RFC 3339 with offset (`2024-08-05T10:00:00Z`), converted into `tz`
/// - local date-time without offset (`2024-08-05T10:00:00`), read in `tz`
/// - ISO date (`2024-08-05`), read as local midnight in `tz`
///
/// # Errors
///
/// Returns [`DistanceError::InvalidDatetime`] if none of the forms match or
/// the local reading does not exist in `tz`.
///
/// # Examples
///
/// ```
/// use temporal_distance::{parse_timestamp, parse_timezone};
///
/// let tz = parse_timezone("UTC").unwrap();
/// let dt = parse_timestamp("2024-08-05", &tz).unwrap();
/// assert_eq!(dt.to_rfc3339(), "2024-08-05T00:00:00+00:00");
/// ```
pub fn parse_timestamp(input: &str, tz: &Tz) -> Result<DateTime<Tz>> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(tz));
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| DistanceError::InvalidDatetime(format!("'{s}'")))?;

    tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
        DistanceError::InvalidDatetime(format!("'{s}' does not exist in {}", tz.name()))
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────
