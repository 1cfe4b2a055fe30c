//! Elapsed days, weeks, calendar months and calendar years between two timestamps.
//!
//! All functions are pure and take explicit inputs. The caller must supply
//! `date1 <= date2`; a reversed pair is not checked and yields an
//! unspecified (possibly negative) count rather than an error.
//!
//! # Functions
//!
//! - [`days_between`] — whole 24-hour days, truncated
//! - [`weeks_between`] — `days_between / 7`, floored
//! - [`months_between`] — whole calendar months by anchor stepping
//! - [`years_between`] — `months_between / 12`, floored
//! - [`measure`] — all four at once
//!
//! # Month counting
//!
//! Months are counted by walking a pair of calendar anchors forward one month
//! at a time from `date1` rather than dividing a day count by an average month
//! length, so months of 28 to 31 days each count as exactly one.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DistanceError;
use crate::timestamp::{MonthOverflow, Timestamp};

/// Largest integer a double-precision float represents exactly (2^53 − 1).
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

const MILLIS_PER_DAY: i128 = 1000 * 60 * 60 * 24;
const DAYS_PER_WEEK: i64 = 7;
const MONTHS_PER_YEAR: i64 = 12;

// ── Options ─────────────────────────────────────────────────────────────────

/// How the month count is adjusted once the anchors bracket `date2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthBoundary {
    /// Count one more month when the upper anchor's day-of-month equals
    /// `date2`'s day-of-month, regardless of month, year or time of day.
    ///
    /// This is the reference behaviour eligibility rules were validated
    /// against. It over-counts when the days coincide but `date2` is still
    /// short of the anchor (e.g. an earlier time of day).
    #[default]
    DayOfMonth,
    /// Count one more month only when `date2` is exactly the upper anchor.
    ExactAnchor,
}

impl fmt::Display for MonthBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthBoundary::DayOfMonth => f.write_str("day-of-month"),
            MonthBoundary::ExactAnchor => f.write_str("exact-anchor"),
        }
    }
}

impl FromStr for MonthBoundary {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day-of-month" | "day" => Ok(MonthBoundary::DayOfMonth),
            "exact-anchor" | "exact" => Ok(MonthBoundary::ExactAnchor),
            _ => Err(DistanceError::InvalidOption(format!(
                "month boundary must be 'day-of-month' or 'exact-anchor': '{}'",
                s.trim()
            ))),
        }
    }
}

/// Options for the `*_with_options` month and year calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DistanceOptions {
    /// Day-of-month overflow policy used when advancing anchors.
    pub month_overflow: MonthOverflow,
    /// Final adjustment applied after anchor stepping.
    pub month_boundary: MonthBoundary,
}

// ── Units ───────────────────────────────────────────────────────────────────

/// A unit of elapsed time reported by [`measure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Days,
    Weeks,
    Months,
    Years,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Days => "days",
            Unit::Weeks => "weeks",
            Unit::Months => "months",
            Unit::Years => "years",
        };
        f.write_str(name)
    }
}

impl FromStr for Unit {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" | "day" | "days" => Ok(Unit::Days),
            "w" | "week" | "weeks" => Ok(Unit::Weeks),
            "m" | "month" | "months" => Ok(Unit::Months),
            "y" | "year" | "years" => Ok(Unit::Years),
            _ => Err(DistanceError::InvalidUnit(format!("'{}'", s.trim()))),
        }
    }
}

/// Every unit's count between two timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemporalDistance {
    pub days: i64,
    pub weeks: i64,
    pub months: i64,
    pub years: i64,
}

impl TemporalDistance {
    /// The count for one unit.
    pub fn get(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Days => self.days,
            Unit::Weeks => self.weeks,
            Unit::Months => self.months,
            Unit::Years => self.years,
        }
    }
}

// ── Clock ───────────────────────────────────────────────────────────────────

/// The current instant from the system clock.
///
/// The calculations never read the clock themselves; callers pass this (or a
/// fixed reference date) as `date2`.
pub fn current_time() -> DateTime<Utc> {
    Utc::now()
}

// ── Days and weeks ──────────────────────────────────────────────────────────

/// Whole days represented by a millisecond span, floored.
///
/// Clamped to [`MAX_SAFE_INTEGER`] when the quotient reaches it.
pub fn days_from_millis(millis: i128) -> i64 {
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if days >= i128::from(MAX_SAFE_INTEGER) {
        return MAX_SAFE_INTEGER;
    }
    // Below i64::MIN only for a reversed pair on a very wide Timestamp.
    i64::try_from(days).unwrap_or(i64::MIN)
}

/// Number of whole days from `date1` to `date2`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use temporal_distance::days_between;
///
/// let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let feb1 = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// assert_eq!(days_between(&jan1, &feb1), 31);
/// ```
pub fn days_between<T: Timestamp>(date1: &T, date2: &T) -> i64 {
    days_from_millis(date1.millis_until(date2))
}

/// Number of whole weeks from `date1` to `date2`.
pub fn weeks_between<T: Timestamp>(date1: &T, date2: &T) -> i64 {
    days_between(date1, date2).div_euclid(DAYS_PER_WEEK)
}

// ── Months and years ────────────────────────────────────────────────────────

/// Number of whole calendar months from `date1` to `date2` with default options.
///
/// See [`months_between_with_options`].
pub fn months_between<T: Timestamp>(date1: &T, date2: &T) -> i64 {
    months_between_with_options(date1, date2, &DistanceOptions::default())
}

/// Number of whole calendar months from `date1` to `date2`.
///
/// Two anchors start at `date1` and `date1 + 1 month`. While `date2` lies
/// beyond both, one month is counted and both anchors advance by one month
/// (each from its own current value, so clamping or rollover drift carries
/// forward). Landing exactly on the upper anchor ends the walk; the
/// [`MonthBoundary`] rule then decides whether that final month counts.
///
/// An interval of zero length is always zero months.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use temporal_distance::{months_between_with_options, DistanceOptions};
///
/// let birth = NaiveDate::from_ymd_opt(2023, 2, 16).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 8, 5).unwrap();
/// assert_eq!(months_between_with_options(&birth, &today, &DistanceOptions::default()), 17);
/// ```
pub fn months_between_with_options<T: Timestamp>(
    date1: &T,
    date2: &T,
    options: &DistanceOptions,
) -> i64 {
    let overflow = options.month_overflow;
    let mut months: i64 = 0;
    let mut low = date1.clone();
    let Some(mut high) = date1.step_months(1, overflow) else {
        tracing::warn!("month anchor out of range, returning 0 months");
        return 0;
    };

    // `date2` is never strictly between the anchors inside this loop; the
    // walk stops as soon as it is at or before `high`.
    while *date2 > low && *date2 > high {
        months += 1;
        match (
            low.step_months(1, overflow),
            high.step_months(1, overflow),
        ) {
            (Some(next_low), Some(next_high)) => {
                low = next_low;
                high = next_high;
            }
            _ => {
                tracing::warn!(months, "month anchor out of range, stopping early");
                return months;
            }
        }
        tracing::trace!(
            months,
            anchor_day = high.day(),
            "advanced month anchors"
        );
    }

    if *date2 > low && closes_final_month(&high, date2, options.month_boundary) {
        months += 1;
    }

    tracing::debug!(months, %overflow, boundary = %options.month_boundary, "counted months");
    months
}

/// Whether landing at `date2` (at or before `high`) completes one more month.
fn closes_final_month<T: Timestamp>(high: &T, date2: &T, boundary: MonthBoundary) -> bool {
    match boundary {
        // FIXME: compares day-of-month only; a coinciding day in a different
        // month or at an earlier time of day still counts. Kept because rule
        // thresholds were validated against it; switch the default to
        // ExactAnchor once the eligibility fixtures are re-baselined.
        MonthBoundary::DayOfMonth => high.day() == date2.day(),
        MonthBoundary::ExactAnchor => high == date2,
    }
}

/// Number of whole calendar years from `date1` to `date2` with default options.
pub fn years_between<T: Timestamp>(date1: &T, date2: &T) -> i64 {
    years_between_with_options(date1, date2, &DistanceOptions::default())
}

/// Number of whole calendar years from `date1` to `date2`: whole months / 12.
pub fn years_between_with_options<T: Timestamp>(
    date1: &T,
    date2: &T,
    options: &DistanceOptions,
) -> i64 {
    months_between_with_options(date1, date2, options).div_euclid(MONTHS_PER_YEAR)
}

/// Every unit's count from `date1` to `date2`.
pub fn measure<T: Timestamp>(date1: &T, date2: &T, options: &DistanceOptions) -> TemporalDistance {
    let days = days_between(date1, date2);
    let months = months_between_with_options(date1, date2, options);
    TemporalDistance {
        days,
        weeks: days.div_euclid(DAYS_PER_WEEK),
        months,
        years: months.div_euclid(MONTHS_PER_YEAR),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
