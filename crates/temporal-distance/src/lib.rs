//! # temporal-distance
//!
//! Calendar-exact elapsed time between two timestamps.
//!
//! Computes whole days, weeks, calendar months and calendar years from an
//! earlier to a later point in time, as used by age-based and interval-based
//! eligibility checks ("12 to 47 months old", "at least 4 weeks since the last
//! dose"). Month counting walks calendar anchors one month at a time, so
//! months of unequal length each count as one.
//!
//! ## Modules
//!
//! - [`distance`] — day, week, month and year counts plus options
//! - [`timestamp`] — the [`Timestamp`] abstraction, month-overflow policy, parsing helpers
//! - [`error`] — Error types

pub mod distance;
pub mod error;
pub mod timestamp;

pub use distance::{
    current_time, days_between, days_from_millis, measure, months_between,
    months_between_with_options, weeks_between, years_between, years_between_with_options,
    DistanceOptions, MonthBoundary, TemporalDistance, Unit, MAX_SAFE_INTEGER,
};
pub use error::DistanceError;
pub use timestamp::{parse_timestamp, parse_timezone, MonthOverflow, Timestamp};
