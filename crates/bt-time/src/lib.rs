//! # bt-time
//!
//! Business-hours duration arithmetic over timezone-aware timestamps.
//!
//! The engine answers four questions about a configurable business calendar
//! (working weekdays, a daily open/close window, and a holiday set):
//!
//! * how many business seconds elapse between two zoned timestamps;
//! * how many business seconds remain in a timestamp's day until close;
//! * how many business seconds have accrued since that day's open;
//! * whether a timestamp falls within business hours at all.
//!
//! All four are pure functions of the timestamps and a [`Config`] borrowed
//! for the duration of the call. Timestamps are `chrono::DateTime<Tz>` for
//! any `Tz: TimeZone`; the engine only ever asks them for their civil date,
//! weekday, and time-of-day, so DST and offset rules stay chrono's problem.
//!
//! ```
//! use bt_time::{business_seconds_between, Config};
//! use chrono::{TimeZone, Utc};
//!
//! let config = Config::new();
//! // Tuesday 08:50 → 13:00 with 09:00–17:00 hours: four business hours.
//! let start = Utc.with_ymd_and_hms(2010, 8, 17, 8, 50, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2010, 8, 17, 13, 0, 0).unwrap();
//! assert_eq!(business_seconds_between(&start, &end, &config), 4 * 3600);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-calendar engine entry points.
pub mod business_hours;

/// Business-hours configuration: work week, open/close window, holidays.
pub mod config;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_hours::{
    business_seconds_between, business_seconds_left_in_day,
    business_seconds_since_start_of_day, during_business_hours,
};
pub use config::Config;
