//! Business-hours configuration.
//!
//! [`Config`] holds the three inputs that define a business calendar: the
//! working-weekday set, the daily open/close window, and a holiday set.
//! The engine borrows a `Config` on every call and never mutates it; callers
//! own mutation, either on their own instance or on the process-wide default
//! behind [`Config::global`].
//!
//! Thread safety: the global instance is stored behind a `Mutex`. Callers
//! that use it should hold the guard across a whole engine call so the
//! configuration cannot change mid-computation, and tests that mutate it
//! should [`reset`](Config::reset) it when done.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

use bt_core::ensure;
use bt_core::errors::Result;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};

/// Business-calendar configuration.
///
/// The default is the conventional office week: Monday–Friday, 09:00–17:00,
/// no holidays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    work_week: HashSet<Weekday>,
    start: NaiveTime,
    end: NaiveTime,
    holidays: HashSet<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_week: HashSet::from([
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ]),
            start: NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time"),
            end: NaiveTime::from_hms_opt(17, 0, 0).expect("17:00 is a valid time"),
            holidays: HashSet::new(),
        }
    }
}

static GLOBAL: OnceLock<Mutex<Config>> = OnceLock::new();

impl Config {
    /// Create a configuration with the documented defaults
    /// (Monday–Friday, 09:00–17:00, no holidays).
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the process-wide default instance.
    ///
    /// Purely a convenience for callers that want one ambient calendar; the
    /// engine itself only ever takes `&Config`, so independent instances
    /// work just as well.
    pub fn global() -> &'static Mutex<Config> {
        GLOBAL.get_or_init(|| Mutex::new(Config::default()))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The set of weekdays on which business is conducted.
    pub fn work_week(&self) -> &HashSet<Weekday> {
        &self.work_week
    }

    /// Time-of-day at which the business day opens.
    pub fn business_start(&self) -> NaiveTime {
        self.start
    }

    /// Time-of-day at which the business day closes.
    pub fn business_end(&self) -> NaiveTime {
        self.end
    }

    /// Length of a full business day in seconds (`end − start`).
    pub fn business_day_seconds(&self) -> u64 {
        u64::from(self.end.num_seconds_from_midnight() - self.start.num_seconds_from_midnight())
    }

    /// Return `true` if `date` is a listed holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Return `true` if `date` is a working day: its weekday is in the work
    /// week and it is not a holiday.
    ///
    /// Evaluated fresh on every call — the classification always reflects
    /// the current work week and holiday set.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.work_week.contains(&date.weekday()) && !self.holidays.contains(&date)
    }

    // ── Mutation ──────────────────────────────────────────────────────────────

    /// Set the daily open/close window.
    ///
    /// The window must lie within a single day: `start < end`. Overnight
    /// windows are rejected with [`bt_core::Error::Config`].
    pub fn set_business_hours(&mut self, start: NaiveTime, end: NaiveTime) -> Result<()> {
        ensure!(
            start < end,
            "business start {start} must precede business end {end}"
        );
        self.start = start;
        self.end = end;
        Ok(())
    }

    /// Replace the working-weekday set.
    pub fn set_work_week(&mut self, weekdays: impl IntoIterator<Item = Weekday>) {
        self.work_week = weekdays.into_iter().collect();
    }

    /// Add a holiday. Dates outside the work week are already non-working.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }

    /// Remove a previously added holiday.
    pub fn remove_holiday(&mut self, date: NaiveDate) {
        self.holidays.remove(&date);
    }

    /// Remove every holiday.
    pub fn clear_holidays(&mut self) {
        self.holidays.clear();
    }

    /// Return the number of listed holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Restore the documented defaults: Monday–Friday, 09:00–17:00, no
    /// holidays. Test scenarios call this between independent cases.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
