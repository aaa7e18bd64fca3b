//! Business-calendar engine.
//!
//! Four pure entry points over zoned timestamps and a borrowed [`Config`]:
//! elapsed business seconds between two instants, seconds left until close,
//! seconds accrued since open, and an in-business-hours predicate.
//!
//! Every function works in the timestamp's own civil calendar — it asks
//! chrono for the local date, weekday, and time-of-day and never touches
//! UTC offsets directly, so DST transitions outside the business window are
//! invisible here. The two endpoints of a duration query are expected to be
//! in the same timezone.
//!
//! Boundary convention: the business window is `[start, end)` — an instant
//! exactly at open is inside business hours, an instant exactly at close is
//! not.

use chrono::{DateTime, NaiveTime, TimeZone, Timelike};

use crate::config::Config;

fn seconds_from_midnight(t: NaiveTime) -> u64 {
    u64::from(t.num_seconds_from_midnight())
}

/// Business seconds remaining on `t`'s calendar date, from `t` until close.
///
/// Returns 0 on non-working dates and at or after close; before open the
/// whole business day still lies ahead, so the full day length is returned.
pub fn business_seconds_left_in_day<Tz: TimeZone>(t: &DateTime<Tz>, config: &Config) -> u64 {
    if !config.is_working_day(t.date_naive()) {
        return 0;
    }
    let tod = seconds_from_midnight(t.time());
    let open = seconds_from_midnight(config.business_start());
    let close = seconds_from_midnight(config.business_end());
    if tod <= open {
        close - open
    } else if tod >= close {
        0
    } else {
        close - tod
    }
}

/// Business seconds accrued on `t`'s calendar date, from open until `t`.
///
/// The complement of [`business_seconds_left_in_day`]: 0 on non-working
/// dates and before open, the full day length at or after close.
pub fn business_seconds_since_start_of_day<Tz: TimeZone>(
    t: &DateTime<Tz>,
    config: &Config,
) -> u64 {
    if !config.is_working_day(t.date_naive()) {
        return 0;
    }
    let tod = seconds_from_midnight(t.time());
    let open = seconds_from_midnight(config.business_start());
    let close = seconds_from_midnight(config.business_end());
    if tod <= open {
        0
    } else if tod >= close {
        close - open
    } else {
        tod - open
    }
}

/// Return `true` if `t` falls within business hours: a working date with a
/// time-of-day in `[start, end)`.
pub fn during_business_hours<Tz: TimeZone>(t: &DateTime<Tz>, config: &Config) -> bool {
    if !config.is_working_day(t.date_naive()) {
        return false;
    }
    let tod = t.time();
    tod >= config.business_start() && tod < config.business_end()
}

/// Total business seconds between `start` and `end`.
///
/// Sums the remainder of `start`'s business day, the full business-day
/// length of every working date strictly between the two, and the accrued
/// portion of `end`'s business day. On a shared calendar date both
/// endpoints are clamped to the open/close window instead.
///
/// Returns 0 whenever `end` is not after `start`.
pub fn business_seconds_between<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    config: &Config,
) -> u64 {
    if end <= start {
        return 0;
    }

    let start_date = start.date_naive();
    let end_date = end.date_naive();

    if start_date == end_date {
        if !config.is_working_day(start_date) {
            return 0;
        }
        let open = seconds_from_midnight(config.business_start());
        let close = seconds_from_midnight(config.business_end());
        let from = seconds_from_midnight(start.time()).clamp(open, close);
        let to = seconds_from_midnight(end.time()).clamp(open, close);
        // A fall-back transition inside the window can put `end` at an
        // earlier civil time than `start`; clamp the difference at zero.
        return to.saturating_sub(from);
    }

    let mut total = business_seconds_left_in_day(start, config)
        + business_seconds_since_start_of_day(end, config);

    // Full working dates strictly between the two endpoints.
    let day_length = config.business_day_seconds();
    let mut date = start_date.succ_opt();
    while let Some(d) = date {
        if d >= end_date {
            break;
        }
        if config.is_working_day(d) {
            total += day_length;
        }
        date = d.succ_opt();
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    // 2010-08-17 is a Tuesday throughout.

    #[test]
    fn open_is_inside_close_is_outside() {
        let config = Config::new();
        assert!(during_business_hours(&utc(2010, 8, 17, 9, 0), &config));
        assert!(!during_business_hours(&utc(2010, 8, 17, 17, 0), &config));
    }

    #[test]
    fn left_and_since_at_the_boundaries() {
        let config = Config::new();
        let at_open = utc(2010, 8, 17, 9, 0);
        let at_close = utc(2010, 8, 17, 17, 0);

        assert_eq!(business_seconds_left_in_day(&at_open, &config), 8 * 3600);
        assert_eq!(business_seconds_since_start_of_day(&at_open, &config), 0);
        assert_eq!(business_seconds_left_in_day(&at_close, &config), 0);
        assert_eq!(
            business_seconds_since_start_of_day(&at_close, &config),
            8 * 3600
        );
    }

    #[test]
    fn same_day_clamps_both_endpoints() {
        let config = Config::new();
        // Entirely before open.
        assert_eq!(
            business_seconds_between(&utc(2010, 8, 17, 6, 0), &utc(2010, 8, 17, 7, 0), &config),
            0
        );
        // Straddles open.
        assert_eq!(
            business_seconds_between(&utc(2010, 8, 17, 8, 0), &utc(2010, 8, 17, 10, 0), &config),
            3600
        );
        // Straddles close.
        assert_eq!(
            business_seconds_between(&utc(2010, 8, 17, 16, 0), &utc(2010, 8, 17, 19, 0), &config),
            3600
        );
        // Straddles the whole window.
        assert_eq!(
            business_seconds_between(&utc(2010, 8, 17, 0, 0), &utc(2010, 8, 17, 23, 59), &config),
            8 * 3600
        );
    }

    #[test]
    fn reversed_and_zero_spans_are_zero() {
        let config = Config::new();
        let t = utc(2010, 8, 17, 12, 0);
        assert_eq!(business_seconds_between(&t, &t, &config), 0);
        assert_eq!(
            business_seconds_between(&utc(2010, 8, 17, 13, 0), &t, &config),
            0
        );
    }

    #[test]
    fn holiday_zeroes_every_operation() {
        let mut config = Config::new();
        let tue = chrono::NaiveDate::from_ymd_opt(2010, 8, 17).unwrap();
        config.add_holiday(tue);

        let noon = utc(2010, 8, 17, 12, 0);
        assert!(!during_business_hours(&noon, &config));
        assert_eq!(business_seconds_left_in_day(&noon, &config), 0);
        assert_eq!(business_seconds_since_start_of_day(&noon, &config), 0);
        assert_eq!(
            business_seconds_between(&utc(2010, 8, 17, 9, 0), &utc(2010, 8, 17, 17, 0), &config),
            0
        );
    }

    #[test]
    fn narrow_window_multi_day_span() {
        let mut config = Config::new();
        config
            .set_business_hours(
                NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            )
            .unwrap();

        // Mon 2010-08-16 09:00 → Wed 2010-08-18 10:15:
        // full Monday (1800 s) + full Tuesday (1800 s) + 900 s of Wednesday.
        assert_eq!(
            business_seconds_between(&utc(2010, 8, 16, 9, 0), &utc(2010, 8, 18, 10, 15), &config),
            1800 + 1800 + 900
        );
    }
}
