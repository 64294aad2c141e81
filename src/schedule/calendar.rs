//! Working-hours calendar arithmetic
//!
//! Converts abstract durations in hours into calendar instants. Work happens
//! inside a fixed daily window starting at 09:00 UTC on the configured work
//! days; everything outside the window is skipped. All functions are pure:
//! the caller supplies every instant, the calendar never reads the clock.

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc, Weekday};

use crate::domain::{Constraints, DEFAULT_HOURS_PER_DAY, DEFAULT_WORK_DAYS};

/// Hour of day (UTC) at which the daily work window opens
pub const WORK_WINDOW_START_HOUR: i64 = 9;

/// Returns the plan-start instant for a run entered at `now`: 09:00 UTC on
/// `now`'s date. Read the wall clock once and pass the result through.
pub fn plan_start(now: DateTime<Utc>) -> DateTime<Utc> {
    day_origin(now) + Duration::hours(WORK_WINDOW_START_HOUR)
}

/// Midnight UTC on the instant's date
fn day_origin(t: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&t.date_naive().and_time(NaiveTime::MIN))
}

/// A work-week calendar with a fixed daily window
#[derive(Debug, Clone, PartialEq)]
pub struct WorkCalendar {
    work_days: Vec<Weekday>,
    window_seconds: i64,
}

impl WorkCalendar {
    /// Creates a calendar from a work-day set and a daily window length in
    /// hours. An empty work-day set falls back to Mon-Fri so the cursor can
    /// always reach a work day.
    pub fn new(work_days: Vec<Weekday>, hours_per_day: f64) -> Self {
        let work_days = if work_days.is_empty() {
            DEFAULT_WORK_DAYS.to_vec()
        } else {
            work_days
        };

        Self {
            work_days,
            window_seconds: hours_to_seconds(hours_per_day),
        }
    }

    /// Creates a calendar from run constraints, applying defaults
    pub fn from_constraints(constraints: Option<&Constraints>) -> Self {
        match constraints {
            Some(c) => Self::new(c.effective_work_days(), c.effective_hours_per_day()),
            None => Self::new(DEFAULT_WORK_DAYS.to_vec(), DEFAULT_HOURS_PER_DAY),
        }
    }

    fn is_work_day(&self, t: DateTime<Utc>) -> bool {
        self.work_days.contains(&t.weekday())
    }

    fn window_start(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        day_origin(t) + Duration::hours(WORK_WINDOW_START_HOUR)
    }

    fn window_end(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        self.window_start(t) + Duration::seconds(self.window_seconds)
    }

    /// Window start of the next work day after `t`'s date
    fn next_window_start(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        let mut cursor = self.window_start(t) + Duration::days(1);
        while !self.is_work_day(cursor) {
            cursor += Duration::days(1);
        }
        cursor
    }

    /// Moves an instant into the work window without consuming any duration:
    /// non-work days and instants past the window end advance to the next
    /// work day's window start; instants before the window start snap to it.
    pub fn snap_to_window(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        if !self.is_work_day(t) || t > self.window_end(t) {
            self.next_window_start(t)
        } else if t < self.window_start(t) {
            self.window_start(t)
        } else {
            t
        }
    }

    /// Returns the instant at which `hours` of work starting at `start` is
    /// finished, skipping non-work days and non-work hours. Zero hours
    /// finishes at the (possibly snapped) start.
    pub fn add_working_hours(&self, start: DateTime<Utc>, hours: f64) -> DateTime<Utc> {
        let mut cursor = self.snap_to_window(start);
        let mut remaining = hours_to_seconds(hours.max(0.0));

        while remaining > 0 {
            if !self.is_work_day(cursor) {
                cursor = self.next_window_start(cursor);
            }

            let left_today = (self.window_end(cursor) - cursor).num_seconds().max(0);
            let consume = remaining.min(left_today);

            cursor += Duration::seconds(consume);
            remaining -= consume;

            if remaining > 0 {
                cursor = self.next_window_start(cursor);
            }
        }

        cursor
    }
}

/// Converts fractional hours to whole seconds
fn hours_to_seconds(hours: f64) -> i64 {
    (hours * 3600.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2025-01-06 is a Monday
    fn dt(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, day, hour, min, 0).unwrap()
    }

    fn default_calendar() -> WorkCalendar {
        WorkCalendar::new(DEFAULT_WORK_DAYS.to_vec(), 8.0)
    }

    #[test]
    fn consumes_hours_within_one_day() {
        let cal = default_calendar();
        let finish = cal.add_working_hours(dt(6, 9, 0), 2.0);
        assert_eq!(finish, dt(6, 11, 0));
    }

    #[test]
    fn overflow_rolls_to_next_day() {
        // 10h from Monday 09:00 with an 8h window: 8h to 17:00, 2h more
        // starting Tuesday 09:00
        let cal = default_calendar();
        let finish = cal.add_working_hours(dt(6, 9, 0), 10.0);
        assert_eq!(finish, dt(7, 11, 0));
    }

    #[test]
    fn exact_window_fill_ends_at_window_end() {
        let cal = default_calendar();
        let finish = cal.add_working_hours(dt(6, 9, 0), 8.0);
        assert_eq!(finish, dt(6, 17, 0));
    }

    #[test]
    fn weekend_is_skipped() {
        // Friday 16:00 + 2h: 1h to 17:00, 1h more on Monday
        let cal = default_calendar();
        let finish = cal.add_working_hours(dt(10, 16, 0), 2.0);
        assert_eq!(finish, dt(13, 10, 0));
    }

    #[test]
    fn start_on_weekend_snaps_to_monday() {
        // 2025-01-11 is a Saturday
        let cal = default_calendar();
        let finish = cal.add_working_hours(dt(11, 9, 0), 1.0);
        assert_eq!(finish, dt(13, 10, 0));
    }

    #[test]
    fn start_before_window_snaps_to_window_start() {
        let cal = default_calendar();
        let finish = cal.add_working_hours(dt(6, 6, 30), 1.0);
        assert_eq!(finish, dt(6, 10, 0));
    }

    #[test]
    fn start_after_window_end_rolls_to_next_day() {
        let cal = default_calendar();
        let finish = cal.add_working_hours(dt(6, 18, 0), 1.0);
        assert_eq!(finish, dt(7, 10, 0));
    }

    #[test]
    fn zero_hours_finishes_at_snapped_start() {
        let cal = default_calendar();
        assert_eq!(cal.add_working_hours(dt(6, 10, 0), 0.0), dt(6, 10, 0));
        assert_eq!(cal.add_working_hours(dt(6, 18, 0), 0.0), dt(7, 9, 0));
    }

    #[test]
    fn fractional_hours_consume_minutes() {
        let cal = default_calendar();
        let finish = cal.add_working_hours(dt(6, 9, 0), 0.5);
        assert_eq!(finish, dt(6, 9, 30));
    }

    #[test]
    fn custom_window_length() {
        // 4h window: Monday 09:00-13:00, 6h spills 2h into Tuesday
        let cal = WorkCalendar::new(DEFAULT_WORK_DAYS.to_vec(), 4.0);
        let finish = cal.add_working_hours(dt(6, 9, 0), 6.0);
        assert_eq!(finish, dt(7, 11, 0));
    }

    #[test]
    fn custom_work_day_set() {
        // Mon/Wed only: 10h from Monday 09:00 finishes Wednesday 11:00
        let cal = WorkCalendar::new(vec![Weekday::Mon, Weekday::Wed], 8.0);
        let finish = cal.add_working_hours(dt(6, 9, 0), 10.0);
        assert_eq!(finish, dt(8, 11, 0));
    }

    #[test]
    fn empty_work_day_set_falls_back_to_default() {
        let cal = WorkCalendar::new(vec![], 8.0);
        assert_eq!(cal, default_calendar());
    }

    #[test]
    fn plan_start_is_nine_utc_on_same_date() {
        assert_eq!(plan_start(dt(6, 14, 23)), dt(6, 9, 0));
        assert_eq!(plan_start(dt(6, 2, 0)), dt(6, 9, 0));
    }

    #[test]
    fn is_referentially_transparent() {
        let cal = default_calendar();
        let a = cal.add_working_hours(dt(6, 9, 0), 37.25);
        let b = cal.add_working_hours(dt(6, 9, 0), 37.25);
        assert_eq!(a, b);
    }
}
