//! Calendar-day predicates and week/month windows
//!
//! Reminder selection works at calendar-day granularity in UTC: a reminder
//! fires when an entity's date falls exactly on "tomorrow", never on a
//! range. Weeks start on Sunday; windows are half-open `[start, end)`.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};

/// True when `ts` falls on the calendar day after `today`.
///
/// Exact-day match: `today` itself and the day after tomorrow never qualify.
pub fn is_tomorrow(ts: DateTime<Utc>, today: NaiveDate) -> bool {
    today.succ_opt().is_some_and(|tomorrow| ts.date_naive() == tomorrow)
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Half-open week window `[Sunday 00:00, next Sunday 00:00)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl WeekWindow {
    /// Window of the week containing `today`
    pub fn containing(today: NaiveDate) -> Self {
        let back = u64::from(today.weekday().num_days_from_sunday());
        let start_date = today.checked_sub_days(Days::new(back)).unwrap_or(today);
        let end_date = start_date.checked_add_days(Days::new(7)).unwrap_or(start_date);
        Self { start: day_start(start_date), end: day_start(end_date) }
    }

    /// True when `ts` falls inside the window
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts < self.end
    }

    /// Calendar date of the week's Sunday
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }
}

/// Half-open calendar-month window `[1st 00:00, next 1st 00:00)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthWindow {
    /// Window of the month containing `today`
    pub fn containing(today: NaiveDate) -> Self {
        let start_date = today.with_day(1).unwrap_or(today);
        let (year, month) = if start_date.month() == 12 {
            (start_date.year() + 1, 1)
        } else {
            (start_date.year(), start_date.month() + 1)
        };
        let end_date = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(start_date);
        Self { start: day_start(start_date), end: day_start(end_date) }
    }

    /// True when `ts` falls inside the window
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts < self.end
    }
}
