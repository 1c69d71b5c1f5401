use chrono::{Days, Months, NaiveDate};

use crate::models::DateBucket;

/// Inclusive range of calendar days an event date must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// `None` for `DateBucket::All`, which admits every date.
    pub fn for_bucket(bucket: DateBucket, today: NaiveDate) -> Option<Self> {
        let end = match bucket {
            DateBucket::All => return None,
            DateBucket::Today => today,
            DateBucket::Week => today.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX),
            // Month-end overflow clamps to the last day of the next month.
            DateBucket::Month => today
                .checked_add_months(Months::new(1))
                .unwrap_or(NaiveDate::MAX),
        };

        Some(Self { start: today, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_all_has_no_window() {
        assert_eq!(DateWindow::for_bucket(DateBucket::All, day(2024, 12, 15)), None);
    }

    #[test]
    fn test_today_is_a_single_day() {
        let window = DateWindow::for_bucket(DateBucket::Today, day(2024, 12, 15)).unwrap();
        assert!(window.contains(day(2024, 12, 15)));
        assert!(!window.contains(day(2024, 12, 14)));
        assert!(!window.contains(day(2024, 12, 16)));
    }

    #[test]
    fn test_week_bounds_are_inclusive() {
        let window = DateWindow::for_bucket(DateBucket::Week, day(2024, 12, 28)).unwrap();
        assert!(window.contains(day(2024, 12, 28)));
        assert!(window.contains(day(2025, 1, 4)));
        assert!(!window.contains(day(2025, 1, 5)));
        assert!(!window.contains(day(2024, 12, 27)));
    }

    #[test]
    fn test_month_uses_calendar_months() {
        let window = DateWindow::for_bucket(DateBucket::Month, day(2024, 2, 10)).unwrap();
        assert!(window.contains(day(2024, 3, 10)));
        assert!(!window.contains(day(2024, 3, 11)));

        let clamped = DateWindow::for_bucket(DateBucket::Month, day(2025, 1, 31)).unwrap();
        assert!(clamped.contains(day(2025, 2, 28)));
        assert!(!clamped.contains(day(2025, 3, 1)));
    }
}
