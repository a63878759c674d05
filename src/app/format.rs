//! Relative Date Formatting
//!
//! Humanizes note timestamps the way the cards display them: "Today",
//! "Yesterday", then day/week/month buckets, falling back to a full
//! date for anything older than a year.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Humanize a timestamp relative to the local calendar date.
pub fn humanize(timestamp: DateTime<Utc>) -> String {
    humanize_on(
        timestamp.with_timezone(&Local).date_naive(),
        Local::now().date_naive(),
    )
}

/// Bucket a calendar date against `today`. Split out so the buckets are
/// testable with fixed dates.
pub fn humanize_on(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();

    if days < 0 {
        return "in the future".to_string();
    }
    if days == 0 {
        return "Today".to_string();
    }
    if days == 1 {
        return "Yesterday".to_string();
    }
    if days < 7 {
        return format!("{} days ago", days);
    }

    let weeks = days / 7;
    if weeks == 1 {
        return "a week ago".to_string();
    }
    if weeks < 5 {
        return format!("{} weeks ago", weeks);
    }

    let months = days / 30;
    if months == 1 {
        return "a month ago".to_string();
    }
    if months < 12 {
        return format!("{} months ago", months);
    }

    let years = days / 365;
    if years == 1 {
        return "a year ago".to_string();
    }

    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_buckets() {
        let today = day(2024, 5, 20);
        assert_eq!(humanize_on(today, today), "Today");
        assert_eq!(humanize_on(day(2024, 5, 19), today), "Yesterday");
        assert_eq!(humanize_on(day(2024, 5, 17), today), "3 days ago");
        assert_eq!(humanize_on(day(2024, 5, 14), today), "6 days ago");
    }

    #[test]
    fn test_week_buckets() {
        let today = day(2024, 5, 20);
        assert_eq!(humanize_on(day(2024, 5, 13), today), "a week ago");
        assert_eq!(humanize_on(day(2024, 5, 5), today), "2 weeks ago");
        assert_eq!(humanize_on(day(2024, 4, 22), today), "4 weeks ago");
    }

    #[test]
    fn test_month_buckets() {
        let today = day(2024, 5, 20);
        assert_eq!(humanize_on(day(2024, 4, 15), today), "a month ago");
        assert_eq!(humanize_on(day(2024, 2, 20), today), "3 months ago");
    }

    #[test]
    fn test_year_and_fallback() {
        let today = day(2024, 5, 20);
        assert_eq!(humanize_on(day(2023, 5, 1), today), "a year ago");
        assert_eq!(humanize_on(day(2021, 3, 2), today), "March 2, 2021");
    }

    #[test]
    fn test_future_dates() {
        let today = day(2024, 5, 20);
        assert_eq!(humanize_on(day(2024, 5, 21), today), "in the future");
    }
}
