//! Month keys and calendar arithmetic.
//!
//! Configuration records are keyed by `"YYYY-MM"` strings. A malformed key
//! yields zero days, which callers treat as "no indirect cost".

use chrono::{NaiveDate, Utc};

/// Splits a `"YYYY-MM"` key into year and month.
///
/// Returns `None` when the key does not have exactly two numeric parts or the
/// month is outside 1..=12.
#[must_use]
pub fn parse_month_key(month: &str) -> Option<(i32, u32)> {
    let (year, month) = month.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month))
}

/// Number of days in the month named by a `"YYYY-MM"` key, or 0 if malformed.
///
/// ```
/// use costline_core::calendar::days_in_month;
///
/// assert_eq!(days_in_month("2024-02"), 29);
/// assert_eq!(days_in_month("2024-13"), 0);
/// ```
#[must_use]
pub fn days_in_month(month: &str) -> u32 {
    let Some((year, month)) = parse_month_key(month) else {
        return 0;
    };
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        year.checked_add(1)
            .and_then(|next_year| NaiveDate::from_ymd_opt(next_year, 1, 1))
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match (first, next) {
        (Some(first), Some(next)) => u32::try_from((next - first).num_days()).unwrap_or(0),
        _ => 0,
    }
}

/// Month key (`"YYYY-MM"`) a date belongs to.
#[must_use]
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Month key for the current UTC date.
#[must_use]
pub fn current_month_key() -> String {
    month_key(Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2024-01", 31)]
    #[case("2024-02", 29)]
    #[case("2023-02", 28)]
    #[case("1900-02", 28)]
    #[case("2000-02", 29)]
    #[case("2024-04", 30)]
    #[case("2024-06", 30)]
    #[case("2024-12", 31)]
    fn test_days_in_month(#[case] month: &str, #[case] expected: u32) {
        assert_eq!(days_in_month(month), expected);
    }

    #[rstest]
    #[case("")]
    #[case("2024")]
    #[case("2024-00")]
    #[case("2024-13")]
    #[case("2024-xx")]
    #[case("June 2024")]
    #[case("2024-06-15")]
    fn test_malformed_month_has_zero_days(#[case] month: &str) {
        assert_eq!(days_in_month(month), 0);
    }

    #[test]
    fn test_month_key() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(month_key(date), "2024-06");
    }

    #[test]
    fn test_month_key_round_trips_through_days_in_month() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        assert_eq!(days_in_month(&month_key(date)), 30);
    }

    #[test]
    fn test_current_month_key_is_well_formed() {
        assert!(parse_month_key(&current_month_key()).is_some());
    }
}
