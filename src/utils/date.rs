//! Date parsing and the period/range grammar shared by `list --period`
//! and `export --range`.
//!
//! Supported period expressions:
//! - `YYYY`
//! - `YYYY-MM`
//! - `YYYY-MM-DD`
//! - `start:end` where both sides use the same shape above
//! - `all` (no bounds)

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Inclusive date bounds for a period expression. `None` means unbounded
/// (the `all` keyword).
pub fn parse_period(p: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let p = p.trim();

    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, _) = period_bounds(start_raw.trim())?;
        let (_, end) = period_bounds(end_raw.trim())?;
        if end < start {
            return Err(AppError::InvalidRange(p.to_string()));
        }
        return Ok(Some((start, end)));
    }

    period_bounds(p).map(Some)
}

/// Bounds of the current month, the default window for `list`.
pub fn current_month_bounds() -> (NaiveDate, NaiveDate) {
    let t = today();
    let first = NaiveDate::from_ymd_opt(t.year(), t.month(), 1).unwrap_or(t);
    let last = NaiveDate::from_ymd_opt(t.year(), t.month(), month_last_day(t.year(), t.month()))
        .unwrap_or(t);
    (first, last)
}

pub fn format_date(d: NaiveDate, show_weekday: bool) -> String {
    if show_weekday {
        format!("{} ({})", d.format("%Y-%m-%d"), d.format("%a"))
    } else {
        d.format("%Y-%m-%d").to_string()
    }
}

fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidRange(p.to_string()))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1);
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31);
            match (d1, d2) {
                (Some(a), Some(b)) => Ok((a, b)),
                _ => Err(AppError::InvalidRange(p.to_string())),
            }
        }
        // YYYY-MM
        7 => {
            let (y_raw, m_raw) = p
                .split_once('-')
                .ok_or_else(|| AppError::InvalidRange(p.to_string()))?;
            let y: i32 = y_raw
                .parse()
                .map_err(|_| AppError::InvalidRange(p.to_string()))?;
            let m: u32 = m_raw
                .parse()
                .map_err(|_| AppError::InvalidRange(p.to_string()))?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1);
            let d2 = NaiveDate::from_ymd_opt(y, m, month_last_day(y, m));
            match (d1, d2) {
                (Some(a), Some(b)) => Ok((a, b)),
                _ => Err(AppError::InvalidRange(p.to_string())),
            }
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidRange(p.to_string())),
    }
}

fn month_last_day(y: i32, m: u32) -> u32 {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn single_day_period() {
        let b = parse_period("2025-01-06").unwrap().unwrap();
        assert_eq!(b, (d("2025-01-06"), d("2025-01-06")));
    }

    #[test]
    fn month_period_covers_whole_month() {
        let b = parse_period("2024-02").unwrap().unwrap();
        assert_eq!(b, (d("2024-02-01"), d("2024-02-29")));
    }

    #[test]
    fn year_and_range_periods() {
        let b = parse_period("2025").unwrap().unwrap();
        assert_eq!(b, (d("2025-01-01"), d("2025-12-31")));

        let b = parse_period("2025-01:2025-03").unwrap().unwrap();
        assert_eq!(b, (d("2025-01-01"), d("2025-03-31")));
    }

    #[test]
    fn all_means_unbounded() {
        assert!(parse_period("all").unwrap().is_none());
        assert!(parse_period("ALL").unwrap().is_none());
    }

    #[test]
    fn rejects_garbage_and_inverted_ranges() {
        assert!(parse_period("janvier").is_err());
        assert!(parse_period("2025-03:2025-01").is_err());
    }
}
