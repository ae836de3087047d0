//! Month grid layout for the calendar view.
//!
//! Weeks start on Sunday. A grid is a flat row-major sequence of 7-wide rows
//! where `None` is a blank cell and `Some(day)` a day of the month.

use crate::model::program::Program;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const WEEK_LEN: usize = 7;

/// Calendar grid of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: u32,
    pub year: i32,
    /// `"<Month name> <year>"`.
    pub label: String,
    pub cells: Vec<Option<u32>>,
}

/// Number of days in `month` of `year`, or `None` for an invalid month.
pub fn days_in_month(month: u32, year: i32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next_first.signed_duration_since(first).num_days()).ok()
}

/// Display label such as `"June 2026"`; `None` for an invalid month.
pub fn month_label(month: u32, year: i32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|first| first.format("%B %Y").to_string())
}

/// Lays out `month` of `year` as a Sunday-first 7-column grid.
///
/// Leading blanks equal the weekday index of day 1 (Sunday = 0), followed by
/// days `1..=days_in_month`, then trailing blanks up to a multiple of 7. An
/// invalid month yields an empty grid.
pub fn calendar_cells(month: u32, year: i32) -> Vec<Option<u32>> {
    let (Some(first), Some(days)) = (
        NaiveDate::from_ymd_opt(year, month, 1),
        days_in_month(month, year),
    ) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut cells = Vec::with_capacity(leading + days as usize + WEEK_LEN);
    cells.resize(leading, None);
    cells.extend((1..=days).map(Some));
    let remainder = cells.len() % WEEK_LEN;
    if remainder != 0 {
        cells.resize(cells.len() + WEEK_LEN - remainder, None);
    }
    cells
}

/// Grids for all twelve months of `year`, January first.
pub fn year_calendar(year: i32) -> Vec<MonthGrid> {
    (1..=12)
        .filter_map(|month| {
            Some(MonthGrid {
                month,
                year,
                label: month_label(month, year)?,
                cells: calendar_cells(month, year),
            })
        })
        .collect()
}

/// Programs whose deadline is exactly `day`, in snapshot order.
pub fn programs_on_day(programs: &[Program], day: NaiveDate) -> Vec<Program> {
    programs
        .iter()
        .filter(|program| program.application_deadline == day)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{calendar_cells, days_in_month, month_label, year_calendar};

    #[test]
    fn february_respects_leap_years() {
        assert_eq!(days_in_month(2, 2024), Some(29));
        assert_eq!(days_in_month(2, 2026), Some(28));
        assert_eq!(days_in_month(2, 2100), Some(28));
        assert_eq!(days_in_month(13, 2026), None);
    }

    #[test]
    fn june_2026_starts_on_monday() {
        // 2026-06-01 is a Monday.
        let cells = calendar_cells(6, 2026);
        assert_eq!(cells[0], None);
        assert_eq!(cells[1], Some(1));
        assert_eq!(cells.len(), 35);
        assert_eq!(cells[30], Some(30));
        assert!(cells[31..].iter().all(Option::is_none));
    }

    #[test]
    fn february_2026_fills_exactly_four_rows() {
        // 2026-02-01 is a Sunday and February 2026 has 28 days.
        let cells = calendar_cells(2, 2026);
        assert_eq!(cells.len(), 28);
        assert_eq!(cells[0], Some(1));
        assert_eq!(cells[27], Some(28));
    }

    #[test]
    fn invalid_month_yields_empty_grid() {
        assert!(calendar_cells(0, 2026).is_empty());
        assert!(calendar_cells(13, 2026).is_empty());
        assert_eq!(month_label(13, 2026), None);
    }

    #[test]
    fn year_calendar_has_twelve_labelled_months() {
        let grids = year_calendar(2026);
        assert_eq!(grids.len(), 12);
        assert_eq!(grids[0].label, "January 2026");
        assert_eq!(grids[11].label, "December 2026");
    }
}
