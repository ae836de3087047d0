//! Overview statistics and deadline-relative filters.

use super::grouping::sort_by_deadline;
use crate::model::program::Program;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

/// Counters shown on the overview screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub total: usize,
    /// Deadline on or after the reference date.
    pub upcoming_count: usize,
    /// Distinct `country` strings, `""` included, virtual programs included.
    pub unique_country_count: usize,
    pub virtual_count: usize,
}

/// Computes overview counters relative to `reference_date`.
pub fn summary_stats(programs: &[Program], reference_date: NaiveDate) -> SummaryStats {
    let unique_country_count = programs
        .iter()
        .map(|program| program.country.as_str())
        .collect::<HashSet<_>>()
        .len();

    SummaryStats {
        total: programs.len(),
        upcoming_count: programs
            .iter()
            .filter(|program| is_upcoming(program, reference_date))
            .count(),
        unique_country_count,
        virtual_count: programs.iter().filter(|program| program.is_virtual).count(),
    }
}

/// Programs with a deadline on or after `reference_date`, soonest first.
pub fn upcoming(programs: &[Program], reference_date: NaiveDate) -> Vec<Program> {
    let mut selected = programs
        .iter()
        .filter(|program| is_upcoming(program, reference_date))
        .cloned()
        .collect::<Vec<_>>();
    sort_by_deadline(&mut selected);
    selected
}

/// Starred programs, soonest deadline first.
pub fn starred(programs: &[Program]) -> Vec<Program> {
    let mut selected = programs
        .iter()
        .filter(|program| program.is_starred)
        .cloned()
        .collect::<Vec<_>>();
    sort_by_deadline(&mut selected);
    selected
}

fn is_upcoming(program: &Program, reference_date: NaiveDate) -> bool {
    program.application_deadline >= reference_date
}
