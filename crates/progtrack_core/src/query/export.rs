//! Plain-text rendering for clipboard export and program cards.
//!
//! # Invariants
//! - Block line order is fixed: name, theme, location, deadline, start, end,
//!   requirements, website, separator.
//! - Optional lines are omitted entirely when their source is absent/empty.
//! - `website` is printed verbatim and never parsed here.

use super::grouping::sorted_by_deadline;
use crate::model::program::Program;
use chrono::NaiveDate;
use std::fmt::{Display, Formatter};

/// Last line of every export block.
pub const EXPORT_SEPARATOR: &str = "---";

const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

/// First requirements of a program plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementsPreview {
    pub shown: Vec<String>,
    pub hidden: usize,
}

/// Formats one program as a multi-line block ending in a newline.
///
/// ```text
/// Summer Research
/// Theme: Computer Science
/// Location: Boston, United States
/// Deadline: June 1, 2026
/// Start: July 1, 2026
/// Requirements:
/// • Transcript
/// Website: https://example.org
/// ---
/// ```
pub fn format_for_export(program: &Program) -> String {
    ExportBlock(program).to_string()
}

struct ExportBlock<'a>(&'a Program);

impl Display for ExportBlock<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let program = self.0;
        writeln!(f, "{}", program.name)?;
        writeln!(f, "Theme: {}", program.theme.label())?;
        writeln!(f, "Location: {}", export_location(program))?;
        writeln!(f, "Deadline: {}", display_date(program.application_deadline))?;
        if let Some(start) = program.start_date {
            writeln!(f, "Start: {}", display_date(start))?;
        }
        if let Some(end) = program.end_date {
            writeln!(f, "End: {}", display_date(end))?;
        }
        if !program.requirements.is_empty() {
            writeln!(f, "Requirements:")?;
            for requirement in &program.requirements {
                writeln!(f, "• {requirement}")?;
            }
        }
        if !program.website.is_empty() {
            writeln!(f, "Website: {}", program.website)?;
        }
        writeln!(f, "{EXPORT_SEPARATOR}")
    }
}

/// Export blocks of every program, soonest deadline first.
pub fn format_all_for_export(programs: &[Program]) -> String {
    sorted_by_deadline(programs)
        .iter()
        .map(format_for_export)
        .collect()
}

/// Splits requirements into the first `limit` and a hidden count.
pub fn requirements_preview(program: &Program, limit: usize) -> RequirementsPreview {
    let shown = program
        .requirements
        .iter()
        .take(limit)
        .cloned()
        .collect::<Vec<_>>();
    RequirementsPreview {
        hidden: program.requirements.len() - shown.len(),
        shown,
    }
}

/// Renders a date as `Month D, YYYY`.
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

fn export_location(program: &Program) -> String {
    if program.is_virtual {
        return "Virtual".to_string();
    }
    let parts = [program.city.as_str(), program.country.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>();
    if parts.is_empty() {
        "Unspecified".to_string()
    } else {
        parts.join(", ")
    }
}
