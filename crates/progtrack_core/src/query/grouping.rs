//! Grouped and sorted projections of a program snapshot.
//!
//! # Invariants
//! - Every group's programs are ordered by application deadline ascending.
//! - Deadline ties keep the relative order of the input snapshot.
//! - Group keys are taken verbatim; no trimming or case folding.

use crate::model::program::Program;
use crate::model::theme::Theme;
use chrono::Datelike;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Programs of one theme, as shown by the theme browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeGroup {
    pub theme: Theme,
    pub count: usize,
    pub programs: Vec<Program>,
}

/// Programs whose deadline falls in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGroup {
    /// 1-based month number.
    pub month: u32,
    pub year: i32,
    /// Display key, e.g. `"June 2026"`.
    pub label: String,
    pub programs: Vec<Program>,
}

/// Copy of `programs` ordered by deadline (stable).
pub fn sorted_by_deadline(programs: &[Program]) -> Vec<Program> {
    let mut sorted = programs.to_vec();
    sort_by_deadline(&mut sorted);
    sorted
}

/// Partitions programs by `country`.
///
/// An empty country string forms its own group under the `""` key.
pub fn group_by_country(programs: &[Program]) -> BTreeMap<String, Vec<Program>> {
    let mut groups: BTreeMap<String, Vec<Program>> = BTreeMap::new();
    for program in programs {
        groups
            .entry(program.country.clone())
            .or_default()
            .push(program.clone());
    }
    sort_groups(groups)
}

/// Sorted distinct country values, including `""` when present.
pub fn countries(programs: &[Program]) -> Vec<String> {
    programs
        .iter()
        .map(|program| program.country.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Groups programs by theme, largest group first.
///
/// Only themes with at least one program are returned. Equal counts keep
/// `Theme::ALL` order.
pub fn group_by_theme(programs: &[Program]) -> Vec<ThemeGroup> {
    let mut groups = Theme::ALL
        .iter()
        .filter_map(|&theme| {
            let members = programs
                .iter()
                .filter(|program| program.theme == theme)
                .cloned()
                .collect::<Vec<_>>();
            if members.is_empty() {
                return None;
            }
            Some(ThemeGroup {
                theme,
                count: members.len(),
                programs: sorted_by_deadline(&members),
            })
        })
        .collect::<Vec<_>>();
    groups.sort_by(|left, right| right.count.cmp(&left.count));
    groups
}

/// Groups the programs whose deadline falls in `year` by month.
///
/// Months are returned in calendar order; months without deadlines are
/// omitted.
pub fn group_by_month(programs: &[Program], year: i32) -> Vec<MonthGroup> {
    let mut by_month: BTreeMap<u32, Vec<Program>> = BTreeMap::new();
    for program in programs {
        let deadline = program.application_deadline;
        if deadline.year() != year {
            continue;
        }
        by_month
            .entry(deadline.month())
            .or_default()
            .push(program.clone());
    }

    by_month
        .into_iter()
        .filter_map(|(month, mut members)| {
            sort_by_deadline(&mut members);
            Some(MonthGroup {
                month,
                year,
                label: super::calendar::month_label(month, year)?,
                programs: members,
            })
        })
        .collect()
}

/// Groups programs under each of their tags.
///
/// A program with N tags appears in N groups; untagged programs appear in
/// none. Each tag entry is one membership, so a tag listed twice on one
/// program places it twice in that group.
pub fn group_by_tag(programs: &[Program]) -> BTreeMap<String, Vec<Program>> {
    let mut groups: BTreeMap<String, Vec<Program>> = BTreeMap::new();
    for program in programs {
        for tag in &program.tags {
            groups.entry(tag.clone()).or_default().push(program.clone());
        }
    }
    sort_groups(groups)
}

/// Flag emoji for common countries; a globe for anything else.
pub fn country_flag(country: &str) -> &'static str {
    match country {
        "United States" => "🇺🇸",
        "United Kingdom" => "🇬🇧",
        "Canada" => "🇨🇦",
        "Australia" => "🇦🇺",
        "Germany" => "🇩🇪",
        "France" => "🇫🇷",
        "Netherlands" => "🇳🇱",
        "Switzerland" => "🇨🇭",
        "Singapore" => "🇸🇬",
        "Japan" => "🇯🇵",
        "South Korea" => "🇰🇷",
        "China" => "🇨🇳",
        "Sweden" => "🇸🇪",
        "Denmark" => "🇩🇰",
        "Norway" => "🇳🇴",
        "Spain" => "🇪🇸",
        "Italy" => "🇮🇹",
        "Austria" => "🇦🇹",
        "Belgium" => "🇧🇪",
        "Ireland" => "🇮🇪",
        "New Zealand" => "🇳🇿",
        "India" => "🇮🇳",
        "Israel" => "🇮🇱",
        "UAE" => "🇦🇪",
        "South Africa" => "🇿🇦",
        _ => "🌍",
    }
}

pub(crate) fn sort_by_deadline(programs: &mut [Program]) {
    programs.sort_by_key(|program| program.application_deadline);
}

fn sort_groups(mut groups: BTreeMap<String, Vec<Program>>) -> BTreeMap<String, Vec<Program>> {
    for members in groups.values_mut() {
        sort_by_deadline(members);
    }
    groups
}
