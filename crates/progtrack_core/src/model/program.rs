//! Program domain model.
//!
//! # Responsibility
//! - Define the canonical tracked-application record.
//! - Define the user-editable draft shape used by create/update paths.
//! - Expose presence-derived read-only properties.
//!
//! # Invariants
//! - `id` is stable and never reused for another program.
//! - `name` is non-blank for every stored program.
//! - `start_date`/`end_date` of `None` means "not specified", never a date.

use super::theme::Theme;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use url::Url;
use uuid::Uuid;

/// Stable identifier for a tracked program.
pub type ProgramId = Uuid;

/// Validation failures for program records and drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramValidationError {
    /// `name` is empty or whitespace only.
    BlankName,
    /// `id` is the nil UUID.
    NilId,
}

impl Display for ProgramValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "program name cannot be blank"),
            Self::NilId => write!(f, "program id cannot be nil"),
        }
    }
}

impl Error for ProgramValidationError {}

/// Canonical record for one tracked application/opportunity.
///
/// Serialized with camelCase field names; optional dates are written as
/// explicit `null` and dates use ISO-8601 `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: ProgramId,
    pub name: String,
    /// Insertion order, duplicates allowed.
    pub requirements: Vec<String>,
    pub application_deadline: NaiveDate,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub country: String,
    /// Meaningful only when `is_virtual == false`.
    pub city: String,
    pub is_virtual: bool,
    pub theme: Theme,
    /// Free text; may be empty or not a valid URL.
    pub website: String,
    pub is_starred: bool,
    /// Older stored data has no tags; those load as empty.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Program {
    /// Builds a new unstarred program with a generated stable ID.
    pub fn new(draft: ProgramDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Builds an unstarred program with a caller-provided ID.
    ///
    /// Used by the upsert path where the caller already owns an identity.
    pub fn with_id(id: ProgramId, draft: ProgramDraft) -> Self {
        Self {
            id,
            name: draft.name,
            requirements: draft.requirements,
            application_deadline: draft.application_deadline,
            start_date: draft.start_date,
            end_date: draft.end_date,
            country: draft.country,
            city: draft.city,
            is_virtual: draft.is_virtual,
            theme: draft.theme,
            website: draft.website,
            is_starred: false,
            tags: draft.tags,
        }
    }

    /// Replaces every user-editable field, keeping `id` and `is_starred`.
    pub fn apply_draft(&mut self, draft: ProgramDraft) {
        let id = self.id;
        let is_starred = self.is_starred;
        *self = Self::with_id(id, draft);
        self.is_starred = is_starred;
    }

    /// Validates record-level invariants.
    pub fn validate(&self) -> Result<(), ProgramValidationError> {
        if self.id.is_nil() {
            return Err(ProgramValidationError::NilId);
        }
        validate_name(&self.name)
    }

    pub fn has_start_date(&self) -> bool {
        self.start_date.is_some()
    }

    pub fn has_end_date(&self) -> bool {
        self.end_date.is_some()
    }

    /// Display location: `"Virtual"` for virtual programs, otherwise the city.
    pub fn location_label(&self) -> &str {
        if self.is_virtual {
            "Virtual"
        } else {
            self.city.as_str()
        }
    }

    /// Parses `website` leniently.
    ///
    /// Returns `None` for empty or malformed values. A bare host such as
    /// `example.org` is retried with an `https://` prefix.
    pub fn website_url(&self) -> Option<Url> {
        let trimmed = self.website.trim();
        if trimmed.is_empty() {
            return None;
        }
        match Url::parse(trimmed) {
            Ok(url) if url.has_host() => Some(url),
            Ok(_) => None,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Url::parse(&format!("https://{trimmed}"))
                    .ok()
                    .filter(|url| url.has_host())
            }
            Err(_) => None,
        }
    }
}

/// User-editable program fields used by add/update.
///
/// Everything except `id` and `is_starred`, which the store owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramDraft {
    pub name: String,
    pub requirements: Vec<String>,
    pub application_deadline: NaiveDate,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub country: String,
    pub city: String,
    pub is_virtual: bool,
    pub theme: Theme,
    pub website: String,
    pub tags: Vec<String>,
}

impl ProgramDraft {
    /// Creates a draft with empty location/website and the default theme.
    pub fn new(name: impl Into<String>, application_deadline: NaiveDate) -> Self {
        Self {
            name: name.into(),
            requirements: Vec::new(),
            application_deadline,
            start_date: None,
            end_date: None,
            country: String::new(),
            city: String::new(),
            is_virtual: false,
            theme: Theme::default(),
            website: String::new(),
            tags: Vec::new(),
        }
    }

    /// Draft carrying the editable fields of an existing program.
    pub fn from_program(program: &Program) -> Self {
        Self {
            name: program.name.clone(),
            requirements: program.requirements.clone(),
            application_deadline: program.application_deadline,
            start_date: program.start_date,
            end_date: program.end_date,
            country: program.country.clone(),
            city: program.city.clone(),
            is_virtual: program.is_virtual,
            theme: program.theme,
            website: program.website.clone(),
            tags: program.tags.clone(),
        }
    }

    pub fn location(mut self, country: impl Into<String>, city: impl Into<String>) -> Self {
        self.country = country.into();
        self.city = city.into();
        self
    }

    pub fn virtual_program(mut self, is_virtual: bool) -> Self {
        self.is_virtual = is_virtual;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn period(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    pub fn requirements<I, S>(mut self, requirements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requirements = requirements.into_iter().map(Into::into).collect();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one requirement. Blank text is ignored.
    ///
    /// Returns whether the requirement was added.
    pub fn add_requirement(&mut self, requirement: impl Into<String>) -> bool {
        let requirement = requirement.into();
        if requirement.trim().is_empty() {
            return false;
        }
        self.requirements.push(requirement);
        true
    }

    /// Removes every requirement equal to `requirement`.
    pub fn remove_requirement(&mut self, requirement: &str) {
        self.requirements.retain(|existing| existing != requirement);
    }

    pub fn validate(&self) -> Result<(), ProgramValidationError> {
        validate_name(&self.name)
    }
}

fn validate_name(name: &str) -> Result<(), ProgramValidationError> {
    if name.trim().is_empty() {
        return Err(ProgramValidationError::BlankName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Program, ProgramDraft, ProgramValidationError};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_requirement_ignores_blank_text() {
        let mut draft = ProgramDraft::new("x", date(2026, 1, 1));
        assert!(!draft.add_requirement("   "));
        assert!(draft.add_requirement("Transcript"));
        assert!(draft.add_requirement("Transcript"));
        assert_eq!(draft.requirements, vec!["Transcript", "Transcript"]);
    }

    #[test]
    fn remove_requirement_drops_every_equal_entry() {
        let mut draft =
            ProgramDraft::new("x", date(2026, 1, 1)).requirements(["CV", "Essay", "CV"]);
        draft.remove_requirement("CV");
        assert_eq!(draft.requirements, vec!["Essay"]);
    }

    #[test]
    fn blank_name_fails_validation() {
        let draft = ProgramDraft::new(" \t", date(2026, 1, 1));
        assert_eq!(draft.validate(), Err(ProgramValidationError::BlankName));
    }

    #[test]
    fn apply_draft_keeps_identity_and_star() {
        let mut program = Program::new(ProgramDraft::new("old", date(2026, 1, 1)));
        program.is_starred = true;
        let id = program.id;

        program.apply_draft(ProgramDraft::new("new", date(2026, 2, 1)));
        assert_eq!(program.id, id);
        assert!(program.is_starred);
        assert_eq!(program.name, "new");
        assert_eq!(program.application_deadline, date(2026, 2, 1));
    }

    #[test]
    fn website_url_tolerates_malformed_values() {
        let mut program = Program::new(ProgramDraft::new("x", date(2026, 1, 1)));
        assert!(program.website_url().is_none());

        program.website = "http://exa mple.com".to_string();
        assert!(program.website_url().is_none());

        program.website = "example.org/apply".to_string();
        let url = program.website_url().expect("bare host should be accepted");
        assert_eq!(url.host_str(), Some("example.org"));

        program.website = "https://mit.edu/summer".to_string();
        assert_eq!(
            program.website_url().map(|url| url.to_string()).as_deref(),
            Some("https://mit.edu/summer")
        );
    }

    #[test]
    fn location_label_prefers_virtual() {
        let mut program = Program::new(
            ProgramDraft::new("x", date(2026, 1, 1)).location("Japan", "Tokyo"),
        );
        assert_eq!(program.location_label(), "Tokyo");
        program.is_virtual = true;
        assert_eq!(program.location_label(), "Virtual");
    }
}
