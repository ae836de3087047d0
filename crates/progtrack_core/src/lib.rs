//! Core domain logic for the program application tracker.
//! This crate is the single source of truth for record invariants, the
//! persisted collection and every derived view.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::program::{Program, ProgramDraft, ProgramId, ProgramValidationError};
pub use model::theme::{Theme, ThemeColor, UnknownTheme};
pub use query::calendar::{
    calendar_cells, days_in_month, month_label, programs_on_day, year_calendar, MonthGrid,
};
pub use query::export::{
    display_date, format_all_for_export, format_for_export, requirements_preview,
    RequirementsPreview,
};
pub use query::grouping::{
    countries, country_flag, group_by_country, group_by_month, group_by_tag, group_by_theme,
    sorted_by_deadline, MonthGroup, ThemeGroup,
};
pub use query::stats::{starred, summary_stats, upcoming, SummaryStats};
pub use repo::program_repo::{
    MemoryProgramSlot, ProgramPersistence, ProgramSlot, RepoError, RepoResult,
    SqliteProgramSlot, PROGRAMS_SLOT_KEY,
};
pub use service::program_store::{ProgramStore, Upserted};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
