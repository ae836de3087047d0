//! Domain model for tracked program applications.
//!
//! # Responsibility
//! - Define the one canonical `Program` record every view projects from.
//! - Define the closed `Theme` enumeration and its fixed palette.
//!
//! # Invariants
//! - Every program is identified by a stable `ProgramId`.
//! - Presence-derived facts (`has_start_date`) are computed, never stored.

pub mod program;
pub mod theme;
