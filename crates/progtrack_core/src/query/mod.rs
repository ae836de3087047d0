//! Pure projections over program snapshots.
//!
//! # Responsibility
//! - Derive the grouped, sorted and summarized shapes each view renders.
//! - Lay out calendar grids and plain-text exports.
//!
//! # Invariants
//! - Functions never mutate their input and have no side effects.
//! - Dates are compared as calendar dates only.
//! - An empty snapshot yields empty results, never a panic.

pub mod calendar;
pub mod export;
pub mod grouping;
pub mod stats;
