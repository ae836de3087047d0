//! Core use-case services.
//!
//! # Responsibility
//! - Own the authoritative program collection and its mutation intents.
//! - Keep presentation code decoupled from storage details.

pub mod program_store;
