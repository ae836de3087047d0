//! Repository layer: durable storage of the program collection.
//!
//! # Responsibility
//! - Define the key-value slot contract and its SQLite implementation.
//! - Isolate JSON encoding and SQL details from the store.
//!
//! # Invariants
//! - The collection is always written and read as one document.
//! - Repository APIs return semantic errors (`Encode`, `Decode`) in
//!   addition to DB transport errors.

pub mod program_repo;
