//! Program collection persistence over a single key-value slot.
//!
//! # Responsibility
//! - Serialize the full program collection into one slot and read it back.
//! - Keep SQL and JSON details inside the persistence boundary.
//! - Apply the write-skip-on-error and empty-on-corruption policies.
//!
//! # Invariants
//! - A save writes the whole collection or nothing.
//! - A read returns every decoded record; only later repeats of an id are
//!   dropped so the in-memory collection keeps ids unique.
//! - `load()` reports absence only for a missing or undecodable slot.
//! - No user text is ever written to logs.

use crate::db::DbError;
use crate::model::program::Program;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key of the slot holding the serialized program array.
pub const PROGRAMS_SLOT_KEY: &str = "programs";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for slot IO and collection encoding.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Collection could not be serialized.
    Encode(serde_json::Error),
    /// Stored bytes are not a program array.
    Decode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode programs: {err}"),
            Self::Decode(err) => write!(f, "failed to decode stored programs: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) | Self::Decode(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable key-value slot storing one serialized document per key.
pub trait ProgramSlot {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>>;
    /// Replaces the slot value atomically.
    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed slot using the `kv_slots` table.
pub struct SqliteProgramSlot<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProgramSlot<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProgramSlot for SqliteProgramSlot<'_> {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local slot. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryProgramSlot {
    entries: RefCell<Vec<(String, String)>>,
}

impl MemoryProgramSlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgramSlot for MemoryProgramSlot {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self
            .entries
            .borrow()
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.clone()))
    }

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        let mut entries = self.entries.borrow_mut();
        match entries.iter_mut().find(|(existing, _)| existing == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => entries.push((key.to_string(), value.to_string())),
        }
        Ok(())
    }
}

/// Full-collection persistence adapter over a [`ProgramSlot`].
pub struct ProgramPersistence<S: ProgramSlot> {
    slot: S,
}

impl<S: ProgramSlot> ProgramPersistence<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Returns the underlying slot.
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Serializes and stores the full collection, surfacing failures.
    ///
    /// Encoding happens before any write, so an encode failure leaves the
    /// stored slot untouched.
    pub fn try_save(&self, programs: &[Program]) -> RepoResult<()> {
        let encoded = serde_json::to_string(programs).map_err(RepoError::Encode)?;
        self.slot.write_slot(PROGRAMS_SLOT_KEY, &encoded)?;
        debug!(
            "event=programs_save module=repo status=ok count={} bytes={}",
            programs.len(),
            encoded.len()
        );
        Ok(())
    }

    /// Reads the stored collection, surfacing failures.
    ///
    /// A missing slot is not an error and yields an empty collection.
    /// Records are returned as stored, except that a repeated id keeps only
    /// its first occurrence.
    pub fn try_load(&self) -> RepoResult<Vec<Program>> {
        let Some(raw) = self.slot.read_slot(PROGRAMS_SLOT_KEY)? else {
            return Ok(Vec::new());
        };
        let programs: Vec<Program> = serde_json::from_str(&raw).map_err(RepoError::Decode)?;
        Ok(drop_repeated_ids(programs))
    }

    /// Stores the full collection, swallowing failures.
    ///
    /// On failure the previously stored value is kept and a `warn` event is
    /// logged; nothing propagates to the caller.
    pub fn save(&self, programs: &[Program]) {
        if let Err(err) = self.try_save(programs) {
            warn!(
                "event=programs_save module=repo status=skipped count={} error={}",
                programs.len(),
                err
            );
        }
    }

    /// Reads the stored collection, treating any failure as "no data".
    pub fn load(&self) -> Vec<Program> {
        match self.try_load() {
            Ok(programs) => programs,
            Err(err) => {
                warn!("event=programs_load module=repo status=fallback_empty error={err}");
                Vec::new()
            }
        }
    }
}

fn drop_repeated_ids(programs: Vec<Program>) -> Vec<Program> {
    let stored = programs.len();
    let mut seen = HashSet::with_capacity(stored);
    let kept = programs
        .into_iter()
        .filter(|program| seen.insert(program.id))
        .collect::<Vec<_>>();
    if kept.len() != stored {
        warn!(
            "event=programs_load module=repo status=deduped stored={} kept={}",
            stored,
            kept.len()
        );
    }
    kept
}
