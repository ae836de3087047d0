//! Authoritative in-memory program store.
//!
//! # Responsibility
//! - Own the single program collection for the process.
//! - Provide the add/update/remove/star intents used by presentation code.
//! - Persist the full collection after every mutation.
//!
//! # Invariants
//! - Program IDs are unique across the collection at all times.
//! - Blank-name drafts never mutate state and never trigger a write.
//! - Every other mutation call, including not-found no-ops, is followed by
//!   one synchronous full-collection save.
//! - Callers only ever receive owned copies, never references into the
//!   collection.

use crate::model::program::{Program, ProgramDraft, ProgramId};
use crate::repo::program_repo::{ProgramPersistence, ProgramSlot};
use log::{info, warn};

/// Outcome of [`ProgramStore::upsert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upserted {
    /// An existing record was replaced in place.
    Updated(Program),
    /// No record had the ID; a new one was appended under it.
    Inserted(Program),
}

impl Upserted {
    pub fn program(&self) -> &Program {
        match self {
            Self::Updated(program) | Self::Inserted(program) => program,
        }
    }

    pub fn into_program(self) -> Program {
        match self {
            Self::Updated(program) | Self::Inserted(program) => program,
        }
    }
}

/// Single-writer program store backed by a persistence adapter.
pub struct ProgramStore<S: ProgramSlot> {
    persistence: ProgramPersistence<S>,
    programs: Vec<Program>,
}

impl<S: ProgramSlot> ProgramStore<S> {
    /// Loads the persisted collection and takes ownership of it.
    ///
    /// Missing or unreadable data opens an empty store.
    pub fn open(persistence: ProgramPersistence<S>) -> Self {
        let programs = persistence.load();
        info!(
            "event=store_open module=store status=ok count={}",
            programs.len()
        );
        Self {
            persistence,
            programs,
        }
    }

    /// Creates a program with a fresh ID and appends it.
    ///
    /// Returns `None` without mutating or persisting when the name is blank.
    pub fn add(&mut self, draft: ProgramDraft) -> Option<Program> {
        if let Err(err) = draft.validate() {
            info!("event=program_add module=store status=skipped reason={err}");
            return None;
        }

        let program = Program::new(draft);
        self.programs.push(program.clone());
        info!(
            "event=program_add module=store status=ok id={} total={}",
            program.id,
            self.programs.len()
        );
        self.persist();
        Some(program)
    }

    /// Replaces the program with `id`, or appends a new one under `id` when
    /// no such program exists.
    ///
    /// Replacement keeps position, ID and star state. Returns `None` without
    /// mutating or persisting when the name is blank or `id` is nil.
    pub fn upsert(&mut self, id: ProgramId, draft: ProgramDraft) -> Option<Upserted> {
        if let Err(err) = draft.validate() {
            info!("event=program_upsert module=store status=skipped id={id} reason={err}");
            return None;
        }
        if id.is_nil() {
            warn!("event=program_upsert module=store status=skipped reason=nil_id");
            return None;
        }

        let outcome = match self.programs.iter_mut().find(|program| program.id == id) {
            Some(existing) => {
                existing.apply_draft(draft);
                Upserted::Updated(existing.clone())
            }
            None => {
                let program = Program::with_id(id, draft);
                self.programs.push(program.clone());
                Upserted::Inserted(program)
            }
        };
        info!(
            "event=program_upsert module=store status=ok id={} mode={} total={}",
            id,
            match outcome {
                Upserted::Updated(_) => "update",
                Upserted::Inserted(_) => "insert",
            },
            self.programs.len()
        );
        self.persist();
        Some(outcome)
    }

    /// Edits the program with `id`; an unknown `id` falls back to insert.
    ///
    /// See [`ProgramStore::upsert`] for the full contract.
    pub fn update(&mut self, id: ProgramId, draft: ProgramDraft) -> Option<Program> {
        self.upsert(id, draft).map(Upserted::into_program)
    }

    /// Removes the program with `id`. Unknown IDs are a no-op.
    ///
    /// Returns whether a program was removed. Persists either way.
    pub fn remove(&mut self, id: ProgramId) -> bool {
        let before = self.programs.len();
        self.programs.retain(|program| program.id != id);
        let removed = self.programs.len() != before;
        info!(
            "event=program_remove module=store status={} id={} total={}",
            if removed { "ok" } else { "not_found" },
            id,
            self.programs.len()
        );
        self.persist();
        removed
    }

    /// Flips `is_starred` on the program with `id`. Unknown IDs are a no-op.
    ///
    /// Returns the new star state, or `None` when not found. Persists either
    /// way.
    pub fn toggle_star(&mut self, id: ProgramId) -> Option<bool> {
        let starred = self
            .programs
            .iter_mut()
            .find(|program| program.id == id)
            .map(|program| {
                program.is_starred = !program.is_starred;
                program.is_starred
            });
        match starred {
            Some(value) => {
                info!("event=program_star module=store status=ok id={id} starred={value}")
            }
            None => info!("event=program_star module=store status=not_found id={id}"),
        }
        self.persist();
        starred
    }

    /// Owned copy of the collection in insertion order.
    pub fn snapshot(&self) -> Vec<Program> {
        self.programs.clone()
    }

    pub fn get(&self, id: ProgramId) -> Option<Program> {
        self.programs.iter().find(|program| program.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn persistence(&self) -> &ProgramPersistence<S> {
        &self.persistence
    }

    fn persist(&self) {
        self.persistence.save(&self.programs);
    }
}
