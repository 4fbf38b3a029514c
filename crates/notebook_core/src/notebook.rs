//! In-memory notebook of memos.
//!
//! # Responsibility
//! - Own the ordered note collection and assign ids on creation.
//! - Provide lookup, search and in-place memo/tag updates by id.
//!
//! # Invariants
//! - Notes keep insertion order; nothing is ever removed.
//! - Updating an unknown id is a silent no-op, never an error.
//! - Log events carry ids and counts only, never memo or tag text.

use crate::model::ids::{IdAllocator, NoteId};
use crate::model::note::Note;
use log::{debug, info};
use std::sync::Arc;

/// Ordered collection of notes sharing one id sequence.
#[derive(Debug)]
pub struct Notebook {
    notes: Vec<Note>,
    ids: Arc<IdAllocator>,
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Notebook {
    /// Creates an empty notebook on the process-wide id sequence.
    pub fn new() -> Self {
        Self::with_allocator(IdAllocator::global())
    }

    /// Creates an empty notebook drawing ids from `ids`.
    ///
    /// Notebooks built from clones of the same `Arc` never hand out the same
    /// id twice.
    pub fn with_allocator(ids: Arc<IdAllocator>) -> Self {
        Self {
            notes: Vec::new(),
            ids,
        }
    }

    /// Creates a note and appends it. Returns the new note's id.
    pub fn new_note(&mut self, memo: impl Into<String>, tags: impl Into<String>) -> NoteId {
        let note = Note::new(&self.ids, memo, tags);
        let id = note.id();
        self.notes.push(note);
        info!(
            "event=note_created module=notebook status=ok note_id={} total={}",
            id,
            self.notes.len()
        );
        id
    }

    /// Replaces the memo of note `note_id`.
    ///
    /// Returns `false` and changes nothing when no such note exists.
    pub fn modify_memo(&mut self, note_id: NoteId, memo: impl Into<String>) -> bool {
        match self.lookup_mut(note_id) {
            Some(note) => {
                note.set_memo(memo.into());
                log_modified(note_id, "memo");
                true
            }
            None => {
                log_skipped(note_id, "memo");
                false
            }
        }
    }

    /// Replaces the tags of note `note_id`.
    ///
    /// Returns `false` and changes nothing when no such note exists.
    pub fn modify_tags(&mut self, note_id: NoteId, tags: impl Into<String>) -> bool {
        match self.lookup_mut(note_id) {
            Some(note) => {
                note.set_tags(tags.into());
                log_modified(note_id, "tags");
                true
            }
            None => {
                log_skipped(note_id, "tags");
                false
            }
        }
    }

    /// Returns every note matching `filter`, in insertion order.
    pub fn search(&self, filter: &str) -> Vec<&Note> {
        let hits = self
            .notes
            .iter()
            .filter(|note| note.match_filter(filter))
            .collect::<Vec<_>>();
        debug!(
            "event=notes_searched module=notebook status=ok filter_len={} hits={}",
            filter.chars().count(),
            hits.len()
        );
        hits
    }

    /// Finds the first note with `note_id` by linear scan.
    pub fn lookup(&self, note_id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == note_id)
    }

    pub(crate) fn lookup_mut(&mut self, note_id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id() == note_id)
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

fn log_modified(note_id: NoteId, field: &str) {
    info!(
        "event=note_modified module=notebook status=ok note_id={} field={}",
        note_id, field
    );
}

fn log_skipped(note_id: NoteId, field: &str) {
    debug!(
        "event=note_modify_skipped module=notebook status=not_found note_id={} field={}",
        note_id, field
    );
}
