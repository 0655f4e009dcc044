//! # quill-store
//!
//! The in-memory note store: an ordered, mutable collection of notes with
//! no persistence. All state is lost on process exit.
//!
//! The store is plain synchronous data-structure code. Callers own the
//! locking discipline; the HTTP layer wraps one store and one search index
//! behind a single `RwLock` so that mutation plus re-index execute
//! atomically relative to searches.

use chrono::Utc;
use tracing::debug;

use quill_core::{Error, Note, NoteDraft, NoteId, Result};

/// Ordered, in-memory collection of notes.
///
/// Ordering is insertion order; the search index relies on position *i* of
/// this ordering matching position *i* of its document list.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Create a store pre-populated with the given notes, preserving order.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// The full ordered sequence of notes. No filtering, no pagination.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Next id to assign: `max(existing) + 1`, or 1 when the store is empty.
    fn next_id(&self) -> NoteId {
        self.notes.iter().map(|n| n.id).max().unwrap_or(0) + 1
    }

    /// Add a note from the given draft.
    ///
    /// Assigns the id, stamps `created_at` and `updated_at` with the current
    /// UTC time, appends to the end of the ordering, and returns the stored
    /// note.
    pub fn add(&mut self, draft: NoteDraft) -> Note {
        let now = Utc::now();
        let note = Note {
            id: self.next_id(),
            title: draft.title,
            content: draft.content,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        };
        debug!(note_id = note.id, "note added");
        self.notes.push(note.clone());
        note
    }

    /// Overwrite the note with the given id from the draft.
    ///
    /// This is a full replacement, not a merge: fields omitted in the draft
    /// come out empty. The id and `created_at` are forced to their original
    /// values; `updated_at` is stamped with the current UTC time.
    pub fn update(&mut self, id: NoteId, draft: NoteDraft) -> Result<Note> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(Error::NoteNotFound(id))?;

        note.title = draft.title;
        note.content = draft.content;
        note.tags = draft.tags;
        note.updated_at = Utc::now();
        debug!(note_id = id, "note updated");
        Ok(note.clone())
    }

    /// Remove the note with the given id and return it.
    pub fn delete(&mut self, id: NoteId) -> Result<Note> {
        let pos = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(Error::NoteNotFound(id))?;
        let note = self.notes.remove(pos);
        debug!(note_id = id, "note deleted");
        Ok(note)
    }
}
