//! Synchronization between the note store and the semantic index.
//!
//! The contract: after every successful store mutation, the index is rebuilt
//! from the full current note list before the HTTP response is produced, so
//! index position *i* always corresponds to store position *i* when a search
//! runs.
//!
//! Rebuild re-embeds O(n) documents per single mutation. That is the
//! system's principal scalability limit and is acceptable only at demo
//! scale; the strategy trait exists so an incremental implementation can be
//! substituted without touching the HTTP contract.

use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, instrument};

use quill_core::{defaults::DOCUMENT_SEPARATOR, Note, Result};

use crate::index::SemanticIndex;

/// Flatten a note into the single text document the index embeds.
///
/// Title, content, and the space-joined tags, separated by single spaces.
pub fn searchable_text(note: &Note) -> String {
    [
        note.title.as_str(),
        note.content.as_str(),
        &note.tags.join(" "),
    ]
    .join(DOCUMENT_SEPARATOR)
}

/// Strategy for bringing the index in line with the current note list.
#[async_trait]
pub trait ReindexStrategy: Send + Sync {
    /// Make `index` consistent with `notes`, position for position.
    async fn rebuild(&self, notes: &[Note], index: &mut SemanticIndex) -> Result<()>;
}

/// Full rebuild: re-embed every note and replace the index contents
/// entirely. No diffing, no incremental update.
pub struct FullRebuild;

#[async_trait]
impl ReindexStrategy for FullRebuild {
    #[instrument(skip_all, fields(component = "reindex", op = "rebuild", input_count = notes.len()))]
    async fn rebuild(&self, notes: &[Note], index: &mut SemanticIndex) -> Result<()> {
        let start = Instant::now();
        let documents: Vec<String> = notes.iter().map(searchable_text).collect();
        index.index(&documents).await?;
        debug!(
            duration_ms = start.elapsed().as_millis() as u64,
            "Rebuild complete"
        );
        Ok(())
    }
}
