//! # quill-index
//!
//! Semantic search for quill.
//!
//! This crate provides:
//! - `SemanticIndex`: a position-addressed vector index over note documents
//! - `ReindexStrategy` / `FullRebuild`: the synchronization contract between
//!   the mutable note store and the index
//! - Ollama embedding backend (default)
//! - Deterministic mock backend (feature `mock`, for tests)
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use quill_index::{FullRebuild, OllamaBackend, ReindexStrategy, SemanticIndex};
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = Arc::new(OllamaBackend::from_env());
//!     let mut index = SemanticIndex::new(backend);
//!     FullRebuild.rebuild(&[], &mut index).await.unwrap();
//!     let hits = index.search("quantum computing", 5).await.unwrap();
//!     assert!(hits.is_empty());
//! }
//! ```

pub mod index;
pub mod sync;

#[cfg(feature = "ollama")]
pub mod ollama;

// Mock embedding backend for deterministic tests
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use quill_core::*;

pub use index::SemanticIndex;
pub use sync::{searchable_text, FullRebuild, ReindexStrategy};

#[cfg(feature = "ollama")]
pub use ollama::OllamaBackend;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbeddingBackend;
