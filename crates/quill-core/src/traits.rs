//! Core traits for quill abstractions.
//!
//! These traits define the seams where concrete implementations plug in,
//! enabling pluggable backends and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Vector;

/// Backend for generating text embeddings.
///
/// The search index consumes exactly this surface; any embedding service
/// (local Ollama, an OpenAI-compatible endpoint, a deterministic test stub)
/// can stand behind it.
#[async_trait]
pub trait EmbeddingBackend: Send + Sync {
    /// Generate embeddings for the given texts.
    ///
    /// Returns one embedding vector per input text, in input order.
    async fn embed_texts(&self, texts: &[String]) -> Result<Vec<Vector>>;

    /// Expected dimension of embedding vectors.
    fn dimension(&self) -> usize;

    /// Model name being used.
    fn model_name(&self) -> &str;

    /// Check whether the backend is available and responding.
    async fn health_check(&self) -> Result<bool>;
}
