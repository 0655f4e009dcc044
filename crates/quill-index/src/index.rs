//! Position-addressed semantic index over note documents.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, instrument, warn};

use quill_core::{EmbeddingBackend, Error, Result, SearchHit, Vector};

/// Vector index over an ordered list of documents.
///
/// Each indexed document is associated with its 0-based position in the input
/// sequence. Position *i* is only meaningful against the note ordering the
/// index was last rebuilt from; callers must not mutate that ordering between
/// a rebuild and a search (the HTTP layer enforces this with one lock around
/// both structures).
pub struct SemanticIndex {
    backend: Arc<dyn EmbeddingBackend>,
    vectors: Vec<Vector>,
}

impl SemanticIndex {
    /// Create an empty index on top of the given embedding backend.
    pub fn new(backend: Arc<dyn EmbeddingBackend>) -> Self {
        Self {
            backend,
            vectors: Vec::new(),
        }
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Embedding model the index embeds with.
    pub fn model_name(&self) -> &str {
        self.backend.model_name()
    }

    /// Build or replace the index over the given documents.
    ///
    /// Any previous contents are discarded entirely, even on an empty input.
    #[instrument(skip(self, documents), fields(component = "semantic_index", op = "index", input_count = documents.len()))]
    pub async fn index(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            self.vectors.clear();
            return Ok(());
        }

        let start = Instant::now();
        let vectors = self.backend.embed_texts(documents).await?;
        if vectors.len() != documents.len() {
            return Err(Error::Embedding(format!(
                "backend returned {} vectors for {} documents",
                vectors.len(),
                documents.len()
            )));
        }
        self.vectors = vectors;

        debug!(
            result_count = self.vectors.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Index rebuilt"
        );
        Ok(())
    }

    /// Return up to `limit` documents most similar to `query`, best first.
    ///
    /// Each hit carries the position the document was indexed at and its
    /// cosine similarity score.
    #[instrument(skip(self, query), fields(component = "semantic_index", op = "search", limit))]
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        if self.vectors.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let start = Instant::now();
        let embedded = self.backend.embed_texts(&[query.to_string()]).await?;
        let query_vec = embedded
            .into_iter()
            .next()
            .ok_or_else(|| Error::Embedding("backend returned no vector for query".into()))?;

        let mut hits: Vec<SearchHit> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(position, vec)| SearchHit {
                position,
                score: query_vec.cosine_similarity(vec),
            })
            .collect();

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits.truncate(limit);

        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            result_count = hits.len(),
            duration_ms = elapsed,
            "Search complete"
        );
        if elapsed > 5000 {
            warn!(duration_ms = elapsed, slow = true, "Slow search operation");
        }
        Ok(hits)
    }
}
