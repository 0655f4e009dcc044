//! Mock embedding backend for deterministic testing.
//!
//! Embeds text as a normalized bag-of-tokens histogram: each whitespace
//! token is hashed into one dimension. Texts sharing tokens score high
//! cosine similarity, disjoint texts score near zero, and the same text
//! always produces the same vector. Exact vectors can also be pinned per
//! input with [`MockEmbeddingBackend::with_mapping`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use quill_core::{EmbeddingBackend, Error, Result, Vector};

/// Default dimension for mock vectors.
pub const MOCK_DIMENSION: usize = 256;

/// Deterministic embedding backend for tests.
#[derive(Clone)]
pub struct MockEmbeddingBackend {
    dimension: usize,
    mappings: HashMap<String, Vector>,
    fail: Arc<AtomicBool>,
    embed_calls: Arc<AtomicUsize>,
}

impl MockEmbeddingBackend {
    /// Create a new mock backend with the default dimension.
    pub fn new() -> Self {
        Self {
            dimension: MOCK_DIMENSION,
            mappings: HashMap::new(),
            fail: Arc::new(AtomicBool::new(false)),
            embed_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Set the embedding dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Pin an exact vector for a specific input text.
    pub fn with_mapping(mut self, text: impl Into<String>, vector: Vector) -> Self {
        self.mappings.insert(text.into(), vector);
        self
    }

    /// Make every embedding call fail, for error-path tests.
    pub fn with_failure(self) -> Self {
        self.fail.store(true, Ordering::SeqCst);
        self
    }

    /// Flip failure mode at runtime. Clones share the flag, so a handle kept
    /// by a test controls a backend already injected into the service.
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    /// Number of `embed_texts` calls made so far.
    pub fn embed_call_count(&self) -> usize {
        self.embed_calls.load(Ordering::SeqCst)
    }

    /// Deterministic token-histogram embedding for one text.
    fn embed_one(&self, text: &str) -> Vector {
        if let Some(vector) = self.mappings.get(text) {
            return vector.clone();
        }

        let mut vec = vec![0.0f32; self.dimension];
        for token in text.split_whitespace() {
            let token = token.to_lowercase();
            vec[fnv1a(token.as_bytes()) as usize % self.dimension] += 1.0;
        }

        let magnitude: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            vec.iter_mut().for_each(|x| *x /= magnitude);
        }
        Vector(vec)
    }
}

impl Default for MockEmbeddingBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// FNV-1a 64-bit hash.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for b in bytes {
        hash ^= u64::from(*b);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

#[async_trait]
impl EmbeddingBackend for MockEmbeddingBackend {
    async fn embed_texts(&self, texts: &[String]) -> Result<Vec<Vector>> {
        self.embed_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::Embedding("simulated failure".to_string()));
        }

        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        "mock-embed"
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(!self.fail.load(Ordering::SeqCst))
    }
}
