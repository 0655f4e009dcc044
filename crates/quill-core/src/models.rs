//! Core data models for quill.
//!
//! These types are shared across all quill crates and represent the
//! note domain entities plus the vector types the search index works in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// NOTE TYPES
// =============================================================================

/// Note identifier. Monotonically assigned as `max(existing) + 1`.
pub type NoteId = i64;

/// A note as stored and returned by the API.
///
/// Timestamps serialize as RFC 3339 with a `Z` suffix (UTC).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Candidate note fields as posted to the write endpoints.
///
/// Every field defaults when absent: the store accepts whatever the client
/// sends and an update is a full overwrite, so omitted fields come out empty
/// on the stored note. Unknown fields in the body are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

// =============================================================================
// VECTOR TYPES
// =============================================================================

/// A dense embedding vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector(pub Vec<f32>);

impl Vector {
    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cosine similarity against another vector.
    ///
    /// Returns 0.0 when either vector has zero magnitude.
    pub fn cosine_similarity(&self, other: &Vector) -> f32 {
        let dot: f32 = self.0.iter().zip(other.0.iter()).map(|(x, y)| x * y).sum();
        let mag_a: f32 = self.0.iter().map(|x| x * x).sum::<f32>().sqrt();
        let mag_b: f32 = other.0.iter().map(|x| x * x).sum::<f32>().sqrt();

        if mag_a > 0.0 && mag_b > 0.0 {
            dot / (mag_a * mag_b)
        } else {
            0.0
        }
    }
}

impl From<Vec<f32>> for Vector {
    fn from(v: Vec<f32>) -> Self {
        Vector(v)
    }
}

impl AsRef<[f32]> for Vector {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

// =============================================================================
// SEARCH TYPES
// =============================================================================

/// A single ranked hit from the semantic index.
///
/// `position` is the 0-based position the document was indexed at, which
/// corresponds to the note store's ordering as of the last rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub position: usize,
    pub score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_note() -> Note {
        let ts = DateTime::parse_from_rfc3339("2024-09-18T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Note {
            id: 1,
            title: "Quantum Computing Breakthrough".to_string(),
            content: "Recent developments in quantum computing.".to_string(),
            tags: vec!["quantum computing".to_string(), "technology".to_string()],
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_note_serializes_timestamps_with_z_suffix() {
        let json = serde_json::to_value(sample_note()).unwrap();
        let created = json["created_at"].as_str().unwrap();
        let updated = json["updated_at"].as_str().unwrap();
        assert!(created.ends_with('Z'), "got {}", created);
        assert!(updated.ends_with('Z'), "got {}", updated);
        assert_eq!(created, "2024-09-18T09:00:00Z");
    }

    #[test]
    fn test_note_round_trip() {
        let note = sample_note();
        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note, back);
    }

    #[test]
    fn test_draft_defaults_when_fields_absent() {
        let draft: NoteDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(draft.title, "");
        assert_eq!(draft.content, "");
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_draft_ignores_unknown_fields() {
        let draft: NoteDraft =
            serde_json::from_str(r#"{"title":"X","id":999,"starred":true}"#).unwrap();
        assert_eq!(draft.title, "X");
    }

    #[test]
    fn test_cosine_similarity_orthogonal_and_parallel() {
        let a = Vector(vec![1.0, 0.0]);
        let b = Vector(vec![1.0, 0.0]);
        let c = Vector(vec![0.0, 1.0]);

        assert!((a.cosine_similarity(&b) - 1.0).abs() < 0.001);
        assert!(a.cosine_similarity(&c).abs() < 0.001);
    }

    #[test]
    fn test_cosine_similarity_zero_vector() {
        let a = Vector(vec![0.0, 0.0]);
        let b = Vector(vec![1.0, 2.0]);
        assert_eq!(a.cosine_similarity(&b), 0.0);
    }

    #[test]
    fn test_vector_from_vec() {
        let v: Vector = vec![0.5, 0.25].into();
        assert_eq!(v.len(), 2);
        assert!(!v.is_empty());
    }
}
