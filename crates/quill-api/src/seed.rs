//! Demo notes the service starts with.
//!
//! The store is volatile, so every process start begins from this fixed set
//! of ten notes (ids 1 through 10).

use chrono::{DateTime, Utc};

use quill_core::Note;

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("seed timestamp is valid RFC 3339")
        .with_timezone(&Utc)
}

fn note(id: i64, title: &str, content: &str, tags: &[&str], created_at: &str) -> Note {
    let stamp = ts(created_at);
    Note {
        id,
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: stamp,
        updated_at: stamp,
    }
}

/// The ten seed notes, in id order.
pub fn demo_notes() -> Vec<Note> {
    vec![
        note(
            1,
            "Quantum Computing Breakthrough",
            "Recent developments in quantum computing have demonstrated significant advances in error correction algorithms. These breakthroughs could accelerate the commercialization of quantum technology and enhance computational speeds exponentially.",
            &["quantum computing", "technology", "breakthroughs", "error correction", "future tech"],
            "2024-09-18T09:00:00Z",
        ),
        note(
            2,
            "Morning Routine for Productivity",
            "Wake up at 6:00 AM, 20 minutes of meditation, 15 minutes of stretching, then a healthy breakfast. Follow this with a clear focus on the top three tasks of the day. Avoid distractions and focus on deep work sessions using the Pomodoro technique or uninterrupted work blocks.",
            &["productivity", "routines", "deep work", "morning habits"],
            "2024-09-18T07:30:00Z",
        ),
        note(
            3,
            "The Nature of Creativity in Software Development",
            "Creativity in software development stems from problem-solving in unique and unconventional ways. It’s not just about writing code; it’s about envisioning how the system interacts with users, anticipating future needs, and thinking holistically about performance, security, and scalability.",
            &["creativity", "software development", "problem-solving", "systems thinking"],
            "2024-09-18T08:00:00Z",
        ),
        note(
            4,
            "Kafka on the Shore - Themes",
            "Haruki Murakami's *Kafka on the Shore* explores the interplay between consciousness and the unconscious, memory, fate, and free will. The novel blurs the lines between reality and dream, encouraging the reader to contemplate the meaning of identity and destiny.",
            &["literature", "Murakami", "Kafka on the Shore", "philosophy", "identity", "fate"],
            "2024-09-18T06:45:00Z",
        ),
        note(
            5,
            "Essential Nutrients for Brain Health",
            "Omega-3 fatty acids, B vitamins, and antioxidants are critical for brain function. Foods rich in these nutrients include fatty fish, leafy greens, and berries. Regular consumption can improve cognitive function, memory, and overall brain health.",
            &["health", "nutrition", "brain health", "omega-3", "vitamins", "antioxidants"],
            "2024-09-18T05:00:00Z",
        ),
        note(
            6,
            "Machine Learning and Pattern Recognition",
            "The core of machine learning is the ability to recognize patterns in vast datasets. Algorithms such as neural networks, decision trees, and clustering models work together to identify trends, correlations, and anomalies, driving automation in industries from finance to healthcare.",
            &["machine learning", "AI", "pattern recognition", "automation", "neural networks"],
            "2024-09-18T06:15:00Z",
        ),
        note(
            7,
            "Climate Change and Ocean Acidification",
            "Ocean acidification is one of the most pressing yet often overlooked consequences of climate change. Increased CO2 levels cause a drop in pH, threatening marine ecosystems, particularly coral reefs.",
            &["climate change", "ocean acidification", "environment", "marine biology", "CO2"],
            "2024-09-18T08:30:00Z",
        ),
        note(
            8,
            "John’s Feedback on UI Design (Meeting 09/17)",
            "John mentioned that the UI feels too cluttered on mobile devices. He suggested simplifying the layout by reducing the number of elements visible on the main screen and focusing on a single call-to-action at a time.",
            &["UI design", "feedback", "mobile", "UX", "meeting notes"],
            "2024-09-18T10:15:00Z",
        ),
        note(
            9,
            "My Thoughts on Pantheism",
            "Pantheism resonates with me because it encapsulates a worldview where everything is interconnected. The universe, nature, and consciousness are all one entity. This perspective aligns with my belief in the inherent order of things, even when we can’t see it immediately.",
            &["philosophy", "pantheism", "spirituality", "worldview", "interconnectedness"],
            "2024-09-18T07:00:00Z",
        ),
        note(
            10,
            "Exploring Docker for DevOps Automation",
            "Docker containers simplify the deployment process by allowing developers to package applications with all dependencies in one environment. This automation reduces the time spent debugging platform-specific issues, streamlines development, and improves consistency across different environments.",
            &["DevOps", "Docker", "automation", "containers", "development"],
            "2024-09-18T09:30:00Z",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_notes_ids_are_one_through_ten() {
        let notes = demo_notes();
        assert_eq!(notes.len(), 10);
        let ids: Vec<i64> = notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
    }

    #[test]
    fn test_demo_notes_timestamps_match_creation() {
        for note in demo_notes() {
            assert_eq!(note.created_at, note.updated_at);
        }
    }

    #[test]
    fn test_demo_notes_have_content_and_tags() {
        for note in demo_notes() {
            assert!(!note.title.is_empty());
            assert!(!note.content.is_empty());
            assert!(!note.tags.is_empty());
        }
    }
}
