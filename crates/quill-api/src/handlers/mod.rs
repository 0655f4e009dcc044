//! HTTP request handlers.

pub mod notes;
pub mod search;
pub mod system;

pub use notes::{create_note, delete_note, list_notes, update_note};
pub use search::search_notes;
pub use system::health;
