//! Core types for imported flashcards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// An imported set of cards with its metadata.
///
/// Serializes to the same object shape the JSON importer accepts, so an
/// exported collection can be imported again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardCollection {
    pub title: String,
    pub source: String,
    pub cards: Vec<Flashcard>,
    pub created_at: DateTime<Utc>,
}

impl FlashcardCollection {
    /// Number of cards in the collection.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for collections produced by an importer.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Provenance label for a collection read from `file_name`.
pub(crate) fn imported_source(file_name: &str) -> String {
    format!("Imported: {}", file_name)
}
