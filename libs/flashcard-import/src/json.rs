//! JSON importer.
//!
//! # Accepted shapes
//! A bare array of cards:
//! ```json
//! [ { "question": "What is Rust?", "answer": "A systems language." } ]
//! ```
//! Or a full collection object:
//! ```json
//! { "title": "Rust", "source": "Book", "createdAt": "2024-01-01T00:00:00Z",
//!   "cards": [ { "id": "abc", "question": "...", "answer": "..." } ] }
//! ```
//!
//! Text is decoded into a `serde_json::Value` first and then checked
//! against these shapes, so each structural problem maps to its own error.

use crate::date::resolve_created_at;
use crate::error::{ImportError, Result};
use crate::importer::Importer;
use crate::title::derive_title;
use crate::types::{imported_source, Flashcard, FlashcardCollection};
use serde_json::{Map, Value};

/// Parse JSON text into a collection.
pub fn parse(text: &str, file_name: &str, importer: &Importer) -> Result<FlashcardCollection> {
    let data: Value = serde_json::from_str(text).map_err(ImportError::InvalidJson)?;

    let collection = match data {
        Value::Array(items) => parse_card_list(&items, file_name, importer)?,
        Value::Object(obj) => parse_collection_object(&obj, file_name, importer)?,
        _ => return Err(ImportError::UnsupportedFormat),
    };

    tracing::debug!(
        "Imported {} cards from JSON file {}",
        collection.cards.len(),
        file_name
    );
    Ok(collection)
}

fn parse_card_list(
    items: &[Value],
    file_name: &str,
    importer: &Importer,
) -> Result<FlashcardCollection> {
    let mut cards = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let obj = item.as_object().ok_or(ImportError::InvalidCard { index })?;
        let (question, answer) = card_fields(obj, index)?;
        cards.push(Flashcard {
            id: importer.next_id(),
            question,
            answer,
        });
    }

    if cards.is_empty() {
        return Err(ImportError::NoCardsFound);
    }

    Ok(FlashcardCollection {
        title: derive_title(file_name),
        source: imported_source(file_name),
        cards,
        created_at: importer.now(),
    })
}

fn parse_collection_object(
    obj: &Map<String, Value>,
    file_name: &str,
    importer: &Importer,
) -> Result<FlashcardCollection> {
    let entries = obj
        .get("cards")
        .and_then(Value::as_array)
        .ok_or(ImportError::MissingCards)?;

    let title = non_blank(obj.get("title"))
        .map(str::to_string)
        .unwrap_or_else(|| derive_title(file_name));

    let mut cards = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let card = entry
            .as_object()
            .ok_or(ImportError::InvalidCardFields { index })?;
        let (question, answer) = card_fields(card, index)?;
        let id = match card.get("id") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            _ => importer.next_id(),
        };
        cards.push(Flashcard { id, question, answer });
    }

    if cards.is_empty() {
        return Err(ImportError::NoCardsFound);
    }

    let created_at = resolve_created_at(
        obj.get("createdAt"),
        importer.now(),
        importer.options().date_policy,
    )?;

    let source = non_blank(obj.get("source"))
        .map(str::to_string)
        .unwrap_or_else(|| imported_source(file_name));

    Ok(FlashcardCollection {
        title,
        source,
        cards,
        created_at,
    })
}

fn card_fields(card: &Map<String, Value>, index: usize) -> Result<(String, String)> {
    match (card.get("question"), card.get("answer")) {
        (Some(Value::String(q)), Some(Value::String(a))) => Ok((q.clone(), a.clone())),
        _ => Err(ImportError::InvalidCardFields { index }),
    }
}

/// A string value that is not empty after trimming, returned untrimmed.
fn non_blank(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}
