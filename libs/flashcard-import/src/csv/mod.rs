//! CSV importer.
//!
//! # Format
//! ```text
//! Question,Answer
//! What is Rust?,A systems programming language.
//! "Comma, inside","Say ""hi"""
//! ```
//! The first two header columns must be `question` and `answer` (any case).
//! Extra columns are ignored. Rows missing either value are skipped.

pub mod lines;
pub mod row;

use crate::error::{ImportError, Result};
use crate::importer::Importer;
use crate::title::derive_title;
use crate::types::{imported_source, Flashcard, FlashcardCollection};

pub use lines::{normalize_line_endings, split_lines};
pub use row::{parse_row, Row};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse CSV text into a collection.
pub fn parse(text: &str, file_name: &str, importer: &Importer) -> Result<FlashcardCollection> {
    let normalized = normalize_line_endings(text);
    let lines: Vec<String> = split_lines(&normalized)
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let (header_line, records) = lines.split_first().ok_or(ImportError::EmptyCsv)?;
    check_header(header_line)?;

    let mut cards = Vec::new();
    for (idx, line) in records.iter().enumerate() {
        let row = parse_row(line);
        let (question, answer) = (row.get(0), row.get(1));
        if question.is_empty() || answer.is_empty() {
            tracing::debug!(
                "Skipping CSV record {} in {}: missing question or answer",
                idx + 1,
                file_name
            );
            continue;
        }
        cards.push(Flashcard {
            id: importer.next_id(),
            question: question.to_string(),
            answer: answer.to_string(),
        });
    }

    if cards.is_empty() {
        return Err(ImportError::NoCardsFound);
    }

    tracing::debug!("Imported {} cards from CSV file {}", cards.len(), file_name);

    Ok(FlashcardCollection {
        title: derive_title(file_name),
        source: imported_source(file_name),
        cards,
        created_at: importer.now(),
    })
}

fn check_header(line: &str) -> Result<()> {
    let header = parse_row(line.trim_start().trim_start_matches(BYTE_ORDER_MARK));
    let columns: Vec<String> = header
        .fields()
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let cell = if i == 0 {
                cell.trim_start_matches(BYTE_ORDER_MARK)
            } else {
                cell.as_str()
            };
            cell.to_lowercase()
        })
        .collect();

    match columns.as_slice() {
        [question, answer, ..] if question == "question" && answer == "answer" => Ok(()),
        _ => Err(ImportError::InvalidHeaders),
    }
}
