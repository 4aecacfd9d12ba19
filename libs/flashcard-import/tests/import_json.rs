//! JSON import tests through the public API.

mod common;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use common::fixtures;
use common::TestContext;
use flashcard_import::{
    import_from_json, DatePolicy, ErrorKind, Flashcard, FlashcardCollection, ImportError,
    ImportOptions,
};

/// Every entry of a bare array becomes a card with a generated id.
#[test]
fn test_bare_array_card_count() {
    let ctx = TestContext::new();
    let text = fixtures::sample_json_array(25);

    let set = ctx.importer.import_json(&text, "biology_ch-2.json").unwrap();

    assert_eq!(set.len(), 25);
    assert_eq!(set.title, "biology ch 2");
    assert_eq!(set.source, "Imported: biology_ch-2.json");
    assert_eq!(set.created_at, ctx.now);
    assert_eq!(set.cards[0].id, "test-1");
    assert_eq!(set.cards[24].id, "test-25");
    assert_eq!(set.cards[24].question, "Question 25?");
}

/// Title, source, createdAt and card ids from a collection object are kept.
#[test]
fn test_collection_object_preserved() {
    let ctx = TestContext::new();
    let text = fixtures::sample_json_collection(
        "Provided Title",
        "Provided Source",
        "2024-01-01T00:00:00.000Z",
        &["abc", "def"],
    );

    let set = ctx.importer.import_json(&text, "ignored.json").unwrap();

    assert_eq!(
        set,
        FlashcardCollection {
            title: "Provided Title".to_string(),
            source: "Provided Source".to_string(),
            cards: vec![
                Flashcard {
                    id: "abc".to_string(),
                    question: "Question 1?".to_string(),
                    answer: "Answer 1.".to_string(),
                },
                Flashcard {
                    id: "def".to_string(),
                    question: "Question 2?".to_string(),
                    answer: "Answer 2.".to_string(),
                },
            ],
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    );
}

/// An exported collection imports back to the same value.
#[test]
fn test_export_reimports_unchanged() {
    let ctx = TestContext::new();
    let original = ctx
        .importer
        .import_csv(&fixtures::sample_csv(3, true), "export-me.csv")
        .unwrap();

    let exported = serde_json::to_string(&original).unwrap();
    let reimported = ctx.importer.import_json(&exported, "other.json").unwrap();

    assert_eq!(reimported, original);
}

/// Syntax errors always report "Invalid JSON".
#[test]
fn test_invalid_json_message() {
    for text in ["{bad json", "", "[1,", "{\"cards\": [}"] {
        let err = import_from_json(text, "f.json").unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON", "input {:?}", text);
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }
}

/// Scalars at the top level are an unsupported format.
#[test]
fn test_scalar_top_level_unsupported() {
    let err = import_from_json("3.14", "f.json").unwrap_err();
    assert_eq!(err.to_string(), "Unsupported JSON format");
    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
}

/// One bad card fails the whole import.
#[test]
fn test_single_bad_card_fails_import() {
    let ctx = TestContext::new();
    let text = r#"[{"question":"Q1","answer":"A1"},{"question":"Q2","answer":null}]"#;

    let err = ctx.importer.import_json(text, "f.json").unwrap_err();

    assert!(matches!(err, ImportError::InvalidCardFields { index: 1 }));
    assert_eq!(err.to_string(), "Invalid JSON card fields");
}

/// The date policy decides what happens to an unreadable createdAt.
#[test]
fn test_invalid_created_at_policy() {
    let text = r#"{"createdAt":"tomorrow-ish","cards":[{"question":"Q","answer":"A"}]}"#;

    let strict = TestContext::new();
    let err = strict.importer.import_json(text, "f.json").unwrap_err();
    assert_eq!(err.to_string(), "Invalid createdAt date: tomorrow-ish");
    assert_eq!(err.kind(), ErrorKind::MalformedInput);

    let lenient = TestContext::with_options(ImportOptions {
        date_policy: DatePolicy::Lenient,
    });
    let set = lenient.importer.import_json(text, "f.json").unwrap();
    assert_eq!(set.created_at, lenient.now);
}

/// An empty card list is a distinct failure from a malformed one.
#[test]
fn test_empty_cards_not_found() {
    let err = import_from_json(r#"{"title":"T","cards":[]}"#, "f.json").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoCardsFound);
    assert_eq!(err.to_string(), "No cards found");
}
