//! Flashcard import library.
//!
//! Provides:
//! - JSON importer (bare card array or full collection object)
//! - CSV importer with a quote-aware line splitter and row parser
//! - Title derivation from file names
//! - Injectable id generator and clock for deterministic imports

pub mod capabilities;
pub mod config;
pub mod csv;
pub mod date;
pub mod error;
pub mod importer;
pub mod json;
pub mod title;
pub mod types;

pub use capabilities::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidGenerator};
pub use config::{DatePolicy, ImportOptions};
pub use error::{ErrorKind, ImportError, Result};
pub use importer::{import_from_csv, import_from_json, ImportFormat, Importer};
pub use title::{derive_title, FALLBACK_TITLE};
pub use types::{Flashcard, FlashcardCollection};
