//! Importer entry points.

use crate::capabilities::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::config::ImportOptions;
use crate::error::{ImportError, Result};
use crate::types::FlashcardCollection;
use crate::{csv, json};
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Text formats an import can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// Converts JSON or CSV text into flashcard collections.
///
/// Holds the id generator and clock so imports can be made deterministic.
/// Cheap to clone and safe to share between threads.
#[derive(Clone)]
pub struct Importer {
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    options: ImportOptions,
}

impl Importer {
    /// Importer with random UUID ids and the system clock.
    pub fn new() -> Self {
        Self {
            ids: Arc::new(UuidGenerator),
            clock: Arc::new(SystemClock),
            options: ImportOptions::default(),
        }
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    pub(crate) fn next_id(&self) -> String {
        self.ids.generate()
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Import a JSON card list or collection object.
    pub fn import_json(&self, text: &str, file_name: &str) -> Result<FlashcardCollection> {
        json::parse(text, file_name, self)
    }

    /// Import CSV text with a `Question,Answer` header.
    pub fn import_csv(&self, text: &str, file_name: &str) -> Result<FlashcardCollection> {
        csv::parse(text, file_name, self)
    }

    /// Import text, choosing the format from the file name's extension.
    pub fn import_file(&self, text: &str, file_name: &str) -> Result<FlashcardCollection> {
        let format = ImportFormat::from_file_name(file_name).ok_or_else(|| {
            ImportError::UnsupportedFileType {
                file_name: file_name.to_string(),
            }
        })?;
        self.import(format, text, file_name)
    }

    /// Import text in an explicitly chosen format.
    pub fn import(
        &self,
        format: ImportFormat,
        text: &str,
        file_name: &str,
    ) -> Result<FlashcardCollection> {
        match format {
            ImportFormat::Json => self.import_json(text, file_name),
            ImportFormat::Csv => self.import_csv(text, file_name),
        }
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Importer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Importer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Import JSON text with random ids and the current time.
pub fn import_from_json(text: &str, file_name: &str) -> Result<FlashcardCollection> {
    Importer::new().import_json(text, file_name)
}

/// Import CSV text with random ids and the current time.
pub fn import_from_csv(text: &str, file_name: &str) -> Result<FlashcardCollection> {
    Importer::new().import_csv(text, file_name)
}
