//! Common test utilities for import integration tests.
//!
//! Provides a deterministic `TestContext` (sequential ids, frozen clock)
//! and fixture builders for JSON and CSV input.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};

use flashcard_import::{FixedClock, ImportOptions, Importer, SequentialIds};

static TRACING: Once = Once::new();

/// Route `tracing` output to the test harness, filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Deterministic import setup shared by integration tests.
pub struct TestContext {
    pub now: DateTime<Utc>,
    pub importer: Importer,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_options(ImportOptions::default())
    }

    pub fn with_options(options: ImportOptions) -> Self {
        init_tracing();

        let now = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        let importer = Importer::new()
            .with_id_generator(SequentialIds::new("test-"))
            .with_clock(FixedClock(now))
            .with_options(options);

        Self { now, importer }
    }
}
