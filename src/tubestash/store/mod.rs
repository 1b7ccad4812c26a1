//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts persistence behind whole-document
//! load/replace operations: the core never performs a partial update to
//! persisted state. Each command loads the documents it needs, computes a
//! complete replacement, and saves it back.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file per document
//!   under a single data directory:
//!
//! ```text
//! <data dir>/
//! ├── library.json     # items + last sync timestamp
//! ├── retention.json   # permanently excluded ids
//! ├── templates.json   # saved search templates
//! └── settings.json    # retention policy
//! ```
//!
//! - [`memory::InMemoryStore`]: in-memory storage for tests, plus a
//!   `fixtures` builder.
//!
//! A missing document loads as its default value, so a fresh data directory
//! behaves like an empty library.

use crate::config::Settings;
use crate::error::Result;
use crate::model::{Library, RetentionLedger};
use crate::query::SearchTemplate;

pub mod fs;
pub mod memory;

/// Abstract interface for persisted state. Every operation reads or
/// replaces a whole document.
pub trait DataStore {
    fn load_library(&self) -> Result<Library>;
    fn save_library(&mut self, library: &Library) -> Result<()>;

    fn load_ledger(&self) -> Result<RetentionLedger>;
    fn save_ledger(&mut self, ledger: &RetentionLedger) -> Result<()>;

    fn load_templates(&self) -> Result<Vec<SearchTemplate>>;
    fn save_templates(&mut self, templates: &[SearchTemplate]) -> Result<()>;

    fn load_settings(&self) -> Result<Settings>;
    fn save_settings(&mut self, settings: &Settings) -> Result<()>;
}
