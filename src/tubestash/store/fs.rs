use super::DataStore;
use crate::config::Settings;
use crate::error::{Result, StashError};
use crate::model::{Library, RetentionLedger};
use crate::query::SearchTemplate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const LIBRARY_FILE: &str = "library.json";
const RETENTION_FILE: &str = "retention.json";
const TEMPLATES_FILE: &str = "templates.json";
const SETTINGS_FILE: &str = "settings.json";

pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(StashError::Io)?;
        }
        Ok(())
    }

    fn read_doc<T: DeserializeOwned + Default>(&self, filename: &str) -> Result<T> {
        let path = self.data_dir.join(filename);
        if !path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(path).map_err(StashError::Io)?;
        serde_json::from_str(&content).map_err(StashError::Serialization)
    }

    fn write_doc<T: Serialize>(&self, filename: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let path = self.data_dir.join(filename);
        let content = serde_json::to_string_pretty(value).map_err(StashError::Serialization)?;
        fs::write(path, content).map_err(StashError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_library(&self) -> Result<Library> {
        self.read_doc(LIBRARY_FILE)
    }

    fn save_library(&mut self, library: &Library) -> Result<()> {
        self.write_doc(LIBRARY_FILE, library)
    }

    fn load_ledger(&self) -> Result<RetentionLedger> {
        self.read_doc(RETENTION_FILE)
    }

    fn save_ledger(&mut self, ledger: &RetentionLedger) -> Result<()> {
        self.write_doc(RETENTION_FILE, ledger)
    }

    fn load_templates(&self) -> Result<Vec<SearchTemplate>> {
        self.read_doc(TEMPLATES_FILE)
    }

    fn save_templates(&mut self, templates: &[SearchTemplate]) -> Result<()> {
        self.write_doc(TEMPLATES_FILE, &templates.to_vec())
    }

    fn load_settings(&self) -> Result<Settings> {
        self.read_doc(SETTINGS_FILE)
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<()> {
        self.write_doc(SETTINGS_FILE, settings)
    }
}
