use super::DataStore;
use crate::config::Settings;
use crate::error::Result;
use crate::model::{Library, RetentionLedger};
use crate::query::SearchTemplate;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    library: Library,
    ledger: RetentionLedger,
    templates: Vec<SearchTemplate>,
    settings: Settings,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_library(&self) -> Result<Library> {
        Ok(self.library.clone())
    }

    fn save_library(&mut self, library: &Library) -> Result<()> {
        self.library = library.clone();
        Ok(())
    }

    fn load_ledger(&self) -> Result<RetentionLedger> {
        Ok(self.ledger.clone())
    }

    fn save_ledger(&mut self, ledger: &RetentionLedger) -> Result<()> {
        self.ledger = ledger.clone();
        Ok(())
    }

    fn load_templates(&self) -> Result<Vec<SearchTemplate>> {
        Ok(self.templates.clone())
    }

    fn save_templates(&mut self, templates: &[SearchTemplate]) -> Result<()> {
        self.templates = templates.to_vec();
        Ok(())
    }

    fn load_settings(&self) -> Result<Settings> {
        Ok(self.settings.clone())
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<()> {
        self.settings = settings.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::config::RetentionPolicy;
    use crate::model::{RemoteVideo, VideoItem};
    use chrono::Utc;

    pub fn remote(id: &str) -> RemoteVideo {
        RemoteVideo {
            video_id: id.to_string(),
            title: format!("Video {}", id),
            channel: "Channel".to_string(),
            thumbnail_url: String::new(),
            added_at: Utc::now(),
            tags: None,
            duration: None,
            topics: None,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_item(mut self, id: &str) -> Self {
            let mut library = self.store.load_library().unwrap();
            library.items.push(VideoItem::from_remote(remote(id)));
            self.store.save_library(&library).unwrap();
            self
        }

        pub fn with_orphan(mut self, id: &str) -> Self {
            let mut library = self.store.load_library().unwrap();
            let mut item = VideoItem::from_remote(remote(id));
            item.synced = false;
            library.items.push(item);
            self.store.save_library(&library).unwrap();
            self
        }

        pub fn with_rated_item(mut self, id: &str, rating: u8) -> Self {
            let mut library = self.store.load_library().unwrap();
            let mut item = VideoItem::from_remote(remote(id));
            item.rating = Some(rating);
            library.items.push(item);
            self.store.save_library(&library).unwrap();
            self
        }

        pub fn with_retained(mut self, id: &str) -> Self {
            let mut ledger = self.store.load_ledger().unwrap();
            ledger.insert(id);
            self.store.save_ledger(&ledger).unwrap();
            self
        }

        pub fn with_policy(mut self, policy: RetentionPolicy) -> Self {
            self.store
                .save_settings(&Settings {
                    retention_policy: policy,
                })
                .unwrap();
            self
        }
    }
}
