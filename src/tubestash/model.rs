//! # Domain Model: Library Items and the Retention Ledger
//!
//! The library is a list of [`VideoItem`]s keyed by their external
//! `video_id`. Every field on an item is either *remote-owned* (title,
//! channel, thumbnail, tags, duration, topics — replaced from the latest
//! fetch) or *user-owned* (rating, comments, hype counters — never touched
//! by a sync). The split is what makes reconciliation safe: see `merge.rs`.
//!
//! [`RemoteVideo`] is the shape of one record in a fetched snapshot. It
//! carries only remote-owned fields; turning it into a [`VideoItem`] starts
//! every user-owned field at its default.
//!
//! The [`RetentionLedger`] holds ids the user has deleted for good. An id in
//! the ledger never re-enters the library through a sync — only an explicit
//! restore removes the entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single video in the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoItem {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    #[serde(default)]
    pub thumbnail_url: String,
    /// When the item first appeared in the remote source. Preserved across
    /// merges once set.
    pub added_at: DateTime<Utc>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub comments: Vec<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Raw ISO-8601 duration code from the source, e.g. `PT5M47S`.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    #[serde(default)]
    pub hype_up: u32,
    #[serde(default)]
    pub hype_down: u32,
    /// `false` means the item vanished from the remote source and awaits a
    /// keep/delete decision.
    pub synced: bool,
}

impl VideoItem {
    /// Builds a fresh library item from a fetched record, with every
    /// user-owned field at its default.
    pub fn from_remote(remote: RemoteVideo) -> Self {
        Self {
            video_id: remote.video_id,
            title: remote.title,
            channel: remote.channel,
            thumbnail_url: remote.thumbnail_url,
            added_at: remote.added_at,
            rating: None,
            comments: Vec::new(),
            tags: remote.tags,
            duration: remote.duration,
            topics: remote.topics,
            hype_up: 0,
            hype_down: 0,
            synced: true,
        }
    }

    pub fn is_orphan(&self) -> bool {
        !self.synced
    }
}

/// One record of a fetched remote snapshot. Remote-owned fields only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteVideo {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    #[serde(default)]
    pub thumbnail_url: String,
    pub added_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

/// The persisted library document: items in stable store order plus the
/// timestamp of the last successful sync.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    pub items: Vec<VideoItem>,
    #[serde(default)]
    pub last_sync: Option<DateTime<Utc>>,
}

impl Library {
    pub fn get(&self, video_id: &str) -> Option<&VideoItem> {
        self.items.iter().find(|item| item.video_id == video_id)
    }

    pub fn get_mut(&mut self, video_id: &str) -> Option<&mut VideoItem> {
        self.items.iter_mut().find(|item| item.video_id == video_id)
    }

    pub fn orphans(&self) -> impl Iterator<Item = &VideoItem> {
        self.items.iter().filter(|item| item.is_orphan())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetentionEntry {
    pub video_id: String,
    pub removed_at: DateTime<Utc>,
}

/// Ids the user has permanently excluded from the library, with removal
/// timestamps. At most one entry per id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RetentionLedger {
    entries: Vec<RetentionEntry>,
}

impl RetentionLedger {
    pub fn contains(&self, video_id: &str) -> bool {
        self.entries.iter().any(|e| e.video_id == video_id)
    }

    /// Idempotent: inserting an id that is already present is a no-op.
    /// Returns whether a new entry was created.
    pub fn insert(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.entries.push(RetentionEntry {
            video_id: video_id.to_string(),
            removed_at: Utc::now(),
        });
        true
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, video_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.video_id != video_id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[RetentionEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(id: &str) -> RemoteVideo {
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

    #[test]
    fn from_remote_defaults_user_fields() {
        let item = VideoItem::from_remote(remote("a1"));
        assert_eq!(item.rating, None);
        assert!(item.comments.is_empty());
        assert_eq!(item.hype_up, 0);
        assert_eq!(item.hype_down, 0);
        assert!(item.synced);
    }

    #[test]
    fn ledger_insert_is_idempotent() {
        let mut ledger = RetentionLedger::default();
        assert!(ledger.insert("a1"));
        assert!(!ledger.insert("a1"));
        assert_eq!(ledger.entries().len(), 1);
        assert!(ledger.contains("a1"));
    }

    #[test]
    fn ledger_remove() {
        let mut ledger = RetentionLedger::default();
        ledger.insert("a1");
        assert!(ledger.remove("a1"));
        assert!(!ledger.remove("a1"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn item_serialization_roundtrip() {
        let mut item = VideoItem::from_remote(remote("a1"));
        item.rating = Some(4);
        item.comments.push("great".to_string());

        let json = serde_json::to_string(&item).unwrap();
        let loaded: VideoItem = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.video_id, "a1");
        assert_eq!(loaded.rating, Some(4));
        assert_eq!(loaded.comments, vec!["great"]);
    }

    #[test]
    fn legacy_item_without_counters() {
        // Library documents written before hype counters existed.
        let json = r#"{
            "video_id": "a1",
            "title": "Old",
            "channel": "Ch",
            "added_at": "2023-01-01T00:00:00Z",
            "synced": true
        }"#;

        let loaded: VideoItem = serde_json::from_str(json).unwrap();
        assert_eq!(loaded.hype_up, 0);
        assert_eq!(loaded.hype_down, 0);
        assert_eq!(loaded.rating, None);
        assert!(loaded.comments.is_empty());
    }

    #[test]
    fn library_lookup() {
        let mut library = Library::default();
        library.items.push(VideoItem::from_remote(remote("a1")));
        library.items.push(VideoItem::from_remote(remote("b2")));
        library.items[1].synced = false;

        assert!(library.get("a1").is_some());
        assert!(library.get("zz").is_none());
        assert_eq!(library.orphans().count(), 1);
        assert_eq!(library.orphans().next().unwrap().video_id, "b2");
    }
}
