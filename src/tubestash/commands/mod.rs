use crate::config::Settings;
use crate::model::{RetentionEntry, VideoItem};
use crate::query::SearchTemplate;
use chrono::{DateTime, Utc};

pub mod comment;
pub mod confirm;
pub mod delete;
pub mod helpers;
pub mod hype;
pub mod keep;
pub mod list;
pub mod rating;
pub mod retention;
pub mod search;
pub mod settings;
pub mod sync;
pub mod template;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command; the CLI decides how to render it.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<VideoItem>,
    pub listed_items: Vec<VideoItem>,
    pub templates: Vec<SearchTemplate>,
    pub retention: Vec<RetentionEntry>,
    pub settings: Option<Settings>,
    pub report: Option<sync::SyncReport>,
    pub last_sync: Option<DateTime<Utc>>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<VideoItem>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<VideoItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_templates(mut self, templates: Vec<SearchTemplate>) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_retention(mut self, entries: Vec<RetentionEntry>) -> Self {
        self.retention = entries;
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }
}
