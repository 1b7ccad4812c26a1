//! # API Facade
//!
//! A thin facade over the command layer: the single entry point for every
//! tubestash operation regardless of the UI driving it. It dispatches to
//! the command modules, normalizes inputs (raw `kind:operand` strings into
//! [`SearchCondition`]s), and returns structured `Result<CmdResult>` values.
//! Business logic lives in `commands/*.rs`, not here, and nothing in this
//! module touches stdout or the filesystem directly.

use crate::commands;
use crate::commands::confirm::SyncAction;
use crate::commands::hype::HypeKind;
use crate::commands::list::ListFilter;
use crate::config::RetentionPolicy;
use crate::error::{Result, StashError};
use crate::model::RemoteVideo;
use crate::query::SearchCondition;
use crate::store::DataStore;

/// The main API facade for tubestash operations.
///
/// Generic over `DataStore` to allow different storage backends.
pub struct TubestashApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TubestashApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn sync(&mut self, fetched: Vec<RemoteVideo>) -> Result<commands::CmdResult> {
        commands::sync::run(&mut self.store, fetched)
    }

    pub fn confirm_sync(&mut self, action: SyncAction) -> Result<commands::CmdResult> {
        commands::confirm::run(&mut self.store, action)
    }

    pub fn list(&self, filter: ListFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn keep_item(&mut self, video_id: &str) -> Result<commands::CmdResult> {
        commands::keep::run(&mut self.store, video_id)
    }

    pub fn delete_item(&mut self, video_id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, video_id)
    }

    pub fn update_rating(
        &mut self,
        video_id: &str,
        rating: Option<u8>,
    ) -> Result<commands::CmdResult> {
        commands::rating::run(&mut self.store, video_id, rating)
    }

    pub fn add_comment(&mut self, video_id: &str, text: &str) -> Result<commands::CmdResult> {
        commands::comment::add(&mut self.store, video_id, text)
    }

    pub fn update_comment(
        &mut self,
        video_id: &str,
        index: usize,
        text: &str,
    ) -> Result<commands::CmdResult> {
        commands::comment::update(&mut self.store, video_id, index, text)
    }

    pub fn delete_comment(&mut self, video_id: &str, index: usize) -> Result<commands::CmdResult> {
        commands::comment::remove(&mut self.store, video_id, index)
    }

    pub fn update_hype(&mut self, video_id: &str, kind: HypeKind) -> Result<commands::CmdResult> {
        commands::hype::run(&mut self.store, video_id, kind)
    }

    pub fn search<I: AsRef<str>>(
        &self,
        include: &[I],
        exclude: &[I],
    ) -> Result<commands::CmdResult> {
        let include = parse_conditions(include)?;
        let exclude = parse_conditions(exclude)?;
        commands::search::run(&self.store, &include, &exclude)
    }

    /// Runs a saved template's conditions.
    pub fn search_template(&self, template_id: &str) -> Result<commands::CmdResult> {
        let template = commands::template::get(&self.store, template_id)?;
        commands::search::run(&self.store, &template.include, &template.exclude)
    }

    pub fn save_template<I: AsRef<str>>(
        &mut self,
        name: &str,
        include: &[I],
        exclude: &[I],
    ) -> Result<commands::CmdResult> {
        let include = parse_conditions(include)?;
        let exclude = parse_conditions(exclude)?;
        commands::template::save(&mut self.store, name, include, exclude)
    }

    pub fn list_templates(&self) -> Result<commands::CmdResult> {
        commands::template::list(&self.store)
    }

    pub fn delete_template(&mut self, template_id: &str) -> Result<commands::CmdResult> {
        commands::template::delete(&mut self.store, template_id)
    }

    pub fn list_retention(&self) -> Result<commands::CmdResult> {
        commands::retention::list(&self.store)
    }

    pub fn restore_retention(&mut self, video_id: &str) -> Result<commands::CmdResult> {
        commands::retention::restore(&mut self.store, video_id)
    }

    pub fn show_settings(&self) -> Result<commands::CmdResult> {
        commands::settings::show(&self.store)
    }

    pub fn set_retention_policy(&mut self, policy: RetentionPolicy) -> Result<commands::CmdResult> {
        commands::settings::set_retention_policy(&mut self.store, policy)
    }
}

fn parse_conditions<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<SearchCondition>> {
    inputs
        .iter()
        .map(|s| s.as_ref().parse().map_err(StashError::Api))
        .collect()
}

pub use crate::commands::confirm::SyncAction as ConfirmAction;
pub use crate::commands::hype::HypeKind as HypeDirection;
pub use crate::commands::list::ListFilter as LibraryFilter;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
