use crate::commands::helpers::require_item_mut;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StashError};
use crate::store::DataStore;

/// Appends a comment. Comments keep insertion order and dense indices.
pub fn add<S: DataStore>(store: &mut S, video_id: &str, text: &str) -> Result<CmdResult> {
    let text = text.trim();
    if text.is_empty() {
        return Err(StashError::Api("Comment cannot be empty".into()));
    }

    let mut library = store.load_library()?;
    let item = require_item_mut(&mut library, video_id)?;
    item.comments.push(text.to_string());
    let item = item.clone();
    store.save_library(&library)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added comment #{} to {}",
        item.comments.len() - 1,
        item.title
    )));
    result.affected_items.push(item);
    Ok(result)
}

/// Replaces the comment at `index`.
pub fn update<S: DataStore>(
    store: &mut S,
    video_id: &str,
    index: usize,
    text: &str,
) -> Result<CmdResult> {
    let text = text.trim();
    if text.is_empty() {
        return Err(StashError::Api("Comment cannot be empty".into()));
    }

    let mut library = store.load_library()?;
    let item = require_item_mut(&mut library, video_id)?;
    let slot = item
        .comments
        .get_mut(index)
        .ok_or_else(|| StashError::CommentIndexOutOfRange {
            video_id: video_id.to_string(),
            index,
        })?;
    *slot = text.to_string();
    let item = item.clone();
    store.save_library(&library)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated comment #{} on {}",
        index, item.title
    )));
    result.affected_items.push(item);
    Ok(result)
}

/// Removes the comment at `index`; later comments shift down to keep the
/// index space dense.
pub fn remove<S: DataStore>(store: &mut S, video_id: &str, index: usize) -> Result<CmdResult> {
    let mut library = store.load_library()?;
    let item = require_item_mut(&mut library, video_id)?;
    if index >= item.comments.len() {
        return Err(StashError::CommentIndexOutOfRange {
            video_id: video_id.to_string(),
            index,
        });
    }
    item.comments.remove(index);
    let item = item.clone();
    store.save_library(&library)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed comment #{} from {}",
        index, item.title
    )));
    result.affected_items.push(item);
    Ok(result)
}
