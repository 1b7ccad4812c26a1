use crate::error::{Result, StashError};
use crate::model::{Library, VideoItem};

/// Looks up an item for an annotation mutation. Unlike the disposition
/// operations, mutating a missing item is an error, not a no-op.
pub fn require_item_mut<'a>(library: &'a mut Library, video_id: &str) -> Result<&'a mut VideoItem> {
    library
        .get_mut(video_id)
        .ok_or_else(|| StashError::ItemNotFound(video_id.to_string()))
}
