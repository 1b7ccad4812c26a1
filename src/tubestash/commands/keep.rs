use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Keeps one unsynced item in the library. Idempotent: keeping an item that
/// is already synced, or one that does not exist, is a no-op.
pub fn run<S: DataStore>(store: &mut S, video_id: &str) -> Result<CmdResult> {
    let mut library = store.load_library()?;
    let mut result = CmdResult::default();

    match library.get_mut(video_id) {
        Some(item) if item.is_orphan() => {
            item.synced = true;
            let item = item.clone();
            store.save_library(&library)?;
            result.add_message(CmdMessage::success(format!(
                "Kept: {} ({})",
                item.title, item.video_id
            )));
            result.affected_items.push(item);
        }
        Some(_) => {
            result.add_message(CmdMessage::info(format!(
                "{} is already synced; nothing to do",
                video_id
            )));
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "{} is not in the library",
                video_id
            )));
        }
    }

    Ok(result)
}
