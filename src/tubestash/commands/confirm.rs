use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Library, RetentionLedger, VideoItem};
use crate::store::DataStore;

/// Bulk disposition of unsynced items after a sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Mark every orphan as kept.
    KeepAll,
    /// Remove every orphan and block it from future syncs.
    DeleteAll,
    /// Leave orphans flagged; the user resolves them one by one.
    Individual,
}

pub fn run<S: DataStore>(store: &mut S, action: SyncAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        SyncAction::KeepAll => {
            let mut library = store.load_library()?;
            let kept = keep_all_orphans(&mut library);
            if kept == 0 {
                result.add_message(CmdMessage::info("No unsynced items to keep."));
            } else {
                store.save_library(&library)?;
                result.add_message(CmdMessage::success(format!("Kept {} item(s)", kept)));
            }
        }
        SyncAction::DeleteAll => {
            let mut library = store.load_library()?;
            let mut ledger = store.load_ledger()?;
            let removed = delete_all_orphans(&mut library, &mut ledger);
            if removed.is_empty() {
                result.add_message(CmdMessage::info("No unsynced items to delete."));
            } else {
                store.save_library(&library)?;
                store.save_ledger(&ledger)?;
                for item in &removed {
                    result.add_message(CmdMessage::success(format!(
                        "Deleted: {} ({})",
                        item.title, item.video_id
                    )));
                }
                result.affected_items = removed;
            }
        }
        SyncAction::Individual => {
            result.add_message(CmdMessage::info(
                "Resolve items one by one with `keep <id>` and `delete <id>`.",
            ));
        }
    }

    Ok(result)
}

/// Flips every orphan back to synced. Returns how many changed.
pub(crate) fn keep_all_orphans(library: &mut Library) -> usize {
    let mut kept = 0;
    for item in library.items.iter_mut() {
        if item.is_orphan() {
            item.synced = true;
            kept += 1;
        }
    }
    kept
}

/// Removes every orphan from the library and records each id in the
/// retention ledger. Returns the removed items.
pub(crate) fn delete_all_orphans(
    library: &mut Library,
    ledger: &mut RetentionLedger,
) -> Vec<VideoItem> {
    let mut removed = Vec::new();
    library.items.retain(|item| {
        if item.is_orphan() {
            removed.push(item.clone());
            false
        } else {
            true
        }
    });
    for item in &removed {
        ledger.insert(&item.video_id);
    }
    removed
}
