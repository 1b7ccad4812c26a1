use crate::commands::helpers::require_item_mut;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HypeKind {
    Up,
    Down,
}

/// Bumps one of an item's hype counters. Counters only ever go up.
pub fn run<S: DataStore>(store: &mut S, video_id: &str, kind: HypeKind) -> Result<CmdResult> {
    let mut library = store.load_library()?;
    let item = require_item_mut(&mut library, video_id)?;

    let count = match kind {
        HypeKind::Up => {
            item.hype_up = item.hype_up.saturating_add(1);
            item.hype_up
        }
        HypeKind::Down => {
            item.hype_down = item.hype_down.saturating_add(1);
            item.hype_down
        }
    };
    let item = item.clone();
    store.save_library(&library)?;

    let mut result = CmdResult::default();
    let label = match kind {
        HypeKind::Up => "up",
        HypeKind::Down => "down",
    };
    result.add_message(CmdMessage::success(format!(
        "Hype {} for {} is now {}",
        label, item.title, count
    )));
    result.affected_items.push(item);
    Ok(result)
}
