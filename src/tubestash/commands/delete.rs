use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Removes one item from the library and blocks it from future syncs.
/// Idempotent: deleting an already-deleted item still ensures the retention
/// entry exists and succeeds.
pub fn run<S: DataStore>(store: &mut S, video_id: &str) -> Result<CmdResult> {
    let mut library = store.load_library()?;
    let mut ledger = store.load_ledger()?;
    let mut result = CmdResult::default();

    let removed = library.get(video_id).cloned();
    if let Some(item) = &removed {
        library.items.retain(|i| i.video_id != video_id);
        store.save_library(&library)?;
        result.add_message(CmdMessage::success(format!(
            "Deleted: {} ({})",
            item.title, item.video_id
        )));
        result.affected_items.push(item.clone());
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} is not in the library",
            video_id
        )));
    }

    if ledger.insert(video_id) {
        store.save_ledger(&ledger)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    #[test]
    fn removes_item_and_records_id() {
        let mut fx = StoreFixture::new().with_item("a").with_item("b");
        let result = run(&mut fx.store, "a").unwrap();

        assert_eq!(result.affected_items.len(), 1);
        let library = fx.store.load_library().unwrap();
        assert!(library.get("a").is_none());
        assert!(library.get("b").is_some());
        assert!(fx.store.load_ledger().unwrap().contains("a"));
    }

    #[test]
    fn deleting_twice_is_a_noop() {
        let mut fx = StoreFixture::new().with_item("a");
        run(&mut fx.store, "a").unwrap();
        let second = run(&mut fx.store, "a").unwrap();

        assert!(second.affected_items.is_empty());
        assert_eq!(fx.store.load_ledger().unwrap().entries().len(), 1);
    }

    #[test]
    fn deleting_unknown_id_still_blocks_it() {
        let mut fx = StoreFixture::new();
        run(&mut fx.store, "never-seen").unwrap();
        assert!(fx.store.load_ledger().unwrap().contains("never-seen"));
    }
}
