use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Lists the ids blocked from re-entering the library.
pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let ledger = store.load_ledger()?;
    Ok(CmdResult::default().with_retention(ledger.entries().to_vec()))
}

/// Unblocks one id. The item itself only returns on the next sync, and only
/// if the remote source still carries it. Idempotent.
pub fn restore<S: DataStore>(store: &mut S, video_id: &str) -> Result<CmdResult> {
    let mut ledger = store.load_ledger()?;
    let mut result = CmdResult::default();

    if ledger.remove(video_id) {
        store.save_ledger(&ledger)?;
        result.add_message(CmdMessage::success(format!(
            "Unblocked {}; it will return on the next sync if the remote source still has it",
            video_id
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{} is not in the retention list",
            video_id
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    #[test]
    fn lists_blocked_ids() {
        let fx = StoreFixture::new().with_retained("a").with_retained("b");
        let result = list(&fx.store).unwrap();
        assert_eq!(result.retention.len(), 2);
    }

    #[test]
    fn restore_removes_entry() {
        let mut fx = StoreFixture::new().with_retained("a");
        restore(&mut fx.store, "a").unwrap();
        assert!(fx.store.load_ledger().unwrap().is_empty());
    }

    #[test]
    fn restore_unknown_is_a_noop() {
        let mut fx = StoreFixture::new();
        let result = restore(&mut fx.store, "nope").unwrap();
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }
}
