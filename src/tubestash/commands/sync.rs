use crate::commands::{confirm, CmdMessage, CmdResult};
use crate::config::RetentionPolicy;
use crate::error::Result;
use crate::merge;
use crate::model::{Library, RemoteVideo, VideoItem};
use crate::store::DataStore;
use chrono::Utc;

/// What a sync did, beyond the updated library itself.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub total_fetched: usize,
    pub added: Vec<VideoItem>,
    pub orphaned: Vec<VideoItem>,
    /// Set when orphans exist and the retention policy is `ask`.
    pub needs_confirmation: bool,
}

/// Reconciles the library against a complete fetched snapshot, then applies
/// the configured retention policy to any orphans.
pub fn run<S: DataStore>(store: &mut S, fetched: Vec<RemoteVideo>) -> Result<CmdResult> {
    let library = store.load_library()?;
    let mut ledger = store.load_ledger()?;
    let settings = store.load_settings()?;

    let total_fetched = fetched.len();
    let outcome = merge::reconcile(&library.items, &fetched, &ledger);

    let mut library = Library {
        items: outcome.items,
        last_sync: Some(Utc::now()),
    };

    let mut result = CmdResult::default();
    let mut needs_confirmation = false;

    if library.orphans().next().is_some() {
        match settings.retention_policy {
            RetentionPolicy::Keep => {
                let kept = confirm::keep_all_orphans(&mut library);
                result.add_message(CmdMessage::info(format!(
                    "Kept {} unsynced item(s) (retention policy: keep)",
                    kept
                )));
            }
            RetentionPolicy::Delete => {
                let removed = confirm::delete_all_orphans(&mut library, &mut ledger);
                store.save_ledger(&ledger)?;
                result.add_message(CmdMessage::info(format!(
                    "Deleted {} unsynced item(s) (retention policy: delete)",
                    removed.len()
                )));
            }
            // Only a sync that produced new orphans prompts for a decision;
            // ones already awaiting it were announced when they appeared.
            RetentionPolicy::Ask => {
                needs_confirmation = !outcome.orphaned.is_empty();
            }
        }
    }

    store.save_library(&library)?;

    result.add_message(CmdMessage::success(format!(
        "Synced {} item(s): {} added, {} no longer in the remote source",
        total_fetched,
        outcome.added.len(),
        outcome.orphaned.len()
    )));
    if needs_confirmation {
        result.add_message(CmdMessage::warning(
            "Unsynced items await a decision; run `confirm keep-all`, `confirm delete-all`, \
             or resolve them individually with `keep`/`delete`",
        ));
    }

    result.report = Some(SyncReport {
        total_fetched,
        added: outcome.added,
        orphaned: outcome.orphaned,
        needs_confirmation,
    });
    result.last_sync = library.last_sync;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetentionPolicy;
    use crate::store::memory::fixtures::{remote, StoreFixture};

    #[test]
    fn sync_adds_and_stamps_last_sync() {
        let mut fx = StoreFixture::new();
        let result = run(&mut fx.store, vec![remote("a"), remote("b")]).unwrap();

        let report = result.report.unwrap();
        assert_eq!(report.total_fetched, 2);
        assert_eq!(report.added.len(), 2);
        assert!(!report.needs_confirmation);

        let library = fx.store.load_library().unwrap();
        assert_eq!(library.items.len(), 2);
        assert!(library.last_sync.is_some());
    }

    #[test]
    fn ask_policy_reports_confirmation() {
        let mut fx = StoreFixture::new().with_item("a").with_item("b");
        let result = run(&mut fx.store, vec![remote("a")]).unwrap();

        let report = result.report.unwrap();
        assert_eq!(report.orphaned.len(), 1);
        assert!(report.needs_confirmation);

        let library = fx.store.load_library().unwrap();
        assert!(!library.get("b").unwrap().synced);
    }

    #[test]
    fn keep_policy_resolves_orphans() {
        let mut fx = StoreFixture::new()
            .with_item("a")
            .with_item("b")
            .with_policy(RetentionPolicy::Keep);
        let result = run(&mut fx.store, vec![remote("a")]).unwrap();

        let report = result.report.unwrap();
        assert_eq!(report.orphaned.len(), 1);
        assert!(!report.needs_confirmation);

        let library = fx.store.load_library().unwrap();
        assert!(library.get("b").unwrap().synced);
    }

    #[test]
    fn delete_policy_removes_and_blocks() {
        let mut fx = StoreFixture::new()
            .with_item("a")
            .with_item("b")
            .with_policy(RetentionPolicy::Delete);
        run(&mut fx.store, vec![remote("a")]).unwrap();

        let library = fx.store.load_library().unwrap();
        assert!(library.get("b").is_none());
        assert!(fx.store.load_ledger().unwrap().contains("b"));

        // A later snapshot re-including b must not bring it back.
        run(&mut fx.store, vec![remote("a"), remote("b")]).unwrap();
        assert!(fx.store.load_library().unwrap().get("b").is_none());
    }

    #[test]
    fn repeated_sync_reports_nothing_new() {
        let mut fx = StoreFixture::new().with_item("a").with_item("b");
        run(&mut fx.store, vec![remote("a")]).unwrap();
        let second = run(&mut fx.store, vec![remote("a")]).unwrap();

        let report = second.report.unwrap();
        assert!(report.added.is_empty());
        assert!(report.orphaned.is_empty());
        // Pre-existing orphans still await their decision.
        assert!(!report.needs_confirmation);
        let library = fx.store.load_library().unwrap();
        assert!(!library.get("b").unwrap().synced);
    }
}
