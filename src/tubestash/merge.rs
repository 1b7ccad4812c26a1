//! # Library Reconciliation
//!
//! [`reconcile`] merges a fetched remote snapshot into the current library.
//! It is a pure function: it never writes anywhere, never deletes an item,
//! and never touches a user-owned field. Disposal of orphans is a separate,
//! explicit operation (see `commands/confirm.rs`).
//!
//! Ordering is stable and documented: the existing store order is retained,
//! new items are appended in fetch order. `orphaned` reports newly-flagged
//! items in store order; `added` reports new items in fetch order. Running
//! the same inputs twice yields an identical result — the second pass
//! reports nothing added and nothing orphaned.

use std::collections::{HashMap, HashSet};

use crate::model::{RemoteVideo, RetentionLedger, VideoItem};

/// Result of one reconciliation pass.
#[derive(Debug, Default)]
pub struct MergeOutcome {
    /// The full replacement item set (orphans included, flagged).
    pub items: Vec<VideoItem>,
    /// Items that entered the library this pass, in fetch order.
    pub added: Vec<VideoItem>,
    /// Items newly flagged as gone from the remote source, in store order.
    pub orphaned: Vec<VideoItem>,
}

/// Merges `fetched` (the complete remote snapshot, not a delta) into
/// `current`, suppressing anything in `ledger`.
///
/// An item present in both the snapshot and the ledger is resolved by
/// ledger precedence: it is skipped, never an error.
pub fn reconcile(
    current: &[VideoItem],
    fetched: &[RemoteVideo],
    ledger: &RetentionLedger,
) -> MergeOutcome {
    let mut fetched_ids: HashSet<&str> = HashSet::with_capacity(fetched.len());
    for remote in fetched {
        let fresh = fetched_ids.insert(remote.video_id.as_str());
        assert!(fresh, "duplicate id in fetched snapshot: {}", remote.video_id);
    }

    let mut items: Vec<VideoItem> = current.to_vec();
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        let prev = positions.insert(item.video_id.clone(), pos);
        assert!(prev.is_none(), "duplicate id in library: {}", item.video_id);
    }

    // Pass 1: flag items that vanished from the remote source. Items already
    // flagged stay untouched and unreported, so repeated syncs do not
    // re-announce the same orphan.
    let mut orphaned = Vec::new();
    for item in items.iter_mut() {
        if item.synced
            && !fetched_ids.contains(item.video_id.as_str())
            && !ledger.contains(&item.video_id)
        {
            item.synced = false;
            orphaned.push(item.clone());
        }
    }

    // Pass 2: merge existing items in place, append new ones.
    let mut added = Vec::new();
    for remote in fetched {
        if ledger.contains(&remote.video_id) {
            continue;
        }
        match positions.get(remote.video_id.as_str()) {
            Some(&pos) => apply_remote(&mut items[pos], remote),
            None => {
                let item = VideoItem::from_remote(remote.clone());
                positions.insert(item.video_id.clone(), items.len());
                added.push(item.clone());
                items.push(item);
            }
        }
    }

    MergeOutcome {
        items,
        added,
        orphaned,
    }
}

/// Overwrites the remote-owned fields of an existing item from the latest
/// fetch. Descriptive extras (tags, duration, topics) survive a fetch that
/// omits them; user-owned fields and `added_at` are never written here.
fn apply_remote(item: &mut VideoItem, remote: &RemoteVideo) {
    item.title = remote.title.clone();
    item.channel = remote.channel.clone();
    item.thumbnail_url = remote.thumbnail_url.clone();
    if remote.tags.is_some() {
        item.tags = remote.tags.clone();
    }
    if remote.duration.is_some() {
        item.duration = remote.duration.clone();
    }
    if remote.topics.is_some() {
        item.topics = remote.topics.clone();
    }
    item.synced = true;
}
