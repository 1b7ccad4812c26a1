use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn write_snapshot(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn tubestash(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tubestash").unwrap();
    cmd.env("TUBESTASH_DATA_DIR", data_dir);
    cmd
}

const SNAPSHOT_AB: &str = r#"[
  {
    "video_id": "aaa11111111",
    "title": "First Video",
    "channel": "Chan One",
    "added_at": "2024-03-01T12:00:00Z",
    "duration": "PT5M47S"
  },
  {
    "video_id": "bbb22222222",
    "title": "Second Video",
    "channel": "Chan Two",
    "added_at": "2024-03-02T12:00:00Z"
  }
]"#;

const SNAPSHOT_A: &str = r#"[
  {
    "video_id": "aaa11111111",
    "title": "First Video (renamed)",
    "channel": "Chan One",
    "added_at": "2024-03-01T12:00:00Z"
  }
]"#;

#[test]
fn sync_rate_and_search() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("stash");
    let snap = write_snapshot(temp_dir.path(), "snap.json", SNAPSHOT_AB);

    tubestash(&data_dir)
        .arg("sync")
        .arg(&snap)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 added"));

    tubestash(&data_dir)
        .args(["rate", "aaa11111111", "5"])
        .assert()
        .success();

    tubestash(&data_dir)
        .args(["comment", "add", "aaa11111111", "great hook"])
        .assert()
        .success();

    // Include by rating, exclude comment-less items: only the first video
    // satisfies both.
    tubestash(&data_dir)
        .args(["search", "-i", "rating:>=4", "-x", "has-comment:false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First Video"))
        .stdout(predicate::str::contains("Second Video").not());
}

#[test]
fn annotations_survive_resync() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("stash");
    let snap_ab = write_snapshot(temp_dir.path(), "snap_ab.json", SNAPSHOT_AB);
    let snap_a = write_snapshot(temp_dir.path(), "snap_a.json", SNAPSHOT_A);

    tubestash(&data_dir).arg("sync").arg(&snap_ab).assert().success();
    tubestash(&data_dir)
        .args(["rate", "aaa11111111", "4"])
        .assert()
        .success();

    // The second snapshot renames the video; the rating must survive.
    tubestash(&data_dir).arg("sync").arg(&snap_a).assert().success();

    tubestash(&data_dir)
        .args(["show", "aaa11111111"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First Video (renamed)"))
        .stdout(predicate::str::contains("4/5"));
}

#[test]
fn orphan_delete_blocks_reintroduction() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("stash");
    let snap_ab = write_snapshot(temp_dir.path(), "snap_ab.json", SNAPSHOT_AB);
    let snap_a = write_snapshot(temp_dir.path(), "snap_a.json", SNAPSHOT_A);

    tubestash(&data_dir).arg("sync").arg(&snap_ab).assert().success();

    // b vanishes from the remote: flagged, awaiting a decision.
    tubestash(&data_dir)
        .arg("sync")
        .arg(&snap_a)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 no longer in the remote source"));

    tubestash(&data_dir)
        .args(["list", "--orphans"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bbb22222222"));

    tubestash(&data_dir)
        .args(["confirm", "delete-all"])
        .assert()
        .success();

    tubestash(&data_dir)
        .args(["retention", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bbb22222222"));

    // A snapshot that still carries b must not bring it back.
    tubestash(&data_dir).arg("sync").arg(&snap_ab).assert().success();
    tubestash(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("bbb22222222").not());

    // Until it is explicitly unblocked.
    tubestash(&data_dir)
        .args(["retention", "restore", "bbb22222222"])
        .assert()
        .success();
    tubestash(&data_dir).arg("sync").arg(&snap_ab).assert().success();
    tubestash(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("bbb22222222"));
}

#[test]
fn keep_policy_resolves_orphans_automatically() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("stash");
    let snap_ab = write_snapshot(temp_dir.path(), "snap_ab.json", SNAPSHOT_AB);
    let snap_a = write_snapshot(temp_dir.path(), "snap_a.json", SNAPSHOT_A);

    tubestash(&data_dir)
        .args(["settings", "retention-policy", "keep"])
        .assert()
        .success();

    tubestash(&data_dir).arg("sync").arg(&snap_ab).assert().success();
    tubestash(&data_dir).arg("sync").arg(&snap_a).assert().success();

    // b was kept automatically: still listed, no orphans pending.
    tubestash(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("bbb22222222"));
    tubestash(&data_dir)
        .args(["list", "--orphans"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found."));
}

#[test]
fn template_save_and_run() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("stash");
    let snap = write_snapshot(temp_dir.path(), "snap.json", SNAPSHOT_AB);

    tubestash(&data_dir).arg("sync").arg(&snap).assert().success();
    tubestash(&data_dir)
        .args(["rate", "bbb22222222", "2"])
        .assert()
        .success();

    tubestash(&data_dir)
        .args(["template", "save", "low-rated", "-i", "rating:<=2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("low-rated"));

    let output = tubestash(&data_dir)
        .args(["template", "list"])
        .output()
        .unwrap();
    let listing = String::from_utf8(output.stdout).unwrap();
    let template_id = listing.split_whitespace().next().unwrap().to_string();

    // rating:<=2 also matches the unrated first video (absent compares as 0).
    tubestash(&data_dir)
        .args(["search", "--template", &template_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("bbb22222222"))
        .stdout(predicate::str::contains("aaa11111111"));

    tubestash(&data_dir)
        .args(["template", "delete", &template_id])
        .assert()
        .success();
    tubestash(&data_dir)
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No templates saved."));
}

#[test]
fn invalid_rating_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("stash");
    let snap = write_snapshot(temp_dir.path(), "snap.json", SNAPSHOT_AB);

    tubestash(&data_dir).arg("sync").arg(&snap).assert().success();

    tubestash(&data_dir)
        .args(["rate", "aaa11111111", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 5"));
}
