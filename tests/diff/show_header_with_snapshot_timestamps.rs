use crate::common::command::{run_confdiff_command, snapshot_dir};
use crate::common::file::{SnapshotSpec, write_snapshot};
use assert_fs::TempDir;
use chrono::{DateTime, Local};
use filetime::FileTime;
use predicates::prelude::predicate;
use rstest::rstest;
use std::time::{Duration, UNIX_EPOCH};

const OLD_MTIME: i64 = 1_700_000_000;
const NEW_MTIME: i64 = 1_700_086_400;

fn rendered_timestamp(unix_seconds: i64) -> String {
    let local: DateTime<Local> =
        DateTime::from(UNIX_EPOCH + Duration::from_secs(unix_seconds as u64));
    local.format("%Y-%m-%d %H:%M:%S %z").to_string()
}

#[rstest]
fn show_header_with_snapshot_timestamps(
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let old = write_snapshot(
        snapshot_dir.path(),
        &SnapshotSpec::named("old.json", r#"{"a": 1}"#),
    );
    let new = write_snapshot(
        snapshot_dir.path(),
        &SnapshotSpec::named("new.json", r#"{"a": 2}"#),
    );
    filetime::set_file_mtime(&old, FileTime::from_unix_time(OLD_MTIME, 0))?;
    filetime::set_file_mtime(&new, FileTime::from_unix_time(NEW_MTIME, 0))?;

    run_confdiff_command(snapshot_dir.path(), &["old.json", "new.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "--- old.json\t{}",
            rendered_timestamp(OLD_MTIME)
        )))
        .stdout(predicate::str::contains(format!(
            "+++ new.json\t{}",
            rendered_timestamp(NEW_MTIME)
        )));

    Ok(())
}
