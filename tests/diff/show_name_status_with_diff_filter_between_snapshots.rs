use crate::common::command::{run_confdiff_command, snapshot_dir};
use crate::common::file::write_snapshot_pair;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_name_status_with_diff_filter_between_snapshots(
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_snapshot_pair(
        snapshot_dir.path(),
        r#"{"a": 1, "b": 2}"#,
        r#"{"b": 3, "c": 4}"#,
    );

    run_confdiff_command(snapshot_dir.path(), &["old.json", "new.json", "--name-status"])
        .assert()
        .success()
        .stdout("D\ta\nU\tb\nC\tc\n");

    // the filter drops updates but keeps creations and deletions
    run_confdiff_command(
        snapshot_dir.path(),
        &["old.json", "new.json", "--name-status", "--diff-filter", "CD"],
    )
    .assert()
    .success()
    .stdout("D\ta\nC\tc\n");

    Ok(())
}
