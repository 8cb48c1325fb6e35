use crate::common::command::{run_confdiff_command, snapshot_dir};
use crate::common::file::write_snapshot_pair;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn filter_changes_by_path_pattern(
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_snapshot_pair(
        snapshot_dir.path(),
        r#"{"a": {"x": 1}, "b": {"x": 1}}"#,
        r#"{"a": {"x": 2}, "b": {"x": 2}}"#,
    );

    run_confdiff_command(
        snapshot_dir.path(),
        &["old.json", "new.json", "--path", r"^a\."],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("update a.x: 1 -> 2"))
    .stdout(predicate::str::contains("b.x").not());

    Ok(())
}
