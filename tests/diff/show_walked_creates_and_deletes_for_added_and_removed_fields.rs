use crate::common::command::{run_confdiff_command, snapshot_dir};
use crate::common::file::write_snapshot_pair;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_walked_creates_and_deletes_for_added_and_removed_fields(
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_snapshot_pair(
        snapshot_dir.path(),
        r#"{"a": 1, "s": {"x": 1, "y": {"z": 2}}}"#,
        r#"{"a": 1, "t": 5}"#,
    );

    // removing a struct walks the whole subtree: one delete per node
    run_confdiff_command(snapshot_dir.path(), &["old.json", "new.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "delete s: {x: 1, y: {z: 2}} -> <nil>",
        ))
        .stdout(predicate::str::contains("delete s.x: 1 -> <nil>"))
        .stdout(predicate::str::contains("delete s.y: {z: 2} -> <nil>"))
        .stdout(predicate::str::contains("delete s.y.z: 2 -> <nil>"))
        .stdout(predicate::str::contains("create t: <nil> -> 5"));

    Ok(())
}
