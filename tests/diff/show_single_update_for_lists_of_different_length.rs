use crate::common::command::{run_confdiff_command, snapshot_dir};
use crate::common::file::write_snapshot_pair;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_single_update_for_lists_of_different_length(
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_snapshot_pair(snapshot_dir.path(), r#"[1, 2]"#, r#"[1, 2, 3]"#);

    // a length mismatch never produces per-index entries
    run_confdiff_command(snapshot_dir.path(), &["old.json", "new.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "update <root>: [1, 2] -> [1, 2, 3]",
        ))
        .stdout(predicate::str::contains("update [0]").not())
        .stdout(predicate::str::contains("update [2]").not());

    Ok(())
}
