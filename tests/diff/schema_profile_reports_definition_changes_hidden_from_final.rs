use crate::common::command::{run_confdiff_command, snapshot_dir};
use crate::common::file::write_snapshot_pair;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn schema_profile_reports_definition_changes_hidden_from_final(
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_snapshot_pair(
        snapshot_dir.path(),
        r##"{"#Limit": 10, "a": 1}"##,
        r##"{"#Limit": 20, "a": 1}"##,
    );

    run_confdiff_command(
        snapshot_dir.path(),
        &["old.json", "new.json", "--profile", "schema"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("update #Limit: 10 -> 20"));

    // the final profile ignores definitions entirely
    run_confdiff_command(snapshot_dir.path(), &["old.json", "new.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}
