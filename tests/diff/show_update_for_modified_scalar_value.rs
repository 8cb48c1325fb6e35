use crate::common::command::{run_confdiff_command, snapshot_dir};
use crate::common::file::write_snapshot_pair;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_update_for_modified_scalar_value(
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_snapshot_pair(snapshot_dir.path(), r#""foo""#, r#""bar""#);

    run_confdiff_command(snapshot_dir.path(), &["old.json", "new.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"update <root>: "foo" -> "bar""#,
        ));

    Ok(())
}
