use crate::common::command::{run_confdiff_command, snapshot_dir};
use crate::common::file::write_snapshot_pair;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn interpret_type_keywords_as_constraints_with_types_flag(
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_snapshot_pair(
        snapshot_dir.path(),
        r#"{"port": "int"}"#,
        r#"{"port": "string"}"#,
    );

    // with interpretation the sides are type constraints and render as
    // bare keywords
    run_confdiff_command(
        snapshot_dir.path(),
        &["old.json", "new.json", "--profile", "schema", "--types"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("update port: int -> string"));

    // without it they stay ordinary string scalars
    run_confdiff_command(
        snapshot_dir.path(),
        &["old.json", "new.json", "--profile", "schema"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains(
        r#"update port: "int" -> "string""#,
    ));

    Ok(())
}
