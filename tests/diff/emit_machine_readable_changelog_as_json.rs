use crate::common::command::{run_confdiff_command, snapshot_dir};
use crate::common::file::write_snapshot_pair;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn emit_machine_readable_changelog_as_json(
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_snapshot_pair(
        snapshot_dir.path(),
        r#"{"a": 1}"#,
        r#"{"a": 2, "b": 3}"#,
    );

    let output = run_confdiff_command(
        snapshot_dir.path(),
        &["old.json", "new.json", "--format", "json"],
    )
    .output()?;
    assert!(output.status.success());

    let changelog: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        changelog,
        serde_json::json!([
            {"type": "update", "path": "a", "from": "1", "to": "2"},
            {"type": "create", "path": "b", "from": null, "to": "3"},
        ])
    );

    Ok(())
}
