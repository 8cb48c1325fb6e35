use crate::common::command::{run_confdiff_command, snapshot_dir};
use crate::common::file::write_snapshot_pair;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_bubbled_updates_for_nested_list_element_change(
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_snapshot_pair(
        snapshot_dir.path(),
        r#"{"l": [[3, 4]]}"#,
        r#"{"l": [[3, 9]]}"#,
    );

    // the innermost change plus one aggregate per enclosing list level,
    // innermost first
    let expected = predicate::str::is_match(
        r"(?s)update l\[0\]\[1\]: 4 -> 9\n.*update l\[0\]: \[3, 4\] -> \[3, 9\]\n.*update l: \[\[3, 4\]\] -> \[\[3, 9\]\]",
    )?;

    run_confdiff_command(snapshot_dir.path(), &["old.json", "new.json"])
        .assert()
        .success()
        .stdout(expected);

    Ok(())
}
