use crate::common::command::{run_confdiff_command, snapshot_dir};
use crate::common::file::write_snapshot_pair;
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use predicates::prelude::predicate;
use rstest::rstest;

fn random_snapshot() -> String {
    let mut root = serde_json::Map::new();
    for _ in 0..6 {
        let mut nested = serde_json::Map::new();
        nested.insert(
            Word().fake::<String>(),
            serde_json::json!(Words(2..5).fake::<Vec<String>>()),
        );
        root.insert(Word().fake::<String>(), serde_json::Value::Object(nested));
    }
    serde_json::Value::Object(root).to_string()
}

#[rstest]
fn reflexive_diff_of_random_snapshot_prints_nothing(
    snapshot_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = random_snapshot();
    write_snapshot_pair(snapshot_dir.path(), &snapshot, &snapshot);

    for profile in ["schema", "final"] {
        run_confdiff_command(
            snapshot_dir.path(),
            &["old.json", "new.json", "--profile", profile],
        )
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    }

    Ok(())
}
