use assert_cmd::Command;
use predicates::prelude::*;

fn write_fixture(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("describes.json");
    std::fs::write(&path, orgmirror_testing::fixtures::describe_file_json()).unwrap();
    path
}

#[test]
fn normalize_emits_canonical_schema_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir);

    Command::cargo_bin("orgmirror")
        .unwrap()
        .args(["normalize", "--format", "json"])
        .arg(&input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"Account\"")
                .and(predicate::str::contains("\"picklist\""))
                .and(predicate::str::contains("\"Tech\""))
                .and(predicate::str::contains("\"User\"")),
        );
}

#[test]
fn normalize_plain_output_lists_objects_and_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir);

    Command::cargo_bin("orgmirror")
        .unwrap()
        .arg("normalize")
        .arg(&input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Account")
                .and(predicate::str::contains("Industry"))
                .and(predicate::str::contains("-> User | Group")),
        );
}

#[test]
fn normalize_fails_on_missing_file() {
    Command::cargo_bin("orgmirror")
        .unwrap()
        .args(["normalize", "/no/such/file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn inspect_summarizes_type_tags() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir);

    Command::cargo_bin("orgmirror")
        .unwrap()
        .args(["inspect", "--format", "json"])
        .arg(&input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"fieldCount\": 2")
                .and(predicate::str::contains("\"reference\": 1")),
        );
}
