use assert_cmd::Command;
use std::fs;

#[test]
fn fix_command_rewrites_files_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("messy.py"), "x = 1   \n").unwrap();

    let assert = Command::cargo_bin("codemend")
        .unwrap()
        .current_dir(dir.path())
        .args(["fix", "--skip-artifacts"])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("messy.py"));
    assert_eq!(
        fs::read_to_string(dir.path().join("messy.py")).unwrap(),
        "x = 1\n"
    );
}

#[test]
fn json_format_emits_a_parseable_report() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("messy.py"), "x = 1   \n").unwrap();

    let assert = Command::cargo_bin("codemend")
        .unwrap()
        .current_dir(dir.path())
        .args(["fix", "--format", "json", "--skip-artifacts"])
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let passes = report["passes"].as_array().unwrap();
    assert_eq!(passes.len(), 10);
    assert_eq!(passes[0]["name"], "whitespace");
}

#[test]
fn per_file_errors_do_not_fail_the_process() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("binary.py"), [0xffu8, 0xfe, 0x00]).unwrap();

    Command::cargo_bin("codemend")
        .unwrap()
        .current_dir(dir.path())
        .args(["fix", "--skip-artifacts"])
        .assert()
        .success();
}

#[test]
fn artifacts_land_at_the_working_root() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("codemend")
        .unwrap()
        .current_dir(dir.path())
        .arg("fix")
        .assert()
        .success();

    assert!(dir.path().join("pyproject.toml").is_file());
    assert!(dir.path().join(".flake8").is_file());
    assert!(dir.path().join("Makefile").is_file());
    assert!(dir.path().join("security_config.ini").is_file());
}
