use assert_cmd::Command;
use std::fs;
use std::path::Path;

fn run_in(dir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_issues-summary"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("run issues-summary")
}

fn write_issues(dir: &Path, json: &str) {
    fs::write(dir.join("open_issues.json"), json).expect("write open_issues.json");
}

#[test]
fn prints_documented_scenario() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_issues(
        tmp.path(),
        r#"[{"number": 42, "title": "Crash on startup",
             "labels": [{"name": "bug"}, {"name": "p1"}],
             "type": {"name": "Bug"},
             "body": "App crashes\nimmediately\ron launch."}]"#,
    );

    let output = run_in(tmp.path());
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8 stdout"),
        "#42 [Bug] Crash on startup :: labels=['bug', 'p1']\n    App crashes immediately on launch.\n\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn preserves_order_and_is_repeatable() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_issues(
        tmp.path(),
        r#"[{"number": 3, "title": "third"},
            {"number": 1, "title": "first", "labels": [], "body": "one\r\ntwo"},
            {"number": 2, "title": "second", "type": {}}]"#,
    );

    let first = run_in(tmp.path());
    let second = run_in(tmp.path());
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let text = String::from_utf8(first.stdout).expect("utf8 stdout");
    let headers: Vec<&str> = text.lines().filter(|line| line.starts_with('#')).collect();
    assert_eq!(
        headers,
        vec![
            "#3 [] third :: labels=[]",
            "#1 [] first :: labels=[]",
            "#2 [] second :: labels=[]",
        ]
    );
    assert!(text.contains("\n    one two\n"));
}

#[test]
fn extra_arguments_are_ignored() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_issues(tmp.path(), r#"[{"number": 5, "title": "five"}]"#);

    let output = Command::new(env!("CARGO_BIN_EXE_issues-summary"))
        .current_dir(tmp.path())
        .args(["other.json", "--flag"])
        .output()
        .expect("run issues-summary");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"#5 [] five :: labels=[]\n    \n\n");
}

#[test]
fn missing_input_fails_without_output() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let output = run_in(tmp.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("open_issues.json"));
}

#[test]
fn malformed_input_fails_without_output() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_issues(tmp.path(), r#"{"number": 1, "title": "not a list"}"#);

    let output = run_in(tmp.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_number_aborts_the_run() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_issues(tmp.path(), r#"[{"title": "No number field"}]"#);

    let output = run_in(tmp.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn records_before_a_bad_one_are_still_printed() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_issues(
        tmp.path(),
        r#"[{"number": 1, "title": "ok"},
            {"number": 2, "title": "bad labels", "labels": [{"id": 9}]},
            {"number": 3, "title": "never printed"}]"#,
    );

    let output = run_in(tmp.path());
    assert!(!output.status.success());
    assert_eq!(output.stdout, b"#1 [] ok :: labels=[]\n    \n\n");
}

#[test]
fn non_object_labels_and_type_abort_the_run() {
    for record in [
        r#"[{"number": 1, "title": "t", "labels": [["bug"]]}]"#,
        r#"[{"number": 1, "title": "t", "type": ["Bug"]}]"#,
    ] {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_issues(tmp.path(), record);

        let output = run_in(tmp.path());
        assert!(!output.status.success(), "{record}");
        assert!(output.stdout.is_empty(), "{record}");
    }
}

#[test]
fn null_type_name_prints_none() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_issues(tmp.path(), r#"[{"number": 99, "title": "t", "type": {"name": null}}]"#);

    let output = run_in(tmp.path());
    assert!(output.status.success());
    assert_eq!(output.stdout, b"#99 [None] t :: labels=[]\n    \n\n");
}
