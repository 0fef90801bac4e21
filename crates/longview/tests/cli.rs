use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn longview() -> Command {
    let mut cmd = Command::cargo_bin("longview").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_match_prints_values() {
    longview()
        .args(["/{foo}/{bar}", "/one/two"])
        .assert()
        .success()
        .stdout("✓ /one/two\n    bar = two\n    foo = one\n");
}

#[test]
fn test_no_match_exits_with_one() {
    longview()
        .args(["#+#", "#foo#", "#a-b#"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✓ #foo#"))
        .stdout(predicate::str::contains("✗ #a-b#"));
}

#[test]
fn test_validator_flag() {
    longview()
        .args(["#{foo}#{bar}#", "-r", r"foo=\d+", "#1234abcd#5678#"])
        .assert()
        .code(1)
        .stdout("✗ #1234abcd#5678#\n");
}

#[test]
fn test_default_flag_json() {
    longview()
        .args(["#{foo}#", "-r", r"foo=\d+", "-d", "foo=5678", "--json", "##"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""foo":"5678""#))
        .stdout(predicate::str::contains(r#""matched":true"#));
}

#[test]
fn test_subjects_from_stdin() {
    longview()
        .args(["{foo}.txt", "--quiet"])
        .write_stdin("a.txt\nb.txt\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_subjects_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "v1.2").unwrap();
    writeln!(file, "version").unwrap();

    longview()
        .args(["v{major}.{minor}", "-r", r"major=\d+", "-f"])
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("    major = 1"))
        .stdout(predicate::str::contains("✗ version"));
}

#[test]
fn test_missing_file() {
    longview()
        .args(["{foo}", "-f", "/nonexistent/longview-subjects.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read subjects"));
}

#[test]
fn test_show_regex() {
    longview()
        .args([r"\{x}/{name}/*", "-d", "name=n", "--show-regex"])
        .assert()
        .success()
        .stdout("(?s)^\\{x\\}/(?P<name>.*?)?/.+?$\n");
}

#[test]
fn test_duplicate_placeholder_is_an_error() {
    longview()
        .args(["{foo}-{foo}", "a-b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("appears more than once"));
}

#[test]
fn test_invalid_assignment_is_a_usage_error() {
    longview()
        .args(["{foo}", "-d", "foo", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("NAME=VALUE"));
}
