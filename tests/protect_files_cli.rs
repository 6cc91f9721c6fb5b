use assert_cmd::Command;
use predicates::str::{contains, is_empty};

fn cmd() -> Command {
    Command::cargo_bin("protect-files").unwrap()
}

fn payload(file_path: &str) -> String {
    format!(r#"{{"tool_input": {{"file_path": "{file_path}"}}}}"#)
}

#[test]
fn empty_stdin_allows() {
    cmd().assert().success().stdout(is_empty()).stderr(is_empty());
}

#[test]
fn malformed_json_allows() {
    cmd()
        .write_stdin("{not json")
        .assert()
        .success()
        .stdout(is_empty())
        .stderr(is_empty());
}

#[test]
fn missing_tool_input_allows() {
    cmd()
        .write_stdin(r#"{"tool_name": "Write"}"#)
        .assert()
        .success()
        .stderr(is_empty());
}

#[test]
fn ordinary_source_file_allows_silently() {
    cmd()
        .write_stdin(payload("src/app.ts"))
        .assert()
        .success()
        .stdout(is_empty())
        .stderr(is_empty());
}

#[test]
fn env_variant_is_blocked() {
    cmd()
        .write_stdin(payload(".env.local"))
        .assert()
        .code(2)
        .stderr(contains("Blocked: Cannot modify protected file: .env.local"));
}

#[test]
fn node_modules_mid_path_is_blocked() {
    cmd()
        .write_stdin(payload("project/node_modules/foo.js"))
        .assert()
        .code(2)
        .stderr(contains(
            "Blocked: Cannot modify protected file: project/node_modules/foo.js",
        ));
}

#[test]
fn git_directory_is_blocked() {
    cmd()
        .write_stdin(payload(".git/config"))
        .assert()
        .code(2)
        .stderr(contains("Blocked: Cannot modify protected file: .git/config"));
}

#[test]
fn lockfile_is_blocked() {
    cmd().write_stdin(payload("bun.lock")).assert().code(2);
}

#[test]
fn deny_diagnostic_goes_to_stderr_not_stdout() {
    cmd()
        .write_stdin(payload(".env"))
        .assert()
        .code(2)
        .stdout(is_empty());
}

#[test]
fn envelope_fields_are_tolerated() {
    cmd()
        .write_stdin(
            r#"{"tool_name": "Edit", "session_id": "s-3", "cwd": "/work", "tool_input": {"file_path": "README.md", "old_string": "a", "new_string": "b"}}"#,
        )
        .assert()
        .success()
        .stderr(is_empty());
}
