use tempfile::tempdir;

use crate::common::{fixture, run_binary, stderr_of, stdout_of};

#[test]
fn help_switch_prints_usage() {
    let temp = tempdir().expect("can create temporary directory");
    for switch in ["-h", "/h", "-?", "/?"] {
        let output = run_binary(temp.path(), &[switch]);
        assert!(output.status.success(), "{switch}: {output:?}");
        assert!(stdout_of(&output).contains("-i, /i"), "{switch}");
    }
}

#[test]
fn print_renders_the_canonical_command_line() {
    let temp = tempdir().expect("can create temporary directory");
    let output = run_binary(
        temp.path(),
        &["--print", "-r", "x.reg", "-a", "-q -v", "-i", "app.exe"],
    );

    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout_of(&output).trim_end(), r#"/i app.exe /a "-q -v" /r x.reg"#);
}

#[test]
fn raw_command_line_is_tokenized() {
    let temp = tempdir().expect("can create temporary directory");
    let output = run_binary(
        temp.path(),
        &["--print", "--command-line", r#"/i "C:\My App\app.exe" /o /r app.reg"#],
    );

    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        stdout_of(&output).trim_end(),
        r#"/i "C:\My App\app.exe" /o /r app.reg"#
    );
}

#[test]
fn rejected_command_line_exits_with_code_two() {
    let temp = tempdir().expect("can create temporary directory");
    let output = run_binary(temp.path(), &["-T", "-o"]);

    assert_eq!(output.status.code(), Some(2), "{output:?}");
    assert!(stderr_of(&output).contains("misplaced"), "{}", stderr_of(&output));
}

#[test]
fn self_test_reports_json_and_succeeds() {
    let temp = tempdir().expect("can create temporary directory");
    let output = run_binary(temp.path(), &["-T"]);

    assert!(output.status.success(), "{output:?}");
    let report: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("stdout is a JSON report");
    assert_eq!(report["failed"], 0);
    assert!(report["passed"].as_u64().unwrap_or_default() > 0);
}

#[test]
fn invalid_config_file_fails_before_parsing() {
    let temp = tempdir().expect("can create temporary directory");
    let config = fixture("tests/fixtures/config_invalid_switch.toml");
    let output = run_binary(
        temp.path(),
        &["--config", config.to_str().expect("utf-8 path"), "-h"],
    );

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert!(
        stderr_of(&output).contains("regedit.silent_switch"),
        "{}",
        stderr_of(&output)
    );
}

#[test]
fn missing_switches_without_profile_names_the_application() {
    let temp = tempdir().expect("can create temporary directory");
    let output = run_binary(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(2), "{output:?}");
    assert!(stderr_of(&output).contains("application file path"));
}
