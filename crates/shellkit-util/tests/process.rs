use shellkit_util::errors::ToolError;
use shellkit_util::process::CommandBuilder;

#[test]
fn test_builder_simple_command() {
    let output = CommandBuilder::new("echo").arg("hello").exec().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "hello");
}

#[test]
fn test_builder_multiple_args() {
    let output = CommandBuilder::new("echo")
        .args(["one", "two", "three"])
        .exec()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "one two three");
}

#[cfg(unix)]
#[test]
fn test_builder_with_cwd() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(tmp.path().join("cwd_test.marker"), "ok").unwrap();

    let stdout = CommandBuilder::new("ls")
        .arg("cwd_test.marker")
        .cwd(tmp.path())
        .exec_stdout()
        .unwrap();
    assert!(stdout.contains("cwd_test.marker"));
}

#[test]
fn test_builder_nonexistent_program() {
    let result = CommandBuilder::new("nonexistent_program_xyz_123").exec();
    assert!(matches!(result, Err(ToolError::Process { .. })));
}

#[cfg(unix)]
#[test]
fn test_exec_stdout_fails_on_nonzero_exit() {
    let result = CommandBuilder::new("sh").args(["-c", "exit 3"]).exec_stdout();
    let err = result.unwrap_err();
    assert!(err.to_string().contains("exited with"), "got: {err}");
}
