use crate::common::{assert_contains, assert_lines, init_test_logging, run_errno_with_env};

#[test]
fn test_debug_logging_goes_to_stderr_only() {
    init_test_logging();
    crate::test_log!("TEST START: test_debug_logging_goes_to_stderr_only");

    let output = run_errno_with_env(&["2"], &[("ERRNO_LOG", "debug")]);
    assert!(output.succeeded());
    assert_lines(&output.stdout, &["ENOENT 2 No such file or directory"]);
    assert_contains(&output.stderr, "resolved");

    crate::test_log!("TEST PASS: test_debug_logging_goes_to_stderr_only");
}

#[test]
fn test_json_log_format() {
    init_test_logging();

    let output = run_errno_with_env(
        &["enoent"],
        &[("ERRNO_LOG", "debug"), ("ERRNO_LOG_FORMAT", "json")],
    );
    assert!(output.succeeded());
    let first = output.stderr.lines().next().expect("expected log output");
    assert!(first.starts_with('{'), "expected JSON log line, got {first}");
    assert_contains(&output.stderr, "\"level\":\"DEBUG\"");
}

#[test]
fn test_invalid_log_level_keeps_stderr_clean() {
    init_test_logging();

    let output = run_errno_with_env(&["bogus"], &[("ERRNO_LOG", "chatty")]);
    assert_eq!(output.code, Some(1));
    assert_lines(&output.stderr, &["ERROR: Not understood: bogus"]);
}

#[test]
fn test_default_level_is_silent() {
    init_test_logging();

    let output = run_errno_with_env(&["2", "99999"], &[]);
    assert_eq!(output.code, Some(1));
    assert!(output.stderr.is_empty());
}
