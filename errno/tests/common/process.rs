use std::ffi::OsStr;
use std::process::{Command, Output};

pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl RunOutput {
    pub fn succeeded(&self) -> bool {
        self.code == Some(0)
    }
}

fn errno_command<S: AsRef<OsStr>>(args: &[S]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_errno"));
    command.args(args).env_remove("ERRNO_LOG").env_remove("ERRNO_LOG_FORMAT");
    command
}

pub fn run_errno(args: &[&str]) -> RunOutput {
    run_errno_with_env(args, &[])
}

pub fn run_errno_with_env(args: &[&str], env: &[(&str, &str)]) -> RunOutput {
    crate::test_log!("RUN: errno {:?}", args);

    let mut command = errno_command(args);
    for (key, value) in env {
        command.env(key, value);
    }
    let output = command.output().expect("Failed to run errno");

    RunOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        code: output.status.code(),
    }
}

/// Run with arbitrary OS arguments and keep the raw output bytes.
pub fn run_errno_os(args: &[&OsStr]) -> Output {
    crate::test_log!("RUN: errno {:?}", args);

    errno_command(args).output().expect("Failed to run errno")
}
