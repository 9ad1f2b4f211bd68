//! errno - look up errno names, codes and descriptions.
//!
//! Each argument is either an errno name (`ENOENT`, any case) or a numeric
//! code (`2`). Resolved arguments print `<name> <code> <description>` on
//! stdout; arguments that are neither print `ERROR: Not understood: <arg>` on
//! stderr. The exit status is 0 only if every argument resolved.

#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use errno_common::{ErrnoTable, LogConfig, Reporter, exit_code, init_logging};
use tracing::debug;

#[derive(Parser)]
#[command(name = "errno", about = "Look up errno names, codes and descriptions")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Errno names (e.g. ENOENT) or numeric codes (e.g. 2)
    #[arg(value_name = "TOKEN", num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    tokens: Vec<OsString>,
}

/// Parse the command line into the tokens to look up.
///
/// clap treats a leading `--` as the end of options and drops it. The tool
/// has no options, so the escape is put back and looked up like any token.
fn parse_tokens(args: Vec<OsString>) -> Result<Vec<OsString>, clap::Error> {
    let leading_escape = args.get(1).is_some_and(|arg| arg == "--");
    let mut tokens = Cli::try_parse_from(&args)?.tokens;
    if leading_escape {
        tokens.insert(0, OsString::from("--"));
    }
    Ok(tokens)
}

fn main() -> Result<ExitCode> {
    let tokens = parse_tokens(std::env::args_os().collect()).unwrap_or_else(|e| e.exit());

    let log_config = LogConfig::from_env("off");
    init_logging(&log_config).context("failed to initialize logging")?;

    debug!(count = tokens.len(), "processing tokens");

    let table = ErrnoTable::platform();
    let mut reporter = Reporter::new(table, io::stdout().lock(), io::stderr().lock());
    reporter
        .process_all(&tokens)
        .context("failed to write lookup results")?;

    let failed = reporter.failed();
    debug!(failed, "done");
    Ok(ExitCode::from(exit_code(failed)))
}
