//! svn-color-filter - colorize `svn status` style output by status marker

mod color;
mod config;
mod error;
mod filter;

use clap::Parser;
use config::Config;
use std::env;
use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::process::ExitCode;

/// Env var holding the log filter (off unless set)
const LOG_VAR: &str = "SVN_COLOR_LOG";

#[derive(Parser)]
#[command(name = "svn-color-filter")]
#[command(about = "Colorize svn status output read from stdin")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Subcommand the output came from (status, st, add, ...)
    #[arg(allow_hyphen_values = true)]
    subcommand: Option<OsString>,

    /// Remaining svn arguments, ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    args: Vec<OsString>,
}

impl Cli {
    /// Parse with the first raw argument always taken as the subcommand
    fn parse_raw(args: impl IntoIterator<Item = OsString>) -> Self {
        let mut args: Vec<OsString> = args.into_iter().collect();
        // clap swallows a leading `--` as end-of-options; escape it
        if args.get(1).is_some_and(|arg| arg == "--") {
            args.insert(1, OsString::from("--"));
        }
        Self::parse_from(args)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_VAR, "off")).init();

    let cli = Cli::parse_raw(env::args_os());
    let subcommand = cli.subcommand.unwrap_or_default();
    // Non-UTF-8 names can't match any colorized subcommand
    let subcommand = subcommand.to_string_lossy();
    let config = Config::from_env();
    let mode = config.mode_for(&subcommand);
    log::debug!(
        "subcommand {subcommand:?} ({} ignored args): {mode:?}",
        cli.args.len()
    );

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    match filter::run(mode, stdin, stdout) {
        Ok(stats) => {
            log::debug!("{} lines, {} colorized", stats.lines, stats.colorized);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
