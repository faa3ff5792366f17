//! Command-line interface.

pub mod output;
pub mod verify;

use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::constants;

/// credcheck - verify an email and access token against the users table.
#[derive(Parser, Debug)]
#[command(
    name = "credcheck",
    about = "Verify an email and access token against the users table",
    version,
    after_help = "Exit status is 0 when the credentials belong to an active user, 1 otherwise."
)]
pub struct Cli {
    /// Config file with the database connection settings
    #[arg(
        long,
        value_name = "PATH",
        env = constants::CONFIG_ENV,
        default_value = constants::DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// File with the email on line 1 and the access token on line 2
    #[arg(long, value_name = "PATH")]
    pub credentials: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rewrite single-dash long flags (`-config x`, `-credentials=y`) to the
/// double-dash form clap expects.
///
/// Only names that are real long flags are rewritten, so short flags such
/// as `-v` pass through untouched. Everything after `--` is left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut command = Cli::command();
    command.build();
    let longs: Vec<String> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .map(str::to_string)
        .collect();

    let mut passthrough = false;
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split('=').next().unwrap_or(rest);
                    if longs.iter().any(|long| long == name) {
                        OsString::from(format!("-{text}"))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

/// Usage text shown when credcheck is run without arguments.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
