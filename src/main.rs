//! credcheck - verify an email and access token against the users table.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use credcheck::cli::{self, output, verify, Cli};
use credcheck::core::constants;
use credcheck::error::{ConfigError, DatabaseError, Error, ValidationError};

fn main() -> ExitCode {
    let args: Vec<_> = std::env::args_os().collect();
    if args.len() < 2 {
        eprintln!("{}", cli::usage());
        return ExitCode::FAILURE;
    }

    let cli = match Cli::try_parse_from(cli::normalize_args(args)) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("credcheck=debug")
        } else {
            EnvFilter::new("credcheck=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(std::env::var_os("NO_COLOR").is_none())
                .with_writer(std::io::stderr),
        )
        .init();

    match verify::execute(&cli.config, &cli.credentials) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            if let Some(hint) = hint_for(&e) {
                output::hint(&hint);
            }
            ExitCode::FAILURE
        }
    }
}

/// Suggestion printed under an error, when there is an obvious next step.
fn hint_for(e: &Error) -> Option<String> {
    match e {
        Error::Config(ConfigError::NotFound(_)) => {
            Some("pass the config location with --config <path>".to_string())
        }
        Error::Validation(ValidationError::IncompleteCredentials { .. }) => {
            Some("put the email on line 1 and the access token on line 2".to_string())
        }
        Error::Database(DatabaseError::Connect { target, .. })
        | Error::Database(DatabaseError::Timeout { target, .. }) => Some(format!(
            "check host and port for {} in the config file",
            output::path(target)
        )),
        _ => None,
    }
}
