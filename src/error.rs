//! Error types for credcheck.
//!
//! Each stage of the pipeline has its own error enum; all of them fold
//! into [`Error`] so the entry point can report and map them uniformly.

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl Error {
    /// True when the request was well formed but the credentials were rejected.
    ///
    /// Everything else is an input or infrastructure failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Error::Auth(_))
    }
}

/// Config file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("invalid config: {field} {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Credentials file errors.
#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("credentials file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read credentials file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("credentials file must contain an identifier and a token on two lines, found {found} line(s)")]
    IncompleteCredentials { found: usize },

    #[error("credentials file has an empty {0}")]
    EmptyField(&'static str),
}

/// Database (infrastructure) errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("failed to start database runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("failed to connect to {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("timed out connecting to {target} after {}s", .timeout.as_secs())]
    Timeout { target: String, timeout: Duration },

    #[error("credential lookup failed: {0}")]
    Query(#[source] sqlx::Error),
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("access denied: {identifier}")]
    AccessDenied {
        identifier: String,
        at: DateTime<Utc>,
    },
}

impl AuthError {
    /// Denial for `identifier`, stamped with the current time.
    pub fn denied(identifier: impl Into<String>) -> Self {
        AuthError::AccessDenied {
            identifier: identifier.into(),
            at: Utc::now(),
        }
    }

    /// The identifier that was rejected.
    pub fn identifier(&self) -> &str {
        match self {
            AuthError::AccessDenied { identifier, .. } => identifier,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
