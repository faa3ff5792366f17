//! The verify pipeline: config, credentials, lookup.

use std::path::Path;
use tracing::info;

use crate::cli::output;
use crate::core::config::DatabaseConfig;
use crate::core::credentials;
use crate::core::verifier::{self, Postgres, UserId, UserStore};
use crate::error::Result;

/// Load both input files and check the credentials against the database.
///
/// The config is loaded first so a missing or broken config never reaches
/// the database.
///
/// # Errors
///
/// Returns the first failure: config, credentials file, database, or
/// `AuthError::AccessDenied` when no active user matches.
pub fn execute(config_path: &Path, credentials_path: &Path) -> Result<UserId> {
    let config = DatabaseConfig::load(config_path)?;
    execute_with(&mut Postgres::new(&config), credentials_path)
}

/// Read the credentials file and check it against `store`.
///
/// # Errors
///
/// Returns a credentials or validation error, the store's error, or
/// `AuthError::AccessDenied` when no active user matches.
pub fn execute_with<S: UserStore + ?Sized>(
    store: &mut S,
    credentials_path: &Path,
) -> Result<UserId> {
    let credentials = credentials::load(credentials_path)?;
    let id = verifier::verify(store, &credentials)?;

    info!(identifier = %credentials.identifier(), user_id = id, "authenticated");
    output::success(&format!("authenticated {}", credentials.identifier()));

    Ok(id)
}
