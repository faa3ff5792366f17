//! Credential verification against the users table.
//!
//! The lookup sits behind the [`UserStore`] trait so the decision rule in
//! [`verify`] does not depend on a live database. [`Postgres`] is the
//! production store: one connection, one query, closed before returning.

use sqlx::{Connection, PgConnection};
use std::time::Duration;
use tracing::debug;

use crate::core::config::DatabaseConfig;
use crate::core::constants;
use crate::core::credentials::CredentialPair;
use crate::error::{AuthError, DatabaseError, Result};

/// Row identifier of an authenticated user.
pub type UserId = i64;

/// Source of user records.
pub trait UserStore {
    /// Ids of active users whose email and access token match `credentials`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store can't be reached or queried.
    fn find_active_users(&mut self, credentials: &CredentialPair) -> Result<Vec<UserId>>;
}

/// Check `credentials` against `store`.
///
/// Succeeds with the first positive id returned by the lookup.
///
/// # Errors
///
/// Returns `AuthError::AccessDenied` when no active user matches, or the
/// store's error when the lookup itself fails.
pub fn verify<S: UserStore + ?Sized>(
    store: &mut S,
    credentials: &CredentialPair,
) -> Result<UserId> {
    let ids = store.find_active_users(credentials)?;
    debug!(rows = ids.len(), "lookup finished");

    ids.into_iter()
        .find(|id| *id > 0)
        .ok_or_else(|| AuthError::denied(credentials.identifier()).into())
}

/// PostgreSQL-backed user store.
pub struct Postgres<'a> {
    config: &'a DatabaseConfig,
    timeout: Duration,
}

impl<'a> Postgres<'a> {
    pub fn new(config: &'a DatabaseConfig) -> Self {
        Self {
            config,
            timeout: constants::CONNECT_TIMEOUT,
        }
    }

    /// Override the connect timeout.
    #[cfg(test)]
    pub(crate) fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn connect(&self) -> Result<PgConnection> {
        let target = self.config.target();
        debug!(connection = %self.config.describe(), "connecting");

        let options = self.config.connect_options();
        let conn = tokio::time::timeout(self.timeout, PgConnection::connect_with(&options))
            .await
            .map_err(|_| DatabaseError::Timeout {
                target: target.clone(),
                timeout: self.timeout,
            })?
            .map_err(|source| DatabaseError::Connect { target, source })?;

        Ok(conn)
    }

    async fn lookup(&self, credentials: &CredentialPair) -> Result<Vec<UserId>> {
        let mut conn = self.connect().await?;

        let rows = sqlx::query_scalar::<_, UserId>(constants::CHECK_CREDENTIALS_QUERY)
            .bind(credentials.identifier())
            .bind(credentials.token())
            .fetch_all(&mut conn)
            .await;

        // The connection is dropped either way; a failed goodbye is not fatal.
        if let Err(e) = conn.close().await {
            debug!(error = %e, "closing connection failed");
        }

        Ok(rows.map_err(DatabaseError::Query)?)
    }
}

impl UserStore for Postgres<'_> {
    fn find_active_users(&mut self, credentials: &CredentialPair) -> Result<Vec<UserId>> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(DatabaseError::Runtime)?;

        rt.block_on(self.lookup(credentials))
    }
}
