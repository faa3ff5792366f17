//! Constants used throughout credcheck.
//!
//! Centralizes magic strings and configuration values.

use std::time::Duration;

/// Config file used when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "./config.yml";

/// Environment variable overriding the config path.
pub const CONFIG_ENV: &str = "CREDCHECK_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "CREDCHECK_LOG";

/// How long to wait for the database connection to be established.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Lookup for an active user owning the given email and access token.
///
/// `id` is cast so the result decodes the same whether the column is
/// `integer`, `bigint` or `serial`.
pub const CHECK_CREDENTIALS_QUERY: &str = "SELECT id::BIGINT FROM users \
     WHERE email = $1 AND access_token = $2 AND is_active = TRUE";
