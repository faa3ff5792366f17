//! Database connection configuration.
//!
//! Handles reading and validating the config file (`./config.yml` by
//! default) that tells credcheck where the users table lives.

use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::fmt;
use std::path::Path;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Connection settings loaded from the config file.
#[derive(Deserialize)]
pub struct DatabaseConfig {
    /// Database server host name or address
    pub host: String,
    /// Database server port
    pub port: u16,
    /// Role used to run the lookup
    pub username: String,
    /// Password for `username`
    pub password: Zeroizing<String>,
    /// Database holding the `users` table
    pub database: String,
    /// Request TLS for the connection
    #[serde(default)]
    pub use_ssl: bool,
}

/// On-disk formats accepted for the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Toml,
}

impl Format {
    /// Pick the format from the file extension. Anything that is not
    /// `.toml` is read as YAML.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }
}

impl DatabaseConfig {
    /// Load and validate the config at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::ReadFile` if it can't be read, `ConfigError::Parse`
    /// if it is malformed and `ConfigError::Invalid` if a field is unusable.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&contents, Format::detect(path)).map_err(|reason| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                reason,
            }
        })?;
        config.validate()?;

        debug!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            use_ssl = config.use_ssl,
            "config loaded"
        );

        Ok(config)
    }

    /// Parse config text in the given format.
    pub fn parse(contents: &str, format: Format) -> std::result::Result<Self, String> {
        match format {
            Format::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            Format::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    /// Check that every field needed to connect is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("host", &self.host),
            ("username", &self.username),
            ("database", &self.database),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
        }

        if self.port == 0 {
            return Err(ConfigError::Invalid {
                field: "port",
                reason: "must be between 1 and 65535".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// TLS mode derived from `use_ssl`.
    ///
    /// Earlier releases always connected with `sslmode=disable`; `use_ssl: true`
    /// now requires TLS.
    pub fn ssl_mode(&self) -> PgSslMode {
        if self.use_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Disable
        }
    }

    /// Driver options for a single connection.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(self.ssl_mode())
            .application_name(env!("CARGO_PKG_NAME"))
    }

    /// Short `host:port/database` label for log lines and errors.
    pub fn target(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.database)
    }

    /// libpq-style connection description with the password redacted.
    pub fn describe(&self) -> String {
        let sslmode = match self.ssl_mode() {
            PgSslMode::Require => "require",
            _ => "disable",
        };
        format!(
            "user={} password=*** host={} port={} dbname={} connect_timeout={} sslmode={}",
            self.username,
            self.host,
            self.port,
            self.database,
            constants::CONNECT_TIMEOUT.as_secs(),
            sslmode
        )
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("database", &self.database)
            .field("use_ssl", &self.use_ssl)
            .finish()
    }
}
