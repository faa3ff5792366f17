//! credcheck - verify an email and access token against a PostgreSQL users table.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Flag parsing (accepts -flag and --flag)
//! │   ├── output        # Terminal output helpers
//! │   └── verify        # The config -> credentials -> lookup pipeline
//! └── core/             # Core library components
//!     ├── config        # Database connection config (YAML or TOML)
//!     ├── constants     # Defaults, env var names, the lookup query
//!     ├── credentials   # Two-line credentials file reader
//!     └── verifier      # UserStore trait, Postgres store, decision rule
//! ```
//!
//! Every failure is an [`error::Error`]; the binary reports it and exits
//! with status 1. Access denial is distinguishable through
//! [`error::Error::is_auth_failure`].

pub mod cli;
pub mod core;
pub mod error;
