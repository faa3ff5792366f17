//! Core library components.
//!
//! Config loading, credentials reading and the verification logic,
//! independent of the command-line front end.

pub mod config;
pub mod constants;
pub mod credentials;
pub mod verifier;
