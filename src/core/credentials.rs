//! Credentials file reading.
//!
//! The credentials file is plain text: the identifier (an email address)
//! on the first line and the access token on the second. Anything after
//! the second line is ignored. Values are used exactly as read, minus the
//! line terminator.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{CredentialsError, Error, Result, ValidationError};

/// An identifier/token pair to verify.
pub struct CredentialPair {
    identifier: String,
    token: Zeroizing<String>,
}

impl CredentialPair {
    /// Build a pair from the first two lines of a credentials file.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::IncompleteCredentials` if fewer than two
    /// lines are present, or `ValidationError::EmptyField` if either line
    /// is empty.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let (identifier, token) = match lines {
            [identifier, token, ..] => (identifier.as_ref(), token.as_ref()),
            _ => {
                return Err(ValidationError::IncompleteCredentials { found: lines.len() }.into())
            }
        };

        if identifier.is_empty() {
            return Err(ValidationError::EmptyField("identifier").into());
        }
        if token.is_empty() {
            return Err(ValidationError::EmptyField("token").into());
        }

        Ok(Self {
            identifier: identifier.to_string(),
            token: Zeroizing::new(token.to_string()),
        })
    }

    /// The email address to look up.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The access token to compare.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("identifier", &self.identifier)
            .field("token", &"***")
            .finish()
    }
}

/// Read every line of the credentials file at `path`.
///
/// # Errors
///
/// Returns `CredentialsError::NotFound` if the file doesn't exist and
/// `CredentialsError::ReadFile` if it can't be opened or read.
pub fn read_lines(path: &Path) -> Result<Vec<Zeroizing<String>>> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CredentialsError::NotFound(path.to_path_buf())
        } else {
            CredentialsError::ReadFile {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    BufReader::new(file)
        .lines()
        .map(|line| {
            line.map(Zeroizing::new).map_err(|source| {
                Error::from(CredentialsError::ReadFile {
                    path: path.to_path_buf(),
                    source,
                })
            })
        })
        .collect()
}

/// Read the credentials file at `path` into a [`CredentialPair`].
///
/// # Errors
///
/// Returns a `CredentialsError` if the file can't be read, or a
/// `ValidationError` if it doesn't hold a usable pair.
pub fn load(path: &Path) -> Result<CredentialPair> {
    debug!(path = %path.display(), "reading credentials");

    let lines = read_lines(path)?;
    let lines: Vec<&str> = lines.iter().map(|l| l.as_str()).collect();
    let pair = CredentialPair::from_lines(&lines[..])?;

    if lines.len() > 2 {
        debug!(extra = lines.len() - 2, "ignoring lines after the token");
    }
    debug!(identifier = %pair.identifier(), "credentials read");

    Ok(pair)
}
