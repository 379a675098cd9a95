use std::{io, path::Path};

use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Debug, TypedBuilder, Serialize, Deserialize)]
pub struct Credentials {
    pub username: UserName,
    pub password: Password,
}

#[derive(Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct UserName(String);

/// Never printed: `Debug` is redacted and there is no `Display`.
#[derive(From, AsRef, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct Password(String);
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("Credentials file was not found.")]
    NotFound,
    #[error("An I/O error occurred when loading the credentials: {0:?}")]
    IOError(io::Error),
    #[error("The credentials file must contain a user name line and a password line.")]
    Incomplete,
}
impl From<io::Error> for CredentialsError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::IOError(e),
        }
    }
}

impl Credentials {
    /// Reads a two-line file: user name, then password.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CredentialsError> {
        Self::parse(&fs_err::read_to_string(path.as_ref())?)
    }

    pub fn parse(text: &str) -> Result<Self, CredentialsError> {
        let mut lines = text.lines().map(str::trim);
        match (lines.next(), lines.next()) {
            (Some(username), Some(password)) if !username.is_empty() => Ok(Self {
                username: username.to_owned().into(),
                password: password.to_owned().into(),
            }),
            _ => Err(CredentialsError::Incomplete),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Credentials, CredentialsError};

    #[test]
    fn test_parse_two_lines() {
        let credentials = Credentials::parse("runner@example.com\nhunter2\n").unwrap();
        let username: &str = credentials.username.as_ref();
        let password: &str = credentials.password.as_ref();
        assert_eq!(username, "runner@example.com");
        assert_eq!(password, "hunter2");
        assert_eq!(format!("{:?}", credentials.password), "Password(***)");
    }

    #[test]
    fn test_parse_incomplete() {
        assert!(matches!(
            Credentials::parse("only-a-name"),
            Err(CredentialsError::Incomplete)
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Credentials::load(dir.path().join("login.txt")),
            Err(CredentialsError::NotFound)
        ));
    }
}
