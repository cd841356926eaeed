use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while verifying credentials.
#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("Invalid username or password.")]
    InvalidCredentials,
}

/// Credential check used by the login view.
///
/// The application never decides on its own who may log in; it asks whatever
/// implementation was injected at startup.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> Result<(), AuthError>;
}

/// Accepts exactly one username/password pair, taken from the config file.
#[derive(Debug, Clone)]
pub struct CredentialsAuthenticator {
    username: String,
    password: String,
}

impl CredentialsAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[async_trait]
impl Authenticator for CredentialsAuthenticator {
    async fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username == self.username && password == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Dev mode: any non-blank username is let in.
#[derive(Debug, Clone, Default)]
pub struct DevAuthenticator;

#[async_trait]
impl Authenticator for DevAuthenticator {
    async fn verify(&self, username: &str, _password: &str) -> Result<(), AuthError> {
        if username.trim().is_empty() {
            Err(AuthError::InvalidCredentials)
        } else {
            Ok(())
        }
    }
}
