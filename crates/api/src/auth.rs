use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user_id: String,
    pub token: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication is not implemented. Integrate an auth provider.")]
    NotImplemented,
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Sign-in and registration backend.
///
/// The login and register pages are placeholders; plug a real provider in
/// here rather than adding logic to the handlers.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;
    async fn register(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Refuses every request with `AuthError::NotImplemented`
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderAuth;

#[async_trait]
impl AuthProvider for PlaceholderAuth {
    async fn sign_in(&self, _credentials: &Credentials) -> Result<Session, AuthError> {
        Err(AuthError::NotImplemented)
    }

    async fn register(&self, _credentials: &Credentials) -> Result<Session, AuthError> {
        Err(AuthError::NotImplemented)
    }
}
