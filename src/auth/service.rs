//! Auth collaborator seam.
//!
//! Credential storage and session mechanics belong to the auth backend;
//! the store only needs these three calls.

use std::fmt;

use async_trait::async_trait;

use crate::api::types::{Credentials, User};

/// Errors from the auth backend.
#[derive(Debug)]
pub enum AuthError {
    /// Network-level failure reaching the auth backend.
    Network(String),
    /// The auth backend rejected the request.
    Rejected { status: u16, message: String },
    /// The response body was not the expected shape.
    Parse(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Network(msg) => write!(f, "auth network error: {msg}"),
            AuthError::Rejected { status, message } => {
                write!(f, "auth rejected (HTTP {status}): {message}")
            }
            AuthError::Parse(msg) => write!(f, "auth parse error: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create an account. Returns the new user record.
    async fn register(&self, creds: &Credentials) -> Result<User, AuthError>;

    /// Start a session. Returns the authenticated user record.
    async fn login(&self, creds: &Credentials) -> Result<User, AuthError>;

    /// Invalidate the current session. Returns whether the backend
    /// acknowledged the invalidation; callers treat the flag as advisory.
    async fn logout(&self) -> Result<bool, AuthError>;
}
