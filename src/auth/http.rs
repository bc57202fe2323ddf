//! Default `AuthService` implementation against the backend's `auth/`
//! endpoints. Shares the same base URL and timeout conventions as the
//! board API client.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};

use crate::api::types::{Credentials, User};
use crate::auth::service::{AuthError, AuthService};
use crate::core::config::DEFAULT_TIMEOUT_MS;

pub struct HttpAuthService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAuthService {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(DEFAULT_TIMEOUT_MS))
            .cookie_store(true)
            .build()
            .map_err(|e| AuthError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post_credentials(
        &self,
        path: &str,
        creds: &Credentials,
    ) -> Result<User, AuthError> {
        debug!("POST {}", path);
        let response = self
            .client
            .post(self.url(path))
            .json(creds)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("auth backend error: {} - {}", status, message);
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<User>()
            .await
            .map_err(|e| AuthError::Parse(e.to_string()))
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn register(&self, creds: &Credentials) -> Result<User, AuthError> {
        self.post_credentials("auth/register", creds).await
    }

    async fn login(&self, creds: &Credentials) -> Result<User, AuthError> {
        self.post_credentials("auth/login", creds).await
    }

    async fn logout(&self) -> Result<bool, AuthError> {
        debug!("DELETE auth/logout");
        let response = self
            .client
            .delete(self.url("auth/logout"))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        Ok(response.status().is_success())
    }
}
