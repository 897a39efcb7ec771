use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info, instrument};

use super::errors::{AuthError, ClientResult};
use super::traits::AuthBackend;
use super::types::{
    CheckUserRequest, CheckUserResponse, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse,
};
use crate::services::config::get_auth_config;

/// HTTP client for the authentication endpoints.
///
/// All three endpoints speak JSON over POST. Server rejections come back as
/// JSON bodies (often on error statuses), so error statuses are reparsed into
/// the typed response before giving up; only transport failures and
/// unreadable bodies become errors.
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client pointed at the configured API root.
    pub fn new() -> Self {
        Self::with_base_url(&get_auth_config().api.base_url)
    }

    /// Create a client pointed at a specific API root.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http_client: Client::builder()
                .user_agent("eduforall-web/1.0")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AuthBackend for ApiClient {
    #[instrument(skip(self, request), err)]
    async fn check_user(&self, request: &CheckUserRequest) -> ClientResult<CheckUserResponse> {
        info!(
            "Checking for {} account with email: {}",
            request.role.as_str(),
            request.email
        );

        let url = format!("{}/check-user/", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| AuthError::Network {
                message: format!("Failed to call check-user: {}", e),
            })?;

        if response.status().is_success() {
            response.json().await.map_err(|e| AuthError::Network {
                message: format!("Failed to parse check-user response: {}", e),
            })
        } else {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {}", e));

            error!("check-user failed with status {}: {}", status, error_text);

            Ok(serde_json::from_str(&error_text)?)
        }
    }

    #[instrument(skip(self, request), err)]
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        info!("Attempting login for email: {}", request.email);

        let url = format!("{}/login/", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| AuthError::Network {
                message: format!("Failed to call login: {}", e),
            })?;

        if response.status().is_success() {
            response.json().await.map_err(|e| AuthError::Network {
                message: format!("Failed to parse login response: {}", e),
            })
        } else {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {}", e));

            error!("login failed with status {}: {}", status, error_text);

            Ok(serde_json::from_str(&error_text)?)
        }
    }

    #[instrument(skip(self, request), err)]
    async fn register(&self, request: &RegisterRequest) -> ClientResult<RegisterResponse> {
        info!(
            "Registering {} account for email: {}",
            request.role.as_str(),
            request.email
        );

        let url = format!("{}/register/", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| AuthError::Network {
                message: format!("Failed to call register: {}", e),
            })?;

        if response.status().is_success() {
            response.json().await.map_err(|e| AuthError::Network {
                message: format!("Failed to parse register response: {}", e),
            })
        } else {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {}", e));

            error!("register failed with status {}: {}", status, error_text);

            Ok(serde_json::from_str(&error_text)?)
        }
    }
}
