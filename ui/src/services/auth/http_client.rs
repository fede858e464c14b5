use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info, instrument};

use super::{AuthError, AuthResult, AuthService};
use crate::features::sign_up::SignUpRequest;
use crate::services::config::SignUpConfig;

/// Error body returned by the sign-up endpoint
#[derive(Deserialize, Debug, Default)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// [`AuthService`] backed by a JSON sign-up endpoint
#[derive(Clone, Debug)]
pub struct HttpAuthService {
    http_client: reqwest::Client,
    sign_up_url: String,
}

impl HttpAuthService {
    pub fn new(sign_up_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            sign_up_url: sign_up_url.into(),
        }
    }

    pub fn from_config(config: &SignUpConfig) -> Self {
        Self::new(config.sign_up_url())
    }

    pub fn sign_up_url(&self) -> &str {
        &self.sign_up_url
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    #[instrument(skip(self, request), fields(email = %request.email), err)]
    async fn create_account(&self, request: &SignUpRequest) -> AuthResult<()> {
        info!("Creating account at {}", self.sign_up_url);

        let response = self
            .http_client
            .post(&self.sign_up_url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = if status.is_success() {
            String::new()
        } else {
            response.text().await.unwrap_or_default()
        };

        match outcome_from_response(status.as_u16(), &body) {
            Ok(()) => {
                info!("Account created");
                Ok(())
            }
            Err(e) => {
                error!("Sign up rejected with status {}", status.as_u16());
                Err(e)
            }
        }
    }
}

/// Any 2xx status creates the account; everything else is a rejection
fn outcome_from_response(status: u16, body: &str) -> AuthResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(rejection_from_body(status, body))
    }
}

/// Builds the error for a non-2xx response, preferring the server's own message
fn rejection_from_body(status: u16, body: &str) -> AuthError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .or(parsed.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Sign up failed with status {}", status));
    AuthError::Rejected { message }
}
