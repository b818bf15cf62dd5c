//! Authentication against the hosted identity service.
//!
//! Password-grant sign-in, sign-up, and sign-out. Provider error messages
//! pass through verbatim except for plain connectivity failures, which are
//! mapped to a guidance string naming the configured endpoint. Sign-out is
//! raced against a fixed timeout; the caller force-clears the local session
//! whenever the race is lost.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;

use crate::config::BackendConfig;
use crate::error::{BackendError, Result};

/// How long a remote sign-out may take before the session is cleared
/// locally anyway.
pub const SIGN_OUT_TIMEOUT: Duration = Duration::from_secs(8);

/// Opaque credential obtained from the identity service.
///
/// Presence of a session gates all authenticated views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer token for subsequent row queries.
    pub access_token: String,
    /// Email of the signed-in user, used in guidance strings.
    pub email: String,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Client for the identity endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AuthClient {
    /// Build a client from validated configuration.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(config.api_key())
            .map_err(|e| BackendError::Config(format!("API key is not a valid header: {e}")))?;
        headers.insert("apikey", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| BackendError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.endpoint(),
        })
    }

    /// Sign in with email and password.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.endpoint);
        self.authenticate(&url, email, password).await
    }

    /// Create an account. The provider signs the user in when no email
    /// confirmation is required, so this also yields a session.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}/auth/v1/signup", self.endpoint);
        self.authenticate(&url, email, password).await
    }

    /// Revoke the session remotely.
    ///
    /// Most callers want [`sign_out_with_timeout`] instead.
    pub async fn sign_out(&self, session: &Session) -> Result<()> {
        let url = format!("{}/auth/v1/logout", self.endpoint);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&session.access_token)
            .send()
            .await
            .map_err(|e| self.map_network_error(&e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body: Value = response.json().await.unwrap_or_default();
        Err(BackendError::Auth(provider_message(&body, status)))
    }

    async fn authenticate(&self, url: &str, email: &str, password: &str) -> Result<Session> {
        tracing::debug!(%url, %email, "authenticating");

        let response = self
            .http
            .post(url)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|e| self.map_network_error(&e))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(BackendError::Auth(provider_message(&body, status)));
        }

        let access_token = body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                BackendError::Auth("Identity service returned no access token.".to_string())
            })?;
        let email = body
            .pointer("/user/email")
            .and_then(Value::as_str)
            .unwrap_or(email);

        Ok(Session {
            access_token: access_token.to_string(),
            email: email.to_string(),
        })
    }

    /// Map a transport failure to a guidance string naming the endpoint.
    fn map_network_error(&self, err: &reqwest::Error) -> BackendError {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            BackendError::Auth(format!(
                "Could not reach {}. Check the backend URL and your network connection.",
                self.endpoint
            ))
        } else {
            BackendError::Network(err.to_string())
        }
    }
}

/// Race a remote sign-out against [`SIGN_OUT_TIMEOUT`].
///
/// On failure or timeout the error is returned so the caller can force a
/// local-only session clear; the UI must end up signed out regardless of
/// network health.
pub async fn sign_out_with_timeout(client: &AuthClient, session: &Session) -> Result<()> {
    race_sign_out(client.sign_out(session)).await
}

async fn race_sign_out<F>(remote: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    match tokio::time::timeout(SIGN_OUT_TIMEOUT, remote).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!("remote sign-out did not settle in time");
            Err(BackendError::Timeout {
                operation: "sign-out".to_string(),
                seconds: SIGN_OUT_TIMEOUT.as_secs(),
            })
        }
    }
}

/// Best-effort extraction of the provider's human-readable error message.
fn provider_message(body: &Value, status: StatusCode) -> String {
    for key in ["error_description", "msg", "message", "error"] {
        if let Some(message) = body.get(key).and_then(Value::as_str)
            && !message.is_empty()
        {
            return message.to_string();
        }
    }
    format!("Authentication failed (HTTP {status}).")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn provider_message_prefers_error_description() {
        let body = json!({"error": "invalid_grant", "error_description": "Invalid login credentials"});
        assert_eq!(
            provider_message(&body, StatusCode::BAD_REQUEST),
            "Invalid login credentials"
        );
    }

    #[test]
    fn provider_message_falls_back_to_msg_then_error() {
        let body = json!({"msg": "User already registered"});
        assert_eq!(
            provider_message(&body, StatusCode::UNPROCESSABLE_ENTITY),
            "User already registered"
        );
        let body = json!({"error": "server_error"});
        assert_eq!(
            provider_message(&body, StatusCode::INTERNAL_SERVER_ERROR),
            "server_error"
        );
    }

    #[test]
    fn empty_body_yields_a_status_message() {
        let body = json!({});
        assert!(provider_message(&body, StatusCode::BAD_GATEWAY).contains("502"));
    }

    #[tokio::test(start_paused = true)]
    async fn sign_out_race_reports_a_timeout() {
        // A remote that never settles loses the 8 s race.
        let result = race_sign_out(std::future::pending()).await;
        assert_eq!(
            result,
            Err(BackendError::Timeout {
                operation: "sign-out".to_string(),
                seconds: 8,
            })
        );
    }

    #[tokio::test]
    async fn sign_out_race_passes_prompt_results_through() {
        assert_eq!(race_sign_out(async { Ok(()) }).await, Ok(()));
        let failed = race_sign_out(async { Err(BackendError::Auth("revoked".to_string())) }).await;
        assert_eq!(failed, Err(BackendError::Auth("revoked".to_string())));
    }
}
