//! Submission adapter: assembles the completed draft into its wire format,
//! performs the one network call in the crate, and classifies the outcome.
//!
//! Anonymous drafts go out as multipart form data and chain an automatic
//! login with the just-created credentials; authenticated drafts go out as
//! JSON. At most one submission is in flight per adapter; callers retry
//! manually and the draft survives every failure.

pub mod payload;

use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::header::USER_AGENT;
use reqwest::multipart;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::AuthContext;
use crate::config::ApiConfig;
use crate::draft::ProjectDraft;
use crate::errors::SubmissionError;

pub use payload::{landing_fields, CreateProjectBody};

const CLIENT_UA: &str = concat!("intake-core/", env!("CARGO_PKG_VERSION"));

/// User/session facts returned by the backend on success.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SubmittedUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LandingResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    user: Option<SubmittedUser>,
    #[serde(default)]
    message: Option<String>,
}

/// Outcome of a successful submission. `logged_in` records whether the
/// chained login succeeded; a login failure never downgrades the
/// submission itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub request_id: Uuid,
    pub user: Option<SubmittedUser>,
    pub logged_in: bool,
}

/// Sends completed drafts to the backend.
pub struct SubmissionAdapter {
    config: ApiConfig,
    client: reqwest::Client,
    in_flight: AtomicBool,
}

impl SubmissionAdapter {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Submits the draft once. A second call while one is in flight
    /// returns [`SubmissionError::AlreadyInFlight`] without touching the
    /// network. There are no automatic retries and no cancellation; the
    /// call runs to completion or failure.
    pub async fn submit(
        &self,
        draft: &ProjectDraft,
        auth: &AuthContext,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(SubmissionError::AlreadyInFlight);
        }
        let result = if auth.is_authenticated() {
            self.submit_authenticated(draft).await
        } else {
            self.submit_anonymous(draft).await
        };
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn submit_anonymous(
        &self,
        draft: &ProjectDraft,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let request_id = Uuid::new_v4();
        tracing::info!(%request_id, "submitting project via landing flow");

        let mut form = multipart::Form::new();
        for (key, value) in payload::landing_fields(draft)? {
            form = form.text(key, value);
        }
        if let Some(path) = &draft.attachment {
            let bytes = tokio::fs::read(path).await?;
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("attachment.pdf")
                .to_string();
            let part = multipart::Part::bytes(bytes)
                .file_name(file_name)
                .mime_str("application/pdf")?;
            form = form.part("files", part);
        }

        let response = self
            .client
            .post(self.config.post_from_landing_url())
            .header(USER_AGENT, CLIENT_UA)
            .timeout(self.config.timeout)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Server {
                status: status.as_u16(),
                message: server_message(status.as_u16(), &body),
            });
        }

        let body: LandingResponse = response.json().await?;
        if !body.success {
            return Err(SubmissionError::Server {
                status: status.as_u16(),
                message: body
                    .message
                    .unwrap_or_else(|| "The server rejected the submission".into()),
            });
        }

        let logged_in = self.chain_login(draft, request_id).await;
        tracing::info!(%request_id, logged_in, "project submitted");
        Ok(SubmissionReceipt {
            request_id,
            user: body.user,
            logged_in,
        })
    }

    async fn submit_authenticated(
        &self,
        draft: &ProjectDraft,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let request_id = Uuid::new_v4();
        tracing::info!(%request_id, "submitting project via authenticated flow");

        let body = CreateProjectBody::from_draft(draft);
        let response = self
            .client
            .post(self.config.create_project_url())
            .header(USER_AGENT, CLIENT_UA)
            .timeout(self.config.timeout)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Server {
                status: status.as_u16(),
                message: server_message(status.as_u16(), &text),
            });
        }
        tracing::info!(%request_id, "project submitted");
        Ok(SubmissionReceipt {
            request_id,
            user: None,
            logged_in: true,
        })
    }

    /// Logs in with the credentials collected during the wizard. Failure is
    /// logged and swallowed: submission success is never rolled back by a
    /// login failure.
    async fn chain_login(&self, draft: &ProjectDraft, request_id: Uuid) -> bool {
        let (Some(email), Some(password)) = (
            draft.identity.email.as_deref(),
            draft.identity.password.as_deref(),
        ) else {
            return false;
        };
        let outcome = self
            .client
            .post(self.config.login_url())
            .header(USER_AGENT, CLIENT_UA)
            .timeout(self.config.timeout)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await;
        match outcome {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::warn!(
                    %request_id,
                    status = response.status().as_u16(),
                    "auto-login after signup failed"
                );
                false
            }
            Err(error) => {
                tracing::warn!(%request_id, %error, "auto-login after signup failed");
                false
            }
        }
    }
}

/// Extracts the user-facing message from a failure body: `message`, then
/// `error`, then a generic status line.
fn server_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Server error: {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_prefers_message_then_error() {
        assert_eq!(
            server_message(400, r#"{"message":"Title is required"}"#),
            "Title is required"
        );
        assert_eq!(
            server_message(422, r#"{"error":"Bad category"}"#),
            "Bad category"
        );
        assert_eq!(
            server_message(400, r#"{"message":"first","error":"second"}"#),
            "first"
        );
    }

    #[test]
    fn server_message_falls_back_to_status_line() {
        assert_eq!(server_message(502, "<html>bad gateway</html>"), "Server error: 502");
        assert_eq!(server_message(500, r#"{"detail":"nope"}"#), "Server error: 500");
    }
}
