use std::time::Duration;

/// Base URL used when no environment override is present.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

const API_BASE_ENV: &str = "INTAKE_API_URL";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Backend endpoint configuration consumed by the submission adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Reads the base URL from `INTAKE_API_URL`, falling back to the
    /// localhost default.
    pub fn from_env() -> Self {
        match std::env::var(API_BASE_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::with_base_url(value),
            _ => Self::default(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let trimmed = base_url.into().trim().trim_end_matches('/').to_string();
        Self {
            base_url: trimmed,
            ..Self::default()
        }
    }

    /// Anonymous submission endpoint (multipart).
    pub fn post_from_landing_url(&self) -> String {
        format!("{}/project/post-from-landing", self.base_url)
    }

    /// Authenticated submission endpoint (JSON).
    pub fn create_project_url(&self) -> String {
        format!("{}/project/create", self.base_url)
    }

    /// Login endpoint used to chain authentication after anonymous signup.
    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }
}
