use serde::{Deserialize, Serialize};

/// Minimal view of an authenticated marketplace user.
///
/// The wizard only reads identity; session management lives elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
}

/// Authentication facts handed to the wizard controller and submission
/// adapter as an explicit collaborator rather than ambient state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    user: Option<AuthenticatedUser>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(email: impl Into<String>) -> Self {
        Self {
            user: Some(AuthenticatedUser {
                email: email.into(),
            }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }
}
