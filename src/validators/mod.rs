//! Pure field validators for the intake wizard.
//!
//! Every validator is a total function: all invalid input paths return a
//! failed [`ValidationResult`] with a human-readable message, never an
//! error or panic. Values are trimmed before length checks and length
//! bounds are inclusive.

mod billing;
mod identity;
mod project;

pub use billing::{
    validate_address_line, validate_city, validate_company_name, validate_vat_number,
};
pub use identity::{
    validate_email, validate_first_name, validate_last_name, validate_password, validate_phone,
    validate_zip_code,
};
pub use project::{
    validate_attachment, validate_budget, validate_custom_tag, validate_important_factors,
    validate_industry, validate_project_description, validate_project_title,
    validate_writing_length,
};

/// Verdict returned by every validator. `error` is present iff `valid` is
/// false. Created fresh per call; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The message for error-map storage: the error text, or `""` when
    /// valid.
    pub fn error_text(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }
}

/// True when the trimmed value begins with an ASCII letter.
pub(crate) fn starts_with_letter(value: &str) -> bool {
    value
        .chars()
        .next()
        .map(|first| first.is_ascii_alphabetic())
        .unwrap_or(false)
}
