//! Draft data model: everything the wizard collects before submission.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    BillingType, Category, FeeType, HiringTimeline, InvitationPreference, LengthUnit,
    PrivacyScope,
};

/// Length requirement collected only for writing projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingLength {
    pub value: i64,
    pub unit: LengthUnit,
}

/// Identity block collected only from anonymous users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    /// ISO-ish lowercase country code driving phone and zip validation.
    pub country_code: String,
    pub zip_code: Option<String>,
}

impl Default for IdentityDraft {
    fn default() -> Self {
        Self {
            first_name: None,
            last_name: None,
            email: None,
            password: None,
            phone_number: None,
            country_code: "us".into(),
            zip_code: None,
        }
    }
}

impl IdentityDraft {
    /// Full name as sent over the wire.
    pub fn fullname(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => String::new(),
        }
    }
}

/// Billing block collected on the final anonymous step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDraft {
    pub billing_type: BillingType,
    pub company_name: Option<String>,
    pub company_registration: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub vat_number: Option<String>,
}

/// The single source of truth for the wizard. Created empty when the
/// wizard mounts, mutated field-by-field, and consumed exactly once by the
/// submission adapter. Back navigation never clears any of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub privacy: Option<PrivacyScope>,
    pub category: Option<Category>,
    pub selected_type: Option<String>,
    pub selected_activity: Option<String>,
    pub selected_deliverable: Option<String>,
    pub writing_length: Option<WritingLength>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<PathBuf>,
    pub expertise_tags: Vec<String>,
    pub industry: Option<String>,
    pub fee_type: Option<FeeType>,
    pub min_budget: Option<i64>,
    pub max_budget: Option<i64>,
    pub identity: IdentityDraft,
    pub hiring_timeline: Option<HiringTimeline>,
    pub important_factors: Vec<String>,
    pub billing: BillingDraft,
    pub invitation: Option<InvitationPreference>,
    pub agreed_to_terms: bool,
}
