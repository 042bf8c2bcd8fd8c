//! Wire-format assembly: the multipart field list for anonymous landing
//! submissions and the JSON body for authenticated ones.

use serde::Serialize;

use crate::draft::ProjectDraft;

/// Multipart text fields for `/project/post-from-landing`, in wire order.
/// Array-valued fields are JSON-encoded strings; absent scalars are sent as
/// empty strings. The optional `files` part is attached separately by the
/// adapter.
pub fn landing_fields(
    draft: &ProjectDraft,
) -> Result<Vec<(&'static str, String)>, serde_json::Error> {
    let identity = &draft.identity;
    let billing = &draft.billing;
    let industries: Vec<&str> = draft
        .industry
        .as_deref()
        .filter(|industry| !industry.is_empty())
        .into_iter()
        .collect();

    let fields = vec![
        (
            "privacy",
            draft
                .privacy
                .map(|privacy| privacy.wire_name().to_string())
                .unwrap_or_default(),
        ),
        (
            "category",
            draft
                .category
                .map(|category| category.wire_name().to_string())
                .unwrap_or_default(),
        ),
        ("selectedType", opt(&draft.selected_type)),
        ("selectedActivity", opt(&draft.selected_activity)),
        ("selectedDeliverable", opt(&draft.selected_deliverable)),
        (
            "writingLength",
            draft
                .writing_length
                .map(|length| length.value.to_string())
                .unwrap_or_default(),
        ),
        (
            "writingLengthUnit",
            draft
                .writing_length
                .map(|length| length.unit.wire_name().to_string())
                .unwrap_or_default(),
        ),
        ("expertiseTags", serde_json::to_string(&draft.expertise_tags)?),
        ("industries", serde_json::to_string(&industries)?),
        ("title", opt(&draft.title)),
        ("fullname", identity.fullname()),
        ("email", opt(&identity.email)),
        ("password", opt(&identity.password)),
        ("phoneNumber", opt(&identity.phone_number)),
        ("countryCode", identity.country_code.clone()),
        ("description", opt(&draft.description)),
        (
            "feeType",
            draft
                .fee_type
                .map(|fee| fee.wire_name().to_string())
                .unwrap_or_default(),
        ),
        // The backend takes a single figure: the top of the range.
        (
            "budget",
            draft
                .max_budget
                .map(|max| max.to_string())
                .unwrap_or_default(),
        ),
        (
            "hiringTimeline",
            draft
                .hiring_timeline
                .map(|timeline| timeline.wire_name().to_string())
                .unwrap_or_default(),
        ),
        (
            "hiringFactors",
            serde_json::to_string(&draft.important_factors)?,
        ),
        ("billingType", billing.billing_type.wire_name().to_string()),
        ("addressLine1", opt(&billing.address_line1)),
        ("addressLine2", opt(&billing.address_line2)),
        ("city", opt(&billing.city)),
        ("state", opt(&billing.state)),
        ("zipCode", opt(&billing.zip_code)),
        ("country", opt(&billing.country)),
        ("companyName", opt(&billing.company_name)),
        ("companyRegistration", opt(&billing.company_registration)),
        ("vatNumber", opt(&billing.vat_number)),
        (
            "expertInvitation",
            draft
                .invitation
                .map(|invitation| invitation.wire_name().to_string())
                .unwrap_or_default(),
        ),
    ];
    Ok(fields)
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// JSON body for the authenticated `/project/create` endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectBody {
    pub title: String,
    pub introduction: String,
    pub detailed_requirements: String,
    pub skills: Vec<String>,
    pub deliverables: Vec<String>,
    pub deadline: String,
    pub budget_min: i64,
    pub budget_max: i64,
    pub category: String,
}

impl CreateProjectBody {
    pub fn from_draft(draft: &ProjectDraft) -> Self {
        let description = draft.description.clone().unwrap_or_default();
        Self {
            title: draft.title.clone().unwrap_or_default(),
            introduction: description.clone(),
            detailed_requirements: description,
            skills: draft.expertise_tags.clone(),
            deliverables: draft
                .selected_deliverable
                .clone()
                .into_iter()
                .collect(),
            deadline: draft
                .hiring_timeline
                .map(|timeline| timeline.wire_name().to_string())
                .unwrap_or_default(),
            budget_min: draft.min_budget.unwrap_or_default(),
            budget_max: draft.max_budget.unwrap_or_default(),
            category: draft
                .category
                .map(|category| category.wire_name().to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        Category, FeeType, HiringTimeline, InvitationPreference, LengthUnit, PrivacyScope,
    };
    use crate::draft::WritingLength;

    fn writing_draft() -> ProjectDraft {
        let mut draft = ProjectDraft::default();
        draft.privacy = Some(PrivacyScope::AllExperts);
        draft.category = Some(Category::Writing);
        draft.selected_type = Some("Technical Writing".into());
        draft.selected_activity = Some("Product Documentation".into());
        draft.selected_deliverable = Some("Draft".into());
        draft.writing_length = Some(WritingLength {
            value: 200,
            unit: LengthUnit::Words,
        });
        draft.title = Some("A Great Technical Manual".into());
        draft.description = Some("This project needs a full technical manual.".into());
        draft.expertise_tags = vec!["SEO".into(), "Technical Documentation".into()];
        draft.industry = Some("Software".into());
        draft.fee_type = Some(FeeType::Fixed);
        draft.min_budget = Some(1000);
        draft.max_budget = Some(5000);
        draft.identity.first_name = Some("Ada".into());
        draft.identity.last_name = Some("Lovelace".into());
        draft.identity.email = Some("ada@example.com".into());
        draft.identity.password = Some("Aa1!Aa1!".into());
        draft.identity.phone_number = Some("4155551234".into());
        draft.hiring_timeline = Some(HiringTimeline::WithinOneWeek);
        draft.important_factors = vec!["Budget fit".into()];
        draft.invitation = Some(InvitationPreference::TeamInvites);
        draft
    }

    #[test]
    fn landing_fields_cover_the_full_wire_contract() {
        let fields = landing_fields(&writing_draft()).expect("serializes");
        let keys: Vec<&str> = fields.iter().map(|(key, _)| *key).collect();
        for expected in [
            "privacy",
            "category",
            "selectedType",
            "selectedActivity",
            "selectedDeliverable",
            "writingLength",
            "writingLengthUnit",
            "expertiseTags",
            "industries",
            "title",
            "fullname",
            "email",
            "password",
            "phoneNumber",
            "countryCode",
            "description",
            "feeType",
            "budget",
            "hiringTimeline",
            "hiringFactors",
            "billingType",
            "addressLine1",
            "addressLine2",
            "city",
            "state",
            "zipCode",
            "country",
            "companyName",
            "companyRegistration",
            "vatNumber",
            "expertInvitation",
        ] {
            assert!(keys.contains(&expected), "{expected} missing");
        }
    }

    #[test]
    fn arrays_are_json_encoded_and_budget_takes_the_max() {
        let fields = landing_fields(&writing_draft()).expect("serializes");
        let value = |key: &str| {
            fields
                .iter()
                .find(|(candidate, _)| *candidate == key)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        };
        assert_eq!(value("expertiseTags"), r#"["SEO","Technical Documentation"]"#);
        assert_eq!(value("industries"), r#"["Software"]"#);
        assert_eq!(value("hiringFactors"), r#"["Budget fit"]"#);
        assert_eq!(value("budget"), "5000");
        assert_eq!(value("fullname"), "Ada Lovelace");
        assert_eq!(value("countryCode"), "us");
        assert_eq!(value("privacy"), "all_experts");
        assert_eq!(value("category"), "writing");
        assert_eq!(value("writingLength"), "200");
        assert_eq!(value("writingLengthUnit"), "words");
        assert_eq!(value("billingType"), "individual");
        // Uncollected scalars ride along as empty strings.
        assert_eq!(value("companyName"), "");
    }

    #[test]
    fn create_body_serializes_camel_case() {
        let body = CreateProjectBody::from_draft(&writing_draft());
        let json = serde_json::to_value(&body).expect("serializes");
        assert_eq!(json["title"], "A Great Technical Manual");
        assert_eq!(json["budgetMin"], 1000);
        assert_eq!(json["budgetMax"], 5000);
        assert_eq!(json["detailedRequirements"], json["introduction"]);
        assert_eq!(json["deadline"], "within_one_week");
        assert_eq!(json["skills"][0], "SEO");
        assert_eq!(json["deliverables"][0], "Draft");
        assert_eq!(json["category"], "writing");
    }
}
