//! Draft state store: field setters that keep each value and its
//! validation verdict in a single atomic update.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::catalog::{
    self, BillingType, Category, FeeType, HiringTimeline, InvitationPreference, LengthUnit,
    PrivacyScope,
};
use crate::validators::{
    validate_address_line, validate_attachment, validate_budget, validate_city,
    validate_company_name, validate_custom_tag, validate_email, validate_first_name,
    validate_important_factors, validate_industry, validate_last_name, validate_password,
    validate_phone, validate_project_description, validate_project_title, validate_vat_number,
    validate_writing_length, validate_zip_code, ValidationResult,
};

use super::project::{ProjectDraft, WritingLength};

/// Field keys shared by the error map, the wizard guards, and interactive
/// drivers.
pub mod field {
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const PROJECT_TYPE: &str = "project_type";
    pub const ACTIVITY: &str = "activity";
    pub const DELIVERABLE: &str = "deliverable";
    pub const WRITING_LENGTH: &str = "writing_length";
    pub const ATTACHMENT: &str = "attachment";
    pub const EXPERTISE_TAGS: &str = "expertise_tags";
    pub const INDUSTRY: &str = "industry";
    pub const BUDGET: &str = "budget";
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const PHONE_NUMBER: &str = "phone_number";
    pub const ZIP_CODE: &str = "zip_code";
    pub const IMPORTANT_FACTORS: &str = "important_factors";
    pub const COMPANY_NAME: &str = "company_name";
    pub const ADDRESS_LINE1: &str = "address_line1";
    pub const BILLING_CITY: &str = "billing_city";
    pub const BILLING_ZIP: &str = "billing_zip";
    pub const VAT_NUMBER: &str = "vat_number";
}

/// Field name to current error message; the empty string means no error.
/// Only current-state errors are kept, never history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorMap {
    entries: BTreeMap<String, String>,
}

impl ValidationErrorMap {
    /// Current message for a field, `""` when the field has no error.
    pub fn message(&self, field: &str) -> &str {
        self.entries.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn is_clear(&self, field: &str) -> bool {
        self.message(field).is_empty()
    }

    pub fn fields_with_errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    fn record(&mut self, field: &str, result: &ValidationResult) {
        self.entries
            .insert(field.to_string(), result.error_text().to_string());
    }

    fn clear(&mut self, field: &str) {
        self.entries.insert(field.to_string(), String::new());
    }
}

/// Owns the [`ProjectDraft`] and its [`ValidationErrorMap`]. Every setter
/// stores the value and the matching verdict in one call, so a stale error
/// can never sit next to a fresh value. Typing is never blocked: invalid
/// values are stored together with their error message.
#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    draft: ProjectDraft,
    errors: ValidationErrorMap,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrorMap {
        &self.errors
    }

    /// Consumes the store, yielding the draft for submission.
    pub fn into_draft(self) -> ProjectDraft {
        self.draft
    }

    // -- step 1: privacy & category ------------------------------------

    pub fn set_privacy(&mut self, privacy: PrivacyScope) {
        self.draft.privacy = Some(privacy);
    }

    /// Sets the category. Downstream type/activity/deliverable selections
    /// are intentionally NOT cleared even when they are illegal under the
    /// new category; see [`DraftStore::has_stale_selections`].
    pub fn set_category(&mut self, category: Category) {
        self.draft.category = Some(category);
    }

    pub fn set_agreed_to_terms(&mut self, agreed: bool) {
        self.draft.agreed_to_terms = agreed;
    }

    /// True when a previously chosen type/activity/deliverable is no longer
    /// legal under the current category. Surfaced for callers; nothing is
    /// cleared automatically.
    pub fn has_stale_selections(&self) -> bool {
        let Some(category) = self.draft.category else {
            return false;
        };
        let selected_type = self.draft.selected_type.as_deref().unwrap_or("");
        if let Some(value) = &self.draft.selected_type {
            if !catalog::is_legal_type(category, value) {
                return true;
            }
        }
        if let Some(value) = &self.draft.selected_activity {
            if !catalog::is_legal_activity(category, selected_type, value) {
                return true;
            }
        }
        if let Some(value) = &self.draft.selected_deliverable {
            if !catalog::is_legal_deliverable(category, selected_type, value) {
                return true;
            }
        }
        false
    }

    // -- step 2: project details ---------------------------------------

    pub fn set_project_type(&mut self, value: &str) {
        let verdict = match self.draft.category {
            Some(category) if catalog::is_legal_type(category, value) => ValidationResult::ok(),
            Some(_) => ValidationResult::fail("Select a project type from the list"),
            None => ValidationResult::fail("Choose a category first"),
        };
        self.draft.selected_type = Some(value.to_string());
        self.errors.record(field::PROJECT_TYPE, &verdict);
    }

    pub fn set_activity(&mut self, value: &str) {
        let selected_type = self.draft.selected_type.as_deref().unwrap_or("");
        let verdict = match self.draft.category {
            Some(category) if catalog::is_legal_activity(category, selected_type, value) => {
                ValidationResult::ok()
            }
            _ => ValidationResult::fail("Select an activity from the list"),
        };
        self.draft.selected_activity = Some(value.to_string());
        self.errors.record(field::ACTIVITY, &verdict);
    }

    pub fn set_deliverable(&mut self, value: &str) {
        let selected_type = self.draft.selected_type.as_deref().unwrap_or("");
        let verdict = match self.draft.category {
            Some(category) if catalog::is_legal_deliverable(category, selected_type, value) => {
                ValidationResult::ok()
            }
            _ => ValidationResult::fail("Select a deliverable from the list"),
        };
        self.draft.selected_deliverable = Some(value.to_string());
        self.errors.record(field::DELIVERABLE, &verdict);
    }

    pub fn set_title(&mut self, raw: &str) {
        let verdict = validate_project_title(raw);
        self.draft.title = Some(raw.trim().to_string());
        self.errors.record(field::TITLE, &verdict);
    }

    pub fn set_description(&mut self, raw: &str) {
        let verdict = validate_project_description(raw);
        self.draft.description = Some(raw.trim().to_string());
        self.errors.record(field::DESCRIPTION, &verdict);
    }

    pub fn set_writing_length(&mut self, raw: &str, unit: LengthUnit) {
        let verdict = validate_writing_length(raw, unit);
        self.draft.writing_length = raw
            .trim()
            .parse()
            .ok()
            .map(|value| WritingLength { value, unit });
        self.errors.record(field::WRITING_LENGTH, &verdict);
    }

    pub fn set_attachment(&mut self, path: PathBuf) {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("");
        let verdict = validate_attachment(file_name);
        self.draft.attachment = Some(path);
        self.errors.record(field::ATTACHMENT, &verdict);
    }

    pub fn clear_attachment(&mut self) {
        self.draft.attachment = None;
        self.errors.clear(field::ATTACHMENT);
    }

    // -- step 3: expertise & budget ------------------------------------

    /// Inserts a catalog tag. Duplicates (case-sensitive) are ignored.
    /// Returns whether the tag was added.
    pub fn add_expertise_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.draft.expertise_tags.iter().any(|existing| existing == tag) {
            return false;
        }
        self.draft.expertise_tags.push(tag.to_string());
        self.errors.clear(field::EXPERTISE_TAGS);
        true
    }

    /// Validates and inserts a free-form tag. Returns whether it was added.
    pub fn add_custom_expertise_tag(&mut self, raw: &str) -> bool {
        let verdict = validate_custom_tag(raw);
        self.errors.record(field::EXPERTISE_TAGS, &verdict);
        if !verdict.is_valid() {
            return false;
        }
        self.add_expertise_tag(raw)
    }

    /// Removes a tag by exact string match.
    pub fn remove_expertise_tag(&mut self, tag: &str) -> bool {
        let before = self.draft.expertise_tags.len();
        self.draft.expertise_tags.retain(|existing| existing != tag);
        before != self.draft.expertise_tags.len()
    }

    pub fn set_industry(&mut self, raw: &str) {
        let verdict = validate_industry(raw);
        self.draft.industry = Some(raw.trim().to_string());
        self.errors.record(field::INDUSTRY, &verdict);
    }

    pub fn set_fee_type(&mut self, fee_type: FeeType) {
        self.draft.fee_type = Some(fee_type);
    }

    /// Stores both budget bounds and one verdict for the pair. Unparseable
    /// entries leave the bound unset and report an error.
    pub fn set_budget(&mut self, min_raw: &str, max_raw: &str) {
        let min = min_raw.trim().parse::<i64>();
        let max = max_raw.trim().parse::<i64>();
        self.draft.min_budget = min.as_ref().ok().copied();
        self.draft.max_budget = max.as_ref().ok().copied();
        let verdict = match (min, max) {
            (Ok(min), Ok(max)) => validate_budget(min, max),
            _ => ValidationResult::fail("Enter whole dollar amounts for the budget"),
        };
        self.errors.record(field::BUDGET, &verdict);
    }

    // -- step 4: identity & timeline -----------------------------------

    pub fn set_first_name(&mut self, raw: &str) {
        let verdict = validate_first_name(raw);
        self.draft.identity.first_name = Some(raw.trim().to_string());
        self.errors.record(field::FIRST_NAME, &verdict);
    }

    pub fn set_last_name(&mut self, raw: &str) {
        let verdict = validate_last_name(raw);
        self.draft.identity.last_name = Some(raw.trim().to_string());
        self.errors.record(field::LAST_NAME, &verdict);
    }

    pub fn set_email(&mut self, raw: &str) {
        let verdict = validate_email(raw);
        self.draft.identity.email = Some(raw.trim().to_string());
        self.errors.record(field::EMAIL, &verdict);
    }

    pub fn set_password(&mut self, raw: &str) {
        let verdict = validate_password(raw);
        self.draft.identity.password = Some(raw.to_string());
        self.errors.record(field::PASSWORD, &verdict);
    }

    pub fn set_phone_number(&mut self, raw: &str) {
        let verdict = validate_phone(raw, &self.draft.identity.country_code);
        self.draft.identity.phone_number = Some(raw.trim().to_string());
        self.errors.record(field::PHONE_NUMBER, &verdict);
    }

    pub fn set_identity_zip(&mut self, raw: &str) {
        let verdict = validate_zip_code(raw, &self.draft.identity.country_code);
        self.draft.identity.zip_code = Some(raw.trim().to_string());
        self.errors.record(field::ZIP_CODE, &verdict);
    }

    /// Changing the country re-runs the country-sensitive validators so no
    /// stale verdict survives the switch.
    pub fn set_country_code(&mut self, raw: &str) {
        self.draft.identity.country_code = raw.trim().to_lowercase();
        if let Some(phone) = self.draft.identity.phone_number.clone() {
            let verdict = validate_phone(&phone, &self.draft.identity.country_code);
            self.errors.record(field::PHONE_NUMBER, &verdict);
        }
        if let Some(zip) = self.draft.identity.zip_code.clone() {
            let verdict = validate_zip_code(&zip, &self.draft.identity.country_code);
            self.errors.record(field::ZIP_CODE, &verdict);
        }
    }

    pub fn set_hiring_timeline(&mut self, timeline: HiringTimeline) {
        self.draft.hiring_timeline = Some(timeline);
    }

    pub fn set_important_factors(&mut self, factors: Vec<String>) {
        let verdict = validate_important_factors(&factors);
        self.draft.important_factors = factors;
        self.errors.record(field::IMPORTANT_FACTORS, &verdict);
    }

    pub fn toggle_important_factor(&mut self, factor: &str) {
        let mut factors = self.draft.important_factors.clone();
        if let Some(position) = factors.iter().position(|existing| existing == factor) {
            factors.remove(position);
        } else {
            factors.push(factor.to_string());
        }
        self.set_important_factors(factors);
    }

    // -- step 5: billing -----------------------------------------------

    pub fn set_billing_type(&mut self, billing_type: BillingType) {
        self.draft.billing.billing_type = billing_type;
    }

    pub fn set_company_name(&mut self, raw: &str) {
        let verdict = validate_company_name(raw);
        self.draft.billing.company_name = Some(raw.trim().to_string());
        self.errors.record(field::COMPANY_NAME, &verdict);
    }

    pub fn set_company_registration(&mut self, raw: &str) {
        self.draft.billing.company_registration = Some(raw.trim().to_string());
    }

    pub fn set_address_line1(&mut self, raw: &str) {
        let verdict = validate_address_line(raw);
        self.draft.billing.address_line1 = Some(raw.trim().to_string());
        self.errors.record(field::ADDRESS_LINE1, &verdict);
    }

    pub fn set_address_line2(&mut self, raw: &str) {
        self.draft.billing.address_line2 = Some(raw.trim().to_string());
    }

    pub fn set_billing_city(&mut self, raw: &str) {
        let verdict = validate_city(raw);
        self.draft.billing.city = Some(raw.trim().to_string());
        self.errors.record(field::BILLING_CITY, &verdict);
    }

    pub fn set_billing_state(&mut self, raw: &str) {
        self.draft.billing.state = Some(raw.trim().to_string());
    }

    pub fn set_billing_country(&mut self, raw: &str) {
        self.draft.billing.country = Some(raw.trim().to_lowercase());
        if let Some(zip) = self.draft.billing.zip_code.clone() {
            let country = self.billing_country();
            let verdict = validate_zip_code(&zip, &country);
            self.errors.record(field::BILLING_ZIP, &verdict);
        }
        if let Some(vat) = self.draft.billing.vat_number.clone() {
            let country = self.billing_country();
            let verdict = validate_vat_number(&vat, &country);
            self.errors.record(field::VAT_NUMBER, &verdict);
        }
    }

    pub fn set_billing_zip(&mut self, raw: &str) {
        let country = self.billing_country();
        let verdict = validate_zip_code(raw, &country);
        self.draft.billing.zip_code = Some(raw.trim().to_string());
        self.errors.record(field::BILLING_ZIP, &verdict);
    }

    pub fn set_vat_number(&mut self, raw: &str) {
        let country = self.billing_country();
        let verdict = validate_vat_number(raw, &country);
        self.draft.billing.vat_number = Some(raw.trim().to_string());
        self.errors.record(field::VAT_NUMBER, &verdict);
    }

    pub fn set_invitation(&mut self, preference: InvitationPreference) {
        self.draft.invitation = Some(preference);
    }

    fn billing_country(&self) -> String {
        self.draft
            .billing
            .country
            .clone()
            .unwrap_or_else(|| self.draft.identity.country_code.clone())
    }

    // -- derived option sets -------------------------------------------

    pub fn type_options(&self) -> &'static [&'static str] {
        self.draft
            .category
            .map(catalog::type_options)
            .unwrap_or(&[])
    }

    pub fn activity_options(&self) -> &'static [&'static str] {
        match (self.draft.category, self.draft.selected_type.as_deref()) {
            (Some(category), Some(selected_type)) => {
                catalog::activity_options(category, selected_type)
            }
            _ => &[],
        }
    }

    pub fn deliverable_options(&self) -> &'static [&'static str] {
        match (self.draft.category, self.draft.selected_type.as_deref()) {
            (Some(category), Some(selected_type)) => {
                catalog::deliverable_options(category, selected_type)
            }
            _ => &[],
        }
    }

    pub fn expertise_options(&self) -> &'static [&'static str] {
        self.draft
            .category
            .map(catalog::expertise_options)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setter_pairs_value_with_verdict_atomically() {
        let mut store = DraftStore::new();
        store.set_title("No");
        assert_eq!(store.draft().title.as_deref(), Some("No"));
        assert!(!store.errors().is_clear(field::TITLE));

        store.set_title("A proper project title");
        assert!(store.errors().is_clear(field::TITLE));
    }

    #[test]
    fn setting_one_field_never_drops_another_fields_error() {
        let mut store = DraftStore::new();
        store.set_title("x");
        store.set_description("This is a perfectly fine description.");
        assert!(!store.errors().is_clear(field::TITLE));
        assert!(store.errors().is_clear(field::DESCRIPTION));

        store.set_industry("Healthcare");
        assert!(!store.errors().is_clear(field::TITLE), "title error survived");
    }

    #[test]
    fn category_switch_leaves_stale_selections_in_place() {
        let mut store = DraftStore::new();
        store.set_category(Category::Writing);
        store.set_project_type("Technical Writing");
        store.set_deliverable("Draft");
        assert!(!store.has_stale_selections());

        store.set_category(Category::Consulting);
        assert_eq!(
            store.draft().selected_type.as_deref(),
            Some("Technical Writing"),
            "selection must be preserved"
        );
        assert!(store.has_stale_selections());
    }

    #[test]
    fn expertise_tags_dedupe_case_sensitively() {
        let mut store = DraftStore::new();
        assert!(store.add_expertise_tag("SEO"));
        assert!(!store.add_expertise_tag("SEO"));
        assert!(store.add_expertise_tag("seo"), "case differs, not a duplicate");
        assert_eq!(store.draft().expertise_tags.len(), 2);

        assert!(store.remove_expertise_tag("SEO"));
        assert!(!store.remove_expertise_tag("SEO"));
        assert_eq!(store.draft().expertise_tags, vec!["seo".to_string()]);
    }

    #[test]
    fn custom_tags_are_validated_before_insert() {
        let mut store = DraftStore::new();
        assert!(!store.add_custom_expertise_tag("http-expert"));
        assert!(store.draft().expertise_tags.is_empty());
        assert!(!store.errors().is_clear(field::EXPERTISE_TAGS));

        assert!(store.add_custom_expertise_tag("Bioinformatics"));
        assert!(store.errors().is_clear(field::EXPERTISE_TAGS));
    }

    #[test]
    fn budget_setter_reports_floor_violation() {
        let mut store = DraftStore::new();
        store.set_budget("100", "1000");
        assert_eq!(store.draft().min_budget, Some(100));
        assert_eq!(
            store.errors().message(field::BUDGET),
            "Minimum budget must be at least $500"
        );

        store.set_budget("500", "1000");
        assert!(store.errors().is_clear(field::BUDGET));
    }

    #[test]
    fn country_switch_revalidates_phone_and_zip() {
        let mut store = DraftStore::new();
        store.set_phone_number("1234567890");
        store.set_identity_zip("94107");
        assert!(store.errors().is_clear(field::PHONE_NUMBER));
        assert!(store.errors().is_clear(field::ZIP_CODE));

        store.set_country_code("in");
        assert!(
            !store.errors().is_clear(field::PHONE_NUMBER),
            "1234567890 is not a valid Indian mobile"
        );
        assert!(!store.errors().is_clear(field::ZIP_CODE));
    }

    #[test]
    fn writing_length_keeps_raw_entry_semantics() {
        let mut store = DraftStore::new();
        store.set_writing_length("200", LengthUnit::Words);
        assert_eq!(
            store.draft().writing_length,
            Some(WritingLength {
                value: 200,
                unit: LengthUnit::Words
            })
        );
        assert!(store.errors().is_clear(field::WRITING_LENGTH));

        store.set_writing_length("10", LengthUnit::Words);
        assert!(!store.errors().is_clear(field::WRITING_LENGTH));
        assert!(store.draft().writing_length.is_some(), "entry preserved");
    }
}
