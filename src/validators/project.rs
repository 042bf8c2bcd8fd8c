//! Validators for project-facing fields: title, description, length,
//! budget, tags, factors, and the optional attachment.

use crate::catalog::{LengthUnit, FACTOR_NONE_APPLY};

use super::{starts_with_letter, ValidationResult};

const TITLE_MIN: usize = 5;
const TITLE_MAX: usize = 100;
const TITLE_FORBIDDEN: &[char] = &['<', '>', '{', '}', '[', ']', '(', ')', ';'];

const DESCRIPTION_MIN: usize = 10;
const DESCRIPTION_MAX: usize = 1024;
const DESCRIPTION_FORBIDDEN: &[&str] = &["script", "iframe", "object", "embed"];

const MIN_WORDS: i64 = 50;
const MIN_PAGES: i64 = 1;

pub const BUDGET_FLOOR: i64 = 500;
pub const BUDGET_CEILING: i64 = 10_000_000;
const WIDE_RANGE_SPAN: i64 = 1_000_000;
const WIDE_RANGE_MIN_GUARD: i64 = 10_000;

const TAG_MIN: usize = 3;
const TAG_MAX: usize = 30;

/// Title: 5-100 chars after trimming, letter first, none of `<>{}[]();`.
pub fn validate_project_title(raw: &str) -> ValidationResult {
    let value = raw.trim();
    let length = value.chars().count();
    if length < TITLE_MIN || length > TITLE_MAX {
        return ValidationResult::fail(format!(
            "Title must be between {TITLE_MIN} and {TITLE_MAX} characters"
        ));
    }
    if !starts_with_letter(value) {
        return ValidationResult::fail("Title must start with a letter");
    }
    if value.chars().any(|c| TITLE_FORBIDDEN.contains(&c)) {
        return ValidationResult::fail("Title cannot contain <>{}[]();");
    }
    ValidationResult::ok()
}

/// Description: 10-1024 chars after trimming, letter first, and no
/// script/iframe/object/embed substrings in any letter case.
pub fn validate_project_description(raw: &str) -> ValidationResult {
    let value = raw.trim();
    let length = value.chars().count();
    if length < DESCRIPTION_MIN || length > DESCRIPTION_MAX {
        return ValidationResult::fail(format!(
            "Description must be between {DESCRIPTION_MIN} and {DESCRIPTION_MAX} characters"
        ));
    }
    if !starts_with_letter(value) {
        return ValidationResult::fail("Description must start with a letter");
    }
    let lowered = value.to_lowercase();
    if DESCRIPTION_FORBIDDEN
        .iter()
        .any(|banned| lowered.contains(banned))
    {
        return ValidationResult::fail("Description contains disallowed markup keywords");
    }
    ValidationResult::ok()
}

/// Writing length: a whole number, at least 50 for words or 1 for pages.
pub fn validate_writing_length(raw: &str, unit: LengthUnit) -> ValidationResult {
    let value: i64 = match raw.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => return ValidationResult::fail("Enter a whole number for the length"),
    };
    match unit {
        LengthUnit::Words if value < MIN_WORDS => {
            ValidationResult::fail(format!("Length must be at least {MIN_WORDS} words"))
        }
        LengthUnit::Pages if value < MIN_PAGES => {
            ValidationResult::fail(format!("Length must be at least {MIN_PAGES} page"))
        }
        _ => ValidationResult::ok(),
    }
}

pub fn validate_industry(raw: &str) -> ValidationResult {
    if raw.trim().is_empty() {
        ValidationResult::fail("Industry is required")
    } else {
        ValidationResult::ok()
    }
}

/// Custom expertise tag: 3-30 chars drawn from letters and `&.,-`, with no
/// `http` substring in any letter case.
pub fn validate_custom_tag(raw: &str) -> ValidationResult {
    let value = raw.trim();
    let length = value.chars().count();
    if length < TAG_MIN || length > TAG_MAX {
        return ValidationResult::fail(format!(
            "Tags must be between {TAG_MIN} and {TAG_MAX} characters"
        ));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || matches!(c, '&' | '.' | ',' | '-'))
    {
        return ValidationResult::fail("Tags may only use letters and &.,-");
    }
    if value.to_lowercase().contains("http") {
        return ValidationResult::fail("Tags cannot contain links");
    }
    ValidationResult::ok()
}

/// Important factors: the "None of these apply" answer is exclusive and
/// must be the only member when selected.
pub fn validate_important_factors(selected: &[String]) -> ValidationResult {
    let has_none = selected.iter().any(|factor| factor == FACTOR_NONE_APPLY);
    if has_none && selected.len() > 1 {
        ValidationResult::fail(format!(
            "\"{FACTOR_NONE_APPLY}\" cannot be combined with other factors"
        ))
    } else {
        ValidationResult::ok()
    }
}

/// Budget: closed interval, 500 <= min <= max <= 10,000,000. A span wider
/// than 1,000,000 is additionally rejected while min is below 10,000.
///
/// The wide-span rule is a preserved anti-abuse heuristic; confirm with the
/// product owner before changing it.
pub fn validate_budget(min: i64, max: i64) -> ValidationResult {
    if min < BUDGET_FLOOR {
        return ValidationResult::fail(format!("Minimum budget must be at least ${BUDGET_FLOOR}"));
    }
    if max > BUDGET_CEILING {
        return ValidationResult::fail(format!(
            "Maximum budget cannot exceed ${BUDGET_CEILING}"
        ));
    }
    if min > max {
        return ValidationResult::fail("Minimum budget cannot exceed the maximum budget");
    }
    if min < WIDE_RANGE_MIN_GUARD && max - min > WIDE_RANGE_SPAN {
        return ValidationResult::fail("Budget range is too wide");
    }
    ValidationResult::ok()
}

/// Attachment: PDF only. Size limits are enforced by the backend.
pub fn validate_attachment(file_name: &str) -> ValidationResult {
    let lowered = file_name.trim().to_lowercase();
    if lowered.ends_with(".pdf") && lowered.len() > ".pdf".len() {
        ValidationResult::ok()
    } else {
        ValidationResult::fail("Only PDF attachments are accepted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_rejects_out_of_bounds_lengths() {
        assert!(!validate_project_title("Hi").is_valid());
        assert!(!validate_project_title(&"a".repeat(101)).is_valid());
        assert!(validate_project_title("A Great Technical Manual").is_valid());
        // Bounds are inclusive and apply after trimming.
        assert!(validate_project_title("  Abcde  ").is_valid());
        assert!(validate_project_title(&"a".repeat(100)).is_valid());
    }

    #[test]
    fn title_must_start_with_a_letter() {
        assert!(!validate_project_title("1st project ever").is_valid());
        assert!(!validate_project_title("  9 lives").is_valid());
        assert_eq!(
            validate_project_title("42 things").error(),
            Some("Title must start with a letter")
        );
    }

    #[test]
    fn title_rejects_markup_characters() {
        for bad in ["My <b>bold</b> plan", "Curly {title}", "List [one]", "Call (me);"] {
            assert!(!validate_project_title(bad).is_valid(), "{bad} accepted");
        }
    }

    #[test]
    fn description_rejects_embedded_markup_keywords() {
        assert!(!validate_project_description("Please run this <SCRIPT> for me").is_valid());
        assert!(!validate_project_description("An IFRAME gallery widget").is_valid());
        assert!(validate_project_description(
            "This project needs a full technical manual covering setup."
        )
        .is_valid());
    }

    #[test]
    fn writing_length_floors_depend_on_unit() {
        assert!(!validate_writing_length("49", LengthUnit::Words).is_valid());
        assert!(validate_writing_length("50", LengthUnit::Words).is_valid());
        assert!(validate_writing_length("200", LengthUnit::Words).is_valid());
        assert!(!validate_writing_length("0", LengthUnit::Pages).is_valid());
        assert!(validate_writing_length("1", LengthUnit::Pages).is_valid());
        assert!(!validate_writing_length("many", LengthUnit::Words).is_valid());
    }

    #[test]
    fn budget_enforces_floor_ceiling_and_order() {
        assert!(validate_budget(500, 10_000_000).is_valid());
        assert_eq!(
            validate_budget(499, 1000).error(),
            Some("Minimum budget must be at least $500")
        );
        assert!(!validate_budget(1000, 500).is_valid());
        assert!(!validate_budget(500, 10_000_001).is_valid());
        assert!(validate_budget(500, 500).is_valid());
    }

    #[test]
    fn budget_wide_span_heuristic_only_applies_below_ten_thousand() {
        assert!(!validate_budget(500, 1_500_000).is_valid());
        assert!(validate_budget(10_000, 2_000_000).is_valid());
        assert!(validate_budget(9_999, 1_009_999).is_valid());
        assert!(!validate_budget(9_999, 1_010_000).is_valid());
    }

    #[test]
    fn custom_tags_restrict_charset_and_links() {
        assert!(validate_custom_tag("Growth-Marketing").is_valid());
        assert!(validate_custom_tag("M&A").is_valid());
        assert!(!validate_custom_tag("ab").is_valid());
        assert!(!validate_custom_tag("tag42").is_valid());
        assert!(!validate_custom_tag("http-expert").is_valid());
        assert!(!validate_custom_tag("HTTPMaster").is_valid());
    }

    #[test]
    fn none_of_these_apply_is_exclusive() {
        let alone = vec![FACTOR_NONE_APPLY.to_string()];
        assert!(validate_important_factors(&alone).is_valid());

        let combined = vec![FACTOR_NONE_APPLY.to_string(), "Budget fit".to_string()];
        assert!(!validate_important_factors(&combined).is_valid());

        let regular = vec!["Budget fit".to_string(), "Fast turnaround".to_string()];
        assert!(validate_important_factors(&regular).is_valid());
    }

    #[test]
    fn attachment_accepts_pdf_only() {
        assert!(validate_attachment("brief.pdf").is_valid());
        assert!(validate_attachment("BRIEF.PDF").is_valid());
        assert!(!validate_attachment("brief.docx").is_valid());
        assert!(!validate_attachment(".pdf").is_valid());
    }
}
