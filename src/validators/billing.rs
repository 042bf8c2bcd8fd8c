//! Validators for the billing step: company details, address fields, and
//! the optional VAT number.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationResult;

const COMPANY_MIN: usize = 3;
const COMPANY_MAX: usize = 50;
const CITY_MIN: usize = 3;
const CITY_MAX: usize = 15;

static VAT_GB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^GB\d{9}$").expect("valid GB VAT pattern"));
static VAT_DE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^DE\d{9}$").expect("valid DE VAT pattern"));
static VAT_FR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^FR[A-Za-z0-9]{2}\d{9}$").expect("valid FR VAT pattern"));
static VAT_IN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}[A-Za-z0-9]{13}$").expect("valid IN GSTIN pattern"));
static VAT_GENERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{8,14}$").expect("valid VAT pattern"));

pub fn validate_company_name(raw: &str) -> ValidationResult {
    let length = raw.trim().chars().count();
    if length < COMPANY_MIN || length > COMPANY_MAX {
        ValidationResult::fail(format!(
            "Company name must be between {COMPANY_MIN} and {COMPANY_MAX} characters"
        ))
    } else {
        ValidationResult::ok()
    }
}

/// City: 3-15 characters, letters and spaces only.
pub fn validate_city(raw: &str) -> ValidationResult {
    let value = raw.trim();
    let length = value.chars().count();
    if length < CITY_MIN || length > CITY_MAX {
        return ValidationResult::fail(format!(
            "City must be between {CITY_MIN} and {CITY_MAX} characters"
        ));
    }
    if !value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return ValidationResult::fail("City may only contain letters and spaces");
    }
    ValidationResult::ok()
}

pub fn validate_address_line(raw: &str) -> ValidationResult {
    if raw.trim().is_empty() {
        ValidationResult::fail("Address is required")
    } else {
        ValidationResult::ok()
    }
}

/// VAT number: optional. When present the shape is country-specific, with
/// a generic alphanumeric fallback for unlisted countries.
pub fn validate_vat_number(raw: &str, country_code: &str) -> ValidationResult {
    let value = raw.trim();
    if value.is_empty() {
        return ValidationResult::ok();
    }
    let pattern: &Regex = match country_code.to_ascii_lowercase().as_str() {
        "gb" | "uk" => &VAT_GB_RE,
        "de" => &VAT_DE_RE,
        "fr" => &VAT_FR_RE,
        "in" => &VAT_IN_RE,
        _ => &VAT_GENERIC_RE,
    };
    if pattern.is_match(value) {
        ValidationResult::ok()
    } else {
        ValidationResult::fail("Enter a valid VAT number for the selected country")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_name_bounds() {
        assert!(validate_company_name("Acme Consulting Ltd").is_valid());
        assert!(!validate_company_name("Ab").is_valid());
        assert!(!validate_company_name(&"x".repeat(51)).is_valid());
    }

    #[test]
    fn city_letters_and_spaces_only() {
        assert!(validate_city("San Jose").is_valid());
        assert!(!validate_city("NY").is_valid());
        assert!(!validate_city("A city name too long").is_valid());
        assert!(!validate_city("City-42").is_valid());
    }

    #[test]
    fn address_line_must_be_present() {
        assert!(validate_address_line("21 Jump Street").is_valid());
        assert!(!validate_address_line("   ").is_valid());
    }

    #[test]
    fn vat_is_optional_but_shape_checked_when_present() {
        assert!(validate_vat_number("", "gb").is_valid());
        assert!(validate_vat_number("GB123456789", "gb").is_valid());
        assert!(!validate_vat_number("123456789", "gb").is_valid());
        assert!(validate_vat_number("DE999999999", "de").is_valid());
        assert!(validate_vat_number("FRXX123456789", "fr").is_valid());
        assert!(validate_vat_number("29ABCDE1234F1Z5", "in").is_valid());
        assert!(validate_vat_number("ES12345678", "es").is_valid());
        assert!(!validate_vat_number("!!", "es").is_valid());
    }
}
