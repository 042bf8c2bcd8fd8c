//! Validators for the identity block collected from anonymous users.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationResult;

const FIRST_NAME_MIN: usize = 3;
const FIRST_NAME_MAX: usize = 10;
const LAST_NAME_MIN: usize = 3;
const LAST_NAME_MAX: usize = 20;

const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 50;
const MAX_REPEAT_RUN: usize = 3;

/// Matched by substring containment, not exact domain equality.
const DISPOSABLE_DOMAINS: &[&str] = &[
    "mailinator",
    "guerrillamail",
    "10minutemail",
    "tempmail",
    "trashmail",
    "yopmail",
    "sharklasers",
];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

static ZIP_US_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("valid US zip pattern"));
static ZIP_IN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9]\d{5}$").expect("valid IN zip pattern"));
static ZIP_GB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{1,2}\d[A-Za-z\d]? ?\d[A-Za-z]{2}$").expect("valid GB zip pattern")
});
static ZIP_CA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]\d[A-Za-z] ?\d[A-Za-z]\d$").expect("valid CA zip pattern")
});
static ZIP_GENERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 -]{1,8}[A-Za-z0-9]$").expect("valid zip pattern"));

fn validate_name(raw: &str, label: &str, min: usize, max: usize) -> ValidationResult {
    let value = raw.trim();
    let length = value.chars().count();
    if length < min || length > max {
        return ValidationResult::fail(format!(
            "{label} must be between {min} and {max} letters"
        ));
    }
    if !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return ValidationResult::fail(format!("{label} may only contain letters"));
    }
    ValidationResult::ok()
}

pub fn validate_first_name(raw: &str) -> ValidationResult {
    validate_name(raw, "First name", FIRST_NAME_MIN, FIRST_NAME_MAX)
}

pub fn validate_last_name(raw: &str) -> ValidationResult {
    validate_name(raw, "Last name", LAST_NAME_MIN, LAST_NAME_MAX)
}

/// Email: shape check plus a disposable-provider deny-list. Deny-list
/// entries match anywhere in the address.
pub fn validate_email(raw: &str) -> ValidationResult {
    let value = raw.trim();
    if !EMAIL_RE.is_match(value) {
        return ValidationResult::fail("Enter a valid email address");
    }
    let lowered = value.to_lowercase();
    if DISPOSABLE_DOMAINS
        .iter()
        .any(|provider| lowered.contains(provider))
    {
        return ValidationResult::fail("Disposable email addresses are not accepted");
    }
    ValidationResult::ok()
}

/// Password: 8-50 chars, all four character classes, no run of four or more
/// identical characters, and no `password` substring in any letter case.
/// The three content checks are independent; all must pass.
pub fn validate_password(raw: &str) -> ValidationResult {
    let length = raw.chars().count();
    if length < PASSWORD_MIN || length > PASSWORD_MAX {
        return ValidationResult::fail(format!(
            "Password must be between {PASSWORD_MIN} and {PASSWORD_MAX} characters"
        ));
    }
    let has_upper = raw.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = raw.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = raw.chars().any(|c| c.is_ascii_digit());
    let has_special = raw.chars().any(|c| !c.is_ascii_alphanumeric());
    if !(has_upper && has_lower && has_digit && has_special) {
        return ValidationResult::fail(
            "Password needs an uppercase letter, a lowercase letter, a digit, and a special character",
        );
    }
    if has_repeat_run(raw) {
        return ValidationResult::fail(
            "Password cannot repeat the same character four or more times in a row",
        );
    }
    if raw.to_lowercase().contains("password") {
        return ValidationResult::fail("Password cannot contain the word \"password\"");
    }
    ValidationResult::ok()
}

fn has_repeat_run(value: &str) -> bool {
    let mut run = 0usize;
    let mut previous: Option<char> = None;
    for c in value.chars() {
        if Some(c) == previous {
            run += 1;
            if run > MAX_REPEAT_RUN {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}

/// Phone: digits only, never all one digit. Indian numbers must be exactly
/// ten digits starting 6-9; every other locale accepts 7-15 digits.
pub fn validate_phone(raw: &str, country_code: &str) -> ValidationResult {
    let value = raw.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::fail("Phone number may only contain digits");
    }
    let first = value.chars().next().unwrap_or('0');
    if value.chars().all(|c| c == first) {
        return ValidationResult::fail("Enter a real phone number");
    }
    if country_code.eq_ignore_ascii_case("in") {
        if value.len() != 10 || !matches!(first, '6'..='9') {
            return ValidationResult::fail(
                "Enter a valid 10-digit mobile number starting with 6-9",
            );
        }
    } else if value.len() < 7 || value.len() > 15 {
        return ValidationResult::fail("Phone number must be 7 to 15 digits");
    }
    ValidationResult::ok()
}

/// Zip/postal code: pattern depends on country, with a permissive
/// alphanumeric fallback for unlisted countries.
pub fn validate_zip_code(raw: &str, country_code: &str) -> ValidationResult {
    let value = raw.trim();
    let pattern: &Regex = match country_code.to_ascii_lowercase().as_str() {
        "us" => &ZIP_US_RE,
        "in" => &ZIP_IN_RE,
        "gb" | "uk" => &ZIP_GB_RE,
        "ca" => &ZIP_CA_RE,
        _ => &ZIP_GENERIC_RE,
    };
    if pattern.is_match(value) {
        ValidationResult::ok()
    } else {
        ValidationResult::fail("Enter a valid zip or postal code")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_enforce_letter_only_bounds() {
        assert!(validate_first_name("Ana").is_valid());
        assert!(!validate_first_name("Al").is_valid());
        assert!(!validate_first_name("Maximiliano").is_valid());
        assert!(!validate_first_name("An4").is_valid());
        assert!(validate_last_name("Fitzgerald").is_valid());
        assert!(!validate_last_name("O'Brien").is_valid());
    }

    #[test]
    fn email_shape_and_deny_list() {
        assert!(validate_email("client@example.com").is_valid());
        assert!(!validate_email("not-an-email").is_valid());
        assert!(!validate_email("user@mailinator.com").is_valid());
        // Containment, not exact match: subdomains are still denied.
        assert!(!validate_email("user@mail.tempmail.io").is_valid());
    }

    #[test]
    fn password_requires_all_four_classes() {
        assert!(validate_password("Aa1!Aa1!").is_valid());
        assert!(!validate_password("aa1!aa1!").is_valid(), "missing upper");
        assert!(!validate_password("AA1!AA1!").is_valid(), "missing lower");
        assert!(!validate_password("Aaa!Aaa!").is_valid(), "missing digit");
        assert!(!validate_password("Aa11Aa11").is_valid(), "missing special");
    }

    #[test]
    fn password_rejects_repeats_and_banned_word() {
        assert!(!validate_password("Aa1!aaaa").is_valid());
        assert!(validate_password("Aa1!aaab").is_valid());
        assert!(!validate_password("Password1!").is_valid());
        assert!(!validate_password("xPASSWORDy1!").is_valid());
        assert!(!validate_password("Aa1!").is_valid());
    }

    #[test]
    fn indian_phones_need_ten_digits_starting_six_to_nine() {
        assert!(validate_phone("9876543210", "in").is_valid());
        assert!(!validate_phone("1234567890", "in").is_valid());
        assert!(!validate_phone("98765432", "in").is_valid());
    }

    #[test]
    fn international_phones_accept_seven_to_fifteen_digits() {
        assert!(validate_phone("1234567", "us").is_valid());
        assert!(validate_phone("123456789012345", "de").is_valid());
        assert!(!validate_phone("123456", "us").is_valid());
        assert!(!validate_phone("1234567890123456", "us").is_valid());
        assert!(!validate_phone("12 34 56 78", "us").is_valid());
    }

    #[test]
    fn all_identical_digits_always_rejected() {
        for country in ["in", "us", "fr", "zz"] {
            assert!(!validate_phone("0000000000", country).is_valid(), "{country}");
            assert!(!validate_phone("9999999999", country).is_valid(), "{country}");
        }
    }

    #[test]
    fn zip_patterns_follow_country() {
        assert!(validate_zip_code("94107", "us").is_valid());
        assert!(validate_zip_code("94107-1234", "us").is_valid());
        assert!(!validate_zip_code("9410", "us").is_valid());
        assert!(validate_zip_code("560001", "in").is_valid());
        assert!(!validate_zip_code("060001", "in").is_valid());
        assert!(validate_zip_code("SW1A 1AA", "gb").is_valid());
        assert!(validate_zip_code("K1A 0B1", "ca").is_valid());
        assert!(validate_zip_code("75008", "fr").is_valid());
        assert!(!validate_zip_code("!", "fr").is_valid());
    }
}
