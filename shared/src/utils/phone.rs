//! Phone number utilities
//!
//! Every phone number the service compares is first reduced to one canonical
//! shape: the 12-digit Turkish mobile number with its `90` country calling
//! code, e.g. `905551234567`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Country calling code for Turkey
pub const TR_COUNTRY_CODE: &str = "90";

/// Length of a normalized phone number
pub const NORMALIZED_PHONE_LEN: usize = 12;

// ASCII only: `\D` would keep non-Latin digits
static NON_DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]+").expect("non-digit pattern is valid"));

/// Normalize a Turkish phone number to `90XXXXXXXXXX`.
///
/// Separators are stripped first, then exactly one of three shapes is
/// accepted:
///
/// | digits | prefix | result            |
/// |--------|--------|-------------------|
/// | 12     | `90`   | unchanged         |
/// | 11     | `0`    | `0` → `90`        |
/// | 10     | `5`    | `90` prepended    |
///
/// Anything else yields `None`.
///
/// # Examples
///
/// ```
/// use mc_shared::utils::phone::normalize_tr_phone;
///
/// assert_eq!(normalize_tr_phone("0 (555) 123 45 67").as_deref(), Some("905551234567"));
/// assert_eq!(normalize_tr_phone("+90 555 123 4567").as_deref(), Some("905551234567"));
/// assert_eq!(normalize_tr_phone("12345"), None);
/// ```
pub fn normalize_tr_phone(raw: &str) -> Option<String> {
    let digits = NON_DIGIT_REGEX.replace_all(raw, "");

    match digits.len() {
        12 if digits.starts_with(TR_COUNTRY_CODE) => Some(digits.into_owned()),
        11 if digits.starts_with('0') => Some(format!("{}{}", TR_COUNTRY_CODE, &digits[1..])),
        10 if digits.starts_with('5') => Some(format!("{}{}", TR_COUNTRY_CODE, digits)),
        _ => None,
    }
}

/// Mask a phone number for log output (e.g. 905****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let digits = NON_DIGIT_REGEX.replace_all(phone, "");
    if digits.len() >= 7 {
        format!("{}****{}", &digits[0..3], &digits[digits.len() - 4..])
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_shapes_normalize_identically() {
        let expected = Some("905551234567".to_string());
        assert_eq!(normalize_tr_phone("5551234567"), expected);
        assert_eq!(normalize_tr_phone("05551234567"), expected);
        assert_eq!(normalize_tr_phone("905551234567"), expected);
    }

    #[test]
    fn test_separators_are_stripped() {
        let expected = Some("905321112233".to_string());
        assert_eq!(normalize_tr_phone("+90 (532) 111-22-33"), expected);
        assert_eq!(normalize_tr_phone("0532 111 22 33"), expected);
        assert_eq!(normalize_tr_phone("532.111.22.33"), expected);
        assert_eq!(normalize_tr_phone("  5321112233\n"), expected);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for input in ["5051234567", "05051234567", "+90 505 123 45 67", "0090-505-123-4567"] {
            if let Some(once) = normalize_tr_phone(input) {
                assert_eq!(normalize_tr_phone(&once), Some(once.clone()));
                assert_eq!(once.len(), NORMALIZED_PHONE_LEN);
                assert!(once.starts_with(TR_COUNTRY_CODE));
            }
        }
    }

    #[test]
    fn test_rejected_shapes() {
        // wrong lengths
        assert_eq!(normalize_tr_phone(""), None);
        assert_eq!(normalize_tr_phone("555123456"), None);
        assert_eq!(normalize_tr_phone("9055512345678"), None);
        assert_eq!(normalize_tr_phone("00905551234567"), None);
        // right lengths, wrong prefixes
        assert_eq!(normalize_tr_phone("915551234567"), None);
        assert_eq!(normalize_tr_phone("15551234567"), None);
        assert_eq!(normalize_tr_phone("4551234567"), None);
        // no digits at all
        assert_eq!(normalize_tr_phone("not a phone"), None);
    }

    #[test]
    fn test_non_ascii_digits_are_stripped() {
        // Arabic-Indic digits are not phone digits here
        assert_eq!(normalize_tr_phone("٥٥٥١٢٣٤٥٦٧"), None);
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("905551234567"), "905****4567");
        assert_eq!(mask_phone_number("+90 555 123 45 67"), "905****4567");
        assert_eq!(mask_phone_number("12345"), "****");
    }
}
