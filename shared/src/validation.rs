use once_cell::sync::Lazy;
use regex::Regex;
use rustrict::CensorStr;
use validator::ValidationError;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

// Digits with optional leading +, spaces, dashes, dots and parentheses.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9 ()\-.]{7,20}$").unwrap());

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() || !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new("invalid_email_format"));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if !PHONE_REGEX.is_match(phone) || digits < 7 {
        return Err(ValidationError::new("invalid_phone_format"));
    }
    Ok(())
}

pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::new("name_required"));
    }
    if name.is_inappropriate() {
        return Err(ValidationError::new("inappropriate_name"));
    }
    Ok(())
}

/// True when every string is non-empty once surrounding whitespace is removed.
pub fn all_filled(fields: &[&str]) -> bool {
    fields.iter().all(|f| !f.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("  ana@example.com ").is_ok());
        assert!(validate_email("ana@example").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
        assert!(validate_phone("555.123.4567").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("call me maybe").is_err());
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("Maria").is_ok());
        assert_eq!(
            validate_display_name("   ").unwrap_err().code,
            "name_required"
        );
    }

    #[test]
    fn test_all_filled() {
        assert!(all_filled(&["a", "b"]));
        assert!(!all_filled(&["a", " "]));
    }
}
