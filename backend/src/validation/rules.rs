//! Common validation rules shared across request payloads.

use crate::models::EmployeeStatus;
use validator::ValidationError;

/// Validates that an employee status label is one the directory knows.
///
/// Blank labels are accepted and mean "no status".
pub fn validate_status_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() || EmployeeStatus::parse(label).is_some() {
        return Ok(());
    }
    let mut err = ValidationError::new("status_unknown");
    err.message = Some(format!("Unknown employee status: {}", label.trim()).into());
    Err(err)
}

/// Validates that an e-mail address belongs to `domain`.
///
/// Requirements:
/// - exactly one `@` with a non-empty local part
/// - domain compared case-insensitively
pub fn validate_email_domain(email: &str, domain: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    let Some((local, host)) = email.split_once('@') else {
        return Err(ValidationError::new("email_invalid"));
    };
    if local.is_empty() || host.contains('@') {
        return Err(ValidationError::new("email_invalid"));
    }
    if !host.eq_ignore_ascii_case(domain.trim_start_matches('@')) {
        let mut err = ValidationError::new("email_domain_not_allowed");
        err.message = Some(format!("Email must end with @{}", domain).into());
        return Err(err);
    }
    Ok(())
}

/// Validates that a free-text field is non-blank and within `max` characters.
pub fn validate_bounded_text(value: &str, max: usize) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("text_required"));
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::new("text_too_long"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_label_accepts_known_and_blank() {
        assert!(validate_status_label("Active").is_ok());
        assert!(validate_status_label("on leave").is_ok());
        assert!(validate_status_label("  ").is_ok());
    }

    #[test]
    fn status_label_rejects_unknown() {
        let err = validate_status_label("Retired").unwrap_err();
        assert_eq!(err.code, "status_unknown");
    }

    #[test]
    fn email_domain_accepts_matching_domain() {
        assert!(validate_email_domain("jane@Gmail.com", "gmail.com").is_ok());
    }

    #[test]
    fn email_domain_rejects_other_domain() {
        let err = validate_email_domain("jane@corp.io", "gmail.com").unwrap_err();
        assert_eq!(err.code, "email_domain_not_allowed");
    }

    #[test]
    fn email_domain_rejects_malformed() {
        assert!(validate_email_domain("no-at-sign", "gmail.com").is_err());
        assert!(validate_email_domain("@gmail.com", "gmail.com").is_err());
        assert!(validate_email_domain("a@b@gmail.com", "gmail.com").is_err());
    }

    #[test]
    fn bounded_text_limits() {
        assert!(validate_bounded_text("ok", 5).is_ok());
        assert!(validate_bounded_text("   ", 5).is_err());
        assert!(validate_bounded_text("toolong", 5).is_err());
    }
}
