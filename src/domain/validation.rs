use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("email regex should compile")
});

/// Input that parsed but breaks a field rule.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} should not be empty")]
    Empty { field: &'static str },
    #[error("email must be an email: {0}")]
    InvalidEmail(String),
}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

pub(crate) fn require_email(value: &str) -> Result<(), ValidationError> {
    require_non_empty("email", value)?;
    if !EMAIL_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidEmail(value.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rules() {
        assert!(require_email("alice@example.com").is_ok());
        assert!(require_email("a.b+tag@mail.example.org").is_ok());
        assert_eq!(require_email(""), Err(ValidationError::Empty { field: "email" }));
        for bad in ["not-an-email", "a@b", "@example.com", "a b@example.com", "a@example."] {
            assert_eq!(
                require_email(bad),
                Err(ValidationError::InvalidEmail(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_blank_is_empty() {
        assert_eq!(
            require_non_empty("userId", "  "),
            Err(ValidationError::Empty { field: "userId" })
        );
        assert!(require_non_empty("userId", "u1").is_ok());
    }
}
