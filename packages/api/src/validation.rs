//! Field-keyed validation messages.

use std::collections::BTreeMap;

use serde::Serialize;

/// Validation messages grouped by form field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a single-message error list.
    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    /// Messages recorded for `field`, empty if it passed.
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Loose structural email check: one `@`, a non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    let has_dot = domain.contains('.');
    has_dot && labels.all(|label| !label.is_empty())
}

/// Trim and lower-case an email so it can be used as a lookup key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_collect_per_field() {
        let mut errors = FieldErrors::new();
        assert!(errors.is_empty());
        errors.add("email", "Invalid email address");
        errors.add("email", "Email is required");
        errors.add("password", "Password is required");

        assert_eq!(errors.get("email").len(), 2);
        assert_eq!(errors.get("password"), ["Password is required"]);
        assert!(errors.get("firstName").is_empty());
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let errors = FieldErrors::single("email", "Invalid email or password");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"email":["Invalid email or password"]}"#);
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("emma@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("emma"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("emma@example"));
        assert!(!is_valid_email("emma@.com"));
        assert!(!is_valid_email("emma@example."));
        assert!(!is_valid_email("em ma@example.com"));
        assert!(!is_valid_email("emma@@example.com"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Emma@Example.COM "), "emma@example.com");
    }
}
