//! Contact form submissions. They are validated and logged; nothing is stored or mailed.

use serde::Deserialize;

use crate::validation::{is_valid_email, FieldErrors};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Checkbox: present as `"on"` when ticked.
    pub is_influencer: Option<String>,
    pub is_brand: Option<String>,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "Name is required");
        }
        if !is_valid_email(self.email.trim()) {
            errors.add("email", "Invalid email address");
        }
        if self.message.trim().is_empty() {
            errors.add("message", "Message is required");
        }
        errors.into_result()
    }

    /// Who the sender says they are, for the log line.
    pub fn audience(&self) -> &'static str {
        match (self.is_influencer.is_some(), self.is_brand.is_some()) {
            (true, true) => "influencer+brand",
            (true, false) => "influencer",
            (false, true) => "brand",
            (false, false) => "unspecified",
        }
    }

    /// Blank the message fields but keep who sent it, for re-rendering after success.
    pub fn cleared(&self) -> Self {
        Self {
            name: self.name.clone(),
            email: self.email.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_validation() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.get("name"), ["Name is required"]);
        assert_eq!(errors.get("email"), ["Invalid email address"]);
        assert_eq!(errors.get("message"), ["Message is required"]);
        assert!(errors.get("subject").is_empty());

        let form = ContactForm {
            name: "Sam".into(),
            email: "sam@brand.co".into(),
            message: "Hello".into(),
            is_brand: Some("on".into()),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
        assert_eq!(form.audience(), "brand");
    }

    #[test]
    fn test_cleared_keeps_sender() {
        let form = ContactForm {
            name: "Sam".into(),
            email: "sam@brand.co".into(),
            subject: "Partnership".into(),
            message: "Hello".into(),
            is_influencer: Some("on".into()),
            is_brand: None,
        };
        let cleared = form.cleared();
        assert_eq!(cleared.name, "Sam");
        assert_eq!(cleared.email, "sam@brand.co");
        assert!(cleared.subject.is_empty());
        assert!(cleared.is_influencer.is_none());
    }
}
