//! Authentication form payloads and their validation rules.

use serde::Deserialize;

use crate::models::AccountType;
use crate::validation::{is_valid_email, normalize_email, FieldErrors};

/// Minimum password length accepted at sign-up.
const MIN_PASSWORD_LEN: usize = 6;

/// Names travel in the session cookie, which browsers cap at 4 KB.
pub const MAX_NAME_LEN: usize = 50;

/// Trimmed name, with a required or too-long error recorded under `field`.
fn check_name<'a>(errors: &mut FieldErrors, field: &str, label: &str, value: &'a str) -> &'a str {
    let name = value.trim();
    if name.is_empty() {
        errors.add(field, &format!("{label} is required"));
    } else if name.chars().count() > MAX_NAME_LEN {
        errors.add(field, &format!("{label} must be at most {MAX_NAME_LEN} characters"));
    }
    name
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// Validated, normalised `(email, password)`.
    pub fn validate(&self) -> Result<(String, String), FieldErrors> {
        let mut errors = FieldErrors::new();
        let email = normalize_email(&self.email);
        if !is_valid_email(&email) {
            errors.add("email", "Invalid email address");
        }
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors.into_result()?;
        Ok((email, self.password.clone()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub account_type: String,
}

/// A sign-up that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSignUp {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub account_type: AccountType,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<ValidSignUp, FieldErrors> {
        let mut errors = FieldErrors::new();

        let first_name = check_name(&mut errors, "firstName", "First name", &self.first_name);
        let last_name = check_name(&mut errors, "lastName", "Last name", &self.last_name);
        let email = normalize_email(&self.email);
        if !is_valid_email(&email) {
            errors.add("email", "Invalid email address");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add("password", "Password must be at least 6 characters");
        }
        let account_type = self.account_type.parse::<AccountType>().ok();
        if account_type.is_none() {
            errors.add("accountType", "Account type must be brand or influencer");
        }
        if self.password != self.confirm_password {
            errors.add("confirmPassword", "Passwords don't match");
        }

        match account_type {
            Some(account_type) if errors.is_empty() => Ok(ValidSignUp {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email,
                password: self.password.clone(),
                account_type,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<String, FieldErrors> {
        let email = normalize_email(&self.email);
        if email.is_empty() {
            return Err(FieldErrors::single("email", "Email is required"));
        }
        Ok(email)
    }
}

/// Editable profile fields. Email is the lookup key and cannot change.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<(String, String), FieldErrors> {
        let mut errors = FieldErrors::new();
        let first_name = check_name(&mut errors, "firstName", "First name", &self.first_name);
        let last_name = check_name(&mut errors, "lastName", "Last name", &self.last_name);
        errors.into_result()?;
        Ok((first_name.to_string(), last_name.to_string()))
    }
}
