//! Crate-wide error type.

use thiserror::Error;

use crate::auth::SessionError;
use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(FieldErrors),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    EmailTaken,

    #[error("Missing required fields")]
    MissingFields,

    #[error("session rejected: {0}")]
    Session(#[from] SessionError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("password hashing failed: {0}")]
    Password(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ApiError {
    /// Field-keyed messages for errors the user can fix by editing the form.
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            ApiError::Validation(errors) => Some(errors.clone()),
            ApiError::InvalidCredentials | ApiError::EmailTaken => {
                Some(FieldErrors::single("email", &self.to_string()))
            }
            _ => None,
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_errors_fold_into_email_field() {
        let errors = ApiError::InvalidCredentials.field_errors().unwrap();
        assert_eq!(errors.get("email"), ["Invalid email or password"]);

        let errors = ApiError::EmailTaken.field_errors().unwrap();
        assert_eq!(errors.get("email"), ["User with this email already exists"]);
    }

    #[test]
    fn test_internal_errors_have_no_field_errors() {
        assert!(ApiError::MissingFields.field_errors().is_none());
        assert!(ApiError::Password("boom".into()).field_errors().is_none());
    }
}
