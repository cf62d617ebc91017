//! Authentication errors.

use snapshop_commerce::validation::FieldErrors;
use snapshop_store::StoreError;
use thiserror::Error;

use crate::forms::{TERMS_FIELD, TERMS_MESSAGE};

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// One or more form fields are invalid.
    #[error("invalid form: {0}")]
    Validation(FieldErrors),

    /// An account with this email already exists.
    #[error("an account with this email already exists: {0}")]
    EmailTaken(String),

    /// No account has this email.
    #[error("no account found with this email: {0}")]
    AccountNotFound(String),

    /// The account exists but the password does not match.
    #[error("incorrect password")]
    IncorrectPassword,

    /// Store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Per-field messages to show next to the form inputs.
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match self {
            AuthError::Validation(fields) => return fields.clone(),
            AuthError::EmailTaken(_) => {
                errors.insert("email", "An account with this email already exists")
            }
            AuthError::AccountNotFound(_) => {
                errors.insert("email", "No account found with this email")
            }
            AuthError::IncorrectPassword => errors.insert("password", "Incorrect password"),
            AuthError::Store(_) => {}
        }
        errors
    }

    /// Short message for a toast, if this failure has one.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            AuthError::EmailTaken(_) => Some("Email already registered. Please login."),
            AuthError::AccountNotFound(_) => Some("Account not found. Please sign up first."),
            AuthError::IncorrectPassword => Some("Incorrect password. Please try again."),
            AuthError::Validation(fields) if fields.contains(TERMS_FIELD) => Some(TERMS_MESSAGE),
            AuthError::Validation(_) => None,
            AuthError::Store(_) => None,
        }
    }

    /// Check if this is a user-correctable failure rather than a backend fault.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, AuthError::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failures_are_distinct() {
        let missing = AuthError::AccountNotFound("a@b.com".into());
        let wrong = AuthError::IncorrectPassword;

        assert_eq!(
            missing.field_errors().get("email"),
            Some("No account found with this email")
        );
        assert_eq!(wrong.field_errors().get("password"), Some("Incorrect password"));
        assert_ne!(missing.notice(), wrong.notice());
    }

    #[test]
    fn test_store_errors_are_not_user_errors() {
        let err = AuthError::Store(StoreError::Backend("disk full".into()));
        assert!(!err.is_user_error());
        assert!(err.notice().is_none());
        assert!(AuthError::IncorrectPassword.is_user_error());
    }

    #[test]
    fn test_only_unchecked_terms_raise_a_notice() {
        let mut fields = FieldErrors::new();
        fields.insert("email", "Invalid email");
        let err = AuthError::Validation(fields.clone());
        assert!(err.notice().is_none());

        fields.insert(TERMS_FIELD, TERMS_MESSAGE);
        let err = AuthError::Validation(fields);
        assert_eq!(err.notice(), Some("Please agree to the Terms & Conditions"));
    }
}
