//! Signup and login forms.

use crate::AuthError;
use serde::{Deserialize, Serialize};
use snapshop_commerce::validation::{has_min_chars, is_valid_email, is_valid_phone, FieldErrors};

/// Minimum password length accepted by both forms.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Error key for the terms checkbox, which has no input of its own.
pub const TERMS_FIELD: &str = "terms";

/// Message shown when the terms box is left unchecked.
pub const TERMS_MESSAGE: &str = "Please agree to the Terms & Conditions";

/// Which form the auth screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    #[default]
    Login,
    Signup,
}

impl FormKind {
    /// The other form.
    pub fn toggled(self) -> Self {
        match self {
            FormKind::Login => FormKind::Signup,
            FormKind::Signup => FormKind::Login,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Signup => "signup",
        }
    }
}

/// Signup form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl SignupForm {
    /// Copy with name, email and phone trimmed. Passwords are kept as typed.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            ..self.clone()
        }
    }

    /// Check every rule and report all violations together.
    pub fn validate(&self) -> FieldErrors {
        let form = self.trimmed();
        let mut errors = FieldErrors::new();

        errors.check(
            has_min_chars(&form.name, 2),
            "name",
            "Name must be at least 2 characters",
        );
        errors.check(
            is_valid_email(&form.email),
            "email",
            "Please enter a valid email address",
        );
        errors.check(
            is_valid_phone(&form.phone),
            "phone",
            "Please enter a valid phone number",
        );
        errors.check(
            has_min_chars(&form.password, MIN_PASSWORD_CHARS),
            "password",
            "Password must be at least 6 characters",
        );
        errors.check(
            form.password == form.confirm_password,
            "confirmPassword",
            "Passwords do not match",
        );
        errors.check(
            form.accept_terms,
            TERMS_FIELD,
            TERMS_MESSAGE,
        );

        errors
    }

    /// Validate, turning violations into an error.
    pub fn check(&self) -> Result<Self, AuthError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self.trimmed())
        } else {
            Err(AuthError::Validation(errors))
        }
    }
}

/// Login form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Keep the session across restarts.
    pub remember_me: bool,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    pub fn remember(mut self, remember_me: bool) -> Self {
        self.remember_me = remember_me;
        self
    }

    /// Copy with the email trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let form = self.trimmed();
        let mut errors = FieldErrors::new();
        errors.check(
            is_valid_email(&form.email),
            "email",
            "Please enter a valid email address",
        );
        errors.check(
            has_min_chars(&form.password, MIN_PASSWORD_CHARS),
            "password",
            "Password must be at least 6 characters",
        );
        errors
    }

    /// Validate, turning violations into an error.
    pub fn check(&self) -> Result<Self, AuthError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self.trimmed())
        } else {
            Err(AuthError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupForm {
        SignupForm {
            name: "Asha".into(),
            email: "a@b.com".into(),
            phone: "9876543210".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_valid_signup() {
        assert!(signup().validate().is_empty());
    }

    #[test]
    fn test_signup_reports_all_violations() {
        let form = SignupForm {
            name: " A ".into(),
            password: "abc".into(),
            confirm_password: "abd".into(),
            ..SignupForm::default()
        };
        let errors = form.validate();
        assert_eq!(
            errors.fields(),
            vec!["name", "email", "phone", "password", "confirmPassword", "terms"]
        );
    }

    #[test]
    fn test_terms_required() {
        let form = SignupForm {
            accept_terms: false,
            ..signup()
        };
        let err = form.check().unwrap_err();
        assert_eq!(err.notice(), Some("Please agree to the Terms & Conditions"));
    }

    #[test]
    fn test_password_not_trimmed() {
        let form = SignupForm {
            password: " secret ".into(),
            confirm_password: "secret".into(),
            ..signup()
        };
        assert_eq!(form.validate().fields(), vec!["confirmPassword"]);
    }

    #[test]
    fn test_login_validation() {
        assert!(LoginForm::new(" a@b.com ", "secret1").validate().is_empty());

        let errors = LoginForm::new("a@b", "123").validate();
        assert_eq!(errors.fields(), vec!["email", "password"]);
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_form_toggle() {
        assert_eq!(FormKind::Login.toggled(), FormKind::Signup);
        assert_eq!(FormKind::Signup.toggled().toggled(), FormKind::Signup);
    }
}
