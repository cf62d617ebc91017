//! Password strength meter.
//!
//! Advisory only: signup accepts any password of six or more characters
//! whatever its rating.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse password rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Rate a password. Empty input has no rating.
    pub fn rate(password: &str) -> Option<Self> {
        if password.is_empty() {
            return None;
        }
        Some(match strength_score(password) {
            0..=2 => PasswordStrength::Weak,
            3..=4 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        }
    }

    /// Text shown under the password input.
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak password",
            PasswordStrength::Medium => "Medium password",
            PasswordStrength::Strong => "Strong password",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of strength checks a password passes, from 0 to 6.
///
/// Checks: at least 8 characters, at least 12 characters, an ASCII
/// lowercase letter, an ASCII uppercase letter, a digit, and a character
/// outside `[a-zA-Z0-9]`.
pub fn strength_score(password: &str) -> u8 {
    let len = password.chars().count();
    let checks = [
        len >= 8,
        len >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|&&passed| passed).count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_rating() {
        assert_eq!(PasswordStrength::rate(""), None);
    }

    #[test]
    fn test_scores() {
        assert_eq!(strength_score("abc"), 1);
        assert_eq!(strength_score("abcdefgh"), 2);
        assert_eq!(strength_score("Abcdefg1"), 4);
        assert_eq!(strength_score("Abcdefgh1234!"), 6);
        assert_eq!(strength_score("pässwörd"), 3);
    }

    #[test]
    fn test_ratings() {
        assert_eq!(PasswordStrength::rate("secret"), Some(PasswordStrength::Weak));
        assert_eq!(PasswordStrength::rate("abcdefgh"), Some(PasswordStrength::Weak));
        assert_eq!(PasswordStrength::rate("Abcdefg1"), Some(PasswordStrength::Medium));
        assert_eq!(PasswordStrength::rate("Abcdefg1!"), Some(PasswordStrength::Strong));
        assert_eq!(
            PasswordStrength::rate("Abcdefgh1234!").map(|s| s.label()),
            Some("Strong password")
        );
    }
}
