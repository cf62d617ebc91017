//! Checkout field validation.

use crate::checkout::{CheckoutField, CheckoutFields};
use crate::validation::{has_min_chars, is_valid_email, is_valid_phone, FieldErrors};

/// Validate a checkout form.
///
/// Every field is trimmed first and every rule is checked, so the result
/// names all invalid fields at once. Empty means the order may be placed.
pub fn validate(fields: &CheckoutFields) -> FieldErrors {
    let fields = fields.trimmed();
    let mut errors = FieldErrors::new();

    for field in CheckoutField::ALL {
        let value = fields.get(field);
        let ok = match field {
            CheckoutField::Name => has_min_chars(value, 2),
            CheckoutField::Email => is_valid_email(value),
            CheckoutField::Phone => is_valid_phone(value),
            CheckoutField::Address => has_min_chars(value, 10),
            CheckoutField::City => has_min_chars(value, 2),
            CheckoutField::Zip => has_min_chars(value, 4),
            CheckoutField::Country => has_min_chars(value, 2),
        };
        errors.check(ok, field.as_str(), field.error_message());
    }

    errors
}
