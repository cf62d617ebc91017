//! Checkout form fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One input of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutField {
    Name,
    Email,
    Phone,
    Address,
    City,
    Zip,
    Country,
}

impl CheckoutField {
    /// All fields in form order.
    pub const ALL: [CheckoutField; 7] = [
        CheckoutField::Name,
        CheckoutField::Email,
        CheckoutField::Phone,
        CheckoutField::Address,
        CheckoutField::City,
        CheckoutField::Zip,
        CheckoutField::Country,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutField::Name => "name",
            CheckoutField::Email => "email",
            CheckoutField::Phone => "phone",
            CheckoutField::Address => "address",
            CheckoutField::City => "city",
            CheckoutField::Zip => "zip",
            CheckoutField::Country => "country",
        }
    }

    /// Form label.
    pub fn label(&self) -> &'static str {
        match self {
            CheckoutField::Name => "Full Name",
            CheckoutField::Email => "Email",
            CheckoutField::Phone => "Phone",
            CheckoutField::Address => "Address",
            CheckoutField::City => "City",
            CheckoutField::Zip => "ZIP Code",
            CheckoutField::Country => "Country",
        }
    }

    /// Message shown when the field fails validation.
    pub fn error_message(&self) -> &'static str {
        match self {
            CheckoutField::Name => "Please enter a valid name",
            CheckoutField::Email => "Please enter a valid email address",
            CheckoutField::Phone => "Please enter a valid phone number",
            CheckoutField::Address => "Please enter a complete address",
            CheckoutField::City => "Please enter a valid city",
            CheckoutField::Zip => "Please enter a valid ZIP code",
            CheckoutField::Country => "Please enter a valid country",
        }
    }
}

impl fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckoutField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckoutField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown checkout field: {s}"))
    }
}

/// Raw checkout form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub country: String,
}

impl CheckoutFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy with every field trimmed of surrounding whitespace.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            zip: self.zip.trim().to_string(),
            country: self.country.trim().to_string(),
        }
    }

    pub fn get(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::Name => &self.name,
            CheckoutField::Email => &self.email,
            CheckoutField::Phone => &self.phone,
            CheckoutField::Address => &self.address,
            CheckoutField::City => &self.city,
            CheckoutField::Zip => &self.zip,
            CheckoutField::Country => &self.country,
        }
    }

    pub fn set(&mut self, field: CheckoutField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CheckoutField::Name => self.name = value,
            CheckoutField::Email => self.email = value,
            CheckoutField::Phone => self.phone = value,
            CheckoutField::Address => self.address = value,
            CheckoutField::City => self.city = value,
            CheckoutField::Zip => self.zip = value,
            CheckoutField::Country => self.country = value,
        }
    }
}
