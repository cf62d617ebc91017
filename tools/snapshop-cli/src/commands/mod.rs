//! CLI command implementations.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod products;
pub mod shell;
pub mod strength;
pub mod theme;

use clap::{Args, Subcommand};
use snapshop_app::Theme;
use snapshop_commerce::checkout::CheckoutFields;
use snapshop_commerce::search::CategoryFilter;
use snapshop_commerce::ProductId;

/// Arguments for the products command.
#[derive(Args, Debug, Clone)]
pub struct ProductsArgs {
    /// Category to show (all, electronics, fashion, home).
    #[arg(short, long, default_value = "all")]
    pub category: CategoryFilter,

    /// Case-insensitive search over title and description.
    #[arg(short, long, default_value = "")]
    pub search: String,
}

/// Arguments for the cart command.
#[derive(Args, Debug, Clone)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add one unit of a product.
    Add {
        /// Product ID.
        id: ProductId,
    },
    /// Remove a product entirely.
    Remove {
        /// Product ID.
        id: ProductId,
    },
    /// Increase a line's quantity by one.
    Inc {
        /// Product ID.
        id: ProductId,
    },
    /// Decrease a line's quantity by one, removing it at zero.
    Dec {
        /// Product ID.
        id: ProductId,
    },
}

/// Arguments for the checkout command.
///
/// Missing fields are submitted empty so validation reports them.
#[derive(Args, Debug, Clone)]
pub struct CheckoutArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub address: String,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub zip: String,
    #[arg(long, default_value = "")]
    pub country: String,
}

impl CheckoutArgs {
    pub fn into_fields(self) -> CheckoutFields {
        CheckoutFields {
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            city: self.city,
            zip: self.zip,
            country: self.country,
        }
    }
}

/// Arguments for the signup command.
#[derive(Args, Debug, Clone)]
pub struct SignupArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Password (prompted for if omitted).
    #[arg(long)]
    pub password: Option<String>,

    /// Password confirmation (prompted for if omitted).
    #[arg(long)]
    pub confirm: Option<String>,

    /// Agree to the Terms & Conditions.
    #[arg(long)]
    pub accept_terms: bool,
}

/// Arguments for the login command.
#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    #[arg(long, default_value = "")]
    pub email: String,

    /// Password (prompted for if omitted).
    #[arg(long)]
    pub password: Option<String>,

    /// Keep the session after this process exits.
    #[arg(short, long)]
    pub remember: bool,
}

/// Arguments for the theme command.
#[derive(Args, Debug, Clone)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: Option<ThemeCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ThemeCommand {
    /// Show the current theme.
    Show,
    /// Switch between light and dark.
    Toggle,
    /// Use a specific theme.
    Set {
        /// light or dark.
        theme: Theme,
    },
}

/// Arguments for the strength command.
#[derive(Args, Debug, Clone)]
pub struct StrengthArgs {
    /// Password to rate.
    pub password: String,
}

/// Arguments for the config command.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
