//! Demo accounts and login sessions for SnapShop.
//!
//! Accounts live in a JSON list in the durable store; a successful login
//! writes a [`Session`] to the durable store ("remember me") or the
//! ephemeral one.
//!
//! Passwords are stored and compared in plaintext. This crate models a
//! client-side demo, not a real authentication system.
//!
//! # Example
//!
//! ```rust
//! use snapshop_auth::{login, signup, LoginForm, SignupForm};
//! use snapshop_store::{MemoryStore, Stores};
//!
//! let mut stores: Stores<MemoryStore> = Stores::default();
//! let form = SignupForm {
//!     name: "Asha".into(),
//!     email: "a@b.com".into(),
//!     phone: "9876543210".into(),
//!     password: "secret1".into(),
//!     confirm_password: "secret1".into(),
//!     accept_terms: true,
//! };
//! signup(&mut stores.durable, &form).unwrap();
//!
//! let (session, _) = login(&mut stores, &LoginForm::new("a@b.com", "secret1")).unwrap();
//! assert!(session.is_authenticated);
//! ```

mod account;
mod accounts;
mod error;
mod flow;
pub mod forms;
mod password;
mod session;

pub use account::{Account, UserSummary};
pub use accounts::AccountStore;
pub use error::AuthError;
pub use flow::{login, signup};
pub use forms::{FormKind, LoginForm, SignupForm};
pub use password::{strength_score, PasswordStrength};
pub use session::Session;
