//! Signup and login against the stored account list.

use crate::{Account, AccountStore, AuthError, LoginForm, Session, SignupForm};
use snapshop_store::{KeyValueStore, Scope, Stores};

/// Register a new account.
///
/// Validates the form, rejects a taken email, then appends the account to
/// the durable list. Does not log in.
pub fn signup<S>(store: &mut S, form: &SignupForm) -> Result<Account, AuthError>
where
    S: KeyValueStore + ?Sized,
{
    let form = form.check()?;

    let mut accounts = AccountStore::load(&*store)?;
    let account = accounts
        .insert(Account::new(form.name, form.email, form.phone, form.password))?
        .clone();
    accounts.save(store)?;

    tracing::info!(email = %account.email, id = %account.id, "account created");
    Ok(account)
}

/// Log in with an email and password.
///
/// On success the session is written to the durable scope when
/// `remember_me` is set, otherwise to the ephemeral scope.
pub fn login<D, E>(stores: &mut Stores<D, E>, form: &LoginForm) -> Result<(Session, Scope), AuthError>
where
    D: KeyValueStore,
    E: KeyValueStore,
{
    let form = form.check()?;

    let accounts = AccountStore::load(&stores.durable)?;
    let account = accounts
        .find_by_email(&form.email)
        .ok_or_else(|| AuthError::AccountNotFound(form.email.clone()))?;

    if !account.password_matches(&form.password) {
        tracing::info!(email = %form.email, "login rejected: incorrect password");
        return Err(AuthError::IncorrectPassword);
    }

    let session = Session::start(account);
    let scope = Session::scope_for(form.remember_me);
    session.save(stores, scope)?;

    tracing::info!(email = %form.email, %scope, "logged in");
    Ok((session, scope))
}
