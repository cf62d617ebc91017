//! Signup, login, and session status.

use anyhow::{bail, Result};
use dialoguer::Password;
use snapshop_app::{AuthAction, AuthScreen, Effect, Outcome};
use snapshop_auth::{LoginForm, Session, SignupForm};
use snapshop_commerce::cart::load_cart;
use snapshop_commerce::Currency;
use snapshop_store::{KeyValueStore, Scope, Stores};

use super::{LoginArgs, SignupArgs};
use crate::context::Context;
use crate::output::theme_badge;
use crate::surface::{Show, Terminal, TerminalNavigator};

/// Run the signup command.
pub fn signup(args: SignupArgs, ctx: &Context) -> Result<()> {
    let mut screen = ctx.auth_screen()?;
    let mut navigator = TerminalNavigator::new(&ctx.output, false);
    if screen.enter(&mut navigator)? {
        ctx.output.info("Already logged in");
        return Ok(());
    }
    screen.dispatch(AuthAction::ShowSignup)?;
    apply_signup(args, &mut screen, &mut navigator, ctx)?;
    Ok(())
}

/// Run the login command.
pub fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let mut screen = ctx.auth_screen()?;
    let mut navigator = TerminalNavigator::new(&ctx.output, false);
    if screen.enter(&mut navigator)? {
        ctx.output.info("Already logged in");
        return Ok(());
    }

    let outcome = apply_login(args, &mut screen, &mut navigator, ctx)?;
    if let Some(Effect::LoggedIn {
        scope: Scope::Ephemeral,
        ..
    }) = outcome.effect
    {
        ctx.output.warn(
            "Session was not remembered and ends with this command; use --remember or `snapshop shell`",
        );
    }
    Ok(())
}

/// Submit the signup form on an open auth screen.
pub fn apply_signup<D, E>(
    args: SignupArgs,
    screen: &mut AuthScreen<D, E>,
    navigator: &mut TerminalNavigator<'_>,
    ctx: &Context,
) -> Result<Outcome>
where
    D: KeyValueStore,
    E: KeyValueStore,
{
    let mut terminal = Terminal::new(&ctx.output, Show::Auth);

    let password = match args.password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };
    screen.run(AuthAction::PasswordInput(password.clone()), &mut terminal, navigator)?;

    let confirm_password = match args.confirm {
        Some(confirm) => confirm,
        None => Password::new().with_prompt("Confirm password").interact()?,
    };

    let form = SignupForm {
        name: args.name,
        email: args.email,
        phone: args.phone,
        password,
        confirm_password,
        accept_terms: args.accept_terms,
    };
    let outcome = screen.run(AuthAction::Signup(form), &mut terminal, navigator)?;

    match &outcome.effect {
        Some(Effect::SignedUp(account)) => {
            if ctx.output.is_json() {
                ctx.output.json(&account.summary());
            }
        }
        _ => {
            if ctx.output.is_json() {
                ctx.output.json(&outcome.errors);
            }
            bail!("Signup failed");
        }
    }
    Ok(outcome)
}

/// Submit the login form on an open auth screen.
pub fn apply_login<D, E>(
    args: LoginArgs,
    screen: &mut AuthScreen<D, E>,
    navigator: &mut TerminalNavigator<'_>,
    ctx: &Context,
) -> Result<Outcome>
where
    D: KeyValueStore,
    E: KeyValueStore,
{
    let password = match args.password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let form = LoginForm::new(args.email, password).remember(args.remember);
    let outcome = screen.run(
        AuthAction::Login(form),
        &mut Terminal::new(&ctx.output, Show::Auth),
        navigator,
    )?;

    match &outcome.effect {
        Some(Effect::LoggedIn { session, scope }) => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "session": session,
                    "scope": scope.as_str(),
                }));
            } else {
                ctx.output.kv("Welcome", session.user.first_name());
            }
        }
        _ => {
            if ctx.output.is_json() {
                ctx.output.json(&outcome.errors);
            }
            bail!("Login failed");
        }
    }
    Ok(outcome)
}

/// Run the status command.
pub fn status(ctx: &Context) -> Result<()> {
    let screen = ctx.auth_screen()?;
    print_status(screen.stores(), ctx)
}

/// Print who is logged in, the cart size, and the theme.
pub fn print_status<D, E>(stores: &Stores<D, E>, ctx: &Context) -> Result<()>
where
    D: KeyValueStore,
    E: KeyValueStore,
{
    let located = Session::locate(stores)?.filter(|(_, session)| session.is_authenticated);
    let cart = load_cart(&stores.durable, Currency::INR)?;
    let theme = snapshop_app::Theme::load(
        &stores.durable,
        ctx.app_config().default_theme.unwrap_or_default(),
    )?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "authenticated": located.is_some(),
            "scope": located.as_ref().map(|(scope, _)| scope.as_str()),
            "session": located.as_ref().map(|(_, session)| session),
            "cartItems": cart.item_count(),
            "theme": theme,
        }));
        return Ok(());
    }

    ctx.output.header("Status");
    match &located {
        Some((scope, session)) => {
            ctx.output.kv("User", &format!("{} <{}>", session.user.name, session.user.email));
            ctx.output.kv("Session", scope.as_str());
            ctx.output.kv("Since", &session.login_time.to_rfc3339());
        }
        None => ctx.output.kv("User", "not logged in"),
    }
    ctx.output.kv("Cart", &format!("{} items", cart.item_count()));
    ctx.output.kv("Theme", &theme_badge(theme));
    Ok(())
}
