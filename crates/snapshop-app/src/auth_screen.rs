//! The login/signup screen.

use snapshop_auth::{self as auth, AuthError, FormKind, LoginForm, PasswordStrength, Session, SignupForm};
use snapshop_commerce::validation::FieldErrors;
use snapshop_store::{KeyValueStore, Stores};

use crate::view::AuthView;
use crate::{AppConfig, AppError, Effect, Navigator, Notice, Outcome, Redirect, Render, Route, Theme, View};

/// Something the visitor did on the auth screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Show the login form, optionally pre-filling the email.
    ShowLogin { email: Option<String> },
    ShowSignup,
    /// Switch to the other form.
    ToggleForm,
    /// The signup password changed; re-rate it.
    PasswordInput(String),
    Login(LoginForm),
    Signup(SignupForm),
    ToggleTheme,
}

/// Screen state owned by the auth screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub form: FormKind,
    pub errors: FieldErrors,
    pub login_email: String,
    pub strength: Option<PasswordStrength>,
    pub theme: Theme,
    pub notice: Option<crate::Notice>,
}

/// Auth screen controller over a durable and an ephemeral store.
#[derive(Debug)]
pub struct AuthScreen<D, E> {
    state: AuthState,
    stores: Stores<D, E>,
    config: AppConfig,
}

impl<D: KeyValueStore, E: KeyValueStore> AuthScreen<D, E> {
    /// Open the auth screen on the login form.
    pub fn open(stores: Stores<D, E>, config: AppConfig) -> Result<Self, AppError> {
        let theme = Theme::load(&stores.durable, config.default_theme.unwrap_or_default())?;
        Ok(Self {
            state: AuthState {
                theme,
                ..AuthState::default()
            },
            stores,
            config,
        })
    }

    /// Startup guard: an already authenticated visitor goes straight to the
    /// storefront.
    pub fn guard(&self) -> Result<Option<Redirect>, AppError> {
        match Session::current(&self.stores)? {
            Some(session) => {
                tracing::debug!(email = %session.user.email, "already logged in, skipping auth screen");
                Ok(Some(Redirect::now(Route::Storefront)))
            }
            None => Ok(None),
        }
    }

    /// Run the startup guard and hand any redirect to `navigator`.
    pub fn enter(&self, navigator: &mut impl Navigator) -> Result<bool, AppError> {
        match self.guard()? {
            Some(redirect) => {
                navigator.navigate(&redirect);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn stores(&self) -> &Stores<D, E> {
        &self.stores
    }

    /// Give back the underlying stores.
    pub fn into_stores(self) -> Stores<D, E> {
        self.stores
    }

    /// Reload the page: back to an empty login form with the saved theme.
    pub fn reload(&mut self) -> Result<(), AppError> {
        let theme = Theme::load(&self.stores.durable, self.config.default_theme.unwrap_or_default())?;
        self.state = AuthState {
            theme,
            ..AuthState::default()
        };
        Ok(())
    }

    /// The current authenticated session, if any.
    pub fn session(&self) -> Result<Option<Session>, AppError> {
        Ok(Session::current(&self.stores)?)
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: AuthAction) -> Result<Outcome, AppError> {
        let outcome = match action {
            AuthAction::ShowLogin { email } => {
                self.show(FormKind::Login);
                if let Some(email) = email {
                    self.state.login_email = email;
                }
                Outcome::none()
            }
            AuthAction::ShowSignup => {
                self.show(FormKind::Signup);
                Outcome::none()
            }
            AuthAction::ToggleForm => {
                self.show(self.state.form.toggled());
                Outcome::none()
            }
            AuthAction::PasswordInput(password) => {
                self.state.strength = PasswordStrength::rate(&password);
                Outcome::none()
            }
            AuthAction::Login(form) => self.login(form)?,
            AuthAction::Signup(form) => self.signup(form)?,
            AuthAction::ToggleTheme => {
                self.state.theme = self.state.theme.toggled();
                self.state.theme.save(&mut self.stores.durable)?;
                Outcome::none()
            }
        };

        self.state.notice = outcome.notice.clone();
        Ok(outcome)
    }

    /// Dispatch, hand any redirect to `navigator`, then render.
    pub fn run(
        &mut self,
        action: AuthAction,
        render: &mut impl Render,
        navigator: &mut impl Navigator,
    ) -> Result<Outcome, AppError> {
        let outcome = self.dispatch(action)?;
        if let Some(redirect) = &outcome.redirect {
            navigator.navigate(redirect);
        }
        render.render(&self.view());
        Ok(outcome)
    }

    pub fn view(&self) -> View {
        View::Auth(AuthView {
            theme: self.state.theme,
            form: self.state.form,
            errors: self.state.errors.clone(),
            login_email: self.state.login_email.clone(),
            strength: self.state.strength,
            notice: self.state.notice.clone(),
        })
    }

    fn show(&mut self, form: FormKind) {
        self.state.form = form;
        self.state.errors = FieldErrors::new();
    }

    fn login(&mut self, form: LoginForm) -> Result<Outcome, AppError> {
        self.state.errors = FieldErrors::new();
        match auth::login(&mut self.stores, &form) {
            Ok((session, scope)) => Ok(Outcome::with_notice(Notice::success(
                "Login successful! Redirecting...",
                self.config.notice_duration(),
            ))
            .redirect(Redirect::after(Route::Storefront, self.config.redirect_delay()))
            .effect(Effect::LoggedIn { session, scope })),
            Err(err) => self.reject(err),
        }
    }

    fn signup(&mut self, form: SignupForm) -> Result<Outcome, AppError> {
        self.state.errors = FieldErrors::new();
        match auth::signup(&mut self.stores.durable, &form) {
            Ok(account) => {
                let to = Route::Login {
                    email: Some(account.email.clone()),
                };
                Ok(Outcome::with_notice(Notice::success(
                    "Account created successfully! Please login.",
                    self.config.notice_duration(),
                ))
                .redirect(Redirect::after(to, self.config.redirect_delay()))
                .effect(Effect::SignedUp(account)))
            }
            Err(err) => self.reject(err),
        }
    }

    /// Turn a user-correctable auth failure into form errors; propagate the
    /// rest.
    fn reject(&mut self, err: AuthError) -> Result<Outcome, AppError> {
        if !err.is_user_error() {
            return Err(err.into());
        }
        let errors = err.field_errors();
        let notice = err
            .notice()
            .map(|message| Notice::error(message, self.config.notice_duration()));
        self.state.errors = errors.clone();
        Ok(Outcome::rejected(errors, notice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapshop_store::{MemoryStore, Scope};

    fn screen() -> AuthScreen<MemoryStore, MemoryStore> {
        AuthScreen::open(Stores::default(), AppConfig::default()).unwrap()
    }

    #[test]
    fn test_guard_ignores_ephemeral_behind_logged_out_durable() {
        let mut stores: Stores<MemoryStore> = Stores::default();
        let account = snapshop_auth::Account::new("Asha", "a@b.com", "9876543210", "secret1");
        let mut stale = Session::start(&account);
        stale.is_authenticated = false;
        stale.save(&mut stores, Scope::Durable).unwrap();
        Session::start(&account)
            .save(&mut stores, Scope::Ephemeral)
            .unwrap();

        let screen = AuthScreen::open(stores, AppConfig::default()).unwrap();
        let mut redirects: Vec<Redirect> = Vec::new();
        assert!(!screen.enter(&mut redirects).unwrap());
        assert!(redirects.is_empty());
    }

    #[test]
    fn test_toggle_clears_errors() {
        let mut screen = screen();
        screen
            .dispatch(AuthAction::Login(LoginForm::new("bad", "x")))
            .unwrap();
        assert_eq!(screen.state().errors.len(), 2);

        screen.dispatch(AuthAction::ToggleForm).unwrap();
        assert_eq!(screen.state().form, FormKind::Signup);
        assert!(screen.state().errors.is_empty());
    }

    #[test]
    fn test_password_input_rates_strength() {
        let mut screen = screen();
        screen
            .dispatch(AuthAction::PasswordInput("Abcdefg1!".into()))
            .unwrap();
        assert_eq!(screen.state().strength, Some(PasswordStrength::Strong));

        screen.dispatch(AuthAction::PasswordInput(String::new())).unwrap();
        assert_eq!(screen.state().strength, None);
    }

    #[test]
    fn test_unknown_account_message() {
        let mut screen = screen();
        let outcome = screen
            .dispatch(AuthAction::Login(LoginForm::new("a@b.com", "secret1")))
            .unwrap();

        assert_eq!(
            outcome.errors.get("email"),
            Some("No account found with this email")
        );
        assert_eq!(
            outcome.notice.unwrap().message,
            "Account not found. Please sign up first."
        );
        assert!(outcome.redirect.is_none());
    }

    #[test]
    fn test_reload_picks_up_saved_theme() {
        let mut screen = screen();
        screen.dispatch(AuthAction::ShowSignup).unwrap();
        Theme::Dark.save(&mut screen.stores.durable).unwrap();

        screen.reload().unwrap();
        assert_eq!(screen.state().theme, Theme::Dark);
        assert_eq!(screen.state().form, FormKind::Login);
    }

    #[test]
    fn test_show_login_prefills_email() {
        let mut screen = screen();
        screen.dispatch(AuthAction::ShowSignup).unwrap();
        screen
            .dispatch(AuthAction::ShowLogin {
                email: Some("a@b.com".into()),
            })
            .unwrap();

        let View::Auth(view) = screen.view() else {
            panic!("expected auth view");
        };
        assert_eq!(view.form, FormKind::Login);
        assert_eq!(view.login_email, "a@b.com");
    }
}
