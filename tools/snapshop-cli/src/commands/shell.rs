//! Interactive session.
//!
//! The shell is one browser tab: the storefront and the auth screen share
//! the durable store on disk, and a session that was not remembered lives in
//! memory until the shell exits.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use snapshop_app::{AuthAction, AuthScreen, Route, Storefront};
use snapshop_store::{FileStore, MemoryStore};

use super::{
    auth, cart, checkout, products, strength, theme, CartArgs, CheckoutArgs, LoginArgs,
    ProductsArgs, SignupArgs, StrengthArgs, ThemeArgs,
};
use crate::context::Context;
use crate::surface::{route_name, TerminalNavigator};

/// One line typed at the prompt.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Browse the catalog
    Products(ProductsArgs),
    /// Show or change the cart
    Cart(CartArgs),
    /// Place an order for the cart
    Checkout(CheckoutArgs),
    /// Create an account
    Signup(SignupArgs),
    /// Log in
    Login(LoginArgs),
    /// Show who is logged in
    Status,
    /// Show or change the theme
    Theme(ThemeArgs),
    /// Rate a password
    Strength(StrengthArgs),
    /// Go to a page
    Open {
        page: Page,
    },
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Page {
    Storefront,
    Login,
    Signup,
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Storefront => Route::Storefront,
            Page::Login => Route::Login { email: None },
            Page::Signup => Route::Signup,
        }
    }
}

/// The pages of one tab and which one is showing.
struct Tab<'a> {
    ctx: &'a Context,
    storefront: Storefront<FileStore>,
    auth: AuthScreen<FileStore, MemoryStore>,
    on_auth: bool,
}

impl<'a> Tab<'a> {
    fn open(ctx: &'a Context) -> Result<Self> {
        Ok(Self {
            ctx,
            storefront: ctx.storefront()?,
            auth: ctx.auth_screen()?,
            on_auth: false,
        })
    }

    fn prompt(&self) -> String {
        let page = if self.on_auth { "auth" } else { "shop" };
        format!("snapshop:{}> ", page)
    }

    /// Load the page a route points to.
    fn go(&mut self, route: Route) -> Result<()> {
        self.ctx.output.debug(&format!("Opening {}", route_name(&route)));
        match route {
            Route::Storefront => {
                self.storefront.reload()?;
                self.on_auth = false;
            }
            Route::Login { email } => {
                self.open_auth(AuthAction::ShowLogin { email })?;
            }
            Route::Signup => {
                self.open_auth(AuthAction::ShowSignup)?;
            }
        }
        Ok(())
    }

    /// Load the auth page showing the given form.
    ///
    /// Returns `false` when the startup guard sent the visitor back to the
    /// storefront instead.
    fn open_auth(&mut self, show: AuthAction) -> Result<bool> {
        let ctx = self.ctx;
        self.auth.reload()?;

        let mut navigator = TerminalNavigator::new(&ctx.output, true);
        if self.auth.enter(&mut navigator)? {
            ctx.output.info("Already logged in");
            if let Some(route) = navigator.take_destination() {
                self.go(route)?;
            }
            return Ok(false);
        }

        self.auth.dispatch(show)?;
        self.on_auth = true;
        Ok(true)
    }

    fn to_storefront(&mut self) -> Result<()> {
        if self.on_auth {
            self.go(Route::Storefront)?;
        }
        Ok(())
    }

    /// Run one command. Returns `true` when the shell should exit.
    fn execute(&mut self, command: ShellCommand) -> Result<bool> {
        let ctx = self.ctx;
        match command {
            ShellCommand::Products(args) => {
                self.to_storefront()?;
                products::apply(args, &mut self.storefront, ctx)?;
            }
            ShellCommand::Cart(args) => {
                self.to_storefront()?;
                cart::apply(args, &mut self.storefront, ctx)?;
            }
            ShellCommand::Checkout(args) => {
                self.to_storefront()?;
                checkout::apply(args, &mut self.storefront, ctx)?;
            }
            ShellCommand::Signup(args) => {
                if self.open_auth(AuthAction::ShowSignup)? {
                    let mut navigator = TerminalNavigator::new(&ctx.output, true);
                    let result = auth::apply_signup(args, &mut self.auth, &mut navigator, ctx);
                    self.follow(&mut navigator)?;
                    result?;
                }
            }
            ShellCommand::Login(args) => {
                if self.open_auth(AuthAction::ShowLogin { email: None })? {
                    let mut navigator = TerminalNavigator::new(&ctx.output, true);
                    let result = auth::apply_login(args, &mut self.auth, &mut navigator, ctx);
                    self.follow(&mut navigator)?;
                    result?;
                }
            }
            ShellCommand::Status => auth::print_status(self.auth.stores(), ctx)?,
            ShellCommand::Theme(args) => {
                if self.on_auth {
                    theme::apply(args, &mut self.auth, ctx)?;
                } else {
                    theme::apply(args, &mut self.storefront, ctx)?;
                }
            }
            ShellCommand::Strength(args) => strength::run(args, ctx)?,
            ShellCommand::Open { page } => self.go(page.into())?,
            ShellCommand::Exit => return Ok(true),
        }
        Ok(false)
    }

    fn follow(&mut self, navigator: &mut TerminalNavigator<'_>) -> Result<()> {
        if let Some(route) = navigator.take_destination() {
            self.go(route)?;
        }
        Ok(())
    }
}

/// Run the shell command.
pub fn run(ctx: &Context) -> Result<()> {
    let mut tab = Tab::open(ctx)?;
    let mut rl = DefaultEditor::new()?;

    ctx.output.info("SnapShop shell - type `help` for commands, `exit` to quit");

    loop {
        match rl.readline(&tab.prompt()) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                let words = match shell_words::split(line) {
                    Ok(words) => words,
                    Err(e) => {
                        ctx.output.error(&e.to_string());
                        continue;
                    }
                };

                let command = match ShellLine::try_parse_from(words) {
                    Ok(parsed) => parsed.command,
                    Err(e) => {
                        let _ = e.print();
                        continue;
                    }
                };

                match tab.execute(command) {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => ctx.output.error(&format!("{:#}", e)),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    tracing::debug!("shell closed, discarding tab session");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CartCommand;

    fn parse(line: &str) -> Result<ShellCommand, clap::Error> {
        let words = shell_words::split(line).unwrap();
        ShellLine::try_parse_from(words).map(|parsed| parsed.command)
    }

    #[test]
    fn test_parses_quoted_search() {
        let ShellCommand::Products(args) = parse(r#"products --search "smart watch""#).unwrap() else {
            panic!("expected products");
        };
        assert_eq!(args.search, "smart watch");
    }

    #[test]
    fn test_parses_cart_subcommand() {
        let command = parse("cart add 3").unwrap();
        assert!(matches!(
            command,
            ShellCommand::Cart(CartArgs {
                command: Some(CartCommand::Add { .. })
            })
        ));
    }

    #[test]
    fn test_quit_alias() {
        assert!(matches!(parse("quit").unwrap(), ShellCommand::Exit));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!(parse("products --category toys").is_err());
    }
}
