//! Show or change the color theme.

use anyhow::Result;
use snapshop_app::{AppError, AuthAction, AuthScreen, Storefront, StorefrontAction, Theme};
use snapshop_store::KeyValueStore;

use super::{ThemeArgs, ThemeCommand};
use crate::context::Context;
use crate::output::theme_badge;

/// A screen with a theme toggle.
pub trait Themed {
    fn theme(&self) -> Theme;
    fn toggle_theme(&mut self) -> Result<(), AppError>;
}

impl<S: KeyValueStore> Themed for Storefront<S> {
    fn theme(&self) -> Theme {
        self.state().theme
    }

    fn toggle_theme(&mut self) -> Result<(), AppError> {
        self.dispatch(StorefrontAction::ToggleTheme).map(|_| ())
    }
}

impl<D: KeyValueStore, E: KeyValueStore> Themed for AuthScreen<D, E> {
    fn theme(&self) -> Theme {
        self.state().theme
    }

    fn toggle_theme(&mut self) -> Result<(), AppError> {
        self.dispatch(AuthAction::ToggleTheme).map(|_| ())
    }
}

/// Run the theme command.
pub fn run(args: ThemeArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    apply(args, &mut shop, ctx)
}

/// Apply a theme command to whichever screen is showing.
pub fn apply(args: ThemeArgs, screen: &mut dyn Themed, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(ThemeCommand::Show) {
        ThemeCommand::Show => {}
        ThemeCommand::Toggle => screen.toggle_theme()?,
        ThemeCommand::Set { theme } => {
            if screen.theme() != theme {
                screen.toggle_theme()?;
            }
        }
    }

    let theme = screen.theme();
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "theme": theme }));
    } else {
        ctx.output.kv("Theme", &theme_badge(theme));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapshop_app::AppConfig;
    use snapshop_store::MemoryStore;

    #[test]
    fn test_set_is_idempotent() {
        let mut shop = Storefront::open(MemoryStore::new(), AppConfig::default()).unwrap();

        for _ in 0..2 {
            if shop.theme() != Theme::Dark {
                shop.toggle_theme().unwrap();
            }
        }
        assert_eq!(shop.theme(), Theme::Dark);
        assert_eq!(
            shop.store().get(snapshop_store::keys::THEME).unwrap().as_deref(),
            Some("dark")
        );
    }
}
