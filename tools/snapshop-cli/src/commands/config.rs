//! Configuration management commands.

use anyhow::{bail, Result};
use snapshop_commerce::{Currency, Money};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;
use crate::output::format_delay;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(ConfigCommand::Show) {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "config": ctx.config,
            "configPath": ctx.config_path,
            "dataDir": ctx.data_dir,
        }));
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let app = ctx.app_config();
    ctx.output.info("[app]");
    ctx.output.kv("shipping_fee", &Money::new(app.shipping_fee, Currency::INR).display());
    ctx.output.kv("redirect_delay", &format_delay(app.redirect_delay()));
    ctx.output.kv("notice", &format_delay(app.notice_duration()));
    ctx.output.kv("order_notice", &format_delay(app.order_notice_duration()));
    ctx.output.kv(
        "default_theme",
        app.default_theme.map(|t| t.as_str()).unwrap_or("(system)"),
    );

    ctx.output.info("[storage]");
    ctx.output.kv("data_dir", &ctx.data_dir.display().to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
