//! SnapShop CLI - terminal front end for the SnapShop storefront demo.
//!
//! Commands:
//! - `snapshop products` - Browse and filter the catalog
//! - `snapshop cart` - Show or change the cart
//! - `snapshop checkout` - Place an order for the cart
//! - `snapshop signup` / `snapshop login` - Create an account or log in
//! - `snapshop status` - Show the current session, cart and theme
//! - `snapshop theme` - Show or change the color theme
//! - `snapshop strength` - Rate a password
//! - `snapshop shell` - Interactive session
//! - `snapshop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod surface;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CartArgs, CheckoutArgs, ConfigArgs, LoginArgs, ProductsArgs, SignupArgs, StrengthArgs,
    ThemeArgs,
};

/// SnapShop - a small storefront with a cart, checkout and demo accounts
#[derive(Parser)]
#[command(name = "snapshop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding saved data
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
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

    /// Show who is logged in, the cart size, and the theme
    Status,

    /// Show or change the color theme
    Theme(ThemeArgs),

    /// Rate a password
    Strength(StrengthArgs),

    /// Start an interactive session
    Shell,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let loaded = context::Context::load(cli.config.as_deref(), cli.data_dir.as_deref(), output.clone());
    let ctx = match loaded {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Signup(args) => commands::auth::signup(args, &ctx),
        Commands::Login(args) => commands::auth::login(args, &ctx),
        Commands::Status => commands::auth::status(&ctx),
        Commands::Theme(args) => commands::theme::run(args, &ctx),
        Commands::Strength(args) => commands::strength::run(args, &ctx),
        Commands::Shell => commands::shell::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr so command output on stdout stays clean.
///
/// `RUST_LOG` wins; otherwise SnapShop crates log at info, or debug with
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let default = format!(
        "snapshop={level},snapshop_app={level},snapshop_auth={level},snapshop_commerce={level},snapshop_store={level}"
    );
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
