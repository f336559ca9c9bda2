//! Navjyoti CLI - drive the storefront client from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add two units of a product to the cart
//! nj-cli cart add "Cotton Kurta" 500 -q 2
//!
//! # Show the cart with line and grand totals
//! nj-cli cart show
//!
//! # Search a product file, cheapest first
//! nj-cli catalog products.yaml --search cotton --sort price-low
//!
//! # Validate a checkout form and hand the cart off
//! nj-cli checkout validate form.yaml
//! nj-cli checkout proceed
//! ```
//!
//! # Commands
//!
//! - `cart` - Add, remove, update, clear and show cart lines
//! - `catalog` - Filter and sort a product file
//! - `checkout` - Validate the checkout form and prepare the order hand-off
//!
//! The cart is stored under `NAVJYOTI_DATA_DIR` and survives between runs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use navjyoti_storefront::config::ConfigError;
use navjyoti_storefront::error;
use navjyoti_storefront::{ClientConfig, FileStore, StoreClient};

mod commands;

#[derive(Parser)]
#[command(name = "nj-cli")]
#[command(author, version, about = "Navjyoti storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Search, filter and sort a product file
    Catalog {
        /// YAML or JSON list of product cards (`title`, `text`)
        products: PathBuf,

        /// Case-insensitive text to match in titles and descriptions
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category slug, or `all`
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Sort order (`name`, `price-low`, `price-high`)
        #[arg(long, default_value = "name")]
        sort: String,
    },
    /// Validate the checkout form and prepare the order
    Checkout {
        #[command(subcommand)]
        action: CheckoutAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add units of a product
    Add {
        /// Product name
        name: String,

        /// Unit price in rupees
        price: Decimal,

        /// Number of units
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove the line at a position (as listed by `cart show`)
    Remove { index: usize },
    /// Set the quantity of a line; zero or less removes it
    Set {
        index: usize,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Show cart lines and totals
    Show,
}

#[derive(Subcommand)]
enum CheckoutAction {
    /// Print the order hand-off for the current cart
    Proceed,
    /// Validate a checkout form file
    Validate {
        /// YAML or JSON list of form fields (`name`, `value`, `required`)
        form: PathBuf,

        /// Submit the order when the form is valid
        #[arg(long)]
        submit: bool,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ClientConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Tracing is not installed before the configuration loads.
#[allow(clippy::print_stderr)]
fn config_failed(err: &ConfigError) -> ! {
    eprintln!("Failed to load configuration: {err}");
    std::process::exit(2);
}

fn main() {
    let cli = Cli::parse();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => config_failed(&e),
    };

    let _sentry_guard = init_sentry(&config);

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "navjyoti_storefront=info,nj_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(error::sentry_event_filter))
        .init();

    let store = FileStore::new(&config.data_dir);
    let mut client = StoreClient::new(store, config.timing);

    let result = run(cli, &mut client);
    commands::print_toasts(client.toasts());

    if let Err(e) = result {
        if e.is_internal() {
            tracing::error!("Command failed: {e}");
        } else {
            // Already reported, or a problem with the user's input
            tracing::info!("Command failed: {e}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, client: &mut StoreClient<FileStore>) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add {
                name,
                price,
                quantity,
            } => commands::cart::add(client, &name, price, quantity)?,
            CartAction::Remove { index } => commands::cart::remove(client, index)?,
            CartAction::Set { index, quantity } => commands::cart::set(client, index, quantity)?,
            CartAction::Clear => commands::cart::clear(client),
            CartAction::Show => commands::cart::show(client),
        },
        Commands::Catalog {
            products,
            search,
            category,
            sort,
        } => commands::catalog::list(client, &products, &search, &category, &sort)?,
        Commands::Checkout { action } => match action {
            CheckoutAction::Proceed => commands::checkout::proceed(client)?,
            CheckoutAction::Validate { form, submit } => {
                commands::checkout::validate(client, &form, submit)?;
            }
        },
    }
    Ok(())
}
