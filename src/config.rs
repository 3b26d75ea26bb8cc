//! Command line configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    catalog::{CategoryFilter, LocationFilter, QueryParams, SortKey},
    contact::{ContactDraft, SenderType},
    fixtures::DEFAULT_BASE_PATH,
    listings::ListingDraft,
    products::{Category, ProductId, Unit},
};

/// Log output format.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Fixture data settings.
#[derive(Debug, Args)]
pub struct FixtureConfig {
    /// Directory containing fixture sets
    #[arg(long, env = "FARM2MARKET_FIXTURES", default_value = DEFAULT_BASE_PATH)]
    pub fixtures: PathBuf,

    /// Fixture set to use for the catalog and listings
    #[arg(short, long, default_value = "dashboard")]
    pub fixture: String,
}

/// Farm2Market catalog and cart explorer
#[derive(Debug, Parser)]
#[command(name = "farm2market", about = "Farm2Market catalog and cart explorer", long_about = None)]
pub struct Cli {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Fixture data settings.
    #[command(flatten)]
    pub data: FixtureConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search, filter and sort the catalog
    Browse(QueryArgs),

    /// Apply cart and saved-product actions, then show the cart
    Cart(CartArgs),

    /// Show, add to, or remove from a farmer's listings
    Inventory(InventoryArgs),

    /// Send a message through the contact form
    Contact(ContactArgs),
}

/// Catalog query flags.
#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Text matched against product and farmer names
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category, or "all"
    #[arg(short, long, default_value = "all", value_parser = parse_category_filter)]
    pub category: CategoryFilter,

    /// Location, or "all"
    #[arg(long, default_value = "all")]
    pub location: String,

    /// Sort key (name, price-low, price-high, rating, freshness)
    #[arg(long, default_value = "name")]
    pub sort: String,
}

impl From<&QueryArgs> for QueryParams {
    fn from(args: &QueryArgs) -> Self {
        QueryParams::default()
            .with_search(args.search.as_str())
            .with_category(args.category)
            .with_location(LocationFilter::from(args.location.as_str()))
            .with_sort(SortKey::parse_lossy(&args.sort))
    }
}

/// Cart action flags. Actions run in the order: add, remove, toggle-saved.
#[derive(Debug, Args)]
pub struct CartArgs {
    /// Product id to add to the cart (repeatable)
    #[arg(short, long = "add")]
    pub add: Vec<u64>,

    /// Cart position to remove, counting from 1 (repeatable)
    #[arg(short, long = "remove")]
    pub remove: Vec<usize>,

    /// Product id to save or unsave (repeatable)
    #[arg(short, long = "toggle-saved")]
    pub toggle_saved: Vec<u64>,

    /// Query used for the available products figure
    #[command(flatten)]
    pub query: QueryArgs,
}

impl CartArgs {
    /// Product ids to add.
    pub fn adds(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.add.iter().copied().map(ProductId)
    }

    /// Zero-based cart positions to remove. Position 0 is out of range.
    pub fn removals(&self) -> impl Iterator<Item = usize> + '_ {
        self.remove
            .iter()
            .map(|position| position.checked_sub(1).unwrap_or(usize::MAX))
    }

    /// Product ids to toggle.
    pub fn toggles(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.toggle_saved.iter().copied().map(ProductId)
    }
}

/// Inventory flags.
#[derive(Debug, Args)]
pub struct InventoryArgs {
    /// Listing id to remove
    #[arg(long)]
    pub remove: Option<u64>,

    /// Name of a listing to add
    #[arg(long)]
    pub name: Option<String>,

    /// Category of the listing to add
    #[arg(long, value_parser = parse_category)]
    pub category: Option<Category>,

    /// Price of the listing to add (e.g. "4.50")
    #[arg(long, default_value = "")]
    pub price: String,

    /// Quantity of the listing to add
    #[arg(long, default_value = "")]
    pub quantity: String,

    /// Unit of the listing to add
    #[arg(long, default_value = "lbs", value_parser = parse_unit)]
    pub unit: Unit,

    /// Location of the listing to add
    #[arg(long, default_value = "")]
    pub location: String,

    /// Description of the listing to add
    #[arg(long, default_value = "")]
    pub description: String,
}

impl InventoryArgs {
    /// The add-listing form, if any add flag was given.
    pub fn draft(&self) -> Option<ListingDraft> {
        let requested = self.name.is_some()
            || self.category.is_some()
            || !self.price.is_empty()
            || !self.quantity.is_empty();

        requested.then(|| ListingDraft {
            name: self.name.clone().unwrap_or_default(),
            category: self.category,
            price: self.price.clone(),
            quantity: self.quantity.clone(),
            unit: self.unit,
            location: self.location.clone(),
            description: self.description.clone(),
        })
    }
}

/// Contact form flags.
#[derive(Debug, Args)]
pub struct ContactArgs {
    /// Full name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Subject line
    #[arg(long, default_value = "")]
    pub subject: String,

    /// Sender type (farmer, buyer, retailer, consumer, partner, other)
    #[arg(long, value_parser = parse_sender_type)]
    pub sender_type: Option<SenderType>,

    /// Message body
    #[arg(short, long, default_value = "")]
    pub message: String,
}

impl From<&ContactArgs> for ContactDraft {
    fn from(args: &ContactArgs) -> Self {
        ContactDraft {
            name: args.name.clone(),
            email: args.email.clone(),
            subject: args.subject.clone(),
            sender_type: args.sender_type,
            message: args.message.clone(),
        }
    }
}

fn parse_sender_type(s: &str) -> Result<SenderType, String> {
    s.parse().map_err(|err| format!("{err}"))
}

fn parse_category_filter(s: &str) -> Result<CategoryFilter, String> {
    s.parse().map_err(|err| format!("{err}"))
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|err| format!("{err}"))
}

fn parse_unit(s: &str) -> Result<Unit, String> {
    s.parse().map_err(|err| format!("{err}"))
}
