//! Fixtures
//!
//! Mock marketplace data loaded from YAML. A fixture set is a catalog file
//! under `catalogs/` and, optionally, a farmer listings file of the same
//! name under `listings/`.

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::{Catalog, CatalogError},
    fixtures::{catalogs::CatalogFixture, listings::ListingsFixture},
    ledger::Ledger,
    listings::{Inventory, Listing, ListingError},
    pricing::{PriceError, parse_price},
    products::{Product, ProductId},
};

pub mod catalogs;
pub mod listings;

/// Default directory fixture sets are read from.
pub const DEFAULT_BASE_PATH: &str = "./fixtures";

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price
    #[error(transparent)]
    Price(#[from] PriceError),

    /// Invalid rating
    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    /// Catalog validation error
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Listing validation error
    #[error("Invalid listings: {0}")]
    Listing(#[from] ListingError),

    /// Currency could not be determined from an empty fixture
    #[error("No products or listings in fixture; currency unknown")]
    NoCurrency,

    /// No catalog loaded
    #[error("No catalog loaded")]
    NoCatalog,

    /// No listings loaded
    #[error("No listings loaded")]
    NoListings,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    catalog: Option<Catalog<'a>>,

    /// Product ids saved at session start
    saved: Vec<ProductId>,

    inventory: Option<Inventory<'a>>,
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path(DEFAULT_BASE_PATH)
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: None,
            saved: Vec::new(),
            inventory: None,
        }
    }

    /// Load a catalog (and its saved-product seed) from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a product
    /// is malformed, or if the products do not form a valid catalog.
    pub fn load_catalog(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("catalogs").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CatalogFixture = serde_norway::from_str(&contents)?;

        let currency = fixture_currency(fixture.products.first().map(|p| p.price.as_str()))?;

        let products = fixture
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Catalog::with_products(products, currency)?;

        debug!(
            fixture = name,
            products = catalog.len(),
            saved = fixture.saved.len(),
            "loaded catalog fixture"
        );

        self.saved = fixture.saved.into_iter().map(ProductId).collect();
        self.catalog = Some(catalog);

        Ok(self)
    }

    /// Load farmer listings from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// listing is malformed.
    pub fn load_listings(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("listings").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ListingsFixture = serde_norway::from_str(&contents)?;

        let currency = fixture_currency(fixture.listings.first().map(|l| l.price.as_str()))?;

        let listings = fixture
            .listings
            .into_iter()
            .map(Listing::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let inventory = Inventory::with_listings(listings, currency)?;

        debug!(fixture = name, listings = inventory.len(), "loaded listings fixture");

        self.inventory = Some(inventory);

        Ok(self)
    }

    /// Load a complete fixture set: the catalog, plus listings when the set has them
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in(DEFAULT_BASE_PATH, name)
    }

    /// Load a complete fixture set from a custom base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set_in(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture.load_catalog(name)?;

        let listings_path = fixture
            .base_path
            .join("listings")
            .join(format!("{name}.yml"));

        if listings_path.try_exists()? {
            fixture.load_listings(name)?;
        }

        Ok(fixture)
    }

    /// Get the loaded catalog
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NoCatalog`] if no catalog was loaded.
    pub fn catalog(&self) -> Result<&Catalog<'a>, FixtureError> {
        self.catalog.as_ref().ok_or(FixtureError::NoCatalog)
    }

    /// Get the loaded farmer inventory
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NoListings`] if no listings were loaded.
    pub fn inventory(&self) -> Result<&Inventory<'a>, FixtureError> {
        self.inventory.as_ref().ok_or(FixtureError::NoListings)
    }

    /// Take ownership of the loaded farmer inventory
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NoListings`] if no listings were loaded.
    pub fn into_inventory(self) -> Result<Inventory<'a>, FixtureError> {
        self.inventory.ok_or(FixtureError::NoListings)
    }

    /// Product ids saved at session start
    pub fn saved(&self) -> &[ProductId] {
        &self.saved
    }

    /// A fresh session ledger seeded with the saved products
    pub fn ledger(&self) -> Ledger {
        Ledger::seeded(self.saved.iter().copied())
    }
}

/// The fixture's currency is taken from its first price.
fn fixture_currency(first_price: Option<&str>) -> Result<&'static Currency, FixtureError> {
    let (_minor_units, currency) = parse_price(first_price.ok_or(FixtureError::NoCurrency)?)?;

    Ok(currency)
}
