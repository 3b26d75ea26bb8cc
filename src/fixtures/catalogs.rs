//! Catalog Fixtures

use rust_decimal::Decimal;
use rusty_money::Money;
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    pricing::parse_price,
    products::{Category, Product, ProductId},
};

/// Wrapper for a catalog in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products, in catalog order
    pub products: Vec<ProductFixture>,

    /// Product ids saved at session start
    #[serde(default)]
    pub saved: Vec<u64>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: u64,

    /// Product name
    pub name: String,

    /// Farm name
    pub farmer: String,

    /// Product category
    pub category: Category,

    /// Where the product is grown
    pub location: String,

    /// Product price (e.g., "4.50 USD")
    pub price: String,

    /// Unit the price applies to
    pub unit: String,

    /// Rating between 0 and 5 (e.g., "4.9")
    pub rating: String,

    /// Freshness label
    pub freshness: String,

    /// Certified organic
    #[serde(default)]
    pub organic: bool,

    /// Quantity available
    #[serde(default)]
    pub available: u32,

    /// Card description
    #[serde(default)]
    pub description: String,
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Product {
            id: ProductId(fixture.id),
            name: fixture.name,
            farmer_name: fixture.farmer,
            category: fixture.category,
            location: fixture.location,
            price: Money::from_minor(minor_units, currency),
            unit: fixture.unit,
            rating: parse_rating(&fixture.rating)?,
            freshness_label: fixture.freshness,
            organic: fixture.organic,
            available_quantity: fixture.available,
            description: fixture.description,
        })
    }
}

/// Parse a rating string (e.g., "4.9"), which must lie between 0 and 5.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidRating`] if the string is not a decimal
/// or is out of range.
pub fn parse_rating(s: &str) -> Result<Decimal, FixtureError> {
    let rating = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidRating(s.to_string()))?;

    if rating < Decimal::ZERO || rating > Decimal::new(5, 0) {
        return Err(FixtureError::InvalidRating(s.to_string()));
    }

    Ok(rating)
}
