//! Listing Fixtures

use rusty_money::Money;
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    listings::{Listing, ListingStatus},
    pricing::parse_price,
    products::{Category, ProductId, Unit},
};

/// Wrapper for farmer listings in YAML
#[derive(Debug, Deserialize)]
pub struct ListingsFixture {
    /// Listings, in the order they were added
    pub listings: Vec<ListingFixture>,
}

/// Listing Fixture
#[derive(Debug, Deserialize)]
pub struct ListingFixture {
    /// Listing id
    pub id: u64,

    /// Product name
    pub name: String,

    /// Product category
    pub category: Category,

    /// Price per unit (e.g., "4.50 USD")
    pub price: String,

    /// Quantity available
    pub quantity: u32,

    /// Unit
    #[serde(default)]
    pub unit: Unit,

    /// Where the produce is grown
    #[serde(default)]
    pub location: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Units sold so far
    #[serde(default)]
    pub sales: u32,
}

impl TryFrom<ListingFixture> for Listing<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ListingFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Listing {
            id: ProductId(fixture.id),
            name: fixture.name,
            category: fixture.category,
            price: Money::from_minor(minor_units, currency),
            quantity: fixture.quantity,
            unit: fixture.unit,
            location: fixture.location,
            description: fixture.description,
            status: ListingStatus::Active,
            sales: fixture.sales,
        })
    }
}
