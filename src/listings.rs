//! Farmer listings
//!
//! A farmer's own inventory: listings are added from a form, removed by id,
//! and summarised as product count and revenue to date.

use std::fmt;

use rustc_hash::FxHashSet;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::info;

use crate::{
    pricing::{PriceError, parse_amount, sum_minor},
    products::{Category, ProductId, Unit},
};

/// Errors raised when adding a listing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    /// A required form field was left blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The price could not be parsed.
    #[error(transparent)]
    InvalidPrice(#[from] PriceError),

    /// The quantity is not a whole, non-negative number.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Two listings share an identifier.
    #[error("Duplicate listing id {0}")]
    DuplicateId(ProductId),

    /// Every listing id is taken.
    #[error("No listing ids left after {0}")]
    IdsExhausted(ProductId),

    /// A listing's currency differs from the inventory currency (listing, listing currency, inventory currency).
    #[error("Listing {0} has currency {1}, but inventory has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// Listing status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingStatus {
    /// Visible to buyers
    #[default]
    Active,
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingStatus::Active => f.write_str("active"),
        }
    }
}

/// A product listed by a farmer.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a> {
    /// Listing identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product category
    pub category: Category,

    /// Price per unit
    pub price: Money<'a, Currency>,

    /// Quantity available
    pub quantity: u32,

    /// Unit the price and quantity are in
    pub unit: Unit,

    /// Where the produce is grown
    pub location: String,

    /// Description shown to buyers
    pub description: String,

    /// Listing status
    pub status: ListingStatus,

    /// Units sold so far
    pub sales: u32,
}

/// Add-product form values, as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingDraft {
    /// Product name (required)
    pub name: String,

    /// Product category (required)
    pub category: Option<Category>,

    /// Price per unit, e.g. "4.50" (required)
    pub price: String,

    /// Quantity available (required)
    pub quantity: String,

    /// Unit, defaults to lbs
    pub unit: Unit,

    /// Where the produce is grown
    pub location: String,

    /// Description shown to buyers
    pub description: String,
}

/// Inventory totals for the farmer dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryStats<'a> {
    /// Number of listings
    pub total_products: usize,

    /// Sum of sales times price across listings
    pub total_revenue: Money<'a, Currency>,
}

/// A farmer's listings.
#[derive(Debug, Clone)]
pub struct Inventory<'a> {
    listings: Vec<Listing<'a>>,
    currency: &'static Currency,
}

impl<'a> Inventory<'a> {
    /// Create an empty inventory priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Inventory {
            listings: Vec::new(),
            currency,
        }
    }

    /// Create an inventory from existing listings.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::DuplicateId`] if two listings share an id, or
    /// [`ListingError::CurrencyMismatch`] if a listing is priced in another currency.
    pub fn with_listings(
        listings: impl Into<Vec<Listing<'a>>>,
        currency: &'static Currency,
    ) -> Result<Self, ListingError> {
        let listings: Vec<Listing<'a>> = listings.into();
        let mut seen = FxHashSet::default();

        for listing in &listings {
            if !seen.insert(listing.id) {
                return Err(ListingError::DuplicateId(listing.id));
            }

            let listing_currency = listing.price.currency();

            if listing_currency != currency {
                return Err(ListingError::CurrencyMismatch(
                    listing.id,
                    listing_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }
        }

        Ok(Inventory { listings, currency })
    }

    /// Validate a draft and add it as a new active listing with no sales,
    /// returning the new listing's id.
    ///
    /// # Errors
    ///
    /// Returns a [`ListingError`] if a required field is blank, if the
    /// price or quantity cannot be parsed, or if no listing id is left.
    pub fn add(&mut self, draft: ListingDraft) -> Result<ProductId, ListingError> {
        if draft.name.trim().is_empty() {
            return Err(ListingError::MissingField("name"));
        }

        let category = draft.category.ok_or(ListingError::MissingField("category"))?;

        if draft.price.trim().is_empty() {
            return Err(ListingError::MissingField("price"));
        }

        if draft.quantity.trim().is_empty() {
            return Err(ListingError::MissingField("quantity"));
        }

        let price = Money::from_minor(parse_amount(&draft.price)?, self.currency);

        let quantity = draft
            .quantity
            .trim()
            .parse::<u32>()
            .map_err(|_err| ListingError::InvalidQuantity(draft.quantity.clone()))?;

        let id = self.next_id()?;

        info!(listing = %id, name = %draft.name, %category, "added listing");

        self.listings.push(Listing {
            id,
            name: draft.name,
            category,
            price,
            quantity,
            unit: draft.unit,
            location: draft.location,
            description: draft.description,
            status: ListingStatus::Active,
            sales: 0,
        });

        Ok(id)
    }

    /// Remove a listing by id. Unknown ids are ignored.
    pub fn remove(&mut self, id: ProductId) -> Option<Listing<'a>> {
        let pos = self.listings.iter().position(|listing| listing.id == id)?;
        let removed = self.listings.remove(pos);

        info!(listing = %id, name = %removed.name, "removed listing");

        Some(removed)
    }

    /// Product count and revenue to date.
    pub fn stats(&self) -> InventoryStats<'a> {
        InventoryStats {
            total_products: self.listings.len(),
            total_revenue: sum_minor(
                self.listings.iter().map(|listing| {
                    listing
                        .price
                        .to_minor_units()
                        .saturating_mul(i64::from(listing.sales))
                }),
                self.currency,
            ),
        }
    }

    /// Look up a listing by id.
    pub fn get(&self, id: ProductId) -> Option<&Listing<'a>> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// Iterate over listings in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Listing<'a>> {
        self.listings.iter()
    }

    /// Get the number of listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Check if there are no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Get the currency of the inventory.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn next_id(&self) -> Result<ProductId, ListingError> {
        let max = self
            .listings
            .iter()
            .map(|listing| listing.id.0)
            .max()
            .unwrap_or(0);

        max.checked_add(1)
            .map(ProductId)
            .ok_or(ListingError::IdsExhausted(ProductId(max)))
    }
}
