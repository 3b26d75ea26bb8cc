//! Products

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when parsing product vocabularies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// Category text is not one of the fixed categories.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unit text is not one of the fixed listing units.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

/// Product identifier, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

/// Produce category.
///
/// Textual forms are matched exactly and case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// `vegetables`
    #[serde(rename = "vegetables")]
    Vegetables,

    /// `fruits`
    #[serde(rename = "fruits")]
    Fruits,

    /// `leafy greens`
    #[serde(rename = "leafy greens")]
    LeafyGreens,

    /// `herbs`
    #[serde(rename = "herbs")]
    Herbs,

    /// `grains`
    #[serde(rename = "grains")]
    Grains,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Vegetables,
        Category::Fruits,
        Category::LeafyGreens,
        Category::Herbs,
        Category::Grains,
    ];

    /// Textual form of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Vegetables => "vegetables",
            Category::Fruits => "fruits",
            Category::LeafyGreens => "leafy greens",
            Category::Herbs => "herbs",
            Category::Grains => "grains",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ProductError::UnknownCategory(s.to_string()))
    }
}

/// Unit a farmer can list produce in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Pounds
    #[default]
    Lbs,

    /// Kilograms
    Kg,

    /// A bunch
    Bunch,

    /// A single item
    Each,

    /// A box
    Box,
}

impl Unit {
    /// Every listing unit, in display order.
    pub const ALL: [Unit; 5] = [Unit::Lbs, Unit::Kg, Unit::Bunch, Unit::Each, Unit::Box];

    /// Textual form of the unit.
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Lbs => "lbs",
            Unit::Kg => "kg",
            Unit::Bunch => "bunch",
            Unit::Each => "each",
            Unit::Box => "box",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| ProductError::UnknownUnit(s.to_string()))
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Name of the farm selling the product
    pub farmer_name: String,

    /// Product category
    pub category: Category,

    /// Where the product is grown
    pub location: String,

    /// Product price, per `unit`
    pub price: Money<'a, Currency>,

    /// Unit the price applies to (e.g. "lbs")
    pub unit: String,

    /// Average rating, between 0 and 5
    pub rating: Decimal,

    /// Free-text freshness label (e.g. "Harvested today")
    pub freshness_label: String,

    /// Whether the product is certified organic
    pub organic: bool,

    /// Quantity on hand
    pub available_quantity: u32,

    /// Short description shown on the product card
    pub description: String,
}

impl Product<'_> {
    /// Whether the product name or farmer name contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.farmer_name.to_lowercase().contains(needle)
    }
}
