//! Ledger
//!
//! Per-session shopper state: the cart and the saved products. Both start
//! empty (or seeded for demos) and live only as long as the session.

use rusty_money::{Money, iso::Currency};

use crate::{
    catalog::Catalog,
    products::{Product, ProductId},
};

pub mod cart;
pub mod saved;

pub use cart::Cart;
pub use saved::SavedSet;

/// Cart and saved products for one shopper session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    /// Shopping cart
    pub cart: Cart,

    /// Saved products
    pub saved: SavedSet,
}

/// Headline figures for the buyer dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerSummary<'a> {
    /// Products visible under the current query
    pub available_products: usize,

    /// Number of saved products
    pub saved_products: usize,

    /// Number of cart entries
    pub cart_items: usize,

    /// Cart total in the catalog currency
    pub cart_total: Money<'a, Currency>,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with an empty cart and the given products already saved.
    pub fn seeded(saved: impl IntoIterator<Item = ProductId>) -> Self {
        Ledger {
            cart: Cart::new(),
            saved: saved.into_iter().collect(),
        }
    }

    /// Summarise the ledger against the catalog and the currently visible products.
    pub fn summary<'a>(
        &self,
        catalog: &Catalog<'a>,
        visible: &[&Product<'_>],
    ) -> LedgerSummary<'a> {
        LedgerSummary {
            available_products: visible.len(),
            saved_products: self.saved.len(),
            cart_items: self.cart.len(),
            cart_total: self.cart.total(catalog),
        }
    }
}
