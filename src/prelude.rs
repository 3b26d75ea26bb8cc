//! Farm2Market prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError, CategoryFilter, LocationFilter, QueryParams, SortKey, query},
    contact::{ContactDraft, ContactError, SenderType},
    fixtures::{Fixture, FixtureError},
    ledger::{Cart, Ledger, LedgerSummary, SavedSet},
    listings::{Inventory, InventoryStats, Listing, ListingDraft, ListingError, ListingStatus},
    products::{Category, Product, ProductError, ProductId, Unit},
};
