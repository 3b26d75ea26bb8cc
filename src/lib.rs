//! Farm2Market
//!
//! Catalog queries, cart and saved-product state, and farmer inventory for a
//! farm produce marketplace. Everything is in memory and single-threaded:
//! the hosting view owns the state and calls in on each render or user action.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod fixtures;
pub mod ledger;
pub mod listings;
pub mod observability;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod report;

#[cfg(test)]
pub(crate) mod test_support;
