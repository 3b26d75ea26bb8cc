//! Report
//!
//! Terminal tables for query results, the cart and a farmer's inventory.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    catalog::Catalog,
    ledger::{Cart, LedgerSummary, SavedSet},
    listings::Inventory,
    products::Product,
};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Write query results as a table, marking saved products.
///
/// # Errors
///
/// Returns a [`ReportError`] if the output cannot be written.
pub fn write_products(
    mut out: impl io::Write,
    products: &[&Product<'_>],
    saved: &SavedSet,
) -> Result<(), ReportError> {
    if products.is_empty() {
        writeln!(out, "\nNo products found matching your criteria.")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record([
        "", "Id", "Product", "Farmer", "Category", "Location", "Price", "Rating", "Freshness",
    ]);

    for product in products {
        let mut flags = String::new();

        if saved.contains(product.id) {
            flags.push('♥');
        }

        if product.organic {
            flags.push('✿');
        }

        builder.push_record([
            flags,
            product.id.to_string(),
            product.name.clone(),
            product.farmer_name.clone(),
            product.category.to_string(),
            product.location.clone(),
            format!("{}/{}", product.price, product.unit),
            product.rating.to_string(),
            product.freshness_label.clone(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(6..8), Alignment::right());

    writeln!(out, "\n{table}")?;

    Ok(())
}

/// Write the cart lines and total.
///
/// # Errors
///
/// Returns a [`ReportError`] if the output cannot be written.
pub fn write_cart(
    mut out: impl io::Write,
    cart: &Cart,
    catalog: &Catalog<'_>,
) -> Result<(), ReportError> {
    if cart.is_empty() {
        writeln!(out, "\nYour cart is empty")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["", "Product", "Farmer", "Price"]);

    for (index, product) in cart.lines(catalog) {
        builder.push_record([
            format!("#{:<3}", index + 1),
            product.name.clone(),
            product.farmer_name.clone(),
            format!("{}/{}", product.price, product.unit),
        ]);
    }

    builder.push_record([
        String::new(),
        String::new(),
        "Total".to_string(),
        cart.total(catalog).to_string(),
    ]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Rows::last(), Color::BOLD);
    table.modify(Columns::last(), Alignment::right());

    writeln!(out, "\n{table}")?;

    Ok(())
}

/// Write the buyer dashboard headline figures.
///
/// # Errors
///
/// Returns a [`ReportError`] if the output cannot be written.
pub fn write_summary(
    mut out: impl io::Write,
    summary: &LedgerSummary<'_>,
) -> Result<(), ReportError> {
    writeln!(out)?;
    writeln!(out, " Available Products: {}", summary.available_products)?;
    writeln!(out, " Saved Products:     {}", summary.saved_products)?;
    writeln!(out, " Cart Items:         {}", summary.cart_items)?;
    writeln!(out, " Cart Total:         {}", summary.cart_total)?;

    Ok(())
}

/// Write a farmer's listings and totals.
///
/// # Errors
///
/// Returns a [`ReportError`] if the output cannot be written.
pub fn write_inventory(
    mut out: impl io::Write,
    inventory: &Inventory<'_>,
) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    builder.push_record([
        "Id", "Product", "Category", "Price", "Quantity", "Location", "Status", "Sales",
    ]);

    for listing in inventory.iter() {
        builder.push_record([
            listing.id.to_string(),
            listing.name.clone(),
            listing.category.to_string(),
            format!("{}/{}", listing.price, listing.unit),
            format!("{} {}", listing.quantity, listing.unit),
            listing.location.clone(),
            listing.status.to_string(),
            listing.sales.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..5), Alignment::right());

    let stats = inventory.stats();

    writeln!(out, "\n{table}")?;
    writeln!(out, " Total Products: {}", stats.total_products)?;
    writeln!(out, " Total Revenue:  {}", stats.total_revenue)?;

    Ok(())
}
