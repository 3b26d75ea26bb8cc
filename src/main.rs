//! Farm2Market CLI
//!
//! Browse a fixture catalog, drive a cart session, or manage a farmer's listings.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use farm2market::{
    catalog::QueryParams,
    config::{CartArgs, Cli, Command, ContactArgs, FixtureConfig, InventoryArgs, QueryArgs},
    contact::ContactDraft,
    fixtures::Fixture,
    observability, report,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init_subscriber(&cli.logging)?;

    match &cli.command {
        Command::Browse(args) => browse(&cli.data, args),
        Command::Cart(args) => cart(&cli.data, args),
        Command::Inventory(args) => inventory(&cli.data, args),
        Command::Contact(args) => contact(args),
    }
}

fn load(data: &FixtureConfig) -> Result<Fixture<'static>> {
    Fixture::from_set_in(&data.fixtures, &data.fixture)
        .with_context(|| format!("loading fixture set '{}'", data.fixture))
}

fn browse(data: &FixtureConfig, args: &QueryArgs) -> Result<()> {
    let fixture = load(data)?;
    let catalog = fixture.catalog()?;
    let ledger = fixture.ledger();

    let results = catalog.query(&QueryParams::from(args));

    let mut out = io::stdout().lock();

    report::write_products(&mut out, &results, &ledger.saved)?;
    report::write_summary(&mut out, &ledger.summary(catalog, &results))?;

    Ok(())
}

fn cart(data: &FixtureConfig, args: &CartArgs) -> Result<()> {
    let fixture = load(data)?;
    let catalog = fixture.catalog()?;
    let mut ledger = fixture.ledger();

    for id in args.adds() {
        if catalog.get(id).is_none() {
            warn!(product = %id, "adding product that is not in the catalog");
        }

        ledger.cart.add(id);
    }

    for index in args.removals() {
        ledger.cart.remove_at(index);
    }

    for id in args.toggles() {
        ledger.saved.toggle(id);
    }

    let visible = catalog.query(&QueryParams::from(&args.query));

    let mut out = io::stdout().lock();

    report::write_products(&mut out, &ledger.saved.saved_products(catalog), &ledger.saved)?;
    report::write_cart(&mut out, &ledger.cart, catalog)?;
    report::write_summary(&mut out, &ledger.summary(catalog, &visible))?;

    Ok(())
}

fn inventory(data: &FixtureConfig, args: &InventoryArgs) -> Result<()> {
    let mut inventory = load(data)?.into_inventory()?;

    if let Some(id) = args.remove {
        if inventory.remove(id.into()).is_none() {
            warn!(listing = id, "no listing to remove");
        }
    }

    if let Some(draft) = args.draft() {
        inventory.add(draft).context("adding listing")?;
    }

    report::write_inventory(io::stdout().lock(), &inventory)?;

    Ok(())
}

fn contact(args: &ContactArgs) -> Result<()> {
    ContactDraft::from(args)
        .submit()
        .context("Please fill in all required fields")?;

    writeln!(
        io::stdout().lock(),
        "Message sent successfully! We'll get back to you soon."
    )?;

    Ok(())
}
