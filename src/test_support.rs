//! Shared helpers for unit tests.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::USD};

use crate::products::{Category, Product, ProductId};

/// Build a USD product with only the fields queries care about set.
pub(crate) fn product(
    id: u64,
    name: &str,
    category: Category,
    location: &str,
    price_minor: i64,
) -> Product<'static> {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        farmer_name: format!("{name} Farm"),
        category,
        location: location.to_string(),
        price: Money::from_minor(price_minor, USD),
        unit: "lbs".to_string(),
        rating: Decimal::new(45, 1),
        freshness_label: "Harvested today".to_string(),
        organic: false,
        available_quantity: 100,
        description: String::new(),
    }
}

pub(crate) fn tomatoes() -> Product<'static> {
    Product {
        farmer_name: "Green Valley Farm".to_string(),
        rating: Decimal::new(49, 1),
        organic: true,
        available_quantity: 150,
        ..product(1, "Organic Tomatoes", Category::Vegetables, "California", 450)
    }
}

pub(crate) fn carrots() -> Product<'static> {
    Product {
        farmer_name: "Sunny Acres".to_string(),
        rating: Decimal::new(48, 1),
        freshness_label: "2 days fresh".to_string(),
        available_quantity: 200,
        ..product(2, "Farm Fresh Carrots", Category::Vegetables, "Oregon", 300)
    }
}

pub(crate) fn spinach() -> Product<'static> {
    Product {
        farmer_name: "Earth's Bounty".to_string(),
        rating: Decimal::new(47, 1),
        organic: true,
        unit: "bunches".to_string(),
        ..product(3, "Organic Spinach", Category::LeafyGreens, "Vermont", 500)
    }
}

pub(crate) fn peppers() -> Product<'static> {
    Product {
        farmer_name: "Harvest Moon Farm".to_string(),
        rating: Decimal::new(49, 1),
        ..product(4, "Red Bell Peppers", Category::Vegetables, "Arizona", 600)
    }
}

pub(crate) fn apples() -> Product<'static> {
    Product {
        farmer_name: "Mountain View Orchard".to_string(),
        rating: Decimal::new(48, 1),
        organic: true,
        ..product(5, "Organic Apples", Category::Fruits, "Washington", 350)
    }
}

/// The five-product buyer catalog, in catalog order.
pub(crate) fn sample_products() -> Vec<Product<'static>> {
    vec![tomatoes(), carrots(), spinach(), peppers(), apples()]
}
