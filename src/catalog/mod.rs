//! Catalog
//!
//! The static product list for a session, and the query engine that turns
//! search text, filters and a sort key into a render-ready list.

use rustc_hash::FxHashSet;
use rusty_money::iso::Currency;
use smallvec::SmallVec;
use thiserror::Error;

use crate::products::{Category, Product, ProductId};

pub mod query;
pub mod sort;

pub use query::{ALL, CategoryFilter, LocationFilter, QueryParams, query};
pub use sort::SortKey;

/// Errors related to catalog construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an identifier.
    #[error("Duplicate product id {0}")]
    DuplicateProductId(ProductId),

    /// A product's currency differs from the catalog currency (product, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// Catalog
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: Vec<Product<'a>>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Catalog {
            products: Vec::new(),
            currency,
        }
    }

    /// Create a catalog with the given products.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if two products share an id, or if a product
    /// is priced in a different currency.
    pub fn with_products(
        products: impl Into<Vec<Product<'a>>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let products = products.into();
        let mut seen = FxHashSet::default();

        products.iter().try_for_each(|product| {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }

            let product_currency = product.price.currency();

            if product_currency == currency {
                Ok(())
            } else {
                Err(CatalogError::CurrencyMismatch(
                    product.id,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ))
            }
        })?;

        Ok(Catalog { products, currency })
    }

    /// Run a query against the catalog.
    pub fn query(&self, params: &QueryParams) -> Vec<&Product<'a>> {
        query(&self.products, params)
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product<'a>> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Iterate over the products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products.iter()
    }

    /// The products in catalog order.
    pub fn products(&self) -> &[Product<'a>] {
        &self.products
    }

    /// Category filter options: the sentinel first, then every category.
    pub fn categories(&self) -> SmallVec<[CategoryFilter; 6]> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    /// Location filter options: the sentinel first, then each distinct
    /// location in the order it first appears.
    pub fn locations(&self) -> Vec<LocationFilter> {
        let mut seen = FxHashSet::default();

        std::iter::once(LocationFilter::All)
            .chain(
                self.products
                    .iter()
                    .filter(|product| seen.insert(product.location.as_str()))
                    .map(|product| LocationFilter::Only(product.location.clone())),
            )
            .collect()
    }

    /// Get the number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the catalog.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
