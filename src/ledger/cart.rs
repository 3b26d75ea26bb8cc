//! Cart

use rusty_money::{Money, iso::Currency};
use tracing::debug;

use crate::{
    catalog::Catalog,
    pricing::sum_minor,
    products::{Product, ProductId},
};

/// Shopping cart.
///
/// An ordered log of add events. The same product may appear any number of
/// times; removal is by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<ProductId>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry for `id`.
    ///
    /// No stock check is made against the product's available quantity.
    pub fn add(&mut self, id: ProductId) {
        self.entries.push(id);

        debug!(product = %id, entries = self.entries.len(), "added to cart");
    }

    /// Remove the entry at `index`, returning it.
    ///
    /// An out-of-range index leaves the cart untouched and returns `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<ProductId> {
        if index >= self.entries.len() {
            debug!(index, entries = self.entries.len(), "cart remove out of range");

            return None;
        }

        let removed = self.entries.remove(index);

        debug!(product = %removed, index, "removed from cart");

        Some(removed)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries for `id`.
    pub fn count_of(&self, id: ProductId) -> usize {
        self.entries.iter().filter(|entry| **entry == id).count()
    }

    /// Iterate over the entries in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.entries.iter().copied()
    }

    /// Get the number of entries in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the entries' prices, in the catalog currency.
    ///
    /// Entries that no longer resolve to a catalog product contribute zero.
    pub fn total<'a>(&self, catalog: &Catalog<'a>) -> Money<'a, Currency> {
        sum_minor(
            self.entries.iter().map(|id| {
                catalog
                    .get(*id)
                    .map_or(0, |product| product.price.to_minor_units())
            }),
            catalog.currency(),
        )
    }

    /// Resolve entries against the catalog, keeping each entry's position.
    ///
    /// Unresolvable entries are skipped.
    pub fn lines<'c, 'a>(&self, catalog: &'c Catalog<'a>) -> Vec<(usize, &'c Product<'a>)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, id)| catalog.get(*id).map(|product| (index, product)))
            .collect()
    }
}

impl FromIterator<ProductId> for Cart {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Cart {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::test_support::{carrots, sample_products, tomatoes};

    use super::*;

    fn cart(ids: &[u64]) -> Cart {
        ids.iter().copied().map(ProductId).collect()
    }

    #[test]
    fn add_appends_without_dedup() {
        let mut cart = Cart::new();

        cart.add(ProductId(1));
        cart.add(ProductId(1));
        cart.add(ProductId(2));

        assert_eq!(cart.iter().collect::<Vec<_>>(), vec![ProductId(1), ProductId(1), ProductId(2)]);
        assert_eq!(cart.count_of(ProductId(1)), 2);
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn remove_at_removes_by_position() {
        let mut cart = cart(&[1, 2, 1]);

        let removed = cart.remove_at(1);

        assert_eq!(removed, Some(ProductId(2)));
        assert_eq!(cart, self::cart(&[1, 1]));
    }

    #[test]
    fn remove_at_out_of_range_is_a_no_op() {
        let mut cart = cart(&[1, 2]);
        let before = cart.clone();

        assert_eq!(cart.remove_at(2), None);
        assert_eq!(cart.remove_at(usize::MAX), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn add_then_remove_at_last_index_restores_cart() {
        let original = cart(&[2, 1, 2]);
        let mut cart = original.clone();

        cart.add(ProductId(5));
        cart.remove_at(original.len());

        assert_eq!(cart, original);
    }

    #[test]
    fn total_sums_duplicate_entries() -> TestResult {
        let catalog = Catalog::with_products([tomatoes(), carrots()], USD)?;

        let total = cart(&[1, 1, 2]).total(&catalog);

        assert_eq!(total, Money::from_minor(1200, USD));

        Ok(())
    }

    #[test]
    fn total_ignores_unknown_products() -> TestResult {
        let catalog = Catalog::with_products([tomatoes()], USD)?;

        let total = cart(&[1, 42]).total(&catalog);

        assert_eq!(total, Money::from_minor(450, USD));

        Ok(())
    }

    #[test]
    fn empty_cart_totals_zero() {
        let catalog = Catalog::new(USD);

        assert_eq!(Cart::new().total(&catalog), Money::from_minor(0, USD));
        assert!(Cart::new().is_empty());
    }

    #[test]
    fn lines_keep_entry_positions() -> TestResult {
        let catalog = Catalog::with_products(sample_products(), USD)?;

        let lines = cart(&[3, 99, 5]).lines(&catalog);
        let positions: Vec<(usize, u64)> = lines
            .iter()
            .map(|(index, product)| (*index, product.id.0))
            .collect();

        assert_eq!(positions, vec![(0, 3), (2, 5)]);

        Ok(())
    }

    #[test]
    fn clear_empties_cart() {
        let mut cart = cart(&[1, 2]);

        cart.clear();

        assert!(cart.is_empty());
    }
}
