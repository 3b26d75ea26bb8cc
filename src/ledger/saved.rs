//! Saved products

use smallvec::SmallVec;
use tracing::debug;

use crate::{
    catalog::Catalog,
    products::{Product, ProductId},
};

/// Products a shopper has saved for later.
///
/// Membership is a set; insertion order is kept for display but ignored
/// when comparing sets.
#[derive(Debug, Clone, Default)]
pub struct SavedSet {
    ids: SmallVec<[ProductId; 8]>,
}

impl SavedSet {
    /// Create an empty saved set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`, returning whether it is now saved.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        let saved = if let Some(pos) = self.ids.iter().position(|saved| *saved == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        };

        debug!(product = %id, saved, "toggled saved product");

        saved
    }

    /// Whether `id` is saved.
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Iterate over saved ids in the order they were saved.
    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }

    /// Get the number of saved products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Saved products, in catalog order.
    pub fn saved_products<'c, 'a>(&self, catalog: &'c Catalog<'a>) -> Vec<&'c Product<'a>> {
        catalog
            .iter()
            .filter(|product| self.contains(product.id))
            .collect()
    }
}

impl PartialEq for SavedSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

impl Eq for SavedSet {}

impl FromIterator<ProductId> for SavedSet {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        let mut set = SavedSet::new();

        for id in iter {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }

        set
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::test_support::sample_products;

    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut saved = SavedSet::new();

        assert!(saved.toggle(ProductId(3)));
        assert!(saved.contains(ProductId(3)));

        assert!(!saved.toggle(ProductId(3)));
        assert!(!saved.contains(ProductId(3)));
    }

    #[test]
    fn toggle_twice_is_identity() {
        let original: SavedSet = [1, 3, 5].map(ProductId).into_iter().collect();

        for id in [1, 2, 5, 9].map(ProductId) {
            let mut saved = original.clone();

            saved.toggle(id);
            saved.toggle(id);

            assert_eq!(saved, original, "toggling {id} twice changed the set");
        }
    }

    #[test]
    fn equality_ignores_order() {
        let left: SavedSet = [1, 3].map(ProductId).into_iter().collect();
        let right: SavedSet = [3, 1].map(ProductId).into_iter().collect();

        assert_eq!(left, right);
        assert_ne!(left, SavedSet::new());
    }

    #[test]
    fn from_iter_drops_duplicates_and_keeps_order() {
        let saved: SavedSet = [5, 1, 5, 3].map(ProductId).into_iter().collect();

        assert_eq!(
            saved.iter().collect::<Vec<_>>(),
            vec![ProductId(5), ProductId(1), ProductId(3)]
        );
    }

    #[test]
    fn saved_products_follow_catalog_order() -> TestResult {
        let catalog = Catalog::with_products(sample_products(), USD)?;
        let saved: SavedSet = [5, 1, 42].map(ProductId).into_iter().collect();

        let names: Vec<&str> = saved
            .saved_products(&catalog)
            .iter()
            .map(|product| product.name.as_str())
            .collect();

        assert_eq!(names, vec!["Organic Tomatoes", "Organic Apples"]);

        Ok(())
    }
}
