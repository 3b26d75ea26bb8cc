//! Catalog queries

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    catalog::sort::SortKey,
    products::{Category, Product, ProductError},
};

/// Sentinel meaning "no constraint on this dimension".
pub const ALL: &str = "all";

/// Category constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Any category
    #[default]
    All,

    /// Exactly this category
    Only(Category),
}

impl CategoryFilter {
    /// Whether the category satisfies the filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL),
            CategoryFilter::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

/// Location constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocationFilter {
    /// Any location
    #[default]
    All,

    /// Exactly this location
    Only(String),
}

impl LocationFilter {
    /// Whether the location satisfies the filter.
    pub fn matches(&self, location: &str) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Only(wanted) => wanted == location,
        }
    }
}

impl From<&str> for LocationFilter {
    fn from(s: &str) -> Self {
        if s == ALL {
            LocationFilter::All
        } else {
            LocationFilter::Only(s.to_string())
        }
    }
}

impl fmt::Display for LocationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationFilter::All => f.write_str(ALL),
            LocationFilter::Only(location) => f.write_str(location),
        }
    }
}

/// Parameters for a single catalog query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Case-insensitive text matched against product and farmer names
    pub search: String,

    /// Category constraint
    pub category: CategoryFilter,

    /// Location constraint
    pub location: LocationFilter,

    /// Result ordering
    pub sort: SortKey,
}

impl QueryParams {
    /// Set the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the category constraint.
    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the location constraint.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<LocationFilter>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the result ordering.
    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Clear search text and filters, keeping the current ordering.
    pub fn reset(&mut self) {
        self.search.clear();
        self.category = CategoryFilter::All;
        self.location = LocationFilter::All;
    }
}

/// Filter and sort `products` for display.
///
/// A product is kept when it matches the search text, category and location.
/// The sort is stable, so ties keep their input order.
pub fn query<'c, 'a>(products: &'c [Product<'a>], params: &QueryParams) -> Vec<&'c Product<'a>> {
    let needle = params.search.to_lowercase();

    let mut results: Vec<&Product<'a>> = products
        .iter()
        .filter(|product| {
            product.matches_search(&needle)
                && params.category.matches(product.category)
                && params.location.matches(&product.location)
        })
        .collect();

    results.sort_by(|a, b| params.sort.compare(a, b));

    debug!(
        search = %params.search,
        category = %params.category,
        location = %params.location,
        sort = %params.sort,
        candidates = products.len(),
        matched = results.len(),
        "catalog query"
    );

    results
}

#[cfg(test)]
mod tests {
    use crate::{
        products::ProductId,
        test_support::{carrots, product, sample_products, tomatoes},
    };

    use super::*;

    fn ids(results: &[&Product<'_>]) -> Vec<u64> {
        results.iter().map(|product| product.id.0).collect()
    }

    #[test]
    fn default_params_return_everything_by_name() {
        let products = sample_products();

        let results = query(&products, &QueryParams::default());

        // Carrots, Apples, Spinach, Tomatoes, Peppers
        assert_eq!(ids(&results), vec![2, 5, 3, 1, 4]);
    }

    #[test]
    fn search_matches_product_or_farmer_name_ignoring_case() {
        let products = sample_products();

        let by_farmer = query(&products, &QueryParams::default().with_search("sUnNy"));
        let by_name = query(&products, &QueryParams::default().with_search("ORGANIC"));

        assert_eq!(ids(&by_farmer), vec![2]);
        assert_eq!(ids(&by_name), vec![5, 3, 1]);
    }

    #[test]
    fn search_results_are_complete() {
        let products = sample_products();
        let needle = "farm";

        let results = query(&products, &QueryParams::default().with_search(needle));

        let expected = products
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(needle)
                    || product.farmer_name.to_lowercase().contains(needle)
            })
            .count();

        assert_eq!(results.len(), expected);
        assert!(results.iter().all(|product| product.matches_search(needle)));
    }

    #[test]
    fn category_and_price_low() {
        let products = [tomatoes(), carrots()];
        let params = QueryParams::default()
            .with_category(CategoryFilter::Only(Category::Vegetables))
            .with_sort(SortKey::PriceLow);

        let results = query(&products, &params);

        assert_eq!(ids(&results), vec![2, 1]);
    }

    #[test]
    fn category_excludes_other_categories() {
        let products = sample_products();
        let params =
            QueryParams::default().with_category(CategoryFilter::Only(Category::LeafyGreens));

        let results = query(&products, &params);

        assert_eq!(ids(&results), vec![3]);
    }

    #[test]
    fn location_match_is_exact() {
        let products = sample_products();

        let exact = query(&products, &QueryParams::default().with_location("Oregon"));
        let wrong_case = query(&products, &QueryParams::default().with_location("oregon"));

        assert_eq!(ids(&exact), vec![2]);
        assert!(wrong_case.is_empty());
    }

    #[test]
    fn all_filters_combine() {
        let products = sample_products();
        let params = QueryParams::default()
            .with_search("organic")
            .with_category(CategoryFilter::Only(Category::Vegetables))
            .with_location("California");

        let results = query(&products, &params);

        assert_eq!(results.first().map(|product| product.id), Some(ProductId(1)));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn rating_sort_is_descending_and_stable() {
        let products = sample_products();

        let results = query(&products, &QueryParams::default().with_sort(SortKey::Rating));

        // 4.9 ties keep input order (tomatoes, peppers), as do 4.8 ties (carrots, apples)
        assert_eq!(ids(&results), vec![1, 4, 2, 5, 3]);
    }

    #[test]
    fn price_high_is_reverse_of_price_low() {
        let products = sample_products();
        let params = QueryParams::default().with_category(CategoryFilter::All);

        let mut low = query(&products, &params.clone().with_sort(SortKey::PriceLow));
        let high = query(&products, &params.with_sort(SortKey::PriceHigh));

        low.reverse();

        assert_eq!(ids(&low), ids(&high));
        assert_eq!(ids(&high), vec![4, 3, 1, 5, 2]);
    }

    #[test]
    fn freshness_orders_by_name() {
        let products = sample_products();

        let by_freshness = query(&products, &QueryParams::default().with_sort(SortKey::Freshness));
        let by_name = query(&products, &QueryParams::default().with_sort(SortKey::Name));

        assert_eq!(ids(&by_freshness), ids(&by_name));
    }

    #[test]
    fn name_order_collates_accents_and_case() {
        let products = [
            product(1, "Zucchini", Category::Vegetables, "Oregon", 200),
            product(2, "Éclair Grapes", Category::Fruits, "California", 400),
            product(3, "Apple Cider", Category::Fruits, "Vermont", 500),
            product(4, "apple cider", Category::Fruits, "Vermont", 450),
        ];

        let results = query(&products, &QueryParams::default());

        assert_eq!(ids(&results), vec![4, 3, 2, 1]);
    }

    #[test]
    fn unknown_sort_key_uses_name_order() {
        let products = sample_products();
        let params = QueryParams::default().with_sort(SortKey::from("best-sellers"));

        let results = query(&products, &params);

        assert_eq!(ids(&results), vec![2, 5, 3, 1, 4]);
    }

    #[test]
    fn no_match_returns_empty() {
        let products = sample_products();

        let results = query(&products, &QueryParams::default().with_search("durian"));

        assert!(results.is_empty());
    }

    #[test]
    fn category_filter_parses_sentinel_and_rejects_unknown() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "fruits".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Fruits))
        );
        assert!("mushrooms".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn reset_clears_filters_but_keeps_sort() {
        let mut params = QueryParams::default()
            .with_search("kale")
            .with_category(CategoryFilter::Only(Category::Herbs))
            .with_location("Vermont")
            .with_sort(SortKey::Rating);

        params.reset();

        assert_eq!(params, QueryParams::default().with_sort(SortKey::Rating));
    }
}
