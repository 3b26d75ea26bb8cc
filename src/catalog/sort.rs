//! Sort keys

use std::{cmp::Ordering, fmt, sync::OnceLock};

use icu_collator::{
    Collator, CollatorBorrowed, CollatorPreferences,
    options::{CollatorOptions, Strength},
};
use tracing::warn;

use crate::products::Product;

static NAME_COLLATOR: OnceLock<Option<CollatorBorrowed<'static>>> = OnceLock::new();

/// Ordering applied to query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Ascending by name
    #[default]
    Name,

    /// Ascending by price
    PriceLow,

    /// Descending by price
    PriceHigh,

    /// Descending by rating
    Rating,

    /// Offered to shoppers but ordered by name; freshness labels are free text.
    Freshness,
}

impl SortKey {
    /// Sort options as `(value, label)` pairs, in the order they are offered.
    pub const OPTIONS: [(SortKey, &'static str); 5] = [
        (SortKey::Name, "Name"),
        (SortKey::PriceLow, "Price: Low to High"),
        (SortKey::PriceHigh, "Price: High to Low"),
        (SortKey::Rating, "Rating"),
        (SortKey::Freshness, "Freshness"),
    ];

    /// Parse a sort key, falling back to [`SortKey::Name`] for anything unrecognised.
    pub fn parse_lossy(s: &str) -> Self {
        match s {
            "price-low" | "price-asc" => SortKey::PriceLow,
            "price-high" | "price-desc" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            "freshness" => SortKey::Freshness,
            _ => SortKey::Name,
        }
    }

    /// Canonical textual form of the sort key.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Freshness => "freshness",
        }
    }

    /// Compare two products under this key.
    pub fn compare(self, a: &Product<'_>, b: &Product<'_>) -> Ordering {
        match self {
            SortKey::PriceLow => a.price.to_minor_units().cmp(&b.price.to_minor_units()),
            SortKey::PriceHigh => b.price.to_minor_units().cmp(&a.price.to_minor_units()),
            SortKey::Rating => b.rating.cmp(&a.rating),
            SortKey::Name | SortKey::Freshness => compare_names(&a.name, &b.name),
        }
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        SortKey::parse_lossy(s)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root-locale collator at tertiary strength: accents and case only break ties,
/// and lowercase sorts before uppercase.
fn name_collator() -> Option<&'static CollatorBorrowed<'static>> {
    NAME_COLLATOR
        .get_or_init(|| {
            let mut options = CollatorOptions::default();
            options.strength = Some(Strength::Tertiary);

            Collator::try_new(CollatorPreferences::default(), options)
                .inspect_err(|err| warn!(%err, "name collator unavailable, using caseless order"))
                .ok()
        })
        .as_ref()
}

/// Locale-aware name order.
fn compare_names(a: &str, b: &str) -> Ordering {
    match name_collator() {
        Some(collator) => collator.compare(a, b),
        None => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| b.cmp(a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lossy_accepts_aliases() {
        assert_eq!(SortKey::parse_lossy("price-asc"), SortKey::PriceLow);
        assert_eq!(SortKey::parse_lossy("price-low"), SortKey::PriceLow);
        assert_eq!(SortKey::parse_lossy("price-desc"), SortKey::PriceHigh);
        assert_eq!(SortKey::parse_lossy("price-high"), SortKey::PriceHigh);
    }

    #[test]
    fn parse_lossy_falls_back_to_name() {
        assert_eq!(SortKey::parse_lossy("popularity"), SortKey::Name);
        assert_eq!(SortKey::parse_lossy("Rating"), SortKey::Name);
        assert_eq!(SortKey::parse_lossy(""), SortKey::Name);
    }

    #[test]
    fn options_round_trip_through_text() {
        for (key, _label) in SortKey::OPTIONS {
            assert_eq!(SortKey::from(key.as_str()), key);
        }
    }

    #[test]
    fn names_compare_ignoring_case() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Cherry", "banana"), Ordering::Greater);
        assert_eq!(compare_names("kale", "kale"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        assert_eq!(compare_names("Éclair Grapes", "Zucchini"), Ordering::Less);
        assert_eq!(compare_names("Éclair Grapes", "Eggplant"), Ordering::Less);
        assert_eq!(compare_names("Endive", "Éclair Grapes"), Ordering::Greater);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_on_a_case_tie() {
        assert_eq!(compare_names("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_names("Apple", "apple"), Ordering::Greater);
    }
}
