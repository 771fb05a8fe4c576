//! Filter/sort/search engine.
//!
//! A pure function from (catalog, criteria) to an ordered subsequence of the
//! catalog. Same inputs, same output, including order.

use core::cmp::Ordering;

use crate::catalog::Catalog;
use crate::criteria::{FilterCriteria, SortOption};
use crate::entry::CatalogEntry;
use crate::money::Money;

/// Entries passing every predicate in `criteria`, in the requested order.
pub fn filter<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a CatalogEntry> {
    let entries = catalog.entries();
    filter_indices(catalog, criteria)
        .into_iter()
        .map(|index| &entries[index])
        .collect()
}

/// Same as [`filter`], as positions into [`Catalog::entries`].
pub fn filter_indices(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<usize> {
    let needle = criteria.search_query.to_lowercase();
    let entries = catalog.entries();

    let mut matched: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(index, entry)| {
            criteria.category.admits(&entry.category)
                && criteria.price_range.admits(&entry.price_range)
                && catalog.text_contains(*index, &needle)
        })
        .map(|(index, _)| index)
        .collect();

    // `sort_by` is stable: ties and `Default` keep catalog order.
    match criteria.sort {
        SortOption::Default => {}
        SortOption::PriceAscending => matched.sort_by(|&a, &b| {
            compare_prices(entries[a].price.amount(), entries[b].price.amount(), false)
        }),
        SortOption::PriceDescending => matched.sort_by(|&a, &b| {
            compare_prices(entries[a].price.amount(), entries[b].price.amount(), true)
        }),
        SortOption::Newest => matched.sort_by(|&a, &b| entries[b].listed_at.cmp(&entries[a].listed_at)),
    }

    tracing::debug!(
        category = %criteria.category,
        price_range = %criteria.price_range,
        sort = ?criteria.sort,
        query = criteria.search_query.as_str(),
        matched = matched.len(),
        of = entries.len(),
        "catalog filtered"
    );

    matched
}

/// Price ordering with unpriced entries pinned to the end in both directions.
fn compare_prices(a: Option<&Money>, b: Option<&Money>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp_amount(a),
        (Some(a), Some(b)) => a.cmp_amount(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::catalog::tests::entry;
    use crate::criteria::Selection;
    use crate::entry::{Category, PriceBucket};

    fn ids(result: &[&CatalogEntry]) -> Vec<String> {
        result.iter().map(|e| e.id.to_string()).collect()
    }

    fn sample() -> Catalog {
        let mut cheap = entry("beaded-headwrap", "Beaded Headwrap", "N20000", Category::Accessories);
        cheap.price_range = PriceBucket::Low;
        let mut unpriced = entry("mystery-box", "Mystery Box", "price on request", Category::Accessories);
        unpriced.listed_at = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let mut dear = entry("dashiki-tunic", "Dashiki Tunic", "N236000", Category::Mens);
        dear.price_range = PriceBucket::High;
        dear.listed_at = Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap();
        let mut mid = entry("kente-shirt", "Kente Shirt", "N50000", Category::Mens);
        mid.price_range = PriceBucket::Medium;
        mid.description = "Rich woven fabric, a dashiki alternative.".to_string();

        Catalog::new(vec![cheap, unpriced, dear, mid]).unwrap()
    }

    #[test]
    fn unfiltered_criteria_return_catalog_order() {
        let catalog = sample();
        let result = filter(&catalog, &FilterCriteria::default());
        assert_eq!(
            ids(&result),
            ["beaded-headwrap", "mystery-box", "dashiki-tunic", "kente-shirt"]
        );
    }

    #[test]
    fn category_and_search_apply_together() {
        let catalog = sample();
        let criteria = FilterCriteria {
            category: Selection::Only(Category::Mens),
            search_query: "DASHIKI".to_string(),
            ..FilterCriteria::default()
        };
        // Kente Shirt matches through its description.
        assert_eq!(ids(&filter(&catalog, &criteria)), ["dashiki-tunic", "kente-shirt"]);

        let criteria = FilterCriteria {
            category: Selection::Only(Category::Accessories),
            search_query: "dashiki".to_string(),
            ..FilterCriteria::default()
        };
        assert!(filter(&catalog, &criteria).is_empty());
    }

    #[test]
    fn price_bucket_predicate() {
        let catalog = sample();
        let criteria = FilterCriteria {
            price_range: Selection::Only(PriceBucket::High),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&catalog, &criteria)), ["dashiki-tunic"]);
    }

    #[test]
    fn unpriced_entries_sort_last_in_both_directions() {
        let catalog = sample();
        let ascending = FilterCriteria {
            sort: SortOption::PriceAscending,
            ..FilterCriteria::default()
        };
        assert_eq!(
            ids(&filter(&catalog, &ascending)),
            ["beaded-headwrap", "kente-shirt", "dashiki-tunic", "mystery-box"]
        );

        let descending = FilterCriteria {
            sort: SortOption::PriceDescending,
            ..FilterCriteria::default()
        };
        assert_eq!(
            ids(&filter(&catalog, &descending)),
            ["dashiki-tunic", "kente-shirt", "beaded-headwrap", "mystery-box"]
        );
    }

    #[test]
    fn newest_orders_by_listing_date_and_keeps_ties_stable() {
        let catalog = sample();
        let criteria = FilterCriteria {
            sort: SortOption::Newest,
            ..FilterCriteria::default()
        };
        // beaded-headwrap and kente-shirt share a listing date.
        assert_eq!(
            ids(&filter(&catalog, &criteria)),
            ["mystery-box", "dashiki-tunic", "beaded-headwrap", "kente-shirt"]
        );
    }

    #[test]
    fn equal_prices_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            entry("first", "First", "N100", Category::Kids),
            entry("second", "Second", "N50", Category::Kids),
            entry("third", "Third", "N100", Category::Kids),
        ])
        .unwrap();
        let criteria = FilterCriteria {
            sort: SortOption::PriceDescending,
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&catalog, &criteria)), ["first", "third", "second"]);
    }

    #[test]
    fn indices_and_entries_agree() {
        let catalog = sample();
        let criteria = FilterCriteria {
            sort: SortOption::PriceAscending,
            ..FilterCriteria::default()
        };
        let by_index: Vec<_> = filter_indices(&catalog, &criteria)
            .into_iter()
            .map(|i| catalog.entries()[i].id.to_string())
            .collect();
        assert_eq!(by_index, ids(&filter(&catalog, &criteria)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_category() -> impl Strategy<Value = Category> {
            prop::sample::select(Category::ALL.to_vec())
        }

        fn arb_bucket() -> impl Strategy<Value = PriceBucket> {
            prop::sample::select(PriceBucket::ALL.to_vec())
        }

        fn arb_sort() -> impl Strategy<Value = SortOption> {
            prop::sample::select(SortOption::ALL.to_vec())
        }

        /// Catalogs of up to 40 entries with distinct prices.
        fn arb_catalog() -> impl Strategy<Value = Catalog> {
            prop::collection::vec(
                (arb_category(), arb_bucket(), "[a-z]{1,6}", 0i64..1_000_000),
                0..40,
            )
            .prop_map(|rows| {
                let entries = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, (category, bucket, word, listed))| {
                        let mut e = entry(&format!("entry-{i}"), &format!("Item {word}"), &format!("N{}", i * 7 + 1), category);
                        e.price_range = bucket;
                        e.listed_at = Utc.timestamp_opt(listed, 0).unwrap();
                        e
                    })
                    .collect();
                Catalog::new(entries).unwrap()
            })
        }

        fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
            (
                prop::option::of(arb_category()),
                prop::option::of(arb_bucket()),
                arb_sort(),
                "[a-z]{0,2}",
            )
                .prop_map(|(category, bucket, sort, search_query)| FilterCriteria {
                    category: category.map_or(Selection::All, Selection::Only),
                    price_range: bucket.map_or(Selection::All, Selection::Only),
                    sort,
                    search_query,
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 128,
                .. ProptestConfig::default()
            })]

            /// Property: the result holds exactly the entries satisfying every predicate, once each.
            #[test]
            fn result_is_exactly_the_matching_entries(catalog in arb_catalog(), criteria in arb_criteria()) {
                let result = filter(&catalog, &criteria);
                let needle = criteria.search_query.to_lowercase();

                let mut expected: Vec<&str> = catalog
                    .entries()
                    .iter()
                    .filter(|e| {
                        criteria.category.admits(&e.category)
                            && criteria.price_range.admits(&e.price_range)
                            && (e.title.to_lowercase().contains(&needle)
                                || e.description.to_lowercase().contains(&needle))
                    })
                    .map(|e| e.id.as_str())
                    .collect();
                let mut actual: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();

                expected.sort_unstable();
                actual.sort_unstable();
                prop_assert_eq!(actual, expected);
            }

            /// Property: with nothing selected the catalog comes back untouched.
            #[test]
            fn identity_criteria_preserve_catalog(catalog in arb_catalog()) {
                let result = filter(&catalog, &FilterCriteria::default());
                let expected: Vec<&CatalogEntry> = catalog.entries().iter().collect();
                prop_assert_eq!(result, expected);
            }

            /// Property: without ties, descending order is ascending order reversed.
            #[test]
            fn descending_reverses_ascending(catalog in arb_catalog(), criteria in arb_criteria()) {
                let ascending = FilterCriteria { sort: SortOption::PriceAscending, ..criteria.clone() };
                let descending = FilterCriteria { sort: SortOption::PriceDescending, ..criteria };

                let mut up = filter(&catalog, &ascending);
                up.reverse();
                prop_assert_eq!(up, filter(&catalog, &descending));
            }

            /// Property: identical inputs give identical outputs.
            #[test]
            fn filtering_is_deterministic(catalog in arb_catalog(), criteria in arb_criteria()) {
                prop_assert_eq!(filter(&catalog, &criteria), filter(&catalog, &criteria));
            }
        }
    }
}
