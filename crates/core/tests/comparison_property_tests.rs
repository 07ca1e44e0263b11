//! Property-based integration tests for aggregation and classification.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use capmap_core::companies::CATALOG;
use capmap_core::presentation::{country_table, summarize};
use capmap_core::{
    classify, reference_dataset, to_millions, total_valuation, CompanyValuation,
    ComparisonState, CountryRecord, Valuations,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Generates a country with a strictly positive GDP in millions.
fn arb_country() -> impl Strategy<Value = CountryRecord> {
    ("[A-Z]{3}", "[A-Za-z ]{3,20}", 1i64..60_000_000)
        .prop_map(|(code, name, gdp)| CountryRecord::new(code, name, Decimal::from(gdp)))
}

/// Generates a list of countries.
fn arb_countries(max_count: usize) -> impl Strategy<Value = Vec<CountryRecord>> {
    proptest::collection::vec(arb_country(), 0..=max_count)
}

/// Generates a total valuation in millions, with up to six decimal places.
fn arb_total_millions() -> impl Strategy<Value = Decimal> {
    (0i64..80_000_000_000_000).prop_map(|micro| Decimal::new(micro, 6))
}

/// Generates valuations for a random subset of the catalog.
fn arb_valuations() -> impl Strategy<Value = Valuations> {
    proptest::collection::vec(
        (0usize..CATALOG.len(), proptest::option::of(0u64..6_000_000_000_000)),
        0..=CATALOG.len(),
    )
    .prop_map(|entries| {
        Valuations::new(entries.into_iter().map(|(index, cap)| match cap {
            Some(cap) => CompanyValuation::available(&CATALOG[index], Decimal::from(cap)),
            None => CompanyValuation::unavailable(&CATALOG[index]),
        }))
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The total equals the sum of the per-company values; nothing dropped or
    /// counted twice.
    #[test]
    fn prop_total_is_sum_of_entries(valuations in arb_valuations()) {
        let expected: Decimal = valuations.iter().map(|v| v.capitalization).sum();
        prop_assert_eq!(total_valuation(&valuations), expected);
        prop_assert!(total_valuation(&valuations) >= Decimal::ZERO);
    }

    /// One row per country, in input order, with an exact difference.
    #[test]
    fn prop_one_row_per_country_with_exact_difference(
        countries in arb_countries(60),
        total in arb_total_millions(),
    ) {
        let rows = classify(&countries, total);

        prop_assert_eq!(rows.len(), countries.len());
        for (row, country) in rows.iter().zip(countries.iter()) {
            prop_assert_eq!(&row.country, country);
            prop_assert_eq!(row.total_valuation, total);
            prop_assert_eq!(row.difference, country.gdp - total);
        }
    }

    /// The state is determined by the sign of the difference, zero included.
    #[test]
    fn prop_state_follows_difference_sign(
        countries in arb_countries(60),
        total in arb_total_millions(),
    ) {
        for row in classify(&countries, total) {
            let expected = if row.difference >= Decimal::ZERO {
                ComparisonState::GdpExceedsValuation
            } else {
                ComparisonState::ValuationExceedsGdp
            };
            prop_assert_eq!(row.state, expected);
            prop_assert_eq!(row.state.color_value(), if row.difference >= Decimal::ZERO { 1 } else { -1 });
        }
    }

    /// Classification is a pure function of its inputs.
    #[test]
    fn prop_classify_is_idempotent(
        countries in arb_countries(60),
        total in arb_total_millions(),
    ) {
        prop_assert_eq!(classify(&countries, total), classify(&countries, total));
    }

    /// A zero total leaves every positive-GDP country GDP-dominant.
    #[test]
    fn prop_zero_total_is_gdp_dominant(countries in arb_countries(60)) {
        let rows = classify(&countries, Decimal::ZERO);
        prop_assert!(rows.iter().all(|r| r.state == ComparisonState::GdpExceedsValuation));
    }

    /// Summary counts partition the rows.
    #[test]
    fn prop_summary_partitions_rows(
        countries in arb_countries(60),
        total in arb_total_millions(),
    ) {
        let rows = classify(&countries, total);
        let summary = summarize(&rows);

        prop_assert_eq!(summary.total, rows.len());
        prop_assert_eq!(
            summary.valuation_exceeds_gdp + summary.gdp_exceeds_valuation,
            rows.len()
        );
    }

    /// The country table is a GDP-descending permutation of the rows and
    /// leaves the rows themselves untouched.
    #[test]
    fn prop_country_table_sorted_permutation(
        countries in arb_countries(60),
        total in arb_total_millions(),
    ) {
        let rows = classify(&countries, total);
        let before = rows.clone();
        let table = country_table(&rows);

        prop_assert_eq!(&rows, &before);
        prop_assert_eq!(table.len(), rows.len());
        prop_assert!(table.windows(2).all(|w| w[0].gdp_trillions >= w[1].gdp_trillions));

        let mut table_codes: Vec<_> = table.iter().map(|r| r.code.clone()).collect();
        let mut row_codes: Vec<_> = rows.iter().map(|r| r.country.code.clone()).collect();
        table_codes.sort();
        row_codes.sort();
        prop_assert_eq!(table_codes, row_codes);
    }

    /// Against the embedded dataset, normalisation keeps base units and
    /// millions consistent.
    #[test]
    fn prop_reference_dataset_difference_matches_normalised_total(
        valuations in arb_valuations(),
    ) {
        let total = total_valuation(&valuations);
        let rows = classify(reference_dataset(), to_millions(total));

        prop_assert_eq!(rows.len(), 50);
        for row in &rows {
            prop_assert_eq!(
                (row.country.gdp - row.difference) * Decimal::from(1_000_000),
                total
            );
        }
    }
}
