//! Property-based tests for glossary search and particle layout
//!
//! Uses proptest to check the filter's invariants over arbitrary queries.

use cryptoworld_core::content::GLOSSARY_TERMS;
use cryptoworld_core::{filter_terms, scatter, Viewport};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Short ASCII queries, biased toward text that actually occurs
fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z -]{0,12}").expect("valid regex"),
        prop::sample::select(GLOSSARY_TERMS.to_vec()).prop_flat_map(|entry| {
            let text = entry.definition;
            (0..text.len()).prop_flat_map(move |start| {
                (Just(start), start..=text.len().min(start + 15))
            })
            .prop_filter_map("char boundary", move |(start, end)| {
                text.get(start..end).map(str::to_string)
            })
        }),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every match contains the query in its term or definition
    #[test]
    fn every_match_contains_query(query in query_strategy()) {
        let needle = query.to_lowercase();
        for entry in filter_terms(GLOSSARY_TERMS, &query) {
            prop_assert!(
                entry.term.to_lowercase().contains(&needle)
                    || entry.definition.to_lowercase().contains(&needle)
            );
        }
    }

    /// Nothing that contains the query is left out
    #[test]
    fn no_match_is_missed(query in query_strategy()) {
        let needle = query.to_lowercase();
        let expected = GLOSSARY_TERMS
            .iter()
            .filter(|e| {
                e.term.to_lowercase().contains(&needle)
                    || e.definition.to_lowercase().contains(&needle)
            })
            .count();
        prop_assert_eq!(filter_terms(GLOSSARY_TERMS, &query).len(), expected);
    }

    /// Results are a subsequence of the table, in table order
    #[test]
    fn results_preserve_order(query in query_strategy()) {
        let results = filter_terms(GLOSSARY_TERMS, &query);
        let positions: Vec<usize> = results
            .iter()
            .map(|r| GLOSSARY_TERMS.iter().position(|e| e == *r).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Upper- and lower-casing the query gives the same matches
    #[test]
    fn case_does_not_matter(query in query_strategy()) {
        let upper = filter_terms(GLOSSARY_TERMS, &query.to_uppercase());
        let lower = filter_terms(GLOSSARY_TERMS, &query.to_lowercase());
        prop_assert_eq!(upper, lower);
    }

    /// A substring taken from a definition always finds its own entry
    #[test]
    fn definition_substring_finds_entry(index in 0..GLOSSARY_TERMS.len(), start in 0usize..40, len in 1usize..10) {
        let entry = &GLOSSARY_TERMS[index];
        let end = (start + len).min(entry.definition.len());
        let start = start.min(end);
        if let Some(slice) = entry.definition.get(start..end) {
            let results = filter_terms(GLOSSARY_TERMS, slice);
            prop_assert!(results.iter().any(|r| *r == entry));
        }
    }

    /// Particles never leave the viewport, whatever its size
    #[test]
    fn particles_stay_inside(width in 1.0f64..4000.0, height in 1.0f64..4000.0, seed in any::<u64>()) {
        let viewport = Viewport::new(width, height);
        let mut rng = StdRng::seed_from_u64(seed);
        for p in scatter(viewport, 20, &mut rng) {
            prop_assert!(viewport.contains(p.from));
            prop_assert!(viewport.contains(p.to));
        }
    }
}
