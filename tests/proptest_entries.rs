//! Property-based tests for list entry expansion and caller references.

use cfinval::cloudfront::{distribution_entries, CallerReferenceGenerator, Distribution};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn n_aliases_give_n_entries(
        id in "E[A-Z0-9]{5,13}",
        aliases in proptest::collection::vec("[a-z]{1,12}\\.(com|net|org)", 1..20),
    ) {
        let distribution = Distribution::new(id.clone(), aliases.clone());
        let entries = distribution_entries(std::slice::from_ref(&distribution));

        prop_assert_eq!(entries.len(), aliases.len());
        for (entry, alias) in entries.iter().zip(&aliases) {
            prop_assert_eq!(entry.title(), id.as_str());
            prop_assert_eq!(entry.description(), alias.as_str());
        }
    }

    #[test]
    fn every_distribution_is_reachable(alias_counts in proptest::collection::vec(0usize..4, 0..10)) {
        let distributions: Vec<Distribution> = alias_counts
            .iter()
            .enumerate()
            .map(|(i, &n)| Distribution::new(format!("E{i}"), (0..n).map(|j| format!("d{j}.com"))))
            .collect();
        let entries = distribution_entries(&distributions);

        let expected: usize = alias_counts.iter().map(|&n| n.max(1)).sum();
        prop_assert_eq!(entries.len(), expected);
        let ids: HashSet<&str> = entries.iter().map(|e| e.title()).collect();
        prop_assert_eq!(ids.len(), distributions.len());
    }

    #[test]
    fn caller_references_never_repeat(seconds in proptest::collection::vec(1_600_000_000i64..1_600_000_005, 1..50)) {
        let generator = CallerReferenceGenerator::new("test-");
        let mut seen = HashSet::new();
        for secs in seconds {
            let reference = generator.next_at(secs);
            prop_assert!(reference.starts_with("test-"));
            prop_assert!(seen.insert(reference));
        }
    }
}
