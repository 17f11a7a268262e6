//! Property tests for label normalization and deduplication

use district_scrape::utils::{UniqueNames, clean, dedup_key, dedup_names};
use proptest::prelude::*;
use std::collections::HashSet;

fn label() -> impl Strategy<Value = String> {
    "[ aAbBcC\u{a0}\t]{0,8}"
}

proptest! {
    #[test]
    fn clean_is_idempotent(s in label()) {
        let once = clean(&s);
        prop_assert_eq!(clean(&once), once.clone());
        prop_assert!(!once.starts_with(' ') && !once.ends_with(' '));
        prop_assert!(!once.contains("  "));
    }

    #[test]
    fn dedup_is_idempotent(labels in prop::collection::vec(label(), 0..20)) {
        let once = dedup_names(&labels);
        let twice = dedup_names(&once);
        prop_assert_eq!(&twice, &once);
    }

    #[test]
    fn dedup_keeps_one_name_per_key(labels in prop::collection::vec(label(), 0..20)) {
        let names = dedup_names(&labels);
        let keys: HashSet<String> = names.iter().map(|n| dedup_key(n)).collect();
        prop_assert_eq!(keys.len(), names.len());
        prop_assert!(names.iter().all(|n| !n.is_empty()));

        let mut unique = UniqueNames::new();
        unique.extend(&labels);
        for raw in &labels {
            prop_assert_eq!(unique.contains(raw), !clean(raw).is_empty());
        }
    }
}
