//! Candidate filter - keyword decomposition of the advisory filter string
//!
//! The caller typically supplies a normalized command name such as
//! `show_lldp_neighbor_detail`; the resulting terms narrow the catalog to a
//! small plausible candidate subset before any evaluation happens.

use std::collections::BTreeSet;

/// Minimum useful term length; shorter fragments are too unselective
const MIN_TERM_LEN: usize = 3;

/// Decompose an optional filter string into lowercase search terms
///
/// Normalizes `-` to `_`, splits on `_` and any other non-alphanumeric
/// separator, discards terms shorter than three characters, and lowercases
/// the rest. An absent or empty input yields the empty set, which means
/// "consider the whole catalog".
pub fn filter_terms(filter: Option<&str>) -> BTreeSet<String> {
    let Some(filter) = filter else {
        return BTreeSet::new();
    };

    filter
        .replace('-', "_")
        .split(|c: char| !c.is_alphanumeric())
        .filter(|term| term.len() >= MIN_TERM_LEN)
        .map(str::to_lowercase)
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every produced term is lowercase, alphanumeric, and long
        /// enough to be selective
        #[test]
        fn test_terms_are_normalized(input in ".{0,64}") {
            for term in filter_terms(Some(&input)) {
                prop_assert!(term.len() >= MIN_TERM_LEN);
                prop_assert_eq!(term.clone(), term.to_lowercase());
                prop_assert!(term.chars().all(char::is_alphanumeric));
            }
        }

        /// Property: dashes and underscores produce identical term sets
        #[test]
        fn test_dash_underscore_equivalence(parts in prop::collection::vec("[a-z]{1,8}", 0..5)) {
            let dashed = parts.join("-");
            let underscored = parts.join("_");
            prop_assert_eq!(
                filter_terms(Some(&dashed)),
                filter_terms(Some(&underscored))
            );
        }
    }
}
