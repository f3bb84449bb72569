//! Property-based tests for attest-check.

use std::collections::HashSet;

use attest_check::prelude::*;
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCY: check(x) == check(x)
// ============================================================================

proptest! {
    #[test]
    fn same_order_idempotent(a in prop::collection::vec(0u8..8, 0..8), b in prop::collection::vec(0u8..8, 0..8)) {
        let checker = Checker::default();
        let r1 = checker.same_order(&a, &b).map_err(|e| e.to_string());
        let r2 = checker.same_order(&a, &b).map_err(|e| e.to_string());
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn unique_elements_idempotent(v in prop::collection::vec(0u8..16, 0..12)) {
        let checker = Checker::default();
        let r1 = checker.unique_elements(&v).map_err(|e| e.to_string());
        let r2 = checker.unique_elements(&v).map_err(|e| e.to_string());
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn contains_exact_by_idempotent(a in prop::collection::vec(0i32..5, 0..6), b in prop::collection::vec(0i32..5, 0..6)) {
        let checker = Checker::default();
        let relation = |x: &i32, y: &i32| x == y;
        let r1 = checker.contains_exact_by(&a, &b, relation).map_err(|e| e.to_string());
        let r2 = checker.contains_exact_by(&a, &b, relation).map_err(|e| e.to_string());
        prop_assert_eq!(r1, r2);
    }
}

// ============================================================================
// SIZE LAWS
// ============================================================================

proptest! {
    #[test]
    fn same_size_iff_lengths_match(a in prop::collection::vec(any::<u16>(), 0..10), b in prop::collection::vec(any::<u16>(), 0..10)) {
        prop_assert_eq!(Checker::default().same_size(&a, &b).is_ok(), a.len() == b.len());
    }

    #[test]
    fn has_size_iff_length_matches(v in prop::collection::vec(any::<bool>(), 0..10), n in 0usize..10) {
        prop_assert_eq!(Checker::default().has_size(n, &v).is_ok(), v.len() == n);
    }
}

// ============================================================================
// UNIQUENESS LAWS
// ============================================================================

proptest! {
    #[test]
    fn unique_iff_no_duplicates(v in prop::collection::vec(0u8..20, 0..12)) {
        let distinct: HashSet<_> = v.iter().collect();
        prop_assert_eq!(Checker::default().unique_elements(&v).is_ok(), distinct.len() == v.len());
    }

    #[test]
    fn unique_argument_agrees_with_assertion(v in prop::collection::vec(0u8..20, 0..12)) {
        let checker = Checker::default();
        let assertion = checker.unique_elements(&v);
        let argument = checker.unique_elements_argument(&v, "v");
        prop_assert_eq!(assertion.is_ok(), argument.is_ok());
        if let (Err(assertion), Err(argument)) = (assertion, argument) {
            prop_assert!(assertion.is_constraint_violation());
            prop_assert!(argument.is_argument_violation());
        }
    }
}

// ============================================================================
// ORDER LAWS
// ============================================================================

proptest! {
    #[test]
    fn same_order_iff_vectors_equal(a in prop::collection::vec(0u8..4, 0..6), b in prop::collection::vec(0u8..4, 0..6)) {
        prop_assert_eq!(Checker::default().same_order(&a, &b).is_ok(), a == b);
    }

    #[test]
    fn any_permutation_contains_exact(v in prop::collection::vec(any::<i16>(), 0..10)) {
        let mut reversed = v.clone();
        reversed.reverse();
        prop_assert!(Checker::default().contains_exact(&v, &reversed).is_ok());
        prop_assert!(Checker::default().contains_exact_by(&v, &reversed, Native).is_ok());
    }

    #[test]
    fn inactive_never_raises_argument_bounds(value in any::<i64>(), min in any::<i64>()) {
        let checker = Checker::new(CheckConfig::lenient(FailureAction::Silent));
        prop_assert!(checker.argument_greater_equals(min, value, "value").is_ok());
    }
}
