//! Property-based tests for the matcher
//!
//! Tests for:
//! - Validity: every solved order is a bijection that avoids partners
//! - Failure modes: only the expected errors come back for a valid order
//! - Shuffling: every shuffle is a permutation of the roster

use super::{ExchangeError, ExchangeRegistry, Matcher};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

// Roster of `attendees` names where the first `couples` pairs are partnered
fn build_registry(attendees: usize, couples: usize) -> ExchangeRegistry {
    let mut registry = ExchangeRegistry::new();
    let mut i = 0;

    while i < attendees {
        let name = format!("attendee-{}", i);
        registry.add_participant(&name).unwrap();
        if i / 2 < couples && i + 1 < attendees {
            registry
                .add_partnership(&name, &format!("attendee-{}", i + 1))
                .unwrap();
            i += 2;
        } else {
            i += 1;
        }
    }

    registry
}

proptest! {
    /// Property test: Validity
    /// Any successful solve assigns everyone exactly one distinct, non-partner giver
    #[test]
    fn prop_solved_assignment_is_valid(
        attendees in 2usize..14,
        couples in 0usize..7,
        seed in any::<u64>(),
    ) {
        let mut registry = build_registry(attendees, couples);
        let order = registry.shuffled_order(&mut StdRng::seed_from_u64(seed));

        match Matcher::new(&mut registry).solve(&order) {
            Ok(assignment) => {
                prop_assert_eq!(assignment.len(), registry.participant_count());
                prop_assert_eq!(registry.unmatched_count(), 0);

                let givers: HashSet<_> = assignment.iter().map(|(_, g)| g).collect();
                prop_assert_eq!(givers.len(), registry.participant_count());

                for (receiver, giver) in assignment.iter() {
                    prop_assert_ne!(receiver, giver);
                    prop_assert_ne!(registry.partner_of(receiver), Some(giver));
                }
            }
            Err(ExchangeError::SolutionNotFound) => {}
            Err(ExchangeError::NoSolutionPossible(_)) => {
                prop_assert!(registry.participant_count() <= 3);
                prop_assert_eq!(registry.partnership_count(), 1);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Property test: Unpartnered rosters
    /// Without partnerships the forward scan always succeeds
    #[test]
    fn prop_unpartnered_roster_always_solves(
        attendees in 2usize..20,
        seed in any::<u64>(),
    ) {
        let mut registry = build_registry(attendees, 0);
        let order = registry.shuffled_order(&mut StdRng::seed_from_u64(seed));

        prop_assert!(Matcher::new(&mut registry).solve(&order).is_ok());
    }

    /// Property test: Shuffling
    /// A shuffled order contains every attendee exactly once
    #[test]
    fn prop_shuffled_order_is_permutation(
        attendees in 0usize..30,
        couples in 0usize..15,
        seed in any::<u64>(),
    ) {
        let registry = build_registry(attendees, couples);
        let order = registry.shuffled_order(&mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(order.len(), registry.participant_count());
        let unique: HashSet<_> = order.iter().map(String::as_str).collect();
        let expected: HashSet<_> = registry.participants().collect();
        prop_assert_eq!(unique, expected);
    }
}
