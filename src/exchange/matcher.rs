//! Single-pass greedy matcher.
//!
//! For a fixed order of attendees, each position in turn receives from the
//! first later attendee who is still available and is not their partner,
//! wrapping round to the front of the order if needed. There is no
//! backtracking: if some receiver runs out of candidates the whole order is
//! rejected with [`ExchangeError::SolutionNotFound`] and the caller is
//! expected to reshuffle and try again.
//!
//! Some orders of a solvable roster fail. Given Fred/Wilma and Barney/Betty
//! as couples plus Pebbles and Bambam, the order
//! `[Barney, Wilma, Bambam, Betty, Fred, Pebbles]` solves while
//! `[Barney, Pebbles, Bambam, Betty, Fred, Wilma]` leaves Wilma with only
//! Fred to receive from.

use super::error::ExchangeError;
use super::registry::{Availability, ExchangeRegistry};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Receiver → giver mapping from a successful solve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Assignment {
    givers: BTreeMap<String, String>,
}

impl Assignment {
    /// Who gives to `receiver`.
    pub fn giver_for(&self, receiver: &str) -> Option<&str> {
        self.givers.get(receiver).map(String::as_str)
    }

    /// `(receiver, giver)` pairs, ordered by receiver.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.givers.iter().map(|(r, g)| (r.as_str(), g.as_str()))
    }

    pub fn len(&self) -> usize {
        self.givers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.givers.is_empty()
    }

    fn insert(&mut self, receiver: &str, giver: &str) {
        self.givers.insert(receiver.to_string(), giver.to_string());
    }
}

/// Solves one order at a time against a registry.
pub struct Matcher<'a> {
    registry: &'a mut ExchangeRegistry,
}

impl<'a> Matcher<'a> {
    pub fn new(registry: &'a mut ExchangeRegistry) -> Self {
        Self { registry }
    }

    /// Attempt an assignment for this exact order.
    ///
    /// Errors:
    /// - `NoSolutionPossible` if the roster can never be solved
    /// - `UnknownParticipant` / `InvalidOrder` if `order` is not a
    ///   permutation of the roster
    /// - `SolutionNotFound` if this order fails (retryable)
    pub fn solve<S: AsRef<str>>(&mut self, order: &[S]) -> Result<Assignment, ExchangeError> {
        self.registry.validate_solvable()?;
        self.check_order(order)?;
        self.registry.reset_availability();

        let mut assignment = Assignment::default();

        for i in 0..order.len() {
            let receiver = order[i].as_ref();
            let Some(j) = self.next_free_giver(order, i) else {
                debug!(receiver, position = i, "no available giver, order rejected");
                return Err(ExchangeError::SolutionNotFound);
            };

            let giver = order[j].as_ref();
            self.registry.mark_selected(giver);
            assignment.insert(receiver, giver);
        }

        let unmatched = self.registry.unmatched_count();
        if unmatched > 0 {
            debug!(unmatched, "attendees left without a recipient, order rejected");
            return Err(ExchangeError::SolutionNotFound);
        }

        Ok(assignment)
    }

    /// Can `order[candidate]` give to `order[receiver]` right now?
    ///
    /// The candidate must be a different, currently available attendee who
    /// is not the receiver's partner.
    pub fn is_valid_giver<S: AsRef<str>>(
        &self,
        order: &[S],
        receiver: usize,
        candidate: usize,
    ) -> bool {
        if receiver == candidate {
            return false;
        }
        let (Some(receiver), Some(candidate)) = (order.get(receiver), order.get(candidate)) else {
            return false;
        };
        let (receiver, candidate) = (receiver.as_ref(), candidate.as_ref());

        if self.registry.partner_of(receiver) == Some(candidate) {
            return false;
        }
        self.registry.availability(candidate) == Some(Availability::Available)
    }

    /// Scan forward from `i + 1`, then wrap round from the front up to `i`.
    fn next_free_giver<S: AsRef<str>>(&self, order: &[S], i: usize) -> Option<usize> {
        (i + 1..order.len())
            .chain(0..i)
            .find(|&j| self.is_valid_giver(order, i, j))
    }

    fn check_order<S: AsRef<str>>(&self, order: &[S]) -> Result<(), ExchangeError> {
        let mut seen = HashSet::with_capacity(order.len());

        for name in order {
            let name = name.as_ref();
            if !self.registry.contains(name) {
                return Err(ExchangeError::UnknownParticipant(name.to_string()));
            }
            if !seen.insert(name) {
                return Err(ExchangeError::InvalidOrder(format!(
                    "{} appears more than once",
                    name
                )));
            }
        }

        if order.len() != self.registry.participant_count() {
            return Err(ExchangeError::InvalidOrder(format!(
                "expected {} attendees, got {}",
                self.registry.participant_count(),
                order.len()
            )));
        }
        Ok(())
    }
}
