//! Attendee registry: who is taking part, who is partnered with whom.
//!
//! Attendees are kept in registration order. That order is the default
//! traversal order; the matcher normally works on a shuffled copy of it.
//!
//! Partnerships are a symmetric exclusion relation. Both directions are
//! written by a single `link` call so they can never disagree.

use super::error::{ExchangeError, PartnerRole};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Reason reported when there are fewer than two attendees.
pub const NOT_ENOUGH_ATTENDEES: &str = "Not enough attendees for a solution!";

/// Reason reported when the only non-partnered attendee (if any) cannot
/// break up the single partnership.
pub const NOT_ENOUGH_UNPARTNERED: &str = "Not enough unpartnered attendees for a solution!";

/// Per-attendee state during a solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Not yet chosen as anyone's giver.
    Available,
    /// Already chosen as a giver in the current attempt.
    Selected,
}

#[derive(Debug, Clone)]
struct Attendee {
    name: String,
    availability: Availability,
}

/// Symmetric partner relation.
#[derive(Debug, Clone, Default)]
pub struct Partnerships {
    partner: HashMap<String, String>,
}

impl Partnerships {
    /// Record `a` and `b` as partners of each other.
    fn link(&mut self, a: &str, b: &str) {
        self.partner.insert(a.to_string(), b.to_string());
        self.partner.insert(b.to_string(), a.to_string());
    }

    /// The registered partner of `name`, if any.
    pub fn partner_of(&self, name: &str) -> Option<&str> {
        self.partner.get(name).map(String::as_str)
    }

    /// Number of partnerships (each pair counted once).
    pub fn len(&self) -> usize {
        self.partner.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.partner.is_empty()
    }
}

/// Registry of attendees and partnerships.
///
/// Registration happens once up front; after that only availability changes,
/// and it is reset at the start of every solve attempt.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRegistry {
    attendees: Vec<Attendee>,
    index: HashMap<String, usize>,
    partnerships: Partnerships,
}

impl ExchangeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an attendee.
    ///
    /// Fails with [`ExchangeError::DuplicateParticipant`] if the name is
    /// already registered.
    pub fn add_participant(&mut self, name: &str) -> Result<(), ExchangeError> {
        if self.index.contains_key(name) {
            return Err(ExchangeError::DuplicateParticipant(name.to_string()));
        }

        self.index.insert(name.to_string(), self.attendees.len());
        self.attendees.push(Attendee {
            name: name.to_string(),
            availability: Availability::Available,
        });
        Ok(())
    }

    /// Register `partner` and record it as the partner of `attendee`.
    ///
    /// `attendee` is not registered here; callers add it with
    /// [`add_participant`](Self::add_participant) first. All checks run
    /// before anything is written, so a failed call leaves the registry as
    /// it was.
    pub fn add_partnership(&mut self, attendee: &str, partner: &str) -> Result<(), ExchangeError> {
        if self.contains(partner) {
            return Err(ExchangeError::DuplicateParticipant(partner.to_string()));
        }
        if self.partnerships.partner_of(attendee).is_some() {
            return Err(ExchangeError::DuplicatePartner {
                role: PartnerRole::Attendee,
                name: attendee.to_string(),
            });
        }
        if attendee == partner || self.partnerships.partner_of(partner).is_some() {
            return Err(ExchangeError::DuplicatePartner {
                role: PartnerRole::Partner,
                name: partner.to_string(),
            });
        }

        self.add_participant(partner)?;
        self.partnerships.link(attendee, partner);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Attendee names in registration order.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.attendees.iter().map(|a| a.name.as_str())
    }

    pub fn partner_of(&self, name: &str) -> Option<&str> {
        self.partnerships.partner_of(name)
    }

    pub fn participant_count(&self) -> usize {
        self.attendees.len()
    }

    pub fn partnership_count(&self) -> usize {
        self.partnerships.len()
    }

    /// Attendees not (yet) chosen as a giver.
    pub fn unmatched_count(&self) -> usize {
        self.attendees
            .iter()
            .filter(|a| a.availability == Availability::Available)
            .count()
    }

    /// Mark every attendee available again.
    pub fn reset_availability(&mut self) {
        for attendee in &mut self.attendees {
            attendee.availability = Availability::Available;
        }
    }

    /// Availability of a registered attendee.
    pub fn availability(&self, name: &str) -> Option<Availability> {
        self.index
            .get(name)
            .map(|&i| self.attendees[i].availability)
    }

    pub(crate) fn mark_selected(&mut self, name: &str) {
        if let Some(&i) = self.index.get(name) {
            self.attendees[i].availability = Availability::Selected;
        }
    }

    /// Reject rosters that cannot be solved under any order.
    ///
    /// These are the small cases where nobody outside the single partnership
    /// can break it up: fewer than two attendees, a lone couple, or a couple
    /// plus one other attendee.
    pub fn validate_solvable(&self) -> Result<(), ExchangeError> {
        let attendees = self.participant_count();
        let partnerships = self.partnership_count();

        if attendees < 2 {
            return Err(ExchangeError::NoSolutionPossible(
                NOT_ENOUGH_ATTENDEES.to_string(),
            ));
        }
        if (attendees == 2 || attendees == 3) && partnerships == 1 {
            return Err(ExchangeError::NoSolutionPossible(
                NOT_ENOUGH_UNPARTNERED.to_string(),
            ));
        }
        Ok(())
    }

    /// Every attendee exactly once, uniformly shuffled.
    pub fn shuffled_order<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let mut order: Vec<String> = self.participants().map(str::to_string).collect();
        order.shuffle(rng);
        order
    }
}
