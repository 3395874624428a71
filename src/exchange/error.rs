//! Errors raised while registering attendees and drawing an exchange.

use std::fmt;

/// Which side of a partnership already had a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerRole {
    /// The attendee the partnership was requested for.
    Attendee,
    /// The partner being added.
    Partner,
}

impl PartnerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerRole::Attendee => "attendee",
            PartnerRole::Partner => "partner",
        }
    }
}

impl fmt::Display for PartnerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gift exchange errors
///
/// Only [`ExchangeError::SolutionNotFound`] is retryable: it means the
/// particular order that was tried could not be matched, and a fresh shuffle
/// may succeed. Everything else needs different input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    #[error("Duplicate attendee: {0}")]
    DuplicateParticipant(String),

    #[error("Duplicate partner: {role} {name} already has a partner")]
    DuplicatePartner { role: PartnerRole, name: String },

    #[error("No solution possible: {0}")]
    NoSolutionPossible(String),

    #[error("No solution found for this order")]
    SolutionNotFound,

    #[error("Unknown attendee in order: {0}")]
    UnknownParticipant(String),

    #[error("Invalid order: {0}")]
    InvalidOrder(String),
}

impl ExchangeError {
    /// Whether a reshuffle and another solve attempt could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ExchangeError::SolutionNotFound)
    }
}
