//! Gift exchange: registry, matcher and the retrying draw.
//!
//! - Registry of attendees and partner exclusions, with solvability checks
//! - Greedy single-pass matcher over one order of attendees
//! - Draw loop that reshuffles until an order solves
//! - Roster files and console output

pub mod display;
pub mod draw;
pub mod error;
pub mod matcher;
pub mod registry;
pub mod roster;

#[cfg(test)]
mod proptests;

pub use display::{format_assignment, render, OutputFormat};
pub use draw::{draw, Draw, RetryPolicy, DEFAULT_MAX_ATTEMPTS};
pub use error::{ExchangeError, PartnerRole};
pub use matcher::{Assignment, Matcher};
pub use registry::{Availability, ExchangeRegistry};
pub use roster::{Roster, RosterEntry};
