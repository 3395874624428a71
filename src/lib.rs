//! Gift Exchange - partner-aware secret gift draws
//!
//! Every attendee receives a gift from exactly one other attendee, and
//! nobody gives to their own registered partner.
//!
//! Key pieces:
//! - Registry of attendees and partnerships with solvability checks
//! - Greedy single-pass matcher over a shuffled order (no backtracking)
//! - Draw loop that reshuffles until an order solves

pub mod exchange;
