//! Shuffle-and-retry driver around the matcher.
//!
//! The matcher is order dependent, so a failed order is not evidence that
//! the roster is unsolvable. `draw` keeps reshuffling until an order
//! solves, a non-retryable error comes back, or the attempt budget runs out.

use super::error::ExchangeError;
use super::matcher::{Assignment, Matcher};
use super::registry::ExchangeRegistry;
use rand::Rng;
use tracing::{debug, info, warn};

/// Default number of shuffles tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// How many orders to try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts per draw, at least one.
    pub max_attempts: u32,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

/// A solved draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub assignment: Assignment,
    /// Attempt on which the order solved (1-based).
    pub attempts: u32,
}

/// Draw an assignment, reshuffling on retryable failures.
///
/// `NoSolutionPossible` is checked once up front and returned immediately.
/// When every attempt fails, the last `SolutionNotFound` is returned.
pub fn draw<R: Rng + ?Sized>(
    registry: &mut ExchangeRegistry,
    rng: &mut R,
    policy: RetryPolicy,
) -> Result<Draw, ExchangeError> {
    registry.validate_solvable()?;

    let mut attempt = 0;

    loop {
        attempt += 1;
        let order = registry.shuffled_order(rng);

        match Matcher::new(registry).solve(&order) {
            Ok(assignment) => {
                info!(attempts = attempt, attendees = assignment.len(), "exchange solved");
                return Ok(Draw {
                    assignment,
                    attempts: attempt,
                });
            }
            Err(err) => {
                if !err.is_retryable() {
                    return Err(err);
                }
                if attempt >= policy.max_attempts {
                    warn!(
                        attempts = attempt,
                        "no order solved within the attempt budget"
                    );
                    return Err(err);
                }
                debug!(attempt, ?order, "order did not solve, reshuffling");
            }
        }
    }
}
