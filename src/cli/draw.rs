use super::SolverSettings;
use gift_exchange::exchange::{self, OutputFormat, RetryPolicy, Roster};
use std::path::Path;
use tracing::info;

/// Draw an exchange for a roster file and print it
///
/// Fails (non-zero exit) when the roster cannot be registered, can never be
/// solved, or no shuffle solved within the attempt budget.
pub fn execute(
    roster_path: String,
    settings: SolverSettings,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let roster = Roster::load(Path::new(&roster_path))?;
    let mut registry = roster.into_registry()?;

    info!(
        attendees = registry.participant_count(),
        partnerships = registry.partnership_count(),
        "roster loaded"
    );

    let mut rng = settings.rng();
    let draw = match exchange::draw(
        &mut registry,
        &mut rng,
        RetryPolicy::new(settings.max_attempts),
    ) {
        Ok(draw) => draw,
        Err(e) if e.is_retryable() => {
            return Err(format!("{} (gave up after {} attempts)", e, settings.max_attempts).into())
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", exchange::render(&draw.assignment, format)?);

    Ok(())
}
