use super::SolverSettings;
use gift_exchange::exchange::{self, ExchangeRegistry, RetryPolicy};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Register attendees at the prompt, then draw
///
/// ## Registration
///
/// Each attendee is asked for in turn, followed by their partner (blank if
/// none). A blank attendee name (or end of input) finishes registration.
/// Registration errors such as a duplicate name are reported and the loop
/// carries on.
///
/// ## Drawing
///
/// If no shuffle solves within the attempt budget the user is asked whether
/// to try again. Declining aborts with an error (non-zero exit). A roster
/// that can never be solved fails straight away.
pub fn execute(settings: SolverSettings) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut rng = settings.rng();

    run(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut rng,
        RetryPolicy::new(settings.max_attempts),
    )
}

pub fn run<I, O, R>(
    input: &mut I,
    output: &mut O,
    rng: &mut R,
    policy: RetryPolicy,
) -> Result<(), Box<dyn std::error::Error>>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    writeln!(output, "Enter attendees and their partners")?;
    let mut registry = read_registry(input, output)?;

    writeln!(output)?;
    writeln!(output, "All attendees entered, working out exchanges")?;
    writeln!(output)?;

    loop {
        match exchange::draw(&mut registry, rng, policy) {
            Ok(draw) => {
                writeln!(output, "{}", exchange::format_assignment(&draw.assignment))?;
                return Ok(());
            }
            Err(e) if e.is_retryable() => {
                writeln!(
                    output,
                    "No solution found after {} attempts.",
                    policy.max_attempts
                )?;
                let answer = prompt(input, output, "Try again? [y/N]: ")?;
                if !matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") {
                    return Err("Aborted: no solution found".into());
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Prompt loop for attendees and partners
pub fn read_registry<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
) -> io::Result<ExchangeRegistry> {
    let mut registry = ExchangeRegistry::new();

    loop {
        writeln!(output)?;
        let name = prompt(input, output, "Attendee (or blank to finish): ")?;
        if name.is_empty() {
            break;
        }

        if let Err(e) = registry.add_participant(&name) {
            writeln!(output, "  {}", e)?;
            continue;
        }

        let partner = prompt(input, output, "Attendee's partner (blank if none): ")?;
        if !partner.is_empty() {
            if let Err(e) = registry.add_partnership(&name, &partner) {
                writeln!(output, "  {}", e)?;
            }
        }
    }

    Ok(registry)
}

// Empty string on end of input
fn prompt<I: BufRead, O: Write>(input: &mut I, output: &mut O, message: &str) -> io::Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
