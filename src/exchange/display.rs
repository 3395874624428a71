//! Console output for a solved exchange.

use super::matcher::Assignment;

/// Output format for a solved assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `receiver <= giver` line per attendee
    #[default]
    Text,
    /// A JSON object mapping receiver to giver
    Json,
}

/// One line per receiver, `"receiver <= giver"`, ordered by receiver.
pub fn format_assignment(assignment: &Assignment) -> String {
    assignment
        .iter()
        .map(|(receiver, giver)| format!("{} <= {}", receiver, giver))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render an assignment in the requested format.
pub fn render(assignment: &Assignment, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(format_assignment(assignment)),
        OutputFormat::Json => serde_json::to_string_pretty(assignment),
    }
}
