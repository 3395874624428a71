//! Roster files.
//!
//! A roster lists attendees and, optionally, each one's partner:
//!
//! ```toml
//! [[attendee]]
//! name = "Fred"
//! partner = "Wilma"
//!
//! [[attendee]]
//! name = "Pebbles"
//! ```
//!
//! Partners are registered by the partnership itself and must not be listed
//! again as attendees.

use super::error::ExchangeError;
use super::registry::ExchangeRegistry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub attendee: Vec<RosterEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,
}

impl Roster {
    /// Load a roster from a TOML file
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read roster file '{}': {}", path.display(), e))?;

        let roster = Self::parse(&contents)
            .map_err(|e| format!("Failed to parse roster file '{}': {}", path.display(), e))?;

        Ok(roster)
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Register every entry, stopping at the first registration error.
    pub fn into_registry(self) -> Result<ExchangeRegistry, ExchangeError> {
        let mut registry = ExchangeRegistry::new();

        for entry in self.attendee {
            registry.add_participant(&entry.name)?;
            if let Some(partner) = entry.partner {
                registry.add_partnership(&entry.name, &partner)?;
            }
        }

        Ok(registry)
    }
}
