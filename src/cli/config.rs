//! Gift exchange configuration file handling
//!
//! Provides default configuration generation and loading for the CLI.
//! Configuration files are TOML format and live under the user's config
//! directory unless a path is given with `--config`.
//!
//! The roster itself is NOT configuration: it is supplied per run, either
//! interactively or with `--roster`.

use gift_exchange::exchange::DEFAULT_MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default log level
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Gift exchange CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExchangeConfig {
    /// Solver settings
    #[serde(default)]
    pub solver: SolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Solver settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Shuffles tried per draw before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed RNG seed (optional, random if not specified)
    pub seed: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ExchangeConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: ExchangeConfig = toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        Ok(config)
    }

    /// Resolve the configuration for a run
    ///
    /// 1. `--config` flag if provided (must exist)
    /// 2. Default config file if it exists
    /// 3. Built-in defaults
    pub fn resolve(config_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        match config_path {
            Some(path) => Self::load(Path::new(&path)),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Generate default configuration content as a string with comments
    pub fn generate_default_toml() -> String {
        format!(
            r#"# Gift Exchange Configuration

[solver]
# Shuffles tried per draw before giving up (or asking to try again)
max_attempts = {max_attempts}

# Fixed RNG seed for reproducible draws (optional)
# seed = 42

[logging]
# Log level: trace, debug, info, warn, error
# RUST_LOG overrides this when set
level = "{level}"
"#,
            max_attempts = DEFAULT_MAX_ATTEMPTS,
            level = DEFAULT_LOG_LEVEL
        )
    }

    /// Create and save a default configuration file
    pub fn create_default(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        fs::write(config_path, Self::generate_default_toml()).map_err(|e| {
            format!(
                "Failed to write config file '{}': {}",
                config_path.display(),
                e
            )
        })?;

        Ok(())
    }
}

/// Get the default config file path
///
/// `<config_dir>/gift-exchange/config.toml`, e.g.
/// `~/.config/gift-exchange/config.toml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gift-exchange").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ExchangeConfig::default();

        assert_eq!(config.solver.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.solver.seed, None);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_serialized_config_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = ExchangeConfig::default();
        config.solver.seed = Some(42);
        config.solver.max_attempts = 5;
        fs::create_dir_all(config_path.parent().unwrap()).unwrap();
        fs::write(&config_path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = ExchangeConfig::load(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_create_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        ExchangeConfig::create_default(&config_path).unwrap();
        assert!(config_path.exists());

        // Generated file must load back to the built-in defaults
        let config = ExchangeConfig::load(&config_path).unwrap();
        assert_eq!(config, ExchangeConfig::default());
    }

    #[test]
    fn test_generate_default_toml() {
        let toml = ExchangeConfig::generate_default_toml();

        assert!(toml.contains("[solver]"));
        assert!(toml.contains("max_attempts = 100"));
        assert!(toml.contains("# seed = 42"));
        assert!(toml.contains("level = \"warn\""));
    }

    #[test]
    fn test_load_config_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        fs::write(&config_path, "[solver]\nseed = 7\n").unwrap();

        let config = ExchangeConfig::load(&config_path).unwrap();
        assert_eq!(config.solver.seed, Some(7));
        assert_eq!(config.solver.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[solver]\nmax_attempts = \"lots\"\n").unwrap();

        let err = ExchangeConfig::load(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_resolve_explicit_missing_path_fails() {
        let result = ExchangeConfig::resolve(Some("/nonexistent/config.toml".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_path_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("gift-exchange/config.toml"));
        }
    }
}
