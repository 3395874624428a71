use super::config::{default_config_path, ExchangeConfig};
use std::path::PathBuf;

/// Write a commented default config file
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn execute(path: Option<String>, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = match path {
        Some(path) => PathBuf::from(path),
        None => default_config_path().ok_or("Could not determine the user config directory")?,
    };

    if config_path.exists() && !force {
        return Err(format!(
            "Config file '{}' already exists (use --force to overwrite)",
            config_path.display()
        )
        .into());
    }

    ExchangeConfig::create_default(&config_path)?;
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_config_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        execute(Some(config_path.to_string_lossy().to_string()), false).unwrap();

        let config = ExchangeConfig::load(&config_path).unwrap();
        assert_eq!(config, ExchangeConfig::default());
    }

    #[test]
    fn test_init_config_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[solver]\nmax_attempts = 3\n").unwrap();
        let path = config_path.to_string_lossy().to_string();

        assert!(execute(Some(path.clone()), false).is_err());

        execute(Some(path), true).unwrap();
        let config = ExchangeConfig::load(&config_path).unwrap();
        assert_eq!(config.solver.max_attempts, 100);
    }
}
