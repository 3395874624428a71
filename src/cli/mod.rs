use clap::{Parser, Subcommand};
use gift_exchange::exchange::OutputFormat;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod config;
pub mod draw;
pub mod init_config;
pub mod interactive;
pub mod logging;
pub mod version;

use config::ExchangeConfig;

#[derive(Parser)]
#[command(name = "gift-exchange")]
#[command(author = "Gift Exchange Project")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Draw a gift exchange where nobody gives to their own partner", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enter attendees and partners at the prompt, then draw
    Interactive {
        /// Path to config file (default: ~/.config/gift-exchange/config.toml if present)
        #[arg(long)]
        config: Option<String>,

        /// Fixed RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Shuffles tried before asking whether to try again
        #[arg(long)]
        max_attempts: Option<u32>,
    },

    /// Draw an exchange for the attendees in a roster file
    Draw {
        /// Path to the TOML roster file
        #[arg(long)]
        roster: String,

        /// Path to config file (default: ~/.config/gift-exchange/config.toml if present)
        #[arg(long)]
        config: Option<String>,

        /// Fixed RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Shuffles tried before giving up
        #[arg(long)]
        max_attempts: Option<u32>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write a default config file
    InitConfig {
        /// Where to write it (default: ~/.config/gift-exchange/config.toml)
        #[arg(long)]
        path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display version information
    Version,
}

/// Solver settings after applying CLI overrides to the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverSettings {
    pub max_attempts: u32,
    pub seed: Option<u64>,
}

impl SolverSettings {
    pub fn from_config(
        config: &ExchangeConfig,
        seed: Option<u64>,
        max_attempts: Option<u32>,
    ) -> Self {
        Self {
            max_attempts: max_attempts.unwrap_or(config.solver.max_attempts),
            seed: seed.or(config.solver.seed),
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Interactive {
            config,
            seed,
            max_attempts,
        } => {
            let config = ExchangeConfig::resolve(config)?;
            logging::init(&config.logging.level);
            interactive::execute(SolverSettings::from_config(&config, seed, max_attempts))
        }
        Commands::Draw {
            roster,
            config,
            seed,
            max_attempts,
            format,
        } => {
            let config = ExchangeConfig::resolve(config)?;
            logging::init(&config.logging.level);
            draw::execute(
                roster,
                SolverSettings::from_config(&config, seed, max_attempts),
                format,
            )
        }
        Commands::InitConfig { path, force } => init_config::execute(path, force),
        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}
