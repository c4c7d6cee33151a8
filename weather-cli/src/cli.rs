use anyhow::Context;
use clap::{Parser, Subcommand};
use weather_lookup_core::{Config, SearchOutcome, WeatherLookup};

use crate::{render, session};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-lookup", version, about = "Look up current weather by city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive session (default).
    Interactive,

    /// Look up one or more cities in order and print the results table.
    Lookup {
        /// City names, e.g. "London" "New York".
        #[arg(required = true)]
        cities: Vec<String>,

        /// Print the records as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show the config file location and the effective settings.
    Config {
        /// Write the defaults to the config file if it does not exist yet.
        #[arg(long)]
        init: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Interactive => {
                let config = Config::load()?;
                session::run(WeatherLookup::from_config(&config)).await
            }
            Command::Lookup { cities, json } => {
                let config = Config::load()?;
                let mut lookup = WeatherLookup::from_config(&config);

                for city in cities {
                    lookup.set_input(city.as_str());
                    let outcome = lookup.search().await;
                    if let SearchOutcome::Failed(message) = &outcome {
                        tracing::warn!(city = %city, error = %message, "lookup skipped city");
                    }
                    tracing::debug!(?outcome, "search finished");
                }

                if json {
                    let out = serde_json::to_string_pretty(lookup.records())
                        .context("Failed to serialize records to JSON")?;
                    println!("{out}");
                } else {
                    print!("{}", render::table(&lookup.view(chrono::Utc::now())));
                }
                Ok(())
            }
            Command::Config { init } => {
                let path = Config::config_file_path()?;
                if init && !path.exists() {
                    Config::default().save()?;
                    println!("Wrote default configuration.");
                }

                let config = Config::load()?;
                println!("Config file:  {}", path.display());
                println!("Endpoint:     {}", config.endpoint);
                println!("Highlight ms: {}", config.highlight_ms);
                Ok(())
            }
        }
    }
}
