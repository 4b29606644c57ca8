use crate::config::toml_config::AppConfig;
use crate::domain::model::Locale;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "number-mediator")]
#[command(about = "Combine a user-driven number with a random number and show the result")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the display locale (en, fr)
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Seed the random generator for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run comma-separated commands (e.g. "add,double,reroll") instead of an interactive session
    #[arg(long)]
    pub script: Option<String>,

    /// Render display states as JSON lines
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Load the file configuration (or defaults), apply command-line overrides and validate.
    pub fn load_app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };

        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(locale) = self.locale {
            config.display.locale = locale;
            tracing::info!("🔧 Locale overridden to: {:?}", locale);
        }
        if let Some(seed) = self.seed {
            config.random.seed = Some(seed);
            tracing::info!("🔧 Random seed overridden to: {}", seed);
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(script) = &self.script {
            validate_non_empty_string("script", script)?;
        }
        Ok(())
    }
}
