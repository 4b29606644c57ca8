use crate::core::view_model::ActionSettings;
use crate::domain::model::{Locale, RandomRange};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application settings. Every section and field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub number: NumberConfig,
    pub random: RandomConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberConfig {
    pub initial: i32,
    /// When false the number starts absent and `initial` is ignored.
    pub publish_initial: bool,
    pub increment: i32,
    pub factor: i32,
}

impl Default for NumberConfig {
    fn default() -> Self {
        let actions = ActionSettings::default();
        Self {
            initial: 0,
            publish_initial: true,
            increment: actions.increment,
            factor: actions.factor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    pub min: i32,
    pub max: i32,
    pub seed: Option<u64>,
    pub roll_on_start: bool,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            min: RandomRange::DEFAULT_MIN,
            max: RandomRange::DEFAULT_MAX,
            seed: None,
            roll_on_start: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub locale: Locale,
}

impl AppConfig {
    /// Load the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: AppConfig = toml::from_str(&processed_content)?;
        tracing::debug!(?config, "configuration parsed");
        Ok(config)
    }

    /// Replace `${VAR}` references with environment values. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn random_range(&self) -> Result<RandomRange> {
        RandomRange::new(self.random.min, self.random.max)
    }

    pub fn initial_number(&self) -> Option<i32> {
        self.number.publish_initial.then_some(self.number.initial)
    }

    pub fn action_settings(&self) -> ActionSettings {
        ActionSettings {
            increment: self.number.increment,
            factor: self.number.factor,
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.random_range()?;
        Ok(())
    }
}
