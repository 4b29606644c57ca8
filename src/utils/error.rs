use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown command: '{input}'")]
    UnknownCommand { input: String },
}

impl AppError {
    /// Short hint shown next to the error in the console.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::IoError(_) => "Check that the file exists and is readable",
            AppError::ConfigParseError(_) => "Check the TOML syntax of the configuration file",
            AppError::SerializationError(_) => "Retry without --json",
            AppError::PatternError(_) => "Report this as a bug",
            AppError::InvalidConfigValueError { .. } => "Fix the offending configuration value",
            AppError::UnknownCommand { .. } => "Type 'help' to list the available commands",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_message() {
        let err = AppError::UnknownCommand {
            input: "triple".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown command: 'triple'");
        assert!(err.recovery_suggestion().contains("help"));
    }

    #[test]
    fn test_invalid_config_value_message() {
        let err = AppError::InvalidConfigValueError {
            field: "random.min".to_string(),
            value: "10".to_string(),
            reason: "must not exceed random.max (5)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value '10' for 'random.min': must not exceed random.max (5)"
        );
    }
}
