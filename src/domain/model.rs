use crate::utils::validation::validate_ordered;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the view shows. Only strings: formatting happens before this is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayState {
    pub number_to_display: String,
    pub sentence: String,
}

impl DisplayState {
    pub fn new(number_to_display: impl Into<String>, sentence: impl Into<String>) -> Self {
        Self {
            number_to_display: number_to_display.into(),
            sentence: sentence.into(),
        }
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.number_to_display, self.sentence)
    }
}

/// Inclusive range random values are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomRange {
    min: i32,
    max: i32,
}

impl RandomRange {
    pub const DEFAULT_MIN: i32 = 0;
    pub const DEFAULT_MAX: i32 = 100;

    pub fn new(min: i32, max: i32) -> crate::utils::error::Result<Self> {
        validate_ordered("random.min", min, "random.max", max)?;
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for RandomRange {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(value: i32) -> Self {
        if value % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn parity_label(self, parity: Parity) -> &'static str {
        match (self, parity) {
            (Locale::En, Parity::Even) => "even",
            (Locale::En, Parity::Odd) => "odd",
            (Locale::Fr, Parity::Even) => "pair",
            (Locale::Fr, Parity::Odd) => "impair",
        }
    }

    pub fn sentence(self, result: i32, parity: Parity, random: i32) -> String {
        let label = self.parity_label(parity);
        match self {
            Locale::En => format!(
                "The number {} is {}, the random number is {}",
                result, label, random
            ),
            Locale::Fr => format!(
                "Le nombre {} est {}, le nombre aléatoire est {}",
                result, label, random
            ),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = crate::utils::error::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(crate::utils::error::AppError::InvalidConfigValueError {
                field: "display.locale".to_string(),
                value: other.to_string(),
                reason: "Supported locales: en, fr".to_string(),
            }),
        }
    }
}
