use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_ordered<T: PartialOrd + std::fmt::Display>(
    min_field: &str,
    min: T,
    max_field: &str,
    max: T,
) -> Result<()> {
    if min > max {
        return Err(AppError::InvalidConfigValueError {
            field: min_field.to_string(),
            value: min.to_string(),
            reason: format!("must not exceed {} ({})", max_field, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
