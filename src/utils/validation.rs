use crate::utils::error::{ExtractError, Result};
use regex::Regex;
use std::sync::OnceLock;

static YEAR_PATTERN: OnceLock<Regex> = OnceLock::new();

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A filter year must be exactly four digits (e.g. 2023).
pub fn validate_year(field_name: &str, year: &str) -> Result<()> {
    let pattern = YEAR_PATTERN.get_or_init(|| Regex::new(r"^\d{4}$").unwrap());
    if !pattern.is_match(year) {
        return Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: year.to_string(),
            reason: "Year must be in YYYY format (e.g. 2023)".to_string(),
        });
    }
    Ok(())
}
