//! Shared checks for name-like fields.

use catalogue_core::error::AppError;
use catalogue_entity::MAX_NAME_LENGTH;

/// Trim surrounding whitespace, then reject blank or over-long names.
pub(crate) fn checked(field: &str, value: String) -> Result<String, AppError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(AppError::validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "{field} cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked() {
        assert_eq!(checked("Name", "Games".to_string()).unwrap(), "Games");
        assert_eq!(checked("Name", "  Games \t".to_string()).unwrap(), "Games");
        assert!(checked("Name", "   ".to_string()).is_err());
        assert!(checked("Name", "x".repeat(81)).is_err());
        assert!(checked("Name", "é".repeat(80)).is_ok());
    }
}
