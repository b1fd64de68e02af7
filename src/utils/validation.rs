use crate::utils::error::{PoemError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PoemError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("depth", 5, 0, 10).is_ok());
        assert!(validate_range("depth", 0, 0, 10).is_ok());
        assert!(validate_range("depth", 10, 0, 10).is_ok());
        assert!(validate_range("depth", -1, 0, 10).is_err());
        assert!(validate_range("depth", 11, 0, 10).is_err());
    }

    #[test]
    fn test_validate_range_reports_field() {
        match validate_range("depth", 42i64, 0, 10) {
            Err(PoemError::InvalidConfigValue { field, value, .. }) => {
                assert_eq!(field, "depth");
                assert_eq!(value, "42");
            }
            other => panic!("expected InvalidConfigValue, got {:?}", other),
        }
    }
}
