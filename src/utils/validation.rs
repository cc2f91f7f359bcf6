use crate::utils::error::{Result, ServiceError};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_date_order(current: NaiveDate, last_service: NaiveDate) -> Result<()> {
    if current < last_service {
        return Err(ServiceError::InvalidDateOrder {
            current,
            last_service,
        });
    }
    Ok(())
}

pub fn validate_mileage_order(current: u64, last_service: u64) -> Result<()> {
    if current < last_service {
        return Err(ServiceError::InvalidMileageOrder {
            current,
            last_service,
        });
    }
    Ok(())
}

/// NaN fails the range check as well.
pub fn validate_wear_ratio(index: usize, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ServiceError::InvalidWearRatio { index, value });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_date_order() {
        assert!(validate_date_order(date(2023, 1, 1), date(2020, 6, 1)).is_ok());
        assert!(validate_date_order(date(2023, 1, 1), date(2023, 1, 1)).is_ok());
        assert!(matches!(
            validate_date_order(date(2020, 1, 1), date(2023, 1, 1)),
            Err(ServiceError::InvalidDateOrder { .. })
        ));
    }

    #[test]
    fn test_validate_mileage_order() {
        assert!(validate_mileage_order(40_000, 8_000).is_ok());
        assert!(validate_mileage_order(0, 0).is_ok());
        assert!(validate_mileage_order(8_000, 40_000).is_err());
    }

    #[test]
    fn test_validate_wear_ratio() {
        assert!(validate_wear_ratio(0, 0.0).is_ok());
        assert!(validate_wear_ratio(0, 1.0).is_ok());
        assert!(validate_wear_ratio(1, 1.01).is_err());
        assert!(validate_wear_ratio(2, -0.1).is_err());
        assert!(validate_wear_ratio(3, f64::NAN).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("vehicles.name", "van-7").is_ok());
        assert!(validate_non_empty_string("vehicles.name", "   ").is_err());
    }
}
