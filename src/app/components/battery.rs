use crate::domain::ports::{Battery, Serviceable};
use crate::utils::error::Result;
use crate::utils::validation::validate_date_order;
use chrono::{Months, NaiveDate};

/// `last_service + years`, clamped to Feb 28 when the anniversary of a
/// Feb 29 falls in a common year. `None` if the date is out of range.
fn service_threshold(last_service: NaiveDate, years: u32) -> Option<NaiveDate> {
    last_service.checked_add_months(Months::new(years * 12))
}

fn is_past_threshold(current: NaiveDate, last_service: NaiveDate, years: u32) -> bool {
    let due = service_threshold(last_service, years).is_some_and(|threshold| threshold < current);
    tracing::trace!(%current, %last_service, years, due, "battery check");
    due
}

/// Serviced every 4 years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NubbinBattery {
    current_date: NaiveDate,
    last_service_date: NaiveDate,
}

impl NubbinBattery {
    pub const SERVICE_INTERVAL_YEARS: u32 = 4;

    pub fn new(current_date: NaiveDate, last_service_date: NaiveDate) -> Result<Self> {
        validate_date_order(current_date, last_service_date)?;
        Ok(Self {
            current_date,
            last_service_date,
        })
    }
}

impl Serviceable for NubbinBattery {
    fn needs_service(&self) -> bool {
        is_past_threshold(
            self.current_date,
            self.last_service_date,
            Self::SERVICE_INTERVAL_YEARS,
        )
    }
}

impl Battery for NubbinBattery {}

/// Serviced every 3 years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpindlerBattery {
    current_date: NaiveDate,
    last_service_date: NaiveDate,
}

impl SpindlerBattery {
    pub const SERVICE_INTERVAL_YEARS: u32 = 3;

    pub fn new(current_date: NaiveDate, last_service_date: NaiveDate) -> Result<Self> {
        validate_date_order(current_date, last_service_date)?;
        Ok(Self {
            current_date,
            last_service_date,
        })
    }
}

impl Serviceable for SpindlerBattery {
    fn needs_service(&self) -> bool {
        is_past_threshold(
            self.current_date,
            self.last_service_date,
            Self::SERVICE_INTERVAL_YEARS,
        )
    }
}

impl Battery for SpindlerBattery {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ServiceError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_nubbin_should_be_serviced() {
        let battery = NubbinBattery::new(date(2024, 3, 1), date(2019, 3, 1)).unwrap();
        assert!(battery.needs_service());
    }

    #[test]
    fn test_nubbin_should_not_be_serviced() {
        let battery = NubbinBattery::new(date(2024, 3, 1), date(2021, 3, 1)).unwrap();
        assert!(!battery.needs_service());
    }

    #[test]
    fn test_nubbin_threshold_is_strict() {
        let on_threshold = NubbinBattery::new(date(2024, 3, 1), date(2020, 3, 1)).unwrap();
        assert!(!on_threshold.needs_service());

        let day_after = NubbinBattery::new(date(2024, 3, 2), date(2020, 3, 1)).unwrap();
        assert!(day_after.needs_service());
    }

    #[test]
    fn test_spindler_should_be_serviced() {
        let battery = SpindlerBattery::new(date(2024, 3, 1), date(2020, 3, 1)).unwrap();
        assert!(battery.needs_service());
    }

    #[test]
    fn test_spindler_should_not_be_serviced() {
        let battery = SpindlerBattery::new(date(2024, 3, 1), date(2022, 3, 1)).unwrap();
        assert!(!battery.needs_service());
    }

    #[test]
    fn test_spindler_threshold_is_strict() {
        let on_threshold = SpindlerBattery::new(date(2023, 6, 1), date(2020, 6, 1)).unwrap();
        assert!(!on_threshold.needs_service());

        let day_after = SpindlerBattery::new(date(2023, 6, 2), date(2020, 6, 1)).unwrap();
        assert!(day_after.needs_service());
    }

    #[test]
    fn test_intervals_differ_between_variants() {
        // 3.5 years since service: due for Spindler only
        let (current, last) = (date(2023, 12, 1), date(2020, 6, 1));
        assert!(SpindlerBattery::new(current, last).unwrap().needs_service());
        assert!(!NubbinBattery::new(current, last).unwrap().needs_service());
    }

    #[test]
    fn test_leap_day_anniversary_clamps_to_feb_28() {
        let last = date(2020, 2, 29);
        assert_eq!(service_threshold(last, 3), Some(date(2023, 2, 28)));
        assert!(!SpindlerBattery::new(date(2023, 2, 28), last).unwrap().needs_service());
        assert!(SpindlerBattery::new(date(2023, 3, 1), last).unwrap().needs_service());
        assert_eq!(service_threshold(last, 4), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_unrepresentable_threshold_is_not_due() {
        let battery = NubbinBattery::new(NaiveDate::MAX, NaiveDate::MAX).unwrap();
        assert!(!battery.needs_service());
    }

    #[test]
    fn test_rejects_reversed_dates() {
        assert!(matches!(
            NubbinBattery::new(date(2020, 1, 1), date(2021, 1, 1)),
            Err(ServiceError::InvalidDateOrder { .. })
        ));
        assert!(SpindlerBattery::new(date(2020, 1, 1), date(2021, 1, 1)).is_err());
    }
}
