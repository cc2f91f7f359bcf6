use crate::domain::ports::{Engine, Serviceable};
use crate::utils::error::Result;
use crate::utils::validation::validate_mileage_order;

/// Mileage since last service, compared strictly against `interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Odometer {
    current_mileage: u64,
    last_service_mileage: u64,
}

impl Odometer {
    fn new(current_mileage: u64, last_service_mileage: u64) -> Result<Self> {
        validate_mileage_order(current_mileage, last_service_mileage)?;
        Ok(Self {
            current_mileage,
            last_service_mileage,
        })
    }

    fn exceeds(&self, interval: u64) -> bool {
        self.current_mileage - self.last_service_mileage > interval
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapuletEngine {
    odometer: Odometer,
}

impl CapuletEngine {
    pub const SERVICE_INTERVAL_MILES: u64 = 30_000;

    pub fn new(current_mileage: u64, last_service_mileage: u64) -> Result<Self> {
        Ok(Self {
            odometer: Odometer::new(current_mileage, last_service_mileage)?,
        })
    }
}

impl Serviceable for CapuletEngine {
    fn needs_service(&self) -> bool {
        self.odometer.exceeds(Self::SERVICE_INTERVAL_MILES)
    }
}

impl Engine for CapuletEngine {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WilloughbyEngine {
    odometer: Odometer,
}

impl WilloughbyEngine {
    pub const SERVICE_INTERVAL_MILES: u64 = 60_000;

    pub fn new(current_mileage: u64, last_service_mileage: u64) -> Result<Self> {
        Ok(Self {
            odometer: Odometer::new(current_mileage, last_service_mileage)?,
        })
    }
}

impl Serviceable for WilloughbyEngine {
    fn needs_service(&self) -> bool {
        self.odometer.exceeds(Self::SERVICE_INTERVAL_MILES)
    }
}

impl Engine for WilloughbyEngine {}

/// Ignores mileage and follows the dashboard warning light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SternmanEngine {
    warning_light_on: bool,
}

impl SternmanEngine {
    pub fn new(warning_light_on: bool) -> Self {
        Self { warning_light_on }
    }
}

impl Serviceable for SternmanEngine {
    fn needs_service(&self) -> bool {
        self.warning_light_on
    }
}

impl Engine for SternmanEngine {}
