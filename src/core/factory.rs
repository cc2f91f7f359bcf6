use crate::app::components::{
    CapuletEngine, CarriganTires, NubbinBattery, OctoprimeTires, SpindlerBattery, WilloughbyEngine,
};
use crate::core::car::Car;
use crate::core::{CarModel, ServiceRequest, TireWear};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::NaiveDate;

/// Builds fully wired cars for each supported model.
///
/// | Model    | Battery  | Engine     | Tires     |
/// |----------|----------|------------|-----------|
/// | Calliope | Nubbin   | Capulet    | Carrigan  |
/// | Glissade | Spindler | Willoughby | Octoprime |
pub struct CarFactory;

impl CarFactory {
    pub fn create(model: CarModel, request: &ServiceRequest) -> Result<Car> {
        request.validate()?;
        tracing::debug!(%model, ?request, "Assembling car");

        match model {
            CarModel::Calliope => Self::create_calliope(
                request.current_date,
                request.last_service_date,
                request.current_mileage,
                request.last_service_mileage,
                request.tire_wear,
            ),
            CarModel::Glissade => Self::create_glissade(
                request.current_date,
                request.last_service_date,
                request.current_mileage,
                request.last_service_mileage,
                request.tire_wear,
            ),
        }
    }

    pub fn create_calliope(
        current_date: NaiveDate,
        last_service_date: NaiveDate,
        current_mileage: u64,
        last_service_mileage: u64,
        tire_wear: TireWear,
    ) -> Result<Car> {
        Ok(Car::new(
            Box::new(NubbinBattery::new(current_date, last_service_date)?),
            Box::new(CapuletEngine::new(current_mileage, last_service_mileage)?),
            Box::new(CarriganTires::new(tire_wear)),
        ))
    }

    pub fn create_glissade(
        current_date: NaiveDate,
        last_service_date: NaiveDate,
        current_mileage: u64,
        last_service_mileage: u64,
        tire_wear: TireWear,
    ) -> Result<Car> {
        Ok(Car::new(
            Box::new(SpindlerBattery::new(current_date, last_service_date)?),
            Box::new(WilloughbyEngine::new(current_mileage, last_service_mileage)?),
            Box::new(OctoprimeTires::new(tire_wear)),
        ))
    }
}
