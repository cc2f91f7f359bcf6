pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::components::{
    CapuletEngine, CarriganTires, NubbinBattery, OctoprimeTires, SpindlerBattery, SternmanEngine,
    WilloughbyEngine,
};
pub use crate::config::fleet_config::{FleetConfig, VehicleConfig, VehicleStatus};
pub use crate::core::{car::Car, factory::CarFactory};
pub use crate::domain::model::{CarModel, ServiceReport, ServiceRequest, TireWear};
pub use crate::domain::ports::{Battery, Engine, Serviceable, Tires};
pub use crate::utils::error::{Result, ServiceError};
