pub mod car;
pub mod factory;

pub use crate::domain::model::{CarModel, ServiceReport, ServiceRequest, TireWear};
pub use crate::domain::ports::{Battery, Engine, Serviceable, Tires};
pub use crate::utils::error::Result;
