pub mod battery;
pub mod engine;
pub mod tires;

pub use battery::{NubbinBattery, SpindlerBattery};
pub use engine::{CapuletEngine, SternmanEngine, WilloughbyEngine};
pub use tires::{CarriganTires, OctoprimeTires};
