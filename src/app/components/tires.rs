use crate::domain::model::TireWear;
use crate::domain::ports::{Serviceable, Tires};

/// Due as soon as any single tire reaches the wear limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarriganTires {
    tire_wear: TireWear,
}

impl CarriganTires {
    pub const MAX_WEAR: f64 = 0.9;

    pub fn new(tire_wear: TireWear) -> Self {
        Self { tire_wear }
    }
}

impl Serviceable for CarriganTires {
    fn needs_service(&self) -> bool {
        self.tire_wear.max() >= Self::MAX_WEAR
    }
}

impl Tires for CarriganTires {}

/// Due once the combined wear of all four tires reaches the limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctoprimeTires {
    tire_wear: TireWear,
}

impl OctoprimeTires {
    pub const MAX_TOTAL_WEAR: f64 = 3.0;

    pub fn new(tire_wear: TireWear) -> Self {
        Self { tire_wear }
    }
}

impl Serviceable for OctoprimeTires {
    fn needs_service(&self) -> bool {
        self.tire_wear.sum() >= Self::MAX_TOTAL_WEAR
    }
}

impl Tires for OctoprimeTires {}
