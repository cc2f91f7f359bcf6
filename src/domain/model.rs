use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{validate_date_order, validate_mileage_order, validate_wear_ratio, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TIRE_COUNT: usize = 4;

/// Wear ratios for the four tires, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct TireWear([f64; TIRE_COUNT]);

impl TireWear {
    pub fn new(ratios: [f64; TIRE_COUNT]) -> Result<Self> {
        for (index, value) in ratios.iter().enumerate() {
            validate_wear_ratio(index, *value)?;
        }
        Ok(Self(ratios))
    }

    pub fn ratios(&self) -> &[f64; TIRE_COUNT] {
        &self.0
    }

    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(0.0, f64::max)
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl TryFrom<&[f64]> for TireWear {
    type Error = ServiceError;

    fn try_from(values: &[f64]) -> Result<Self> {
        let ratios: [f64; TIRE_COUNT] = values
            .try_into()
            .map_err(|_| ServiceError::InvalidTireCount {
                count: values.len(),
            })?;
        Self::new(ratios)
    }
}

impl TryFrom<Vec<f64>> for TireWear {
    type Error = ServiceError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::try_from(values.as_slice())
    }
}

impl From<TireWear> for Vec<f64> {
    fn from(wear: TireWear) -> Self {
        wear.0.to_vec()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CarModel {
    Calliope,
    Glissade,
}

impl CarModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarModel::Calliope => "calliope",
            CarModel::Glissade => "glissade",
        }
    }
}

impl fmt::Display for CarModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarModel {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calliope" => Ok(CarModel::Calliope),
            "glissade" => Ok(CarModel::Glissade),
            _ => Err(ServiceError::UnknownModel {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for CarModel {
    type Error = ServiceError;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

/// Raw inputs the factory needs to assemble a car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub current_date: NaiveDate,
    pub last_service_date: NaiveDate,
    pub current_mileage: u64,
    pub last_service_mileage: u64,
    pub tire_wear: TireWear,
}

impl Validate for ServiceRequest {
    fn validate(&self) -> Result<()> {
        validate_date_order(self.current_date, self.last_service_date)?;
        validate_mileage_order(self.current_mileage, self.last_service_mileage)
    }
}

/// Which slots of a car are due, and the overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceReport {
    pub battery: bool,
    pub engine: bool,
    pub tires: bool,
    pub needs_service: bool,
}

impl ServiceReport {
    pub fn due_components(&self) -> Vec<&'static str> {
        [
            ("battery", self.battery),
            ("engine", self.engine),
            ("tires", self.tires),
        ]
        .into_iter()
        .filter_map(|(name, due)| due.then_some(name))
        .collect()
    }
}
