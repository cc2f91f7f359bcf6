use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Current date {current} precedes last service date {last_service}")]
    InvalidDateOrder {
        current: NaiveDate,
        last_service: NaiveDate,
    },

    #[error("Current mileage {current} is below last service mileage {last_service}")]
    InvalidMileageOrder { current: u64, last_service: u64 },

    #[error("Tire wear ratio {value} at position {index} is outside [0, 1]")]
    InvalidWearRatio { index: usize, value: f64 },

    #[error("Expected wear ratios for 4 tires, got {count}")]
    InvalidTireCount { count: usize },

    #[error("Unknown car model: {name}")]
    UnknownModel { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ServiceError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ServiceError::InvalidDateOrder { .. } => {
                "Check that last_service_date is not later than current_date"
            }
            ServiceError::InvalidMileageOrder { .. } => {
                "Check that last_service_mileage does not exceed current_mileage"
            }
            ServiceError::InvalidWearRatio { .. } | ServiceError::InvalidTireCount { .. } => {
                "Provide exactly four tire wear ratios between 0.0 and 1.0"
            }
            ServiceError::UnknownModel { .. } => "Supported models are: calliope, glissade",
            ServiceError::IoError(_) => "Make sure the fleet file exists and is readable",
            ServiceError::TomlError(_) => "Make sure the fleet file is valid TOML",
            ServiceError::ConfigError { .. } | ServiceError::InvalidConfigValueError { .. } => {
                "Review the fleet configuration values"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
