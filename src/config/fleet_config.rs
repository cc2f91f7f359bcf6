use crate::core::car::Car;
use crate::core::factory::CarFactory;
use crate::core::{CarModel, ServiceReport, ServiceRequest, Serviceable, TireWear};
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    #[serde(default)]
    pub fleet: FleetInfo,
    #[serde(default)]
    pub vehicles: Vec<VehicleConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetInfo {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub name: String,
    pub model: CarModel,
    /// 未指定時使用今天的日期
    pub current_date: Option<NaiveDate>,
    pub last_service_date: NaiveDate,
    pub current_mileage: u64,
    pub last_service_mileage: u64,
    pub tire_wear: TireWear,
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleStatus {
    pub name: String,
    pub model: CarModel,
    #[serde(flatten)]
    pub report: ServiceReport,
}

impl FleetConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LAST_SERVICE_DATE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ServiceError::ConfigError {
            message: format!("Invalid env var pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn name(&self) -> &str {
        self.fleet.name.as_deref().unwrap_or("fleet")
    }

    /// Builds and checks every vehicle, in file order.
    pub fn evaluate(&self, today: NaiveDate) -> Result<Vec<VehicleStatus>> {
        self.vehicles
            .iter()
            .map(|vehicle| {
                let car = vehicle.build(today)?;
                let report = car.service_report();
                if car.needs_service() {
                    tracing::info!(vehicle = %vehicle.name, model = %vehicle.model, due = ?report.due_components(), "Service due");
                } else {
                    tracing::debug!(vehicle = %vehicle.name, model = %vehicle.model, "No service needed");
                }
                Ok(VehicleStatus {
                    name: vehicle.name.clone(),
                    model: vehicle.model,
                    report,
                })
            })
            .collect()
    }
}

impl Validate for FleetConfig {
    fn validate(&self) -> Result<()> {
        if self.vehicles.is_empty() {
            return Err(ServiceError::ConfigError {
                message: "Fleet file does not define any [[vehicles]]".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for vehicle in &self.vehicles {
            vehicle.validate()?;
            if !seen.insert(vehicle.name.as_str()) {
                return Err(ServiceError::InvalidConfigValueError {
                    field: "vehicles.name".to_string(),
                    value: vehicle.name.clone(),
                    reason: "Vehicle names must be unique".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl VehicleConfig {
    pub fn request(&self, today: NaiveDate) -> ServiceRequest {
        ServiceRequest {
            current_date: self.current_date.unwrap_or(today),
            last_service_date: self.last_service_date,
            current_mileage: self.current_mileage,
            last_service_mileage: self.last_service_mileage,
            tire_wear: self.tire_wear,
        }
    }

    pub fn build(&self, today: NaiveDate) -> Result<Car> {
        CarFactory::create(self.model, &self.request(today))
    }
}

impl Validate for VehicleConfig {
    // current_date may default to today, so date order is left to the factory.
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("vehicles.name", &self.name)?;
        if self.current_mileage < self.last_service_mileage {
            return Err(ServiceError::InvalidConfigValueError {
                field: format!("vehicles.{}.last_service_mileage", self.name),
                value: self.last_service_mileage.to_string(),
                reason: format!("Exceeds current_mileage {}", self.current_mileage),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[fleet]
name = "depot-north"

[[vehicles]]
name = "van-7"
model = "glissade"
current_date = "2023-01-01"
last_service_date = "2020-06-01"
current_mileage = 100000
last_service_mileage = 50000
tire_wear = [0.2, 0.2, 0.2, 0.2]

[[vehicles]]
name = "courier-2"
model = "calliope"
current_date = "2024-01-01"
last_service_date = "2023-01-01"
current_mileage = 40000
last_service_mileage = 8000
tire_wear = [0.1, 0.1, 0.1, 0.1]
"#;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_parse_sample() {
        let config = FleetConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.name(), "depot-north");
        assert_eq!(config.vehicles.len(), 2);
        assert_eq!(config.vehicles[0].model, CarModel::Glissade);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_evaluate_sample() {
        let config = FleetConfig::from_toml_str(SAMPLE).unwrap();
        let statuses = config.evaluate(today()).unwrap();

        assert_eq!(statuses[0].name, "van-7");
        assert!(!statuses[0].report.needs_service);

        assert_eq!(statuses[1].name, "courier-2");
        assert!(statuses[1].report.engine);
        assert!(statuses[1].report.needs_service);
    }

    #[test]
    fn test_current_date_defaults_to_today() {
        let content = r#"
[[vehicles]]
name = "old-battery"
model = "calliope"
last_service_date = "2019-01-01"
current_mileage = 0
last_service_mileage = 0
tire_wear = [0.0, 0.0, 0.0, 0.0]
"#;
        let config = FleetConfig::from_toml_str(content).unwrap();
        assert_eq!(config.name(), "fleet");
        assert_eq!(config.vehicles[0].request(today()).current_date, today());

        let statuses = config.evaluate(today()).unwrap();
        assert!(statuses[0].report.battery);
    }

    #[test]
    fn test_rejects_bad_tire_wear() {
        let content = SAMPLE.replace("[0.2, 0.2, 0.2, 0.2]", "[0.2, 0.2, 0.2]");
        assert!(matches!(
            FleetConfig::from_toml_str(&content),
            Err(ServiceError::TomlError(_))
        ));

        let content = SAMPLE.replace("[0.2, 0.2, 0.2, 0.2]", "[0.2, 0.2, 1.5, 0.2]");
        assert!(FleetConfig::from_toml_str(&content).is_err());
    }

    #[test]
    fn test_rejects_unknown_model() {
        let content = SAMPLE.replace("\"glissade\"", "\"thovex\"");
        assert!(FleetConfig::from_toml_str(&content).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicates_and_empty() {
        let content = SAMPLE.replace("courier-2", "van-7");
        let config = FleetConfig::from_toml_str(&content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ServiceError::InvalidConfigValueError { .. })
        ));

        let empty = FleetConfig::from_toml_str("[fleet]\nname = \"empty\"\n").unwrap();
        assert!(matches!(
            empty.validate(),
            Err(ServiceError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_reversed_mileage() {
        let content = SAMPLE.replace("last_service_mileage = 50000", "last_service_mileage = 150000");
        let config = FleetConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reversed_dates_fail_at_evaluation() {
        let content = SAMPLE.replace("last_service_date = \"2020-06-01\"", "last_service_date = \"2023-06-01\"");
        let config = FleetConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_ok());
        assert!(matches!(
            config.evaluate(today()),
            Err(ServiceError::InvalidDateOrder { .. })
        ));
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let out =
            FleetConfig::substitute_env_vars("name = \"${CAR_SERVICE_SURELY_UNSET_VAR}\"").unwrap();
        assert_eq!(out, "name = \"${CAR_SERVICE_SURELY_UNSET_VAR}\"");
    }
}
