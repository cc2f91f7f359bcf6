use crate::core::{Battery, Engine, Serviceable, ServiceReport, Tires};

/// A vehicle assembled from one battery, one engine and one set of tires.
///
/// The car owns its components outright and never mutates them, so a
/// `Car` can be shared across threads for read-only checks.
#[derive(Debug)]
pub struct Car {
    battery: Box<dyn Battery>,
    engine: Box<dyn Engine>,
    tires: Box<dyn Tires>,
}

impl Car {
    pub fn new(battery: Box<dyn Battery>, engine: Box<dyn Engine>, tires: Box<dyn Tires>) -> Self {
        Self {
            battery,
            engine,
            tires,
        }
    }

    pub fn battery(&self) -> &dyn Battery {
        self.battery.as_ref()
    }

    pub fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }

    pub fn tires(&self) -> &dyn Tires {
        self.tires.as_ref()
    }

    /// Evaluates every slot, unlike `needs_service` which may stop early.
    pub fn service_report(&self) -> ServiceReport {
        let battery = self.battery.needs_service();
        let engine = self.engine.needs_service();
        let tires = self.tires.needs_service();
        let report = ServiceReport {
            battery,
            engine,
            tires,
            needs_service: battery || engine || tires,
        };

        tracing::debug!(
            battery = report.battery,
            engine = report.engine,
            tires = report.tires,
            "Evaluated service report"
        );
        report
    }
}

impl Serviceable for Car {
    fn needs_service(&self) -> bool {
        self.battery.needs_service() || self.engine.needs_service() || self.tires.needs_service()
    }
}
