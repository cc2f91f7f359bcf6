use std::fmt::Debug;

/// Anything that can tell whether it is due for maintenance.
pub trait Serviceable {
    fn needs_service(&self) -> bool;
}

pub trait Battery: Serviceable + Debug + Send + Sync {}

pub trait Engine: Serviceable + Debug + Send + Sync {}

pub trait Tires: Serviceable + Debug + Send + Sync {}
