// Domain layer: value types and the component ports every variant implements.

pub mod model;
pub mod ports;
