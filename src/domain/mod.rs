// Domain layer: core models, the capacity table and ports (interfaces).

pub mod capacity;
pub mod model;
pub mod ports;
