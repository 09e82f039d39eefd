// Domain layer: records and ports. Adapters live under `adapters`.

pub mod model;
pub mod ports;
