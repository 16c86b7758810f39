// Domain layer: records, output bundles and the ports the core depends on.

pub mod model;
pub mod ports;
