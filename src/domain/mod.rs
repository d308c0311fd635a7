// Domain layer: models and ports. No host or network code here.

pub mod model;
pub mod ports;
