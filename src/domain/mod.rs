// Domain layer: models and the console port. No I/O happens here.

pub mod model;
pub mod ports;
