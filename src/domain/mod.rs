// Domain layer: game models and ports (LP backend, storage). No I/O here.

pub mod model;
pub mod ports;
