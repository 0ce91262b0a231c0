// Domain layer: value types and the cache port. No I/O.

pub mod model;
pub mod ports;
