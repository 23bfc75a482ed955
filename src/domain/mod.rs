// Domain layer: data types and ports (interfaces) shared by both binaries.

pub mod model;
pub mod ports;
