// Domain layer: display model and ports. No reactive plumbing here.

pub mod model;
pub mod ports;
