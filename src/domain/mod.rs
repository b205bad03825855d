// Domain layer: the Person record, its sample companions and the ordering seam.

pub mod model;
pub mod ports;
