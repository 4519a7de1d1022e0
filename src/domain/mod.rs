// Domain layer: the shop model and the ports (capabilities) implemented by adapters.

pub mod model;
pub mod ports;
