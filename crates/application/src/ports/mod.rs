//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these
//! ports; the map host is the UI-side collaborator.

mod geocoder_port;
mod map_port;

pub use geocoder_port::GeocoderPort;
#[cfg(test)]
pub use geocoder_port::MockGeocoderPort;
pub use map_port::MapPort;
#[cfg(test)]
pub use map_port::MockMapPort;
