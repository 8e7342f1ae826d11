//! Domain layer for the address search pipeline
//!
//! Contains geographic value objects, the address candidate entity,
//! the display-name formatter, and domain errors. This layer has no
//! I/O dependencies and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
