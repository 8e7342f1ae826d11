//! Application layer - Use cases and orchestration
//!
//! Contains the address search service, the result list presenter, and
//! the port definitions the infrastructure adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
