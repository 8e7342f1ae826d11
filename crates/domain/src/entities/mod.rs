//! Domain entities

mod candidate;

pub use candidate::Candidate;
