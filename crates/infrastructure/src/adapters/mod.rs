//! Adapters implementing application ports over external integrations

pub mod geocoder_adapter;

pub use geocoder_adapter::GeocoderAdapter;
