//! Console map host
//!
//! A terminal stand-in for a real map surface. It remembers the last
//! centered coordinate and prints marker placements instead of drawing
//! them.

#![allow(clippy::print_stdout)]

use std::sync::Mutex;

use application::ports::MapPort;
use async_trait::async_trait;
use domain::{GeoBounds, GeoLocation};
use tracing::debug;

/// Initial viewport center before any marker has been placed
const DEFAULT_CENTER: (f64, f64) = (19.4326, -99.1332);

/// Map host that renders to stdout
#[derive(Debug)]
pub struct ConsoleMapHost {
    center: Mutex<GeoLocation>,
}

impl ConsoleMapHost {
    #[must_use]
    pub fn new() -> Self {
        Self {
            center: Mutex::new(GeoLocation::new_unchecked(
                DEFAULT_CENTER.0,
                DEFAULT_CENTER.1,
            )),
        }
    }
}

impl Default for ConsoleMapHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MapPort for ConsoleMapHost {
    fn viewport_center(&self) -> GeoLocation {
        self.center.lock().map_or_else(
            |_| GeoLocation::new_unchecked(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            |guard| *guard,
        )
    }

    fn viewport_bounds(&self) -> Option<GeoBounds> {
        // A terminal has no visible map rectangle to bias against.
        None
    }

    async fn place_marker_and_center(&self, coordinate: GeoLocation) {
        if let Ok(mut guard) = self.center.lock() {
            *guard = coordinate;
        }
        debug!(%coordinate, "map centered on selection");
        println!("📍 Marker placed at {coordinate}");
    }
}
