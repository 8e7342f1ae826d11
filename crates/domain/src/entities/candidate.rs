//! Address candidate entity
//!
//! One geocoded result for a partial-address query. Immutable once
//! received; ordering within a result list is the vendor ranking and
//! is preserved end to end.

use serde::{Deserialize, Serialize};

use crate::value_objects::{AddressLines, GeoLocation};

/// A single geocoded address candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Opaque vendor identifier (e.g. "address.12345")
    pub id: String,
    /// Vendor-formatted display name ("street, city, region, ...")
    pub display_name: String,
    /// Geographic position of the candidate
    pub coordinate: GeoLocation,
}

impl Candidate {
    /// Create a new candidate
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        coordinate: GeoLocation,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            coordinate,
        }
    }

    /// Split the display name for two-line rendering, falling back to
    /// the full name as the primary line when it has no comma
    #[must_use]
    pub fn display_lines(&self) -> AddressLines {
        AddressLines::split_or_fallback(&self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Candidate {
        Candidate::new(
            "address.12345",
            "Main St, Springfield, IL",
            GeoLocation::new_unchecked(39.7817, -89.6501),
        )
    }

    #[test]
    fn candidate_carries_vendor_fields() {
        let candidate = sample();
        assert_eq!(candidate.id, "address.12345");
        assert_eq!(candidate.display_name, "Main St, Springfield, IL");
        assert!((candidate.coordinate.latitude() - 39.7817).abs() < f64::EPSILON);
    }

    #[test]
    fn display_lines_split_well_formed_name() {
        let lines = sample().display_lines();
        assert_eq!(lines.primary(), "Main St");
        assert_eq!(lines.secondary(), "Springfield, IL");
    }

    #[test]
    fn display_lines_fall_back_for_bare_place_name() {
        let candidate = Candidate::new(
            "poi.1",
            "Eiffel Tower",
            GeoLocation::new_unchecked(48.8584, 2.2945),
        );
        let lines = candidate.display_lines();
        assert_eq!(lines.primary(), "Eiffel Tower");
        assert_eq!(lines.secondary(), "");
    }

    #[test]
    fn serialization_round_trip() {
        let candidate = sample();
        let json = serde_json::to_string(&candidate).expect("serialize");
        let back: Candidate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(candidate, back);
    }
}
