//! Two-line address display value object
//!
//! Geocoders return a single vendor-formatted display name like
//! `"Main St, Springfield, IL"`. The result list shows the street on
//! its own line with the remaining address below it, so the name is
//! split at the first comma.
//!
//! # Examples
//!
//! ```
//! use domain::AddressLines;
//!
//! let lines = AddressLines::split("Main St, Springfield, IL").unwrap();
//! assert_eq!(lines.primary(), "Main St");
//! assert_eq!(lines.secondary(), "Springfield, IL");
//!
//! // Bare place names have no comma and are rejected
//! assert!(AddressLines::split("NoCommaHere").is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A display name split into a primary line (street) and a secondary
/// line (the rest of the address)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressLines {
    primary: String,
    secondary: String,
}

impl AddressLines {
    /// Split a vendor-formatted display name at the first comma
    ///
    /// The secondary line skips the comma and exactly one following
    /// character, which in vendor output is the separating space. An
    /// empty input yields two empty lines rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedAddress` when a non-empty display
    /// name contains no comma. Callers decide the fallback, see
    /// [`AddressLines::split_or_fallback`].
    pub fn split(display_name: &str) -> Result<Self, DomainError> {
        if display_name.is_empty() {
            return Ok(Self {
                primary: String::new(),
                secondary: String::new(),
            });
        }

        let Some((primary, rest)) = display_name.split_once(',') else {
            return Err(DomainError::MalformedAddress(display_name.to_string()));
        };

        // Skip one character after the comma, UTF-8 aware. A display
        // name ending right at the comma leaves the secondary empty.
        let mut chars = rest.chars();
        chars.next();
        let secondary = chars.as_str();

        Ok(Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        })
    }

    /// Split a display name, falling back to the full string as the
    /// primary line when no comma is present
    #[must_use]
    pub fn split_or_fallback(display_name: &str) -> Self {
        Self::split(display_name).unwrap_or_else(|_| Self {
            primary: display_name.to_string(),
            secondary: String::new(),
        })
    }

    /// Get the primary line (street)
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Get the secondary line (remaining address)
    #[must_use]
    pub fn secondary(&self) -> &str {
        &self.secondary
    }
}
