//! Reality domain model.
//!
//! # Responsibility
//! - Define the display identity of one parallel content stream.
//! - Validate declaration-level fields before a reality enters a catalog.
//!
//! # Invariants
//! - `id` is non-blank and unique within one catalog.
//! - A reality is never mutated after the registry is built.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable string identifier of a reality, e.g. `technical`.
pub type RealityId = String;

/// One parallel content stream and its visual identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reality {
    /// Stable identifier used as blend-state key.
    pub id: RealityId,
    /// Display label.
    pub name: String,
    /// Primary accent color (CSS color string).
    pub primary_color: String,
    /// Secondary accent color (CSS color string).
    pub secondary_color: String,
    /// Font stack used when the stream is rendered.
    pub display_font: String,
}

impl Reality {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        primary_color: impl Into<String>,
        secondary_color: impl Into<String>,
        display_font: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            primary_color: primary_color.into(),
            secondary_color: secondary_color.into(),
            display_font: display_font.into(),
        }
    }

    /// Validates declaration-level invariants.
    pub fn validate(&self) -> Result<(), RealityValidationError> {
        if self.id.trim().is_empty() {
            return Err(RealityValidationError::BlankId);
        }
        if self.id.trim() != self.id {
            return Err(RealityValidationError::UntrimmedId(self.id.clone()));
        }
        if self.name.trim().is_empty() {
            return Err(RealityValidationError::BlankName(self.id.clone()));
        }
        Ok(())
    }
}

/// Validation errors for a single reality declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RealityValidationError {
    BlankId,
    UntrimmedId(String),
    BlankName(String),
}

impl Display for RealityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "reality id must not be blank"),
            Self::UntrimmedId(id) => {
                write!(f, "reality id must not carry surrounding whitespace: `{id}`")
            }
            Self::BlankName(id) => write!(f, "reality `{id}` must have a display name"),
        }
    }
}

impl Error for RealityValidationError {}

#[cfg(test)]
mod tests {
    use super::{Reality, RealityValidationError};

    #[test]
    fn validate_accepts_complete_declaration() {
        let reality = Reality::new("technical", "Technical", "#0B3D91", "#1E88E5", "mono");
        assert!(reality.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_and_padded_ids() {
        let blank = Reality::new("  ", "Blank", "#000", "#fff", "serif");
        assert_eq!(blank.validate(), Err(RealityValidationError::BlankId));

        let padded = Reality::new(" technical", "Technical", "#000", "#fff", "serif");
        assert!(matches!(
            padded.validate(),
            Err(RealityValidationError::UntrimmedId(_))
        ));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let reality = Reality::new("creative", "", "#000", "#fff", "serif");
        assert_eq!(
            reality.validate(),
            Err(RealityValidationError::BlankName("creative".to_string()))
        );
    }
}
