//! Built-in catalog and JSON catalog loading.
//!
//! # Responsibility
//! - Declare the four stock realities.
//! - Parse JSON catalog files into a validated registry plus coordinator
//!   configuration.
//!
//! # Invariants
//! - Parsing never yields a registry that fails `from_realities` checks.
//! - Unknown top-level fields are rejected instead of silently ignored.

use crate::config::{ConfigError, CoordinatorConfig};
use crate::model::reality::{Reality, RealityValidationError};
use crate::registry::reality_registry::RealityRegistry;
use log::{error, info};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Catalog construction/loading errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Catalog declares no realities.
    Empty,
    /// One declaration failed validation.
    InvalidReality {
        position: usize,
        source: RealityValidationError,
    },
    /// Two declarations share one id.
    DuplicateId(String),
    /// Coordinator section failed validation.
    InvalidConfig(ConfigError),
    /// JSON could not be parsed into the catalog shape.
    Parse(String),
    /// Catalog file could not be read.
    Io(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "reality catalog must declare at least one reality"),
            Self::InvalidReality { position, source } => {
                write!(f, "invalid reality at position {position}: {source}")
            }
            Self::DuplicateId(id) => write!(f, "duplicate reality id: `{id}`"),
            Self::InvalidConfig(err) => write!(f, "invalid coordinator config: {err}"),
            Self::Parse(message) => write!(f, "invalid catalog json: {message}"),
            Self::Io(message) => write!(f, "catalog read failed: {message}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidReality { source, .. } => Some(source),
            Self::InvalidConfig(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for CatalogError {
    fn from(value: ConfigError) -> Self {
        Self::InvalidConfig(value)
    }
}

/// Validated output of one catalog file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCatalog {
    pub registry: RealityRegistry,
    pub config: CoordinatorConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    realities: Vec<Reality>,
    #[serde(default)]
    coordinator: CoordinatorConfig,
}

impl RealityRegistry {
    /// Stock catalog: technical, creative, personal, conceptual.
    pub fn builtin() -> Self {
        Self::from_realities(builtin_realities()).expect("built-in catalog is valid")
    }
}

fn builtin_realities() -> Vec<Reality> {
    vec![
        Reality::new(
            "technical",
            "Technical",
            "#0B3D91",
            "#1E88E5",
            "'Roboto Mono', monospace",
        ),
        Reality::new(
            "creative",
            "Creative",
            "#9C27B0",
            "#D81B60",
            "'Playfair Display', serif",
        ),
        Reality::new(
            "personal",
            "Personal",
            "#FF9800",
            "#F44336",
            "'Outfit', sans-serif",
        ),
        Reality::new(
            "conceptual",
            "Conceptual",
            "#00897B",
            "#43A047",
            "'Space Grotesk', sans-serif",
        ),
    ]
}

/// Parses a JSON catalog document.
///
/// Expected shape:
/// `{"realities": [{"id", "name", "primary_color", "secondary_color",
/// "display_font"}, ...], "coordinator": {"focused_weight",
/// "unfocused_rest_weight"}}`; the `coordinator` section is optional.
pub fn load_catalog_str(raw: &str) -> Result<LoadedCatalog, CatalogError> {
    let file: CatalogFile =
        serde_json::from_str(raw).map_err(|err| CatalogError::Parse(err.to_string()))?;
    file.coordinator.validate()?;
    let registry = RealityRegistry::from_realities(file.realities)?;
    Ok(LoadedCatalog {
        registry,
        config: file.coordinator,
    })
}

/// Reads and parses a JSON catalog file.
///
/// # Side effects
/// - Emits `catalog_load` logging events with status and reality count.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<LoadedCatalog, CatalogError> {
    let path = path.as_ref();
    info!("event=catalog_load module=registry status=start");

    let result = std::fs::read_to_string(path)
        .map_err(|err| CatalogError::Io(format!("{}: {err}", path.display())))
        .and_then(|raw| load_catalog_str(&raw));

    match &result {
        Ok(loaded) => info!(
            "event=catalog_load module=registry status=ok realities={}",
            loaded.registry.len()
        ),
        Err(err) => error!(
            "event=catalog_load module=registry status=error error={}",
            err
        ),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::{load_catalog_str, CatalogError};
    use crate::config::ConfigError;
    use crate::registry::reality_registry::RealityRegistry;

    #[test]
    fn builtin_catalog_has_four_ordered_realities() {
        let registry = RealityRegistry::builtin();
        assert_eq!(
            registry.ids().collect::<Vec<_>>(),
            vec!["technical", "creative", "personal", "conceptual"]
        );
        let creative = registry.by_id("creative").expect("creative reality");
        assert_eq!(creative.primary_color, "#9C27B0");
        assert_eq!(creative.secondary_color, "#D81B60");
    }

    #[test]
    fn load_catalog_str_applies_default_coordinator_section() {
        let loaded = load_catalog_str(
            r##"{"realities": [
                {"id": "alpha", "name": "Alpha", "primary_color": "#000",
                 "secondary_color": "#111", "display_font": "serif"}
            ]}"##,
        )
        .expect("catalog should parse");

        assert_eq!(loaded.registry.len(), 1);
        assert_eq!(loaded.config.unfocused_rest_weight, 30.0);
        assert_eq!(loaded.config.focused_weight, 100.0);
    }

    #[test]
    fn load_catalog_str_rejects_invalid_coordinator_weights() {
        let err = load_catalog_str(
            r##"{"realities": [
                {"id": "alpha", "name": "Alpha", "primary_color": "#000",
                 "secondary_color": "#111", "display_font": "serif"}
            ], "coordinator": {"unfocused_rest_weight": 140}}"##,
        )
        .expect_err("out of range weight must fail");

        assert_eq!(
            err,
            CatalogError::InvalidConfig(ConfigError::WeightOutOfRange {
                field: "unfocused_rest_weight",
                value: 140.0,
            })
        );
    }

    #[test]
    fn load_catalog_str_rejects_unknown_fields_and_empty_lists() {
        let unknown = load_catalog_str(r#"{"realities": [], "extra": true}"#)
            .expect_err("unknown field must fail");
        assert!(matches!(unknown, CatalogError::Parse(_)));

        let empty = load_catalog_str(r#"{"realities": []}"#).expect_err("empty must fail");
        assert_eq!(empty, CatalogError::Empty);
    }
}
