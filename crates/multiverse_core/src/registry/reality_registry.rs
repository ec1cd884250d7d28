//! Immutable, ordered reality registry.

use crate::model::reality::Reality;
use crate::registry::catalog::CatalogError;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Lookup errors for the reality registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No reality carries the requested id.
    RealityNotFound(String),
    /// Index outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RealityNotFound(id) => write!(f, "reality not found: `{id}`"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "reality index {index} out of range (len {len})")
            }
        }
    }
}

impl Error for RegistryError {}

/// Fixed, ordered catalog of realities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealityRegistry {
    realities: Vec<Reality>,
}

impl RealityRegistry {
    /// Builds a registry from declarations, validating catalog invariants.
    ///
    /// # Errors
    /// - `CatalogError::Empty` when no reality is declared.
    /// - `CatalogError::InvalidReality` when one declaration is malformed.
    /// - `CatalogError::DuplicateId` when two realities share an id.
    pub fn from_realities(realities: Vec<Reality>) -> Result<Self, CatalogError> {
        if realities.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = BTreeSet::<&str>::new();
        for (position, reality) in realities.iter().enumerate() {
            reality
                .validate()
                .map_err(|source| CatalogError::InvalidReality { position, source })?;
            if !seen.insert(reality.id.as_str()) {
                return Err(CatalogError::DuplicateId(reality.id.clone()));
            }
        }

        Ok(Self { realities })
    }

    /// Ordered realities, stable across calls.
    pub fn list(&self) -> &[Reality] {
        &self.realities
    }

    /// Ordered reality ids.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.realities.iter().map(|reality| reality.id.as_str())
    }

    pub fn by_id(&self, id: &str) -> RegistryResult<&Reality> {
        self.realities
            .iter()
            .find(|reality| reality.id == id)
            .ok_or_else(|| RegistryError::RealityNotFound(id.to_string()))
    }

    pub fn by_index(&self, index: usize) -> RegistryResult<&Reality> {
        self.realities
            .get(index)
            .ok_or(RegistryError::IndexOutOfRange {
                index,
                len: self.realities.len(),
            })
    }

    /// Position of `id` in registry order.
    pub fn index_of(&self, id: &str) -> RegistryResult<usize> {
        self.realities
            .iter()
            .position(|reality| reality.id == id)
            .ok_or_else(|| RegistryError::RealityNotFound(id.to_string()))
    }

    /// Number of realities; always at least one.
    pub fn len(&self) -> usize {
        self.realities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.realities.is_empty()
    }
}
