use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ModelError, Result};

/// Unique key for identifying a carousel instance throughout the app.
///
/// Using a strongly-typed key avoids brittle string matching and enables
/// scoped state per carousel instance. Keys are either author-supplied
/// (from the carousel definition) or generated at setup time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarouselId(String);

impl CarouselId {
    /// Build a key from an author-supplied identifier. Blank identifiers
    /// are rejected so registries never key on the empty string.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ModelError::InvalidId(raw));
        }
        Ok(Self(raw))
    }

    /// Generate a fresh key for definitions that did not supply one.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarouselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
