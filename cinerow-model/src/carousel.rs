use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::CarouselId;

/// One displayable entry in a carousel strip. Opaque to the engine beyond
/// display; ordering within the parent definition is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselItem {
    pub id: String,
    pub image_url: String,
}

impl CarouselItem {
    pub fn new(id: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
        }
    }
}

/// A declarative carousel definition as delivered by the data source.
///
/// `items_per_view` and `step_size` are author hints; the engine validates
/// and clamps them rather than trusting them. A missing `id` means setup
/// generates one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselData {
    #[serde(default)]
    pub id: Option<CarouselId>,
    pub title: String,
    #[serde(default)]
    pub items_per_view: Option<usize>,
    #[serde(default)]
    pub step_size: Option<usize>,
    pub items: Vec<CarouselItem>,
}

impl CarouselData {
    /// Reject definitions that cannot be mounted at all.
    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(ModelError::EmptyCarousel(self.title.clone()));
        }
        Ok(())
    }
}
