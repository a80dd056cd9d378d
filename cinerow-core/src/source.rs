//! Data-source contract delivering carousel definitions

use async_trait::async_trait;
use cinerow_model::CarouselData;

/// Where carousel definitions come from. The engine does not care whether
/// this is a network call, a static import, or a mock; it only needs the
/// ordered, already-shaped list.
#[async_trait]
pub trait CarouselSource: Send + Sync {
    async fn fetch_carousels(&self) -> anyhow::Result<Vec<CarouselData>>;
}

/// A fixed in-memory source. Backs tests and headless demos.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    carousels: Vec<CarouselData>,
}

impl StaticSource {
    pub fn new(carousels: Vec<CarouselData>) -> Self {
        Self { carousels }
    }
}

#[async_trait]
impl CarouselSource for StaticSource {
    async fn fetch_carousels(&self) -> anyhow::Result<Vec<CarouselData>> {
        Ok(self.carousels.clone())
    }
}
