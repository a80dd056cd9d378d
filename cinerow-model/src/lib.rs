//! Core data model definitions shared across Cinerow crates.
#![allow(missing_docs)]

pub mod carousel;
pub mod error;
pub mod ids;
pub mod movie;

// Intentionally curated re-exports for downstream consumers.
pub use carousel::{CarouselData, CarouselItem};
pub use error::{ModelError, Result as ModelResult};
pub use ids::CarouselId;
pub use movie::{Movie, SearchResponse};
