//! # Cinerow Core
//!
//! The carousel engine behind the Cinerow home page: looping,
//! multi-item-per-view, step-scrollable image strips with seamless
//! wrap-around, plus the seams that connect the engine to a data source
//! and a rendering surface.
//!
//! ## Architecture
//!
//! - [`carousel`] — the engine itself: config resolution, clone-ring
//!   construction, per-instance state, the two-phase navigation protocol,
//!   track frames, indicator math, and the instance registry.
//! - [`surface`] — the structural contract a rendering surface must expose
//!   (track, navigation buttons, indicator strip), with an in-memory
//!   implementation for tests and headless use.
//! - [`source`] — the data-source contract delivering carousel definitions.
//! - [`setup`] — the single async entry point that discovers, wires, and
//!   drives carousel instances.
//! - [`debounce`] — the trailing-edge debouncer used by the search box.

pub mod carousel;
pub mod debounce;
pub mod setup;
pub mod source;
pub mod surface;

pub use carousel::{
    ButtonStates, CarouselConfig, CarouselRegistry, CarouselState, Direction,
    IndicatorUpdate, MovePlan, Ring, Slot, TRANSITION, TrackFrame,
    TrackMetrics,
};
pub use debounce::Debouncer;
pub use setup::{init_carousels, move_and_settle, move_carousel, settle_carousel};
pub use source::{CarouselSource, StaticSource};
pub use surface::{CarouselSurface, MemorySurface};
