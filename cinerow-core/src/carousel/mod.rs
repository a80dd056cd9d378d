//! Infinite carousel engine
//!
//! A looping, step-scrollable strip rendered against a clone-padded ring:
//! the original items are prefixed with copies of their tail and suffixed
//! with copies of their head, so a wrap animates across the seam into the
//! clone region and is then silently re-normalized onto the equivalent
//! real position once the motion has finished. The structure cleanly
//! separates configuration, ring construction, per-instance state, the
//! navigation state machine, track rendering, indicator math, and the
//! registry owning all instances on a page.

pub mod config;
pub mod engine;
pub mod indicator;
pub mod registry;
pub mod ring;
pub mod state;
pub mod track;

pub use config::CarouselConfig;
pub use engine::{Direction, MovePlan};
pub use indicator::{ButtonStates, IndicatorUpdate};
pub use registry::CarouselRegistry;
pub use ring::{Ring, Slot};
pub use state::CarouselState;
pub use track::{TRANSITION, TrackFrame, TrackMetrics};
