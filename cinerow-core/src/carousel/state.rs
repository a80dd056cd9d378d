//! Per-instance mutable carousel state

use super::config::CarouselConfig;
use super::ring::Ring;
use super::track::{TrackFrame, TrackMetrics};

/// The mutable record behind one carousel instance, owned exclusively by
/// the registry under that instance's key.
///
/// Two positions are tracked: `ring_index` is the scroll offset into the
/// clone-padded ring and exists only for rendering; `real_index` is the
/// position within the original sequence and is what all indicator and
/// boundary logic is computed from. Outside of a pending wrap snap the two
/// are related by `ring_index == clone_padding + real_index`.
#[derive(Debug, Clone)]
pub struct CarouselState {
    pub config: CarouselConfig,
    pub metrics: TrackMetrics,
    original_count: usize,
    clone_padding: usize,
    pub(super) ring_index: usize,
    pub(super) real_index: usize,
    pub(super) is_transitioning: bool,
    pub(super) pending_snap: bool,
}

impl CarouselState {
    /// Seed state for a freshly built ring, positioned on the first real
    /// item (ring index equal to the clone padding).
    pub fn new(config: CarouselConfig, metrics: TrackMetrics, ring: &Ring) -> Self {
        Self {
            config,
            metrics,
            original_count: ring.original_count(),
            clone_padding: ring.clone_padding(),
            ring_index: ring.clone_padding(),
            real_index: 0,
            is_transitioning: false,
            pending_snap: false,
        }
    }

    /// Largest reachable position in the original sequence.
    pub fn max_real_index(&self) -> usize {
        self.original_count
            .saturating_sub(self.config.items_per_view)
    }

    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// Clone slots per ring side; also the canonical first-real-item offset.
    pub fn clone_padding(&self) -> usize {
        self.clone_padding
    }

    pub fn ring_index(&self) -> usize {
        self.ring_index
    }

    pub fn real_index(&self) -> usize {
        self.real_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    pub fn pending_snap(&self) -> bool {
        self.pending_snap
    }

    /// Track frame for the current ring position.
    pub fn frame(&self, animate: bool) -> TrackFrame {
        TrackFrame::at(&self.metrics, self.ring_index, animate)
    }
}
