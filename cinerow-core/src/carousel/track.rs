//! Track frames: mapping ring positions to pixel offsets

use std::time::Duration;

/// Duration of one animated move. The completion phase of a move must be
/// scheduled after exactly this long; if the surface animates with a
/// different duration the snap becomes visible.
pub const TRANSITION: Duration = Duration::from_millis(400);

/// Layout constants the offset math depends on. Injected at setup so the
/// engine carries no knowledge of any particular visual theme; these must
/// match the rendered item size or every offset is visibly wrong.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    pub item_width: f32,
    pub item_gap: f32,
}

impl TrackMetrics {
    pub fn new(item_width: f32, item_gap: f32) -> Self {
        Self {
            item_width,
            item_gap,
        }
    }

    /// Horizontal distance between the left edges of adjacent items.
    pub fn stride(&self) -> f32 {
        self.item_width + self.item_gap
    }
}

impl Default for TrackMetrics {
    // The observed poster layout: 258px cards with an 8px gap.
    fn default() -> Self {
        Self::new(258.0, 8.0)
    }
}

/// One layout pass for the track: where to put it and whether to ease
/// there. `animate: false` means the transition is suppressed for this
/// single pass, which is what hides the wrap re-normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackFrame {
    pub offset_px: f32,
    pub animate: bool,
}

impl TrackFrame {
    /// Frame positioning the track at `ring_index` items from the start.
    pub fn at(metrics: &TrackMetrics, ring_index: usize, animate: bool) -> Self {
        Self {
            offset_px: ring_index as f32 * metrics.stride(),
            animate,
        }
    }
}
