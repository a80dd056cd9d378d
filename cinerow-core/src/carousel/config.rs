//! Per-instance configuration resolved from declarative author hints

use tracing::warn;

/// Items shown when a definition does not say how many fit in the viewport.
pub const DEFAULT_ITEMS_PER_VIEW: usize = 6;

/// Items advanced per navigation command when a definition does not say.
pub const DEFAULT_STEP_SIZE: usize = 1;

/// Static configuration for a carousel instance, derived once at setup.
///
/// Construction never fails: author mistakes are corrected and reported,
/// not rejected. Invariant: `1 <= step_size <= items_per_view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    pub items_per_view: usize,
    pub step_size: usize,
}

impl CarouselConfig {
    /// Resolve raw author hints into a valid configuration.
    ///
    /// Missing items-per-view defaults to [`DEFAULT_ITEMS_PER_VIEW`],
    /// missing step size to [`DEFAULT_STEP_SIZE`]. A step size larger than
    /// items-per-view is clamped down to it; zeroes clamp up to 1.
    pub fn resolve(
        raw_items_per_view: Option<usize>,
        raw_step_size: Option<usize>,
    ) -> Self {
        let items_per_view = match raw_items_per_view {
            Some(0) => {
                warn!("items_per_view of 0 is unusable, using 1");
                1
            }
            Some(n) => n,
            None => DEFAULT_ITEMS_PER_VIEW,
        };

        let mut step_size = match raw_step_size {
            Some(0) => {
                warn!("step_size of 0 is unusable, using 1");
                1
            }
            Some(n) => n,
            None => DEFAULT_STEP_SIZE,
        };

        if step_size > items_per_view {
            warn!(
                step_size,
                items_per_view,
                "step_size cannot exceed items_per_view, clamping",
            );
            step_size = items_per_view;
        }

        Self {
            items_per_view,
            step_size,
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::{CarouselConfig, DEFAULT_ITEMS_PER_VIEW, DEFAULT_STEP_SIZE};

    #[test]
    fn defaults_fill_missing_hints() {
        let config = CarouselConfig::resolve(None, None);
        assert_eq!(config.items_per_view, DEFAULT_ITEMS_PER_VIEW);
        assert_eq!(config.step_size, DEFAULT_STEP_SIZE);
    }

    #[test]
    fn oversized_step_clamps_to_items_per_view() {
        let config = CarouselConfig::resolve(Some(4), Some(9));
        assert_eq!(config.step_size, 4);
    }

    #[test]
    fn step_size_stays_within_bounds_for_any_input() {
        for raw_step in [None, Some(0), Some(1), Some(3), Some(50)] {
            for raw_ipv in [None, Some(0), Some(1), Some(6)] {
                let config = CarouselConfig::resolve(raw_ipv, raw_step);
                assert!(config.step_size >= 1);
                assert!(config.step_size <= config.items_per_view);
            }
        }
    }
}
