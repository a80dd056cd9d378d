//! Indicator dots and navigation button state derived from carousel state

use super::state::CarouselState;

/// Derived indicator strip state: how many dots, which one is lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorUpdate {
    pub count: usize,
    pub active: usize,
}

impl IndicatorUpdate {
    /// Snapshot the indicator for the current state.
    pub fn for_state(state: &CarouselState) -> Self {
        let max_real = state.max_real_index();
        let step = state.config.step_size;
        Self {
            count: indicator_count(
                state.original_count(),
                state.config.items_per_view,
                step,
            ),
            active: active_index(state.real_index(), max_real, step),
        }
    }
}

/// Number of reachable positions in step-size increments, including the
/// final pinned position even when it is not a multiple of the step.
pub fn indicator_count(
    original_count: usize,
    items_per_view: usize,
    step_size: usize,
) -> usize {
    let max_real = original_count.saturating_sub(items_per_view);
    max_real.div_ceil(step_size) + 1
}

/// Dot index for a real position. The last dot lights up exactly when the
/// carousel is pinned at its rightmost real position, even if that position
/// was reached by a clamped partial step.
pub fn active_index(real_index: usize, max_real_index: usize, step_size: usize) -> usize {
    if max_real_index > 0 && real_index >= max_real_index {
        max_real_index.div_ceil(step_size)
    } else {
        real_index / step_size
    }
}

/// Navigation button enablement. The infinite design has no unreachable
/// direction, so both stay enabled for the life of the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl ButtonStates {
    pub fn infinite() -> Self {
        Self {
            prev_enabled: true,
            next_enabled: true,
        }
    }
}
