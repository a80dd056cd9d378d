//! Navigation state machine: the two-phase move protocol
//!
//! A move is accepted only while idle. The begin phase computes the new
//! position, special-casing the two boundary wraps, and hands back the
//! animated frame to render; the complete phase, invoked by the scheduler
//! once the animation duration has elapsed, performs the silent
//! re-normalization out of the clone region when the move wrapped. The
//! animation hides the jump: by the time the track is rewound onto the
//! equivalent real position, the eased motion across the seam has finished.

use super::state::CarouselState;
use super::track::TrackFrame;

/// Direction of a navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    fn signum(self) -> isize {
        match self {
            Direction::Back => -1,
            Direction::Forward => 1,
        }
    }
}

/// Outcome of an accepted begin phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovePlan {
    /// Frame to render with animation enabled.
    pub frame: TrackFrame,
    /// True when the move crossed a wrap boundary and the completion phase
    /// will re-normalize the ring position.
    pub wrapped: bool,
}

impl CarouselState {
    /// Begin a move. Returns `None`, leaving every field untouched, while
    /// a previous move is still transitioning; commands are dropped, never
    /// queued. On acceptance the transition lock is taken and the caller
    /// must render the returned frame, refresh indicator and buttons
    /// immediately, and schedule [`CarouselState::complete_move`] after
    /// the transition duration.
    pub fn begin_move(&mut self, direction: Direction) -> Option<MovePlan> {
        if self.is_transitioning {
            return None;
        }
        self.is_transitioning = true;

        let max_real = self.max_real_index();
        let padding = self.clone_padding();

        let at_end =
            self.real_index == max_real && direction == Direction::Forward;
        let at_start = self.real_index == 0 && direction == Direction::Back;

        if at_end {
            // Animate forward into the trailing clones; logically back home.
            self.ring_index += padding;
            self.real_index = 0;
            self.pending_snap = true;
        } else if at_start {
            // Animate back into the leading clones; logically at the end.
            self.ring_index = self.ring_index.saturating_sub(padding);
            self.real_index = max_real;
            self.pending_snap = true;
        } else {
            let step = self.config.step_size as isize;
            let candidate = (self.real_index as isize
                + direction.signum() * step)
                .clamp(0, max_real as isize) as usize;
            // Near a boundary the clamp shortens the step; advancing by the
            // remaining distance is intentional, not an error.
            let delta = candidate as isize - self.real_index as isize;
            self.ring_index = (self.ring_index as isize + delta) as usize;
            self.real_index = candidate;
            self.pending_snap = false;
        }

        Some(MovePlan {
            frame: self.frame(true),
            wrapped: self.pending_snap,
        })
    }

    /// Complete the move begun earlier. Releases the transition lock
    /// unconditionally; when the move wrapped, rewinds the ring position
    /// onto the equivalent real position and returns the un-animated frame
    /// the surface must apply in a single pass.
    pub fn complete_move(&mut self) -> Option<TrackFrame> {
        self.is_transitioning = false;
        if !self.pending_snap {
            return None;
        }
        self.ring_index = self.clone_padding() + self.real_index;
        self.pending_snap = false;
        Some(self.frame(false))
    }
}
