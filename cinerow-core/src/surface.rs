//! Rendering-surface contract
//!
//! The engine never touches a concrete surface; it relies on the
//! structural contract every carousel root exposes: a scrollable track of
//! items, a pair of navigation controls, and an indicator container. The
//! `bool` returns report whether the addressed element exists, and callers
//! absorb a missing element locally by skipping the dependent feature.
//! Nothing in this contract can abort page initialization.

use std::collections::HashMap;

use cinerow_model::{CarouselData, CarouselId};

use crate::carousel::{ButtonStates, IndicatorUpdate, Slot, TrackFrame};

/// Operations a rendering surface must support for the engine to drive it.
pub trait CarouselSurface {
    /// Render the carousel sections for the supplied definitions. Called
    /// once per initialization, before any per-instance wiring.
    fn mount(&mut self, carousels: &[CarouselData]);

    /// One-time structural mutation: insert clone slots before and after
    /// the original items of an instance's track. `false` when the
    /// instance has no track.
    fn insert_clones(
        &mut self,
        id: &CarouselId,
        leading: &[Slot],
        trailing: &[Slot],
    ) -> bool;

    /// Apply a track frame: translate the track to the frame's offset,
    /// easing only when the frame says so. `false` when there is no track.
    fn apply_frame(&mut self, id: &CarouselId, frame: TrackFrame) -> bool;

    /// Rebuild or relight the indicator strip. `false` when the instance
    /// has no indicator container.
    fn set_indicator(&mut self, id: &CarouselId, update: IndicatorUpdate) -> bool;

    /// Enable or disable the navigation controls. `false` when the
    /// instance is missing either button.
    fn set_buttons(&mut self, id: &CarouselId, buttons: ButtonStates) -> bool;

    /// Show an inline message in place of the content rows.
    fn show_message(&mut self, text: &str);
}

/// In-memory surface recording everything applied to it. Used by tests and
/// headless runs; can simulate instances missing structural elements.
#[derive(Debug, Default)]
pub struct MemorySurface {
    mounted_titles: Vec<String>,
    frames: HashMap<CarouselId, Vec<TrackFrame>>,
    clone_counts: HashMap<CarouselId, (usize, usize)>,
    indicators: HashMap<CarouselId, IndicatorUpdate>,
    buttons: HashMap<CarouselId, ButtonStates>,
    messages: Vec<String>,
    missing_track: bool,
    missing_indicator: bool,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate carousels whose roots have no track element.
    pub fn without_track(mut self) -> Self {
        self.missing_track = true;
        self
    }

    /// Simulate carousels whose roots have no indicator container.
    pub fn without_indicator(mut self) -> Self {
        self.missing_indicator = true;
        self
    }

    pub fn mounted_titles(&self) -> &[String] {
        &self.mounted_titles
    }

    pub fn frames(&self, id: &CarouselId) -> &[TrackFrame] {
        self.frames.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn last_frame(&self, id: &CarouselId) -> Option<TrackFrame> {
        self.frames.get(id).and_then(|f| f.last().copied())
    }

    pub fn clone_counts(&self, id: &CarouselId) -> Option<(usize, usize)> {
        self.clone_counts.get(id).copied()
    }

    pub fn indicator(&self, id: &CarouselId) -> Option<IndicatorUpdate> {
        self.indicators.get(id).copied()
    }

    pub fn buttons(&self, id: &CarouselId) -> Option<ButtonStates> {
        self.buttons.get(id).copied()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl CarouselSurface for MemorySurface {
    fn mount(&mut self, carousels: &[CarouselData]) {
        self.mounted_titles
            .extend(carousels.iter().map(|c| c.title.clone()));
    }

    fn insert_clones(
        &mut self,
        id: &CarouselId,
        leading: &[Slot],
        trailing: &[Slot],
    ) -> bool {
        if self.missing_track {
            return false;
        }
        self.clone_counts
            .insert(id.clone(), (leading.len(), trailing.len()));
        true
    }

    fn apply_frame(&mut self, id: &CarouselId, frame: TrackFrame) -> bool {
        if self.missing_track {
            return false;
        }
        self.frames.entry(id.clone()).or_default().push(frame);
        true
    }

    fn set_indicator(&mut self, id: &CarouselId, update: IndicatorUpdate) -> bool {
        if self.missing_indicator {
            return false;
        }
        self.indicators.insert(id.clone(), update);
        true
    }

    fn set_buttons(&mut self, id: &CarouselId, buttons: ButtonStates) -> bool {
        self.buttons.insert(id.clone(), buttons);
        true
    }

    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_owned());
    }
}
