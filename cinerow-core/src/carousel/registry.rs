//! Registry owning every carousel state on a page, keyed by CarouselId
//!
//! The registry is an explicit value handed to callers rather than shared
//! module state, so independent pages (and tests) never cross-contaminate.
//! Instances are fully independent; separate carousels may be
//! mid-transition concurrently.

use std::collections::HashMap;

use cinerow_model::CarouselId;

use super::state::CarouselState;

#[derive(Debug, Default)]
pub struct CarouselRegistry {
    states: HashMap<CarouselId, CarouselState>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Register a freshly initialized instance, replacing any previous
    /// state under the same key.
    pub fn insert(&mut self, id: CarouselId, state: CarouselState) {
        self.states.insert(id, state);
    }

    pub fn get(&self, id: &CarouselId) -> Option<&CarouselState> {
        self.states.get(id)
    }

    pub fn get_mut(&mut self, id: &CarouselId) -> Option<&mut CarouselState> {
        self.states.get_mut(id)
    }

    /// Tear an instance down. Any still-scheduled completion for it
    /// becomes a no-op.
    pub fn remove(&mut self, id: &CarouselId) -> Option<CarouselState> {
        self.states.remove(id)
    }

    pub fn contains(&self, id: &CarouselId) -> bool {
        self.states.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Snapshot of all registered keys.
    pub fn keys(&self) -> Vec<CarouselId> {
        self.states.keys().cloned().collect()
    }

    pub fn for_each(&self, mut f: impl FnMut(&CarouselId, &CarouselState)) {
        for (id, state) in &self.states {
            f(id, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CarouselRegistry;
    use crate::carousel::config::CarouselConfig;
    use crate::carousel::ring::Ring;
    use crate::carousel::state::CarouselState;
    use crate::carousel::track::TrackMetrics;
    use cinerow_model::{CarouselId, CarouselItem};

    fn sample_state() -> CarouselState {
        let items: Vec<_> = (0..8)
            .map(|i| CarouselItem::new(format!("m{i}"), format!("/{i}.png")))
            .collect();
        let config = CarouselConfig::resolve(Some(3), Some(1));
        let ring = Ring::build(&items, config.items_per_view);
        CarouselState::new(config, TrackMetrics::default(), &ring)
    }

    #[test]
    fn instances_are_independent() {
        let mut registry = CarouselRegistry::new();
        let a = CarouselId::new("a").unwrap();
        let b = CarouselId::new("b").unwrap();
        registry.insert(a.clone(), sample_state());
        registry.insert(b.clone(), sample_state());

        registry
            .get_mut(&a)
            .unwrap()
            .begin_move(crate::carousel::Direction::Forward)
            .unwrap();

        assert!(registry.get(&a).unwrap().is_transitioning());
        assert!(!registry.get(&b).unwrap().is_transitioning());
    }

    #[test]
    fn unknown_keys_are_absent() {
        let registry = CarouselRegistry::new();
        assert!(registry.get(&CarouselId::new("ghost").unwrap()).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn removal_makes_room_for_teardown() {
        let mut registry = CarouselRegistry::new();
        let id = CarouselId::new("row").unwrap();
        registry.insert(id.clone(), sample_state());
        assert_eq!(registry.len(), 1);
        assert!(registry.remove(&id).is_some());
        assert!(registry.remove(&id).is_none());
    }
}
