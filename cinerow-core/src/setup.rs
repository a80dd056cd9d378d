//! Initialization entry point and registry-level navigation commands
//!
//! `init_carousels` is the only public way the surrounding application
//! starts the engine: it pulls definitions from the source, mounts them on
//! the surface, and seeds one registered state per usable instance. Every
//! failure path degrades to "show a message" or "skip the instance";
//! nothing here propagates an error to the caller.

use tracing::{debug, warn};

use cinerow_model::CarouselId;

use crate::carousel::{
    ButtonStates, CarouselConfig, CarouselRegistry, CarouselState, Direction,
    IndicatorUpdate, Ring, TRANSITION, TrackMetrics,
};
use crate::source::CarouselSource;
use crate::surface::CarouselSurface;

/// Inline message shown when the data source fails.
pub const FETCH_FAILED_MESSAGE: &str = "The catalog could not be loaded.";

/// Inline message shown when the data source returns nothing.
pub const EMPTY_CATALOG_MESSAGE: &str = "There is nothing to show yet.";

/// Discover and wire every carousel the source defines.
///
/// Returns the keys of the instances that were registered, in definition
/// order. Definitions without items are skipped; definitions without an id
/// get a generated one. A fetch failure or an empty catalog leaves the
/// registry untouched and surfaces an inline message instead.
pub async fn init_carousels(
    source: &dyn CarouselSource,
    surface: &mut dyn CarouselSurface,
    registry: &mut CarouselRegistry,
    metrics: TrackMetrics,
) -> Vec<CarouselId> {
    let carousels = match source.fetch_carousels().await {
        Ok(carousels) => carousels,
        Err(error) => {
            warn!(%error, "carousel fetch failed");
            surface.show_message(FETCH_FAILED_MESSAGE);
            return Vec::new();
        }
    };

    if carousels.is_empty() {
        surface.show_message(EMPTY_CATALOG_MESSAGE);
        return Vec::new();
    }

    surface.mount(&carousels);

    let mut ids = Vec::with_capacity(carousels.len());
    for definition in &carousels {
        if let Err(error) = definition.validate() {
            warn!(%error, "skipping carousel definition");
            continue;
        }

        let id = definition
            .id
            .clone()
            .unwrap_or_else(CarouselId::generate);
        let config = CarouselConfig::resolve(
            definition.items_per_view,
            definition.step_size,
        );
        let ring = Ring::build(&definition.items, config.items_per_view);

        if !surface.insert_clones(
            &id,
            ring.leading_clones(),
            ring.trailing_clones(),
        ) {
            debug!(%id, "no track, clone insertion skipped");
        }

        let state = CarouselState::new(config, metrics, &ring);
        if !surface.apply_frame(&id, state.frame(false)) {
            debug!(%id, "no track, initial frame skipped");
        }
        if !surface.set_indicator(&id, IndicatorUpdate::for_state(&state)) {
            debug!(%id, "no indicator container, dots skipped");
        }
        surface.set_buttons(&id, ButtonStates::infinite());

        registry.insert(id.clone(), state);
        ids.push(id);
    }

    ids
}

/// Begin a move on one instance: render the animated frame and refresh
/// indicator and buttons immediately, before the position settles.
///
/// Returns `false` when the id is unknown (stale references are expected
/// after teardown) or the instance is still transitioning.
pub fn move_carousel(
    registry: &mut CarouselRegistry,
    surface: &mut dyn CarouselSurface,
    id: &CarouselId,
    direction: Direction,
) -> bool {
    let Some(state) = registry.get_mut(id) else {
        debug!(%id, "move for unknown carousel ignored");
        return false;
    };
    let Some(plan) = state.begin_move(direction) else {
        return false;
    };

    let indicator = IndicatorUpdate::for_state(state);
    if !surface.apply_frame(id, plan.frame) {
        debug!(%id, "no track, move frame skipped");
    }
    if !surface.set_indicator(id, indicator) {
        debug!(%id, "no indicator container, dots skipped");
    }
    surface.set_buttons(id, ButtonStates::infinite());
    true
}

/// Complete a previously begun move once its animation has elapsed,
/// applying the silent wrap snap when one is pending. A torn-down instance
/// is a no-op; there is no cancellation of scheduled completions.
pub fn settle_carousel(
    registry: &mut CarouselRegistry,
    surface: &mut dyn CarouselSurface,
    id: &CarouselId,
) {
    let Some(state) = registry.get_mut(id) else {
        debug!(%id, "settle for unknown carousel ignored");
        return;
    };
    if let Some(snap) = state.complete_move()
        && !surface.apply_frame(id, snap)
    {
        debug!(%id, "no track, snap frame skipped");
    }
}

/// Drive one full move: begin, wait out the transition, settle.
pub async fn move_and_settle(
    registry: &mut CarouselRegistry,
    surface: &mut dyn CarouselSurface,
    id: &CarouselId,
    direction: Direction,
) -> bool {
    if !move_carousel(registry, surface, id, direction) {
        return false;
    }
    tokio::time::sleep(TRANSITION).await;
    settle_carousel(registry, surface, id);
    true
}

#[cfg(test)]
mod tests {
    use super::{
        EMPTY_CATALOG_MESSAGE, FETCH_FAILED_MESSAGE, init_carousels,
        move_and_settle, move_carousel, settle_carousel,
    };
    use crate::carousel::{CarouselRegistry, Direction, TrackMetrics};
    use crate::source::{CarouselSource, StaticSource};
    use crate::surface::MemorySurface;
    use async_trait::async_trait;
    use cinerow_model::{CarouselData, CarouselId, CarouselItem};

    struct FailingSource;

    #[async_trait]
    impl CarouselSource for FailingSource {
        async fn fetch_carousels(&self) -> anyhow::Result<Vec<CarouselData>> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    fn definition(id: &str, count: usize) -> CarouselData {
        CarouselData {
            id: Some(CarouselId::new(id).unwrap()),
            title: format!("Row {id}"),
            items_per_view: Some(3),
            step_size: Some(3),
            items: (0..count)
                .map(|i| CarouselItem::new(format!("{id}_{i}"), format!("/{i}.png")))
                .collect(),
        }
    }

    #[tokio::test]
    async fn init_registers_and_renders_each_instance() {
        let source =
            StaticSource::new(vec![definition("top", 8), definition("new", 10)]);
        let mut surface = MemorySurface::new();
        let mut registry = CarouselRegistry::new();

        let ids = init_carousels(
            &source,
            &mut surface,
            &mut registry,
            TrackMetrics::default(),
        )
        .await;

        assert_eq!(ids.len(), 2);
        assert_eq!(registry.len(), 2);
        assert_eq!(surface.mounted_titles().len(), 2);

        let top = &ids[0];
        // Initial frame lands on the first real item without easing.
        let frame = surface.last_frame(top).unwrap();
        assert!(!frame.animate);
        assert_eq!(frame.offset_px, 3.0 * TrackMetrics::default().stride());
        assert_eq!(surface.clone_counts(top), Some((3, 3)));
        assert_eq!(surface.indicator(top).unwrap().active, 0);
        assert!(surface.buttons(top).unwrap().next_enabled);
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_a_message() {
        let mut surface = MemorySurface::new();
        let mut registry = CarouselRegistry::new();

        let ids = init_carousels(
            &FailingSource,
            &mut surface,
            &mut registry,
            TrackMetrics::default(),
        )
        .await;

        assert!(ids.is_empty());
        assert!(registry.is_empty());
        assert_eq!(surface.messages(), [FETCH_FAILED_MESSAGE]);
    }

    #[tokio::test]
    async fn empty_catalog_degrades_to_a_message() {
        let source = StaticSource::default();
        let mut surface = MemorySurface::new();
        let mut registry = CarouselRegistry::new();

        let ids = init_carousels(
            &source,
            &mut surface,
            &mut registry,
            TrackMetrics::default(),
        )
        .await;

        assert!(ids.is_empty());
        assert_eq!(surface.messages(), [EMPTY_CATALOG_MESSAGE]);
    }

    #[tokio::test]
    async fn itemless_definitions_are_skipped() {
        let source =
            StaticSource::new(vec![definition("ok", 8), definition("empty", 0)]);
        let mut surface = MemorySurface::new();
        let mut registry = CarouselRegistry::new();

        let ids = init_carousels(
            &source,
            &mut surface,
            &mut registry,
            TrackMetrics::default(),
        )
        .await;

        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].as_str(), "ok");
    }

    #[tokio::test]
    async fn missing_indicator_is_absorbed() {
        let source = StaticSource::new(vec![definition("row", 8)]);
        let mut surface = MemorySurface::new().without_indicator();
        let mut registry = CarouselRegistry::new();

        let ids = init_carousels(
            &source,
            &mut surface,
            &mut registry,
            TrackMetrics::default(),
        )
        .await;

        // The instance still initializes; only the dots are skipped.
        assert_eq!(ids.len(), 1);
        assert!(surface.indicator(&ids[0]).is_none());
        assert!(surface.last_frame(&ids[0]).is_some());
    }

    #[tokio::test]
    async fn missing_track_is_absorbed() {
        let source = StaticSource::new(vec![definition("row", 8)]);
        let mut surface = MemorySurface::new().without_track();
        let mut registry = CarouselRegistry::new();

        let ids = init_carousels(
            &source,
            &mut surface,
            &mut registry,
            TrackMetrics::default(),
        )
        .await;

        // The instance still registers and navigates; frames just go nowhere.
        assert_eq!(ids.len(), 1);
        assert!(surface.last_frame(&ids[0]).is_none());
        assert!(move_carousel(
            &mut registry,
            &mut surface,
            &ids[0],
            Direction::Forward,
        ));
    }

    #[tokio::test]
    async fn unknown_id_moves_are_no_ops() {
        let mut surface = MemorySurface::new();
        let mut registry = CarouselRegistry::new();
        let ghost = CarouselId::new("ghost").unwrap();

        assert!(!move_carousel(
            &mut registry,
            &mut surface,
            &ghost,
            Direction::Forward,
        ));
        settle_carousel(&mut registry, &mut surface, &ghost);
        assert!(surface.frames(&ghost).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn wrap_move_settles_with_a_silent_snap() {
        let source = StaticSource::new(vec![definition("row", 8)]);
        let mut surface = MemorySurface::new();
        let mut registry = CarouselRegistry::new();
        let ids = init_carousels(
            &source,
            &mut surface,
            &mut registry,
            TrackMetrics::default(),
        )
        .await;
        let id = &ids[0];

        // Walk to the pinned end: 0 -> 3 -> 5 (clamped).
        move_and_settle(&mut registry, &mut surface, id, Direction::Forward).await;
        move_and_settle(&mut registry, &mut surface, id, Direction::Forward).await;
        assert_eq!(registry.get(id).unwrap().real_index(), 5);
        assert_eq!(surface.indicator(id).unwrap().active, 2);

        // The wrap animates into the clones, then snaps home unanimated.
        move_and_settle(&mut registry, &mut surface, id, Direction::Forward).await;
        let state = registry.get(id).unwrap();
        assert_eq!(state.real_index(), 0);
        assert_eq!(state.ring_index(), state.clone_padding());
        assert!(!state.pending_snap());

        let frames = surface.frames(id);
        let snap = frames.last().unwrap();
        assert!(!snap.animate);
        assert!(frames[frames.len() - 2].animate);
        assert_eq!(surface.indicator(id).unwrap().active, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn settle_after_teardown_is_guarded() {
        let source = StaticSource::new(vec![definition("row", 8)]);
        let mut surface = MemorySurface::new();
        let mut registry = CarouselRegistry::new();
        let ids = init_carousels(
            &source,
            &mut surface,
            &mut registry,
            TrackMetrics::default(),
        )
        .await;
        let id = ids[0].clone();

        assert!(move_carousel(
            &mut registry,
            &mut surface,
            &id,
            Direction::Forward,
        ));
        registry.remove(&id);

        // The scheduled completion still fires; it must do nothing.
        settle_carousel(&mut registry, &mut surface, &id);
        assert!(!registry.contains(&id));
    }
}
