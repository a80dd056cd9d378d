use std::{fmt, sync::Arc, time::Duration};

use crate::catalog::Catalog;

/// Artificial delay before search responses, matching the mock backend
/// the front end was developed against.
pub const DEFAULT_SEARCH_LATENCY: Duration = Duration::from_millis(1000);

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub search_latency: Duration,
}

impl AppState {
    pub fn new(catalog: Catalog, search_latency: Duration) -> Self {
        Self {
            catalog: Arc::new(catalog),
            search_latency,
        }
    }

    /// State for tests: seeded catalog, no artificial latency.
    pub fn for_tests() -> Self {
        Self::new(Catalog::seeded(), Duration::ZERO)
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
