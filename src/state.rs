use std::sync::Arc;

use crate::store::TaskStore;

/// Shared application dependencies, cloned into every handler. The store is
/// injected as a trait object so tests can swap in a double.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TaskStore>,
}
