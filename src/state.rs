use crate::store::ItemStore;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub store: ItemStore,
}

impl AppState {
    /// State with a fresh, empty item store
    pub fn new() -> Self {
        Self::default()
    }
}
