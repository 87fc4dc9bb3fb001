use crate::store::ItemStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ItemStore,
}

impl AppState {
    pub fn new(store: ItemStore) -> Self {
        Self { store }
    }
}
