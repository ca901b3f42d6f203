use std::sync::Arc;

use axum::extract::FromRef;

use crate::{config::Config, store::ContestStore};

/// Shared handle to whichever contest store backs the running service.
pub type DynContestStore = Arc<dyn ContestStore>;

#[derive(Clone)]
pub struct AppState {
    pub store: DynContestStore,
    pub config: Config,
}

impl FromRef<AppState> for DynContestStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
