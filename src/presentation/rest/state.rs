use std::ops::Deref;
use std::sync::Arc;

use axum::extract::FromRef;

use crate::application::enrichment::Queue;
pub use crate::infra::state::SongService;
use crate::infra::state::AppState;

#[derive(Clone)]
pub struct ArcAppState(Arc<AppState>);

impl Deref for ArcAppState {
    type Target = AppState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ArcAppState {
    pub const fn new(state: Arc<AppState>) -> Self {
        Self(state)
    }
}

impl FromRef<ArcAppState> for SongService {
    fn from_ref(input: &ArcAppState) -> Self {
        input.song_service.clone()
    }
}

impl FromRef<ArcAppState> for Queue {
    fn from_ref(input: &ArcAppState) -> Self {
        input.enrichment.clone()
    }
}
