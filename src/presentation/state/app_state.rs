use std::sync::Arc;

use crate::application::ports::{ScratchStore, TranscriptionEngine};
use crate::application::services::RelayService;

pub struct AppState<E, S>
where
    E: TranscriptionEngine,
    S: ScratchStore,
{
    pub relay_service: Arc<RelayService<E, S>>,
    pub max_upload_bytes: usize,
}

impl<E, S> Clone for AppState<E, S>
where
    E: TranscriptionEngine,
    S: ScratchStore,
{
    fn clone(&self) -> Self {
        Self {
            relay_service: Arc::clone(&self.relay_service),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
