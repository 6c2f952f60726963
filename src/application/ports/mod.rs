mod scratch_store;
mod transcription_engine;

pub use scratch_store::{ScratchLease, ScratchStore, ScratchStoreError};
pub use transcription_engine::{RawTranscription, TranscriptionEngine, TranscriptionError};
