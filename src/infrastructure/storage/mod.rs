mod temp_scratch_store;

pub use temp_scratch_store::TempDirScratchStore;
