mod scratch_name;
mod transcript;
mod upload;

pub use scratch_name::ScratchName;
pub use transcript::Transcript;
pub use upload::AudioUpload;
