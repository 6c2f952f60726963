mod health;
mod transcribe;

pub use health::{health_handler, liveness_handler};
pub use transcribe::transcribe_handler;
