// mod.rs - Input data module

pub mod sequence;

// Re-export main types for convenience
pub use sequence::{TargetSequence, STDIN_PATH};
