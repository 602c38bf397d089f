pub mod emit;

// Re-export key components
pub use emit::{emit, emit_multiplot, expand_setting, render, split_attributes};
