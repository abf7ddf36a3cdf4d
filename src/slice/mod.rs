//! Dependency slicing
//!
//! Computes the bounded-depth neighborhood of a focused node, forward
//! and/or backward along link direction. The filter pipeline intersects
//! the rendered node set with the slice; the dimming layer consumes the
//! raw node/link sets directly.

pub mod engine;

// Re-export main types
pub use engine::{slice, FxIndexSet, SliceResult};
