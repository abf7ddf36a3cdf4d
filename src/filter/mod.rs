//! Filter pipeline
//!
//! Orchestrates the per-type display toggles, the search query, the
//! dependency slice and the isolation rule into the `{nodes, links}` subset
//! handed to the rendering layer. The pipeline owns no state: controls are
//! an explicit parameter and the snapshot is read-only.

pub mod controls;
pub mod pipeline;

// Re-export main types
pub use controls::{Controls, TypeFilters};
pub use pipeline::{apply, FilterResult};
