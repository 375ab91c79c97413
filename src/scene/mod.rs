//! Scene-level editing over the tile storage
//!
//! This module contains the editor-facing store:
//! - Loading from and serializing to layouts
//! - Layer-scoped placement and removal with autotile propagation
//! - Queries, counts and render command lists for an external renderer

/// Scene store and its lifecycle state
pub mod store;

pub use store::{SceneState, SceneStore};
