//! `dtn-spatial` — field bounds and the shared waypoint path graph.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`field`]  | `Field` — the bounded rectangle all positions live in        |
//! | [`graph`]  | `PathGraph`, `PathGraphBuilder` — seed-derived waypoint graph |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                           |
//!
//! # Path graph
//!
//! The path graph is built **once per run**, deterministically from the field
//! dimensions and the run seed, and then shared read-only (via `Arc`) by every
//! mobile agent's mobility model.  It never changes after construction: the
//! only mutating handle is the builder, which is consumed by `build()`.

pub mod error;
pub mod field;
pub mod graph;


pub use error::{SpatialError, SpatialResult};
pub use field::Field;
pub use graph::{PathGraph, PathGraphBuilder};
