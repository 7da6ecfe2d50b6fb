//! `dtn-agent` — Structure-of-Arrays agent storage for the `rust_dtn` framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA arrays), `AgentRngs` (per-agent RNG)  |
//! | [`builder`] | `AgentStoreBuilder` (fluent construction)               |
//!
//! # Delivery records
//!
//! Each agent carries a set of delivered [`MessageId`][dtn_core::MessageId]s.
//! The set is **monotone**: [`AgentStore::deliver`] only inserts, nothing
//! removes, so "once received, always received" holds by construction rather
//! than by convention.

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use store::{AgentRngs, AgentStore};
