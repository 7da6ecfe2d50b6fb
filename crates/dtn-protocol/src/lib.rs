//! `dtn-protocol` — connectivity and epidemic forwarding.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`contact`] | `ContactOracle` trait, `PairwiseScan` (the O(n²) scan)         |
//! | [`forward`] | `Forwarding` trait, `Flooding`, `ProbabilisticBroadcast`, the per-sender delivery sweep, name registry |
//! | [`error`]   | `ProtocolError`, `ProtocolResult<T>`                           |
//!
//! # Two-phase forwarding
//!
//! The sweep only **computes** deliveries — it reads an immutable
//! `AgentStore` and position slice and returns `Delivery` records.  Applying
//! them is the engine's job, in a separate phase, so a message advances at
//! most one hop per step and the outcome is independent of agent iteration
//! order.
//!
//! # Connectivity seam
//!
//! `ContactOracle` isolates the neighbor test behind a trait.  The shipped
//! implementation is the brute-force pairwise scan; a grid or tree index can
//! replace it later without touching the forwarding logic.

pub mod contact;
pub mod error;
pub mod forward;

#[cfg(test)]
mod tests;

pub use contact::{ContactOracle, PairwiseScan};
pub use error::{ProtocolError, ProtocolResult};
pub use forward::{Delivery, Flooding, Forwarding, ProbabilisticBroadcast, from_name, sweep};
