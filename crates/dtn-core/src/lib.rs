//! `dtn-core` — foundational types for the `rust_dtn` simulation framework.
//!
//! This crate is a dependency of every other `dtn-*` crate.  It intentionally
//! has no `dtn-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`ids`]     | `AgentId`, `MessageId`, `WaypointId`, `EdgeId`      |
//! | [`point`]   | `Point2`, Euclidean distance, bounded movement      |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                     |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)           |
//! | [`error`]   | `DtnError`, `DtnResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod error;
pub mod ids;
pub mod point;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DtnError, DtnResult};
pub use ids::{AgentId, EdgeId, MessageId, WaypointId};
pub use point::Point2;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
