//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use dtn_agent::AgentStoreBuilder;
//!
//! let (store, rngs) = AgentStoreBuilder::new(20, /*seed=*/ 42)
//!     .range(10.0)
//!     .wired_subnet(3)
//!     .build();
//!
//! assert_eq!(store.count, 23);
//! assert_eq!(rngs.len(), 23);
//! // Agents 20..23 are wired and mutual friends; 0..20 are mobile.
//! ```

use dtn_core::AgentId;

use crate::{AgentRngs, AgentStore};

/// Default communication radius, field units.
pub const DEFAULT_RANGE: f32 = 10.0;

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Mobile agents occupy indices `0..mobile`; the wired subnet (if any)
/// occupies `mobile..mobile + wired`.  Wired agents are created pairwise
/// mutually connected via their `friends` lists — connectivity the range
/// test never sees and movement never changes.
pub struct AgentStoreBuilder {
    mobile: usize,
    wired:  usize,
    seed:   u64,
    range:  f32,
}

impl AgentStoreBuilder {
    /// Create a builder for `mobile` mobile agents using `seed` as the global
    /// RNG seed.
    pub fn new(mobile: usize, seed: u64) -> Self {
        Self {
            mobile,
            wired: 0,
            seed,
            range: DEFAULT_RANGE,
        }
    }

    /// Communication radius applied to every agent.  Per-agent overrides can
    /// be written directly to `store.range` after building.
    pub fn range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    /// Append a wired subnet of `count` agents after the mobile population.
    pub fn wired_subnet(mut self, count: usize) -> Self {
        self.wired = count;
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let count = self.mobile + self.wired;

        let range = vec![self.range; count];
        let mut wired = vec![false; count];
        let mut friends: Vec<Vec<AgentId>> = vec![Vec::new(); count];

        // Wired agents: flag set, friends = every other wired agent, sorted
        // ascending (the connectivity scan binary-searches these lists).
        for i in self.mobile..count {
            wired[i] = true;
            friends[i] = (self.mobile..count)
                .filter(|&j| j != i)
                .map(|j| AgentId(j as u32))
                .collect();
        }

        let store = AgentStore::new(count, range, wired, friends);
        let rngs = AgentRngs::new(count, self.seed);

        (store, rngs)
    }
}
