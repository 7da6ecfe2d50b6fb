//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The forwarding compute phase needs `&AgentStore` (shared read access to
//! ranges, friends, and delivery records) and `&mut AgentRngs` (exclusive
//! mutable access to each sender's RNG) simultaneously.  Rust's borrow
//! checker forbids this if both live inside a single struct.  Keeping the
//! RNGs in a separate `AgentRngs` struct resolves the conflict cleanly:
//!
//! ```ignore
//! // dtn-sim step loop (simplified):
//! let store: &AgentStore = &sim.agents;
//! let deliveries: Vec<_> = sim.rngs.inner
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| sweep(AgentId(i as u32), store, &positions, .., rng))
//!     .collect();
//! ```

use rustc_hash::FxHashSet;

use dtn_core::{AgentId, AgentRng, MessageId};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to enable
/// simultaneous `&mut AgentRngs` + `&AgentStore` borrows in the compute phase.
///
/// `AgentRngs` is `Send` (the inner `SmallRng` is `Send`) but intentionally
/// not `Sync` — per-agent RNG state must never be shared between threads.
/// `par_iter_mut()` hands each worker exclusive access to its slice.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    /// The whole population's RNGs as a mutable slice (for the movement pass).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [AgentRng] {
        &mut self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let r = store.range[agent.index()];  // O(1), cache-friendly
/// ```
///
/// The delivery records are private: all mutation goes through
/// [`deliver`](Self::deliver), which only ever inserts.  Agents are created
/// once at initialization; the population never grows or shrinks mid-run.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Communication radius of each agent.  Always positive.
    pub range: Vec<f32>,

    /// `true` for wired backbone agents (anchored, statically connected).
    pub wired: Vec<bool>,

    /// Explicit neighbor lists, sorted ascending.  Populated only for wired
    /// agents; empty for mobile ones.
    pub friends: Vec<Vec<AgentId>>,

    /// Delivery records: the messages each agent has received.
    received: Vec<FxHashSet<MessageId>>,
}

impl AgentStore {
    pub(crate) fn new(count: usize, range: Vec<f32>, wired: Vec<bool>, friends: Vec<Vec<AgentId>>) -> Self {
        Self {
            count,
            range,
            wired,
            friends,
            received: vec![FxHashSet::default(); count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    // ── Connectivity helpers ──────────────────────────────────────────────

    /// `true` if `other` is in `agent`'s explicit friend list (wired case;
    /// range-independent).
    #[inline]
    pub fn is_friend(&self, agent: AgentId, other: AgentId) -> bool {
        self.friends[agent.index()].binary_search(&other).is_ok()
    }

    // ── Delivery records ──────────────────────────────────────────────────

    /// `true` if `agent` has received `message`.
    #[inline]
    pub fn has_received(&self, agent: AgentId, message: MessageId) -> bool {
        self.received[agent.index()].contains(&message)
    }

    /// Record `message` as delivered to `agent`.
    ///
    /// Returns `true` if the message was newly delivered, `false` if the
    /// agent already carried it (idempotent no-op).  There is no inverse:
    /// delivery records only grow.
    #[inline]
    pub fn deliver(&mut self, agent: AgentId, message: MessageId) -> bool {
        self.received[agent.index()].insert(message)
    }

    /// Messages currently carried by `agent`, in arbitrary order.
    ///
    /// Callers that feed RNG draws (the probabilistic sweep) must sort before
    /// iterating so the draw sequence is independent of hash-set internals.
    pub fn messages_of(&self, agent: AgentId) -> impl Iterator<Item = MessageId> + '_ {
        self.received[agent.index()].iter().copied()
    }

    /// Number of messages `agent` carries.
    #[inline]
    pub fn received_count(&self, agent: AgentId) -> usize {
        self.received[agent.index()].len()
    }

    /// Number of agents carrying `message`.
    pub fn carriers(&self, message: MessageId) -> usize {
        self.received.iter().filter(|set| set.contains(&message)).count()
    }

    /// Number of agents carrying at least one message.
    pub fn infected_count(&self) -> usize {
        self.received.iter().filter(|set| !set.is_empty()).count()
    }

    /// Every message carried by anyone, sorted ascending.
    ///
    /// Messages only enter the system at initialization and through
    /// deliveries, so this is the run's message universe as of now.
    pub fn known_messages(&self) -> Vec<MessageId> {
        let mut all: Vec<MessageId> = self
            .received
            .iter()
            .flat_map(|set| set.iter().copied())
            .collect();
        all.sort_unstable();
        all.dedup();
        all
    }
}
