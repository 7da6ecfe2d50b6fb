//! Epidemic forwarding: the `Forwarding` trait, its two variants, and the
//! per-sender delivery sweep.

use dtn_agent::AgentStore;
use dtn_core::{AgentId, AgentRng, MessageId, Point2};

use crate::{ContactOracle, ProtocolError, ProtocolResult};

// ── Delivery ──────────────────────────────────────────────────────────────────

/// One message handoff computed during the sweep and applied in the barrier
/// phase: `message` is written into `to`'s delivery record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub to:      AgentId,
    pub message: MessageId,
}

// ── Forwarding ────────────────────────────────────────────────────────────────

/// The relay-admission rule of the forwarding protocol.
///
/// The sweep proposes one candidate handoff per (sender, receiver, message)
/// where the receiver lacks the message; `admit` decides whether the handoff
/// happens this step.  The coin comes from the **sender's** RNG, drawn
/// independently per candidate, so outcomes are reproducible and independent
/// of thread ordering.
pub trait Forwarding: Send + Sync + 'static {
    /// Whether one candidate handoff succeeds.
    fn admit(&self, rng: &mut AgentRng) -> bool;
}

impl<F: Forwarding + ?Sized> Forwarding for Box<F> {
    #[inline]
    fn admit(&self, rng: &mut AgentRng) -> bool {
        (**self).admit(rng)
    }
}

/// Pure epidemic flooding: every candidate handoff is admitted.
pub struct Flooding;

impl Forwarding for Flooding {
    #[inline]
    fn admit(&self, _rng: &mut AgentRng) -> bool {
        true
    }
}

/// Probabilistic broadcast: each candidate handoff is admitted with
/// probability `p`.
pub struct ProbabilisticBroadcast {
    p: f64,
}

impl ProbabilisticBroadcast {
    /// `p` must lie in `[0, 1]`.
    pub fn new(p: f64) -> ProtocolResult<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(ProtocolError::InvalidProbability(p));
        }
        Ok(Self { p })
    }

    pub fn probability(&self) -> f64 {
        self.p
    }
}

impl Forwarding for ProbabilisticBroadcast {
    #[inline]
    fn admit(&self, rng: &mut AgentRng) -> bool {
        rng.gen_bool(self.p)
    }
}

// ── Sweep ─────────────────────────────────────────────────────────────────────

/// Compute the deliveries `sender` makes this step.
///
/// Read-only over the store and positions: the sender's own record is never
/// touched, and no receiver state changes here.  Held messages are sorted
/// before iteration so the sender's coin-flip sequence does not depend on
/// hash-set internals.
pub fn sweep<C, P>(
    sender:    AgentId,
    store:     &AgentStore,
    positions: &[Point2],
    oracle:    &C,
    protocol:  &P,
    rng:       &mut AgentRng,
) -> Vec<Delivery>
where
    C: ContactOracle + ?Sized,
    P: Forwarding + ?Sized,
{
    // An empty-handed sender has nothing to push; skip the neighbor scan.
    if store.received_count(sender) == 0 {
        return Vec::new();
    }

    let mut held: Vec<MessageId> = store.messages_of(sender).collect();
    held.sort_unstable();

    let mut neighbors = Vec::new();
    oracle.neighbors(sender, store, positions, &mut neighbors);

    let mut out = Vec::new();
    for &to in &neighbors {
        for &message in &held {
            if store.has_received(to, message) {
                continue; // already infected: no handoff, no coin
            }
            if protocol.admit(rng) {
                out.push(Delivery { to, message });
            }
        }
    }
    out
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Resolve a forwarding protocol from its configuration name.
///
/// The set is closed: `"flooding"` ignores `delivery_prob`;
/// `"probabilistic"` validates it.  An unknown name is a fatal configuration
/// error.
pub fn from_name(name: &str, delivery_prob: f64) -> ProtocolResult<Box<dyn Forwarding>> {
    match name {
        "flooding" => Ok(Box::new(Flooding)),
        "probabilistic" => Ok(Box::new(ProbabilisticBroadcast::new(delivery_prob)?)),
        other => Err(ProtocolError::UnknownProtocol(other.to_string())),
    }
}
