//! The connectivity oracle: which agents can a sender reach this step?

use dtn_agent::AgentStore;
use dtn_core::{AgentId, Point2};

/// Pairwise connectivity test, isolated behind a trait so the brute-force
/// scan can later be swapped for a spatial index (grid, quad-tree) without
/// touching the forwarding protocol.
///
/// An agent `b` is a neighbor of the sender `a` iff
///
/// - `b` is in `a`'s explicit friend list (wired case — unconditional,
///   range-independent), **or**
/// - the Euclidean distance between their positions is within `a`'s own
///   communication radius (mobile case).
///
/// The relation is directed: asymmetric radii give asymmetric reach.
pub trait ContactOracle: Send + Sync + 'static {
    /// Append every neighbor of `of` to `out`, in ascending `AgentId` order.
    ///
    /// `positions` is the population's position snapshot for this step,
    /// indexed by `AgentId`.  `of` itself is never included.
    fn neighbors(
        &self,
        of:        AgentId,
        store:     &AgentStore,
        positions: &[Point2],
        out:       &mut Vec<AgentId>,
    );
}

/// The brute-force O(population) per-sender scan (O(n²) per step).
///
/// Acceptable at research scale; the trait seam above is the upgrade path.
pub struct PairwiseScan;

impl ContactOracle for PairwiseScan {
    fn neighbors(
        &self,
        of:        AgentId,
        store:     &AgentStore,
        positions: &[Point2],
        out:       &mut Vec<AgentId>,
    ) {
        let pos = positions[of.index()];
        let range = store.range[of.index()];
        // Compare squared distances — one sqrt per pair adds up at n².
        let range_sq = range * range;

        for j in 0..store.count as u32 {
            let other = AgentId(j);
            if other == of {
                continue;
            }
            if store.is_friend(of, other) || pos.distance_sq(positions[other.index()]) <= range_sq
            {
                out.push(other);
            }
        }
    }
}
