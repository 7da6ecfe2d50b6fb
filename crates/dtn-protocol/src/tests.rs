//! Unit tests for dtn-protocol.

use dtn_agent::{AgentStore, AgentStoreBuilder};
use dtn_core::{AgentId, AgentRng, MessageId, Point2};

use crate::{
    ContactOracle, Delivery, Flooding, PairwiseScan, ProbabilisticBroadcast, ProtocolError,
    from_name, sweep,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn scan(of: u32, store: &AgentStore, positions: &[Point2]) -> Vec<AgentId> {
    let mut out = Vec::new();
    PairwiseScan.neighbors(AgentId(of), store, positions, &mut out);
    out
}

#[cfg(test)]
mod contact {
    use super::*;

    #[test]
    fn range_test_uses_sender_radius() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).build();
        store.range[0] = 10.0;
        store.range[1] = 1.0;
        let positions = vec![Point2::new(0.0, 0.0), Point2::new(5.0, 0.0)];

        // Agent 0 reaches agent 1; agent 1 cannot reach back.
        assert_eq!(scan(0, &store, &positions), vec![AgentId(1)]);
        assert!(scan(1, &store, &positions).is_empty());
    }

    #[test]
    fn boundary_distance_is_in_range() {
        let (store, _) = AgentStoreBuilder::new(2, 0).range(10.0).build();
        let positions = vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)];
        assert_eq!(scan(0, &store, &positions), vec![AgentId(1)]);
    }

    #[test]
    fn out_of_range_not_neighbor() {
        let (store, _) = AgentStoreBuilder::new(2, 0).range(10.0).build();
        let positions = vec![Point2::new(0.0, 0.0), Point2::new(10.5, 0.0)];
        assert!(scan(0, &store, &positions).is_empty());
    }

    #[test]
    fn friends_connected_regardless_of_distance() {
        // Two wired agents placed absurdly far apart.
        let (store, _) = AgentStoreBuilder::new(0, 0).range(1.0).wired_subnet(2).build();
        let positions = vec![Point2::new(0.0, 0.0), Point2::new(1.0e6, 1.0e6)];
        assert_eq!(scan(0, &store, &positions), vec![AgentId(1)]);
        assert_eq!(scan(1, &store, &positions), vec![AgentId(0)]);
    }

    #[test]
    fn self_never_included() {
        let (store, _) = AgentStoreBuilder::new(3, 0).range(100.0).build();
        let positions = vec![Point2::new(0.0, 0.0); 3];
        let n = scan(1, &store, &positions);
        assert_eq!(n, vec![AgentId(0), AgentId(2)]);
    }

    #[test]
    fn neighbors_ascending() {
        let (store, _) = AgentStoreBuilder::new(6, 0).range(100.0).build();
        let positions = vec![Point2::new(0.0, 0.0); 6];
        let n = scan(3, &store, &positions);
        assert!(n.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(n.len(), 5);
    }
}

#[cfg(test)]
mod variants {
    use super::*;
    use crate::Forwarding;

    #[test]
    fn flooding_always_admits() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..100 {
            assert!(Flooding.admit(&mut rng));
        }
    }

    #[test]
    fn probability_validated() {
        assert!(ProbabilisticBroadcast::new(0.0).is_ok());
        assert!(ProbabilisticBroadcast::new(1.0).is_ok());
        assert!(matches!(
            ProbabilisticBroadcast::new(1.5),
            Err(ProtocolError::InvalidProbability(_))
        ));
        assert!(matches!(
            ProbabilisticBroadcast::new(-0.1),
            Err(ProtocolError::InvalidProbability(_))
        ));
    }

    #[test]
    fn registry_closed_set() {
        assert!(from_name("flooding", 0.0).is_ok());
        assert!(from_name("probabilistic", 0.5).is_ok());
        assert!(matches!(
            from_name("probabilistic", 2.0),
            Err(ProtocolError::InvalidProbability(_))
        ));
        assert!(matches!(
            from_name("prophet", 0.5),
            Err(ProtocolError::UnknownProtocol(name)) if name == "prophet"
        ));
    }
}

#[cfg(test)]
mod sweeping {
    use super::*;

    #[test]
    fn delivers_to_uninfected_neighbor() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).range(10.0).build();
        store.deliver(AgentId(0), MessageId(1));
        let positions = vec![Point2::new(0.0, 0.0), Point2::new(5.0, 0.0)];
        let mut rng = AgentRng::new(0, AgentId(0));

        let out = sweep(AgentId(0), &store, &positions, &PairwiseScan, &Flooding, &mut rng);
        assert_eq!(out, vec![Delivery { to: AgentId(1), message: MessageId(1) }]);
    }

    #[test]
    fn infected_neighbor_skipped() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).range(10.0).build();
        store.deliver(AgentId(0), MessageId(1));
        store.deliver(AgentId(1), MessageId(1));
        let positions = vec![Point2::new(0.0, 0.0), Point2::new(5.0, 0.0)];
        let mut rng = AgentRng::new(0, AgentId(0));

        let out = sweep(AgentId(0), &store, &positions, &PairwiseScan, &Flooding, &mut rng);
        assert!(out.is_empty());
    }

    #[test]
    fn empty_handed_sender_sweeps_nothing() {
        let (store, _) = AgentStoreBuilder::new(3, 0).range(100.0).build();
        let positions = vec![Point2::new(0.0, 0.0); 3];
        let mut rng = AgentRng::new(0, AgentId(0));
        let out = sweep(AgentId(0), &store, &positions, &PairwiseScan, &Flooding, &mut rng);
        assert!(out.is_empty());
    }

    #[test]
    fn sender_record_untouched() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).range(10.0).build();
        store.deliver(AgentId(0), MessageId(1));
        let positions = vec![Point2::new(0.0, 0.0), Point2::new(5.0, 0.0)];
        let mut rng = AgentRng::new(0, AgentId(0));
        let _ = sweep(AgentId(0), &store, &positions, &PairwiseScan, &Flooding, &mut rng);
        assert_eq!(store.received_count(AgentId(0)), 1);
        assert_eq!(store.received_count(AgentId(1)), 0, "sweep must not apply");
    }

    #[test]
    fn multiple_messages_fan_out() {
        let (mut store, _) = AgentStoreBuilder::new(3, 0).range(100.0).build();
        store.deliver(AgentId(0), MessageId(1));
        store.deliver(AgentId(0), MessageId(2));
        store.deliver(AgentId(2), MessageId(2)); // agent 2 already has one of them
        let positions = vec![Point2::new(0.0, 0.0); 3];
        let mut rng = AgentRng::new(0, AgentId(0));

        let out = sweep(AgentId(0), &store, &positions, &PairwiseScan, &Flooding, &mut rng);
        assert_eq!(
            out,
            vec![
                Delivery { to: AgentId(1), message: MessageId(1) },
                Delivery { to: AgentId(1), message: MessageId(2) },
                Delivery { to: AgentId(2), message: MessageId(1) },
            ]
        );
    }

    #[test]
    fn probabilistic_sweep_reproducible() {
        let run = || {
            let (mut store, _) = AgentStoreBuilder::new(10, 0).range(100.0).build();
            store.deliver(AgentId(0), MessageId(1));
            let positions = vec![Point2::new(0.0, 0.0); 10];
            let mut rng = AgentRng::new(42, AgentId(0));
            let protocol = ProbabilisticBroadcast::new(0.5).unwrap();
            sweep(AgentId(0), &store, &positions, &PairwiseScan, &protocol, &mut rng)
        };
        assert_eq!(run(), run(), "same seed must give the same handoffs");
    }
}
