//! Unit tests for dtn-agent.

use dtn_core::{AgentId, MessageId};

use crate::AgentStoreBuilder;

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn counts_and_layout() {
        let (store, rngs) = AgentStoreBuilder::new(5, 42).wired_subnet(3).build();
        assert_eq!(store.count, 8);
        assert_eq!(rngs.len(), 8);
        assert_eq!(store.range.len(), 8);
        assert!(!store.wired[4]);
        assert!(store.wired[5]);
        assert!(store.wired[7]);
    }

    #[test]
    fn wired_subnet_is_pairwise_mutual() {
        let (store, _) = AgentStoreBuilder::new(2, 0).wired_subnet(4).build();
        for i in 2..6u32 {
            for j in 2..6u32 {
                if i == j {
                    continue;
                }
                assert!(store.is_friend(AgentId(i), AgentId(j)), "{i} !~ {j}");
                assert!(store.is_friend(AgentId(j), AgentId(i)), "{j} !~ {i}");
            }
            assert!(!store.is_friend(AgentId(i), AgentId(i)), "{i} befriends itself");
        }
    }

    #[test]
    fn mobile_agents_have_no_friends() {
        let (store, _) = AgentStoreBuilder::new(3, 0).wired_subnet(2).build();
        for i in 0..3 {
            assert!(store.friends[i].is_empty());
        }
    }

    #[test]
    fn friend_lists_sorted() {
        let (store, _) = AgentStoreBuilder::new(0, 0).wired_subnet(5).build();
        for list in &store.friends {
            assert!(list.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn custom_range_applied() {
        let (store, _) = AgentStoreBuilder::new(2, 0).range(25.0).build();
        assert!(store.range.iter().all(|&r| r == 25.0));
    }
}

#[cfg(test)]
mod delivery {
    use super::*;

    #[test]
    fn deliver_is_idempotent() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).build();
        let m = MessageId(1);
        assert!(!store.has_received(AgentId(0), m));
        assert!(store.deliver(AgentId(0), m), "first delivery is new");
        assert!(!store.deliver(AgentId(0), m), "second delivery is a no-op");
        assert!(store.has_received(AgentId(0), m));
    }

    #[test]
    fn records_only_grow() {
        let (mut store, _) = AgentStoreBuilder::new(1, 0).build();
        for i in 0..10 {
            store.deliver(AgentId(0), MessageId(i));
            assert_eq!(store.received_count(AgentId(0)), i as usize + 1);
        }
        // Re-delivering everything changes nothing.
        for i in 0..10 {
            store.deliver(AgentId(0), MessageId(i));
        }
        assert_eq!(store.received_count(AgentId(0)), 10);
    }

    #[test]
    fn carriers_and_infected_counts() {
        let (mut store, _) = AgentStoreBuilder::new(4, 0).build();
        let m = MessageId(1);
        assert_eq!(store.carriers(m), 0);
        assert_eq!(store.infected_count(), 0);
        store.deliver(AgentId(0), m);
        store.deliver(AgentId(2), m);
        store.deliver(AgentId(2), MessageId(5));
        assert_eq!(store.carriers(m), 2);
        assert_eq!(store.infected_count(), 2);
    }

    #[test]
    fn known_messages_sorted_distinct() {
        let (mut store, _) = AgentStoreBuilder::new(3, 0).build();
        store.deliver(AgentId(0), MessageId(2));
        store.deliver(AgentId(1), MessageId(2));
        store.deliver(AgentId(2), MessageId(1));
        assert_eq!(store.known_messages(), vec![MessageId(1), MessageId(2)]);
    }

    #[test]
    fn messages_of_lists_held_messages() {
        let (mut store, _) = AgentStoreBuilder::new(1, 0).build();
        store.deliver(AgentId(0), MessageId(3));
        store.deliver(AgentId(0), MessageId(1));
        let mut held: Vec<MessageId> = store.messages_of(AgentId(0)).collect();
        held.sort_unstable();
        assert_eq!(held, vec![MessageId(1), MessageId(3)]);
    }
}
