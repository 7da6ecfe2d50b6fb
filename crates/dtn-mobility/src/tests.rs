//! Unit tests for dtn-mobility.

use std::sync::Arc;

use dtn_core::{AgentId, AgentRng, Point2};
use dtn_spatial::{Field, PathGraphBuilder};

use crate::{
    MobilityEngine, MobilityError, MobilityModel, MobilityParams, MotionState, RandomWaypoint,
    Stationary, from_name,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn field() -> Field {
    Field::new(100.0, 100.0)
}

fn rngs(n: usize, seed: u64) -> Vec<AgentRng> {
    (0..n as u32).map(|i| AgentRng::new(seed, AgentId(i))).collect()
}

#[cfg(test)]
mod params {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(MobilityParams::default().validated().is_ok());
    }

    #[test]
    fn zero_min_speed_rejected() {
        let p = MobilityParams { min_speed: 0.0, ..Default::default() };
        assert!(matches!(
            p.validated(),
            Err(MobilityError::InvalidSpeedRange { .. })
        ));
    }

    #[test]
    fn inverted_pause_range_rejected() {
        let p = MobilityParams { min_pause: 3.0, max_pause: 1.0, ..Default::default() };
        assert!(matches!(
            p.validated(),
            Err(MobilityError::InvalidPauseRange { .. })
        ));
    }

    #[test]
    fn degenerate_single_value_ranges_allowed() {
        let p = MobilityParams {
            min_speed: 1.0,
            max_speed: 1.0,
            min_pause: 0.0,
            max_pause: 0.0,
        };
        assert!(p.validated().is_ok());
        let mut rng = AgentRng::new(0, AgentId(0));
        assert_eq!(p.draw_speed(&mut rng), 1.0);
        assert_eq!(p.draw_pause(&mut rng), 0.0);
    }
}

#[cfg(test)]
mod registry {
    use super::*;

    #[test]
    fn unknown_name_is_fatal() {
        let err = from_name("teleport", field(), MobilityParams::default(), None).err().unwrap();
        assert!(matches!(err, MobilityError::UnknownModel(name) if name == "teleport"));
    }

    #[test]
    fn wired_spawns_anchored() {
        let model = from_name("wired", field(), MobilityParams::default(), None).unwrap();
        let mut rng = AgentRng::new(1, AgentId(0));
        let state = model.spawn(&mut rng);
        assert!(state.anchored);
        assert_eq!(state.speed, 0.0);
        assert_eq!(state.pause_remaining, 0.0);
        assert_eq!(state.position, state.destination);
    }

    #[test]
    fn random_waypoint_spawns_roaming() {
        let model = from_name("random_waypoint", field(), MobilityParams::default(), None).unwrap();
        let mut rng = AgentRng::new(1, AgentId(0));
        let state = model.spawn(&mut rng);
        assert!(!state.anchored);
        assert!(state.speed >= MobilityParams::default().min_speed);
    }

    #[test]
    fn registry_validates_params() {
        let bad = MobilityParams { min_speed: -1.0, ..Default::default() };
        assert!(from_name("random_waypoint", field(), bad, None).is_err());
    }
}

#[cfg(test)]
mod random_waypoint {
    use super::*;

    #[test]
    fn position_stays_in_field() {
        let f = field();
        let model = RandomWaypoint::new(f, MobilityParams::default());
        let mut rng = AgentRng::new(42, AgentId(0));
        let mut state = model.spawn(&mut rng);
        for _ in 0..10_000 {
            model.advance(&mut state, 0.25, &mut rng);
            assert!(f.contains(state.position), "escaped to {}", state.position);
        }
    }

    #[test]
    fn drawn_speeds_and_pauses_in_range() {
        let params = MobilityParams::default();
        let model = RandomWaypoint::new(field(), params);
        let mut rng = AgentRng::new(7, AgentId(3));
        let mut state = model.spawn(&mut rng);
        for _ in 0..5_000 {
            model.advance(&mut state, 1.0, &mut rng);
            assert!(
                (params.min_speed..=params.max_speed).contains(&state.speed),
                "speed {} out of range",
                state.speed
            );
            assert!(state.pause_remaining <= params.max_pause);
            assert!(state.pause_remaining >= 0.0);
        }
    }

    #[test]
    fn no_redraw_mid_flight() {
        let model = RandomWaypoint::new(field(), MobilityParams::default());
        let mut rng = AgentRng::new(0, AgentId(0));
        let mut state = MotionState::roaming(
            Point2::new(0.0, 0.0),
            Point2::new(90.0, 0.0),
            1.0,
            0.0,
        );
        model.advance(&mut state, 1.0, &mut rng);
        // Far from the destination: the leg continues with the same draws.
        assert_eq!(state.destination, Point2::new(90.0, 0.0));
        assert_eq!(state.speed, 1.0);
        assert!((state.position.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn arrival_clamps_and_redraws_once() {
        let params = MobilityParams::default();
        let model = RandomWaypoint::new(field(), params);
        let mut rng = AgentRng::new(0, AgentId(0));
        let dest = Point2::new(2.0, 0.0);
        let mut state = MotionState::roaming(Point2::new(0.0, 0.0), dest, 1.0, 0.0);
        // Step covers 5 units but the destination is 2 away: clamp, then redraw.
        model.advance(&mut state, 5.0, &mut rng);
        assert_eq!(state.position, dest, "arrival must land exactly");
        assert_ne!(state.destination, dest, "new destination drawn on arrival");
        assert!((params.min_speed..=params.max_speed).contains(&state.speed));
        assert!((params.min_pause..=params.max_pause).contains(&state.pause_remaining));
    }

    #[test]
    fn paused_step_does_not_move() {
        let model = RandomWaypoint::new(field(), MobilityParams::default());
        let mut rng = AgentRng::new(0, AgentId(0));
        let start = Point2::new(5.0, 5.0);
        let mut state = MotionState::roaming(start, Point2::new(50.0, 50.0), 1.0, 0.3);
        // The pause expires inside this step, but the whole step is spent on it.
        model.advance(&mut state, 1.0, &mut rng);
        assert_eq!(state.position, start);
        assert_eq!(state.pause_remaining, 0.0);
        // The next step moves.
        model.advance(&mut state, 1.0, &mut rng);
        assert_ne!(state.position, start);
    }

    #[test]
    fn graph_constrained_destinations_lie_on_graph() {
        let mut b = PathGraphBuilder::new();
        let w0 = b.add_waypoint(Point2::new(0.0, 0.0));
        let w1 = b.add_waypoint(Point2::new(100.0, 0.0));
        b.add_link(w0, w1);
        let graph = Arc::new(b.build());

        let model = RandomWaypoint::with_graph(field(), MobilityParams::default(), graph);
        let mut rng = AgentRng::new(9, AgentId(0));
        let mut state = model.spawn(&mut rng);
        assert!(state.destination.y.abs() < 1e-4, "spawn destination off-graph");
        for _ in 0..2_000 {
            model.advance(&mut state, 2.0, &mut rng);
            assert!(state.destination.y.abs() < 1e-4);
            assert!((0.0..=100.0).contains(&state.destination.x));
        }
    }
}

#[cfg(test)]
mod engine {
    use super::*;

    #[test]
    fn wired_agents_anchored_mobile_roaming() {
        let f = field();
        let model = Box::new(RandomWaypoint::new(f, MobilityParams::default()));
        let wired = vec![false, false, true, true];
        let mut r = rngs(4, 42);
        let engine = MobilityEngine::spawn(model, &wired, f, &mut r);
        assert_eq!(engine.len(), 4);
        assert!(!engine.states[0].anchored);
        assert!(!engine.states[1].anchored);
        assert!(engine.states[2].anchored);
        assert!(engine.states[3].anchored);
    }

    #[test]
    fn anchored_agents_never_move() {
        let f = field();
        let model = Box::new(RandomWaypoint::new(f, MobilityParams::default()));
        let wired = vec![false, true];
        let mut r = rngs(2, 1);
        let mut engine = MobilityEngine::spawn(model, &wired, f, &mut r);
        let pinned = engine.position(AgentId(1));
        for _ in 0..500 {
            engine.step(1.0, &mut r);
        }
        assert_eq!(engine.position(AgentId(1)), pinned);
    }

    #[test]
    fn mobile_agents_do_move() {
        let f = field();
        let model = Box::new(RandomWaypoint::new(f, MobilityParams::default()));
        let wired = vec![false];
        let mut r = rngs(1, 1);
        let mut engine = MobilityEngine::spawn(model, &wired, f, &mut r);
        let start = engine.position(AgentId(0));
        for _ in 0..50 {
            engine.step(1.0, &mut r);
        }
        assert_ne!(engine.position(AgentId(0)), start);
    }

    #[test]
    fn same_seed_same_trajectories() {
        let f = field();
        let wired = vec![false; 5];

        let run = |seed: u64| {
            let model = Box::new(RandomWaypoint::new(f, MobilityParams::default()));
            let mut r = rngs(5, seed);
            let mut engine = MobilityEngine::spawn(model, &wired, f, &mut r);
            for _ in 0..200 {
                engine.step(0.5, &mut r);
            }
            engine.positions()
        };

        assert_eq!(run(99), run(99));
        assert_ne!(run(99), run(100));
    }

    #[test]
    fn stationary_model_is_fully_static() {
        let f = field();
        let model: Box<dyn MobilityModel> = Box::new(Stationary::new(f));
        let wired = vec![false; 3]; // even "mobile" agents are static under this model
        let mut r = rngs(3, 5);
        let mut engine = MobilityEngine::spawn(model, &wired, f, &mut r);
        let before = engine.positions();
        for _ in 0..100 {
            engine.step(1.0, &mut r);
        }
        assert_eq!(engine.positions(), before);
    }
}
