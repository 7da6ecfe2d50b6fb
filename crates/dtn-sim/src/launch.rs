//! Launch configuration: everything selectable at startup, resolved once.
//!
//! The application crate deserializes a [`LaunchConfig`] (JSON, TOML — any
//! serde format), calls [`resolve`](LaunchConfig::resolve), and gets back a
//! ready-to-run [`Sim`].  Resolution is fail-fast: an unknown variant name,
//! an empty population, or an invalid probability aborts before anything is
//! built — there is no partially started run.
//!
//! Variant selection goes through the closed name registries
//! ([`dtn_mobility::from_name`], [`dtn_protocol::from_name`]); there is no
//! reflective loading of any kind.  The monitor name and pacing delay are
//! carried here for the application to resolve — recording backends live
//! downstream of the engine.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use dtn_agent::AgentStoreBuilder;
use dtn_core::{AgentId, MessageId, SimConfig, SimRng};
use dtn_mobility::MobilityParams;
use dtn_protocol::{Forwarding, PairwiseScan};
use dtn_spatial::{Field, PathGraph};

use crate::{Sim, SimBuilder, SimError, SimResult};

/// Stream offset for the path-graph generator, so graph construction never
/// consumes draws the agents depend on.
const PATH_GRAPH_STREAM: u64 = 1;

/// The full set of launch-time choices, immutable for the run.
///
/// All fields have defaults, so a partial JSON/TOML document works:
///
/// ```json
/// { "population": 20, "range": 10.0, "infected": [0], "steps": 600 }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchConfig {
    /// Mobile population size.
    pub population: usize,
    /// Wired subnet size, appended after the mobile population.
    pub wired: usize,

    /// Field dimensions.
    pub field_width:  f32,
    pub field_height: f32,

    /// Communication radius applied to every agent.
    pub range: f32,

    /// Mobility variant name: `"random_waypoint"` or `"wired"`.
    pub mobility: String,
    /// Speed/pause draw ranges for the random-waypoint model.
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_pause: f32,
    pub max_pause: f32,

    /// Constrain destinations to a generated path graph.
    pub use_path_graph: bool,
    pub path_waypoints: usize,
    pub path_degree:    usize,

    /// Forwarding variant name: `"flooding"` or `"probabilistic"`.
    pub protocol: String,
    /// Per-delivery probability for the probabilistic variant.
    pub delivery_prob: f64,

    /// Master RNG seed.
    pub seed: u64,
    /// Total steps.
    pub steps: u64,
    /// Simulated seconds per step.
    pub step_secs: f32,

    /// Agents pre-seeded with message 1 at initialization.
    pub infected: Vec<u32>,

    /// Monitor variant name, resolved by the application
    /// (`"noop"`, `"trace"`, `"csv"`, …).
    pub monitor: String,
    /// Per-step pacing delay hint, consumed by the monitor — never by the
    /// engine.
    pub step_delay_ms: Option<u64>,
    /// Wall-clock budget for a single monitor callback, in milliseconds.
    pub monitor_budget_ms: Option<u64>,
    /// Output directory for recording monitors.
    pub output_dir: Option<String>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            population:        20,
            wired:             0,
            field_width:       100.0,
            field_height:      100.0,
            range:             10.0,
            mobility:          "random_waypoint".into(),
            min_speed:         dtn_mobility::params::MIN_SPEED,
            max_speed:         dtn_mobility::params::MAX_SPEED,
            min_pause:         dtn_mobility::params::MIN_PAUSE,
            max_pause:         dtn_mobility::params::MAX_PAUSE,
            use_path_graph:    false,
            path_waypoints:    32,
            path_degree:       3,
            protocol:          "flooding".into(),
            delivery_prob:     1.0,
            seed:              42,
            steps:             600,
            step_secs:         1.0,
            infected:          vec![0],
            monitor:           "noop".into(),
            step_delay_ms:     None,
            monitor_budget_ms: None,
            output_dir:        None,
        }
    }
}

impl LaunchConfig {
    /// The engine-facing slice of this configuration.
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            step_secs:      self.step_secs,
            total_ticks:    self.steps,
            seed:           self.seed,
            monitor_budget: self.monitor_budget_ms.map(Duration::from_millis),
        }
    }

    /// The pacing delay hint as a `Duration`, if configured.
    pub fn pace(&self) -> Option<Duration> {
        self.step_delay_ms.map(Duration::from_millis)
    }

    /// Resolve every launch choice and build the simulation.
    ///
    /// Fail-fast: the first invalid choice aborts with a [`SimError`] and
    /// nothing is constructed.
    pub fn resolve(&self) -> SimResult<Sim<Box<dyn Forwarding>, PairwiseScan>> {
        let field = Field::new(self.field_width, self.field_height);

        let graph = if self.use_path_graph {
            let mut graph_rng = SimRng::new(self.seed).child(PATH_GRAPH_STREAM);
            Some(Arc::new(PathGraph::generate(
                field,
                self.path_waypoints,
                self.path_degree,
                &mut graph_rng,
            )?))
        } else {
            None
        };

        let params = MobilityParams {
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            min_pause: self.min_pause,
            max_pause: self.max_pause,
        };
        let model = dtn_mobility::from_name(&self.mobility, field, params, graph)?;
        let protocol = dtn_protocol::from_name(&self.protocol, self.delivery_prob)?;

        let (store, rngs) = AgentStoreBuilder::new(self.population, self.seed)
            .range(self.range)
            .wired_subnet(self.wired)
            .build();

        let mut builder = SimBuilder::new(
            self.sim_config(),
            field,
            store,
            rngs,
            model,
            protocol,
            PairwiseScan,
        );
        for &agent in &self.infected {
            builder = builder.seed_message(AgentId(agent), MessageId(1));
        }
        builder.build().map_err(|e| match e {
            // Re-tag builder failures that stem from this config for clarity.
            SimError::Config(msg) => SimError::Config(format!("launch: {msg}")),
            other => other,
        })
    }
}
