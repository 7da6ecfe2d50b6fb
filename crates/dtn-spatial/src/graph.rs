//! Waypoint path graph: construction, CSR adjacency, and spatial queries.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for adjacency.
//! Given a `WaypointId w`, its incident edges occupy the slice:
//!
//! ```text
//! edge_from[ wp_out_start[w] .. wp_out_start[w+1] ]
//! ```
//!
//! Undirected links are stored as two directed edges so a waypoint's
//! neighborhood is always a contiguous scan.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(x, y)` to the nearest `WaypointId`.  Used
//! during generation for k-nearest linking, and by mobility models to snap an
//! agent onto the graph.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use dtn_core::{AgentRng, EdgeId, Point2, SimRng, WaypointId};

use crate::{Field, SpatialError, SpatialResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D point with the associated
/// `WaypointId`.
#[derive(Clone)]
struct WaypointEntry {
    point: [f32; 2],
    id: WaypointId,
}

impl RTreeObject for WaypointEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for WaypointEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── PathGraph ─────────────────────────────────────────────────────────────────

/// Immutable waypoint graph shared by every mobile agent's mobility model.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`PathGraphBuilder`] or [`PathGraph::generate`].
pub struct PathGraph {
    /// Position of each waypoint.  Indexed by `WaypointId`.
    pub waypoints: Vec<Point2>,

    /// CSR row pointer.  Edges leaving waypoint `w` are at EdgeIds
    /// `wp_out_start[w] .. wp_out_start[w+1]`.  Length = `waypoint_count + 1`.
    pub wp_out_start: Vec<u32>,

    /// Source waypoint of each directed edge.
    pub edge_from: Vec<WaypointId>,

    /// Destination waypoint of each directed edge.
    pub edge_to: Vec<WaypointId>,

    spatial_idx: RTree<WaypointEntry>,
}

impl PathGraph {
    /// Generate the run's shared path graph from the field and seed.
    ///
    /// Draws `waypoint_count` uniform waypoints and links each to its
    /// `degree` nearest neighbors.  The same `(field, seed)` pair always
    /// yields the identical graph.
    ///
    /// # Errors
    ///
    /// `TooFewWaypoints` if `waypoint_count < 2` — a graph that cannot carry
    /// a single edge cannot constrain destination choice.
    pub fn generate(
        field:          Field,
        waypoint_count: usize,
        degree:         usize,
        rng:            &mut SimRng,
    ) -> SpatialResult<PathGraph> {
        if waypoint_count < 2 {
            return Err(SpatialError::TooFewWaypoints(waypoint_count));
        }

        let mut builder = PathGraphBuilder::with_capacity(waypoint_count, waypoint_count * degree);
        for _ in 0..waypoint_count {
            builder.add_waypoint(Point2 {
                x: rng.gen_range(0.0..=field.width),
                y: rng.gen_range(0.0..=field.height),
            });
        }

        // Temporary index over the drawn waypoints for k-nearest linking.
        let entries: Vec<WaypointEntry> = builder
            .waypoints
            .iter()
            .enumerate()
            .map(|(i, &p)| WaypointEntry { point: [p.x, p.y], id: WaypointId(i as u32) })
            .collect();
        let idx = RTree::bulk_load(entries);

        let mut links: Vec<(WaypointId, WaypointId)> = Vec::new();
        for (i, &p) in builder.waypoints.iter().enumerate() {
            let from = WaypointId(i as u32);
            // First neighbor returned is the waypoint itself; skip it.
            for entry in idx.nearest_neighbor_iter(&[p.x, p.y]).skip(1).take(degree) {
                let (a, b) = if from < entry.id { (from, entry.id) } else { (entry.id, from) };
                links.push((a, b));
            }
        }
        // k-nearest is not symmetric, so the same undirected link can be
        // found from both endpoints.
        links.sort_unstable();
        links.dedup();
        for (a, b) in links {
            builder.add_link(a, b);
        }

        Ok(builder.build())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Number of directed edges (twice the number of undirected links).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all edges leaving `waypoint`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, waypoint: WaypointId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.wp_out_start[waypoint.index()] as usize;
        let end   = self.wp_out_start[waypoint.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Degree of `waypoint` (number of incident directed edges).
    #[inline]
    pub fn degree(&self, waypoint: WaypointId) -> usize {
        let start = self.wp_out_start[waypoint.index()] as usize;
        let end   = self.wp_out_start[waypoint.index() + 1] as usize;
        end - start
    }

    /// Endpoint positions of `edge`.
    #[inline]
    pub fn edge_endpoints(&self, edge: EdgeId) -> (Point2, Point2) {
        (
            self.waypoints[self.edge_from[edge.index()].index()],
            self.waypoints[self.edge_to[edge.index()].index()],
        )
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The `WaypointId` nearest to `pos`, or `None` for an empty graph.
    pub fn nearest_waypoint(&self, pos: Point2) -> Option<WaypointId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }

    /// Draw a destination on the graph: a uniform fraction along a uniformly
    /// drawn edge.  Fraction 0 or 1 degenerates to a vertex, so this single
    /// rule covers both edge- and vertex-restricted destinations.
    ///
    /// Falls back to a uniform waypoint if the graph has no edges.
    pub fn random_destination(&self, rng: &mut AgentRng) -> Point2 {
        if self.edge_to.is_empty() {
            let i = rng.gen_range(0..self.waypoints.len());
            return self.waypoints[i];
        }
        let edge = EdgeId(rng.gen_range(0..self.edge_to.len() as u32));
        let (a, b) = self.edge_endpoints(edge);
        let t: f32 = rng.gen_range(0.0..=1.0);
        a.lerp(b, t)
    }
}

// ── PathGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`PathGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts waypoints and undirected links in any order.
/// `build()` sorts edges by source waypoint, constructs the CSR arrays, and
/// bulk-loads the R-tree.
///
/// # Example
///
/// ```
/// use dtn_core::Point2;
/// use dtn_spatial::PathGraphBuilder;
///
/// let mut b = PathGraphBuilder::new();
/// let a = b.add_waypoint(Point2::new(0.0, 0.0));
/// let c = b.add_waypoint(Point2::new(10.0, 0.0));
/// b.add_link(a, c);
/// let g = b.build();
/// assert_eq!(g.waypoint_count(), 2);
/// assert_eq!(g.edge_count(), 2); // undirected link → two directed edges
/// ```
pub struct PathGraphBuilder {
    waypoints: Vec<Point2>,
    raw_edges: Vec<(WaypointId, WaypointId)>,
}

impl PathGraphBuilder {
    pub fn new() -> Self {
        Self { waypoints: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of waypoints and links.
    pub fn with_capacity(waypoints: usize, links: usize) -> Self {
        Self {
            waypoints: Vec::with_capacity(waypoints),
            raw_edges: Vec::with_capacity(links * 2),
        }
    }

    /// Add a waypoint and return its `WaypointId` (sequential from 0).
    pub fn add_waypoint(&mut self, pos: Point2) -> WaypointId {
        let id = WaypointId(self.waypoints.len() as u32);
        self.waypoints.push(pos);
        id
    }

    /// Add an **undirected** link between `a` and `b` (stored as two directed
    /// edges).
    pub fn add_link(&mut self, a: WaypointId, b: WaypointId) {
        self.raw_edges.push((a, b));
        self.raw_edges.push((b, a));
    }

    pub fn waypoint_count(&self) -> usize { self.waypoints.len() }

    /// Consume the builder and produce a [`PathGraph`].
    ///
    /// Time complexity: O(E log E) for the edge sort + O(N log N) for the
    /// R-tree bulk load.
    pub fn build(self) -> PathGraph {
        let waypoint_count = self.waypoints.len();
        let edge_count = self.raw_edges.len();

        // Sort edges by source waypoint for CSR construction.
        let mut raw = self.raw_edges;
        raw.sort_unstable();

        let edge_from: Vec<WaypointId> = raw.iter().map(|&(f, _)| f).collect();
        let edge_to:   Vec<WaypointId> = raw.iter().map(|&(_, t)| t).collect();

        // Build CSR row pointer (wp_out_start).
        let mut wp_out_start = vec![0u32; waypoint_count + 1];
        for &(from, _) in &raw {
            wp_out_start[from.index() + 1] += 1;
        }
        for i in 1..=waypoint_count {
            wp_out_start[i] += wp_out_start[i - 1];
        }
        debug_assert_eq!(wp_out_start[waypoint_count] as usize, edge_count);

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<WaypointEntry> = self
            .waypoints
            .iter()
            .enumerate()
            .map(|(i, &pos)| WaypointEntry {
                point: [pos.x, pos.y],
                id: WaypointId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        PathGraph {
            waypoints: self.waypoints,
            wp_out_start,
            edge_from,
            edge_to,
            spatial_idx,
        }
    }
}

impl Default for PathGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
