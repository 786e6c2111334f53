use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::GraphError;
use crate::graph::{check_vertex, Graph, VertexId, Weight};

/// Total path weight. Wider than `Weight` so sums of edge weights along a
/// simple path cannot overflow.
pub type Distance = i64;

/// Distance of a vertex with no known path from the start.
pub const UNREACHABLE: Distance = Distance::MAX;

/// Single-source shortest path result: parallel per-vertex distance and
/// predecessor arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    start: VertexId,
    /// `UNREACHABLE` for vertices with no path from the start.
    pub distance: Vec<Distance>,
    /// Previous vertex on the best known path; `None` for the start and for
    /// unreachable vertices.
    pub predecessor: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    fn new(vertex_count: usize, start: VertexId) -> Self {
        let mut distance = vec![UNREACHABLE; vertex_count];
        distance[start] = 0;
        Self {
            start,
            distance,
            predecessor: vec![None; vertex_count],
        }
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn len(&self) -> usize {
        self.distance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }

    #[track_caller]
    pub fn distance_to(&self, v: VertexId) -> Option<Distance> {
        check_vertex(v, self.len());
        Some(self.distance[v]).filter(|&d| d != UNREACHABLE)
    }

    #[track_caller]
    pub fn is_reachable(&self, v: VertexId) -> bool {
        check_vertex(v, self.len());
        self.distance[v] != UNREACHABLE
    }

    /// Vertices from the start to `v`, or empty if `v` is unreachable.
    #[track_caller]
    pub fn path_to(&self, v: VertexId) -> Vec<VertexId> {
        build_path(self.start, v, &self.predecessor)
    }

    /// Relax `u → v` if it improves `v`. Returns whether it did.
    #[inline]
    fn relax(&mut self, u: VertexId, v: VertexId, weight: Weight) -> bool {
        let du = self.distance[u];
        if du == UNREACHABLE {
            return false;
        }
        match du.checked_add(Distance::from(weight)) {
            Some(candidate) if candidate < self.distance[v] => {
                self.distance[v] = candidate;
                self.predecessor[v] = Some(u);
                true
            }
            _ => false,
        }
    }
}

/// Walk predecessors from `target` back to `start`.
///
/// Returns the path in forward order, or an empty vector when the walk does
/// not end at `start` (the target is unreachable).
///
/// # Panics
/// If `target` is out of range for `predecessor`.
#[track_caller]
pub fn build_path(start: VertexId, target: VertexId, predecessor: &[Option<VertexId>]) -> Vec<VertexId> {
    check_vertex(target, predecessor.len());
    let mut path = vec![target];
    let mut current = target;
    while let Some(prev) = predecessor[current] {
        path.push(prev);
        current = prev;
        // A predecessor chain is at most n-1 links long unless it loops.
        if path.len() > predecessor.len() {
            return Vec::new();
        }
    }
    path.reverse();

    if path.first() != Some(&start) {
        return Vec::new();
    }
    path
}

/// Dijkstra's label-setting shortest paths from `start`.
///
/// Uses a binary min-heap frontier with lazy deletion: a vertex is settled
/// the first time it is popped and later entries for it are skipped, instead
/// of supporting decrease-key. Settled vertices are never relaxed again.
///
/// All weights must be non-negative. With negative edges the call still
/// returns after settling each vertex once, but the distances are not
/// guaranteed to be optimal. The start always keeps distance 0 and no
/// predecessor.
///
/// # Panics
/// If `start` is out of range.
pub fn dijkstra<G: Graph + ?Sized>(graph: &G, start: VertexId) -> ShortestPaths {
    let n = graph.vertex_count();
    check_vertex(start, n);

    let mut result = ShortestPaths::new(n, start);
    let mut settled = vec![false; n];
    let mut frontier: BinaryHeap<Reverse<(Distance, VertexId)>> = BinaryHeap::new();
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((_, u))) = frontier.pop() {
        if settled[u] {
            continue;
        }
        settled[u] = true;

        for edge in graph.neighbors(u) {
            if !settled[edge.target] && result.relax(u, edge.target, edge.weight) {
                frontier.push(Reverse((result.distance[edge.target], edge.target)));
            }
        }
    }

    result
}

/// Bellman-Ford shortest paths from `start`, tolerating negative weights.
///
/// Runs exactly `n - 1` relaxation passes followed by one verification pass.
/// Each pass visits source vertices in ascending order and their out-edges in
/// the graph's neighbor order, so predecessor choice among equal-cost paths
/// is deterministic for a given graph.
///
/// # Errors
/// `GraphError::NegativeCycle` if the verification pass can still relax an
/// edge.
///
/// # Panics
/// If `start` is out of range.
pub fn bellman_ford<G: Graph + ?Sized>(graph: &G, start: VertexId) -> Result<ShortestPaths, GraphError> {
    let n = graph.vertex_count();
    check_vertex(start, n);

    let mut result = ShortestPaths::new(n, start);

    for _ in 1..n {
        for u in 0..n {
            for edge in graph.neighbors(u) {
                result.relax(u, edge.target, edge.weight);
            }
        }
    }

    for u in 0..n {
        for edge in graph.neighbors(u) {
            if result.relax(u, edge.target, edge.weight) {
                tracing::debug!(start, from = u, to = edge.target, "negative cycle detected");
                return Err(GraphError::NegativeCycle { start });
            }
        }
    }

    Ok(result)
}
