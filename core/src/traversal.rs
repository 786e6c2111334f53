use crate::graph::{Graph, Neighbors, VertexId};

/// Depth-first walk from `start`, calling `on_visit` the first time each
/// vertex is reached.
///
/// Keeps a stack of partially consumed neighbor iterators instead of
/// recursing, so the visitation order matches the recursive formulation
/// while long paths cannot overflow the call stack.
fn walk<G, F>(graph: &G, start: VertexId, visited: &mut [bool], mut on_visit: F)
where
    G: Graph + ?Sized,
    F: FnMut(VertexId),
{
    assert_eq!(
        visited.len(),
        graph.vertex_count(),
        "visited set has {} slots for a graph with {} vertices",
        visited.len(),
        graph.vertex_count()
    );

    let mut stack: Vec<Neighbors<'_>> = vec![graph.neighbors(start)];
    if !visited[start] {
        visited[start] = true;
        on_visit(start);
    }

    while let Some(top) = stack.last_mut() {
        match top.next() {
            Some(edge) => {
                if !visited[edge.target] {
                    visited[edge.target] = true;
                    on_visit(edge.target);
                    stack.push(graph.neighbors(edge.target));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
}

/// Mark `u` and every vertex reachable from it along directed edges.
///
/// Vertices already marked in `visited` are not entered again, so repeated
/// calls over the same set accumulate reachability. Edge weights are ignored.
///
/// # Panics
/// If `u` is out of range or `visited.len() != graph.vertex_count()`.
pub fn dfs<G: Graph + ?Sized>(graph: &G, u: VertexId, visited: &mut [bool]) {
    walk(graph, u, visited, |_| {});
}

/// Fresh visited set for a single traversal from `start`.
pub fn reachable<G: Graph + ?Sized>(graph: &G, start: VertexId) -> Vec<bool> {
    let mut visited = vec![false; graph.vertex_count()];
    dfs(graph, start, &mut visited);
    visited
}

/// Vertices reachable from `start`, in the order DFS first reaches them.
pub fn visit_order<G: Graph + ?Sized>(graph: &G, start: VertexId) -> Vec<VertexId> {
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    walk(graph, start, &mut visited, |v| order.push(v));
    order
}
