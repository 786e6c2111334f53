//! Fixed sample graphs run through every algorithm, for eyeballing results.

use std::io::{self, Write};

use graph_bench_core::{bellman_ford, dijkstra, reachable, Graph, Representation, VertexId, Weight};

use crate::print::{write_dot, write_paths, write_visited};

const SAMPLE_VERTICES: usize = 6;

/// Non-negative weights, for Dijkstra and DFS.
const SAMPLE_EDGES: [(VertexId, VertexId, Weight); 9] = [
    (0, 1, 7),
    (0, 2, 9),
    (0, 5, 14),
    (1, 2, 10),
    (1, 3, 15),
    (2, 3, 11),
    (2, 5, 2),
    (3, 4, 6),
    (4, 5, 9),
];

/// Mixed-sign weights without a negative cycle, for Bellman-Ford.
const SAMPLE_EDGES_NEGATIVE: [(VertexId, VertexId, Weight); 11] = [
    (0, 1, 5),
    (1, 3, 3),
    (1, 4, 9),
    (3, 4, 3),
    (3, 5, 2),
    (4, 2, -1),
    (4, 5, -5),
    (5, 2, 8),
    (5, 0, 9),
    (2, 1, -4),
    (2, 0, 3),
];

fn sample(representation: Representation, edges: &[(VertexId, VertexId, Weight)]) -> Box<dyn Graph> {
    let mut graph = representation.build(SAMPLE_VERTICES);
    for &(u, v, w) in edges {
        graph.add_edge(u, v, w);
    }
    graph
}

pub fn run_demo<W: Write + ?Sized>(out: &mut W, representation: Representation) -> io::Result<()> {
    let graph = sample(representation, &SAMPLE_EDGES);
    let graph_negative = sample(representation, &SAMPLE_EDGES_NEGATIVE);
    tracing::debug!(%representation, "running demo");

    writeln!(out, "______Dijkstra______")?;
    write_paths(out, &dijkstra(graph.as_ref(), 0))?;

    writeln!(out, "\n______Bellman-Ford______")?;
    match bellman_ford(graph_negative.as_ref(), 0) {
        Ok(paths) => write_paths(out, &paths)?,
        Err(e) => writeln!(out, "Error: {}", e)?,
    }

    writeln!(out, "\n______DFS______")?;
    write_visited(out, &reachable(graph.as_ref(), 0))?;

    writeln!(out, "\n______Graph______")?;
    write!(out, "{}", graph)?;

    writeln!(out)?;
    write_dot(out, graph.as_ref())?;
    writeln!(out)?;
    write_dot(out, graph_negative.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_text(representation: Representation) -> String {
        let mut buf = Vec::new();
        run_demo(&mut buf, representation).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_demo_output() {
        let text = demo_text(Representation::List);
        assert!(text.contains("4\t\t26\t\t0 2 3 4"), "{}", text);
        assert!(text.contains("2\t\t10\t\t0 1 3 4 2"), "{}", text);
        assert!(text.contains("Visited vertices: 0 1 2 3 4 5"));
        assert_eq!(text.matches("digraph G {").count(), 2);
        assert!(text.contains("\t4 -> 2 [label=\"-1\"];"));
    }

    #[test]
    fn test_demo_results_match_across_representations() {
        let strip = |s: String| s.split("______Graph______").next().unwrap_or_default().to_string();
        assert_eq!(strip(demo_text(Representation::Matrix)), strip(demo_text(Representation::List)));
    }
}
