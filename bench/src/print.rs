//! Human-readable renderings of graphs and algorithm results.

use std::io::{self, Write};

use graph_bench_core::{Graph, ShortestPaths};

/// Distance and path to every vertex, or `No path` if unreachable.
pub fn write_paths<W: Write + ?Sized>(out: &mut W, paths: &ShortestPaths) -> io::Result<()> {
    writeln!(out, "Vertex\tDistance\tPath")?;
    for v in 0..paths.len() {
        match paths.distance_to(v) {
            None => writeln!(out, "{}\t\tNo path", v)?,
            Some(d) => {
                let path: Vec<String> = paths.path_to(v).iter().map(|p| p.to_string()).collect();
                writeln!(out, "{}\t\t{}\t\t{}", v, d, path.join(" "))?;
            }
        }
    }
    Ok(())
}

pub fn write_visited<W: Write + ?Sized>(out: &mut W, visited: &[bool]) -> io::Result<()> {
    let marked: Vec<String> = visited
        .iter()
        .enumerate()
        .filter(|(_, &seen)| seen)
        .map(|(v, _)| v.to_string())
        .collect();
    writeln!(out, "Visited vertices: {}", marked.join(" "))
}

/// Graphviz `digraph` with edge weights as labels.
pub fn write_dot<W, G>(out: &mut W, graph: &G) -> io::Result<()>
where
    W: Write + ?Sized,
    G: Graph + ?Sized,
{
    writeln!(out, "digraph G {{")?;
    for u in 0..graph.vertex_count() {
        for edge in graph.neighbors(u) {
            writeln!(out, "\t{} -> {} [label=\"{}\"];", u, edge.target, edge.weight)?;
        }
    }
    writeln!(out, "}}")
}
