use std::fmt;
use std::iter::Enumerate;
use std::mem::size_of;
use std::slice;

/// Vertex index in `[0, vertex_count)`.
pub type VertexId = usize;

/// Edge weight. Zero and negative weights are legal edges.
pub type Weight = i32;

/// A directed, weighted out-edge as seen from its source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub target: VertexId,
    pub weight: Weight,
}

/// Storage-independent view of a directed, weighted graph over a fixed
/// vertex set.
///
/// Algorithms read graphs only through `neighbors`, so they run unchanged
/// over any implementation, including `dyn Graph`.
///
/// Every method taking a vertex index panics if the index is not below
/// `vertex_count()`.
pub trait Graph: fmt::Display {
    fn vertex_count(&self) -> usize;

    /// Number of distinct (source, target) pairs currently stored.
    fn edge_count(&self) -> usize;

    /// Insert the directed edge `u → v`. Re-inserting an existing pair
    /// replaces its weight (last write wins).
    fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight);

    /// True iff an edge `u → v` exists.
    fn is_connected(&self, u: VertexId, v: VertexId) -> bool;

    /// Out-edges of `u` in representation order: ascending target for the
    /// matrix, insertion order for adjacency lists.
    fn neighbors(&self, u: VertexId) -> Neighbors<'_>;

    /// Remove every edge. The vertex count is unchanged.
    fn clear(&mut self);

    /// Approximate heap bytes held by the edge storage.
    fn memory_usage(&self) -> usize;
}

#[track_caller]
pub(crate) fn check_vertex(v: VertexId, n: usize) {
    assert!(v < n, "vertex {} out of range for graph with {} vertices", v, n);
}

/// Iterator over the out-edges of one vertex. Borrows the graph storage
/// directly, nothing is allocated per call.
pub struct Neighbors<'a> {
    inner: NeighborsInner<'a>,
}

enum NeighborsInner<'a> {
    Row(Enumerate<slice::Iter<'a, Option<Weight>>>),
    List(slice::Iter<'a, Edge>),
}

impl Iterator for Neighbors<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        match &mut self.inner {
            NeighborsInner::Row(cells) => cells.find_map(|(target, cell)| {
                cell.map(|weight| Edge { target, weight })
            }),
            NeighborsInner::List(edges) => edges.next().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            NeighborsInner::Row(cells) => (0, cells.size_hint().1),
            NeighborsInner::List(edges) => edges.size_hint(),
        }
    }
}

/// Dense storage: one `n × n` row-major cell array, `None` meaning no edge.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<Option<Weight>>,
    edges: usize,
}

impl AdjacencyMatrix {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            size: vertex_count,
            cells: vec![None; vertex_count * vertex_count],
            edges: 0,
        }
    }

    fn row(&self, u: VertexId) -> &[Option<Weight>] {
        &self.cells[u * self.size..(u + 1) * self.size]
    }
}

impl Graph for AdjacencyMatrix {
    fn vertex_count(&self) -> usize {
        self.size
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) {
        check_vertex(u, self.size);
        check_vertex(v, self.size);
        let cell = &mut self.cells[u * self.size + v];
        if cell.is_none() {
            self.edges += 1;
        }
        *cell = Some(weight);
    }

    fn is_connected(&self, u: VertexId, v: VertexId) -> bool {
        check_vertex(u, self.size);
        check_vertex(v, self.size);
        self.cells[u * self.size + v].is_some()
    }

    fn neighbors(&self, u: VertexId) -> Neighbors<'_> {
        check_vertex(u, self.size);
        Neighbors {
            inner: NeighborsInner::Row(self.row(u).iter().enumerate()),
        }
    }

    fn clear(&mut self) {
        self.cells.fill(None);
        self.edges = 0;
    }

    fn memory_usage(&self) -> usize {
        self.cells.capacity() * size_of::<Option<Weight>>()
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in 0..self.size {
            let mut sep = "";
            for cell in self.row(u) {
                match cell {
                    Some(w) => write!(f, "{}{}", sep, w)?,
                    None => write!(f, "{}.", sep)?,
                }
                sep = " ";
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Sparse storage: one out-edge vector per vertex, in insertion order.
#[derive(Debug, Clone)]
pub struct AdjacencyLists {
    lists: Vec<Vec<Edge>>,
}

impl AdjacencyLists {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            lists: vec![Vec::new(); vertex_count],
        }
    }
}

impl Graph for AdjacencyLists {
    fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    fn edge_count(&self) -> usize {
        self.lists.iter().map(|l| l.len()).sum()
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) {
        check_vertex(u, self.lists.len());
        check_vertex(v, self.lists.len());
        let list = &mut self.lists[u];
        // Overwrite in place so the pair keeps its enumeration position.
        match list.iter_mut().find(|e| e.target == v) {
            Some(existing) => existing.weight = weight,
            None => list.push(Edge { target: v, weight }),
        }
    }

    fn is_connected(&self, u: VertexId, v: VertexId) -> bool {
        check_vertex(u, self.lists.len());
        check_vertex(v, self.lists.len());
        self.lists[u].iter().any(|e| e.target == v)
    }

    fn neighbors(&self, u: VertexId) -> Neighbors<'_> {
        check_vertex(u, self.lists.len());
        Neighbors {
            inner: NeighborsInner::List(self.lists[u].iter()),
        }
    }

    fn clear(&mut self) {
        for list in &mut self.lists {
            list.clear();
        }
    }

    fn memory_usage(&self) -> usize {
        let heads = self.lists.capacity() * size_of::<Vec<Edge>>();
        let edges: usize = self
            .lists
            .iter()
            .map(|l| l.capacity() * size_of::<Edge>())
            .sum();
        heads + edges
    }
}

impl fmt::Display for AdjacencyLists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, list) in self.lists.iter().enumerate() {
            write!(f, "{}:", u)?;
            for e in list {
                write!(f, " ({}, w={})", e.target, e.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Which storage backs a graph built at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    Matrix,
    List,
}

impl Representation {
    pub const ALL: [Representation; 2] = [Representation::Matrix, Representation::List];

    /// Build an empty graph with this storage.
    pub fn build(self, vertex_count: usize) -> Box<dyn Graph> {
        match self {
            Representation::Matrix => Box::new(AdjacencyMatrix::new(vertex_count)),
            Representation::List => Box::new(AdjacencyLists::new(vertex_count)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Representation::Matrix => "matrix",
            Representation::List => "list",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
