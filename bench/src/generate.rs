use graph_bench_core::{Graph, VertexId, Weight};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of directed edges for `density` of the `n(n-1)` possible ones.
pub fn edge_count_for(vertex_count: usize, density: f64) -> usize {
    let max_edges = vertex_count * vertex_count.saturating_sub(1);
    (density * max_edges as f64) as usize
}

/// Fills graphs with random edges for timing runs.
///
/// Candidate edges are the unordered vertex pairs of a randomly relabeled
/// vertex set, each inserted as one directed edge from the earlier to the
/// later label. Pairs are drawn without replacement, so no (u, v) repeats,
/// and every generated graph is acyclic: Bellman-Ford never sees a negative
/// cycle here even with negative weights enabled.
#[derive(Debug, Clone, Copy)]
pub struct EdgeGenerator {
    pub max_weight: Weight,
    pub allow_negative: bool,
}

impl EdgeGenerator {
    /// Insert up to `edge_count` random edges and return how many were
    /// added. Capped at `n(n-1)/2`, the number of unordered pairs.
    pub fn populate<G, R>(&self, graph: &mut G, edge_count: usize, rng: &mut R) -> usize
    where
        G: Graph + ?Sized,
        R: Rng + ?Sized,
    {
        let n = graph.vertex_count();

        let mut labels: Vec<VertexId> = (0..n).collect();
        labels.shuffle(rng);

        let mut pairs: Vec<(VertexId, VertexId)> =
            Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                pairs.push((labels[i], labels[j]));
            }
        }

        let wanted = edge_count.min(pairs.len());
        if wanted < edge_count {
            tracing::trace!(requested = edge_count, available = pairs.len(), "edge count capped");
        }
        let (chosen, _) = pairs.partial_shuffle(rng, wanted);

        for &(u, v) in chosen.iter() {
            graph.add_edge(u, v, self.weight(rng));
        }
        wanted
    }

    /// Uniform nonzero weight in `[-max, max]` or `[1, max]`.
    fn weight<R: Rng + ?Sized>(&self, rng: &mut R) -> Weight {
        let low = if self.allow_negative { -self.max_weight } else { 1 };
        loop {
            let w = rng.random_range(low..=self.max_weight);
            if w != 0 {
                return w;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_bench_core::{bellman_ford, Representation};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn all_edges(g: &dyn Graph) -> Vec<(VertexId, VertexId, Weight)> {
        (0..g.vertex_count())
            .flat_map(move |u| g.neighbors(u).map(move |e| (u, e.target, e.weight)))
            .collect()
    }

    #[test]
    fn test_edge_count_for() {
        assert_eq!(edge_count_for(10, 0.5), 45);
        assert_eq!(edge_count_for(10, 1.0), 90);
        assert_eq!(edge_count_for(4, 0.25), 3);
        assert_eq!(edge_count_for(1, 1.0), 0);
        assert_eq!(edge_count_for(0, 1.0), 0);
    }

    #[test]
    fn test_populate_exact_count_no_duplicates() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let generator = EdgeGenerator { max_weight: 10, allow_negative: false };
        for rep in Representation::ALL {
            let mut g = rep.build(20);
            assert_eq!(generator.populate(g.as_mut(), 57, &mut rng), 57);
            let edges = all_edges(g.as_ref());
            assert_eq!(edges.len(), 57);

            let unordered: HashSet<_> = edges.iter().map(|&(u, v, _)| (u.min(v), u.max(v))).collect();
            assert_eq!(unordered.len(), 57, "each unordered pair used once");
            assert!(edges.iter().all(|&(u, v, w)| u != v && (1..=10).contains(&w)));
        }
    }

    #[test]
    fn test_populate_caps_at_unordered_pairs() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let generator = EdgeGenerator { max_weight: 5, allow_negative: false };
        let mut g = Representation::Matrix.build(6);
        let added = generator.populate(g.as_mut(), edge_count_for(6, 1.0), &mut rng);
        assert_eq!(added, 15);
        assert_eq!(g.edge_count(), 15);
    }

    #[test]
    fn test_negative_weights_nonzero_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let generator = EdgeGenerator { max_weight: 3, allow_negative: true };
        let mut g = Representation::List.build(30);
        generator.populate(g.as_mut(), 400, &mut rng);
        let weights: Vec<_> = all_edges(g.as_ref()).into_iter().map(|(_, _, w)| w).collect();
        assert!(weights.iter().all(|&w| w != 0 && (-3..=3).contains(&w)));
        assert!(weights.iter().any(|&w| w < 0));
    }

    #[test]
    fn test_generated_graphs_have_no_negative_cycle() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let generator = EdgeGenerator { max_weight: 10, allow_negative: true };
        for _ in 0..20 {
            let mut g = Representation::List.build(15);
            generator.populate(g.as_mut(), edge_count_for(15, 1.0), &mut rng);
            assert!(bellman_ford(g.as_ref(), 0).is_ok());
        }
    }

    #[test]
    fn test_same_seed_same_graph() {
        let generator = EdgeGenerator { max_weight: 10, allow_negative: true };
        let build = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut g = Representation::List.build(12);
            generator.populate(g.as_mut(), 30, &mut rng);
            all_edges(g.as_ref())
        };
        assert_eq!(build(9), build(9));
    }
}
