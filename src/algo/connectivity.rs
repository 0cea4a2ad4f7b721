/*!
# Connectivity

- [`Connectivity::strongly_connected_components_kosaraju`] condenses every strongly connected
  component of a directed graph into a single vertex.
- [`Connectivity::connected_components`] does the same for the components of an undirected graph.

Both return the condensed graph together with a [`VertexMap`] from every original vertex to the
vertex representing its component. Components are numbered in order of discovery.

Kosaraju's algorithm runs two depth-first passes. The first records the vertices in post-order
over the whole graph. The second walks the transposed graph, taking start vertices in reverse
post-order; each of its trees is exactly one strongly connected component.
*/

use tracing::{instrument, trace};

use super::*;
use crate::builder::compaction::compact_neighbors;

/// Maps every vertex to its component by running one depth-first search per unvisited vertex of
/// `graph`, taking start vertices from `starts`
fn assign_components<G, I>(graph: &G, starts: I) -> (Vec<u32>, usize)
where
    G: Successors,
    I: IntoIterator<Item = usize>,
{
    let mut components = vec![u32::MAX; graph.size()];
    let mut visited = vertex_bitset(graph.size());
    let mut count = 0;

    for start in starts {
        if visited.get_bit(start as u32) {
            continue;
        }
        for v in DepthFirstSearch::new(graph, start, &mut visited).filter_map(DfsEvent::entered) {
            components[v.index()] = count as u32;
        }
        count += 1;
    }

    (components, count)
}

fn component_map(components: &[u32]) -> VertexMap {
    VertexMap::from_fn(components.len(), |v| Vertex::new(components[v.index()]))
}

/// Returns all vertices in depth-first post-order, restarting at the smallest unvisited vertex
fn post_order<G: Successors>(graph: &G) -> Vec<usize> {
    let mut order = Vec::with_capacity(graph.size());
    if graph.is_empty() {
        return order;
    }

    let mut search = DepthFirstSearch::new(graph, 0, vertex_bitset(graph.size()));
    loop {
        order.extend(search.by_ref().filter_map(DfsEvent::exited).map(Vertex::index));
        if !search.try_restart_at_unvisited() {
            break;
        }
    }
    order
}

/// Components of directed and undirected graphs
pub trait Connectivity: Successors + Sized {
    /// Computes the strongly connected components with Kosaraju's algorithm.
    ///
    /// Returns the condensation, with an arc between two components whenever some arc of `self`
    /// crosses from the first to the second, and the map from every vertex to its component.
    ///
    /// ```
    /// use igraphs::{prelude::*, algo::*};
    ///
    /// let graph = AdjArray::from_arcs(4, [(0u32, 1u32), (1, 0), (1, 2), (2, 3), (3, 2)]).unwrap();
    /// let (condensed, components) = graph.strongly_connected_components_kosaraju();
    /// assert_eq!(condensed.size(), 2);
    /// assert_eq!(components.get(Vertex::new(0)), components.get(Vertex::new(1)));
    /// assert_ne!(components.get(Vertex::new(1)), components.get(Vertex::new(2)));
    /// ```
    #[instrument(level = "debug", skip_all)]
    fn strongly_connected_components_kosaraju(&self) -> (AdjArray, VertexMap)
    where
        Self: Directed,
    {
        let order = post_order(self);
        let transposed = self.transposed();
        let (components, count) = assign_components(&transposed, order.into_iter().rev());
        trace!(components = count, "strongly connected components");

        let mut successors = vec![Vec::new(); count];
        for u in 0..self.size() {
            let cu = components[u];
            for v in self.successors_of(u) {
                if components[v] != cu {
                    successors[cu as usize].push(components[v]);
                }
            }
        }

        let condensed = AdjArray::from_sorted_successors(SlicedBuffer::from_slices(
            successors.into_iter().map(compact_neighbors),
        ));
        (condensed, component_map(&components))
    }

    /// Computes the connected components of an undirected graph.
    ///
    /// Returns a graph with one isolated vertex per component and the map from every vertex to its
    /// component. Components are numbered by their smallest vertex.
    #[instrument(level = "debug", skip_all)]
    fn connected_components(&self) -> (AdjArrayUndir, VertexMap)
    where
        Self: Undirected,
    {
        let (components, count) = assign_components(self, 0..self.size());
        trace!(components = count, "connected components");

        let isolated = SlicedBuffer::from_slices((0..count).map(|_| std::iter::empty::<u32>()));
        (AdjArrayUndir::from_sorted_neighbors(isolated), component_map(&components))
    }
}

impl<G> Connectivity for G where G: Successors + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn v(raw: u32) -> Vertex {
        Vertex::new(raw)
    }

    /// Two vertices are strongly connected iff each reaches the other
    fn reachability(graph: &AdjArray) -> Vec<VertexBitSet> {
        graph
            .vertices()
            .map(|u| {
                let mut reached = vertex_bitset(graph.size());
                for w in graph.bfs(u).unwrap() {
                    reached.set_bit(w.raw());
                }
                reached
            })
            .collect()
    }

    #[test]
    fn two_disjoint_cycles() {
        for k in [1u32, 2, 5, 50] {
            let arcs = (0..k).flat_map(|i| [(i, (i + 1) % k), (k + i, k + (i + 1) % k)]);
            let graph = AdjArray::from_arcs(2 * k as usize, arcs).unwrap();

            let (condensed, components) = graph.strongly_connected_components_kosaraju();
            assert_eq!(condensed.size(), 2);
            assert_eq!(condensed.number_of_arcs(), 0);

            let sizes = components.iter().map(|(_, c)| c).counts();
            assert_eq!(sizes.len(), 2);
            assert!(sizes.values().all(|&s| s == k as usize));
        }
    }

    #[test]
    fn condensation() {
        // {0, 1, 2} -> {3, 4} -> {5}, {0, 1, 2} -> {5}
        let graph = AdjArray::from_arcs(
            6,
            [(0u32, 1u32), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3), (4, 5), (1, 5), (5, 5)],
        )
        .unwrap();
        let (condensed, components) = graph.strongly_connected_components_kosaraju();

        let c = |u: u32| components.get(v(u)).unwrap();
        assert_eq!(condensed.size(), 3);
        assert!(c(0) == c(1) && c(1) == c(2));
        assert_eq!(c(3), c(4));
        assert!(c(0) != c(3) && c(3) != c(5) && c(0) != c(5));

        let arcs = condensed.arcs().collect_vec();
        assert_eq!(arcs.len(), 3);
        assert!(arcs.contains(&Arc::new(c(0), c(3))));
        assert!(arcs.contains(&Arc::new(c(3), c(5))));
        assert!(arcs.contains(&Arc::new(c(0), c(5))));
    }

    #[test]
    fn components_match_reachability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(51);

        for _ in 0..20 {
            let n = rng.random_range(1..40u32);
            let arcs = (0..rng.random_range(0..2 * n))
                .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                .collect_vec();
            let graph = AdjArray::from_arcs(n as usize, arcs).unwrap();
            let reached = reachability(&graph);
            let (condensed, components) = graph.strongly_connected_components_kosaraju();

            for (u, w) in (0..n).cartesian_product(0..n) {
                let strongly = reached[u as usize].get_bit(w) && reached[w as usize].get_bit(u);
                assert_eq!(components.get(v(u)) == components.get(v(w)), strongly);
            }

            // the condensation of a graph is acyclic
            assert!(condensed.is_acyclic());
        }
    }

    #[test]
    fn connected_components() {
        let graph = AdjArrayUndir::from_edges(7, [(0u32, 3u32), (3, 5), (1, 4), (6, 6)]).unwrap();
        let (condensed, components) = graph.connected_components();

        assert_eq!(condensed.size(), 4);
        assert_eq!(condensed.number_of_edges(), 0);
        assert_eq!(
            components.values().iter().map(|c| c.raw()).collect_vec(),
            vec![0, 1, 2, 0, 1, 0, 3]
        );

        let (condensed, components) = EmptyGraph.connected_components();
        assert!(condensed.is_empty() && components.is_empty());
    }
}
