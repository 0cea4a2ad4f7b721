/*!
# Transformations

Derive new graphs over the same vertices:
- [`Transform::transposed`] reverses every arc,
- [`Transform::to_undirected`] forgets the direction of every arc,
- [`Transform::to_directed`] replaces every edge by two antiparallel arcs.
*/

use super::*;
use crate::{builder::compaction::compact_neighbors, repr::transpose};

/// Copies the successors of every vertex into one slice each
fn successor_slices<G: Successors>(graph: &G) -> SlicedBuffer<u32> {
    SlicedBuffer::from_slices((0..graph.size()).map(|u| graph.successors_of(u).map(|v| v as u32)))
}

/// Structural transformations of graphs
pub trait Transform: Successors + Sized {
    /// Returns the graph in which every arc `u -> v` is replaced by `v -> u`
    ///
    /// ```
    /// use igraphs::{prelude::*, algo::*};
    ///
    /// let graph = AdjArray::from_arcs(3, [(0u32, 1u32), (0, 2)]).unwrap();
    /// let transposed = graph.transposed();
    /// assert!(transposed.contains_arc(Arc::from((2u32, 0u32))));
    /// assert_eq!(transposed.degree(0), 0);
    /// ```
    fn transposed(&self) -> AdjArray
    where
        Self: Directed,
    {
        AdjArray::from_sorted_successors(transpose(&successor_slices(self)))
    }

    /// Returns the undirected graph with an edge `{u, v}` for every arc `u -> v`.
    /// Antiparallel arcs become a single edge.
    fn to_undirected(&self) -> AdjArrayUndir
    where
        Self: Directed,
    {
        let mut neighbors = vec![Vec::new(); self.size()];
        for u in 0..self.size() {
            for v in self.successors_of(u) {
                neighbors[u].push(v as u32);
                neighbors[v].push(u as u32);
            }
        }

        AdjArrayUndir::from_sorted_neighbors(SlicedBuffer::from_slices(
            neighbors.into_iter().map(compact_neighbors),
        ))
    }

    /// Returns the directed graph with the arcs `u -> v` and `v -> u` for every edge `{u, v}`
    fn to_directed(&self) -> AdjArray
    where
        Self: Undirected,
    {
        AdjArray::from_sorted_successors(successor_slices(self))
    }
}

impl<G> Transform for G where G: Successors + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn transposed_reverses_arcs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(41);
        for n in [1u32, 10, 40] {
            let arcs = (0..3 * n)
                .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                .collect_vec();
            let graph = AdjArray::from_arcs(n as usize, arcs.iter()).unwrap();
            let transposed = graph.transposed();

            let expected = AdjArray::from_arcs(n as usize, arcs.iter().map(|&(u, v)| (v, u))).unwrap();
            assert_eq!(transposed, expected);
            assert_eq!(transposed.transposed(), graph);
        }
    }

    #[test]
    fn undirected_and_back() {
        let graph = AdjArray::from_arcs(4, [(0u32, 1u32), (1, 0), (2, 1), (3, 3)]).unwrap();
        let undirected = graph.to_undirected();

        assert_eq!(
            undirected.edges().collect_vec(),
            vec![
                Edge::from((0u32, 1u32)),
                Edge::from((1u32, 2u32)),
                Edge::from((3u32, 3u32))
            ]
        );

        let directed = undirected.to_directed();
        assert_eq!(
            directed.arcs().map(|a| (a.tail().raw(), a.head().raw())).collect_vec(),
            vec![(0, 1), (1, 0), (1, 2), (2, 1), (3, 3)]
        );
        assert_eq!(directed.to_undirected(), undirected);
    }

    #[test]
    fn closed_form_graphs() {
        let complete = CompleteGraph::new(4).unwrap().to_directed();
        assert_eq!(complete.number_of_arcs(), 12);
        assert!(!complete.contains_arc(Arc::from((2u32, 2u32))));

        assert!(EmptyGraph.transposed().is_empty());
        assert!(EmptyGraph.to_undirected().is_empty());
    }
}
