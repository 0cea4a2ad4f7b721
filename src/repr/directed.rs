/*!
# Directed List Representations

- [`AdjArray`]: sorted, deduplicated successor arrays of a directed graph.
- [`AdjArrayNetwork`]: the same with one weight per arc, stored parallel to the successors.

Both additionally store the predecessor arrays, computed once at construction, so that
[`Predecessors`] is `O(1)` positional access as well.
*/

use super::{
    macros::{impl_list_predecessors, impl_list_successors, impl_list_weights},
    transpose,
};
use crate::{
    builder::{DirectedGraphBuilder, DirectedNetworkBuilder, GraphBuilder},
    edge::Arc,
    error::Result,
    ops::*,
    testing::test_graph_contract,
    utils::SlicedBuffer,
    vertex::Vertex,
    Weight,
};

/// A directed graph storing sorted successor and predecessor arrays
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjArray {
    out_nbs: SlicedBuffer<u32>,
    in_nbs: SlicedBuffer<u32>,
}

/// A directed network storing sorted successor arrays with parallel weights, and predecessor arrays
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjArrayNetwork {
    out_nbs: SlicedBuffer<u32>,
    weights: Vec<Weight>,
    in_nbs: SlicedBuffer<u32>,
}

impl_list_successors!(AdjArray, out_nbs);
impl_list_predecessors!(AdjArray, in_nbs);
impl Directed for AdjArray {}

impl_list_successors!(AdjArrayNetwork, out_nbs);
impl_list_predecessors!(AdjArrayNetwork, in_nbs);
impl_list_weights!(AdjArrayNetwork, out_nbs, weights);
impl Directed for AdjArrayNetwork {}

impl AdjArray {
    /// Creates the graph from already sorted and deduplicated successor slices
    pub(crate) fn from_sorted_successors(out_nbs: SlicedBuffer<u32>) -> Self {
        let in_nbs = transpose(&out_nbs);
        Self { out_nbs, in_nbs }
    }

    /// Creates a graph with vertices `0..n` and the given arcs.
    /// Duplicate arcs are merged; fails with [`GraphError::VertexNotFound`](crate::error::GraphError::VertexNotFound)
    /// if an arc references a vertex `>= n`.
    ///
    /// ```
    /// use igraphs::prelude::*;
    ///
    /// let graph = AdjArray::from_arcs(3, [(0u32, 1u32), (0, 2), (0, 1)]).unwrap();
    /// assert_eq!(graph.degree(0), 2);
    /// assert!(graph.contains_arc(Arc::from((0u32, 2u32))));
    /// assert!(!graph.contains_arc(Arc::from((2u32, 0u32))));
    /// ```
    pub fn from_arcs<I, A>(n: usize, arcs: I) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<Arc>,
    {
        let mut builder = DirectedGraphBuilder::with_capacity(n);
        builder.add_vertices(n);
        for arc in arcs {
            builder.add_arc(arc)?;
        }
        builder.build()
    }

    /// Returns the sorted successors of the vertex at `index` as raw ids.
    /// ** Panics if `index >= size` **
    pub fn successors_slice(&self, index: usize) -> &[u32] {
        &self.out_nbs[index]
    }
}

impl AdjArrayNetwork {
    /// Creates the network from already sorted and merged successor slices and aligned weights
    pub(crate) fn from_sorted_successors(out_nbs: SlicedBuffer<u32>, weights: Vec<Weight>) -> Self {
        debug_assert_eq!(out_nbs.number_of_entries(), weights.len());
        let in_nbs = transpose(&out_nbs);
        Self {
            out_nbs,
            weights,
            in_nbs,
        }
    }

    /// Creates a network with vertices `0..n` and the given `(from, to, weight)` arcs.
    /// Weights of duplicate arcs are summed.
    ///
    /// ```
    /// use igraphs::prelude::*;
    ///
    /// let network = AdjArrayNetwork::from_weighted_arcs(2, [(0, 1, 1), (0, 1, 2)]).unwrap();
    /// assert_eq!(network.weight(0, Vertex::new(1)), Ok(3));
    /// ```
    pub fn from_weighted_arcs<I>(n: usize, arcs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, u32, Weight)>,
    {
        let mut builder = DirectedNetworkBuilder::with_capacity(n);
        builder.add_vertices(n);
        for (u, v, w) in arcs {
            builder.add_arc((u, v), w)?;
        }
        builder.build()
    }

    /// Creates a network with the same arcs as `graph` where every arc has weight `weight(arc)`
    pub fn from_graph_with<G, F>(graph: &G, mut weight: F) -> Self
    where
        G: Graph,
        F: FnMut(Arc) -> Weight,
    {
        let out_nbs = SlicedBuffer::from_slices(
            (0..graph.size()).map(|u| graph.successors_of(u).map(|v| v as u32)),
        );
        let weights = (0..graph.size())
            .flat_map(|u| {
                graph
                    .successors_of(u)
                    .map(move |v| Arc::new(Vertex::from_index(u), Vertex::from_index(v)))
            })
            .map(&mut weight)
            .collect();

        Self::from_sorted_successors(out_nbs, weights)
    }

    /// Returns a network with the same arcs where the `k`th arc of `u` with weight `w` has weight
    /// `map(u, k, w)`
    pub(crate) fn map_weights<F>(&self, mut map: F) -> Self
    where
        F: FnMut(usize, usize, Weight) -> Weight,
    {
        let weights = (0..self.size())
            .flat_map(|u| self.weights_slice(u).iter().enumerate().map(move |(k, &w)| (u, k, w)))
            .map(|(u, k, w)| map(u, k, w))
            .collect();

        Self {
            out_nbs: self.out_nbs.clone(),
            weights,
            in_nbs: self.in_nbs.clone(),
        }
    }

    /// Returns the sorted successors of the vertex at `index` as raw ids.
    /// ** Panics if `index >= size` **
    pub fn successors_slice(&self, index: usize) -> &[u32] {
        &self.out_nbs[index]
    }

    /// Returns the weights of the vertex at `index`, aligned with [`AdjArrayNetwork::successors_slice`].
    /// ** Panics if `index >= size` **
    pub fn weights_slice(&self, index: usize) -> &[Weight] {
        &self.weights[self.out_nbs.range_of(index)]
    }
}

test_graph_contract!(test_adj_array, AdjArray, directed, |n, arcs| {
    AdjArray::from_arcs(n, arcs.iter()).unwrap()
});

test_graph_contract!(test_adj_array_network, AdjArrayNetwork, directed, |n, arcs| {
    AdjArrayNetwork::from_weighted_arcs(n, arcs.iter().map(|&(u, v)| (u, v, 1))).unwrap()
});
