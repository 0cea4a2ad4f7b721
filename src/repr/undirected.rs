/*!
# Undirected List Representations

- [`AdjArrayUndir`]: sorted, deduplicated neighbor arrays of an undirected graph.
- [`AdjArrayNetworkUndir`]: the same with one weight per edge, stored at both endpoints.

Every edge `{u, v}` with `u != v` is stored in the arrays of both endpoints; a self-loop `{u, u}`
is stored once. Predecessors coincide with successors.
*/

use super::macros::{impl_list_predecessors, impl_list_successors, impl_list_weights};
use crate::{
    builder::{GraphBuilder, UndirectedGraphBuilder, UndirectedNetworkBuilder},
    edge::Edge,
    error::Result,
    ops::*,
    testing::test_graph_contract,
    utils::SlicedBuffer,
    Weight,
};

/// An undirected graph storing sorted neighbor arrays
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjArrayUndir {
    nbs: SlicedBuffer<u32>,
}

/// An undirected network storing sorted neighbor arrays with parallel weights
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjArrayNetworkUndir {
    nbs: SlicedBuffer<u32>,
    weights: Vec<Weight>,
}

impl_list_successors!(AdjArrayUndir, nbs);
impl_list_predecessors!(AdjArrayUndir, nbs);
impl Undirected for AdjArrayUndir {}

impl_list_successors!(AdjArrayNetworkUndir, nbs);
impl_list_predecessors!(AdjArrayNetworkUndir, nbs);
impl_list_weights!(AdjArrayNetworkUndir, nbs, weights);
impl Undirected for AdjArrayNetworkUndir {}

impl AdjArrayUndir {
    /// Creates the graph from already sorted, deduplicated and symmetric neighbor slices
    pub(crate) fn from_sorted_neighbors(nbs: SlicedBuffer<u32>) -> Self {
        Self { nbs }
    }

    /// Creates a graph with vertices `0..n` and the given edges.
    /// Duplicate edges are merged; fails with [`GraphError::VertexNotFound`](crate::error::GraphError::VertexNotFound)
    /// if an edge references a vertex `>= n`.
    ///
    /// ```
    /// use igraphs::prelude::*;
    ///
    /// let graph = AdjArrayUndir::from_edges(3, [(0u32, 1u32), (2, 1), (1, 0)]).unwrap();
    /// assert_eq!(graph.degree(1), 2);
    /// assert_eq!(graph.number_of_edges(), 2);
    /// assert!(graph.contains_edge(Edge::from((1u32, 2u32))));
    /// ```
    pub fn from_edges<I, E>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut builder = UndirectedGraphBuilder::with_capacity(n);
        builder.add_vertices(n);
        for edge in edges {
            builder.add_edge(edge)?;
        }
        builder.build()
    }

    /// Returns the sorted neighbors of the vertex at `index` as raw ids.
    /// ** Panics if `index >= size` **
    pub fn neighbors_slice(&self, index: usize) -> &[u32] {
        &self.nbs[index]
    }
}

impl AdjArrayNetworkUndir {
    /// Creates the network from already sorted, merged and symmetric neighbor slices and aligned weights
    pub(crate) fn from_sorted_neighbors(nbs: SlicedBuffer<u32>, weights: Vec<Weight>) -> Self {
        debug_assert_eq!(nbs.number_of_entries(), weights.len());
        Self { nbs, weights }
    }

    /// Creates a network with vertices `0..n` and the given `(u, v, weight)` edges.
    /// Weights of duplicate edges are summed.
    ///
    /// ```
    /// use igraphs::prelude::*;
    ///
    /// let network = AdjArrayNetworkUndir::from_weighted_edges(2, [(0, 1, 1), (1, 0, -2)]).unwrap();
    /// assert_eq!(network.weight(0, Vertex::new(1)), Ok(-1));
    /// assert_eq!(network.weight(1, Vertex::new(0)), Ok(-1));
    /// ```
    pub fn from_weighted_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, u32, Weight)>,
    {
        let mut builder = UndirectedNetworkBuilder::with_capacity(n);
        builder.add_vertices(n);
        for (u, v, w) in edges {
            builder.add_edge((u, v), w)?;
        }
        builder.build()
    }

    /// Returns the sorted neighbors of the vertex at `index` as raw ids.
    /// ** Panics if `index >= size` **
    pub fn neighbors_slice(&self, index: usize) -> &[u32] {
        &self.nbs[index]
    }

    /// Returns the weights of the vertex at `index`, aligned with [`AdjArrayNetworkUndir::neighbors_slice`].
    /// ** Panics if `index >= size` **
    pub fn weights_slice(&self, index: usize) -> &[Weight] {
        &self.weights[self.nbs.range_of(index)]
    }
}

test_graph_contract!(test_adj_array_undir, AdjArrayUndir, undirected, |n, edges| {
    AdjArrayUndir::from_edges(n, edges.iter()).unwrap()
});

test_graph_contract!(test_adj_array_network_undir, AdjArrayNetworkUndir, undirected, |n, edges| {
    AdjArrayNetworkUndir::from_weighted_edges(n, edges.iter().map(|&(u, v)| (u, v, 1))).unwrap()
});
