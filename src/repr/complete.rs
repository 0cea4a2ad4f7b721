/*!
# Closed-Form Graphs

- [`CompleteGraph`]: every vertex is adjacent to every other vertex but not to itself.
- [`CompleteNetwork`]: a complete graph in which every edge carries the same weight.
- [`EmptyGraph`]: the graph without vertices.

Neither allocates storage: all queries are answered in constant time from the number of vertices.
*/

use crate::{
    error::{GraphError, Result},
    ops::*,
    testing::test_graph_contract,
    vertex::MAX_VERTICES,
    Weight,
};

/// The complete undirected graph `K_n` without self-loops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompleteGraph {
    size: usize,
}

/// The complete undirected graph `K_n` where every edge has the same weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompleteNetwork {
    graph: CompleteGraph,
    weight: Weight,
}

/// The graph without any vertices. Every positional query fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyGraph;

impl CompleteGraph {
    /// Creates `K_n`.
    /// Fails with [`GraphError::InvalidArgument`] if `n` exceeds [`MAX_VERTICES`].
    ///
    /// ```
    /// use igraphs::prelude::*;
    ///
    /// let graph = CompleteGraph::new(4).unwrap();
    /// assert_eq!(graph.degree(2), 3);
    /// assert_eq!(graph.successor(2, 2), Ok(Vertex::new(3)));
    /// assert_eq!(graph.number_of_edges(), 6);
    /// ```
    pub fn new(n: usize) -> Result<Self> {
        if n > MAX_VERTICES {
            return Err(GraphError::InvalidArgument(format!(
                "a complete graph can have at most {MAX_VERTICES} vertices, but {n} were requested"
            )));
        }
        Ok(Self { size: n })
    }

    /// Maps the `k`th other vertex of `index` to its position by skipping `index` itself
    #[inline(always)]
    fn other(&self, index: usize, k: usize) -> usize {
        assert!(index < self.size && k + 1 < self.size);
        if k < index {
            k
        } else {
            k + 1
        }
    }
}

impl CompleteNetwork {
    /// Creates `K_n` where every edge has weight `weight`.
    /// Fails with [`GraphError::InvalidArgument`] if `n` exceeds [`MAX_VERTICES`].
    pub fn new(n: usize, weight: Weight) -> Result<Self> {
        Ok(Self {
            graph: CompleteGraph::new(n)?,
            weight,
        })
    }

    /// Returns the weight shared by all edges
    pub fn uniform_weight(&self) -> Weight {
        self.weight
    }
}

impl VertexSet for CompleteGraph {
    fn size(&self) -> usize {
        self.size
    }
}

impl Successors for CompleteGraph {
    fn degree(&self, index: usize) -> usize {
        assert!(index < self.size);
        self.size - 1
    }

    fn ith_successor(&self, index: usize, k: usize) -> usize {
        self.other(index, k)
    }

    fn successors_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        assert!(index < self.size);
        (0..self.size).filter(move |&v| v != index)
    }

    fn find_successor(&self, index: usize, neighbor: usize) -> Option<usize> {
        assert!(index < self.size);
        if neighbor >= self.size || neighbor == index {
            None
        } else if neighbor < index {
            Some(neighbor)
        } else {
            Some(neighbor - 1)
        }
    }
}

impl Predecessors for CompleteGraph {
    fn in_degree(&self, index: usize) -> usize {
        self.degree(index)
    }

    fn ith_predecessor(&self, index: usize, k: usize) -> usize {
        self.other(index, k)
    }
}

impl Undirected for CompleteGraph {
    fn number_of_edges(&self) -> usize {
        self.size * self.size.saturating_sub(1) / 2
    }
}

impl VertexSet for CompleteNetwork {
    fn size(&self) -> usize {
        self.graph.size()
    }
}

impl Successors for CompleteNetwork {
    fn degree(&self, index: usize) -> usize {
        self.graph.degree(index)
    }

    fn ith_successor(&self, index: usize, k: usize) -> usize {
        self.graph.ith_successor(index, k)
    }

    fn successors_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph.successors_of(index)
    }

    fn find_successor(&self, index: usize, neighbor: usize) -> Option<usize> {
        self.graph.find_successor(index, neighbor)
    }
}

impl Predecessors for CompleteNetwork {
    fn in_degree(&self, index: usize) -> usize {
        self.graph.in_degree(index)
    }

    fn ith_predecessor(&self, index: usize, k: usize) -> usize {
        self.graph.ith_predecessor(index, k)
    }
}

impl SuccessorsWeight for CompleteNetwork {
    fn ith_weight(&self, index: usize, k: usize) -> Weight {
        self.graph.other(index, k);
        self.weight
    }
}

impl Undirected for CompleteNetwork {
    fn number_of_edges(&self) -> usize {
        self.graph.number_of_edges()
    }
}

impl VertexSet for EmptyGraph {
    fn size(&self) -> usize {
        0
    }
}

impl Successors for EmptyGraph {
    fn degree(&self, index: usize) -> usize {
        panic!("position {index} is out of range for the empty graph")
    }

    fn ith_successor(&self, index: usize, _k: usize) -> usize {
        panic!("position {index} is out of range for the empty graph")
    }
}

impl Predecessors for EmptyGraph {
    fn in_degree(&self, index: usize) -> usize {
        panic!("position {index} is out of range for the empty graph")
    }

    fn ith_predecessor(&self, index: usize, _k: usize) -> usize {
        panic!("position {index} is out of range for the empty graph")
    }
}

impl SuccessorsWeight for EmptyGraph {
    fn ith_weight(&self, index: usize, _k: usize) -> Weight {
        panic!("position {index} is out of range for the empty graph")
    }
}

impl Directed for EmptyGraph {}
impl Undirected for EmptyGraph {}

test_graph_contract!(test_complete_graph, CompleteGraph, complete, |n| {
    CompleteGraph::new(n).unwrap()
});

test_graph_contract!(test_complete_network, CompleteNetwork, complete, |n| {
    CompleteNetwork::new(n, 7).unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        edge::{Arc, Edge},
        vertex::Vertex,
    };
    use itertools::Itertools;

    #[test]
    fn complete_successors_skip_self() {
        let graph = CompleteGraph::new(5).unwrap();
        for u in 0..5 {
            assert_eq!(
                graph.successors_of(u).collect_vec(),
                (0..5).filter(|&v| v != u).collect_vec()
            );
            for k in 0..4 {
                assert_eq!(graph.find_successor(u, graph.ith_successor(u, k)), Some(k));
            }
        }
        assert!(!graph.contains_edge(Edge::from((3u32, 3u32))));
        assert!(graph.contains_edge(Edge::from((4u32, 0u32))));
        assert_eq!(graph.number_of_edges(), graph.edges().count());
    }

    #[test]
    fn complete_network_weights() {
        let network = CompleteNetwork::new(3, -4).unwrap();
        assert_eq!(network.weight(0, Vertex::new(2)), Ok(-4));
        assert_eq!(
            network.weight(1, Vertex::new(1)),
            Err(GraphError::NoSuchLink {
                from: Vertex::new(1),
                to: Vertex::new(1)
            })
        );
        assert_eq!(network.successor_weight(2, 1), Ok(-4));
        assert_eq!(
            network.successor_weight(2, 2),
            Err(GraphError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(network.uniform_weight(), -4);
    }

    #[test]
    fn complete_graph_of_size_zero_and_one() {
        let k0 = CompleteGraph::new(0).unwrap();
        assert!(k0.is_empty());
        assert_eq!(k0.number_of_edges(), 0);

        let k1 = CompleteGraph::new(1).unwrap();
        assert_eq!(k1.degree(0), 0);
        assert_eq!(k1.successors_of(0).count(), 0);
        assert_eq!(k1.edges().count(), 0);
    }

    #[test]
    fn complete_graph_limit() {
        assert!(matches!(
            CompleteGraph::new(MAX_VERTICES + 1),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(CompleteNetwork::new(MAX_VERTICES, 1).is_ok());
    }

    #[test]
    fn empty_graph_rejects_everything() {
        let graph = EmptyGraph;
        assert_eq!(graph.size(), 0);
        assert!(graph.is_empty());
        assert_eq!(
            graph.index(Vertex::new(0)),
            Err(GraphError::VertexNotFound(Vertex::new(0)))
        );
        assert_eq!(
            graph.vertex(0),
            Err(GraphError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert!(graph.successors_size(0).is_err());
        assert!(graph.successor(0, 0).is_err());
        assert!(graph.predecessors_size(0).is_err());
        assert!(graph.successor_weight(0, 0).is_err());
        assert!(graph.weight(0, Vertex::new(0)).is_err());
        assert!(!graph.contains_arc(Arc::from((0u32, 0u32))));
        assert!(!graph.contains_edge(Edge::from((0u32, 0u32))));
        assert_eq!(graph.arcs().count(), 0);
        assert_eq!(graph.edges().count(), 0);
        assert_eq!(graph.vertices().count(), 0);
    }

    #[test]
    #[should_panic]
    fn empty_graph_panics_on_fast_access() {
        EmptyGraph.degree(0);
    }
}
