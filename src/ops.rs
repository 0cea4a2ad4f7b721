/*!
# Capability Traits

Graphs are described by a small set of orthogonal capabilities that every backend implements
explicitly:

- [`VertexSet`]: the number of vertices and the mapping between [`Vertex`] and positions,
- [`Successors`]: positional access to the sorted outgoing neighbors of each vertex,
- [`Predecessors`]: positional access to the incoming neighbors of each vertex,
- [`SuccessorsWeight`]: one weight per (vertex, successor-position) pair,
- [`Directed`] / [`Undirected`]: whether links are arcs or edges.

These are combined into the blanket traits [`Graph`], [`Network`], [`DirectedGraph`],
[`UndirectedGraph`], [`DirectedNetwork`] and [`UndirectedNetwork`]. Algorithms bound only on
the capabilities they actually need.

Most accessors come in two flavors: checked methods returning [`Result`] that implement the
public contract, and fast positional methods (`degree`, `ith_successor`, ...) used in the inner
loops of algorithms that panic on invalid positions.
*/

use crate::{
    edge::{Arc, Edge},
    error::{check_index, GraphError, Result},
    vertex::Vertex,
    Weight,
};

/// Provides the vertex set of a graph. Vertex positions are contiguous over `0..size`.
pub trait VertexSet {
    /// Returns the number of vertices
    fn size(&self) -> usize;

    /// Returns *true* if the graph has no vertices
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the position of `vertex` or fails with [`GraphError::VertexNotFound`]
    fn index(&self, vertex: Vertex) -> Result<usize> {
        if vertex.is_valid() && vertex.index() < self.size() {
            Ok(vertex.index())
        } else {
            Err(GraphError::VertexNotFound(vertex))
        }
    }

    /// Returns the vertex at `index` or fails with [`GraphError::IndexOutOfRange`]
    fn vertex(&self, index: usize) -> Result<Vertex> {
        check_index(index, self.size()).map(Vertex::from_index)
    }

    /// Returns *true* if `vertex` belongs to this graph
    fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.index(vertex).is_ok()
    }

    /// Returns an iterator over all vertices in increasing order
    fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        (0..self.size()).map(Vertex::from_index)
    }
}

/// Positional access to the outgoing neighbors of each vertex.
///
/// Successors of a vertex are sorted increasingly and free of duplicates.
pub trait Successors: VertexSet {
    /// Returns the number of successors of the vertex at `index`.
    /// ** Panics if `index >= size` **
    fn degree(&self, index: usize) -> usize;

    /// Returns the position of the `k`th successor of the vertex at `index`.
    /// ** Panics if `index >= size || k >= degree(index)` **
    fn ith_successor(&self, index: usize, k: usize) -> usize;

    /// Returns an iterator over the positions of all successors of the vertex at `index`.
    /// ** Panics if `index >= size` **
    fn successors_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.degree(index)).map(move |k| self.ith_successor(index, k))
    }

    /// Returns `k` such that `neighbor` is the `k`th successor of `index`, if it is a successor at all.
    /// ** Panics if `index >= size` **
    fn find_successor(&self, index: usize, neighbor: usize) -> Option<usize> {
        self.successors_of(index).position(|v| v == neighbor)
    }

    /// Returns the number of successors or fails with [`GraphError::IndexOutOfRange`]
    fn successors_size(&self, index: usize) -> Result<usize> {
        check_index(index, self.size())?;
        Ok(self.degree(index))
    }

    /// Returns the position of the `k`th successor of `index`.
    /// Fails with [`GraphError::IndexOutOfRange`] if either argument is out of range.
    fn successor_index(&self, index: usize, k: usize) -> Result<usize> {
        let degree = self.successors_size(index)?;
        check_index(k, degree)?;
        Ok(self.ith_successor(index, k))
    }

    /// Returns the `k`th successor of `index`.
    /// Fails with [`GraphError::IndexOutOfRange`] if either argument is out of range.
    fn successor(&self, index: usize, k: usize) -> Result<Vertex> {
        self.successor_index(index, k).map(Vertex::from_index)
    }

    /// Returns an iterator over the successors of `vertex`.
    /// Fails with [`GraphError::VertexNotFound`] if `vertex` does not belong to this graph.
    fn successor_vertices(&self, vertex: Vertex) -> Result<impl Iterator<Item = Vertex> + '_> {
        let index = self.index(vertex)?;
        Ok(self.successors_of(index).map(Vertex::from_index))
    }
}

/// Positional access to the incoming neighbors of each vertex.
///
/// For undirected graphs predecessors and successors coincide.
pub trait Predecessors: VertexSet {
    /// Returns the number of predecessors of the vertex at `index`.
    /// ** Panics if `index >= size` **
    fn in_degree(&self, index: usize) -> usize;

    /// Returns the position of the `k`th predecessor of the vertex at `index`.
    /// ** Panics if `index >= size || k >= in_degree(index)` **
    fn ith_predecessor(&self, index: usize, k: usize) -> usize;

    /// Returns an iterator over the positions of all predecessors of the vertex at `index`.
    /// ** Panics if `index >= size` **
    fn predecessors_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.in_degree(index)).map(move |k| self.ith_predecessor(index, k))
    }

    /// Returns the number of predecessors or fails with [`GraphError::IndexOutOfRange`]
    fn predecessors_size(&self, index: usize) -> Result<usize> {
        check_index(index, self.size())?;
        Ok(self.in_degree(index))
    }

    /// Returns the `k`th predecessor of `index`.
    /// Fails with [`GraphError::IndexOutOfRange`] if either argument is out of range.
    fn predecessor(&self, index: usize, k: usize) -> Result<Vertex> {
        let degree = self.predecessors_size(index)?;
        check_index(k, degree)?;
        Ok(Vertex::from_index(self.ith_predecessor(index, k)))
    }
}

/// One integer weight per link, index-aligned with the successors.
pub trait SuccessorsWeight: Successors {
    /// Returns the weight of the link to the `k`th successor of `index`.
    /// ** Panics if `index >= size || k >= degree(index)` **
    fn ith_weight(&self, index: usize, k: usize) -> Weight;

    /// Returns an iterator over `(successor position, weight)` pairs of the vertex at `index`.
    /// ** Panics if `index >= size` **
    fn weighted_successors_of(&self, index: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        (0..self.degree(index)).map(move |k| (self.ith_successor(index, k), self.ith_weight(index, k)))
    }

    /// Returns the weight of the link to the `k`th successor of `index`.
    /// Fails with [`GraphError::IndexOutOfRange`] if either argument is out of range.
    fn successor_weight(&self, index: usize, k: usize) -> Result<Weight> {
        let degree = self.successors_size(index)?;
        check_index(k, degree)?;
        Ok(self.ith_weight(index, k))
    }

    /// Returns the weight of the link from the vertex at `index` to `neighbor`.
    ///
    /// Fails with [`GraphError::IndexOutOfRange`] for an invalid `index`,
    /// [`GraphError::VertexNotFound`] if `neighbor` does not belong to this graph and
    /// [`GraphError::NoSuchLink`] if there is no such link.
    fn weight(&self, index: usize, neighbor: Vertex) -> Result<Weight> {
        check_index(index, self.size())?;
        let target = self.index(neighbor)?;
        let k = self
            .find_successor(index, target)
            .ok_or(GraphError::NoSuchLink {
                from: Vertex::from_index(index),
                to: neighbor,
            })?;
        Ok(self.ith_weight(index, k))
    }

    /// Returns the weight of the link from `from` to `to`.
    /// Fails like [`SuccessorsWeight::weight`] or with [`GraphError::VertexNotFound`] for `from`.
    fn weight_between(&self, from: Vertex, to: Vertex) -> Result<Weight> {
        let index = self.index(from)?;
        self.weight(index, to)
    }
}

/// Graphs whose links are arcs
pub trait Directed: Successors {
    /// Returns *true* if the arc is present; arcs with foreign endpoints are never present
    fn contains_arc(&self, arc: Arc) -> bool {
        match (self.index(arc.tail()), self.index(arc.head())) {
            (Ok(u), Ok(v)) => self.find_successor(u, v).is_some(),
            _ => false,
        }
    }

    /// Returns an iterator over all arcs, sorted by tail and then head
    fn arcs(&self) -> impl Iterator<Item = Arc> + '_ {
        (0..self.size()).flat_map(move |u| {
            self.successors_of(u)
                .map(move |v| Arc::new(Vertex::from_index(u), Vertex::from_index(v)))
        })
    }

    /// Returns the number of arcs
    fn number_of_arcs(&self) -> usize {
        (0..self.size()).map(|u| self.degree(u)).sum()
    }
}

/// Graphs whose links are edges. Every edge `{u, v}` is a successor of both endpoints.
pub trait Undirected: Successors {
    /// Returns *true* if the edge is present; edges with foreign endpoints are never present
    fn contains_edge(&self, edge: Edge) -> bool {
        match (self.index(edge.u()), self.index(edge.v())) {
            (Ok(u), Ok(v)) => self.find_successor(u, v).is_some(),
            _ => false,
        }
    }

    /// Returns an iterator over all edges, each reported once as `{u, v}` with `u <= v`
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.size()).flat_map(move |u| {
            self.successors_of(u)
                .filter(move |&v| u <= v)
                .map(move |v| Edge::new(Vertex::from_index(u), Vertex::from_index(v)))
        })
    }

    /// Returns the number of edges
    fn number_of_edges(&self) -> usize {
        self.edges().count()
    }
}

/// A vertex set with successors
pub trait Graph: VertexSet + Successors {}

impl<G> Graph for G where G: VertexSet + Successors {}

/// A graph with one weight per link
pub trait Network: Graph + SuccessorsWeight {}

impl<N> Network for N where N: Graph + SuccessorsWeight {}

/// A graph whose links are arcs
pub trait DirectedGraph: Graph + Directed {}

impl<G> DirectedGraph for G where G: Graph + Directed {}

/// A graph whose links are edges
pub trait UndirectedGraph: Graph + Undirected {}

impl<G> UndirectedGraph for G where G: Graph + Undirected {}

/// A network whose links are arcs
pub trait DirectedNetwork: Network + Directed {
    /// Returns an iterator over all arcs together with their weight
    fn weighted_arcs(&self) -> impl Iterator<Item = (Arc, Weight)> + '_ {
        (0..self.size()).flat_map(move |u| {
            self.weighted_successors_of(u).map(move |(v, w)| {
                (Arc::new(Vertex::from_index(u), Vertex::from_index(v)), w)
            })
        })
    }
}

impl<N> DirectedNetwork for N where N: Network + Directed {}

/// A network whose links are edges
pub trait UndirectedNetwork: Network + Undirected {
    /// Returns an iterator over all edges (each once, `u <= v`) together with their weight
    fn weighted_edges(&self) -> impl Iterator<Item = (Edge, Weight)> + '_ {
        (0..self.size()).flat_map(move |u| {
            self.weighted_successors_of(u)
                .filter(move |&(v, _)| u <= v)
                .map(move |(v, w)| (Edge::new(Vertex::from_index(u), Vertex::from_index(v)), w))
        })
    }
}

impl<N> UndirectedNetwork for N where N: Network + Undirected {}
