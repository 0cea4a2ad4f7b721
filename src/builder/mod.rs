/*!
# Builders

Graphs are immutable, so they are assembled in a separate, mutable construction scope:

```
use igraphs::prelude::*;

let mut builder = UndirectedNetworkBuilder::new();
let a = builder.add_vertex();
let b = builder.add_vertex();
builder.add_edge((a, b), 1).unwrap();
builder.add_edge((b, a), 2).unwrap();

let network = builder.build().unwrap();
assert_eq!(network.weight_between(a, b), Ok(3));
```

Vertices are issued sequentially in creation order. Links may only reference vertices that were
already added; anything else fails immediately with [`GraphError::VertexNotFound`] and leaves
the builder unchanged. Links are appended to pending per-vertex lists which are compacted once
in [`GraphBuilder::build`] (see [`compaction`]).

| Builder | Output |
|---|---|
| [`DirectedGraphBuilder`] | [`AdjArray`] |
| [`UndirectedGraphBuilder`] | [`AdjArrayUndir`] |
| [`DirectedNetworkBuilder`] | [`AdjArrayNetwork`] |
| [`UndirectedNetworkBuilder`] | [`AdjArrayNetworkUndir`] |
*/

use tracing::trace;

use crate::{
    edge::{Arc, Edge},
    error::{GraphError, Result},
    repr::{AdjArray, AdjArrayNetwork, AdjArrayNetworkUndir, AdjArrayUndir},
    utils::{packing::pack_weighted, SlicedBuffer},
    vertex::{Vertex, VertexArray, MAX_VERTICES},
    Weight,
};

pub mod compaction;

use compaction::{compact_neighbors, compact_weighted, split_weighted};

/// Common interface of all construction scopes
pub trait GraphBuilder: Sized {
    /// The immutable representation produced by [`GraphBuilder::build`]
    type Output;

    /// Returns the number of vertices added so far
    fn size(&self) -> usize;

    /// Adds a new vertex and returns it. Vertices are numbered in creation order.
    /// ** Panics if the builder already holds `MAX_VERTICES` vertices **
    fn add_vertex(&mut self) -> Vertex;

    /// Adds `n` new vertices and returns them in creation order
    fn add_vertices(&mut self, n: usize) -> VertexArray {
        (0..n).map(|_| self.add_vertex()).collect()
    }

    /// Returns the position of `vertex` if it was already added to this builder
    fn position(&self, vertex: Vertex) -> Result<usize> {
        if vertex.is_valid() && vertex.index() < self.size() {
            Ok(vertex.index())
        } else {
            Err(GraphError::VertexNotFound(vertex))
        }
    }

    /// Compacts all pending links and freezes the result
    fn build(self) -> Result<Self::Output>;
}

/// Pending, not yet compacted neighbor lists
#[derive(Debug, Clone, Default)]
struct Pending<T> {
    lists: Vec<Vec<T>>,
}

impl<T> Pending<T> {
    fn with_capacity(n: usize) -> Self {
        Self {
            lists: Vec::with_capacity(n),
        }
    }

    fn add_vertex(&mut self) -> Vertex {
        assert!(
            self.lists.len() < MAX_VERTICES,
            "a graph can hold at most {MAX_VERTICES} vertices"
        );
        self.lists.push(Vec::new());
        Vertex::from_index(self.lists.len() - 1)
    }

    fn number_of_entries(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }
}

macro_rules! impl_graph_builder {
    ($builder:ident => $output:ident, |$this:ident| $build:expr) => {
        impl $builder {
            /// Creates an empty builder
            pub fn new() -> Self {
                Self::default()
            }

            /// Creates an empty builder with space reserved for `n` vertices
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    pending: Pending::with_capacity(n),
                }
            }
        }

        impl GraphBuilder for $builder {
            type Output = $output;

            fn size(&self) -> usize {
                self.pending.lists.len()
            }

            fn add_vertex(&mut self) -> Vertex {
                self.pending.add_vertex()
            }

            fn build(self) -> Result<$output> {
                trace!(
                    builder = stringify!($builder),
                    vertices = self.pending.lists.len(),
                    entries = self.pending.number_of_entries(),
                    "compacting pending links"
                );
                let $this = self;
                $build
            }
        }
    };
}

/// Construction scope of an [`AdjArray`]
#[derive(Debug, Clone, Default)]
pub struct DirectedGraphBuilder {
    pending: Pending<u32>,
}

/// Construction scope of an [`AdjArrayUndir`]
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraphBuilder {
    pending: Pending<u32>,
}

/// Construction scope of an [`AdjArrayNetwork`]
#[derive(Debug, Clone, Default)]
pub struct DirectedNetworkBuilder {
    pending: Pending<u64>,
}

/// Construction scope of an [`AdjArrayNetworkUndir`]
#[derive(Debug, Clone, Default)]
pub struct UndirectedNetworkBuilder {
    pending: Pending<u64>,
}

impl_graph_builder!(DirectedGraphBuilder => AdjArray, |builder| {
    Ok(AdjArray::from_sorted_successors(SlicedBuffer::from_slices(
        builder.pending.lists.into_iter().map(compact_neighbors),
    )))
});

impl_graph_builder!(UndirectedGraphBuilder => AdjArrayUndir, |builder| {
    Ok(AdjArrayUndir::from_sorted_neighbors(SlicedBuffer::from_slices(
        builder.pending.lists.into_iter().map(compact_neighbors),
    )))
});

impl_graph_builder!(DirectedNetworkBuilder => AdjArrayNetwork, |builder| {
    let (nbs, weights) = compact_network(builder.pending)?;
    Ok(AdjArrayNetwork::from_sorted_successors(nbs, weights))
});

impl_graph_builder!(UndirectedNetworkBuilder => AdjArrayNetworkUndir, |builder| {
    let (nbs, weights) = compact_network(builder.pending)?;
    Ok(AdjArrayNetworkUndir::from_sorted_neighbors(nbs, weights))
});

/// Compacts all packed lists and splits them into neighbor slices and an aligned weight vector
fn compact_network(pending: Pending<u64>) -> Result<(SlicedBuffer<u32>, Vec<Weight>)> {
    let lists = pending
        .lists
        .into_iter()
        .enumerate()
        .map(|(u, keys)| compact_weighted(u, keys))
        .collect::<Result<Vec<_>>>()?;

    Ok(split_weighted(&lists))
}

impl DirectedGraphBuilder {
    /// Adds the arc `from -> to`.
    /// Fails with [`GraphError::VertexNotFound`] if an endpoint was not added yet.
    pub fn add_arc<A: Into<Arc>>(&mut self, arc: A) -> Result<()> {
        let arc = arc.into();
        let u = self.position(arc.tail())?;
        self.position(arc.head())?;
        self.pending.lists[u].push(arc.head().raw());
        Ok(())
    }

    /// Adds all arcs, stopping at the first invalid one
    pub fn add_arcs<I, A>(&mut self, arcs: I) -> Result<()>
    where
        I: IntoIterator<Item = A>,
        A: Into<Arc>,
    {
        arcs.into_iter().try_for_each(|arc| self.add_arc(arc))
    }
}

impl UndirectedGraphBuilder {
    /// Adds the edge `{u, v}` to both endpoints; a self-loop is stored once.
    /// Fails with [`GraphError::VertexNotFound`] if an endpoint was not added yet.
    pub fn add_edge<E: Into<Edge>>(&mut self, edge: E) -> Result<()> {
        let edge = edge.into();
        let u = self.position(edge.u())?;
        let v = self.position(edge.v())?;
        self.pending.lists[u].push(v as u32);
        if u != v {
            self.pending.lists[v].push(u as u32);
        }
        Ok(())
    }

    /// Adds all edges, stopping at the first invalid one
    pub fn add_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        edges.into_iter().try_for_each(|edge| self.add_edge(edge))
    }
}

impl DirectedNetworkBuilder {
    /// Adds the arc `from -> to` with `weight`. Weights of repeated arcs are summed at build time.
    /// Fails with [`GraphError::VertexNotFound`] if an endpoint was not added yet.
    pub fn add_arc<A: Into<Arc>>(&mut self, arc: A, weight: Weight) -> Result<()> {
        let arc = arc.into();
        let u = self.position(arc.tail())?;
        self.position(arc.head())?;
        self.pending.lists[u].push(pack_weighted(arc.head().raw(), weight));
        Ok(())
    }
}

impl UndirectedNetworkBuilder {
    /// Adds the edge `{u, v}` with `weight` to both endpoints; a self-loop is stored once.
    /// Weights of repeated edges are summed at build time.
    /// Fails with [`GraphError::VertexNotFound`] if an endpoint was not added yet.
    pub fn add_edge<E: Into<Edge>>(&mut self, edge: E, weight: Weight) -> Result<()> {
        let edge = edge.into();
        let u = self.position(edge.u())?;
        let v = self.position(edge.v())?;
        self.pending.lists[u].push(pack_weighted(v as u32, weight));
        if u != v {
            self.pending.lists[v].push(pack_weighted(u as u32, weight));
        }
        Ok(())
    }
}
