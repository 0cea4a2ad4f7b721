/*!
`igraphs` is a graph data structure & algorithms library designed around **i**mmutable, **i**ndex-based graphs:
- Vertices are numbered `0` to `n - 1` and cannot be added or removed once a graph is built
- Links are either directed arcs or undirected edges
- Networks attach one integer weight to each link

# Representation

We represent **vertices** as a [`Vertex`](crate::vertex::Vertex) newtype over `u32` in the range `0..n`.
`Vertex::INVALID` (`u32::MAX`) is reserved to denote "no vertex", e.g. a missing parent in a shortest path tree.
**Edges** and **arcs** pack both endpoints into a single `u64`, so they are `Copy` and never allocate.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`AdjArray`](crate::repr::AdjArray) / [`AdjArrayUndir`](crate::repr::AdjArrayUndir): sorted, deduplicated neighbor arrays
- [`AdjArrayNetwork`](crate::repr::AdjArrayNetwork) / [`AdjArrayNetworkUndir`](crate::repr::AdjArrayNetworkUndir): the same with parallel weight arrays
- [`AdjMatrix`](crate::repr::AdjMatrix) / [`AdjMatrixUndir`](crate::repr::AdjMatrixUndir): one bitset row per vertex
- [`CompleteGraph`](crate::repr::CompleteGraph) / [`CompleteNetwork`](crate::repr::CompleteNetwork) / [`EmptyGraph`](crate::repr::EmptyGraph): closed-form graphs without storage

# Design

Graphs are never mutated. They are assembled in a builder (see [`builder`]), which accumulates
vertices and links and compacts them into an immutable backend in a single `build` call.
Algorithms only read the capability traits of [`ops`] and return new graphs, arrays or maps.

All algorithms are implemented as extension traits on the graph itself, making them usable as
`graph.topological_sort()` or `network.shortest_paths_dijkstra(source)`.
Where an algorithm can be configured, it is exposed as a struct with *Setter*-methods as well.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes vertices, edges, errors, capability traits, builders and all standard graph representations,
- [`algo`] includes algorithm traits such as traversals, shortest paths, spanning forests, flows and connectivity,
- [`builder`] includes the construction scopes for all list-based representations,
- [`utils`] includes the primitive collections the algorithms are built upon.

In most use-cases, `use igraphs::{prelude::*, algo::*};` suffices for your needs.

```
use igraphs::{prelude::*, algo::*};

let graph = AdjArray::from_arcs(4, [(0u32, 1u32), (1, 2), (0, 2), (2, 3)]).unwrap();
let order = graph.topological_sort().unwrap();
assert_eq!(order.iter().map(|v| v.raw()).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
```
*/

pub mod algo;
pub mod builder;
pub mod edge;
pub mod error;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;
pub mod vertex;

/// Weight attached to every link of a network
pub type Weight = i32;

/// `igraphs::prelude` includes vertices, edges, errors, all capability traits, builders as well as all implemented representations.
pub mod prelude {
    pub use super::{
        builder::*,
        edge::*,
        error::GraphError,
        ops::*,
        repr::*,
        vertex::*,
        Weight,
    };
}
