/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the capability traits in [`ops`](crate::ops).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use igraphs::algo::*;
```
and gain access to traversals, shortest paths, spanning forests, flows, connectivity,
topological sorting and graph transformations.

Every algorithm is an extension trait with a blanket implementation over the minimal set of
capabilities it needs. If possible, algorithms are provided as **iterators**, making it easy to
consume results lazily.
*/

mod connectivity;
mod network_flow;
mod shortest_path;
mod spanning;
mod topological;
mod transform;
mod traversal;

use crate::{error::Result, prelude::*, utils::*};

pub use connectivity::*;
pub use network_flow::*;
pub use shortest_path::*;
pub use spanning::*;
pub use topological::*;
pub use transform::*;
pub use traversal::*;
