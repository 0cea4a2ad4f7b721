/*!
# Graph Representations

All representations are immutable once constructed. They differ in how successors are stored
and therefore in the cost of the [`Successors`](crate::ops::Successors) accessors:

| Representation | `ith_successor` | containment | storage |
|---|---|---|---|
| [`AdjArray`], [`AdjArrayUndir`], [`AdjArrayNetwork`], [`AdjArrayNetworkUndir`] | `O(1)` | `O(log d)` | `O(n + m)` |
| [`AdjMatrix`], [`AdjMatrixUndir`] | `O(d)` | `O(1)` | `O(n^2)` bits |
| [`CompleteGraph`], [`CompleteNetwork`] | `O(1)` | `O(1)` | none |
| [`EmptyGraph`] | - | - | none |

List-based representations are produced by the builders in [`crate::builder`] or the
`from_arcs` / `from_edges` shortcuts.
*/

use crate::utils::SlicedBuffer;

mod complete;
mod directed;
mod matrix;
mod undirected;

pub use complete::*;
pub use directed::*;
pub use matrix::*;
pub use undirected::*;

/// Computes the incoming neighbors for a set of sorted outgoing neighbor slices.
/// Predecessors of each vertex are again sorted since tails are visited in increasing order.
pub(crate) fn transpose(out_nbs: &SlicedBuffer<u32>) -> SlicedBuffer<u32> {
    let n = out_nbs.len();

    let mut offsets = vec![0usize; n + 1];
    for &v in out_nbs.raw_buffer_slice() {
        offsets[v as usize + 1] += 1;
    }
    for i in 0..n {
        offsets[i + 1] += offsets[i];
    }

    let mut cursor = offsets.clone();
    let mut buffer = vec![0u32; out_nbs.number_of_entries()];
    for u in 0..n {
        for &v in &out_nbs[u] {
            buffer[cursor[v as usize]] = u as u32;
            cursor[v as usize] += 1;
        }
    }

    SlicedBuffer::new(buffer, offsets)
}

pub(crate) mod macros {
    /// Implements [`VertexSet`] and [`Successors`] for a representation storing its successors
    /// as sorted slices in the [`SlicedBuffer`] field `$nbs`.
    macro_rules! impl_list_successors {
        ($struct:ident, $nbs:ident) => {
            impl VertexSet for $struct {
                fn size(&self) -> usize {
                    self.$nbs.len()
                }
            }

            impl Successors for $struct {
                fn degree(&self, index: usize) -> usize {
                    self.$nbs.size_of(index)
                }

                fn ith_successor(&self, index: usize, k: usize) -> usize {
                    self.$nbs[index][k] as usize
                }

                fn successors_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
                    self.$nbs[index].iter().map(|&v| v as usize)
                }

                fn find_successor(&self, index: usize, neighbor: usize) -> Option<usize> {
                    let neighbor = u32::try_from(neighbor).ok()?;
                    self.$nbs[index].binary_search(&neighbor).ok()
                }
            }
        };
    }

    /// Implements [`Predecessors`] on top of the [`SlicedBuffer`] field `$nbs`
    macro_rules! impl_list_predecessors {
        ($struct:ident, $nbs:ident) => {
            impl Predecessors for $struct {
                fn in_degree(&self, index: usize) -> usize {
                    self.$nbs.size_of(index)
                }

                fn ith_predecessor(&self, index: usize, k: usize) -> usize {
                    self.$nbs[index][k] as usize
                }

                fn predecessors_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
                    self.$nbs[index].iter().map(|&v| v as usize)
                }
            }
        };
    }

    /// Implements [`SuccessorsWeight`] for a weight vector `$weights` aligned with the buffer of `$nbs`
    macro_rules! impl_list_weights {
        ($struct:ident, $nbs:ident, $weights:ident) => {
            impl SuccessorsWeight for $struct {
                fn ith_weight(&self, index: usize, k: usize) -> Weight {
                    self.$weights[self.$nbs.range_of(index)][k]
                }

                fn weighted_successors_of(
                    &self,
                    index: usize,
                ) -> impl Iterator<Item = (usize, Weight)> + '_ {
                    self.$nbs[index]
                        .iter()
                        .zip(&self.$weights[self.$nbs.range_of(index)])
                        .map(|(&v, &w)| (v as usize, w))
                }
            }
        };
    }

    pub(super) use impl_list_predecessors;
    pub(super) use impl_list_successors;
    pub(super) use impl_list_weights;
}
