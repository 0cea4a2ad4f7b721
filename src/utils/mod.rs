/*!
# Utilities

Primitive collections and bit-level helpers the graph representations and algorithms are built on:
- [`VertexBitSet`]: a dense bitset over vertex positions, used for visited-flags and adjacency-matrix rows,
- [`IndexedMinHeap`](self::priority_queue::IndexedMinHeap): a min-priority-queue over positions with `O(1)` membership test and `O(log n)` key updates,
- [`packing`]: shift/mask utilities to store two 32-bit values in a single `u64`,
- [`SlicedBuffer`](self::sliced_buffer::SlicedBuffer): flat CSR storage of one slice per vertex.

Growable integer vectors and double-ended queues are taken from `std` (`Vec` and `VecDeque`).
*/

pub mod packing;
pub mod priority_queue;
pub mod sliced_buffer;

pub use priority_queue::IndexedMinHeap;
pub use sliced_buffer::SlicedBuffer;

use stream_bitset::bitset::BitSetImpl;

/// BitSet over vertex positions
pub type VertexBitSet = BitSetImpl<u32>;

/// Creates an empty bitset with one entry per position in `0..n`
#[inline]
pub fn vertex_bitset(n: usize) -> VertexBitSet {
    VertexBitSet::new(n as u32)
}
