/*!
# CSR-based Sliced Buffers

Storage for a fixed number of variable-length slices, one per vertex.

- A contiguous `buffer: Vec<T>` stores all elements.
- A non-decreasing `offsets: Vec<usize>` stores slice boundaries, where slice `i` is `buffer[offsets[i]..offsets[i+1]]`.

All adjacency-list backends keep their sorted neighbor arrays (and parallel weight arrays)
in a [`SlicedBuffer`]. It is immutable once constructed, which is all a built graph needs.
*/

use std::ops::{Index, Range};

/// CSR-like structure storing slices of elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlicedBuffer<T> {
    buffer: Vec<T>,
    offsets: Vec<usize>,
}

impl<T> Default for SlicedBuffer<T> {
    fn default() -> Self {
        Self {
            buffer: Vec::new(),
            offsets: vec![0],
        }
    }
}

impl<T> SlicedBuffer<T> {
    /// Constructs a new `SlicedBuffer`.
    ///
    /// # Panics
    /// Panics if `offsets` is empty, not sorted, does not start at `0` or does not end at `buffer.len()`
    pub fn new(buffer: Vec<T>, offsets: Vec<usize>) -> Self {
        assert_eq!(offsets.first(), Some(&0));
        assert!(offsets.is_sorted());
        assert_eq!(offsets.last(), Some(&buffer.len()));

        Self { buffer, offsets }
    }

    /// Concatenates the given slices into one buffer
    pub fn from_slices<I, S>(slices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
    {
        let mut buffer = Vec::new();
        let mut offsets = vec![0];
        for slice in slices {
            buffer.extend(slice);
            offsets.push(buffer.len());
        }

        Self { buffer, offsets }
    }

    /// Returns the number of slices
    #[allow(clippy::len_without_is_empty)]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the total number of entries in all slices
    #[inline(always)]
    pub fn number_of_entries(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the length of slice `u`.
    /// ** Panics if `u >= len` **
    #[inline(always)]
    pub fn size_of(&self, u: usize) -> usize {
        self.offsets[u + 1] - self.offsets[u]
    }

    /// Returns the range slice `u` occupies in the underlying buffer.
    /// ** Panics if `u >= len` **
    #[inline(always)]
    pub fn range_of(&self, u: usize) -> Range<usize> {
        self.offsets[u]..self.offsets[u + 1]
    }

    /// Returns a reference to the complete buffer
    #[inline(always)]
    pub fn raw_buffer_slice(&self) -> &[T] {
        &self.buffer
    }
}

impl<T> Index<usize> for SlicedBuffer<T> {
    type Output = [T];

    #[inline(always)]
    fn index(&self, u: usize) -> &Self::Output {
        &self.buffer[self.range_of(u)]
    }
}
