/*!
# Vertex Representation

A [`Vertex`] is an opaque zero-based identifier issued by a graph or a builder. It is stored as
`u32` since almost all use-cases involve less than `2^32` vertices, which lets us pack two
vertices into a single `u64` (see [`Edge`](crate::edge::Edge) and [`Arc`](crate::edge::Arc)).

Vertices of one graph must never be used to query another graph: they are only checked to be
in range, not to originate from the same instance.

This module also provides the two flat containers used by algorithms to return results:
- [`VertexArray`], an immutable-length array of vertices,
- [`VertexMap`], a total mapping from every vertex of a graph to another vertex.
*/

use std::{
    fmt::{Debug, Display},
    ops::{Deref, DerefMut, Range},
};

use crate::error::{GraphError, Result};

/// An opaque identifier of a vertex in a graph
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Vertex(u32);

/// There can be at most `2^32 - 1` vertices in a graph, as `u32::MAX` is reserved for [`Vertex::INVALID`]
pub const MAX_VERTICES: usize = u32::MAX as usize;

impl Vertex {
    /// Vertex-Value that is considered invalid. Used in parent-maps to denote "no predecessor".
    pub const INVALID: Vertex = Vertex(u32::MAX);

    /// Creates the vertex with the given raw identifier
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the position of the vertex within its graph
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns *true* if this is not [`Vertex::INVALID`]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }

    /// Creates a vertex from a position.
    /// ** Panics in debug builds if `index >= MAX_VERTICES` **
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < MAX_VERTICES);
        Self(index as u32)
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "INVALID")
        }
    }
}

impl Debug for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<u32> for Vertex {
    fn from(value: u32) -> Self {
        Vertex(value)
    }
}

impl From<Vertex> for u32 {
    fn from(value: Vertex) -> Self {
        value.0
    }
}

/// A flat array of vertices.
///
/// Dereferences to `[Vertex]` so all slice methods (including `binary_search`, which is relied
/// upon for `O(log d)` containment checks on sorted neighbor arrays) are available. The length
/// is fixed after construction; copies are always independent.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct VertexArray(Box<[Vertex]>);

impl VertexArray {
    /// Creates an array of `size` vertices, all set to [`Vertex::INVALID`]
    pub fn new(size: usize) -> Self {
        Self(vec![Vertex::INVALID; size].into_boxed_slice())
    }

    /// Creates an array of `size` vertices where the ith entry is `init(i)`
    pub fn from_fn<F>(size: usize, init: F) -> Self
    where
        F: FnMut(usize) -> Vertex,
    {
        Self((0..size).map(init).collect())
    }

    /// Returns an independent copy
    pub fn copy_of(&self) -> Self {
        self.clone()
    }

    /// Returns an independent copy truncated or padded with [`Vertex::INVALID`] to `new_size`
    pub fn copy_of_len(&self, new_size: usize) -> Self {
        let mut data = self.0.to_vec();
        data.resize(new_size, Vertex::INVALID);
        Self(data.into_boxed_slice())
    }

    /// Returns an independent copy of the entries in `range`.
    ///
    /// Fails with [`GraphError::InvalidArgument`] if `range.start > range.end` and with
    /// [`GraphError::IndexOutOfRange`] if `range.end > self.len()`.
    pub fn copy_of_range(&self, range: Range<usize>) -> Result<Self> {
        if range.start > range.end {
            return Err(GraphError::InvalidArgument(format!(
                "range start {} exceeds range end {}",
                range.start, range.end
            )));
        }
        if range.end > self.len() {
            return Err(GraphError::IndexOutOfRange {
                index: range.end,
                len: self.len(),
            });
        }
        Ok(Self(self.0[range].into()))
    }

    /// Returns the entry at position `index` or fails with [`GraphError::IndexOutOfRange`]
    pub fn try_get(&self, index: usize) -> Result<Vertex> {
        self.0
            .get(index)
            .copied()
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Returns the underlying boxed slice
    pub fn into_inner(self) -> Box<[Vertex]> {
        self.0
    }
}

impl Deref for VertexArray {
    type Target = [Vertex];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for VertexArray {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Debug for VertexArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl From<Vec<Vertex>> for VertexArray {
    fn from(value: Vec<Vertex>) -> Self {
        Self(value.into_boxed_slice())
    }
}

impl FromIterator<Vertex> for VertexArray {
    fn from_iter<T: IntoIterator<Item = Vertex>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for VertexArray {
    type Item = Vertex;
    type IntoIter = std::vec::IntoIter<Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a VertexArray {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A fixed-size, total mapping from every vertex of a graph to another vertex (or [`Vertex::INVALID`]).
///
/// Used to represent parent pointers of traversal trees, shortest path trees and spanning
/// forests, as well as the component assignment of connectivity algorithms.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct VertexMap(VertexArray);

impl VertexMap {
    /// Creates a map over `size` vertices where every vertex maps to [`Vertex::INVALID`]
    pub fn new(size: usize) -> Self {
        Self(VertexArray::new(size))
    }

    /// Creates a map over `size` vertices where vertex `v` maps to `init(v)`
    pub fn from_fn<F>(size: usize, mut init: F) -> Self
    where
        F: FnMut(Vertex) -> Vertex,
    {
        Self(VertexArray::from_fn(size, |i| init(Vertex::from_index(i))))
    }

    /// Returns the number of vertices in the domain
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns *true* if the domain is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the image of `vertex` or fails with [`GraphError::VertexNotFound`]
    pub fn get(&self, vertex: Vertex) -> Result<Vertex> {
        self.0
            .get(vertex.index())
            .copied()
            .ok_or(GraphError::VertexNotFound(vertex))
    }

    /// Sets the image of `vertex` or fails with [`GraphError::VertexNotFound`]
    pub fn set(&mut self, vertex: Vertex, value: Vertex) -> Result<()> {
        let slot = self
            .0
            .get_mut(vertex.index())
            .ok_or(GraphError::VertexNotFound(vertex))?;
        *slot = value;
        Ok(())
    }

    /// Returns an independent copy of all images, indexed by vertex
    pub fn values(&self) -> VertexArray {
        self.0.copy_of()
    }

    /// Iterates over all `(vertex, image)` pairs in vertex order
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &v)| (Vertex::from_index(i), v))
    }

    /// Unchecked update by position.
    /// ** Panics if `index >= len` **
    #[inline]
    pub(crate) fn put(&mut self, index: usize, value: Vertex) {
        self.0[index] = value;
    }
}

impl Debug for VertexMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn array(raw: &[u32]) -> VertexArray {
        raw.iter().map(|&v| Vertex::new(v)).collect()
    }

    #[test]
    fn vertex_basics() {
        assert!(Vertex::new(0).is_valid());
        assert!(!Vertex::INVALID.is_valid());
        assert_eq!(Vertex::new(5).index(), 5);
        assert_eq!(format!("{}", Vertex::new(3)), "3");
        assert_eq!(format!("{}", Vertex::INVALID), "INVALID");
        assert!(Vertex::new(1) < Vertex::new(2));
    }

    #[test]
    fn array_copies_are_independent() {
        let original = array(&[1, 2, 3]);
        let mut copy = original.copy_of();
        copy[0] = Vertex::new(9);
        assert_eq!(original[0], Vertex::new(1));
        assert_eq!(copy[0], Vertex::new(9));
    }

    #[test]
    fn array_resizing_and_slicing() {
        let original = array(&[1, 2, 3]);
        assert_eq!(original.copy_of_len(2), array(&[1, 2]));
        assert_eq!(
            original.copy_of_len(4).iter().copied().collect_vec(),
            vec![Vertex::new(1), Vertex::new(2), Vertex::new(3), Vertex::INVALID]
        );

        assert_eq!(original.copy_of_range(1..3).unwrap(), array(&[2, 3]));
        assert_eq!(original.copy_of_range(1..1).unwrap().len(), 0);
        assert!(matches!(
            original.copy_of_range(0..4),
            Err(GraphError::IndexOutOfRange { index: 4, len: 3 })
        ));
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = original.copy_of_range(2..1);
        assert!(matches!(inverted, Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn array_binary_search() {
        let sorted = array(&[1, 4, 7, 9]);
        assert_eq!(sorted.binary_search(&Vertex::new(7)), Ok(2));
        assert_eq!(sorted.binary_search(&Vertex::new(5)), Err(2));
        assert_eq!(sorted.binary_search(&Vertex::new(0)), Err(0));
        assert_eq!(sorted.binary_search(&Vertex::new(10)), Err(4));
    }

    #[test]
    fn map_get_set() {
        let mut map = VertexMap::new(3);
        assert_eq!(map.len(), 3);
        assert!(map.iter().all(|(_, v)| v == Vertex::INVALID));

        map.set(Vertex::new(1), Vertex::new(0)).unwrap();
        assert_eq!(map.get(Vertex::new(1)), Ok(Vertex::new(0)));
        assert_eq!(
            map.get(Vertex::new(3)),
            Err(GraphError::VertexNotFound(Vertex::new(3)))
        );
        assert!(map.set(Vertex::new(3), Vertex::new(0)).is_err());
    }

    #[test]
    fn map_values_are_copies() {
        let map = VertexMap::from_fn(3, |v| v);
        let mut values = map.values();
        values[0] = Vertex::new(2);
        assert_eq!(map.get(Vertex::new(0)), Ok(Vertex::new(0)));
        assert_eq!(values[0], Vertex::new(2));
    }
}
