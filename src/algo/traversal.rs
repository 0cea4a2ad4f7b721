/*!
# Traversals

This module provides
- callback-style iteration over vertices, successors, arcs and edges,
- an iterative [`DepthFirstSearch`] that reports when a vertex is entered and left,
- a [`BreadthFirstSearch`] that tracks the parent of every discovered vertex,
- lazy [`RandomWalk`]s, either uniform or proportional to positive weights.

All of them are exposed as methods of the [`Traversal`] extension trait, which is implemented for
every graph with [`Successors`].

The depth-first search never recurses: it keeps an explicit stack of positions and, per vertex, a
cursor to the next successor that has not been looked at yet. Its depth is only bounded by memory.
*/

use std::{borrow::BorrowMut, collections::VecDeque};

use rand::Rng;

use super::{shortest_path::path_from_parents, *};

/// Event reported by a [`DepthFirstSearch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DfsEvent {
    /// The vertex was reached for the first time (in-order)
    Enter(Vertex),
    /// All successors of the vertex are done (post-order)
    Exit(Vertex),
}

impl DfsEvent {
    /// Returns the vertex of this event
    pub fn vertex(&self) -> Vertex {
        match *self {
            DfsEvent::Enter(v) | DfsEvent::Exit(v) => v,
        }
    }

    /// Returns the vertex if this is an [`DfsEvent::Enter`] event
    pub fn entered(self) -> Option<Vertex> {
        match self {
            DfsEvent::Enter(v) => Some(v),
            DfsEvent::Exit(_) => None,
        }
    }

    /// Returns the vertex if this is an [`DfsEvent::Exit`] event
    pub fn exited(self) -> Option<Vertex> {
        match self {
            DfsEvent::Exit(v) => Some(v),
            DfsEvent::Enter(_) => None,
        }
    }
}

/// Iterative depth-first search yielding [`DfsEvent`]s.
///
/// The visited set `V` is either owned or borrowed from the caller (see
/// [`Traversal::dfs_with_visited`]), so several searches can share it to cover multiple
/// components without visiting a vertex twice.
pub struct DepthFirstSearch<'a, G, V = VertexBitSet>
where
    G: Successors,
    V: BorrowMut<VertexBitSet>,
{
    graph: &'a G,
    visited: V,
    stack: Vec<usize>,
    cursor: Vec<usize>,
    next_unvisited: usize,
}

impl<'a, G, V> DepthFirstSearch<'a, G, V>
where
    G: Successors,
    V: BorrowMut<VertexBitSet>,
{
    /// Creates a search starting at position `start`.
    /// ** Panics if `start >= graph.size()` or `visited` is smaller than the graph **
    pub(crate) fn new(graph: &'a G, start: usize, visited: V) -> Self {
        assert!(visited.borrow().number_of_bits() as usize >= graph.size());
        let mut search = Self {
            graph,
            visited,
            stack: Vec::new(),
            cursor: vec![0; graph.size()],
            next_unvisited: 0,
        };
        search.push_if_unvisited(start);
        search
    }

    fn push_if_unvisited(&mut self, index: usize) -> bool {
        assert!(index < self.graph.size());
        if self.visited.borrow().get_bit(index as u32) {
            return false;
        }
        self.stack.push(index);
        true
    }

    /// Continues the search at `vertex` once the current tree is exhausted.
    /// Returns *false* (and does nothing) if `vertex` has already been visited.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if `vertex` does not belong to the graph and
    /// with [`GraphError::InvalidArgument`] if the current tree is not exhausted yet.
    pub fn restart_at(&mut self, vertex: Vertex) -> Result<bool> {
        let index = self.graph.index(vertex)?;
        if !self.stack.is_empty() {
            return Err(GraphError::InvalidArgument(format!(
                "cannot restart at {vertex} while the current search is still running"
            )));
        }
        Ok(self.push_if_unvisited(index))
    }

    /// Continues the search at the smallest unvisited vertex, if there is any.
    /// ** Panics if the current tree is not exhausted yet **
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.stack.is_empty());
        let visited = self.visited.borrow();
        while self.next_unvisited < self.graph.size()
            && visited.get_bit(self.next_unvisited as u32)
        {
            self.next_unvisited += 1;
        }

        if self.next_unvisited < self.graph.size() {
            self.stack.push(self.next_unvisited);
            true
        } else {
            false
        }
    }

    /// Returns *true* if `vertex` has been entered so far
    pub fn did_visit(&self, vertex: Vertex) -> bool {
        self.graph
            .index(vertex)
            .is_ok_and(|u| self.visited.borrow().get_bit(u as u32))
    }

    /// Consumes the search and returns its visited set
    pub fn into_visited(self) -> V {
        self.visited
    }
}

impl<G, V> Iterator for DepthFirstSearch<'_, G, V>
where
    G: Successors,
    V: BorrowMut<VertexBitSet>,
{
    type Item = DfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let u = *self.stack.last()?;

        // `set_bit` returns the previous state of the bit
        if !self.visited.borrow_mut().set_bit(u as u32) {
            return Some(DfsEvent::Enter(Vertex::from_index(u)));
        }

        let degree = self.graph.degree(u);
        while self.cursor[u] < degree {
            let v = self.graph.ith_successor(u, self.cursor[u]);
            self.cursor[u] += 1;

            if self.visited.borrow_mut().set_bit(v as u32) {
                continue;
            }
            self.stack.push(v);
            return Some(DfsEvent::Enter(Vertex::from_index(v)));
        }

        self.stack.pop();
        Some(DfsEvent::Exit(Vertex::from_index(u)))
    }
}

/// Breadth-first search yielding vertices in order of their distance to the start.
///
/// A vertex is marked as visited when it is enqueued, so no vertex enters the queue twice.
pub struct BreadthFirstSearch<'a, G>
where
    G: Successors,
{
    graph: &'a G,
    visited: VertexBitSet,
    queue: VecDeque<usize>,
    parents: VertexMap,
    stop_at: Option<usize>,
}

impl<'a, G> BreadthFirstSearch<'a, G>
where
    G: Successors,
{
    /// Creates a search starting at position `start`.
    /// ** Panics if `start >= graph.size()` **
    pub(crate) fn new(graph: &'a G, start: usize) -> Self {
        assert!(start < graph.size());
        let mut visited = vertex_bitset(graph.size());
        visited.set_bit(start as u32);

        Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
            parents: VertexMap::new(graph.size()),
            stop_at: None,
        }
    }

    /// Ends the search right after `vertex` has been yielded.
    /// Vertices not belonging to the graph never stop the search.
    pub fn stop_at(mut self, vertex: Vertex) -> Self {
        self.stop_at = self.graph.index(vertex).ok();
        self
    }

    /// Returns the vertex from which `vertex` was discovered.
    /// The start and all undiscovered vertices have no parent.
    pub fn parent(&self, vertex: Vertex) -> Option<Vertex> {
        self.parents.get(vertex).ok().filter(|p| p.is_valid())
    }

    /// Returns the parents recorded so far
    pub fn parents(&self) -> &VertexMap {
        &self.parents
    }

    /// Returns *true* if `vertex` has been discovered so far
    pub fn did_visit(&self, vertex: Vertex) -> bool {
        self.graph
            .index(vertex)
            .is_ok_and(|u| self.visited.get_bit(u as u32))
    }
}

impl<G> Iterator for BreadthFirstSearch<'_, G>
where
    G: Successors,
{
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        if self.stop_at == Some(u) {
            self.queue.clear();
            return Some(Vertex::from_index(u));
        }

        for v in self.graph.successors_of(u) {
            if !self.visited.set_bit(v as u32) {
                self.parents.put(v, Vertex::from_index(u));
                self.queue.push_back(v);
            }
        }

        Some(Vertex::from_index(u))
    }
}

/// A random walk choosing every successor with the same probability.
/// Ends after yielding a vertex without successors; may be infinite otherwise.
pub struct RandomWalk<'a, G, R> {
    graph: &'a G,
    rng: R,
    current: Option<usize>,
}

impl<G, R> Iterator for RandomWalk<'_, G, R>
where
    G: Successors,
    R: Rng,
{
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.current?;
        let degree = self.graph.degree(u);

        self.current = if degree == 0 {
            None
        } else {
            let k = self.rng.random_range(0..degree);
            Some(self.graph.ith_successor(u, k))
        };
        Some(Vertex::from_index(u))
    }
}

/// A random walk choosing successors proportional to the weight of the link.
/// Links with non-positive weight are never taken. Ends after yielding a vertex without such a
/// link; may be infinite otherwise.
pub struct WeightedRandomWalk<'a, G, R> {
    graph: &'a G,
    rng: R,
    current: Option<usize>,
}

impl<G, R> Iterator for WeightedRandomWalk<'_, G, R>
where
    G: SuccessorsWeight,
    R: Rng,
{
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.current?;

        let total: i64 = self
            .graph
            .weighted_successors_of(u)
            .map(|(_, w)| (w as i64).max(0))
            .sum();

        self.current = if total == 0 {
            None
        } else {
            let mut target = self.rng.random_range(0..total);
            self.graph
                .weighted_successors_of(u)
                .filter(|&(_, w)| w > 0)
                .find(|&(_, w)| {
                    if target < w as i64 {
                        true
                    } else {
                        target -= w as i64;
                        false
                    }
                })
                .map(|(v, _)| v)
        };

        Some(Vertex::from_index(u))
    }
}

/// Traversal algorithms available on every graph with successors
pub trait Traversal: Successors + Sized {
    /// Calls `callback` for every vertex in increasing order
    fn for_each_vertex<F: FnMut(Vertex)>(&self, mut callback: F) {
        for u in 0..self.size() {
            callback(Vertex::from_index(u));
        }
    }

    /// Calls `callback` for every successor of `vertex` in increasing order.
    /// Fails with [`GraphError::VertexNotFound`] if `vertex` does not belong to the graph.
    fn for_each_successor<F: FnMut(Vertex)>(&self, vertex: Vertex, mut callback: F) -> Result<()> {
        let u = self.index(vertex)?;
        for v in self.successors_of(u) {
            callback(Vertex::from_index(v));
        }
        Ok(())
    }

    /// Calls `callback` with every successor of `vertex` and the weight of the link to it.
    /// Fails with [`GraphError::VertexNotFound`] if `vertex` does not belong to the graph.
    fn for_each_weighted_successor<F>(&self, vertex: Vertex, mut callback: F) -> Result<()>
    where
        Self: SuccessorsWeight,
        F: FnMut(Vertex, Weight),
    {
        let u = self.index(vertex)?;
        for (v, w) in self.weighted_successors_of(u) {
            callback(Vertex::from_index(v), w);
        }
        Ok(())
    }

    /// Calls `callback` for every arc, sorted by tail and then head
    fn for_each_arc<F: FnMut(Arc)>(&self, callback: F)
    where
        Self: Directed,
    {
        self.arcs().for_each(callback);
    }

    /// Calls `callback` for every edge exactly once
    fn for_each_edge<F: FnMut(Edge)>(&self, callback: F)
    where
        Self: Undirected,
    {
        self.edges().for_each(callback);
    }

    /// Returns a depth-first search starting at `from`.
    /// Fails with [`GraphError::VertexNotFound`] if `from` does not belong to the graph.
    ///
    /// ```
    /// use igraphs::{prelude::*, algo::*};
    ///
    /// let graph = AdjArray::from_arcs(3, [(0u32, 1u32), (0, 2)]).unwrap();
    /// let events: Vec<_> = graph.dfs(Vertex::new(0)).unwrap().collect();
    /// assert_eq!(events, vec![
    ///     DfsEvent::Enter(Vertex::new(0)),
    ///     DfsEvent::Enter(Vertex::new(1)),
    ///     DfsEvent::Exit(Vertex::new(1)),
    ///     DfsEvent::Enter(Vertex::new(2)),
    ///     DfsEvent::Exit(Vertex::new(2)),
    ///     DfsEvent::Exit(Vertex::new(0)),
    /// ]);
    /// ```
    fn dfs(&self, from: Vertex) -> Result<DepthFirstSearch<'_, Self>> {
        let start = self.index(from)?;
        Ok(DepthFirstSearch::new(self, start, vertex_bitset(self.size())))
    }

    /// Returns a depth-first search starting at `from` that skips and marks vertices in `visited`.
    /// Yields nothing if `from` is already visited.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if `from` does not belong to the graph and with
    /// [`GraphError::InvalidArgument`] if `visited` has fewer bits than the graph has vertices.
    fn dfs_with_visited<'a>(
        &'a self,
        from: Vertex,
        visited: &'a mut VertexBitSet,
    ) -> Result<DepthFirstSearch<'a, Self, &'a mut VertexBitSet>> {
        let start = self.index(from)?;
        if (visited.number_of_bits() as usize) < self.size() {
            return Err(GraphError::InvalidArgument(format!(
                "visited set holds {} vertices but the graph has {}",
                visited.number_of_bits(),
                self.size()
            )));
        }
        Ok(DepthFirstSearch::new(self, start, visited))
    }

    /// Calls `callback` for every vertex reachable from `from` in depth-first in-order.
    /// Fails with [`GraphError::VertexNotFound`] if `from` does not belong to the graph.
    fn for_each_vertex_depth_first<F: FnMut(Vertex)>(&self, from: Vertex, callback: F) -> Result<()> {
        self.dfs(from)?.filter_map(DfsEvent::entered).for_each(callback);
        Ok(())
    }

    /// Calls `callback` for every vertex reachable from `from` in depth-first post-order.
    /// Fails with [`GraphError::VertexNotFound`] if `from` does not belong to the graph.
    fn for_each_vertex_depth_first_post_order<F: FnMut(Vertex)>(
        &self,
        from: Vertex,
        callback: F,
    ) -> Result<()> {
        self.dfs(from)?.filter_map(DfsEvent::exited).for_each(callback);
        Ok(())
    }

    /// Returns a breadth-first search starting at `from`.
    /// Fails with [`GraphError::VertexNotFound`] if `from` does not belong to the graph.
    ///
    /// ```
    /// use igraphs::{prelude::*, algo::*};
    ///
    /// let graph = AdjArrayUndir::from_edges(4, [(0u32, 1u32), (1, 2), (0, 3)]).unwrap();
    /// let order: Vec<_> = graph.bfs(Vertex::new(0)).unwrap().map(|v| v.raw()).collect();
    /// assert_eq!(order, vec![0, 1, 3, 2]);
    /// ```
    fn bfs(&self, from: Vertex) -> Result<BreadthFirstSearch<'_, Self>> {
        let start = self.index(from)?;
        Ok(BreadthFirstSearch::new(self, start))
    }

    /// Calls `callback` for every vertex reachable from `from` in breadth-first order.
    /// Fails with [`GraphError::VertexNotFound`] if `from` does not belong to the graph.
    fn for_each_vertex_breadth_first<F: FnMut(Vertex)>(&self, from: Vertex, callback: F) -> Result<()> {
        self.bfs(from)?.for_each(callback);
        Ok(())
    }

    /// Returns a path with the fewest links from `from` to `to`, including both endpoints,
    /// or `None` if `to` is not reachable.
    /// Fails with [`GraphError::VertexNotFound`] if either endpoint does not belong to the graph.
    fn shortest_path_breadth_first(&self, from: Vertex, to: Vertex) -> Result<Option<VertexArray>> {
        self.index(to)?;
        let mut search = self.bfs(from)?.stop_at(to);
        if search.by_ref().any(|v| v == to) {
            Ok(path_from_parents(search.parents(), from, to))
        } else {
            Ok(None)
        }
    }

    /// Returns a random walk starting at `from` that picks successors uniformly at random.
    /// Fails with [`GraphError::VertexNotFound`] if `from` does not belong to the graph.
    fn random_walk<R: Rng>(&self, from: Vertex, rng: R) -> Result<RandomWalk<'_, Self, R>> {
        let start = self.index(from)?;
        Ok(RandomWalk {
            graph: self,
            rng,
            current: Some(start),
        })
    }

    /// Returns a random walk starting at `from` that picks successors proportional to the
    /// weight of the link, ignoring links with non-positive weight.
    /// Fails with [`GraphError::VertexNotFound`] if `from` does not belong to the graph.
    fn random_walk_weighted<R: Rng>(&self, from: Vertex, rng: R) -> Result<WeightedRandomWalk<'_, Self, R>>
    where
        Self: SuccessorsWeight,
    {
        let start = self.index(from)?;
        Ok(WeightedRandomWalk {
            graph: self,
            rng,
            current: Some(start),
        })
    }
}

impl<G> Traversal for G where G: Successors + Sized {}
