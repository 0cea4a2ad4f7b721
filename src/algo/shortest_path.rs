/*!
# Single-Source Shortest Paths

Both algorithms compute a [`ShortestPathTree`]: the parent of every vertex reachable from the
source together with its distance. Distances are accumulated in `i64`, so they never wrap.

- **Dijkstra** relaxes vertices in order of their tentative distance using an
  [`IndexedMinHeap`] with decrease-key. It fails with [`GraphError::IllegalWeight`] as soon as a
  negative link from a finalized vertex to an unfinalized one is relaxed. Negative links that are
  never relaxed (e.g. in components not reachable from the source) are accepted.
- **SPFA** (the queue-based variant of Bellman-Ford) accepts negative weights. A vertex is only
  enqueued if it is not queued already. If some vertex is enqueued more than `size` times, a
  negative cycle is reachable from the source and the search fails with
  [`GraphError::NegativeCycle`] instead of looping forever.
*/

use std::collections::VecDeque;

use tracing::{instrument, trace};

use super::*;

/// Parents and distances of all vertices reachable from a source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: Vertex,
    parents: VertexMap,
    /// Weight of the link from the parent, `0` for vertices without parent
    parent_weights: Vec<Weight>,
    distances: Vec<Option<i64>>,
}

impl ShortestPathTree {
    /// Returns the source of the tree
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Returns the parent of `vertex`, or `None` for the source and unreachable vertices.
    /// Fails with [`GraphError::VertexNotFound`] if `vertex` does not belong to the graph.
    pub fn parent(&self, vertex: Vertex) -> Result<Option<Vertex>> {
        Ok(Some(self.parents.get(vertex)?).filter(|p| p.is_valid()))
    }

    /// Returns the length of a shortest path from the source to `vertex`.
    /// Returns `None` if `vertex` is unreachable or does not belong to the graph.
    pub fn distance(&self, vertex: Vertex) -> Option<i64> {
        self.distances.get(vertex.index()).copied().flatten()
    }

    /// Returns the parent map, where the source and unreachable vertices map to [`Vertex::INVALID`]
    pub fn parents(&self) -> &VertexMap {
        &self.parents
    }

    /// Returns a shortest path from the source to `vertex` including both endpoints,
    /// or `None` if `vertex` is unreachable.
    /// Fails with [`GraphError::VertexNotFound`] if `vertex` does not belong to the graph.
    pub fn path_to(&self, vertex: Vertex) -> Result<Option<VertexArray>> {
        self.parents.get(vertex)?;
        Ok(path_from_parents(&self.parents, self.source, vertex))
    }

    /// Materializes the tree as a directed network over the same vertices, with one arc from
    /// every parent to its child weighted like the original link
    pub fn to_network(&self) -> AdjArrayNetwork {
        tree_network(&self.parents, &self.parent_weights)
    }
}

/// Walks the parent links from `to` back to `from`.
/// Returns `None` if a vertex without parent is reached before `from`.
pub(crate) fn path_from_parents(parents: &VertexMap, from: Vertex, to: Vertex) -> Option<VertexArray> {
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        current = parents.get(current).ok().filter(|p| p.is_valid())?;
        path.push(current);

        // parent maps produced by this crate are acyclic; anything longer is a corrupt map
        if path.len() > parents.len() {
            return None;
        }
    }
    path.reverse();
    Some(path.into())
}

/// Builds a directed network with one arc `parents[v] -> v` of weight `weights[v]` for every
/// vertex `v` with a parent
pub(crate) fn tree_network(parents: &VertexMap, weights: &[Weight]) -> AdjArrayNetwork {
    let mut children: Vec<Vec<(u32, Weight)>> = vec![Vec::new(); parents.len()];
    for (v, p) in parents.iter().filter(|(_, p)| p.is_valid()) {
        children[p.index()].push((v.raw(), weights[v.index()]));
    }

    let out_nbs = SlicedBuffer::from_slices(children.iter().map(|c| c.iter().map(|&(v, _)| v)));
    let weights = children.into_iter().flatten().map(|(_, w)| w).collect();
    AdjArrayNetwork::from_sorted_successors(out_nbs, weights)
}

fn dijkstra<N: SuccessorsWeight>(network: &N, source: usize) -> Result<ShortestPathTree> {
    let n = network.size();
    let mut parents = VertexMap::new(n);
    let mut parent_weights = vec![0; n];
    let mut distances = vec![None; n];
    let mut finalized = vertex_bitset(n);
    let mut queue = IndexedMinHeap::new(n);

    distances[source] = Some(0i64);
    queue.set(source, 0i64);

    while let Some((u, du)) = queue.pop() {
        finalized.set_bit(u as u32);

        for (v, w) in network.weighted_successors_of(u) {
            if finalized.get_bit(v as u32) {
                continue;
            }
            if w < 0 {
                return Err(GraphError::IllegalWeight {
                    from: Vertex::from_index(u),
                    to: Vertex::from_index(v),
                    weight: w,
                });
            }

            let alt = du + w as i64;
            if distances[v].map_or(true, |dv| alt < dv) {
                distances[v] = Some(alt);
                parents.put(v, Vertex::from_index(u));
                parent_weights[v] = w;
                queue.set(v, alt);
            }
        }
    }

    Ok(ShortestPathTree {
        source: Vertex::from_index(source),
        parents,
        parent_weights,
        distances,
    })
}

fn spfa<N: SuccessorsWeight>(network: &N, source: usize) -> Result<ShortestPathTree> {
    let n = network.size();
    let mut parents = VertexMap::new(n);
    let mut parent_weights = vec![0; n];
    let mut distances = vec![None; n];
    let mut queued = vertex_bitset(n);
    let mut enqueued = vec![0usize; n];
    let mut queue = VecDeque::new();

    distances[source] = Some(0i64);
    queued.set_bit(source as u32);
    enqueued[source] = 1;
    queue.push_back(source);

    let mut relaxations = 0usize;
    while let Some(u) = queue.pop_front() {
        queued.clear_bit(u as u32);
        let Some(du) = distances[u] else {
            continue;
        };

        for (v, w) in network.weighted_successors_of(u) {
            let alt = du + w as i64;
            if distances[v].is_some_and(|dv| dv <= alt) {
                continue;
            }

            relaxations += 1;
            distances[v] = Some(alt);
            parents.put(v, Vertex::from_index(u));
            parent_weights[v] = w;

            if !queued.set_bit(v as u32) {
                enqueued[v] += 1;
                if enqueued[v] > n {
                    return Err(GraphError::NegativeCycle(Vertex::from_index(source)));
                }
                queue.push_back(v);
            }
        }
    }
    trace!(relaxations, "spfa finished");

    Ok(ShortestPathTree {
        source: Vertex::from_index(source),
        parents,
        parent_weights,
        distances,
    })
}

/// Single-source shortest paths on networks
pub trait ShortestPaths: SuccessorsWeight + Sized {
    /// Computes shortest paths from `from` with Dijkstra's algorithm.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if `from` does not belong to the network and with
    /// [`GraphError::IllegalWeight`] if a negative link is relaxed.
    ///
    /// ```
    /// use igraphs::{prelude::*, algo::*};
    ///
    /// let network = AdjArrayNetwork::from_weighted_arcs(3, [(0, 1, 4), (0, 2, 1), (2, 1, 2)]).unwrap();
    /// let tree = network.shortest_paths_dijkstra(Vertex::new(0)).unwrap();
    /// assert_eq!(tree.distance(Vertex::new(1)), Some(3));
    /// assert_eq!(tree.parent(Vertex::new(1)), Ok(Some(Vertex::new(2))));
    /// ```
    #[instrument(level = "debug", skip(self))]
    fn shortest_paths_dijkstra(&self, from: Vertex) -> Result<ShortestPathTree> {
        let source = self.index(from)?;
        dijkstra(self, source)
    }

    /// Computes shortest paths from `from` with the shortest path faster algorithm.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if `from` does not belong to the network and with
    /// [`GraphError::NegativeCycle`] if a negative cycle is reachable from `from`.
    #[instrument(level = "debug", skip(self))]
    fn shortest_paths_spfa(&self, from: Vertex) -> Result<ShortestPathTree> {
        let source = self.index(from)?;
        spfa(self, source)
    }

    /// Returns a shortest path from `from` to `to` computed by Dijkstra's algorithm, or `None` if
    /// `to` is unreachable. Fails like [`ShortestPaths::shortest_paths_dijkstra`] or with
    /// [`GraphError::VertexNotFound`] if `to` does not belong to the network.
    fn shortest_path_dijkstra(&self, from: Vertex, to: Vertex) -> Result<Option<VertexArray>> {
        self.index(to)?;
        self.shortest_paths_dijkstra(from)?.path_to(to)
    }

    /// Returns a shortest path from `from` to `to` computed by the shortest path faster algorithm,
    /// or `None` if `to` is unreachable. Fails like [`ShortestPaths::shortest_paths_spfa`] or with
    /// [`GraphError::VertexNotFound`] if `to` does not belong to the network.
    fn shortest_path_spfa(&self, from: Vertex, to: Vertex) -> Result<Option<VertexArray>> {
        self.index(to)?;
        self.shortest_paths_spfa(from)?.path_to(to)
    }

    /// Returns the shortest path tree of `from` computed by Dijkstra's algorithm as a network
    fn shortest_path_tree_dijkstra(&self, from: Vertex) -> Result<AdjArrayNetwork> {
        Ok(self.shortest_paths_dijkstra(from)?.to_network())
    }

    /// Returns the shortest path tree of `from` computed by the shortest path faster algorithm
    /// as a network
    fn shortest_path_tree_spfa(&self, from: Vertex) -> Result<AdjArrayNetwork> {
        Ok(self.shortest_paths_spfa(from)?.to_network())
    }
}

impl<N> ShortestPaths for N where N: SuccessorsWeight + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn v(raw: u32) -> Vertex {
        Vertex::new(raw)
    }

    fn raw(path: Option<VertexArray>) -> Option<Vec<u32>> {
        path.map(|p| p.into_iter().map(|v| v.raw()).collect())
    }

    fn sample_network() -> AdjArrayNetwork {
        //      1       3
        //  0 ----> 1 ----> 3
        //  |4      ^1      |1
        //  v       |       v
        //  2 ------+       4      5 (isolated)
        AdjArrayNetwork::from_weighted_arcs(6, [(0, 1, 1), (0, 2, 4), (2, 1, 1), (1, 3, 3), (3, 4, 1)])
            .unwrap()
    }

    #[test]
    fn dijkstra_distances_and_paths() {
        let network = sample_network();
        let tree = network.shortest_paths_dijkstra(v(0)).unwrap();

        assert_eq!(tree.source(), v(0));
        assert_eq!(
            (0..6).map(|u| tree.distance(v(u))).collect_vec(),
            vec![Some(0), Some(1), Some(4), Some(4), Some(5), None]
        );
        assert_eq!(tree.parent(v(0)), Ok(None));
        assert_eq!(tree.parent(v(4)), Ok(Some(v(3))));
        assert_eq!(tree.parent(v(6)), Err(GraphError::VertexNotFound(v(6))));
        assert_eq!(tree.distance(v(6)), None);

        assert_eq!(raw(tree.path_to(v(4)).unwrap()), Some(vec![0, 1, 3, 4]));
        assert_eq!(raw(tree.path_to(v(0)).unwrap()), Some(vec![0]));
        assert_eq!(tree.path_to(v(5)), Ok(None));

        assert_eq!(
            raw(network.shortest_path_dijkstra(v(2), v(4)).unwrap()),
            Some(vec![2, 1, 3, 4])
        );
        assert_eq!(network.shortest_path_dijkstra(v(4), v(0)), Ok(None));
        assert_eq!(
            network.shortest_path_dijkstra(v(0), v(9)),
            Err(GraphError::VertexNotFound(v(9)))
        );
        assert_eq!(
            network.shortest_paths_dijkstra(v(9)),
            Err(GraphError::VertexNotFound(v(9)))
        );
    }

    #[test]
    fn dijkstra_uses_decrease_key() {
        let network = AdjArrayNetwork::from_weighted_arcs(4, [(0, 1, 10), (0, 2, 1), (2, 1, 1), (1, 3, 1)]).unwrap();
        let tree = network.shortest_paths_dijkstra(v(0)).unwrap();
        assert_eq!(tree.distance(v(1)), Some(2));
        assert_eq!(tree.distance(v(3)), Some(3));
        assert_eq!(tree.parent(v(1)), Ok(Some(v(2))));
    }

    #[test]
    fn dijkstra_rejects_negative_weights() {
        let network = AdjArrayNetwork::from_weighted_arcs(2, [(0, 1, -1)]).unwrap();
        assert_eq!(
            network.shortest_paths_dijkstra(v(0)),
            Err(GraphError::IllegalWeight {
                from: v(0),
                to: v(1),
                weight: -1
            })
        );

        // the negative arc is never relaxed from 1
        let tree = network.shortest_paths_dijkstra(v(1)).unwrap();
        assert_eq!(tree.distance(v(0)), None);

        // a negative self-loop leads to a finalized vertex
        let network = AdjArrayNetwork::from_weighted_arcs(2, [(0, 0, -5), (0, 1, 2)]).unwrap();
        assert_eq!(network.shortest_paths_dijkstra(v(0)).unwrap().distance(v(1)), Some(2));
    }

    #[test]
    fn spfa_accepts_negative_weights() {
        let network = AdjArrayNetwork::from_weighted_arcs(2, [(0, 1, -1)]).unwrap();
        let tree = network.shortest_paths_spfa(v(0)).unwrap();
        assert_eq!(tree.distance(v(1)), Some(-1));
        assert_eq!(raw(network.shortest_path_spfa(v(0), v(1)).unwrap()), Some(vec![0, 1]));

        let network =
            AdjArrayNetwork::from_weighted_arcs(4, [(0, 1, 5), (0, 2, 2), (1, 3, -4), (2, 3, 0), (2, 1, 1)]).unwrap();
        let tree = network.shortest_paths_spfa(v(0)).unwrap();
        assert_eq!(tree.distance(v(3)), Some(-1));
        assert_eq!(raw(tree.path_to(v(3)).unwrap()), Some(vec![0, 2, 1, 3]));
    }

    #[test]
    fn spfa_detects_negative_cycles() {
        let network = AdjArrayNetwork::from_weighted_arcs(3, [(0, 1, 1), (1, 2, -3), (2, 1, 1)]).unwrap();
        assert_eq!(
            network.shortest_paths_spfa(v(0)),
            Err(GraphError::NegativeCycle(v(0)))
        );

        // unreachable negative cycles are fine
        let network = AdjArrayNetwork::from_weighted_arcs(3, [(0, 1, 1), (2, 2, -3)]).unwrap();
        assert_eq!(network.shortest_paths_spfa(v(0)).unwrap().distance(v(1)), Some(1));

        // negative undirected edges are negative cycles of length two
        let network = AdjArrayNetworkUndir::from_weighted_edges(2, [(0, 1, -1)]).unwrap();
        assert!(matches!(
            network.shortest_paths_spfa(v(0)),
            Err(GraphError::NegativeCycle(_))
        ));
    }

    #[test]
    fn dijkstra_and_spfa_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..30 {
            let n = rng.random_range(1..40u32);
            let arcs = (0..rng.random_range(0..4 * n))
                .map(|_| (rng.random_range(0..n), rng.random_range(0..n), rng.random_range(0..100)))
                .collect_vec();
            let network = AdjArrayNetwork::from_weighted_arcs(n as usize, arcs).unwrap();
            let source = v(rng.random_range(0..n));

            let dijkstra = network.shortest_paths_dijkstra(source).unwrap();
            let spfa = network.shortest_paths_spfa(source).unwrap();
            for u in network.vertices() {
                assert_eq!(dijkstra.distance(u), spfa.distance(u));

                if let Some(path) = dijkstra.path_to(u).unwrap() {
                    let length: i64 = path
                        .iter()
                        .tuple_windows()
                        .map(|(&a, &b)| network.weight_between(a, b).unwrap() as i64)
                        .sum();
                    assert_eq!(Some(length), dijkstra.distance(u));
                }
            }
        }
    }

    /// Relaxes every arc `n - 1` times
    fn bellman_ford(network: &AdjArrayNetwork, source: usize) -> Vec<Option<i64>> {
        let mut distances = vec![None; network.size()];
        distances[source] = Some(0);

        for _ in 1..network.size() {
            for (arc, w) in network.weighted_arcs() {
                if let Some(d) = distances[arc.tail().index()] {
                    let head = &mut distances[arc.head().index()];
                    if head.map_or(true, |h| d + (w as i64) < h) {
                        *head = Some(d + w as i64);
                    }
                }
            }
        }
        distances
    }

    #[test]
    fn spfa_matches_bellman_ford_on_negative_dags() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for _ in 0..100 {
            let n = rng.random_range(1..30u32);
            // arcs only point to larger vertices, so no cycle exists
            let arcs = (0..rng.random_range(0..4 * n))
                .map(|_| (rng.random_range(0..n), rng.random_range(0..n), rng.random_range(-50..50)))
                .filter(|&(u, w, _)| u != w)
                .map(|(u, w, weight)| (u.min(w), u.max(w), weight))
                .unique_by(|&(u, w, _)| (u, w))
                .collect_vec();
            let network = AdjArrayNetwork::from_weighted_arcs(n as usize, arcs).unwrap();
            let source = rng.random_range(0..n);

            let spfa = network.shortest_paths_spfa(v(source)).unwrap();
            let expected = bellman_ford(&network, source as usize);
            for u in network.vertices() {
                assert_eq!(spfa.distance(u), expected[u.index()]);
            }
        }
    }

    #[test]
    fn shortest_path_tree_network() {
        let network = sample_network();
        let tree = network.shortest_path_tree_dijkstra(v(0)).unwrap();

        assert_eq!(tree.size(), 6);
        assert_eq!(
            tree.weighted_arcs().map(|(a, w)| (a.tail().raw(), a.head().raw(), w)).collect_vec(),
            vec![(0, 1, 1), (0, 2, 4), (1, 3, 3), (3, 4, 1)]
        );
        assert_eq!(tree.in_degree(4), 1);
        assert_eq!(network.shortest_path_tree_spfa(v(0)).unwrap(), tree);
    }

    #[test]
    fn path_reconstruction() {
        let mut parents = VertexMap::new(4);
        parents.set(v(1), v(0)).unwrap();
        parents.set(v(2), v(1)).unwrap();

        assert_eq!(raw(path_from_parents(&parents, v(0), v(2))), Some(vec![0, 1, 2]));
        assert_eq!(raw(path_from_parents(&parents, v(1), v(2))), Some(vec![1, 2]));
        assert_eq!(raw(path_from_parents(&parents, v(0), v(3))), None);
        assert_eq!(raw(path_from_parents(&parents, v(2), v(0))), None);

        parents.set(v(0), v(2)).unwrap();
        assert_eq!(raw(path_from_parents(&parents, v(3), v(2))), None);
    }
}
