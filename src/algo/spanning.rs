/*!
# Minimum Spanning Forests

Prim's algorithm, grown from every vertex in increasing order that is not yet part of a tree.
One [`IndexedMinHeap`] keyed by the lightest known link into the current tree is shared by all
trees. The result contains one tree per connected component of the input.
*/

use tracing::{instrument, trace};

use super::{shortest_path::tree_network, *};

/// Parents and weights of the links into them, shared by forests and single trees
struct Prim<'a, N> {
    network: &'a N,
    parents: VertexMap,
    weights: Vec<Weight>,
    in_tree: VertexBitSet,
    queue: IndexedMinHeap<Weight>,
}

impl<'a, N> Prim<'a, N>
where
    N: UndirectedNetwork,
{
    fn new(network: &'a N) -> Self {
        let n = network.size();
        Self {
            network,
            parents: VertexMap::new(n),
            weights: vec![0; n],
            in_tree: vertex_bitset(n),
            queue: IndexedMinHeap::new(n),
        }
    }

    /// Grows the tree containing `root`. Returns *false* if `root` already belongs to a tree.
    fn grow(&mut self, root: usize) -> bool {
        if self.in_tree.get_bit(root as u32) {
            return false;
        }

        self.queue.set(root, 0);
        while let Some((u, _)) = self.queue.pop() {
            self.in_tree.set_bit(u as u32);

            for (v, w) in self.network.weighted_successors_of(u) {
                if self.in_tree.get_bit(v as u32) {
                    continue;
                }
                if self.queue.priority(v).map_or(true, |best| w < best) {
                    self.parents.put(v, Vertex::from_index(u));
                    self.weights[v] = w;
                    self.queue.set(v, w);
                }
            }
        }
        true
    }
}

/// Minimum spanning forests and trees of undirected networks
pub trait SpanningForest: UndirectedNetwork + Sized {
    /// Returns a minimum spanning forest over the same vertices, with one tree per connected
    /// component.
    ///
    /// ```
    /// use igraphs::{prelude::*, algo::*};
    ///
    /// let network = AdjArrayNetworkUndir::from_weighted_edges(4, [(0, 1, 1), (1, 2, 2), (0, 2, 5)]).unwrap();
    /// let forest = network.minimum_spanning_forest().unwrap();
    /// assert_eq!(forest.number_of_edges(), 2);
    /// assert!(!forest.contains_edge(Edge::from((0u32, 2u32))));
    /// ```
    #[instrument(level = "debug", skip_all)]
    fn minimum_spanning_forest(&self) -> Result<AdjArrayNetworkUndir> {
        let mut prim = Prim::new(self);
        let trees = (0..self.size()).filter(|&u| prim.grow(u)).count();
        trace!(trees, "spanning forest complete");

        let edges = prim
            .parents
            .iter()
            .filter(|(_, p)| p.is_valid())
            .map(|(v, p)| (p.raw(), v.raw(), prim.weights[v.index()]));
        AdjArrayNetworkUndir::from_weighted_edges(self.size(), edges)
    }

    /// Returns a minimum spanning tree of the component containing `from`, with every link
    /// oriented away from `from`. Vertices outside the component stay isolated.
    /// Fails with [`GraphError::VertexNotFound`] if `from` does not belong to the network.
    #[instrument(level = "debug", skip(self))]
    fn minimum_spanning_tree(&self, from: Vertex) -> Result<AdjArrayNetwork> {
        let root = self.index(from)?;
        let mut prim = Prim::new(self);
        prim.grow(root);
        Ok(tree_network(&prim.parents, &prim.weights))
    }
}

impl<N> SpanningForest for N where N: UndirectedNetwork + Sized {}
