/*!
# Maximum Flow

Edmonds-Karp: repeatedly augment along a shortest (fewest links) path of the residual network
until the sink is no longer reachable from the source.

The weights of the input network are the capacities of its arcs. The running flow is an
immutable [`AdjArrayNetwork`] with exactly the arcs of the input; every augmentation produces a
new flow network instead of mutating the previous one. The residual network of a flow contains
- `u -> v` with capacity `c(u, v) - f(u, v)` if positive, and
- `v -> u` with capacity `f(u, v)` if positive,

where parallel residual arcs (caused by antiparallel input arcs) are merged by summing them.
Augmenting along a residual arc `u -> v` first pushes flow on the input arc `u -> v` and cancels
the remainder on `v -> u`.

Runs in `O(V E^2)`.
*/

use itertools::Itertools;
use tracing::{instrument, trace};

use super::*;
use crate::{
    builder::compaction::{compact_capacities, split_weighted},
    utils::packing::pack_weighted,
};

/// Builds the residual network of `flow` with respect to the capacities of `network`.
/// Merged residual capacities are capped at [`Weight::MAX`]; a single augmentation never moves
/// more than that along one pair.
fn residual<N: DirectedNetwork>(network: &N, flow: &AdjArrayNetwork) -> AdjArrayNetwork {
    let mut lists = vec![Vec::new(); network.size()];

    for u in 0..network.size() {
        for (k, (v, capacity)) in network.weighted_successors_of(u).enumerate() {
            let f = flow.ith_weight(u, k);

            if capacity - f > 0 {
                lists[u].push(pack_weighted(v as u32, capacity - f));
            }
            if f > 0 {
                lists[v].push(pack_weighted(u as u32, f));
            }
        }
    }

    let lists = lists.into_iter().map(compact_capacities).collect_vec();
    let (nbs, capacities) = split_weighted(&lists);
    AdjArrayNetwork::from_sorted_successors(nbs, capacities)
}

/// Returns the flow obtained by pushing `amount` along the residual `path`
fn augment<N: DirectedNetwork>(network: &N, flow: &AdjArrayNetwork, path: &[Vertex], amount: Weight) -> AdjArrayNetwork {
    let mut changes = Vec::with_capacity(2 * path.len());

    for (&a, &b) in path.iter().tuple_windows() {
        let (u, v) = (a.index(), b.index());
        let mut rest = amount;

        if let Some(k) = network.find_successor(u, v) {
            let push = rest.min(network.ith_weight(u, k) - flow.ith_weight(u, k));
            if push > 0 {
                changes.push(((u, k), push));
                rest -= push;
            }
        }

        if rest > 0 {
            if let Some(k) = network.find_successor(v, u) {
                changes.push(((v, k), -rest));
            }
        }
    }

    changes.sort_unstable();
    flow.map_weights(|u, k, f| {
        match changes.binary_search_by_key(&(u, k), |&(position, _)| position) {
            Ok(i) => f + changes[i].1,
            Err(_) => f,
        }
    })
}

/// Returns the net amount of flow leaving `source`, i.e. the value of the flow.
/// Fails with [`GraphError::VertexNotFound`] if `source` does not belong to `flow`.
pub fn flow_value<N: DirectedNetwork>(flow: &N, source: Vertex) -> Result<i64> {
    let s = flow.index(source)?;
    let outgoing: i64 = flow.weighted_successors_of(s).map(|(_, f)| f as i64).sum();
    let incoming: i64 = flow
        .weighted_arcs()
        .filter(|(arc, _)| arc.head() == source)
        .map(|(_, f)| f as i64)
        .sum();
    Ok(outgoing - incoming)
}

/// Maximum flows in directed networks whose weights are capacities
pub trait MaxFlow: DirectedNetwork + Sized {
    /// Computes a maximum flow from `source` to `sink` with the Edmonds-Karp algorithm.
    ///
    /// The result has exactly the arcs of `self`, weighted by the flow along them. A flow from a
    /// vertex to itself is zero everywhere.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if either endpoint does not belong to the network
    /// and with [`GraphError::IllegalWeight`] if an arc has a negative capacity.
    ///
    /// ```
    /// use igraphs::{prelude::*, algo::*};
    ///
    /// let network = AdjArrayNetwork::from_weighted_arcs(4, [(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 5)]).unwrap();
    /// let flow = network.max_flow_edmonds_karp(Vertex::new(0), Vertex::new(3)).unwrap();
    /// assert_eq!(flow_value(&flow, Vertex::new(0)), Ok(4));
    /// ```
    #[instrument(level = "debug", skip(self))]
    fn max_flow_edmonds_karp(&self, source: Vertex, sink: Vertex) -> Result<AdjArrayNetwork> {
        self.index(source)?;
        self.index(sink)?;

        if let Some((arc, weight)) = self.weighted_arcs().find(|&(_, w)| w < 0) {
            return Err(GraphError::IllegalWeight {
                from: arc.tail(),
                to: arc.head(),
                weight,
            });
        }

        let mut flow = AdjArrayNetwork::from_graph_with(self, |_| 0);
        if source == sink {
            return Ok(flow);
        }

        let mut augmentations = 0usize;
        loop {
            let residual = residual(self, &flow);
            let Some(path) = residual.shortest_path_breadth_first(source, sink)? else {
                break;
            };

            let mut bottleneck = Weight::MAX;
            for (&a, &b) in path.iter().tuple_windows() {
                bottleneck = bottleneck.min(residual.weight_between(a, b)?);
            }

            augmentations += 1;
            trace!(augmentations, bottleneck, length = path.len() - 1, "augmenting path");
            flow = augment(self, &flow, &path, bottleneck);
        }

        Ok(flow)
    }
}

impl<N> MaxFlow for N where N: DirectedNetwork + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn v(raw: u32) -> Vertex {
        Vertex::new(raw)
    }

    /// Checks capacity bounds and conservation at every vertex but `source` and `sink`
    fn assert_valid_flow<N: DirectedNetwork>(network: &N, flow: &AdjArrayNetwork, source: Vertex, sink: Vertex) {
        assert_eq!(flow.arcs().collect_vec(), network.arcs().collect_vec());
        for ((arc, capacity), (_, f)) in network.weighted_arcs().zip(flow.weighted_arcs()) {
            assert!(0 <= f && f <= capacity, "flow {f} on {arc} exceeds capacity {capacity}");
        }

        for u in network.vertices().filter(|&u| u != source && u != sink) {
            assert_eq!(flow_value(flow, u), Ok(0), "flow is not conserved at {u}");
        }
    }

    /// Computes the capacity of a minimum cut by brute force over all vertex subsets
    fn minimum_cut<N: DirectedNetwork>(network: &N, source: usize, sink: usize) -> i64 {
        let n = network.size();
        (0u32..1 << n)
            .filter(|set| set & (1 << source) != 0 && set & (1 << sink) == 0)
            .map(|set| {
                network
                    .weighted_arcs()
                    .filter(|(arc, _)| {
                        set & (1 << arc.tail().raw()) != 0 && set & (1 << arc.head().raw()) == 0
                    })
                    .map(|(_, w)| w as i64)
                    .sum::<i64>()
            })
            .min()
            .unwrap_or(0)
    }

    #[test]
    fn classical_fixture() {
        let (a, b, c, d, e, f, g) = (0, 1, 2, 3, 4, 5, 6);
        let network = AdjArrayNetwork::from_weighted_arcs(
            7,
            [
                (a, d, 3),
                (d, f, 6),
                (c, a, 3),
                (c, d, 1),
                (a, b, 3),
                (d, e, 2),
                (f, g, 9),
                (b, c, 4),
                (c, e, 2),
                (e, b, 1),
                (e, g, 1),
            ],
        )
        .unwrap();

        let flow = network.max_flow_edmonds_karp(v(a), v(g)).unwrap();
        assert_eq!(flow_value(&flow, v(a)), Ok(5));
        assert_eq!(flow_value(&flow, v(g)), Ok(-5));
        assert_valid_flow(&network, &flow, v(a), v(g));
    }

    #[test]
    fn antiparallel_arcs() {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3 with 1 <-> 2 in both directions
        let network = AdjArrayNetwork::from_weighted_arcs(
            4,
            [(0, 1, 4), (0, 2, 1), (1, 2, 3), (2, 1, 2), (1, 3, 1), (2, 3, 4)],
        )
        .unwrap();

        let flow = network.max_flow_edmonds_karp(v(0), v(3)).unwrap();
        assert_eq!(flow_value(&flow, v(0)), Ok(5));
        assert_valid_flow(&network, &flow, v(0), v(3));
    }

    #[test]
    fn degenerate_cases() {
        let network = AdjArrayNetwork::from_weighted_arcs(3, [(0, 1, 2), (1, 0, 2)]).unwrap();

        let flow = network.max_flow_edmonds_karp(v(0), v(0)).unwrap();
        assert!(flow.weighted_arcs().all(|(_, f)| f == 0));

        let flow = network.max_flow_edmonds_karp(v(0), v(2)).unwrap();
        assert_eq!(flow_value(&flow, v(0)), Ok(0));

        assert_eq!(
            network.max_flow_edmonds_karp(v(0), v(3)),
            Err(GraphError::VertexNotFound(v(3)))
        );

        let negative = AdjArrayNetwork::from_weighted_arcs(2, [(0, 1, -1)]).unwrap();
        assert_eq!(
            negative.max_flow_edmonds_karp(v(0), v(1)),
            Err(GraphError::IllegalWeight {
                from: v(0),
                to: v(1),
                weight: -1
            })
        );
    }

    #[test]
    fn saturated_antiparallel_capacities() {
        let network = AdjArrayNetwork::from_weighted_arcs(
            3,
            [(0, 1, Weight::MAX), (1, 2, Weight::MAX), (1, 0, 5)],
        )
        .unwrap();

        let flow = network.max_flow_edmonds_karp(v(0), v(2)).unwrap();
        assert_eq!(flow_value(&flow, v(0)), Ok(Weight::MAX as i64));
        assert_valid_flow(&network, &flow, v(0), v(2));

        // a full backward residual meets a full forward one on the same pair
        let network = AdjArrayNetwork::from_weighted_arcs(
            4,
            [(0, 1, Weight::MAX), (1, 0, Weight::MAX), (1, 3, Weight::MAX), (0, 2, 7), (2, 1, 7)],
        )
        .unwrap();
        let flow = network.max_flow_edmonds_karp(v(0), v(3)).unwrap();
        assert_eq!(flow_value(&flow, v(0)), Ok(Weight::MAX as i64));
        assert_valid_flow(&network, &flow, v(0), v(3));
    }

    #[test]
    fn max_flow_equals_min_cut() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for _ in 0..40 {
            let n = rng.random_range(2..9u32);
            let arcs = (0..rng.random_range(0..3 * n))
                .map(|_| (rng.random_range(0..n), rng.random_range(0..n), rng.random_range(0..10)))
                .collect_vec();
            let network = AdjArrayNetwork::from_weighted_arcs(n as usize, arcs).unwrap();

            let (s, t) = (0, n - 1);
            let flow = network.max_flow_edmonds_karp(v(s), v(t)).unwrap();

            assert_valid_flow(&network, &flow, v(s), v(t));
            assert_eq!(
                flow_value(&flow, v(s)).unwrap(),
                minimum_cut(&network, s as usize, t as usize)
            );
        }
    }
}
