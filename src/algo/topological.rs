/*!
# Topological Sorting

Kahn's algorithm: count the incoming arcs of every vertex, seed a queue with all vertices
without incoming arcs and repeatedly remove the front vertex together with its outgoing arcs.
If the queue runs dry before every vertex has been removed, the remaining vertices lie on or
behind a cycle and no order exists.
*/

use std::collections::VecDeque;

use tracing::instrument;

use super::*;

/// Topological orders of directed graphs
pub trait TopologicalSort: Directed + Sized {
    /// Returns all vertices ordered such that every arc points from an earlier to a later vertex.
    /// Among the vertices that are ready at the same time, smaller vertices come first.
    ///
    /// Fails with [`GraphError::CycleDetected`] if the graph contains a cycle (including self-loops).
    ///
    /// ```
    /// use igraphs::{prelude::*, algo::*};
    ///
    /// let graph = AdjArray::from_arcs(3, [(2u32, 0u32), (0, 1)]).unwrap();
    /// assert_eq!(graph.topological_sort().unwrap().to_vec(), vec![Vertex::new(2), Vertex::new(0), Vertex::new(1)]);
    ///
    /// let cyclic = AdjArray::from_arcs(2, [(0u32, 1u32), (1, 0)]).unwrap();
    /// assert_eq!(cyclic.topological_sort(), Err(GraphError::CycleDetected));
    /// ```
    #[instrument(level = "debug", skip_all)]
    fn topological_sort(&self) -> Result<VertexArray> {
        let n = self.size();
        let mut in_degrees = vec![0usize; n];
        for u in 0..n {
            for v in self.successors_of(u) {
                in_degrees[v] += 1;
            }
        }

        let mut queue: VecDeque<usize> = (0..n).filter(|&u| in_degrees[u] == 0).collect();
        let mut order = Vec::with_capacity(n);

        while let Some(u) = queue.pop_front() {
            order.push(Vertex::from_index(u));
            for v in self.successors_of(u) {
                in_degrees[v] -= 1;
                if in_degrees[v] == 0 {
                    queue.push_back(v);
                }
            }
        }

        if order.len() < n {
            return Err(GraphError::CycleDetected);
        }
        Ok(order.into())
    }

    /// Returns *true* if the graph contains no cycle
    fn is_acyclic(&self) -> bool {
        self.topological_sort().is_ok()
    }
}

impl<G> TopologicalSort for G where G: Directed + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{seq::SliceRandom, Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn cycles_are_detected() {
        let self_loop = AdjArray::from_arcs(3, [(0u32, 1u32), (1, 1)]).unwrap();
        assert_eq!(self_loop.topological_sort(), Err(GraphError::CycleDetected));
        assert!(!self_loop.is_acyclic());

        let two_cycle = AdjArray::from_arcs(3, [(0u32, 1u32), (1, 2), (2, 1)]).unwrap();
        assert_eq!(two_cycle.topological_sort(), Err(GraphError::CycleDetected));

        let matrix = AdjMatrix::from_rows(&[[false, true], [true, false]]).unwrap();
        assert!(!matrix.is_acyclic());
    }

    #[test]
    fn orders_are_kahn_orders() {
        let graph = AdjArray::from_arcs(6, [(5u32, 2u32), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)]).unwrap();
        let order = graph.topological_sort().unwrap();
        assert_eq!(order.iter().map(|v| v.raw()).collect_vec(), vec![4, 5, 0, 2, 3, 1]);

        assert!(EmptyGraph.topological_sort().unwrap().is_empty());
        assert_eq!(
            AdjArray::from_arcs(3, Vec::<(u32, u32)>::new())
                .unwrap()
                .topological_sort()
                .unwrap()
                .to_vec(),
            vec![Vertex::new(0), Vertex::new(1), Vertex::new(2)]
        );
    }

    #[test]
    fn random_dags() {
        let rng = &mut Pcg64Mcg::seed_from_u64(61);

        for _ in 0..30 {
            let n = rng.random_range(1..50u32);
            let mut hidden = (0..n).collect_vec();
            hidden.shuffle(rng);

            // arcs only go forward in the hidden order
            let arcs = (0..rng.random_range(0..3 * n))
                .map(|_| {
                    let (i, j) = (rng.random_range(0..n) as usize, rng.random_range(0..n) as usize);
                    (hidden[i.min(j)], hidden[i.max(j)])
                })
                .filter(|(u, v)| u != v)
                .collect_vec();
            let graph = AdjArray::from_arcs(n as usize, arcs).unwrap();

            let order = graph.topological_sort().unwrap();
            assert_eq!(order.iter().sorted().copied().collect_vec(), graph.vertices().collect_vec());

            let mut position = vec![0; n as usize];
            for (i, v) in order.iter().enumerate() {
                position[v.index()] = i;
            }
            for arc in graph.arcs() {
                assert!(position[arc.tail().index()] < position[arc.head().index()]);
            }
        }
    }
}
