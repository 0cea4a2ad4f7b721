/// Every graph representation has to fulfill the contract of [`VertexSet`](crate::ops::VertexSet),
/// [`Successors`](crate::ops::Successors) and [`Predecessors`](crate::ops::Predecessors).
///
/// List-based and matrix-based representations are invoked with `directed` or `undirected` and a
/// function building the graph from `n` and a list of (possibly duplicate) raw links. Closed-form
/// representations are invoked with `complete` and a function building the graph from `n`.
macro_rules! test_graph_contract {
    ($env:ident, $graph:ty, directed, $build:expr) => {
        test_graph_contract!(@lists $env, $graph, false, $build, {
            #[test]
            fn containment() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);
                for n in [1u32, 8, 25] {
                    let links = random_links(rng, n, 2 * n as usize);
                    let graph = build(n as usize, &links);
                    let rows = model(n as usize, &links);

                    for (u, v) in (0..n).cartesian_product(0..n) {
                        assert_eq!(
                            graph.contains_arc(Arc::new(Vertex::new(u), Vertex::new(v))),
                            rows[u as usize].get_bit(v)
                        );
                    }
                    assert!(!graph.contains_arc(Arc::new(Vertex::new(0), Vertex::new(n))));
                    assert!(!graph.contains_arc(Arc::new(Vertex::INVALID, Vertex::new(0))));

                    let mut expected = links
                        .iter()
                        .map(|&(u, v)| Arc::new(Vertex::new(u), Vertex::new(v)))
                        .collect_vec();
                    expected.sort_unstable();
                    expected.dedup();
                    assert_eq!(graph.arcs().collect_vec(), expected);
                    assert_eq!(graph.number_of_arcs(), expected.len());
                }
            }
        });
    };
    ($env:ident, $graph:ty, undirected, $build:expr) => {
        test_graph_contract!(@lists $env, $graph, true, $build, {
            #[test]
            fn containment() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);
                for n in [1u32, 8, 25] {
                    let links = random_links(rng, n, 2 * n as usize);
                    let graph = build(n as usize, &links);
                    let rows = model(n as usize, &links);

                    for (u, v) in (0..n).cartesian_product(0..n) {
                        assert_eq!(
                            graph.contains_edge(Edge::new(Vertex::new(u), Vertex::new(v))),
                            rows[u as usize].get_bit(v)
                        );
                    }
                    assert!(!graph.contains_edge(Edge::new(Vertex::new(0), Vertex::new(n))));

                    let mut expected = links
                        .iter()
                        .map(|&(u, v)| Edge::new(Vertex::new(u), Vertex::new(v)))
                        .collect_vec();
                    expected.sort_unstable();
                    expected.dedup();
                    assert_eq!(graph.edges().collect_vec(), expected);
                    assert_eq!(graph.number_of_edges(), expected.len());
                }
            }
        });
    };
    ($env:ident, $graph:ty, complete, $build:expr) => {
        #[cfg(test)]
        mod $env {
            use super::*;
            use crate::{
                edge::Edge,
                error::GraphError,
                ops::*,
                testing::test_graph_contract,
                vertex::Vertex,
            };
            use itertools::Itertools;

            fn build(n: usize) -> $graph {
                let build: fn(usize) -> $graph = $build;
                build(n)
            }

            test_graph_contract!(@roundtrip $graph, build);

            #[test]
            fn successors_are_all_other_vertices() {
                for n in [1usize, 2, 7, 20] {
                    let graph = build(n);
                    for u in 0..n {
                        let expected = (0..n).filter(|&v| v != u).collect_vec();

                        assert_eq!(graph.successors_of(u).collect_vec(), expected);
                        assert_eq!(graph.predecessors_of(u).collect_vec(), expected);
                        assert_eq!(graph.successors_size(u), Ok(n - 1));
                        for (k, &v) in expected.iter().enumerate() {
                            assert_eq!(graph.ith_successor(u, k), v);
                            assert_eq!(graph.successor(u, k), Ok(Vertex::new(v as u32)));
                            assert_eq!(graph.find_successor(u, v), Some(k));
                        }
                        assert_eq!(
                            graph.successor(u, n - 1),
                            Err(GraphError::IndexOutOfRange { index: n - 1, len: n - 1 })
                        );

                        for v in 0..n {
                            let edge = Edge::new(Vertex::new(u as u32), Vertex::new(v as u32));
                            assert_eq!(graph.contains_edge(edge), u != v);
                        }
                    }

                    assert_eq!(graph.edges().count(), n * (n - 1) / 2);
                    assert!(graph.successors_size(n).is_err());
                }
            }
        }
    };
    (@lists $env:ident, $graph:ty, $undirected:literal, $build:expr, { $($containment:tt)* }) => {
        #[cfg(test)]
        mod $env {
            use super::*;
            #[allow(unused_imports)]
            use crate::{
                edge::{Arc, Edge},
                error::GraphError,
                ops::*,
                testing::test_graph_contract,
                utils::{vertex_bitset, VertexBitSet},
                vertex::Vertex,
            };
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            fn build(n: usize, links: &[(u32, u32)]) -> $graph {
                let build: fn(usize, &[(u32, u32)]) -> $graph = $build;
                build(n, links)
            }

            fn build_empty(n: usize) -> $graph {
                build(n, &[])
            }

            /// Creates `m` random links (including duplicates and self-loops) for vertices `0..n`
            fn random_links<R: Rng>(rng: &mut R, n: u32, m: usize) -> Vec<(u32, u32)> {
                (0..m)
                    .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                    .collect()
            }

            /// Adjacency matrix the representation is expected to agree with
            fn model(n: usize, links: &[(u32, u32)]) -> Vec<VertexBitSet> {
                let mut rows = vec![vertex_bitset(n); n];
                for &(u, v) in links {
                    rows[u as usize].set_bit(v);
                    if $undirected {
                        rows[v as usize].set_bit(u);
                    }
                }
                rows
            }

            test_graph_contract!(@roundtrip $graph, build_empty);

            #[test]
            fn successors_match_model() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [1u32, 5, 20, 50] {
                    for m in [n as usize, 3 * n as usize] {
                        for _ in 0..5 {
                            let links = random_links(rng, n, m);
                            let graph = build(n as usize, &links);
                            let rows = model(n as usize, &links);

                            for u in 0..n as usize {
                                let expected = rows[u].iter_set_bits().map(|v| v as usize).collect_vec();
                                let d = expected.len();

                                assert_eq!(graph.successors_of(u).collect_vec(), expected);
                                assert_eq!(graph.degree(u), d);
                                assert_eq!(graph.successors_size(u), Ok(d));

                                for (k, &v) in expected.iter().enumerate() {
                                    assert_eq!(graph.ith_successor(u, k), v);
                                    assert_eq!(graph.successor_index(u, k), Ok(v));
                                    assert_eq!(graph.successor(u, k), Ok(Vertex::new(v as u32)));
                                    assert_eq!(graph.find_successor(u, v), Some(k));
                                }

                                assert_eq!(
                                    graph.successor(u, d),
                                    Err(GraphError::IndexOutOfRange { index: d, len: d })
                                );
                            }

                            let n = n as usize;
                            assert_eq!(
                                graph.successors_size(n),
                                Err(GraphError::IndexOutOfRange { index: n, len: n })
                            );
                            assert!(graph.successor(n, 0).is_err());
                        }
                    }
                }
            }

            #[test]
            fn predecessors_match_model() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for n in [1u32, 10, 30] {
                    let links = random_links(rng, n, 3 * n as usize);
                    let graph = build(n as usize, &links);
                    let rows = model(n as usize, &links);

                    for v in 0..n {
                        let expected = (0..n as usize)
                            .filter(|&u| rows[u].get_bit(v))
                            .collect_vec();

                        assert_eq!(graph.predecessors_of(v as usize).collect_vec(), expected);
                        assert_eq!(graph.in_degree(v as usize), expected.len());
                        assert_eq!(graph.predecessors_size(v as usize), Ok(expected.len()));
                    }
                }
            }

            $($containment)*
        }
    };
    (@roundtrip $graph:ty, $of_size:ident) => {
        #[test]
        fn vertex_roundtrip() {
            for n in [0usize, 1, 7, 30] {
                let graph: $graph = $of_size(n);

                assert_eq!(graph.size(), n);
                assert_eq!(graph.is_empty(), n == 0);
                for i in 0..n {
                    let v = graph.vertex(i).unwrap();
                    assert_eq!(v.index(), i);
                    assert_eq!(graph.index(v), Ok(i));
                    assert!(graph.contains_vertex(v));
                }
                assert_eq!(
                    graph.vertices().collect_vec(),
                    (0..n as u32).map(Vertex::new).collect_vec()
                );

                assert_eq!(
                    graph.vertex(n),
                    Err(GraphError::IndexOutOfRange { index: n, len: n })
                );
                let outside = Vertex::new(n as u32);
                assert_eq!(graph.index(outside), Err(GraphError::VertexNotFound(outside)));
                assert_eq!(
                    graph.index(Vertex::INVALID),
                    Err(GraphError::VertexNotFound(Vertex::INVALID))
                );
                assert!(!graph.contains_vertex(outside));
            }
        }
    };
}

pub(crate) use test_graph_contract;
