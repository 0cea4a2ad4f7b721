/*!
# Adjacency Matrices

- [`AdjMatrix`]: a directed graph storing one [`VertexBitSet`] row per vertex.
- [`AdjMatrixUndir`]: an undirected graph storing a symmetric matrix.

Containment is a single bit lookup. Positional successor access scans the row for the `k`th
set bit and therefore takes `O(d)` time.
*/

use itertools::Itertools;

use crate::{
    edge::{Arc, Edge},
    error::{GraphError, Result},
    ops::*,
    testing::test_graph_contract,
    utils::VertexBitSet,
};

/// A directed graph represented by a bitset-based adjacency matrix
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdjMatrix {
    rows: Vec<VertexBitSet>,
}

/// An undirected graph represented by a symmetric bitset-based adjacency matrix
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdjMatrixUndir {
    rows: Vec<VertexBitSet>,
}

/// Copies the successors of every vertex of `graph` into one bitset row each
fn rows_of<G: Graph>(graph: &G) -> Vec<VertexBitSet> {
    let n = graph.size();
    (0..n)
        .map(|u| VertexBitSet::new_with_bits_set(n as u32, graph.successors_of(u).map(|v| v as u32)))
        .collect()
}

/// Converts rows of booleans into bitset rows, checking the matrix is square
fn rows_from_bools<R: AsRef<[bool]>>(rows: &[R]) -> Result<Vec<VertexBitSet>> {
    let n = rows.len();
    rows.iter()
        .enumerate()
        .map(|(u, row)| {
            let row = row.as_ref();
            if row.len() != n {
                return Err(GraphError::InvalidArgument(format!(
                    "row {u} has {} entries but the matrix has {n} rows",
                    row.len()
                )));
            }

            Ok(VertexBitSet::new_with_bits_set(
                n as u32,
                row.iter().positions(|&b| b).map(|v| v as u32),
            ))
        })
        .collect()
}

macro_rules! impl_matrix_ops {
    ($struct:ident) => {
        impl VertexSet for $struct {
            fn size(&self) -> usize {
                self.rows.len()
            }
        }

        impl Successors for $struct {
            fn degree(&self, index: usize) -> usize {
                self.rows[index].cardinality() as usize
            }

            fn ith_successor(&self, index: usize, k: usize) -> usize {
                match self.rows[index].iter_set_bits().nth(k) {
                    Some(v) => v as usize,
                    None => panic!("vertex {index} has less than {} successors", k + 1),
                }
            }

            fn successors_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
                self.rows[index].iter_set_bits().map(|v| v as usize)
            }

            fn find_successor(&self, index: usize, neighbor: usize) -> Option<usize> {
                let row = &self.rows[index];
                (neighbor < self.rows.len() && row.get_bit(neighbor as u32))
                    .then(|| row.iter_set_bits().take_while(|&v| (v as usize) < neighbor).count())
            }
        }

        impl Predecessors for $struct {
            fn in_degree(&self, index: usize) -> usize {
                self.rows.iter().filter(|row| row.get_bit(index as u32)).count()
            }

            fn ith_predecessor(&self, index: usize, k: usize) -> usize {
                match self.predecessors_of(index).nth(k) {
                    Some(v) => v,
                    None => panic!("vertex {index} has less than {} predecessors", k + 1),
                }
            }

            fn predecessors_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
                assert!(index < self.rows.len());
                self.rows
                    .iter()
                    .positions(move |row| row.get_bit(index as u32))
            }
        }

        impl $struct {
            /// Returns *true* if the entry in row `u` and column `v` is set.
            /// ** Panics if `u >= size || v >= size` **
            pub fn has_link(&self, u: usize, v: usize) -> bool {
                assert!(v < self.rows.len());
                self.rows[u].get_bit(v as u32)
            }

            /// Returns the row of the vertex at `index`.
            /// ** Panics if `index >= size` **
            pub fn row(&self, index: usize) -> &VertexBitSet {
                &self.rows[index]
            }
        }
    };
}

impl_matrix_ops!(AdjMatrix);
impl_matrix_ops!(AdjMatrixUndir);

impl Directed for AdjMatrix {
    fn contains_arc(&self, arc: Arc) -> bool {
        match (self.index(arc.tail()), self.index(arc.head())) {
            (Ok(u), Ok(v)) => self.rows[u].get_bit(v as u32),
            _ => false,
        }
    }
}

impl Undirected for AdjMatrixUndir {
    fn contains_edge(&self, edge: Edge) -> bool {
        match (self.index(edge.u()), self.index(edge.v())) {
            (Ok(u), Ok(v)) => self.rows[u].get_bit(v as u32),
            _ => false,
        }
    }
}

impl AdjMatrix {
    /// Creates a matrix with the same arcs as `graph`
    pub fn from_graph<G: DirectedGraph>(graph: &G) -> Self {
        Self {
            rows: rows_of(graph),
        }
    }

    /// Creates a matrix from rows of booleans, where `rows[u][v]` denotes the arc `u -> v`.
    /// Fails with [`GraphError::InvalidArgument`] if the matrix is not square.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        Ok(Self {
            rows: rows_from_bools(rows)?,
        })
    }
}

impl AdjMatrixUndir {
    /// Creates a matrix with the same edges as `graph`
    pub fn from_graph<G: UndirectedGraph>(graph: &G) -> Self {
        Self {
            rows: rows_of(graph),
        }
    }

    /// Creates a matrix from rows of booleans, where `rows[u][v]` denotes the edge `{u, v}`.
    /// Fails with [`GraphError::InvalidArgument`] if the matrix is not square or not symmetric.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let rows = rows_from_bools(rows)?;
        for (u, row) in rows.iter().enumerate() {
            if let Some(v) = row.iter_set_bits().find(|&v| !rows[v as usize].get_bit(u as u32)) {
                return Err(GraphError::InvalidArgument(format!(
                    "matrix is not symmetric: entry ({u}, {v}) is set but ({v}, {u}) is not"
                )));
            }
        }
        Ok(Self { rows })
    }
}

test_graph_contract!(test_adj_matrix, AdjMatrix, directed, |n, arcs| {
    AdjMatrix::from_graph(&crate::repr::AdjArray::from_arcs(n, arcs.iter()).unwrap())
});

test_graph_contract!(test_adj_matrix_undir, AdjMatrixUndir, undirected, |n, edges| {
    AdjMatrixUndir::from_graph(&crate::repr::AdjArrayUndir::from_edges(n, edges.iter()).unwrap())
});
