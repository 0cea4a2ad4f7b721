/*!
# Edges and Arcs

Both link types store their two endpoints bit-packed into a single `u64`, so they are `Copy`,
allocation-free and compare/hash as a plain integer.

- An [`Edge`] is undirected and canonicalized to `(min, max)`, so that `Edge::new(u, v) == Edge::new(v, u)`.
- An [`Arc`] is directed and keeps its orientation, so `Arc::new(u, v) != Arc::new(v, u)` whenever `u != v`.
*/

use std::fmt::{Debug, Display};

use crate::{
    utils::packing::{pack, unpack_high, unpack_low},
    vertex::Vertex,
};

/// An undirected link between two vertices
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(u64);

/// A directed link from one vertex to another
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arc(u64);

impl Edge {
    /// Creates the edge `{u, v}`; the endpoint with smaller value is stored first
    pub fn new(u: Vertex, v: Vertex) -> Self {
        Self(pack(u.min(v).raw(), u.max(v).raw()))
    }

    /// Returns the endpoint with smaller value
    pub fn u(&self) -> Vertex {
        Vertex::new(unpack_high(self.0))
    }

    /// Returns the endpoint with larger value
    pub fn v(&self) -> Vertex {
        Vertex::new(unpack_low(self.0))
    }

    /// Returns both endpoints, smaller first
    pub fn endpoints(&self) -> (Vertex, Vertex) {
        (self.u(), self.v())
    }

    /// Returns the endpoint opposite of `w` or `None` if `w` is not an endpoint
    pub fn other(&self, w: Vertex) -> Option<Vertex> {
        if w == self.u() {
            Some(self.v())
        } else if w == self.v() {
            Some(self.u())
        } else {
            None
        }
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.u() == self.v()
    }
}

impl Arc {
    /// Creates the arc `u -> v`
    pub fn new(from: Vertex, to: Vertex) -> Self {
        Self(pack(from.raw(), to.raw()))
    }

    /// Returns the tail (`from`) of the arc
    pub fn tail(&self) -> Vertex {
        Vertex::new(unpack_high(self.0))
    }

    /// Returns the head (`to`) of the arc
    pub fn head(&self) -> Vertex {
        Vertex::new(unpack_low(self.0))
    }

    /// Returns `(from, to)`
    pub fn endpoints(&self) -> (Vertex, Vertex) {
        (self.tail(), self.head())
    }

    /// Reverses the arc by switching the endpoints
    pub fn reversed(&self) -> Self {
        Self::new(self.head(), self.tail())
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.tail() == self.head()
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{},{}}}", self.u(), self.v())
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Display for Arc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}->{})", self.tail(), self.head())
    }
}

impl Debug for Arc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

macro_rules! impl_from_pairs {
    ($link:ident) => {
        impl From<(Vertex, Vertex)> for $link {
            fn from(value: (Vertex, Vertex)) -> Self {
                $link::new(value.0, value.1)
            }
        }

        impl From<(u32, u32)> for $link {
            fn from(value: (u32, u32)) -> Self {
                $link::new(Vertex::new(value.0), Vertex::new(value.1))
            }
        }

        impl From<&(u32, u32)> for $link {
            fn from(value: &(u32, u32)) -> Self {
                $link::new(Vertex::new(value.0), Vertex::new(value.1))
            }
        }
    };
}

impl_from_pairs!(Edge);
impl_from_pairs!(Arc);

impl From<Arc> for Edge {
    fn from(value: Arc) -> Self {
        Edge::new(value.tail(), value.head())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn v(x: u32) -> Vertex {
        Vertex::new(x)
    }

    #[test]
    fn edges_are_unordered() {
        for a in 0..5 {
            for b in 0..5 {
                assert_eq!(Edge::new(v(a), v(b)), Edge::new(v(b), v(a)));
            }
        }

        let e = Edge::new(v(4), v(2));
        assert_eq!(e.endpoints(), (v(2), v(4)));
        assert_eq!(e.other(v(2)), Some(v(4)));
        assert_eq!(e.other(v(4)), Some(v(2)));
        assert_eq!(e.other(v(3)), None);
        assert!(Edge::new(v(1), v(1)).is_loop());

        let set: HashSet<Edge> = [(1u32, 2u32), (2, 1), (2, 3)].iter().map(Edge::from).collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn arcs_are_ordered() {
        for a in 0..5 {
            for b in 0..5 {
                let arc = Arc::new(v(a), v(b));
                assert_eq!(arc.endpoints(), (v(a), v(b)));
                assert_eq!(arc.reversed().endpoints(), (v(b), v(a)));
                assert_eq!(arc.reversed().reversed(), arc);
                if a != b {
                    assert_ne!(arc, arc.reversed());
                } else {
                    assert!(arc.is_loop());
                }
            }
        }
    }

    #[test]
    fn packing_handles_large_ids() {
        let arc = Arc::new(Vertex::INVALID, v(0));
        assert_eq!(arc.tail(), Vertex::INVALID);
        assert_eq!(arc.head(), v(0));

        let edge = Edge::new(Vertex::INVALID, v(u32::MAX - 1));
        assert_eq!(edge.u(), v(u32::MAX - 1));
        assert_eq!(edge.v(), Vertex::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Arc::from((1u32, 2u32))), "(1->2)");
        assert_eq!(format!("{}", Edge::from((2u32, 1u32))), "{1,2}");
    }
}
