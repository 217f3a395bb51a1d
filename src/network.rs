use num_traits::{CheckedAdd, Zero};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::quantity::Quantity;

/// A capacitated link between two nodes, as read from tabular input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Link<Q> {
    pub from: usize,
    pub to: usize,
    pub capacity: Q,
}

/// Dense capacity matrix over nodes `0..n`.
///
/// `capacity(u, v)` is the maximum flow the directed edge `u -> v` can
/// carry; zero means "no edge". The matrix is validated on construction
/// (square, non-negative) and never mutated afterwards -- every max-flow
/// computation borrows it read-only and keeps its own flow state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapacityMatrix<Q> {
    cap: Vec<Vec<Q>>,
}

impl<Q: Quantity> CapacityMatrix<Q> {
    /// Validates and wraps an `n x n` capacity matrix.
    pub fn new(rows: Vec<Vec<Q>>) -> Result<Self, Error> {
        let expected = rows.len();
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != expected {
                return Err(Error::NonSquareMatrix {
                    row,
                    len: entries.len(),
                    expected,
                });
            }
        }
        for (from, entries) in rows.iter().enumerate() {
            for (to, capacity) in entries.iter().enumerate() {
                if *capacity < Q::zero() {
                    return Err(Error::NegativeCapacity { from, to });
                }
            }
        }
        Ok(Self { cap: rows })
    }

    /// Builds the dense matrix for a network of `nodes` nodes from a list
    /// of links. Parallel links accumulate their capacities; an
    /// accumulated capacity past the numeric range is rejected rather
    /// than left to wrap.
    pub fn from_links(nodes: usize, links: &[Link<Q>]) -> Result<Self, Error>
    where
        Q: CheckedAdd,
    {
        let mut cap = vec![vec![Q::zero(); nodes]; nodes];
        for link in links {
            for index in [link.from, link.to] {
                if index >= nodes {
                    return Err(Error::NodeOutOfRange { index, nodes });
                }
            }
            if link.capacity < Q::zero() {
                return Err(Error::NegativeCapacity {
                    from: link.from,
                    to: link.to,
                });
            }
            cap[link.from][link.to] = cap[link.from][link.to]
                .checked_add(&link.capacity)
                .ok_or(Error::ArithmeticOverflow)?;
        }
        Ok(Self { cap })
    }

    /// Number of nodes in the network.
    pub fn nodes(&self) -> usize {
        self.cap.len()
    }

    /// Capacity of the directed edge `u -> v`.
    ///
    /// Panics if `u` or `v` is not a valid node index.
    pub fn capacity(&self, u: usize, v: usize) -> Q {
        self.cap[u][v]
    }

    /// Number of directed edges with strictly positive capacity.
    pub fn edge_count(&self) -> usize {
        self.cap
            .iter()
            .flatten()
            .filter(|capacity| **capacity > Q::zero())
            .count()
    }

    /// The positive-capacity edges, row by row.
    pub fn links(&self) -> impl Iterator<Item = Link<Q>> + '_ {
        self.cap.iter().enumerate().flat_map(|(from, row)| {
            row.iter().enumerate().filter_map(move |(to, &capacity)| {
                (capacity > Q::zero()).then_some(Link { from, to, capacity })
            })
        })
    }
}
