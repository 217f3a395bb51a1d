use core::marker::PhantomData;
use std::collections::VecDeque;

use num_traits::{CheckedAdd, Zero};

use crate::algo::MaxFlow;
use crate::error::Error;
use crate::network::CapacityMatrix;
use crate::quantity::Quantity;

const NO_PARENT: usize = usize::MAX;

/// Residual state for one (source, sink) computation.
///
/// The capacity matrix is shared and immutable; the flow matrix is private
/// to this search and starts at zero. Residual capacity is derived on
/// demand as `capacity - flow` rather than stored.
struct State<'a, Q> {
    cap: &'a CapacityMatrix<Q>,
    flow: Vec<Vec<Q>>,
    parent: Vec<usize>,
    queue: VecDeque<usize>,
}

impl<'a, Q: Quantity> State<'a, Q> {
    fn new(cap: &'a CapacityMatrix<Q>) -> Self {
        let n = cap.nodes();
        State {
            cap,
            flow: vec![vec![Q::zero(); n]; n],
            parent: vec![NO_PARENT; n],
            queue: VecDeque::with_capacity(n),
        }
    }

    fn residual(&self, u: usize, v: usize) -> Q {
        self.cap.capacity(u, v) - self.flow[u][v]
    }

    /// Breadth-first search for a shortest residual-positive path.
    ///
    /// Fills `parent` with the predecessor of every reached node and
    /// returns as soon as the sink is reached; among equal-length paths
    /// the first one discovered wins. This tie-break is what gives the
    /// Edmonds-Karp iteration bound, so it must not be replaced by an
    /// arbitrary (e.g. depth-first) path choice.
    fn find_path(&mut self, source: usize, sink: usize) -> bool {
        let n = self.cap.nodes();
        let mut visited = vec![false; n];
        self.parent.fill(NO_PARENT);
        self.queue.clear();
        self.queue.push_back(source);
        visited[source] = true;

        while let Some(current) = self.queue.pop_front() {
            for neighbor in 0..n {
                if !visited[neighbor] && self.residual(current, neighbor) > Q::zero() {
                    self.parent[neighbor] = current;
                    visited[neighbor] = true;
                    if neighbor == sink {
                        return true;
                    }
                    self.queue.push_back(neighbor);
                }
            }
        }
        false
    }

    /// Minimum residual capacity along the found path, walked backward
    /// from the sink via parent pointers.
    fn bottleneck(&self, source: usize, sink: usize) -> Q {
        debug_assert!(self.parent[sink] != NO_PARENT);

        let mut v = self.parent[sink];
        let mut narrowest = self.residual(v, sink);
        while v != source {
            let u = self.parent[v];
            narrowest = narrowest.min(self.residual(u, v));
            v = u;
        }
        narrowest
    }

    /// Push `amount` along the found path: forward flow increases and the
    /// implicit reverse edge decreases, which lets later augmentations
    /// cancel this routing if a better split exists.
    fn augment(&mut self, source: usize, sink: usize, amount: Q) {
        let mut v = sink;
        while v != source {
            let u = self.parent[v];
            self.flow[u][v] += amount;
            self.flow[v][u] -= amount;
            v = u;
        }
    }
}

/// Runs the full augmentation loop and keeps the final flow matrix
/// around for invariant checks in tests.
fn run<Q>(cap: &CapacityMatrix<Q>, source: usize, sink: usize) -> Result<(Q, Vec<Vec<Q>>), Error>
where
    Q: Quantity + CheckedAdd,
{
    let nodes = cap.nodes();
    for index in [source, sink] {
        if index >= nodes {
            return Err(Error::NodeOutOfRange { index, nodes });
        }
    }

    let mut state = State::new(cap);

    // A query from a node to itself is already saturated; there is no
    // meaningful augmenting push, so the answer is zero.
    if source == sink {
        return Ok((Q::zero(), state.flow));
    }

    // Edmonds-Karp performs at most O(V*E) augmentations on valid input.
    // Exceeding a generous multiple of that signals corrupted state, not
    // a slow instance.
    let limit = nodes
        .saturating_mul(cap.edge_count())
        .saturating_add(nodes)
        .saturating_add(1);

    let mut total = Q::zero();
    let mut rounds = 0usize;
    while state.find_path(source, sink) {
        rounds += 1;
        if rounds > limit {
            return Err(Error::IterationLimitExceeded { limit });
        }
        let amount = state.bottleneck(source, sink);
        debug_assert!(amount > Q::zero());
        state.augment(source, sink, amount);
        total = total.checked_add(&amount).ok_or(Error::ArithmeticOverflow)?;
    }
    Ok((total, state.flow))
}

/// Computes the maximum flow from `source` to `sink` using repeated
/// shortest augmenting paths (Edmonds-Karp).
///
/// The capacity matrix is not mutated; each invocation starts from a
/// fresh zero flow matrix, so calls are independent and idempotent. A
/// disconnected pair yields `Ok(0)`. Out-of-range node indices are
/// rejected before any search begins.
pub fn edmonds_karp<Q>(cap: &CapacityMatrix<Q>, source: usize, sink: usize) -> Result<Q, Error>
where
    Q: Quantity + CheckedAdd,
{
    run(cap, source, sink).map(|(total, _)| total)
}

/// Shortest-augmenting-path maximum flow as a pluggable algorithm.
#[derive(Clone, Debug, Default)]
pub struct EdmondsKarp<Q>(PhantomData<Q>);

impl<Q> EdmondsKarp<Q> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<Q: Quantity + CheckedAdd> MaxFlow for EdmondsKarp<Q> {
    type Quantity = Q;
    type Network = CapacityMatrix<Q>;
    type Error = Error;

    fn max_flow(
        &mut self,
        network: &Self::Network,
        source: usize,
        sink: usize,
    ) -> Result<Self::Quantity, Self::Error> {
        edmonds_karp(network, source, sink)
    }
}
