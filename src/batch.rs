use num_traits::CheckedAdd;
use serde::{Deserialize, Serialize};

use crate::algo::edmonds_karp::edmonds_karp;
use crate::error::Error;
use crate::network::CapacityMatrix;
use crate::quantity::Quantity;

/// A single (source, sink) max-flow request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlowQuery {
    pub source: usize,
    pub sink: usize,
}

/// The answer to one query, failures included.
///
/// A failed pair stays local: its outcome carries the error while every
/// other pair in the batch is answered normally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOutcome<Q> {
    pub query: FlowQuery,
    pub flow: Result<Q, Error>,
}

/// Runs every query independently against the original capacities and
/// returns the outcomes in input order.
///
/// No residual state is shared between pairs, even when they share a
/// source or sink: each computation starts from a zero flow matrix
/// against the undisturbed capacity matrix, so query results cannot
/// depend on batch composition or ordering.
pub fn run_queries<Q>(cap: &CapacityMatrix<Q>, queries: &[FlowQuery]) -> Vec<QueryOutcome<Q>>
where
    Q: Quantity + CheckedAdd,
{
    queries
        .iter()
        .map(|&query| {
            let flow = edmonds_karp(cap, query.source, query.sink);
            match &flow {
                Ok(value) => log::debug!("max flow {} -> {}: {value}", query.source, query.sink),
                Err(e) => log::warn!("query {} -> {} failed: {e}", query.source, query.sink),
            }
            QueryOutcome { query, flow }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> CapacityMatrix<i64> {
        CapacityMatrix::new(vec![
            vec![0, 10, 5, 0],
            vec![0, 0, 0, 6],
            vec![0, 0, 0, 10],
            vec![0, 0, 0, 0],
        ])
        .unwrap()
    }

    fn query(source: usize, sink: usize) -> FlowQuery {
        FlowQuery { source, sink }
    }

    #[test]
    fn outcomes_preserve_input_order() {
        let cap = diamond();
        let queries = [query(0, 3), query(0, 1), query(2, 3)];
        let outcomes = run_queries(&cap, &queries);
        assert_eq!(
            outcomes.iter().map(|o| o.query).collect::<Vec<_>>(),
            queries.to_vec()
        );
        assert_eq!(
            outcomes.iter().map(|o| o.flow.clone()).collect::<Vec<_>>(),
            vec![Ok(11), Ok(10), Ok(10)]
        );
    }

    #[test]
    fn queries_are_isolated_from_each_other() {
        let cap = diamond();
        let alone = run_queries(&cap, &[query(2, 3)]);
        let after_other = run_queries(&cap, &[query(0, 3), query(2, 3)]);
        assert_eq!(alone[0].flow, after_other[1].flow);
    }

    #[test]
    fn a_failing_pair_does_not_abort_the_batch() {
        let cap = diamond();
        let outcomes = run_queries(&cap, &[query(0, 3), query(0, 9), query(2, 3)]);
        assert_eq!(outcomes[0].flow, Ok(11));
        assert_eq!(
            outcomes[1].flow,
            Err(Error::NodeOutOfRange { index: 9, nodes: 4 })
        );
        assert_eq!(outcomes[2].flow, Ok(10));
    }
}
