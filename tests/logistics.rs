//! End-to-end run over the two-terminal, four-warehouse, fourteen-store
//! logistics network, checking every terminal/store pair and the
//! rendered per-store summary.

use flowcap::{run_queries, sink_summary, CapacityMatrix, FlowQuery, Link};

// Nodes 0-1 are terminals, 2-5 warehouses, 6-19 stores.
const LINKS: [(usize, usize, i64); 20] = [
    // terminals -> warehouses
    (0, 2, 25),
    (0, 3, 20),
    (0, 4, 15),
    (1, 4, 15),
    (1, 5, 30),
    (1, 3, 10),
    // warehouses -> stores
    (2, 6, 15),
    (2, 7, 10),
    (2, 8, 20),
    (3, 9, 15),
    (3, 10, 10),
    (3, 11, 25),
    (4, 12, 20),
    (4, 13, 15),
    (4, 14, 10),
    (5, 15, 20),
    (5, 16, 10),
    (5, 17, 15),
    (5, 18, 5),
    (5, 19, 10),
];

fn network() -> CapacityMatrix<i64> {
    let links: Vec<_> = LINKS
        .iter()
        .map(|&(from, to, capacity)| Link { from, to, capacity })
        .collect();
    CapacityMatrix::from_links(20, &links).unwrap()
}

fn terminal_store_queries() -> Vec<FlowQuery> {
    (0..2)
        .flat_map(|source| (6..20).map(move |sink| FlowQuery { source, sink }))
        .collect()
}

#[test]
fn every_terminal_store_pair_gets_its_bottleneck_flow() {
    let outcomes = run_queries(&network(), &terminal_store_queries());
    let flows: Vec<i64> = outcomes.iter().map(|o| *o.flow.as_ref().unwrap()).collect();

    // Terminal 1 reaches warehouses 2-4 only; terminal 2 reaches 3-5 only.
    let expected = [
        // terminal 0, stores 6..20
        15, 10, 20, 15, 10, 20, 15, 15, 10, 0, 0, 0, 0, 0,
        // terminal 1, stores 6..20
        0, 0, 0, 10, 10, 10, 15, 15, 10, 20, 10, 15, 5, 10,
    ];
    assert_eq!(flows, expected);
}

#[test]
fn summary_ranks_stores_by_best_achievable_delivery() {
    let outcomes = run_queries(&network(), &terminal_store_queries());
    assert_eq!(
        sink_summary(&outcomes),
        "| Sink | Max flow |\n\
         |------|----------|\n\
         | 8 | 20 |\n\
         | 11 | 20 |\n\
         | 15 | 20 |\n\
         | 6 | 15 |\n\
         | 9 | 15 |\n\
         | 12 | 15 |\n\
         | 13 | 15 |\n\
         | 17 | 15 |\n\
         | 7 | 10 |\n\
         | 10 | 10 |\n\
         | 14 | 10 |\n\
         | 16 | 10 |\n\
         | 19 | 10 |\n\
         | 18 | 5 |\n"
    );
}

#[test]
fn batch_order_is_independent_of_query_order() {
    let cap = network();
    let forward = terminal_store_queries();
    let mut reversed = forward.clone();
    reversed.reverse();

    let forward_outcomes = run_queries(&cap, &forward);
    let mut reversed_outcomes = run_queries(&cap, &reversed);
    reversed_outcomes.reverse();

    assert_eq!(forward_outcomes, reversed_outcomes);
}
