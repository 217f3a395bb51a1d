//! Markdown rendering of batch results. Pure presentation: nothing here
//! touches solver state, it only formats what the batch driver returned.

use core::fmt::Display;

use itertools::Itertools;

use crate::batch::QueryOutcome;
use crate::quantity::Quantity;

/// Markdown table of per-pair flows, in query order.
///
/// A failed query is listed with its error text in place of a flow value
/// so that one bad pair does not hide the rest of the batch.
pub fn flow_table<Q: Display>(outcomes: &[QueryOutcome<Q>]) -> String {
    let mut out = String::from("| Source | Sink | Flow |\n|--------|------|------|\n");
    for outcome in outcomes {
        let row = match &outcome.flow {
            Ok(value) => format!(
                "| {} | {} | {} |\n",
                outcome.query.source, outcome.query.sink, value
            ),
            Err(e) => format!(
                "| {} | {} | error: {} |\n",
                outcome.query.source, outcome.query.sink, e
            ),
        };
        out.push_str(&row);
    }
    out
}

/// Best-achievable delivery per sink: the maximum flow over all queried
/// sources, as a markdown table sorted by flow descending (ties broken
/// by sink index).
pub fn sink_summary<Q: Quantity>(outcomes: &[QueryOutcome<Q>]) -> String {
    let mut rows: Vec<(usize, Q)> = outcomes
        .iter()
        .filter_map(|outcome| {
            outcome
                .flow
                .as_ref()
                .ok()
                .map(|value| (outcome.query.sink, *value))
        })
        .into_grouping_map()
        .max()
        .into_iter()
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut out = String::from("| Sink | Max flow |\n|------|----------|\n");
    for (sink, flow) in rows {
        out.push_str(&format!("| {sink} | {flow} |\n"));
    }
    out
}
