#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

//! Maximum-flow capacity analysis for capacitated directed networks.
//!
//! Given fixed link capacities across a multi-tier logistics network
//! (terminals feeding warehouses feeding stores), `flowcap` answers the
//! question "how much can be routed from here to there?" for every
//! requested (source, sink) pair, honoring each link's capacity limit.
//!
//! The computation boundary is pure: a [`CapacityMatrix`] and a list of
//! [`FlowQuery`] pairs go in, one flow value per pair comes out, in input
//! order. Reading tabular link data, rendering markdown reports and
//! exporting Graphviz views live at the edges and merely call into that
//! boundary.

mod algo;
mod batch;
mod dot;
mod error;
mod network;
mod quantity;
mod report;

pub use algo::edmonds_karp::{edmonds_karp, EdmondsKarp};
pub use algo::MaxFlow;
pub use batch::{run_queries, FlowQuery, QueryOutcome};
pub use dot::to_dot;
pub use error::Error;
pub use network::{CapacityMatrix, Link};
pub use quantity::Quantity;
pub use report::{flow_table, sink_summary};
