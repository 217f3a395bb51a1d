use petgraph::dot::Dot;
use petgraph::graphmap::DiGraphMap;

use crate::network::CapacityMatrix;
use crate::quantity::Quantity;

/// Renders the positive-capacity edges as a Graphviz digraph, with each
/// link's capacity as its edge label. Zero-capacity entries (non-edges)
/// are omitted.
pub fn to_dot<Q: Quantity>(cap: &CapacityMatrix<Q>) -> String {
    let graph: DiGraphMap<usize, Q> =
        DiGraphMap::from_edges(cap.links().map(|link| (link.from, link.to, link.capacity)));
    format!("{}", Dot::new(&graph))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_output_labels_edges_with_capacities() {
        let cap = CapacityMatrix::new(vec![
            vec![0, 5, 0],
            vec![0, 0, 3],
            vec![0, 0, 0],
        ])
        .unwrap();
        let dot = to_dot(&cap);
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("0 -> 1"));
        assert!(dot.contains("\"5\""));
        assert!(dot.contains("\"3\""));
    }

    #[test]
    fn empty_network_renders_empty_digraph() {
        let cap = CapacityMatrix::new(vec![vec![0, 0], vec![0, 0]]).unwrap();
        let dot = to_dot(&cap);
        assert!(dot.starts_with("digraph"));
        assert!(!dot.contains("->"));
    }
}
