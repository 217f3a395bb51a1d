use displaydoc::Display;

/// Errors from network construction or a max-flow computation.
///
/// All of these are either rejected input (caught before any search
/// begins) or an internal-invariant violation; a disconnected
/// (source, sink) pair is not an error and yields a flow of zero.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// capacity matrix is not square: row {row} has {len} entries, expected {expected}
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// negative capacity on link {from} -> {to}
    NegativeCapacity { from: usize, to: usize },
    /// node index {index} out of range for a network of {nodes} nodes
    NodeOutOfRange { index: usize, nodes: usize },
    /// arithmetic overflow while accumulating flow
    ArithmeticOverflow,
    /// augmentation did not terminate within {limit} iterations
    IterationLimitExceeded { limit: usize },
}

impl std::error::Error for Error {}
