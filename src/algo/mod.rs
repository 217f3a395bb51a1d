pub mod edmonds_karp;

use core::fmt::Debug;

/// A maximum-flow algorithm over a fixed capacity network.
///
/// The network is borrowed read-only; implementations keep whatever
/// residual state they need local to one invocation, so repeated calls
/// against the same network are independent of each other.
pub trait MaxFlow {
    type Quantity;
    type Network;
    type Error: Debug;

    /// Return the maximum total flow deliverable from `source` to `sink`.
    fn max_flow(
        &mut self,
        network: &Self::Network,
        source: usize,
        sink: usize,
    ) -> Result<Self::Quantity, Self::Error>;
}
