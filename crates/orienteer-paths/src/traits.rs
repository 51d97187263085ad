use crate::graph::GridGraph;

/// Estimate of the remaining cost from one cell to the destination.
///
/// The estimate is not required to be admissible. A* here is a best-first
/// search that settles nodes in increasing `f` order, and reopens closed
/// nodes whenever a cheaper route to them turns up.
pub trait Heuristic {
    /// Estimated cost from cell `from` to cell `to` (both cell ids).
    fn estimate(&self, graph: &GridGraph, from: usize, to: usize) -> f64;
}
