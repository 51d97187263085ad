use orienteer_core::Point;

use crate::graph::GridGraph;
use crate::traits::Heuristic;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Euclidean combination of grid distance and climb:
/// `sqrt(manhattan² + Δelevation²)`.
///
/// Grid steps are counted in cells, not metres, so this mixes units with the
/// edge weights and is not admissible in general.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElevationEuclidean;

impl Heuristic for ElevationEuclidean {
    #[inline]
    fn estimate(&self, graph: &GridGraph, from: usize, to: usize) -> f64 {
        let d1 = manhattan(graph.point(from), graph.point(to)) as f64;
        let d2 = (graph.elevation(from) - graph.elevation(to)).abs();
        (d1 * d1 + d2 * d2).sqrt()
    }
}

/// Always zero. With zero terrain adjustments the search degenerates to
/// Dijkstra and returns exact shortest paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _graph: &GridGraph, _from: usize, _to: usize) -> f64 {
        0.0
    }
}
