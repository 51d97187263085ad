use orienteer_core::Point;

use crate::error::PathError;
use crate::graph::GridGraph;
use crate::search::SearchState;

/// A route from source to destination, both inclusive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub cells: Vec<Point>,
    /// Sum of the true edge weights along the route.
    pub total_distance: f64,
}

impl Path {
    /// Number of cells on the route.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn source(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    pub fn destination(&self) -> Option<Point> {
        self.cells.last().copied()
    }
}

impl SearchState {
    /// Rebuild the route found by the last search on this state.
    ///
    /// Walks predecessor links from the destination back to the source, then
    /// sums the weight of each traversed edge. Fails with
    /// [`PathError::NoPathFound`] when no search ran or the last one did not
    /// reach its destination.
    pub fn reconstruct(&self, graph: &GridGraph) -> Result<Path, PathError> {
        let Some((source, dest)) = self.last_query() else {
            return Err(PathError::NoPathFound);
        };
        if !self.found || source >= graph.len() || dest >= graph.len() {
            return Err(PathError::NoPathFound);
        }
        if dest != source && self.predecessor(dest).is_none() {
            return Err(PathError::NoPathFound);
        }

        let mut ids = vec![dest];
        let mut cur = dest;
        while cur != source {
            cur = self.predecessor(cur).ok_or(PathError::NoPathFound)?;
            ids.push(cur);
            if ids.len() > graph.len() {
                // Predecessor links from a different graph.
                return Err(PathError::NoPathFound);
            }
        }
        ids.reverse();

        let mut total_distance = 0.0;
        for pair in ids.windows(2) {
            total_distance += graph
                .edge_weight(pair[0], pair[1])
                .ok_or(PathError::NoPathFound)?;
        }

        Ok(Path {
            cells: ids.into_iter().map(|id| graph.point(id)).collect(),
            total_distance,
        })
    }
}

/// Run one query on a fresh [`SearchState`].
///
/// Returns `Ok(None)` when the destination is unreachable.
pub fn find_path(graph: &GridGraph, from: Point, to: Point) -> Result<Option<Path>, PathError> {
    let mut state = SearchState::for_graph(graph);
    if !state.astar(graph, from, to)?.is_found() {
        return Ok(None);
    }
    state.reconstruct(graph).map(Some)
}
