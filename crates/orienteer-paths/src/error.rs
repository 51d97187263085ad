use std::fmt;

use orienteer_core::{Point, Range};

/// Errors raised by graph construction, search, and path reconstruction.
///
/// A failed query never invalidates the graph: every variant is local to the
/// call that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// A source or destination lies outside the grid.
    InvalidCoordinate { point: Point, bounds: Range },
    /// The elevation and terrain inputs cannot form a graph.
    MalformedInput(String),
    /// The last search did not reach its destination, or no search ran.
    NoPathFound,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { point, bounds } => {
                write!(f, "coordinate {point} is outside the grid {bounds}")
            }
            Self::MalformedInput(msg) => write!(f, "malformed input: {msg}"),
            Self::NoPathFound => write!(f, "no path found"),
        }
    }
}

impl std::error::Error for PathError {}
