//! Least-cost routing over terrain grids.
//!
//! The crate turns an elevation matrix and a terrain classification raster
//! into an immutable 4-connected [`GridGraph`], then answers route queries
//! with a best-first A* search:
//!
//! - **Cost model**: terrain colours map to heuristic bonuses ([`CostModel`])
//! - **Graph**: edge weight = elevation change + per-axis pixel distance
//!   ([`GridGraph`], [`PixelScale`])
//! - **Search**: per-query scores live in a reusable [`SearchState`], never in
//!   the graph, so one graph can serve many queries
//! - **Reconstruction**: predecessor walk plus real distance ([`Path`])
//!
//! ```
//! use orienteer_core::{Color, Grid, Point};
//! use orienteer_paths::{GridGraph, PixelScale, find_path};
//!
//! let elevation = Grid::new(3, 3, 0.0);
//! let terrain = Grid::new(3, 3, Color::WHITE);
//! let graph = GridGraph::new(&elevation, &terrain, PixelScale::uniform(1.0)).unwrap();
//! let path = find_path(&graph, Point::new(0, 0), Point::new(2, 2)).unwrap().unwrap();
//! assert_eq!(path.total_distance, 4.0);
//! assert_eq!(path.len(), 5);
//! ```

mod astar;
mod cost;
mod distance;
mod error;
mod graph;
mod neighbors;
mod path;
mod search;
mod traits;

pub use astar::SearchOutcome;
pub use cost::{CostModel, STANDARD_TERRAIN, TerrainClass, terrain_name};
pub use distance::{ElevationEuclidean, ZeroHeuristic, manhattan};
pub use error::PathError;
pub use graph::{Edge, GraphBuilder, GridGraph, PixelScale};
pub use neighbors::Direction;
pub use path::{Path, find_path};
pub use search::{NodeState, SearchState};
pub use traits::Heuristic;
