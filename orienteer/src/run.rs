use std::fmt;

use log::info;
use orienteer_io::{InputError, Route};
use orienteer_paths::{GridGraph, PathError, SearchState, terrain_name};

use crate::config::RunConfig;

/// Errors surfaced to the user by [`run`].
#[derive(Debug)]
pub enum AppError {
    Input(InputError),
    Path(PathError),
    /// The search exhausted every reachable cell.
    NoRoute(Route),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "{e}"),
            Self::Path(e) => write!(f, "{e}"),
            Self::NoRoute(r) => write!(f, "no path between {} and {}", r.start, r.end),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Path(e) => Some(e),
            Self::NoRoute(_) => None,
        }
    }
}

impl From<InputError> for AppError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl From<PathError> for AppError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

/// What one run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub route: Route,
    pub cells: usize,
    pub total_distance: f64,
    pub expanded: usize,
}

/// Load the inputs, find the route, and write the image and report.
pub fn run(config: &RunConfig) -> Result<RunSummary, AppError> {
    let mut image = orienteer_io::load_terrain(&config.terrain_image)?;
    let terrain = orienteer_io::terrain_keys(&image)?;
    info!(
        "terrain {}: {}x{}",
        config.terrain_image.display(),
        terrain.width(),
        terrain.height()
    );

    let elevation =
        orienteer_io::read_elevation(&config.elevation_file, terrain.width(), terrain.height())?;
    let route = orienteer_io::read_route(&config.route_file)?;
    info!("route {route}");

    let graph = GridGraph::new(&elevation, &terrain, config.scale)?;
    info!("graph: {} cells, {} edges", graph.len(), graph.edge_count());
    for (label, p) in [("start", route.start), ("end", route.end)] {
        if let Some(key) = terrain.at(p) {
            info!(
                "{label} {p} on {} ({key})",
                terrain_name(*key).unwrap_or("unclassified terrain")
            );
        }
    }

    let mut state = SearchState::for_graph(&graph);
    if !state.astar(&graph, route.start, route.end)?.is_found() {
        return Err(AppError::NoRoute(route));
    }
    let path = state.reconstruct(&graph)?;
    info!(
        "found {} cell route, {:.2} m, {} cells expanded",
        path.len(),
        path.total_distance,
        state.expanded()
    );

    orienteer_io::overlay_path(&mut image, &path.cells, config.path_color);
    orienteer_io::save_png(&image, &config.output_image)?;
    orienteer_io::write_report(&config.report, path.total_distance)?;
    info!(
        "wrote {} and {}",
        config.output_image.display(),
        config.report.display()
    );

    Ok(RunSummary {
        route,
        cells: path.len(),
        total_distance: path.total_distance,
        expanded: state.expanded(),
    })
}
