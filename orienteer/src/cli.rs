use std::path::PathBuf;

use clap::Parser;
use orienteer_core::Color;

#[derive(Parser, Debug, Clone)]
#[command(name = "orienteer")]
#[command(about = "Find the least-cost route across an orienteering terrain map")]
pub struct Args {
    /// Terrain classification image (PNG)
    pub terrain_image: PathBuf,

    /// Elevation matrix, one whitespace-separated row per line
    pub elevation_file: PathBuf,

    /// Route file: start column, start row, end column, end row
    pub path_file: PathBuf,

    /// Where to write the terrain image with the route painted on it
    pub output_image: PathBuf,

    /// Where to write the distance report
    #[arg(long, default_value = "distance.txt")]
    pub report: PathBuf,

    /// Metres per pixel along the horizontal (longitude) axis
    #[arg(long, default_value_t = 10.29)]
    pub unit_x: f64,

    /// Metres per pixel along the vertical (latitude) axis
    #[arg(long, default_value_t = 7.55)]
    pub unit_y: f64,

    /// Route colour as R,G,B
    #[arg(long, default_value = "255,0,0")]
    pub path_color: Color,
}
