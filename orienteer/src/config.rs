use std::path::PathBuf;

use orienteer_core::Color;
use orienteer_paths::PixelScale;

use crate::cli::Args;

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub terrain_image: PathBuf,
    pub elevation_file: PathBuf,
    pub route_file: PathBuf,
    pub output_image: PathBuf,
    pub report: PathBuf,
    pub scale: PixelScale,
    pub path_color: Color,
}

impl RunConfig {
    /// A config for the given files with the default report location, pixel
    /// scale and route colour.
    pub fn new(
        terrain_image: impl Into<PathBuf>,
        elevation_file: impl Into<PathBuf>,
        route_file: impl Into<PathBuf>,
        output_image: impl Into<PathBuf>,
    ) -> Self {
        Self {
            terrain_image: terrain_image.into(),
            elevation_file: elevation_file.into(),
            route_file: route_file.into(),
            output_image: output_image.into(),
            report: PathBuf::from("distance.txt"),
            scale: PixelScale::default(),
            path_color: Color::RED,
        }
    }
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self {
            terrain_image: args.terrain_image,
            elevation_file: args.elevation_file,
            route_file: args.path_file,
            output_image: args.output_image,
            report: args.report,
            scale: PixelScale::new(args.unit_x, args.unit_y),
            path_color: args.path_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_defaults_match_config_defaults() {
        let args = Args::try_parse_from(["orienteer", "t.png", "e.txt", "p.txt", "o.png"]).unwrap();
        assert_eq!(
            RunConfig::from(args),
            RunConfig::new("t.png", "e.txt", "p.txt", "o.png")
        );
    }
}
