//! File formats around the routing core.
//!
//! - [`elevation`]: whitespace-separated elevation matrix
//! - [`terrain`]: PNG terrain classification raster
//! - [`route`]: start/destination coordinate file
//! - [`render`]: path overlay and PNG output
//! - [`report`]: human-readable distance report

pub mod elevation;
pub mod error;
pub mod render;
pub mod report;
pub mod route;
pub mod terrain;

pub use elevation::{parse_elevation, read_elevation};
pub use error::InputError;
pub use render::{overlay_path, save_png};
pub use report::{format_report, write_report};
pub use route::{Route, parse_route, read_route};
pub use terrain::{decode_terrain, load_terrain, terrain_keys};
