//! Distance report.

use std::fs;
use std::path::Path;

use crate::error::InputError;

/// The report text: `Total Distance: <metres> meters.` plus a newline.
///
/// Whole numbers keep one decimal place (`4.0`, not `4`). Very large or
/// very small distances still print in plain decimal notation.
pub fn format_report(total_distance: f64) -> String {
    if total_distance.fract() == 0.0 {
        format!("Total Distance: {total_distance:.1} meters.\n")
    } else {
        format!("Total Distance: {total_distance} meters.\n")
    }
}

/// Write the report, replacing any existing file.
pub fn write_report(path: impl AsRef<Path>, total_distance: f64) -> Result<(), InputError> {
    let path = path.as_ref();
    fs::write(path, format_report(total_distance)).map_err(|e| InputError::io(path, e))
}
