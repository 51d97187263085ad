//! Elevation matrix reader.
//!
//! One grid row per non-empty line, values separated by any whitespace. A
//! line may carry more values than the raster is wide; the extras are
//! ignored (survey exports pad every row with a few trailing columns).

use std::fs;
use std::path::Path;

use log::debug;
use orienteer_core::Grid;

use crate::error::InputError;

const WHAT: &str = "elevation file";

/// Parse `text` into a `width × height` elevation grid.
pub fn parse_elevation(text: &str, width: usize, height: usize) -> Result<Grid<f64>, InputError> {
    let mut cells = Vec::with_capacity(width * height);
    let mut rows = 0;
    let mut ignored = 0;

    for (lineno, line) in text.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        if line.trim().is_empty() {
            continue;
        }
        if rows == height {
            return Err(InputError::parse(
                WHAT,
                lineno,
                format!("expected {height} rows, found more"),
            ));
        }
        let mut tokens = line.split_whitespace();
        for col in 0..width {
            let Some(tok) = tokens.next() else {
                return Err(InputError::parse(
                    WHAT,
                    lineno,
                    format!("expected at least {width} values, found {col}"),
                ));
            };
            let v: f64 = tok.parse().map_err(|_| {
                InputError::parse(WHAT, lineno, format!("invalid number \u{201c}{tok}\u{201d}"))
            })?;
            if !v.is_finite() {
                return Err(InputError::parse(
                    WHAT,
                    lineno,
                    format!("elevation must be finite, got {tok}"),
                ));
            }
            cells.push(v);
        }
        ignored += tokens.count();
        rows += 1;
    }

    if rows != height {
        return Err(InputError::parse(
            WHAT,
            text.lines().count(),
            format!("expected {height} rows, found {rows}"),
        ));
    }
    if ignored > 0 {
        debug!("elevation: ignored {ignored} trailing values beyond column {width}");
    }

    Ok(Grid::from_vec(width, height, cells)?)
}

/// Read and parse an elevation file.
pub fn read_elevation(
    path: impl AsRef<Path>,
    width: usize,
    height: usize,
) -> Result<Grid<f64>, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;
    parse_elevation(&text, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orienteer_core::Point;

    #[test]
    fn parses_rows_and_drops_trailing_columns() {
        let text = "\
   1.5   2.0   3.25   9   9   9   9   9
   4.0e1 -5    6      9   9   9   9   9
";
        let g = parse_elevation(text, 3, 2).unwrap();
        assert_eq!(g.as_slice(), &[1.5, 2.0, 3.25, 40.0, -5.0, 6.0]);
        assert_eq!(g.at(Point::new(2, 1)), Some(&6.0));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let g = parse_elevation("\n1 2\n\n  \n3 4\n\n", 2, 2).unwrap();
        assert_eq!(g.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn short_row_reports_line() {
        let err = parse_elevation("1 2 3\n4 5\n", 3, 2).unwrap_err();
        match err {
            InputError::Parse { line, ref msg, .. } => {
                assert_eq!(line, 2);
                assert!(msg.contains("found 2"), "{msg}");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn bad_number_reports_line() {
        let err = parse_elevation("1 2\n3 x\n", 2, 2).unwrap_err();
        assert!(matches!(err, InputError::Parse { line: 2, .. }));
        assert!(err.to_string().contains("\u{201c}x\u{201d}"));
        assert!(parse_elevation("1 NaN\n3 4\n", 2, 2).is_err());
    }

    #[test]
    fn row_count_must_match() {
        assert!(matches!(
            parse_elevation("1 2\n", 2, 2),
            Err(InputError::Parse { .. })
        ));
        assert!(matches!(
            parse_elevation("1 2\n3 4\n5 6\n", 2, 2),
            Err(InputError::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_elevation("/nonexistent/orienteer/elevation.txt", 1, 1).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
