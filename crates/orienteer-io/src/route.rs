//! Start/destination coordinate file.
//!
//! Four whitespace-separated non-negative integers, `x1 y1 x2 y2`: the start
//! column and row followed by the destination column and row.

use std::fmt;
use std::fs;
use std::path::Path;

use orienteer_core::Point;

use crate::error::InputError;

const WHAT: &str = "route file";

/// The two endpoints of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub start: Point,
    pub end: Point,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

pub fn parse_route(text: &str) -> Result<Route, InputError> {
    let mut values = Vec::with_capacity(4);
    let mut last_line = 1;
    for (lineno, line) in text.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        for tok in line.split_whitespace() {
            last_line = lineno;
            if values.len() == 4 {
                return Err(InputError::parse(
                    WHAT,
                    lineno,
                    format!("unexpected extra value \u{201c}{tok}\u{201d}"),
                ));
            }
            let v: i32 = tok.parse().map_err(|_| {
                InputError::parse(WHAT, lineno, format!("invalid coordinate \u{201c}{tok}\u{201d}"))
            })?;
            if v < 0 {
                return Err(InputError::parse(
                    WHAT,
                    lineno,
                    format!("coordinates cannot be negative, got {v}"),
                ));
            }
            values.push(v);
        }
    }
    let &[x1, y1, x2, y2] = values.as_slice() else {
        return Err(InputError::parse(
            WHAT,
            last_line,
            format!("expected 4 coordinates, found {}", values.len()),
        ));
    };
    Ok(Route {
        start: Point::new(x1, y1),
        end: Point::new(x2, y2),
    })
}

pub fn read_route(path: impl AsRef<Path>) -> Result<Route, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;
    parse_route(&text)
}
