//! The [`Grid`] type: a dense 2D matrix stored in row-major order.
//!
//! Elevation maps and terrain key rasters are both `Grid`s. A cell's flat
//! index is `y * width + x`, which is also the cell id used by the graph.

use std::fmt;

use crate::geom::{Point, Range};

/// Errors raised when assembling a [`Grid`] from raw data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The flat buffer does not hold `width * height` values.
    LengthMismatch { expected: usize, found: usize },
    /// Row `row` has a different length than the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The requested dimensions do not fit the coordinate type.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "grid: expected {expected} cells, found {found}")
            }
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} values, expected {expected}"
            ),
            Self::TooLarge { width, height } => {
                write!(f, "grid: {width}x{height} exceeds the supported size")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A dense `width × height` grid of `T` values.
///
/// `cells.len() == width * height` always holds; deserialized grids are
/// checked the same way as [`Grid::from_vec`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawGrid<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, GridError> {
        Grid::from_vec(raw.width, raw.height, raw.cells)
    }
}

impl<T: Clone> Grid<T> {
    /// Create a new grid of the given dimensions, filled with `fill`.
    ///
    /// Meant for sizes known to be small. Dimensions above `i32::MAX` cannot
    /// be addressed by a [`Point`]; use [`Grid::from_fn`] or
    /// [`Grid::from_vec`] when the size comes from outside.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            cells: vec![fill; width * height],
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    /// Wrap a row-major buffer holding exactly `width * height` values.
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        check_dims(width, height)?;
        if cells.len() != width * height {
            return Err(GridError::LengthMismatch {
                expected: width * height,
                found: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dims(width, height)?;
        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid by evaluating `f` at every position, in row-major order.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(Point) -> T,
    ) -> Result<Self, GridError> {
        check_dims(width, height)?;
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(Point::new(x as i32, y as i32)));
            }
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The bounding range of this grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.width as i32, self.height as i32)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside this grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Whether `other` has the same dimensions.
    #[inline]
    pub fn same_shape<U>(&self, other: &Grid<U>) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Position of a flat index. The index must be below [`len`](Grid::len).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Read the value at `p`.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The row-major backing slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (self.point(i), v))
    }
}

fn check_dims(width: usize, height: usize) -> Result<(), GridError> {
    if width > i32::MAX as usize || height > i32::MAX as usize {
        return Err(GridError::TooLarge { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(10, 5, 0u8);
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.len(), 50);
        assert_eq!(g.bounds(), Range::new(0, 0, 10, 5));
    }

    #[test]
    fn at_is_bounds_checked() {
        let g = Grid::from_fn(4, 4, |p| if p == Point::new(2, 3) { 42 } else { 0 }).unwrap();
        assert_eq!(g.at(Point::new(2, 3)), Some(&42));
        assert_eq!(g.at(Point::new(0, 0)), Some(&0));
        assert_eq!(g.at(Point::new(10, 10)), None);
        assert_eq!(g.at(Point::new(-1, 0)), None);
        assert_eq!(g.at(Point::new(0, 4)), None);
    }

    #[test]
    fn index_and_point_are_inverse() {
        let g = Grid::new(7, 3, ());
        for idx in 0..g.len() {
            assert_eq!(g.index(g.point(idx)), Some(idx));
        }
        assert_eq!(g.index(Point::new(2, 1)), Some(9));
        assert_eq!(g.index(Point::new(7, 0)), None);
    }

    #[test]
    fn from_rows_is_row_major() {
        let g = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.at(Point::new(0, 1)), Some(&4));
        assert_eq!(g.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(Grid::from_vec(2, 2, vec![0; 4]).is_ok());
        let err = Grid::from_vec(2, 2, vec![0; 5]).unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                expected: 4,
                found: 5
            }
        );
    }

    #[test]
    fn from_fn_and_iter() {
        let g = Grid::from_fn(3, 2, |p| p.x + 10 * p.y).unwrap();
        assert_eq!(g.as_slice(), &[0, 1, 2, 10, 11, 12]);
        assert!(g.same_shape(&Grid::new(3, 2, ())));
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[4], (Point::new(1, 1), &11));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let wide = i32::MAX as usize + 1;
        let mut calls = 0;
        let err = Grid::from_fn(wide, 1, |_| calls += 1).unwrap_err();
        assert_eq!(
            err,
            GridError::TooLarge {
                width: wide,
                height: 1
            }
        );
        assert_eq!(calls, 0);
        assert!(matches!(
            Grid::<u8>::from_vec(1, wide, Vec::new()),
            Err(GridError::TooLarge { .. })
        ));
    }
}
