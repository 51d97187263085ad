use orienteer_core::Point;

/// One of the four orthogonal grid moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// All directions, in the order edges are generated for each cell.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// Offset of one step as `(dx, dy)`.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::Down => Point::new(0, 1),
            Direction::Up => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Left => Point::new(-1, 0),
        }
    }

    /// Whether the move changes the column (east/west).
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }
}
