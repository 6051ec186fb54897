/// Direction the collector can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed scan order used for every adjacency query
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the delta (dx, dy) for moving in this direction.
    /// `x` is the row and `y` the column, so "up" decrements `x`.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Action that can be taken in one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Step one cell in a direction
    Move(Direction),
    /// Collect / resolve adjacent cells, or confirm a pending transposition
    Interact,
    /// End the run
    Quit,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}
