use super::action::Direction;
use super::agent::Agent;
use super::grid::Grid;

/// A position on the game grid. `x` is the row, `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// The four orthogonal neighbours in up, down, left, right order.
    /// Not bounds-filtered.
    pub fn neighbours(&self) -> [Position; 4] {
        Direction::ALL.map(|direction| self.moved_in_direction(direction))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Whether the run is still accepting turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// The collector tried to move with no energy left
    EnergyDepleted,
    /// The player asked to leave
    Quit,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub agent: Agent,
    pub status: GameStatus,
    pub turns: u32,
    /// Radioactive cell awaiting a transposition confirmation
    pub pending_transposition: Option<Position>,
}

impl GameState {
    /// Create a new running game state
    pub fn new(grid: Grid, agent: Agent) -> Self {
        Self {
            grid,
            agent,
            status: GameStatus::Running,
            turns: 0,
            pending_transposition: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn phase(&self) -> u32 {
        self.grid.phase()
    }
}
