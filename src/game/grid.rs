use rand::Rng;
use tracing::warn;

use super::cell::{Cell, ItemKind, ObstacleKind};
use super::config::placement_count;
use super::state::Position;

/// Side length of the hand-placed opening board
pub const STARTING_SIZE: usize = 10;

/// Largest side length a board may ever reach
pub const MAX_GRID_SIZE: usize = 30;

const STARTING_ITEMS: [(i32, i32, ItemKind); 6] = [
    (1, 9, ItemKind::Red),
    (8, 8, ItemKind::Red),
    (9, 1, ItemKind::Green),
    (7, 6, ItemKind::Green),
    (3, 4, ItemKind::Blue),
    (2, 1, ItemKind::Blue),
];

const STARTING_OBSTACLES: [(i32, i32, ObstacleKind); 12] = [
    (5, 0, ObstacleKind::Water),
    (5, 1, ObstacleKind::Water),
    (5, 2, ObstacleKind::Water),
    (5, 3, ObstacleKind::Water),
    (5, 4, ObstacleKind::Water),
    (5, 5, ObstacleKind::Water),
    (5, 6, ObstacleKind::Water),
    (5, 9, ObstacleKind::Tree),
    (3, 9, ObstacleKind::Tree),
    (8, 3, ObstacleKind::Tree),
    (2, 5, ObstacleKind::Tree),
    (1, 4, ObstacleKind::Tree),
];

/// Square board of cells plus the phase counter
///
/// The board only ever grows, up to `max_size`. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    max_size: usize,
    cells: Vec<Cell>,
    phase: u32,
}

impl Grid {
    /// Create an all-empty board in phase 1
    pub fn new(size: usize, max_size: usize) -> Self {
        Self {
            size,
            max_size,
            cells: vec![Cell::Empty; size * size],
            phase: 1,
        }
    }

    /// Board with the hand-placed opening layout. Layout cells that fall
    /// outside a board smaller than the standard one are skipped.
    pub fn with_starting_layout(size: usize, max_size: usize) -> Self {
        let mut grid = Self::new(size, max_size);

        for (x, y, kind) in STARTING_ITEMS {
            let pos = Position::new(x, y);
            if grid.in_bounds(pos) {
                grid.set(pos, Cell::Item(kind));
            }
        }
        for (x, y, kind) in STARTING_OBSTACLES {
            let pos = Position::new(x, y);
            if grid.in_bounds(pos) {
                grid.set(pos, Cell::Obstacle(kind));
            }
        }

        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a position is within the grid bounds
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size as i32 && pos.y >= 0 && pos.y < self.size as i32
    }

    /// Cell at `pos`, or `None` outside the board
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[self.index(pos)])
    }

    /// Overwrite the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board; callers check `in_bounds` first.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        assert!(self.in_bounds(pos), "set outside the board at {pos}");
        let index = self.index(pos);
        self.cells[index] = cell;
    }

    fn index(&self, pos: Position) -> usize {
        pos.x as usize * self.size + pos.y as usize
    }

    /// Rows of the board, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of item cells currently on the board
    pub fn count_items(&self) -> usize {
        self.count(Cell::is_item)
    }

    pub fn count(&self, predicate: impl Fn(&Cell) -> bool) -> usize {
        self.cells.iter().filter(|cell| predicate(*cell)).count()
    }

    /// First empty cell in row-major order
    pub fn first_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(Cell::is_empty)
            .map(|index| Position::new((index / self.size) as i32, (index % self.size) as i32))
    }

    /// Grow the board by one, wiping every cell. No-op at the size cap.
    ///
    /// Returns whether the board grew. The collector's marker is wiped along
    /// with everything else; the caller re-places it.
    pub fn grow(&mut self) -> bool {
        if self.size >= self.max_size {
            return false;
        }
        self.size += 1;
        self.cells = vec![Cell::Empty; self.size * self.size];
        true
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Clear the board and scatter items, obstacles and one radioactive cell
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        item_density: f64,
        obstacle_density: f64,
    ) {
        self.clear();

        let mut free = self.cells.len();

        for _ in 0..placement_count(item_density, self.size) {
            let kind = ItemKind::ALL[rng.gen_range(0..ItemKind::ALL.len())];
            if !self.place_randomly(rng, Cell::Item(kind), &mut free) {
                break;
            }
        }

        for _ in 0..placement_count(obstacle_density, self.size) {
            let kind = ObstacleKind::ALL[rng.gen_range(0..ObstacleKind::ALL.len())];
            if !self.place_randomly(rng, Cell::Obstacle(kind), &mut free) {
                break;
            }
        }

        self.place_randomly(rng, Cell::Radioactive, &mut free);
    }

    /// Draw uniform coordinates until an empty cell turns up, then fill it.
    /// Gives up only when the board has no empty cell left.
    fn place_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R, cell: Cell, free: &mut usize) -> bool {
        if *free == 0 {
            warn!(size = self.size, cell = cell.symbol(), "no empty cell left to place");
            return false;
        }

        loop {
            let pos = Position::new(
                rng.gen_range(0..self.size) as i32,
                rng.gen_range(0..self.size) as i32,
            );
            let index = self.index(pos);
            if self.cells[index].is_empty() {
                self.cells[index] = cell;
                *free -= 1;
                return true;
            }
        }
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }

    pub fn advance_phase(&mut self) {
        self.phase += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(10, 30);

        assert!(grid.in_bounds(Position::new(0, 0)));
        assert!(grid.in_bounds(Position::new(9, 9)));
        assert!(!grid.in_bounds(Position::new(-1, 0)));
        assert!(!grid.in_bounds(Position::new(10, 0)));
        assert!(!grid.in_bounds(Position::new(0, 10)));
        assert_eq!(grid.get(Position::new(0, -1)), None);
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(10, 30);
        let pos = Position::new(3, 7);
        grid.set(pos, Cell::Item(ItemKind::Green));

        assert_eq!(grid.get(pos), Some(Cell::Item(ItemKind::Green)));
        assert_eq!(grid.get(Position::new(7, 3)), Some(Cell::Empty));
        assert_eq!(grid.count_items(), 1);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_bounds_panics() {
        let mut grid = Grid::new(10, 30);
        grid.set(Position::new(10, 0), Cell::Radioactive);
    }

    #[test]
    fn test_starting_layout() {
        let grid = Grid::with_starting_layout(STARTING_SIZE, 30);

        assert_eq!(grid.size(), 10);
        assert_eq!(grid.count_items(), 6);
        assert_eq!(grid.count(|cell| matches!(cell, Cell::Obstacle(_))), 12);
        assert_eq!(grid.count(Cell::is_radioactive), 0);
        assert_eq!(grid.get(Position::new(1, 9)), Some(Cell::Item(ItemKind::Red)));
        assert_eq!(
            grid.get(Position::new(5, 9)),
            Some(Cell::Obstacle(ObstacleKind::Tree))
        );
    }

    #[test]
    fn test_grow_resets_cells() {
        let mut grid = Grid::with_starting_layout(STARTING_SIZE, 30);

        assert!(grid.grow());
        assert_eq!(grid.size(), 11);
        assert_eq!(grid.count(Cell::is_empty), 121);
        assert!(grid.in_bounds(Position::new(10, 10)));
    }

    #[test]
    fn test_grow_at_cap_is_noop() {
        let mut grid = Grid::new(30, 30);
        grid.set(Position::new(4, 4), Cell::Item(ItemKind::Blue));

        assert!(!grid.grow());
        assert_eq!(grid.size(), 30);
        // No reset happens at the cap
        assert_eq!(grid.count_items(), 1);
    }

    #[test]
    fn test_randomize_counts() {
        let mut rng = StdRng::seed_from_u64(42);

        for size in [10, 11, 20, 30] {
            let mut grid = Grid::new(size, 30);
            grid.set(Position::new(0, 0), Cell::Agent);
            grid.randomize(&mut rng, 0.06, 0.12);

            assert_eq!(grid.count_items(), placement_count(0.06, size));
            assert_eq!(
                grid.count(|cell| matches!(cell, Cell::Obstacle(_))),
                placement_count(0.12, size)
            );
            assert_eq!(grid.count(Cell::is_radioactive), 1);
            // Randomize wipes the collector marker as well
            assert_eq!(grid.count(|cell| *cell == Cell::Agent), 0);
        }
    }

    #[test]
    fn test_randomize_is_deterministic_per_seed() {
        let mut a = Grid::new(12, 30);
        let mut b = Grid::new(12, 30);
        a.randomize(&mut StdRng::seed_from_u64(9), 0.06, 0.12);
        b.randomize(&mut StdRng::seed_from_u64(9), 0.06, 0.12);
        assert_eq!(a, b);
    }

    #[test]
    fn test_randomize_saturated_board_terminates() {
        let mut grid = Grid::new(3, 3);
        grid.randomize(&mut StdRng::seed_from_u64(1), 1.0, 1.0);

        assert_eq!(grid.count_items(), 9);
        assert_eq!(grid.count(Cell::is_radioactive), 0);
    }

    #[test]
    fn test_first_empty() {
        let mut grid = Grid::new(2, 30);
        grid.set(Position::new(0, 0), Cell::Radioactive);
        assert_eq!(grid.first_empty(), Some(Position::new(0, 1)));

        grid.set(Position::new(0, 1), Cell::Radioactive);
        assert_eq!(grid.first_empty(), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_phase_advances() {
        let mut grid = Grid::new(10, 30);
        assert_eq!(grid.phase(), 1);
        grid.advance_phase();
        grid.advance_phase();
        assert_eq!(grid.phase(), 3);
    }

    #[test]
    fn test_rows() {
        let grid = Grid::new(4, 30);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.len() == 4));
    }
}
