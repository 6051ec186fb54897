use tracing::debug;

use super::cell::{Cell, ItemKind};
use super::error::MoveError;
use super::grid::Grid;
use super::state::Position;

/// Most energy a single radioactive cell can drain during an interaction
pub const HAZARD_PENALTY_CAP: i32 = 30;

/// Energy paid to transpose a radioactive cell
pub const TRANSPOSE_COST: i32 = 30;

/// Outcome of a move that was not rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The collector stepped onto the target
    Moved,
    /// The collector had no energy left to move; the run is over
    Exhausted,
}

/// What a single interaction did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionReport {
    /// The one item that was collected, if any
    pub collected: Option<ItemKind>,
    /// Extra adjacent items removed without reward
    pub destroyed: u32,
    /// Radioactive cells absorbed (only when nothing was collected)
    pub hazards_absorbed: u32,
    pub energy_lost: i32,
    pub energy_gained: i32,
}

/// The collector
///
/// The agent is the only writer of its own marker cell on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    position: Position,
    energy: i32,
    collected: Vec<ItemKind>,
}

impl Agent {
    /// Create an agent and paint its marker at `position`
    pub fn spawn(position: Position, energy: i32, grid: &mut Grid) -> Self {
        grid.set(position, Cell::Agent);
        Self {
            position,
            energy,
            collected: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    /// Items collected so far, in collection order
    pub fn collected(&self) -> &[ItemKind] {
        &self.collected
    }

    /// Sum of the points of every collected item
    pub fn score(&self) -> u32 {
        self.collected.iter().map(ItemKind::points).sum()
    }

    /// Orthogonal neighbours (up, down, left, right), not bounds-filtered
    pub fn adjacent_positions(&self) -> [Position; 4] {
        self.position.neighbours()
    }

    /// Step onto `target`.
    ///
    /// Bounds are checked first, then energy, then occupancy. A successful
    /// move always costs exactly one energy.
    pub fn move_to(&mut self, grid: &mut Grid, target: Position) -> Result<MoveOutcome, MoveError> {
        let destination = grid.get(target).ok_or(MoveError::OutOfBounds { target })?;

        if self.energy <= 0 {
            return Ok(MoveOutcome::Exhausted);
        }

        if !destination.is_empty() {
            return Err(MoveError::Blocked {
                target,
                occupant: destination,
            });
        }

        grid.set(self.position, Cell::Empty);
        self.position = target;
        grid.set(target, Cell::Agent);
        self.energy -= 1;

        debug!(%target, energy = self.energy, "moved");
        Ok(MoveOutcome::Moved)
    }

    /// Collect one adjacent item, or absorb adjacent radioactive cells when
    /// there is none, then sweep the neighbourhood: remaining items are
    /// destroyed and obstacles recharge energy.
    pub fn interact(&mut self, grid: &mut Grid) -> InteractionReport {
        let mut report = InteractionReport::default();
        let neighbours: Vec<Position> = self
            .adjacent_positions()
            .into_iter()
            .filter(|pos| grid.in_bounds(*pos))
            .collect();

        let first_item = neighbours
            .iter()
            .find_map(|pos| match grid.get(*pos) {
                Some(Cell::Item(kind)) => Some((*pos, kind)),
                _ => None,
            });

        if let Some((pos, kind)) = first_item {
            self.collected.push(kind);
            self.energy += kind.energy_bonus();
            grid.set(pos, Cell::Empty);
            report.collected = Some(kind);
        } else {
            for pos in &neighbours {
                if grid.get(*pos) != Some(Cell::Radioactive) {
                    continue;
                }
                let penalty = self.energy.min(HAZARD_PENALTY_CAP);
                self.energy -= penalty;
                grid.set(*pos, Cell::Empty);
                report.hazards_absorbed += 1;
                report.energy_lost += penalty;
            }
        }

        for pos in &neighbours {
            match grid.get(*pos) {
                Some(Cell::Item(_)) => {
                    grid.set(*pos, Cell::Empty);
                    report.destroyed += 1;
                }
                Some(cell @ Cell::Obstacle(_)) => {
                    self.energy += cell.energy_yield();
                    report.energy_gained += cell.energy_yield();
                }
                _ => {}
            }
        }

        debug!(?report, energy = self.energy, score = self.score(), "interacted");
        report
    }

    /// Subtract energy unconditionally; energy may go negative
    pub fn receive_damage(&mut self, amount: i32) {
        self.energy -= amount;
    }

    /// Pay to clear the radioactive cell at `target`.
    ///
    /// Silently does nothing (returning `false`) when energy is short or the
    /// target is not a radioactive cell.
    pub fn transpose_hazard(&mut self, grid: &mut Grid, target: Position) -> bool {
        if self.energy < TRANSPOSE_COST || grid.get(target) != Some(Cell::Radioactive) {
            return false;
        }
        self.energy -= TRANSPOSE_COST;
        grid.set(target, Cell::Empty);
        true
    }
}
