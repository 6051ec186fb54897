use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::{
    action::Action,
    agent::{Agent, InteractionReport, MoveOutcome},
    cell::Cell,
    config::GameConfig,
    error::MoveError,
    grid::Grid,
    state::{GameState, GameStatus, Position},
};

/// Information about a step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepInfo {
    /// Whether the collector changed cell this step
    pub moved: bool,
    /// Why a requested move was rejected
    pub move_error: Option<MoveError>,
    /// Energy lost to radioactive cells next to the new position
    pub proximity_damage: i32,
    /// Result of an interaction, if one happened
    pub interaction: Option<InteractionReport>,
    /// Whether a pending transposition was confirmed, and if it went through
    pub transposed: Option<bool>,
    /// A rejected move armed a transposition prompt for this cell
    pub transposition_offered: Option<Position>,
    /// The board was cleared and the next phase started
    pub phase_advanced: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// Drives one turn at a time against a [`GameState`]
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the opening board and place the collector
    pub fn reset(&mut self) -> GameState {
        let origin = Position::new(0, 0);

        let (mut grid, start) = if self.config.random_start {
            let mut grid = Grid::new(self.config.initial_size, self.config.max_size);
            grid.randomize(
                &mut self.rng,
                self.config.item_density,
                self.config.obstacle_density,
            );
            let start = match grid.get(origin) {
                Some(Cell::Empty) => origin,
                _ => grid.first_empty().unwrap_or(origin),
            };
            (grid, start)
        } else {
            (
                Grid::with_starting_layout(self.config.initial_size, self.config.max_size),
                origin,
            )
        };

        let agent = Agent::spawn(start, self.config.initial_energy, &mut grid);
        info!(size = grid.size(), %start, "new game");

        GameState::new(grid, agent)
    }

    /// Execute one turn of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_running() {
            return StepResult {
                terminated: true,
                info: StepInfo::default(),
            };
        }

        state.turns += 1;
        let mut info = StepInfo::default();

        if action == Action::Quit {
            info!(turns = state.turns, score = state.agent.score(), "player quit");
            state.status = GameStatus::Quit;
            return StepResult {
                terminated: true,
                info,
            };
        }

        // A pending prompt consumes this turn's input
        if let Some(target) = state.pending_transposition.take() {
            if action == Action::Interact {
                let done = state.agent.transpose_hazard(&mut state.grid, target);
                debug!(%target, done, energy = state.agent.energy(), "transposition confirmed");
                info.transposed = Some(done);
            }
            return StepResult {
                terminated: false,
                info,
            };
        }

        match action {
            Action::Move(direction) => {
                let target = state.agent.position().moved_in_direction(direction);
                self.handle_move(state, target, &mut info);
            }
            Action::Interact => {
                let report = state.agent.interact(&mut state.grid);
                info.interaction = Some(report);

                if state.grid.count_items() == 0 {
                    self.advance_phase(state);
                    info.phase_advanced = true;
                }
            }
            Action::Quit => {}
        }

        StepResult {
            terminated: !state.is_running(),
            info,
        }
    }

    fn handle_move(&mut self, state: &mut GameState, target: Position, info: &mut StepInfo) {
        match state.agent.move_to(&mut state.grid, target) {
            Ok(MoveOutcome::Moved) => {
                info.moved = true;

                let hazards = state
                    .agent
                    .adjacent_positions()
                    .into_iter()
                    .filter(|pos| state.grid.get(*pos) == Some(Cell::Radioactive))
                    .count() as i32;
                for _ in 0..hazards {
                    state.agent.receive_damage(self.config.proximity_damage);
                }
                info.proximity_damage = hazards * self.config.proximity_damage;
            }
            Ok(MoveOutcome::Exhausted) => {
                self.deplete(state);
            }
            Err(err) => {
                warn!(%err, "move rejected");
                if let MoveError::Blocked {
                    occupant: Cell::Radioactive,
                    ..
                } = err
                {
                    if state.grid.phase() >= self.config.transpose_min_phase {
                        state.pending_transposition = Some(target);
                        info.transposition_offered = Some(target);
                    }
                }
                info.move_error = Some(err);
            }
        }
    }

    /// Grow, bump the phase, repopulate, then step the collector onto the
    /// first free neighbour (or back onto its own cell)
    fn advance_phase(&mut self, state: &mut GameState) {
        let grid = &mut state.grid;
        grid.grow();
        grid.advance_phase();
        grid.randomize(
            &mut self.rng,
            self.config.item_density,
            self.config.obstacle_density,
        );
        info!(phase = grid.phase(), size = grid.size(), "phase cleared");

        self.relocate(state);
    }

    /// Step onto the first empty neighbour, falling back to the current
    /// coordinate. A blocked fallback leaves the collector without a marker.
    fn relocate(&self, state: &mut GameState) {
        let grid = &mut state.grid;
        let agent = &mut state.agent;
        let target = agent
            .adjacent_positions()
            .into_iter()
            .find(|pos| grid.get(*pos) == Some(Cell::Empty))
            .unwrap_or_else(|| agent.position());

        match agent.move_to(grid, target) {
            Ok(MoveOutcome::Moved) => {}
            Ok(MoveOutcome::Exhausted) => self.deplete(state),
            Err(err) => {
                warn!(%err, "collector could not be re-placed after repopulation");
            }
        }
    }

    fn deplete(&self, state: &mut GameState) {
        info!(
            turns = state.turns,
            score = state.agent.score(),
            phase = state.grid.phase(),
            "energy depleted"
        );
        state.status = GameStatus::EnergyDepleted;
    }
}
