use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use tracing::info;

use crate::game::{Action, GameConfig, GameEngine, GameState, GameStatus, MoveError, StepResult};
use crate::input::InputHandler;
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Interactive, one key press per turn
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    message: Option<String>,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            message: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            turns = self.metrics.turns,
            rejected_moves = self.metrics.rejected_moves,
            highest_phase = self.metrics.highest_phase,
            score = self.state.agent.score(),
            "session finished"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            self.metrics.update();
            terminal
                .draw(|frame| {
                    self.renderer
                        .render(frame, &self.state, &self.metrics, self.message.as_deref());
                })
                .context("Failed to draw frame")?;

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        // The game-over screen waits for one key before exiting
        if !self.state.is_running() {
            self.should_quit = true;
            return;
        }

        let action = self.input_handler.handle_key_event(key);
        self.play_turn(action);
    }

    fn play_turn(&mut self, action: Action) {
        let result = self.engine.step(&mut self.state, action);
        self.metrics.on_step(&result, self.state.phase());
        self.message = describe(&result);

        if self.state.status == GameStatus::Quit {
            self.should_quit = true;
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// One-line summary of a turn for the message bar
fn describe(result: &StepResult) -> Option<String> {
    let info = &result.info;

    if let Some(err) = &info.move_error {
        return Some(match err {
            MoveError::OutOfBounds { .. } => {
                "Invalid move: the position is outside the map".to_string()
            }
            MoveError::Blocked { .. } => {
                "Invalid move: the position is occupied".to_string()
            }
        });
    }

    match info.transposed {
        Some(true) => return Some("Radioactive cell transposed".to_string()),
        Some(false) => return Some("Not enough energy to transpose".to_string()),
        None => {}
    }

    if info.phase_advanced {
        return Some("Board cleared! Next phase".to_string());
    }

    if info.proximity_damage > 0 {
        return Some(format!("Radiation nearby: -{} energy", info.proximity_damage));
    }

    info.interaction
        .and_then(|report| report.collected)
        .map(|kind| format!("Collected {} (+{})", kind.symbol(), kind.points()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, StepInfo};

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::seeded(5));
        assert!(mode.state.is_running());
        assert_eq!(mode.state.agent.score(), 0);
        assert!(mode.message.is_none());
    }

    #[test]
    fn test_quit_turn() {
        let mut mode = HumanMode::new(GameConfig::seeded(5));
        mode.play_turn(Action::Quit);
        assert!(mode.should_quit);
    }

    #[test]
    fn test_rejected_move_reported() {
        let mut mode = HumanMode::new(GameConfig::seeded(5));
        mode.play_turn(Action::Move(Direction::Up));

        assert!(!mode.should_quit);
        assert_eq!(mode.metrics.rejected_moves, 1);
        assert_eq!(
            mode.message.as_deref(),
            Some("Invalid move: the position is outside the map")
        );
    }

    #[test]
    fn test_quiet_turn_has_no_message() {
        let result = StepResult {
            terminated: false,
            info: StepInfo {
                moved: true,
                ..Default::default()
            },
        };
        assert_eq!(describe(&result), None);
    }
}
