use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

/// Maps key presses onto turn actions. Any unmapped key ends the run.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Action {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Action::Move(Direction::Up),
            KeyCode::Down => Action::Move(Direction::Down),
            KeyCode::Left => Action::Move(Direction::Left),
            KeyCode::Right => Action::Move(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Action::Move(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Action::Move(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Action::Move(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Action::Move(Direction::Right),

            // Collect / confirm transposition
            KeyCode::Char('g') | KeyCode::Char('G') => Action::Interact,

            _ => Action::Quit,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
