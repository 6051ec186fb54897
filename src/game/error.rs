use thiserror::Error;

use super::cell::Cell;
use super::state::Position;

/// Reasons a move is rejected. Both leave the game state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("position {target} is outside the map")]
    OutOfBounds { target: Position },
    #[error("position {target} is occupied by {}", .occupant.symbol())]
    Blocked { target: Position, occupant: Cell },
}

impl MoveError {
    pub fn target(&self) -> Position {
        match self {
            MoveError::OutOfBounds { target } | MoveError::Blocked { target, .. } => *target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MoveError::OutOfBounds {
            target: Position::new(-1, 0),
        };
        assert_eq!(err.to_string(), "position (-1, 0) is outside the map");

        let err = MoveError::Blocked {
            target: Position::new(2, 3),
            occupant: Cell::Radioactive,
        };
        assert_eq!(err.to_string(), "position (2, 3) is occupied by !!");
        assert_eq!(err.target(), Position::new(2, 3));
    }
}
