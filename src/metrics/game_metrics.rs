use std::time::{Duration, Instant};

use crate::game::StepResult;

/// Per-session counters shown alongside the board
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub turns: u32,
    pub rejected_moves: u32,
    pub highest_phase: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            turns: 0,
            rejected_moves: 0,
            highest_phase: 1,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Fold one turn into the counters
    pub fn on_step(&mut self, result: &StepResult, phase: u32) {
        self.turns += 1;
        if result.info.move_error.is_some() {
            self.rejected_moves += 1;
        }
        self.highest_phase = self.highest_phase.max(phase);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MoveError, Position, StepInfo};

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_step_tracking() {
        let mut metrics = GameMetrics::new();

        let moved = StepResult {
            terminated: false,
            info: StepInfo {
                moved: true,
                ..Default::default()
            },
        };
        let rejected = StepResult {
            terminated: false,
            info: StepInfo {
                move_error: Some(MoveError::OutOfBounds {
                    target: Position::new(-1, 0),
                }),
                ..Default::default()
            },
        };

        metrics.on_step(&moved, 1);
        metrics.on_step(&rejected, 3);
        metrics.on_step(&moved, 2);

        assert_eq!(metrics.turns, 3);
        assert_eq!(metrics.rejected_moves, 1);
        assert_eq!(metrics.highest_phase, 3); // Should not decrease
    }
}
