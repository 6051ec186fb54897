//! Core game logic module for the collector game
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end drives it one turn at a time through [`GameEngine::step`].

pub mod action;
pub mod agent;
pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use agent::{Agent, InteractionReport, MoveOutcome};
pub use cell::{Cell, ItemKind, ObstacleKind};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use error::MoveError;
pub use grid::Grid;
pub use state::{GameState, GameStatus, Position};
