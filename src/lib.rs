//! Jewel Collector - a turn-based grid collector game
//!
//! This library provides:
//! - Core game logic: cells, the growing board, the collector and the turn engine (game module)
//! - TUI rendering (render module)
//! - Key mapping (input module)
//! - Session counters (metrics module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
