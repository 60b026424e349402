//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the gameplay rules of a falling-block puzzle: the
//! playfield, piece shapes and motion, line clearing, scoring and the session
//! lifecycle. It has no dependencies on rendering, windowing or input devices;
//! a collaborator feeds it elapsed time plus an [`InputSnapshot`](types::InputSnapshot)
//! and reads back a [`GameSnapshot`] and a queue of [`GameEvent`](types::GameEvent)s.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of optional blocks with bounds-checked queries
//! - [`pieces`]: shape tables for the seven kinds in all four rotations
//! - [`piece`]: the falling piece, its timers, tentative moves and locking
//! - [`spawner`]: uniform random kind and spawn rotation at a fixed anchor
//! - [`line_clear`]: top-row overflow detection and full-row removal
//! - [`scoring`]: points per clear pass and level progression
//! - [`session`]: lifecycle state machine tying everything together
//! - [`config`]: tunable timing and spawn parameters, JSON loading
//! - [`input`]: press/release latch producing per-tick input snapshots
//! - [`rng`]: injectable random source and a seeded LCG
//! - [`snapshot`]: plain-data frame view for renderers and tooling
//!
//! # Rules
//!
//! - Pieces spawn at (4, 1) with a random kind and starting rotation
//! - Rotation is clockwise only, with no wall kicks
//! - Horizontal shifts auto-repeat every 110ms while held
//! - Gravity follows the level table; soft drop falls every 13ms
//! - A piece that cannot move down locks immediately
//! - A block on the top row after a lock ends the game
//! - A clear pass of 1-4 rows scores 100/300/700/1500
//! - Every 15 lines advance one level, up to level 8
//!
//! # Example
//!
//! ```
//! use tetris2d_core::{GameSession, InputState};
//! use tetris2d_core::types::{GameInput, SessionState, TICK_MS};
//!
//! let mut session = GameSession::new(12345);
//! let mut input = InputState::new();
//!
//! input.press(GameInput::StartOrRestart);
//! session.tick(TICK_MS, &input.snapshot());
//! assert_eq!(session.state(), SessionState::Play);
//!
//! input.press(GameInput::SoftDrop);
//! for _ in 0..60 {
//!     session.tick(TICK_MS, &input.snapshot());
//! }
//! assert!(session.board().occupied_count() > 0);
//! ```

pub mod board;
pub mod config;
pub mod input;
pub mod line_clear;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod spawner;

pub use tetris2d_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use input::InputState;
pub use line_clear::{clear_full_lines, ClearOutcome, ClearedRows};
pub use piece::{ActivePiece, PieceStatus, TickOutcome, Timing};
pub use pieces::{offsets, spawn_rotations, PieceShape};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use scoring::{fall_interval_ms, level_after, score_for_lines};
pub use session::GameSession;
pub use snapshot::{ActiveSnapshot, BoardGrid, GameSnapshot};
pub use spawner::PieceSpawner;
