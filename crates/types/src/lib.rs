//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! Everything here is plain data, usable by the simulation core, a UI
//! collaborator, or a headless runner alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (4, 1), one row below the top so that every legal
//!   spawn orientation fits inside the grid
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default simulation step (~60 FPS) |
//! | `SHIFT_REPEAT_MS` | 110 | Minimum gap between two horizontal shifts |
//! | `SOFT_DROP_FALL_MS` | 13 | Gravity interval while soft drop is held |
//!
//! # Fall Intervals by Level
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 800ms |
//! | 3 | 500ms |
//! | 4 | 300ms |
//! | 5 | 200ms |
//! | 6 | 80ms |
//! | 7 | 50ms |
//! | 8 | 35ms |
//!
//! # Examples
//!
//! ```
//! use tetris2d_types::{PieceKind, Rotation, SessionState, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::West.degrees(), 270);
//!
//! assert_eq!(SessionState::default(), SessionState::MainMenu);
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default simulation step in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval per level, index 0 = level 1.
pub const LEVEL_FALL_MS: [u32; 8] = [1000, 800, 500, 300, 200, 80, 50, 35];

/// Highest level defined by [`LEVEL_FALL_MS`].
pub const MAX_LEVEL: u32 = LEVEL_FALL_MS.len() as u32;

/// Minimum time between two horizontal shifts while a shift key is held.
pub const SHIFT_REPEAT_MS: u32 = 110;

/// Gravity interval while soft drop is held.
pub const SOFT_DROP_FALL_MS: u32 = 13;

/// Lines that must be burned to advance one level.
pub const LEVEL_COST: u32 = 15;

/// Spawn anchor column.
pub const SPAWN_X: i8 = 4;

/// Spawn anchor row.
pub const SPAWN_Y: i8 = 1;

/// Points per clear pass, indexed by number of rows cleared.
///
/// Counts outside `1..=4` score nothing.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 700, 1500];


/// The seven piece kinds
///
/// Declared in the order the spawner indexes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    O,
    I,
    S,
    Z,
    L,
    J,
    T,
}

impl PieceKind {
    /// Every kind, in spawner index order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris2d_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Lowercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::T => "t",
        }
    }
}

/// Rotation states, clockwise from the spawn table orientation
///
/// - **North**: 0°
/// - **East**: 90°
/// - **South**: 180°
/// - **West**: 270°
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All four rotations in clockwise order.
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris2d_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Angle in degrees.
    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::North => 0,
            Rotation::East => 90,
            Rotation::South => 180,
            Rotation::West => 270,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// A committed block on the board.
///
/// `piece` is the serial id of the piece that placed it, so every block of a
/// locked piece shares one identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub kind: PieceKind,
    pub piece: u32,
}

impl Block {
    pub fn new(kind: PieceKind, piece: u32) -> Self {
        Self { kind, piece }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Block)`: Cell holding a committed block
pub type Cell = Option<Block>;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    MainMenu,
    Play,
    Pause,
    End,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::MainMenu => "main_menu",
            SessionState::Play => "play",
            SessionState::Pause => "pause",
            SessionState::End => "end",
        }
    }

    /// Whether a "start" trigger is accepted in this state.
    pub fn accepts_start(&self) -> bool {
        matches!(self, SessionState::MainMenu | SessionState::End)
    }
}

/// Abstract input keys, independent of any polling backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameInput {
    /// Held: shift left, repeating at the shift-repeat interval
    ShiftLeft,
    /// Held: shift right, repeating at the shift-repeat interval
    ShiftRight,
    /// Edge: rotate 90° clockwise once per press
    RotateCw,
    /// Held: use the soft-drop gravity interval
    SoftDrop,
    /// Edge: toggle Play/Pause
    PauseToggle,
    /// Edge: start from the main menu or after game over
    StartOrRestart,
}

/// Input state for one simulation tick.
///
/// Held inputs are level-triggered; `rotate_cw`, `pause_toggle` and
/// `start_or_restart` are edges and should be true for a single tick per press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub shift_left: bool,
    pub shift_right: bool,
    pub rotate_cw: bool,
    pub soft_drop: bool,
    pub pause_toggle: bool,
    pub start_or_restart: bool,
}

impl InputSnapshot {
    /// No input at all.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with(mut self, input: GameInput) -> Self {
        match input {
            GameInput::ShiftLeft => self.shift_left = true,
            GameInput::ShiftRight => self.shift_right = true,
            GameInput::RotateCw => self.rotate_cw = true,
            GameInput::SoftDrop => self.soft_drop = true,
            GameInput::PauseToggle => self.pause_toggle = true,
            GameInput::StartOrRestart => self.start_or_restart = true,
        }
        self
    }
}

/// Score, burned lines and level, as shown by a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
}

/// Notifications emitted by the session for a UI collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    StateChanged {
        from: SessionState,
        to: SessionState,
    },
    PieceSpawned {
        kind: PieceKind,
        rotation: Rotation,
        piece: u32,
    },
    PieceLocked {
        kind: PieceKind,
        piece: u32,
    },
    /// Rows removed by one clear pass. Never emitted with zero.
    LinesBurned {
        count: u32,
    },
    LevelUp {
        level: u32,
    },
    ScoreChanged(ScoreBoard),
}
