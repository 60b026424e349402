use serde::Serialize;

use crate::piece::ActivePiece;
use crate::types::{Cell, PieceKind, Rotation, ScoreBoard, SessionState, BOARD_HEIGHT, BOARD_WIDTH};

pub type BoardGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub id: u32,
    pub cells: [(i8, i8); 4],
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        let (x, y) = value.position();
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x,
            y,
            id: value.id(),
            cells: value.cells(),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Rows top to bottom
    pub board: BoardGrid,
    pub active: Option<ActiveSnapshot>,
    pub state: SessionState,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub fall_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn score_board(&self) -> ScoreBoard {
        ScoreBoard {
            score: self.score,
            lines: self.lines,
            level: self.level,
        }
    }

    pub fn playable(&self) -> bool {
        self.state == SessionState::Play
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            state: SessionState::MainMenu,
            score: 0,
            lines: 0,
            level: 1,
            fall_ms: 0,
        }
    }
}
