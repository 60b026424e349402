//! Headless autoplay - a random placement bot and a game runner
//!
//! The bot drives a session only through [`InputState`] presses and releases,
//! exactly like a keyboard collaborator would: for every new piece it picks a
//! rotation count and a target column, walks the piece there, then holds soft
//! drop until it locks.

use serde::Serialize;

use crate::core::{GameSession, InputState, RandomSource, SimpleRng};
use crate::types::{GameEvent, GameInput, InputSnapshot, ScoreBoard, SessionState, BOARD_WIDTH};

/// Random placement bot
#[derive(Debug, Clone)]
pub struct AutoPlayer {
    rng: SimpleRng,
    input: InputState,
    piece: Option<u32>,
    rotations_left: u8,
    target_x: i8,
}

impl AutoPlayer {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            input: InputState::new(),
            piece: None,
            rotations_left: 0,
            target_x: 0,
        }
    }

    /// Column the current piece is being walked to
    pub fn target_x(&self) -> i8 {
        self.target_x
    }

    /// Input for the next tick of `session`
    pub fn next_input<R: RandomSource>(&mut self, session: &GameSession<R>) -> InputSnapshot {
        if session.state() != SessionState::Play {
            self.input.reset();
            self.piece = None;
            return self.input.snapshot();
        }
        let Some(piece) = session.active() else {
            return self.input.snapshot();
        };

        if self.piece != Some(piece.id()) {
            self.piece = Some(piece.id());
            self.rotations_left = self.rng.next_below(4) as u8;
            self.target_x = self.rng.next_below(BOARD_WIDTH as u32) as i8;
            self.input.reset();
        }

        // Release first so the next press is a fresh edge.
        self.input.release(GameInput::RotateCw);
        if self.rotations_left > 0 {
            self.input.press(GameInput::RotateCw);
            self.rotations_left -= 1;
        }

        // Keep the target reachable for the current rotation.
        let shape = piece.shape();
        let lo = shape.iter().map(|&(dx, _)| -dx).max().unwrap_or(0);
        let hi = shape
            .iter()
            .map(|&(dx, _)| BOARD_WIDTH as i8 - 1 - dx)
            .min()
            .unwrap_or(BOARD_WIDTH as i8 - 1);
        self.target_x = self.target_x.clamp(lo, hi);

        let (x, _) = piece.position();
        self.input.release(GameInput::ShiftLeft);
        self.input.release(GameInput::ShiftRight);
        if x > self.target_x {
            self.input.press(GameInput::ShiftLeft);
        } else if x < self.target_x {
            self.input.press(GameInput::ShiftRight);
        }

        if x == self.target_x && self.rotations_left == 0 {
            self.input.press(GameInput::SoftDrop);
        } else {
            self.input.release(GameInput::SoftDrop);
        }

        self.input.snapshot()
    }
}

/// Summary of one autoplayed game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub seed: u32,
    pub ticks: u64,
    pub pieces: u32,
    /// True when the game reached End before the tick limit
    pub finished: bool,
    #[serde(flatten)]
    pub result: ScoreBoard,
}

/// Start `session` and let `player` drive it until game over or `max_ticks`.
pub fn play_game<R: RandomSource>(
    session: &mut GameSession<R>,
    player: &mut AutoPlayer,
    max_ticks: u64,
    tick_ms: u32,
) -> GameReport {
    session.restart();

    let mut ticks = 0;
    let mut pieces = 0u32;
    while ticks < max_ticks && session.state() == SessionState::Play {
        let input = player.next_input(session);
        session.tick(tick_ms, &input);
        ticks += 1;

        for event in session.drain_events() {
            match event {
                GameEvent::PieceSpawned { .. } => pieces += 1,
                GameEvent::LevelUp { level } => log::debug!("tick {}: level {}", ticks, level),
                _ => {}
            }
        }
    }

    GameReport {
        seed: session.config().seed,
        ticks,
        pieces,
        finished: session.state() == SessionState::End,
        result: session.score_board(),
    }
}
