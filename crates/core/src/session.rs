//! Game session - lifecycle state machine, scoring and leveling
//!
//! The session owns the board, the falling piece, the spawner and all
//! counters. It is driven by [`GameSession::tick`], called once per frame with
//! the elapsed time and an input snapshot, and reports what happened through a
//! queue of [`GameEvent`]s drained by the caller.
//!
//! Lifecycle:
//!
//! ```text
//! MainMenu --start--> Play <--pause--> Pause
//!                      |
//!          overflow / blocked spawn
//!                      v
//!                     End --start--> Play
//! ```
//!
//! # Example
//!
//! ```
//! use tetris2d_core::GameSession;
//! use tetris2d_core::types::{GameEvent, InputSnapshot, SessionState};
//!
//! let mut session = GameSession::new(12345);
//! assert_eq!(session.state(), SessionState::MainMenu);
//!
//! session.start();
//! assert_eq!(session.state(), SessionState::Play);
//! assert!(session.active().is_some());
//!
//! session.tick(16, &InputSnapshot::idle());
//! let events: Vec<GameEvent> = session.drain_events().collect();
//! assert!(events.iter().any(|e| matches!(e, GameEvent::PieceSpawned { .. })));
//! ```

use std::vec::Drain;

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::line_clear::{clear_full_lines, ClearOutcome};
use crate::piece::{ActivePiece, TickOutcome, Timing};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{fall_interval_ms, level_after, score_for_lines};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::spawner::PieceSpawner;
use crate::types::{GameEvent, InputSnapshot, ScoreBoard, SessionState, BOARD_HEIGHT};

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    config: GameConfig,
    board: Board,
    active: Option<ActivePiece>,
    spawner: PieceSpawner<R>,
    state: SessionState,
    level: u32,
    lines: u32,
    score: u32,
    fall_ms: u32,
    events: Vec<GameEvent>,
}

impl GameSession<SimpleRng> {
    /// Session with default tuning and the given seed
    pub fn new(seed: u32) -> Self {
        Self::build(GameConfig::with_seed(seed), SimpleRng::new(seed))
    }

    /// Session seeded from `config.seed`
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = SimpleRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl Default for GameSession<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Session drawing pieces from `rng`; `config.seed` is not used
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: GameConfig, rng: R) -> Self {
        let spawner = PieceSpawner::with_rng(rng, config.spawn_anchor());
        let fall_ms = fall_interval_ms(&config.level_fall_ms, 1);
        Self {
            config,
            board: Board::new(),
            active: None,
            spawner,
            state: SessionState::MainMenu,
            level: 1,
            lines: 0,
            score: 0,
            fall_ms,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total lines burned since the last restart
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Gravity interval for the current level
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_ms
    }

    pub fn score_board(&self) -> ScoreBoard {
        ScoreBoard {
            score: self.score,
            lines: self.lines,
            level: self.level,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn spawner(&self) -> &PieceSpawner<R> {
        &self.spawner
    }

    /// Events queued since the last drain, oldest first
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (y, row) in out.board.iter_mut().enumerate() {
            row.copy_from_slice(self.board.row(y));
        }
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.state = self.state;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.fall_ms = self.fall_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Start a new game from the main menu or after game over.
    ///
    /// Returns false (and does nothing) in Play or Pause.
    pub fn start(&mut self) -> bool {
        if !self.state.accepts_start() {
            return false;
        }
        self.restart();
        true
    }

    /// Switch between Play and Pause. Ignored in other states.
    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            SessionState::Play => self.set_state(SessionState::Pause),
            SessionState::Pause => self.set_state(SessionState::Play),
            SessionState::MainMenu | SessionState::End => return false,
        }
        true
    }

    /// Clear the board, reset counters and level, discard the falling piece,
    /// and begin a new game in Play.
    pub fn restart(&mut self) {
        if let Some(mut piece) = self.active.take() {
            piece.discard();
        }
        self.board.reset();
        self.level = 1;
        self.lines = 0;
        self.score = 0;
        self.fall_ms = fall_interval_ms(&self.config.level_fall_ms, self.level);
        self.events.push(GameEvent::ScoreChanged(self.score_board()));

        self.set_state(SessionState::Play);
        self.spawn_next();
    }

    /// Advance the simulation by one frame.
    ///
    /// Session commands are handled first; the falling piece only moves in
    /// Play. Returns the piece outcome when a piece step ran.
    pub fn tick(&mut self, elapsed_ms: u32, input: &InputSnapshot) -> Option<TickOutcome> {
        if input.start_or_restart {
            self.start();
        }
        if input.pause_toggle {
            self.toggle_pause();
        }
        if self.state != SessionState::Play {
            return None;
        }

        if self.active.is_none() {
            self.spawn_next();
        }

        let timing = self.timing();
        let piece = self.active.as_mut()?;
        let outcome = piece.step(&mut self.board, elapsed_ms, input, &timing);

        match outcome {
            TickOutcome::Falling => {}
            TickOutcome::Locked => self.on_piece_locked(),
            TickOutcome::Obstructed => {
                log::info!("spawn area blocked");
                self.end_game();
            }
        }

        Some(outcome)
    }

    fn timing(&self) -> Timing {
        Timing {
            fall_ms: self.fall_ms,
            soft_drop_ms: self.config.soft_drop_fall_ms,
            shift_repeat_ms: self.config.shift_repeat_ms,
        }
    }

    fn spawn_next(&mut self) {
        let piece = self.spawner.spawn();
        self.events.push(GameEvent::PieceSpawned {
            kind: piece.kind(),
            rotation: piece.rotation(),
            piece: piece.id(),
        });
        self.active = Some(piece);
    }

    fn on_piece_locked(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.events.push(GameEvent::PieceLocked {
            kind: piece.kind(),
            piece: piece.id(),
        });

        match clear_full_lines(&mut self.board) {
            ClearOutcome::Overflow => {
                log::info!("stack reached the top row");
                self.end_game();
            }
            ClearOutcome::Cleared(rows) => {
                self.apply_cleared_lines(rows.len() as u32);
                self.spawn_next();
            }
        }
    }

    /// Update lines, score and level after a clear pass of `count` rows
    fn apply_cleared_lines(&mut self, count: u32) {
        if count == 0 {
            return;
        }

        self.lines = self.lines.saturating_add(count);
        self.score = self.score.saturating_add(score_for_lines(count));
        self.events.push(GameEvent::LinesBurned { count });

        let level = level_after(
            self.level,
            self.lines,
            self.config.level_cost,
            self.config.max_level(),
        );
        if level != self.level {
            self.level = level;
            self.fall_ms = fall_interval_ms(&self.config.level_fall_ms, level);
            log::info!("level {} (fall interval {}ms)", level, self.fall_ms);
            self.events.push(GameEvent::LevelUp { level });
        }

        self.events.push(GameEvent::ScoreChanged(self.score_board()));
    }

    fn end_game(&mut self) {
        if let Some(mut piece) = self.active.take() {
            piece.discard();
        }
        self.set_state(SessionState::End);
        log::info!(
            "game over: score {} lines {} level {} ({} blocks on a {}-row board)",
            self.score,
            self.lines,
            self.level,
            self.board.occupied_count(),
            BOARD_HEIGHT
        );
    }

    fn set_state(&mut self, to: SessionState) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        log::info!("session {} -> {}", from.as_str(), to.as_str());
        self.events.push(GameEvent::StateChanged { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;
    use crate::types::{Block, GameInput, PieceKind, Rotation, BOARD_WIDTH};

    fn filler() -> Block {
        Block::new(PieceKind::O, 0)
    }

    fn started(seed: u32) -> GameSession {
        let mut session = GameSession::new(seed);
        session.start();
        session.drain_events().for_each(drop);
        session
    }

    /// Fill row `y` except the listed columns
    fn fill_row_except(board: &mut Board, y: i8, gaps: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !gaps.contains(&x) {
                board.set(x, y, filler());
            }
        }
    }

    #[test]
    fn test_new_session_waits_in_main_menu() {
        let mut session = GameSession::new(12345);
        assert_eq!(session.state(), SessionState::MainMenu);
        assert!(session.active().is_none());
        assert_eq!(session.level(), 1);
        assert_eq!(session.fall_interval_ms(), 1000);

        assert_eq!(session.tick(16, &InputSnapshot::idle()), None);
        assert!(session.active().is_none());
    }

    #[test]
    fn test_start_trigger_enters_play() {
        let mut session = GameSession::new(12345);
        let start = InputSnapshot::idle().with(GameInput::StartOrRestart);

        assert!(session.tick(16, &start).is_some());
        assert_eq!(session.state(), SessionState::Play);
        assert!(session.active().is_some());

        let events: Vec<_> = session.drain_events().collect();
        assert!(events.contains(&GameEvent::StateChanged {
            from: SessionState::MainMenu,
            to: SessionState::Play,
        }));
    }

    #[test]
    fn test_start_is_ignored_while_playing() {
        let mut session = started(5);
        let id = session.active().map(|p| p.id());
        assert!(!session.start());
        assert_eq!(session.active().map(|p| p.id()), id);
    }

    #[test]
    fn test_pause_suspends_piece() {
        let mut session = started(5);
        assert!(session.toggle_pause());
        assert_eq!(session.state(), SessionState::Pause);

        let before = session.active().map(|p| p.position());
        let held = InputSnapshot::idle()
            .with(GameInput::ShiftLeft)
            .with(GameInput::SoftDrop);
        for _ in 0..100 {
            assert_eq!(session.tick(100, &held), None);
        }
        assert_eq!(session.active().map(|p| p.position()), before);

        assert!(session.toggle_pause());
        assert_eq!(session.state(), SessionState::Play);
    }

    #[test]
    fn test_pause_ignored_outside_play() {
        let mut session = GameSession::new(5);
        assert!(!session.toggle_pause());
        assert_eq!(session.state(), SessionState::MainMenu);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = started(9);
        session.level = 4;
        session.score = 900;
        session.lines = 47;
        session.fall_ms = 300;
        fill_row_except(&mut session.board, 19, &[3]);

        session.restart();

        assert_eq!(session.level(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.lines(), 0);
        assert_eq!(session.fall_interval_ms(), 1000);
        assert_eq!(session.board().occupied_count(), 0);
        assert_eq!(session.state(), SessionState::Play);
        assert!(session.active().is_some());
        assert!(session
            .pending_events()
            .contains(&GameEvent::ScoreChanged(ScoreBoard {
                score: 0,
                lines: 0,
                level: 1,
            })));
    }

    #[test]
    fn test_four_line_clear_scores_1500() {
        let mut session = started(3);
        for y in 16..20 {
            fill_row_except(&mut session.board, y, &[0]);
        }
        session.active = Some(ActivePiece::new(PieceKind::I, Rotation::North, 0, 17, 99));

        let outcome = session.tick(1000, &InputSnapshot::idle());

        assert_eq!(outcome, Some(TickOutcome::Locked));
        assert_eq!(session.score(), 1500);
        assert_eq!(session.lines(), 4);
        assert_eq!(session.board().occupied_count(), 0);
        assert_eq!(session.state(), SessionState::Play);

        let events: Vec<_> = session.drain_events().collect();
        let burned: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::LinesBurned { .. }))
            .collect();
        assert_eq!(burned, vec![&GameEvent::LinesBurned { count: 4 }]);
        assert!(matches!(events.last(), Some(GameEvent::PieceSpawned { .. })));
    }

    #[test]
    fn test_lock_without_clear_emits_no_burn() {
        let mut session = started(3);
        session.active = Some(ActivePiece::new(PieceKind::O, Rotation::North, 5, 18, 99));

        assert_eq!(session.tick(1000, &InputSnapshot::idle()), Some(TickOutcome::Locked));
        assert_eq!(session.board().occupied_count(), 4);
        assert!(!session
            .pending_events()
            .iter()
            .any(|e| matches!(e, GameEvent::LinesBurned { .. } | GameEvent::ScoreChanged(_))));
    }

    #[test]
    fn test_blocked_spawn_ends_game() {
        let mut session = started(3);
        // Every shape contains its anchor cell.
        session.board.set(4, 1, filler());

        let outcome = session.tick(16, &InputSnapshot::idle());

        assert_eq!(outcome, Some(TickOutcome::Obstructed));
        assert_eq!(session.state(), SessionState::End);
        assert!(session.active().is_none());
        assert_eq!(session.board().occupied_count(), 1);
    }

    #[test]
    fn test_top_row_overflow_ends_game_before_clearing() {
        let mut session = started(3);
        session.board.set(0, 0, filler());
        fill_row_except(&mut session.board, 19, &[4, 5]);
        session.active = Some(ActivePiece::new(PieceKind::O, Rotation::West, 4, 18, 99));

        assert_eq!(session.tick(1000, &InputSnapshot::idle()), Some(TickOutcome::Locked));

        assert_eq!(session.state(), SessionState::End);
        assert_eq!(session.lines(), 0);
        assert!(session.board().is_row_full(19));
        assert!(session.active().is_none());
    }

    #[test]
    fn test_start_after_end_restarts() {
        let mut session = started(3);
        session.board.set(4, 1, filler());
        session.tick(16, &InputSnapshot::idle());
        assert_eq!(session.state(), SessionState::End);

        let start = InputSnapshot::idle().with(GameInput::StartOrRestart);
        session.tick(16, &start);
        assert_eq!(session.state(), SessionState::Play);
        assert_eq!(session.board().occupied_count(), 0);
    }

    #[test]
    fn test_level_up_changes_fall_speed() {
        let mut session = started(3);
        session.lines = 14;
        fill_row_except(&mut session.board, 19, &[9]);
        session.active = Some(ActivePiece::new(PieceKind::I, Rotation::North, 9, 17, 99));

        session.tick(1000, &InputSnapshot::idle());

        assert_eq!(session.lines(), 15);
        assert_eq!(session.level(), 2);
        assert_eq!(session.fall_interval_ms(), 800);
        assert_eq!(session.score(), 100);
        assert!(session
            .pending_events()
            .contains(&GameEvent::LevelUp { level: 2 }));
    }

    #[test]
    fn test_level_tracks_cumulative_lines() {
        let mut session = started(3);
        let table = session.config().level_fall_ms.clone();
        for k in 0..12u32 {
            assert_eq!(session.level(), (1 + k).min(8), "after {} lines", session.lines());
            assert_eq!(session.fall_interval_ms(), table[(session.level() - 1) as usize]);
            for _ in 0..15 {
                session.apply_cleared_lines(1);
            }
        }
    }

    #[test]
    fn test_input_is_forwarded_to_piece() {
        let mut session = started(3);
        session.active = Some(ActivePiece::new(PieceKind::T, Rotation::North, 4, 5, 99));

        let left = InputSnapshot::idle().with(GameInput::ShiftLeft);
        session.tick(16, &left);
        assert_eq!(session.active().map(|p| p.position()), Some((3, 5)));

        let rotate = InputSnapshot::idle().with(GameInput::RotateCw);
        session.tick(16, &rotate);
        assert_eq!(session.active().map(|p| p.rotation()), Some(Rotation::East));
    }

    #[test]
    fn test_scripted_rng_controls_spawns() {
        // O (index 0) then rotation index 0 (North), repeated.
        let rng = ScriptedRng::new(vec![0]);
        let mut session = GameSession::with_rng(GameConfig::default(), rng).unwrap();
        session.start();
        let piece = session.active().unwrap();
        assert_eq!(piece.kind(), PieceKind::O);
        assert_eq!(piece.rotation(), Rotation::North);
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut session = started(8);
        session.board.set(2, 19, Block::new(PieceKind::S, 42));

        let snap = session.snapshot();
        assert_eq!(snap.state, SessionState::Play);
        assert_eq!(snap.board[19][2], Some(Block::new(PieceKind::S, 42)));
        assert_eq!(snap.active.map(|a| a.id), session.active().map(|p| p.id()));
        assert_eq!(snap.score_board(), session.score_board());
        assert_eq!(snap.fall_ms, 1000);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig {
            level_cost: 0,
            ..GameConfig::default()
        };
        assert!(GameSession::with_config(config).is_err());
    }
}
