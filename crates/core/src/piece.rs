//! Active piece - the falling piece and its per-piece timers
//!
//! A piece is `Falling` for its whole life and ends either `Locked` (its cells
//! were committed to the board) or `Discarded` (dropped without effect). Every
//! move is tentative: the candidate placement is checked against the board
//! first and only then committed, so a rejected move leaves no trace.

use crate::board::Board;
use crate::pieces::{offsets, PieceShape};
use crate::types::{Block, InputSnapshot, PieceKind, Rotation};

/// Lifecycle of an [`ActivePiece`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceStatus {
    Falling,
    Locked,
    Discarded,
}

/// Result of advancing a piece by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// Still falling (it may or may not have moved this tick)
    Falling,
    /// Could not move down; cells were written into the board
    Locked,
    /// Does not fit where it stands (blocked spawn); discarded, nothing written
    Obstructed,
}

/// Timing parameters for one tick, all in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Gravity interval for the current level
    pub fall_ms: u32,
    /// Gravity interval while soft drop is held
    pub soft_drop_ms: u32,
    /// Minimum gap between two horizontal shifts
    pub shift_repeat_ms: u32,
}

/// Active falling piece
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePiece {
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
    id: u32,
    status: PieceStatus,
    fall_elapsed_ms: u32,
    shift_elapsed_ms: u32,
}

impl ActivePiece {
    pub fn new(kind: PieceKind, rotation: Rotation, x: i8, y: i8, id: u32) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
            id,
            status: PieceStatus::Falling,
            fall_elapsed_ms: 0,
            // A new piece may shift on its first tick.
            shift_elapsed_ms: u32::MAX,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Anchor position (x, y)
    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Serial id, shared by every block this piece commits
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn status(&self) -> PieceStatus {
        self.status
    }

    pub fn is_falling(&self) -> bool {
        self.status == PieceStatus::Falling
    }

    /// Get the shape (cell offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        offsets(self.kind, self.rotation)
    }

    /// Absolute board cells covered by the piece
    pub fn cells(&self) -> [(i8, i8); 4] {
        Self::cells_at(self.shape(), self.x, self.y)
    }

    fn cells_at(shape: PieceShape, x: i8, y: i8) -> [(i8, i8); 4] {
        shape.map(|(dx, dy)| (x + dx, y + dy))
    }

    fn placement_fits(board: &Board, shape: PieceShape, x: i8, y: i8) -> bool {
        Self::cells_at(shape, x, y)
            .iter()
            .all(|&(cx, cy)| board.is_free(cx, cy))
    }

    /// Check if every cell is inside the board and empty
    pub fn fits(&self, board: &Board) -> bool {
        Self::placement_fits(board, self.shape(), self.x, self.y)
    }

    /// Check if the piece is resting on something
    pub fn is_grounded(&self, board: &Board) -> bool {
        !Self::placement_fits(board, self.shape(), self.x, self.y + 1)
    }

    fn try_move(&mut self, board: &Board, dx: i8, dy: i8) -> bool {
        if !self.is_falling() {
            return false;
        }
        let (nx, ny) = (self.x + dx, self.y + dy);
        if !Self::placement_fits(board, self.shape(), nx, ny) {
            return false;
        }
        self.x = nx;
        self.y = ny;
        true
    }

    /// Shift horizontally by `dx`; rejected shifts leave the piece unchanged
    pub fn try_shift(&mut self, board: &Board, dx: i8) -> bool {
        self.try_move(board, dx, 0)
    }

    /// Rotate 90° clockwise about the anchor, without wall kicks
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        if !self.is_falling() {
            return false;
        }
        let next = self.rotation.rotate_cw();
        if !Self::placement_fits(board, offsets(self.kind, next), self.x, self.y) {
            return false;
        }
        self.rotation = next;
        true
    }

    /// Apply shift and rotate input for one tick.
    ///
    /// Both shift directions share one repeat accumulator, left is evaluated
    /// first, and any shift attempt (even a blocked one) restarts the gap.
    pub fn handle_input(
        &mut self,
        board: &Board,
        elapsed_ms: u32,
        input: &InputSnapshot,
        shift_repeat_ms: u32,
    ) {
        if !self.is_falling() {
            return;
        }

        self.shift_elapsed_ms = self.shift_elapsed_ms.saturating_add(elapsed_ms);

        if input.shift_left && self.shift_elapsed_ms >= shift_repeat_ms {
            self.try_shift(board, -1);
            self.shift_elapsed_ms = 0;
        }
        if input.shift_right && self.shift_elapsed_ms >= shift_repeat_ms {
            self.try_shift(board, 1);
            self.shift_elapsed_ms = 0;
        }

        if input.rotate_cw {
            self.try_rotate(board);
        }
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// When the accumulator reaches the active interval the piece tries to
    /// drop one row; if it cannot, it locks into `board`.
    pub fn tick(
        &mut self,
        board: &mut Board,
        elapsed_ms: u32,
        soft_drop: bool,
        timing: &Timing,
    ) -> TickOutcome {
        match self.status {
            PieceStatus::Falling => {}
            PieceStatus::Locked => return TickOutcome::Locked,
            PieceStatus::Discarded => return TickOutcome::Obstructed,
        }

        let interval = if soft_drop {
            timing.soft_drop_ms
        } else {
            timing.fall_ms
        };

        self.fall_elapsed_ms = self.fall_elapsed_ms.saturating_add(elapsed_ms);
        if self.fall_elapsed_ms < interval {
            return TickOutcome::Falling;
        }
        self.fall_elapsed_ms = 0;

        if !self.fits(board) {
            self.discard();
            return TickOutcome::Obstructed;
        }
        if self.try_move(board, 0, 1) {
            return TickOutcome::Falling;
        }

        self.lock(board);
        TickOutcome::Locked
    }

    /// One full simulation step: input first, then gravity.
    ///
    /// A piece that does not fit where it stands is discarded before any
    /// input is applied.
    pub fn step(
        &mut self,
        board: &mut Board,
        elapsed_ms: u32,
        input: &InputSnapshot,
        timing: &Timing,
    ) -> TickOutcome {
        if self.is_falling() && !self.fits(board) {
            self.discard();
            return TickOutcome::Obstructed;
        }

        self.handle_input(board, elapsed_ms, input, timing.shift_repeat_ms);
        self.tick(board, elapsed_ms, input.soft_drop, timing)
    }

    /// Commit cells into the board and mark the piece locked
    fn lock(&mut self, board: &mut Board) {
        let block = Block::new(self.kind, self.id);
        for (x, y) in self.cells() {
            board.set(x, y, block);
        }
        self.status = PieceStatus::Locked;
        log::trace!(
            "piece {} ({}) locked at ({}, {}) {}",
            self.id,
            self.kind.as_str(),
            self.x,
            self.y,
            self.rotation.as_str()
        );
    }

    /// Drop the piece without touching the board
    pub fn discard(&mut self) {
        if self.is_falling() {
            self.status = PieceStatus::Discarded;
        }
    }
}
