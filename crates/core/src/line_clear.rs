//! Line clearing - full-row removal, compaction, and top-row overflow
//!
//! A pass first checks the top row: any block there means the stack has
//! reached the spawn area, and the pass reports [`ClearOutcome::Overflow`]
//! without clearing anything. Otherwise full rows are removed with a
//! bottom-up two-pointer sweep that moves every surviving row down by the
//! number of removed rows beneath it.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::BOARD_HEIGHT;

/// Indices of removed rows, bottom to top, as they were before the pass
pub type ClearedRows = ArrayVec<u8, { BOARD_HEIGHT as usize }>;

/// Result of one clearing pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Blocks reached the top row; the board was left untouched
    Overflow,
    /// Pass completed; may be empty
    Cleared(ClearedRows),
}

impl ClearOutcome {
    /// Number of rows removed (0 on overflow)
    pub fn lines(&self) -> u32 {
        match self {
            ClearOutcome::Overflow => 0,
            ClearOutcome::Cleared(rows) => rows.len() as u32,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, ClearOutcome::Overflow)
    }
}

/// Remove every full row and compact the board
pub fn clear_full_lines(board: &mut Board) -> ClearOutcome {
    if board.row_has_blocks(0) {
        return ClearOutcome::Overflow;
    }

    let mut cleared = ClearedRows::new();
    let mut write_y = BOARD_HEIGHT as usize;

    // Scan from bottom to top
    for read_y in (0..BOARD_HEIGHT as usize).rev() {
        if board.is_row_full(read_y) {
            cleared.push(read_y as u8);
        } else {
            write_y -= 1;
            board.copy_row(read_y, write_y);
        }
    }

    // Rows above the last written one are vacated
    for y in 0..write_y {
        board.erase_row(y);
    }

    if !cleared.is_empty() {
        log::debug!("cleared {} row(s): {:?}", cleared.len(), cleared.as_slice());
    }
    ClearOutcome::Cleared(cleared)
}
