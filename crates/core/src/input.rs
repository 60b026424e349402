//! Input latch - turns press/release events into per-tick snapshots
//!
//! Held inputs stay active until released. Edge inputs fire once per press:
//! the edge is latched on press and consumed by the next [`InputState::snapshot`],
//! so a press and release inside the same tick still registers.

use crate::types::{GameInput, InputSnapshot};

#[derive(Debug, Clone, Default)]
pub struct InputState {
    left_held: bool,
    right_held: bool,
    soft_drop_held: bool,
    rotate_held: bool,
    rotate_edge: bool,
    pause_edge: bool,
    start_edge: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, input: GameInput) {
        match input {
            GameInput::ShiftLeft => self.left_held = true,
            GameInput::ShiftRight => self.right_held = true,
            GameInput::SoftDrop => self.soft_drop_held = true,
            GameInput::RotateCw => {
                // Auto-repeat from a held key is not a new press.
                if !self.rotate_held {
                    self.rotate_edge = true;
                }
                self.rotate_held = true;
            }
            GameInput::PauseToggle => self.pause_edge = true,
            GameInput::StartOrRestart => self.start_edge = true,
        }
    }

    pub fn release(&mut self, input: GameInput) {
        match input {
            GameInput::ShiftLeft => self.left_held = false,
            GameInput::ShiftRight => self.right_held = false,
            GameInput::SoftDrop => self.soft_drop_held = false,
            GameInput::RotateCw => self.rotate_held = false,
            GameInput::PauseToggle | GameInput::StartOrRestart => {}
        }
    }

    /// Release everything and drop pending edges
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Input for the next tick; consumes pending edges
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            shift_left: self.left_held,
            shift_right: self.right_held,
            rotate_cw: self.rotate_edge,
            soft_drop: self.soft_drop_held,
            pause_toggle: self.pause_edge,
            start_or_restart: self.start_edge,
        };
        self.rotate_edge = false;
        self.pause_edge = false;
        self.start_edge = false;
        snapshot
    }
}
