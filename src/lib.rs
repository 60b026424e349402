//! Falling-block puzzle engine (workspace facade crate).
//!
//! The gameplay rules live in `crates/core` and the shared data types in
//! `crates/types`; this package re-exports both as `tetris2d::{core,types}` and
//! adds the headless autoplay driver used by the `tetris2d` binary.

pub mod autoplay;

pub use tetris2d_core as core;
pub use tetris2d_types as types;
