//! Piece spawner - uniform random pieces at a fixed anchor
//!
//! Each spawn draws the kind uniformly over all seven kinds, then the starting
//! rotation uniformly over that kind's legal spawn set. The spawner does not
//! check the board: a blocked spawn is detected by the piece's first step.

use crate::piece::ActivePiece;
use crate::pieces::spawn_rotations;
use crate::rng::{RandomSource, SimpleRng};
use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone)]
pub struct PieceSpawner<R = SimpleRng> {
    rng: R,
    anchor: (i8, i8),
    next_id: u32,
}

impl PieceSpawner<SimpleRng> {
    /// Spawner at the default anchor, seeded LCG
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed), (SPAWN_X, SPAWN_Y))
    }
}

impl<R: RandomSource> PieceSpawner<R> {
    pub fn with_rng(rng: R, anchor: (i8, i8)) -> Self {
        Self {
            rng,
            anchor,
            next_id: 1,
        }
    }

    pub fn anchor(&self) -> (i8, i8) {
        self.anchor
    }

    /// Id the next spawned piece will carry
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Create the next falling piece
    pub fn spawn(&mut self) -> ActivePiece {
        let kind = PieceKind::ALL[self.rng.next_below(PieceKind::ALL.len() as u32) as usize];
        let rotations = spawn_rotations(kind);
        let rotation = rotations[self.rng.next_below(rotations.len() as u32) as usize];

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let (x, y) = self.anchor;
        log::debug!(
            "spawned piece {} ({} {}) at ({}, {})",
            id,
            kind.as_str(),
            rotation.as_str(),
            x,
            y
        );
        ActivePiece::new(kind, rotation, x, y, id)
    }
}
