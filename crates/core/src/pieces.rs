//! Pieces module - piece shapes and legal spawn rotations
//!
//! Offsets are (dx, dy) from the piece anchor in board coordinates (y grows
//! downward). Each rotation is the previous one turned 90° clockwise about the
//! anchor: (dx, dy) -> (-dy, dx). There are no wall kicks; whether a rotation
//! is possible during play depends only on collision.

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the anchor
pub type PieceShape = [CellOffset; 4];

/// Get the shape (cell offsets) for a piece kind and rotation
pub fn offsets(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::O => o_shape(rotation),
        PieceKind::I => i_shape(rotation),
        PieceKind::S => s_shape(rotation),
        PieceKind::Z => z_shape(rotation),
        PieceKind::L => l_shape(rotation),
        PieceKind::J => j_shape(rotation),
        PieceKind::T => t_shape(rotation),
    }
}

/// I piece shapes
fn i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        // N: vertical, one cell above the anchor and two below
        Rotation::North => [(0, 0), (0, -1), (0, 1), (0, 2)],
        Rotation::East => [(0, 0), (1, 0), (-1, 0), (-2, 0)],
        // S: two cells above the anchor; leaves the board at spawn
        Rotation::South => [(0, 0), (0, 1), (0, -1), (0, -2)],
        Rotation::West => [(0, 0), (-1, 0), (1, 0), (2, 0)],
    }
}

/// O piece shapes
///
/// The anchor is a corner of the square, so turning it moves the square.
fn o_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (-1, 1), (-1, 0)],
        Rotation::East => [(0, 0), (-1, 0), (-1, -1), (0, -1)],
        Rotation::South => [(0, 0), (0, -1), (1, -1), (1, 0)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (0, 1)],
    }
}

/// T piece shapes
fn t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (-1, 0), (1, 0), (0, 1)],
        Rotation::East => [(0, 0), (0, -1), (0, 1), (-1, 0)],
        Rotation::South => [(0, 0), (1, 0), (-1, 0), (0, -1)],
        Rotation::West => [(0, 0), (0, 1), (0, -1), (1, 0)],
    }
}

/// S piece shapes
fn s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (0, 1), (-1, 1)],
        Rotation::East => [(0, 0), (0, 1), (-1, 0), (-1, -1)],
        Rotation::South => [(0, 0), (-1, 0), (0, -1), (1, -1)],
        Rotation::West => [(0, 0), (0, -1), (1, 0), (1, 1)],
    }
}

/// Z piece shapes
fn z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (-1, 0), (0, 1), (1, 1)],
        Rotation::East => [(0, 0), (0, -1), (-1, 0), (-1, 1)],
        Rotation::South => [(0, 0), (1, 0), (0, -1), (-1, -1)],
        Rotation::West => [(0, 0), (0, 1), (1, 0), (1, -1)],
    }
}

/// J piece shapes
fn j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (-1, 0), (1, 0), (1, 1)],
        Rotation::East => [(0, 0), (0, -1), (0, 1), (-1, 1)],
        Rotation::South => [(0, 0), (1, 0), (-1, 0), (-1, -1)],
        Rotation::West => [(0, 0), (0, 1), (0, -1), (1, -1)],
    }
}

/// L piece shapes
fn l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (-1, 0), (1, 0), (-1, 1)],
        Rotation::East => [(0, 0), (0, -1), (0, 1), (-1, -1)],
        Rotation::South => [(0, 0), (1, 0), (-1, 0), (1, -1)],
        Rotation::West => [(0, 0), (0, 1), (0, -1), (1, 1)],
    }
}

const I_SPAWN_ROTATIONS: [Rotation; 3] = [Rotation::North, Rotation::East, Rotation::West];

/// Rotations a freshly spawned piece may start in.
///
/// `I` never spawns in `South`, which would put a cell above the top row.
pub fn spawn_rotations(kind: PieceKind) -> &'static [Rotation] {
    match kind {
        PieceKind::I => &I_SPAWN_ROTATIONS,
        _ => &Rotation::ALL,
    }
}
