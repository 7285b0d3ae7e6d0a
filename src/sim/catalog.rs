//! Shape catalog and color palette
//!
//! Five four-cell pieces and three enemy colors. Picking is uniform and
//! only consumes the caller's RNG.

use glam::IVec2;
use rand::Rng;
use serde::Serialize;

/// Cell offsets of one piece, in block units
pub type Cells = [IVec2; 4];

const I_CELLS: Cells = [
    IVec2::new(0, 0),
    IVec2::new(1, 0),
    IVec2::new(2, 0),
    IVec2::new(3, 0),
];
const O_CELLS: Cells = [
    IVec2::new(0, 0),
    IVec2::new(0, 1),
    IVec2::new(1, 0),
    IVec2::new(1, 1),
];
const T_CELLS: Cells = [
    IVec2::new(1, 0),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
    IVec2::new(2, 1),
];
const Z_CELLS: Cells = [
    IVec2::new(0, 0),
    IVec2::new(1, 0),
    IVec2::new(1, 1),
    IVec2::new(2, 1),
];
const S_CELLS: Cells = [
    IVec2::new(1, 0),
    IVec2::new(2, 0),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

/// A block shape: an ordered set of cell offsets.
///
/// Equality is structural over the offsets, so two shapes compare equal
/// exactly when they are the same catalog entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Shape {
    pub name: &'static str,
    pub cells: &'static Cells,
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Shape {}

/// The fixed shape catalog
pub const SHAPES: [Shape; 5] = [
    Shape { name: "I", cells: &I_CELLS },
    Shape { name: "O", cells: &O_CELLS },
    Shape { name: "T", cells: &T_CELLS },
    Shape { name: "Z", cells: &Z_CELLS },
    Shape { name: "S", cells: &S_CELLS },
];

/// Uniform pick over the whole catalog
pub fn pick_random_shape(rng: &mut impl Rng) -> Shape {
    SHAPES[rng.random_range(0..SHAPES.len())]
}

/// Uniform pick over every catalog entry except `current`
pub fn pick_other_shape(current: Shape, rng: &mut impl Rng) -> Shape {
    SHAPES
        .iter()
        .copied()
        .filter(|s| *s != current)
        .nth(rng.random_range(0..SHAPES.len() - 1))
        .unwrap_or(current)
}

/// Fill colors used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    /// Background
    Yellow,
    /// Score text
    Black,
}

impl Color {
    /// CSS color string for canvas fill styles
    pub fn css(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "rgb(255, 255, 0)",
            Color::Black => "black",
        }
    }
}

/// Enemy palette
pub const PALETTE: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

/// Fixed player color
pub const PLAYER_COLOR: Color = Color::Blue;

/// Uniform pick over the enemy palette
pub fn pick_random_color(rng: &mut impl Rng) -> Color {
    PALETTE[rng.random_range(0..PALETTE.len())]
}
