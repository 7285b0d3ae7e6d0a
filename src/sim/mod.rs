//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform dependencies:
//! - One tick per display frame
//! - Randomness only through the caller's RNG
//! - Drawing only through the `Surface` trait

pub mod catalog;
pub mod collision;
pub mod entity;
pub mod input;
pub mod state;
pub mod tick;

pub use catalog::{
    Color, PALETTE, PLAYER_COLOR, SHAPES, Shape, pick_other_shape, pick_random_color,
    pick_random_shape,
};
pub use collision::{CollisionResult, cells_touch, check_collision, entities_touch};
pub use entity::{Entity, EntityKind};
pub use input::InputState;
pub use state::{GameOverCause, GamePhase, GameState};
pub use tick::{TickOutcome, tick};
