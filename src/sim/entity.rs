//! Player and enemy blocks
//!
//! One [`Entity`] type with a [`EntityKind`] discriminant: both kinds share
//! position, shape, color, speed and drawing; only movement differs.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::catalog::{
    Color, PLAYER_COLOR, Shape, pick_other_shape, pick_random_color, pick_random_shape,
};
use super::input::InputState;
use crate::consts::{PLAYER_BOTTOM_OFFSET, PLAYER_CENTER_OFFSET};
use crate::platform::Surface;
use crate::settings::Settings;

/// Variant-specific state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    /// Keyboard-driven; `timer` counts ticks toward the next shape change
    Player { timer: u32 },
    /// Falls at constant speed and loops back above the field
    Enemy,
}

/// A positioned, colored block
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    /// Top-left of the shape's (0, 0) cell, in pixels
    pub pos: Vec2,
    pub shape: Shape,
    pub color: Color,
    /// Pixels per tick (horizontal for the player, downward for enemies)
    pub speed: f32,
    pub kind: EntityKind,
}

impl Entity {
    /// Player at the bottom center with a random shape
    pub fn player(settings: &Settings, rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(
                settings.canvas_width / 2.0 - PLAYER_CENTER_OFFSET,
                settings.canvas_height - PLAYER_BOTTOM_OFFSET,
            ),
            shape: pick_random_shape(rng),
            color: PLAYER_COLOR,
            speed: settings.player_speed,
            kind: EntityKind::Player { timer: 0 },
        }
    }

    /// Enemy above the field at a random column, shape, color and speed
    pub fn enemy(settings: &Settings, rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(random_x(settings, rng), settings.enemy_spawn_y),
            shape: pick_random_shape(rng),
            color: pick_random_color(rng),
            speed: random_speed(settings, rng),
            kind: EntityKind::Enemy,
        }
    }

    #[cfg(test)]
    pub fn is_player(&self) -> bool {
        matches!(self.kind, EntityKind::Player { .. })
    }

    /// Advance one tick. Enemies ignore `input`.
    pub fn advance(&mut self, input: &InputState, settings: &Settings, rng: &mut impl Rng) {
        match self.kind {
            EntityKind::Player { .. } => self.move_player(input, settings, rng),
            EntityKind::Enemy => self.fall(settings, rng),
        }
    }

    /// Steer, then count toward the periodic shape change
    fn move_player(&mut self, input: &InputState, settings: &Settings, rng: &mut impl Rng) {
        let EntityKind::Player { timer } = &mut self.kind else {
            return;
        };

        if input.left() && self.pos.x > 0.0 {
            self.pos.x = (self.pos.x - self.speed).max(0.0);
        }
        if input.right() && self.pos.x < settings.max_x() {
            self.pos.x = (self.pos.x + self.speed).min(settings.max_x());
        }

        *timer += 1;
        if *timer >= settings.rotation_ticks() {
            *timer = 0;
            let next = pick_other_shape(self.shape, rng);
            log::debug!("Player shape {} -> {}", self.shape.name, next.name);
            self.shape = next;
        }
    }

    /// Drop by `speed`; past the bottom edge, respawn above the field
    fn fall(&mut self, settings: &Settings, rng: &mut impl Rng) {
        self.pos.y += self.speed;
        if self.pos.y > settings.canvas_height {
            self.pos = Vec2::new(random_x(settings, rng), settings.enemy_spawn_y);
            self.shape = pick_random_shape(rng);
            self.speed = random_speed(settings, rng);
            log::trace!("Enemy respawned at x={:.1} as {}", self.pos.x, self.shape.name);
        }
    }

    /// Pixel position of every cell's top-left corner
    pub fn cell_positions(&self, block_size: f32) -> impl Iterator<Item = Vec2> + '_ {
        self.shape
            .cells
            .iter()
            .map(move |c| self.pos + c.as_vec2() * block_size)
    }

    /// One filled square per cell
    pub fn draw(&self, surface: &mut impl Surface, block_size: f32) {
        for cell in self.cell_positions(block_size) {
            surface.fill_rect(cell.x, cell.y, block_size, block_size, self.color);
        }
    }
}

fn random_x(settings: &Settings, rng: &mut impl Rng) -> f32 {
    rng.random_range(0.0..=settings.max_x())
}

fn random_speed(settings: &Settings, rng: &mut impl Rng) -> f32 {
    rng.random_range(settings.enemy_speed_min..settings.enemy_speed_max)
}
