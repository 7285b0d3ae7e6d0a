//! Game state
//!
//! Everything a round owns. Rebuilt wholesale on every reset.

use rand::Rng;
use serde::Serialize;

use super::entity::Entity;
use crate::settings::Settings;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Terminal condition hit this tick; the round resets before the next one
    GameOver(GameOverCause),
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameOverCause {
    /// The player touched an enemy of a different shape
    ShapeMismatch,
    /// Every enemy was eaten
    FieldCleared,
}

/// Complete state of one round
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub player: Entity,
    /// Falling enemies; order is irrelevant, membership matters
    pub enemies: Vec<Entity>,
    /// Never decreases within a round
    pub score: u32,
    pub phase: GamePhase,
    /// Ticks played this round
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh round: new player, a full enemy field, zero score
    pub fn new(settings: &Settings, rng: &mut impl Rng) -> Self {
        let player = Entity::player(settings, rng);
        let enemies = (0..settings.enemy_count)
            .map(|_| Entity::enemy(settings, rng))
            .collect();

        Self {
            player,
            enemies,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
        }
    }

    /// Replace this round with a fresh one
    pub fn reset(&mut self, settings: &Settings, rng: &mut impl Rng) {
        *self = Self::new(settings, rng);
    }
}
