//! Game settings
//!
//! All tunables the simulation reads. Defaults match [`crate::consts`];
//! the web build may override them from a JSON document embedded in the page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Pixel side of one shape cell
    pub block_size: f32,

    // === Timing ===
    /// Ticks per second the rotation timer assumes
    pub frame_rate: u32,
    /// Seconds between player shape changes
    pub shape_rotation_secs: u32,

    // === Player ===
    pub player_speed: f32,

    // === Enemies ===
    pub enemy_count: usize,
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    pub enemy_spawn_y: f32,

    // === Scoring ===
    pub match_score: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            block_size: BLOCK_SIZE,

            frame_rate: FRAME_RATE,
            shape_rotation_secs: SHAPE_ROTATION_SECS,

            player_speed: PLAYER_SPEED,

            enemy_count: ENEMY_COUNT,
            enemy_speed_min: ENEMY_SPEED_MIN,
            enemy_speed_max: ENEMY_SPEED_MAX,
            enemy_spawn_y: ENEMY_SPAWN_Y,

            match_score: MATCH_SCORE,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        // JSON numbers beyond f32 range deserialize to infinity
        for (name, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("block_size", self.block_size),
            ("player_speed", self.player_speed),
            ("enemy_speed_min", self.enemy_speed_min),
            ("enemy_speed_max", self.enemy_speed_max),
            ("enemy_spawn_y", self.enemy_spawn_y),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{} must be finite", name)));
            }
        }
        if self.block_size <= 0.0 {
            return Err(ConfigError::Invalid("block_size must be positive".into()));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid("frame_rate must be positive".into()));
        }
        if self.frame_rate.checked_mul(self.shape_rotation_secs).is_none() {
            return Err(ConfigError::Invalid(format!(
                "shape rotation of {}s at {} fps overflows the tick counter",
                self.shape_rotation_secs, self.frame_rate
            )));
        }
        if self.canvas_width <= self.max_x_span() {
            return Err(ConfigError::Invalid(format!(
                "canvas_width {} leaves no room for a {}-block shape",
                self.canvas_width, SHAPE_SPAN_BLOCKS
            )));
        }
        if self.canvas_height <= 0.0 {
            return Err(ConfigError::Invalid("canvas_height must be positive".into()));
        }
        if self.enemy_count == 0 {
            return Err(ConfigError::Invalid("enemy_count must be at least 1".into()));
        }
        if !(self.enemy_speed_min > 0.0 && self.enemy_speed_min < self.enemy_speed_max) {
            return Err(ConfigError::Invalid(format!(
                "enemy speed range [{}, {}) is empty or not positive",
                self.enemy_speed_min, self.enemy_speed_max
            )));
        }
        Ok(())
    }

    /// Horizontal room taken by the widest shape
    fn max_x_span(&self) -> f32 {
        self.block_size * SHAPE_SPAN_BLOCKS
    }

    /// Rightmost x an entity may occupy
    pub fn max_x(&self) -> f32 {
        self.canvas_width - self.max_x_span()
    }

    /// Player ticks between shape changes
    pub fn rotation_ticks(&self) -> u32 {
        self.frame_rate.saturating_mul(self.shape_rotation_secs)
    }

    /// Load settings from the page's `data-settings` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute("data-settings"));

        match json.as_deref().map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings from page");
                settings
            }
            Some(Err(e)) => {
                log::error!("Ignoring page settings: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
