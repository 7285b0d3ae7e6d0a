//! Frame rendering
//!
//! Paints the background, every entity and the score overlay onto a
//! [`Surface`]. No game logic happens here.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use crate::consts::{SCORE_FONT, SCORE_POS};
use crate::platform::Surface;
use crate::settings::Settings;
use crate::sim::{Color, GameState};

const BACKGROUND: Color = Color::Yellow;
const SCORE_COLOR: Color = Color::Black;

/// Render one complete frame
pub fn render(surface: &mut impl Surface, state: &GameState, settings: &Settings) {
    surface.fill_rect(
        0.0,
        0.0,
        settings.canvas_width,
        settings.canvas_height,
        BACKGROUND,
    );

    state.player.draw(surface, settings.block_size);
    for enemy in &state.enemies {
        enemy.draw(surface, settings.block_size);
    }

    draw_score(surface, state.score);
}

fn draw_score(surface: &mut impl Surface, score: u32) {
    let (x, y) = SCORE_POS;
    surface.fill_text(&format!("Score: {}", score), x, y, SCORE_FONT, SCORE_COLOR);
}
