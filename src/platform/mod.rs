//! Platform abstraction layer
//!
//! The drawing surface the game renders onto. The browser canvas and the
//! headless recorder both implement [`Surface`].

use crate::sim::Color;

/// Drawing surface with fill primitives and a blocking notification
pub trait Surface {
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Draw text with its baseline starting at (x, y)
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color);

    /// Show a message and block until the user dismisses it
    fn alert(&mut self, message: &str);
}
