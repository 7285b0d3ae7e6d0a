//! Keyboard state read by the simulation
//!
//! Written by key-down/key-up callbacks, read once per tick. Last writer wins.

use std::collections::HashMap;

use crate::consts::{KEY_LEFT, KEY_RIGHT};

/// Pressed state per platform key identifier (e.g. `"ArrowLeft"`)
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.keys.insert(key.to_owned(), true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.insert(key.to_owned(), false);
    }

    /// Unknown keys read as released
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    pub fn left(&self) -> bool {
        self.is_pressed(KEY_LEFT)
    }

    pub fn right(&self) -> bool {
        self.is_pressed(KEY_RIGHT)
    }
}
