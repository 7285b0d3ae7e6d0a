//! Frame driver
//!
//! Owns the round state, the keyboard map, the RNG and the settings. Each
//! display refresh calls [`Game::frame`] once.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::GAME_OVER_MESSAGE;
use crate::platform::Surface;
use crate::renderer;
use crate::settings::Settings;
use crate::sim::{GameOverCause, GameState, InputState, TickOutcome, tick};

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Playing,
    /// The round ended and has already been reset
    RoundOver { cause: GameOverCause, score: u32 },
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    input: InputState,
    settings: Settings,
    rng: Pcg32,
    seed: u64,
    /// Rounds finished since start
    rounds: u32,
    best_score: u32,
}

impl Game {
    pub fn new(seed: u64, settings: Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&settings, &mut rng);
        log::info!("Game initialized with seed: {}", seed);

        Self {
            state,
            input: InputState::new(),
            settings,
            rng,
            seed,
            rounds: 0,
            best_score: 0,
        }
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Tick, draw, and on game over alert the user then start a new round
    ///
    /// The tick completes before drawing, so an enemy eaten this frame is
    /// already gone from the painted field.
    pub fn frame(&mut self, surface: &mut impl Surface) -> FrameOutcome {
        let outcome = tick(&mut self.state, &self.input, &self.settings, &mut self.rng);
        renderer::render(surface, &self.state, &self.settings);

        match outcome {
            TickOutcome::Playing => FrameOutcome::Playing,
            TickOutcome::GameOver(cause) => {
                let score = self.state.score;
                log::info!(
                    "Game over ({:?}) with score {} after {} ticks",
                    cause,
                    score,
                    self.state.time_ticks
                );
                surface.alert(GAME_OVER_MESSAGE);

                self.rounds += 1;
                self.best_score = self.best_score.max(score);
                self.restart();
                FrameOutcome::RoundOver { cause, score }
            }
        }
    }

    /// Start a fresh round; the RNG stream carries on
    pub fn restart(&mut self) {
        self.state.reset(&self.settings, &mut self.rng);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for scripted setups
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Highest score of any finished round (kept in memory only)
    pub fn best_score(&self) -> u32 {
        self.best_score
    }
}
