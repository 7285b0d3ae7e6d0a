//! Per-frame simulation tick
//!
//! Moves the player, drops the enemies, resolves contacts and checks for
//! the end of the round. Rendering happens elsewhere.

use rand::Rng;

use super::collision::check_collision;
use super::input::InputState;
use super::state::{GameOverCause, GamePhase, GameState};
use crate::settings::Settings;

/// What a tick produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Round continues
    Playing,
    /// Round ended this tick; the caller notifies the user and resets
    GameOver(GameOverCause),
}

/// Advance the game state by one tick
pub fn tick(
    state: &mut GameState,
    input: &InputState,
    settings: &Settings,
    rng: &mut impl Rng,
) -> TickOutcome {
    if let GamePhase::GameOver(cause) = state.phase {
        return TickOutcome::GameOver(cause);
    }

    state.time_ticks += 1;

    state.player.advance(input, settings, rng);
    for enemy in &mut state.enemies {
        enemy.advance(input, settings, rng);
    }

    let result = check_collision(
        &state.player,
        &state.enemies,
        settings.block_size,
        settings.match_score,
    );
    state.enemies = result.remaining;
    state.score += result.score_delta;

    let cause = if result.game_over {
        Some(GameOverCause::ShapeMismatch)
    } else if state.enemies.is_empty() {
        Some(GameOverCause::FieldCleared)
    } else {
        None
    };

    match cause {
        Some(cause) => {
            state.phase = GamePhase::GameOver(cause);
            TickOutcome::GameOver(cause)
        }
        None => TickOutcome::Playing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::SHAPES;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn quiet_state(rng: &mut Pcg32) -> (Settings, GameState) {
        let settings = Settings::default();
        let mut state = GameState::new(&settings, rng);
        // Park every enemy far above the player so nothing collides by accident
        for enemy in &mut state.enemies {
            enemy.pos = Vec2::new(0.0, -80.0);
            enemy.speed = 3.0;
        }
        (settings, state)
    }

    #[test]
    fn test_tick_moves_everything() {
        let mut rng = Pcg32::seed_from_u64(21);
        let (settings, mut state) = quiet_state(&mut rng);
        let mut input = InputState::new();
        input.key_down("ArrowRight");

        let outcome = tick(&mut state, &input, &settings, &mut rng);
        assert_eq!(outcome, TickOutcome::Playing);
        assert_eq!(state.player.pos.x, 315.0);
        assert!(state.enemies.iter().all(|e| e.pos.y == -77.0));
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_tick_match_scores() {
        let mut rng = Pcg32::seed_from_u64(22);
        let (settings, mut state) = quiet_state(&mut rng);
        state.player.shape = SHAPES[1];
        state.enemies[0].shape = SHAPES[1];
        // Lands on the player after one fall step
        state.enemies[0].pos = state.player.pos - Vec2::new(0.0, 3.0);

        let outcome = tick(&mut state, &InputState::new(), &settings, &mut rng);
        assert_eq!(outcome, TickOutcome::Playing);
        assert_eq!(state.score, 10);
        assert_eq!(state.enemies.len(), 7);
    }

    #[test]
    fn test_tick_mismatch_ends_round() {
        let mut rng = Pcg32::seed_from_u64(23);
        let (settings, mut state) = quiet_state(&mut rng);
        state.player.shape = SHAPES[0];
        state.enemies[3].shape = SHAPES[4];
        state.enemies[3].pos = state.player.pos - Vec2::new(0.0, 3.0);

        let outcome = tick(&mut state, &InputState::new(), &settings, &mut rng);
        assert_eq!(outcome, TickOutcome::GameOver(GameOverCause::ShapeMismatch));
        assert_eq!(state.phase, GamePhase::GameOver(GameOverCause::ShapeMismatch));
        assert_eq!(
            tick(&mut state, &InputState::new(), &settings, &mut rng),
            TickOutcome::GameOver(GameOverCause::ShapeMismatch)
        );

        state.reset(&settings, &mut rng);
        assert_eq!(state.score, 0);
        assert_eq!(state.enemies.len(), 8);
        assert_eq!(state.player.pos, Vec2::new(310.0, 520.0));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_eating_last_enemy_ends_round() {
        let mut rng = Pcg32::seed_from_u64(24);
        let (settings, mut state) = quiet_state(&mut rng);
        state.enemies.truncate(1);
        state.player.shape = SHAPES[2];
        state.enemies[0].shape = SHAPES[2];
        state.enemies[0].pos = state.player.pos - Vec2::new(0.0, 3.0);

        let outcome = tick(&mut state, &InputState::new(), &settings, &mut rng);
        assert_eq!(outcome, TickOutcome::GameOver(GameOverCause::FieldCleared));
        assert_eq!(state.score, 10);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_empty_field_ends_round() {
        let mut rng = Pcg32::seed_from_u64(25);
        let (settings, mut state) = quiet_state(&mut rng);
        state.enemies.clear();

        let outcome = tick(&mut state, &InputState::new(), &settings, &mut rng);
        assert_eq!(outcome, TickOutcome::GameOver(GameOverCause::FieldCleared));
    }

    #[test]
    fn test_fallen_enemies_loop_forever() {
        let mut rng = Pcg32::seed_from_u64(26);
        let (settings, mut state) = quiet_state(&mut rng);
        // Player parked below the field so no enemy can reach it
        state.player.pos.y = 10_000.0;

        let mut respawns = 0;
        for _ in 0..1000 {
            let before: Vec<f32> = state.enemies.iter().map(|e| e.pos.y).collect();
            let outcome = tick(&mut state, &InputState::new(), &settings, &mut rng);
            assert_eq!(outcome, TickOutcome::Playing);
            assert_eq!(state.enemies.len(), 8);
            respawns += state
                .enemies
                .iter()
                .zip(before)
                .filter(|(e, y)| e.pos.y < *y)
                .count();
        }
        assert!(respawns > 0);
    }

    #[test]
    fn test_determinism() {
        let settings = Settings::default();
        let mut rng1 = Pcg32::seed_from_u64(99999);
        let mut rng2 = Pcg32::seed_from_u64(99999);
        let mut state1 = GameState::new(&settings, &mut rng1);
        let mut state2 = GameState::new(&settings, &mut rng2);

        let mut input = InputState::new();
        for i in 0..240 {
            if i % 40 == 0 {
                input.key_down("ArrowLeft");
            } else if i % 40 == 20 {
                input.key_up("ArrowLeft");
            }
            let o1 = tick(&mut state1, &input, &settings, &mut rng1);
            let o2 = tick(&mut state2, &input, &settings, &mut rng2);
            assert_eq!(o1, o2);
            if o1 != TickOutcome::Playing {
                state1.reset(&settings, &mut rng1);
                state2.reset(&settings, &mut rng2);
            }
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.player.pos, state2.player.pos);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
    }
}
