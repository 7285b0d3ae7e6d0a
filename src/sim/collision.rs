//! Collision detection between the player and enemies
//!
//! Every player cell is compared with every cell of every enemy. Two cells
//! touch when they are less than one block apart on both axes. A touching
//! enemy with the player's exact shape is eaten; any other touch ends the
//! round.

use glam::Vec2;

use super::entity::Entity;

/// Result of one collision pass
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Enemies still on the field (input order preserved)
    pub remaining: Vec<Entity>,
    /// Number of same-shape enemies eaten
    pub matched: u32,
    /// Score to award for the eaten enemies
    pub score_delta: u32,
    /// A different-shape enemy touched the player
    pub game_over: bool,
}

/// Approximate AABB touch test between two cell origins
#[inline]
pub fn cells_touch(a: Vec2, b: Vec2, block_size: f32) -> bool {
    (a.x - b.x).abs() < block_size && (a.y - b.y).abs() < block_size
}

/// Whether any cell of `a` touches any cell of `b`
pub fn entities_touch(a: &Entity, b: &Entity, block_size: f32) -> bool {
    a.cell_positions(block_size)
        .any(|pa| b.cell_positions(block_size).any(|pb| cells_touch(pa, pb, block_size)))
}

/// Resolve all player/enemy contacts for one tick.
///
/// Each eaten enemy is worth `match_score` once. Scanning stops at the
/// first mismatched contact; what was eaten before it no longer matters
/// because the round resets.
pub fn check_collision(
    player: &Entity,
    enemies: &[Entity],
    block_size: f32,
    match_score: u32,
) -> CollisionResult {
    let mut remaining = Vec::with_capacity(enemies.len());
    let mut matched = 0;

    for (i, enemy) in enemies.iter().enumerate() {
        if !entities_touch(player, enemy, block_size) {
            remaining.push(enemy.clone());
            continue;
        }

        if player.shape == enemy.shape {
            matched += 1;
            log::debug!(
                "Matched {} enemy at ({:.1}, {:.1})",
                enemy.shape.name,
                enemy.pos.x,
                enemy.pos.y
            );
        } else {
            log::debug!(
                "Player {} hit {} enemy",
                player.shape.name,
                enemy.shape.name
            );
            remaining.extend(enemies[i..].iter().cloned());
            return CollisionResult {
                remaining,
                matched,
                score_delta: matched * match_score,
                game_over: true,
            };
        }
    }

    CollisionResult {
        remaining,
        matched,
        score_delta: matched * match_score,
        game_over: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::catalog::SHAPES;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BLOCK: f32 = 20.0;

    fn setup() -> (Entity, Entity) {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let player = Entity::player(&settings, &mut rng);
        let enemy = Entity::enemy(&settings, &mut rng);
        (player, enemy)
    }

    #[test]
    fn test_cells_touch_strictly_inside_one_block() {
        let a = Vec2::new(100.0, 100.0);
        assert!(cells_touch(a, Vec2::new(119.9, 80.1), BLOCK));
        assert!(cells_touch(a, a, BLOCK));
        assert!(!cells_touch(a, Vec2::new(120.0, 100.0), BLOCK));
        assert!(!cells_touch(a, Vec2::new(100.0, 80.0), BLOCK));
    }

    #[test]
    fn test_same_shape_contact_eats_enemy() {
        let (mut player, mut enemy) = setup();
        player.shape = SHAPES[1];
        enemy.shape = SHAPES[1];
        enemy.pos = player.pos + Vec2::new(5.0, -10.0);
        let player_before = player.clone();

        let result = check_collision(&player, &[enemy], BLOCK, 10);
        assert!(!result.game_over);
        assert!(result.remaining.is_empty());
        assert_eq!(result.matched, 1);
        assert_eq!(result.score_delta, 10);
        assert_eq!(player.pos, player_before.pos);
        assert_eq!(player.shape, player_before.shape);
    }

    #[test]
    fn test_different_shape_contact_is_game_over() {
        let (mut player, mut enemy) = setup();
        player.shape = SHAPES[0];
        enemy.shape = SHAPES[2];
        enemy.pos = player.pos;

        let result = check_collision(&player, &[enemy], BLOCK, 10);
        assert!(result.game_over);
        assert_eq!(result.score_delta, 0);
    }

    #[test]
    fn test_distant_enemy_untouched() {
        let (mut player, mut enemy) = setup();
        player.shape = SHAPES[3];
        enemy.shape = SHAPES[4];
        enemy.pos = Vec2::new(player.pos.x, player.pos.y - 2.0 * BLOCK);

        let result = check_collision(&player, std::slice::from_ref(&enemy), BLOCK, 10);
        assert!(!result.game_over);
        assert_eq!(result.remaining.len(), 1);
        assert_eq!(result.remaining[0].pos, enemy.pos);
    }

    #[test]
    fn test_near_miss_registers_by_offset() {
        // Player I at y, enemy I 19px above: cells overlap vertically by 1px
        let (mut player, mut enemy) = setup();
        player.shape = SHAPES[0];
        enemy.shape = SHAPES[3];
        enemy.pos = player.pos - Vec2::new(0.0, 19.0);
        assert!(entities_touch(&player, &enemy, BLOCK));
    }

    #[test]
    fn test_multiple_matches_in_one_pass() {
        let (mut player, enemy) = setup();
        player.shape = SHAPES[2];

        let mut near = enemy.clone();
        near.shape = SHAPES[2];
        near.pos = player.pos;

        let mut far = enemy.clone();
        far.pos = Vec2::new(0.0, -80.0);

        let mut also_near = near.clone();
        also_near.pos = player.pos + Vec2::new(10.0, 0.0);

        let result = check_collision(&player, &[near, far, also_near], BLOCK, 10);
        assert!(!result.game_over);
        assert_eq!(result.matched, 2);
        assert_eq!(result.score_delta, 20);
        assert_eq!(result.remaining.len(), 1);
        assert_eq!(result.remaining[0].pos, Vec2::new(0.0, -80.0));
    }

    #[test]
    fn test_mismatch_stops_scan() {
        let (mut player, enemy) = setup();
        player.shape = SHAPES[1];

        let mut bad = enemy.clone();
        bad.shape = SHAPES[0];
        bad.pos = player.pos;

        let mut good = enemy.clone();
        good.shape = SHAPES[1];
        good.pos = player.pos;

        let result = check_collision(&player, &[bad, good], BLOCK, 10);
        assert!(result.game_over);
        assert_eq!(result.matched, 0);
        assert_eq!(result.remaining.len(), 2);
    }
}
