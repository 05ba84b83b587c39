/// Per-frame game logic: input-driven movement, firing, and the simulation
/// step that moves every entity and drops the ones that are finished.
///
/// Every function mutates the `GameState` it is given in place; time comes
/// in explicitly (`dt` in seconds, `now_ms` from the host clock) so callers
/// control determinism.

use glam::Vec2;
use log::debug;

use crate::config::Tuning;
use crate::entities::{Bullet, BulletDirection, GameState, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::input::InputSnapshot;

// ── Input-driven state transitions ───────────────────────────────────────────

/// Move the player from the held keys and fire if allowed.  Bounds are not
/// applied here; collision checking clamps the player afterwards.
pub fn handle_input(
    state: &mut GameState,
    input: &InputSnapshot,
    tuning: &Tuning,
    dt: f32,
    now_ms: u64,
) {
    let step = tuning.player_speed * dt;
    let pos = &mut state.player.body.pos;

    if input.down {
        pos.y += step;
    }
    if input.up {
        pos.y -= step;
    }
    if input.left {
        pos.x -= step;
    }
    if input.right {
        pos.x += step;
    }

    if input.fire {
        player_shoot(state, tuning, now_ms);
    }
}

/// Fire a three-way volley from the player's centre.  Returns whether the
/// volley went out: never during game over, and only once strictly more
/// than `fire_cooldown_ms` has passed since the previous one.
pub fn player_shoot(state: &mut GameState, tuning: &Tuning, now_ms: u64) -> bool {
    if state.is_game_over() || now_ms.saturating_sub(state.last_fire_ms) <= tuning.fire_cooldown_ms
    {
        return false;
    }

    let body = &state.player.body;
    let origin = body.pos + body.size() / 2.0;
    for direction in [
        BulletDirection::Forward,
        BulletDirection::Up,
        BulletDirection::Down,
    ] {
        state.bullets.push(Bullet::new(origin, direction));
    }
    state.last_fire_ms = now_ms;
    debug!("volley from ({:.0}, {:.0})", origin.x, origin.y);
    true
}

// ── Simulation step ──────────────────────────────────────────────────────────

fn bullet_velocity(direction: BulletDirection, speed: f32) -> Vec2 {
    match direction {
        BulletDirection::Up => Vec2::new(0.0, -speed),
        BulletDirection::Down => Vec2::new(0.0, speed),
        BulletDirection::Forward => Vec2::new(speed, 0.0),
    }
}

/// Bullets only leave through the top, bottom, or right edge.
fn bullet_off_screen(pos: Vec2) -> bool {
    pos.y < 0.0 || pos.y > CANVAS_HEIGHT || pos.x > CANVAS_WIDTH
}

/// Advance every entity by `dt` seconds (negative deltas count as zero).
///
/// Order: player animation, bullets, enemies, explosions.  Removal keeps the
/// survivors of each collection in spawn order.
pub fn update_entities(state: &mut GameState, tuning: &Tuning, dt: f32) {
    let dt = dt.max(0.0);

    state.player.body.sprite.advance(dt);

    state.bullets.retain_mut(|bullet| {
        bullet.body.pos += bullet_velocity(bullet.direction, tuning.bullet_speed) * dt;
        !bullet_off_screen(bullet.body.pos)
    });

    state.enemies.retain_mut(|enemy| {
        enemy.body.pos.x -= tuning.enemy_speed * dt;
        enemy.body.sprite.advance(dt);
        enemy.body.pos.x + enemy.body.size().x >= 0.0
    });

    state.explosions.retain_mut(|explosion| {
        explosion.body.sprite.advance(dt);
        !explosion.body.sprite.is_done()
    });
}
