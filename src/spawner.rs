/// Difficulty ramp: enemies appear more often the longer a run lasts.
///
/// One Bernoulli trial per frame, so the expected spawn rate scales with the
/// frame rate as well as with elapsed time.

use glam::Vec2;
use log::trace;
use rand::Rng;

use crate::config::Tuning;
use crate::entities::{enemy_sprite, Enemy, GameState, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Chance of a spawn this frame after `elapsed` seconds: `1 - decay^elapsed`.
pub fn spawn_probability(elapsed: f32, decay: f32) -> f32 {
    1.0 - decay.powf(elapsed)
}

/// Roll for a new enemy entering at the right edge.  Returns whether one
/// spawned.  Expects `state.elapsed` to already include this frame.
pub fn maybe_spawn(state: &mut GameState, tuning: &Tuning, rng: &mut impl Rng) -> bool {
    let roll: f32 = rng.gen();
    if roll >= spawn_probability(state.elapsed, tuning.spawn_decay) {
        return false;
    }

    let height = enemy_sprite().size.y;
    let y = rng.gen::<f32>() * (CANVAS_HEIGHT - height);
    state.enemies.push(Enemy::new(Vec2::new(CANVAS_WIDTH, y)));
    trace!("enemy spawned at y={y:.0} (t={:.2}s)", state.elapsed);
    true
}
