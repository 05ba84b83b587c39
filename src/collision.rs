/// Axis-aligned box collision, player bounds, and scoring.

use glam::Vec2;
use log::{debug, info};

use crate::config::Tuning;
use crate::entities::{Explosion, GameState, GameStatus, Player, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Overlap test on boxes given by their min and max corners.
///
/// `a_max <= b_min` on either axis is a miss while `a_min > b_max` is one,
/// so `a` touching `b`'s far edge with its near edge still counts as a hit.
pub fn collides(a_min: Vec2, a_max: Vec2, b_min: Vec2, b_max: Vec2) -> bool {
    !(a_max.x <= b_min.x || a_min.x > b_max.x || a_max.y <= b_min.y || a_min.y > b_max.y)
}

pub fn box_collides(pos: Vec2, size: Vec2, pos2: Vec2, size2: Vec2) -> bool {
    collides(pos, pos + size, pos2, pos2 + size2)
}

/// Hard-clamp the player inside the canvas.
pub fn clamp_player(player: &mut Player) {
    let size = player.body.size();
    let pos = &mut player.body.pos;
    pos.x = pos.x.clamp(0.0, CANVAS_WIDTH - size.x);
    pos.y = pos.y.clamp(0.0, CANVAS_HEIGHT - size.y);
}

/// What one collision pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub kills: u32,
    pub player_hit: bool,
}

/// Clamp the player, then resolve bullet→enemy kills and enemy→player hits.
///
/// Enemies are scanned in spawn order and each is matched against the
/// bullets in spawn order; the first overlapping bullet kills it and is used
/// up.  A killed enemy is gone before the player check, so it can never end
/// the game in the same frame.
pub fn check_collisions(state: &mut GameState, tuning: &Tuning) -> CollisionReport {
    clamp_player(&mut state.player);

    let mut report = CollisionReport::default();
    let player_pos = state.player.body.pos;
    let player_size = state.player.body.size();

    let mut i = 0;
    while i < state.enemies.len() {
        let pos = state.enemies[i].body.pos;
        let size = state.enemies[i].body.size();

        let hit = state
            .bullets
            .iter()
            .position(|bullet| box_collides(pos, size, bullet.body.pos, bullet.body.size()));

        if let Some(j) = hit {
            // `remove` shifts the next enemy into slot i, so i stays put
            state.enemies.remove(i);
            state.bullets.remove(j);
            state.score += tuning.kill_score;
            state.explosions.push(Explosion::new(pos));
            report.kills += 1;
            debug!("enemy destroyed at ({:.0}, {:.0})", pos.x, pos.y);
            continue;
        }

        if box_collides(pos, size, player_pos, player_size) {
            if state.status != GameStatus::GameOver {
                info!("player hit, game over with score {}", state.score);
            }
            state.status = GameStatus::GameOver;
            report.player_hit = true;
        }
        i += 1;
    }

    report
}
