/// All game entity types: plain data plus constructors, no per-frame logic.

use glam::Vec2;

use crate::resources::SPRITE_SHEET;
use crate::sprite::Sprite;

// ── Canvas ────────────────────────────────────────────────────────────────────

pub const CANVAS_WIDTH: f32 = 512.0;
pub const CANVAS_HEIGHT: f32 = 480.0;

/// Where `reset` places the player.
pub const PLAYER_START: Vec2 = Vec2::new(50.0, CANVAS_HEIGHT / 2.0);

// ── Sprite catalogue ──────────────────────────────────────────────────────────

const PLAYER_FRAMES: &[usize] = &[0, 1];
const ENEMY_FRAMES: &[usize] = &[0, 1, 2, 3, 2, 1];
const EXPLOSION_FRAMES: &[usize] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

pub fn player_sprite() -> Sprite {
    Sprite::new(SPRITE_SHEET, Vec2::new(0.0, 0.0), Vec2::new(39.0, 39.0))
        .animated(16.0, PLAYER_FRAMES)
}

pub fn bullet_sprite(direction: BulletDirection) -> Sprite {
    match direction {
        BulletDirection::Forward => {
            Sprite::new(SPRITE_SHEET, Vec2::new(0.0, 39.0), Vec2::new(18.0, 8.0))
        }
        BulletDirection::Up => Sprite::new(SPRITE_SHEET, Vec2::new(0.0, 50.0), Vec2::new(9.0, 5.0)),
        BulletDirection::Down => {
            Sprite::new(SPRITE_SHEET, Vec2::new(0.0, 60.0), Vec2::new(9.0, 5.0))
        }
    }
}

pub fn enemy_sprite() -> Sprite {
    Sprite::new(SPRITE_SHEET, Vec2::new(0.0, 78.0), Vec2::new(80.0, 39.0))
        .animated(6.0, ENEMY_FRAMES)
}

pub fn explosion_sprite() -> Sprite {
    Sprite::new(SPRITE_SHEET, Vec2::new(0.0, 117.0), Vec2::new(39.0, 39.0))
        .animated(16.0, EXPLOSION_FRAMES)
        .play_once()
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Position and sprite shared by every entity kind. Both are owned.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Top-left corner in canvas pixels.
    pub pos: Vec2,
    pub sprite: Sprite,
}

impl Body {
    pub fn new(pos: Vec2, sprite: Sprite) -> Self {
        Body { pos, sprite }
    }

    pub fn size(&self) -> Vec2 {
        self.sprite.size
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletDirection {
    Forward,
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Body,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Player {
            body: Body::new(pos, player_sprite()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub body: Body,
    pub direction: BulletDirection,
}

impl Bullet {
    pub fn new(pos: Vec2, direction: BulletDirection) -> Self {
        Bullet {
            body: Body::new(pos, bullet_sprite(direction)),
            direction,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Body,
}

impl Enemy {
    pub fn new(pos: Vec2) -> Self {
        Enemy {
            body: Body::new(pos, enemy_sprite()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Explosion {
    pub body: Body,
}

impl Explosion {
    pub fn new(pos: Vec2) -> Self {
        Explosion {
            body: Body::new(pos, explosion_sprite()),
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// The entire game state.  Collections are kept in spawn order; removal
/// while scanning must preserve the order of the survivors.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub explosions: Vec<Explosion>,
    /// Seconds of play since the last reset.
    pub elapsed: f32,
    pub score: u32,
    /// Host clock (milliseconds) of the last volley.
    pub last_fire_ms: u64,
    pub status: GameStatus,
}

impl GameState {
    /// Fresh state as of host time `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        GameState {
            player: Player::new(PLAYER_START),
            bullets: Vec::new(),
            enemies: Vec::new(),
            explosions: Vec::new(),
            elapsed: 0.0,
            score: 0,
            last_fire_ms: now_ms,
            status: GameStatus::Playing,
        }
    }

    pub fn reset(&mut self, now_ms: u64) {
        *self = GameState::new(now_ms);
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
