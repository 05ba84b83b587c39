use canvas_shooter::entities::*;
use glam::Vec2;

#[test]
fn enums_compare() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_ne!(BulletDirection::Forward, BulletDirection::Up);
    assert_ne!(BulletDirection::Up, BulletDirection::Down);
}

#[test]
fn new_state_is_empty_and_playing() {
    let s = GameState::new(5);
    assert_eq!(s.player.body.pos, PLAYER_START);
    assert_eq!(s.player.body.pos, Vec2::new(50.0, 240.0));
    assert!(s.bullets.is_empty());
    assert!(s.enemies.is_empty());
    assert!(s.explosions.is_empty());
    assert_eq!(s.elapsed, 0.0);
    assert_eq!(s.score, 0);
    assert_eq!(s.last_fire_ms, 5);
    assert_eq!(s.status, GameStatus::Playing);
    assert!(!s.is_game_over());
}

#[test]
fn reset_restores_initial_values() {
    let mut s = GameState::new(0);
    s.player.body.pos = Vec2::new(300.0, 10.0);
    s.score = 900;
    s.elapsed = 42.0;
    s.status = GameStatus::GameOver;
    s.enemies.push(Enemy::new(Vec2::new(10.0, 10.0)));
    s.bullets.push(Bullet::new(Vec2::ZERO, BulletDirection::Forward));
    s.explosions.push(Explosion::new(Vec2::ZERO));

    s.reset(1_000);

    assert_eq!(s.player.body.pos, PLAYER_START);
    assert_eq!(s.score, 0);
    assert_eq!(s.elapsed, 0.0);
    assert_eq!(s.last_fire_ms, 1_000);
    assert_eq!(s.status, GameStatus::Playing);
    assert!(s.enemies.is_empty() && s.bullets.is_empty() && s.explosions.is_empty());
}

#[test]
fn bullet_sprites_match_direction() {
    let forward = Bullet::new(Vec2::ZERO, BulletDirection::Forward);
    let up = Bullet::new(Vec2::ZERO, BulletDirection::Up);
    let down = Bullet::new(Vec2::ZERO, BulletDirection::Down);

    assert_eq!(forward.body.size(), Vec2::new(18.0, 8.0));
    assert_eq!(up.body.size(), Vec2::new(9.0, 5.0));
    assert_eq!(down.body.size(), Vec2::new(9.0, 5.0));
    assert_eq!(up.body.sprite.origin, Vec2::new(0.0, 50.0));
    assert_eq!(down.body.sprite.origin, Vec2::new(0.0, 60.0));
    assert_eq!(forward.body.sprite.speed, 0.0);
}

#[test]
fn catalogue_animations() {
    let enemy = enemy_sprite();
    assert_eq!(enemy.size, Vec2::new(80.0, 39.0));
    assert_eq!(enemy.frames, &[0, 1, 2, 3, 2, 1]);
    assert!(!enemy.once);

    let explosion = explosion_sprite();
    assert_eq!(explosion.frames.len(), 13);
    assert!(explosion.once);
    assert!(!explosion.is_done());

    let player = player_sprite();
    assert_eq!(player.size, Vec2::new(39.0, 39.0));
    assert_eq!(player.speed, 16.0);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState::new(0);
    let mut cloned = original.clone();

    cloned.player.body.pos.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy::new(Vec2::new(5.0, 5.0)));
    cloned.player.body.sprite.advance(1.0);

    assert_eq!(original.player.body.pos.x, 50.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
    assert_eq!(original.player.body.sprite.cursor(), 0.0);
}
