use canvas_shooter::config::Tuning;
use canvas_shooter::entities::*;
use canvas_shooter::spawner::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

const DECAY: f32 = 0.993;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── spawn_probability ─────────────────────────────────────────────────────────

#[test]
fn probability_is_zero_at_start() {
    assert_eq!(spawn_probability(0.0, DECAY), 0.0);
}

#[test]
fn probability_strictly_increases() {
    let times = [0.0, 0.5, 1.0, 10.0, 60.0, 100.0, 500.0, 1000.0];
    for pair in times.windows(2) {
        let (a, b) = (spawn_probability(pair[0], DECAY), spawn_probability(pair[1], DECAY));
        assert!(a < b, "p({}) = {a} should be < p({}) = {b}", pair[0], pair[1]);
    }
}

#[test]
fn probability_approaches_one() {
    let p = spawn_probability(10_000.0, DECAY);
    assert!(p > 0.999 && p <= 1.0);
    assert!(spawn_probability(1000.0, DECAY) < 1.0);
}

#[test]
fn probability_matches_curve() {
    let p = spawn_probability(100.0, DECAY);
    let expected = 1.0 - 0.993f32.powf(100.0);
    assert!((p - expected).abs() < 1e-6);
    assert!((p - 0.5046).abs() < 1e-3);
}

// ── maybe_spawn ───────────────────────────────────────────────────────────────

#[test]
fn never_spawns_at_time_zero() {
    let mut s = GameState::new(0);
    let mut rng = seeded_rng();
    for _ in 0..1000 {
        assert!(!maybe_spawn(&mut s, &Tuning::default(), &mut rng));
    }
    assert!(s.enemies.is_empty());
}

#[test]
fn spawns_at_right_edge_within_height() {
    let mut s = GameState::new(0);
    s.elapsed = 10_000.0; // probability 1
    let mut rng = seeded_rng();

    for _ in 0..200 {
        assert!(maybe_spawn(&mut s, &Tuning::default(), &mut rng));
    }

    assert_eq!(s.enemies.len(), 200);
    for e in &s.enemies {
        assert_eq!(e.body.pos.x, CANVAS_WIDTH);
        assert!(e.body.pos.y >= 0.0 && e.body.pos.y <= CANVAS_HEIGHT - 39.0);
        assert_eq!(e.body.sprite.frames.len(), 6);
        assert!(!e.body.sprite.once);
    }
}

#[test]
fn spawn_rate_rises_with_time() {
    let count = |elapsed: f32| {
        let mut s = GameState::new(0);
        s.elapsed = elapsed;
        let mut rng = seeded_rng();
        (0..2000)
            .filter(|_| maybe_spawn(&mut s, &Tuning::default(), &mut rng))
            .count()
    };
    let early = count(5.0); // p ≈ 0.034
    let late = count(200.0); // p ≈ 0.755
    assert!(early < late);
    assert!(early < 200);
    assert!(late > 1200);
}

#[test]
fn same_seed_same_spawns() {
    let run = || {
        let mut s = GameState::new(0);
        s.elapsed = 50.0;
        let mut rng = seeded_rng();
        for _ in 0..100 {
            maybe_spawn(&mut s, &Tuning::default(), &mut rng);
        }
        s.enemies.iter().map(|e| e.body.pos.y).collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
