/// The game-loop driver: asset gate, per-frame update and render, restart.
///
/// Lifecycle: `Uninitialized → Loading → Ready → Running ⇄ GameOver`.  The
/// host calls `tick` once per frame with its clock; nothing here sleeps or
/// blocks.

use log::info;
use rand::Rng;

use crate::canvas::Surface;
use crate::collision::check_collisions;
use crate::compute::{handle_input, update_entities};
use crate::config::Config;
use crate::entities::GameState;
use crate::error::Result;
use crate::input::InputSnapshot;
use crate::resources::{LoadEvent, Resources, GAME_ASSETS, TERRAIN};
use crate::spawner::maybe_spawn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Loading,
    Ready,
    Running,
    GameOver,
}

pub struct GameLoop<R: Rng> {
    config: Config,
    resources: Resources,
    state: GameState,
    rng: R,
    phase: Phase,
    last_frame_ms: u64,
}

impl<R: Rng> GameLoop<R> {
    pub fn new(config: Config, rng: R) -> Self {
        let resources = Resources::new(&config.asset_dir);
        GameLoop::with_resources(config, resources, rng)
    }

    /// Driver over a caller-supplied loader, e.g. one with images inserted.
    pub fn with_resources(config: Config, resources: Resources, rng: R) -> Self {
        GameLoop {
            config,
            resources,
            state: GameState::new(0),
            rng,
            phase: Phase::Uninitialized,
            last_frame_ms: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Request every declared asset.  Only valid before the first load.
    pub fn start_loading(&mut self) {
        if self.phase != Phase::Uninitialized {
            return;
        }
        self.resources.load(GAME_ASSETS);
        self.phase = Phase::Loading;
        info!("loading {} asset(s)", GAME_ASSETS.len());
    }

    /// Start a fresh run at `now_ms`: clears the state, starts the clock.
    fn start(&mut self, now_ms: u64) {
        self.state.reset(now_ms);
        self.last_frame_ms = now_ms;
        self.phase = Phase::Running;
        info!("run started");
    }

    /// The restart action.  Ignored until assets are ready.
    pub fn restart(&mut self, now_ms: u64) {
        if matches!(self.phase, Phase::Running | Phase::GameOver) {
            self.phase = Phase::Ready;
            self.start(now_ms);
        }
    }

    /// Run one frame and report the phase afterwards.
    ///
    /// Errors only come from a failed asset load under `strict_assets`.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        now_ms: u64,
        input: &InputSnapshot,
        surface: &mut S,
    ) -> Result<Phase> {
        match self.phase {
            Phase::Uninitialized => self.start_loading(),
            Phase::Loading => self.poll_loading()?,
            Phase::Ready => self.start(now_ms),
            Phase::Running | Phase::GameOver => {
                let dt = now_ms.saturating_sub(self.last_frame_ms) as f32 / 1000.0;
                self.update(dt, now_ms, input);
                self.render(surface);
                self.last_frame_ms = now_ms;
            }
        }
        Ok(self.phase)
    }

    fn poll_loading(&mut self) -> Result<()> {
        for event in self.resources.poll() {
            if let LoadEvent::Failed(err) = event {
                if self.config.strict_assets {
                    return Err(err);
                }
            }
        }
        if self.resources.take_ready() {
            info!("assets ready");
            self.phase = Phase::Ready;
        }
        Ok(())
    }

    /// Gameplay update for one frame.  In game over only the simulation
    /// step runs, so in-flight bullets and explosions play out while input,
    /// spawning, and scoring stay frozen.
    pub fn update(&mut self, dt: f32, now_ms: u64, input: &InputSnapshot) {
        let dt = dt.max(0.0);
        let tuning = self.config.tuning;
        let running = self.phase == Phase::Running;

        if running {
            self.state.elapsed += dt;
            handle_input(&mut self.state, input, &tuning, dt, now_ms);
        }

        update_entities(&mut self.state, &tuning, dt);

        if running {
            maybe_spawn(&mut self.state, &tuning, &mut self.rng);
            check_collisions(&mut self.state, &tuning);
            if self.state.is_game_over() {
                self.phase = Phase::GameOver;
            }
        }
    }

    /// Draw the background, every entity, and the score.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        match self.resources.get(TERRAIN) {
            Some(tile) => surface.fill_pattern(tile),
            None => surface.clear(),
        }

        let resources = &self.resources;
        let state = &mut self.state;

        if !state.is_game_over() {
            let body = &mut state.player.body;
            body.sprite.render_into(surface, resources, body.pos);
        }
        for bullet in &mut state.bullets {
            bullet.body.sprite.render_into(surface, resources, bullet.body.pos);
        }
        for enemy in &mut state.enemies {
            enemy.body.sprite.render_into(surface, resources, enemy.body.pos);
        }
        for explosion in &mut state.explosions {
            explosion.body.sprite.render_into(surface, resources, explosion.body.pos);
        }

        surface.set_score(state.score);
    }
}
