//! Starship Blaster game state

use glam::Vec2;

use super::config::BlasterConfig;
use crate::sim::{ConfigError, GamePhase, GameRng, Rect, Validate};

/// A player shot travelling straight up
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub id: u32,
    pub rect: Rect,
    pub speed: f32,
}

/// An enemy ship falling toward the bottom edge
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub rect: Rect,
    pub speed: f32,
}

/// Complete state of one Starship Blaster run
#[derive(Debug, Clone)]
pub struct BlasterState {
    pub config: BlasterConfig,
    pub rng: GameRng,
    pub phase: GamePhase,
    pub score: u32,
    pub player: Rect,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// Ticks since the last enemy spawn
    pub spawn_timer: u32,
    /// Cleared on fire, restored when Space is released
    pub can_shoot: bool,
    pub time_ticks: u64,
    next_id: u32,
}

impl BlasterState {
    pub fn new(config: BlasterConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Default tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::build(BlasterConfig::default(), seed)
    }

    fn build(config: BlasterConfig, seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            phase: GamePhase::Running,
            score: 0,
            player: spawn_rect(&config),
            bullets: Vec::new(),
            enemies: Vec::new(),
            spawn_timer: 0,
            can_shoot: true,
            time_ticks: 0,
            next_id: 1,
            config,
        }
    }

    /// Start over from the configured constants and the same seed
    pub fn reset(&mut self) {
        self.rng.reset();
        self.phase = GamePhase::Running;
        self.score = 0;
        self.player = spawn_rect(&self.config);
        self.bullets.clear();
        self.enemies.clear();
        self.spawn_timer = 0;
        self.can_shoot = true;
        self.time_ticks = 0;
        self.next_id = 1;
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.config.width, self.config.height)
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Launch a bullet from the nose of the ship
    pub fn fire(&mut self) {
        let id = self.next_entity_id();
        let c = &self.config;
        let x = self.player.left() + c.player_width / 2.0 - c.bullet_width / 2.0;
        self.bullets.push(Bullet {
            id,
            rect: Rect::new(x, self.player.top(), c.bullet_width, c.bullet_height),
            speed: c.bullet_speed,
        });
    }

    /// Place an enemy just above the top edge at column `x`
    pub fn spawn_enemy_at(&mut self, x: f32, speed: f32) -> u32 {
        let id = self.next_entity_id();
        let size = self.config.enemy_size;
        self.enemies.push(Enemy {
            id,
            rect: Rect::new(x, -size, size, size),
            speed,
        });
        id
    }

    /// Spawn an enemy at a random column with a random speed
    pub fn spawn_random_enemy(&mut self) -> u32 {
        let x = self.rng.below(self.config.width - self.config.enemy_size);
        let speed = self.config.enemy_min_speed + self.rng.below(self.config.enemy_speed_spread);
        log::debug!("Enemy spawned at x={x:.0} speed={speed:.2}");
        self.spawn_enemy_at(x, speed)
    }
}

fn spawn_rect(config: &BlasterConfig) -> Rect {
    Rect::new(
        config.width / 2.0 - config.player_width / 2.0,
        config.height - config.player_bottom_offset,
        config.player_width,
        config.player_height,
    )
}
