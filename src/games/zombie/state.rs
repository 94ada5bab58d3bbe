//! Zombie Rush game state

use glam::Vec2;

use super::config::ZombieConfig;
use crate::sim::{ConfigError, GamePhase, GameRng, Validate, angle_to_dir, facing_angle};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub health: u32,
    /// Facing angle toward the aim point (radians)
    pub angle: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Zombie {
    pub id: u32,
    pub pos: Vec2,
    pub speed: f32,
    pub health: u32,
}

/// Complete state of one Zombie Rush run
#[derive(Debug, Clone)]
pub struct ZombieState {
    pub config: ZombieConfig,
    pub rng: GameRng,
    pub phase: GamePhase,
    pub score: u32,
    pub player: Player,
    /// Last known pointer position; kept when the pointer leaves
    pub aim: Vec2,
    pub bullets: Vec<Bullet>,
    pub zombies: Vec<Zombie>,
    /// Ticks since the last batch
    pub spawn_timer: u32,
    pub spawn_interval: u32,
    pub difficulty: f32,
    pub time_ticks: u64,
    next_id: u32,
}

impl ZombieState {
    pub fn new(config: ZombieConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Default tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::build(ZombieConfig::default(), seed)
    }

    fn build(config: ZombieConfig, seed: u64) -> Self {
        let center = Vec2::new(config.width, config.height) / 2.0;
        Self {
            rng: GameRng::new(seed),
            phase: GamePhase::Running,
            score: 0,
            player: Player {
                pos: center,
                radius: config.player_radius,
                health: config.max_health,
                angle: 0.0,
            },
            aim: center,
            bullets: Vec::new(),
            zombies: Vec::new(),
            spawn_timer: 0,
            spawn_interval: config.spawn_interval_ticks,
            difficulty: config.initial_difficulty,
            time_ticks: 0,
            next_id: 1,
            config,
        }
    }

    /// Start over from the configured constants and the same seed
    pub fn reset(&mut self) {
        let seed = self.rng.seed();
        *self = Self::build(self.config.clone(), seed);
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.config.width, self.config.height)
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Player health as a fraction of the maximum
    pub fn health_fraction(&self) -> f32 {
        self.player.health as f32 / self.config.max_health as f32
    }

    /// Shoot from the player toward `target`
    pub fn fire_at(&mut self, target: Vec2) {
        let id = self.next_entity_id();
        let angle = facing_angle(self.player.pos, target);
        self.bullets.push(Bullet {
            id,
            pos: self.player.pos,
            vel: angle_to_dir(angle) * self.config.bullet_speed,
        });
    }

    pub fn spawn_zombie_at(&mut self, pos: Vec2, speed: f32) -> u32 {
        let id = self.next_entity_id();
        self.zombies.push(Zombie {
            id,
            pos,
            speed,
            health: self.config.zombie_health,
        });
        id
    }

    /// Spawn one zombie just outside a random edge
    pub fn spawn_random_zombie(&mut self) -> u32 {
        let (w, h, m) = (self.config.width, self.config.height, self.config.spawn_margin);
        let pos = match self.rng.index(4) {
            0 => Vec2::new(self.rng.below(w), -m),
            1 => Vec2::new(w + m, self.rng.below(h)),
            2 => Vec2::new(self.rng.below(w), h + m),
            _ => Vec2::new(-m, self.rng.below(h)),
        };
        let spread = self.config.zombie_speed_spread * self.difficulty;
        let speed = self.config.zombie_min_speed + self.rng.below(spread);
        self.spawn_zombie_at(pos, speed)
    }

    /// Zombies per batch at the current difficulty
    pub fn batch_size(&self) -> usize {
        (1.0 + self.difficulty * 0.5).floor() as usize
    }
}
