//! Zombie Rush tuning

use serde::{Deserialize, Serialize};

use crate::sim::config::{require_non_negative, require_positive};
use crate::sim::{ConfigError, Validate};

/// Tuning constants for Zombie Rush. Speeds are pixels per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZombieConfig {
    pub width: f32,
    pub height: f32,
    pub player_radius: f32,
    pub player_speed: f32,
    pub max_health: u32,
    pub bullet_radius: f32,
    pub bullet_speed: f32,
    pub zombie_radius: f32,
    pub zombie_min_speed: f32,
    /// Random extra speed is `rand * zombie_speed_spread * difficulty`
    pub zombie_speed_spread: f32,
    /// Health a zombie bites off on contact
    pub zombie_damage: u32,
    /// Bullet hits needed to drop a zombie
    pub zombie_health: u32,
    /// How far outside the playfield zombies appear
    pub spawn_margin: f32,
    pub spawn_interval_ticks: u32,
    pub min_spawn_interval_ticks: u32,
    /// Interval shrink after every batch
    pub spawn_interval_step: u32,
    pub initial_difficulty: f32,
    pub difficulty_step: f32,
    /// Difficulty rises at a batch when the score is a positive multiple of this
    pub difficulty_score_period: u32,
    pub points_per_kill: u32,
}

impl Default for ZombieConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            player_radius: 15.0,
            player_speed: 4.0,
            max_health: 100,
            bullet_radius: 4.0,
            bullet_speed: 8.0,
            zombie_radius: 18.0,
            zombie_min_speed: 0.8,
            zombie_speed_spread: 0.4,
            zombie_damage: 10,
            zombie_health: 1,
            spawn_margin: 20.0,
            spawn_interval_ticks: 180,
            min_spawn_interval_ticks: 60,
            spawn_interval_step: 2,
            initial_difficulty: 1.0,
            difficulty_step: 0.2,
            difficulty_score_period: 100,
            points_per_kill: 10,
        }
    }
}

impl Validate for ZombieConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_positive("player_radius", self.player_radius)?;
        require_positive("player_speed", self.player_speed)?;
        require_positive("max_health", self.max_health)?;
        require_positive("bullet_radius", self.bullet_radius)?;
        require_positive("bullet_speed", self.bullet_speed)?;
        require_positive("zombie_radius", self.zombie_radius)?;
        require_positive("zombie_min_speed", self.zombie_min_speed)?;
        require_non_negative("zombie_speed_spread", self.zombie_speed_spread)?;
        require_positive("zombie_health", self.zombie_health)?;
        require_non_negative("spawn_margin", self.spawn_margin)?;
        require_positive("min_spawn_interval_ticks", self.min_spawn_interval_ticks)?;
        require_non_negative("initial_difficulty", self.initial_difficulty)?;
        require_non_negative("difficulty_step", self.difficulty_step)?;
        require_positive("difficulty_score_period", self.difficulty_score_period)?;

        if self.min_spawn_interval_ticks > self.spawn_interval_ticks {
            return Err(ConfigError::Invalid {
                field: "min_spawn_interval_ticks",
                reason: format!(
                    "exceeds spawn_interval_ticks ({})",
                    self.spawn_interval_ticks
                ),
            });
        }
        if self.player_radius * 2.0 >= self.width.min(self.height) {
            return Err(ConfigError::Invalid {
                field: "player_radius",
                reason: "player does not fit in the playfield".to_string(),
            });
        }
        Ok(())
    }
}
