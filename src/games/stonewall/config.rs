//! Stonewall tuning

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::path::PATH_WAYPOINTS;
use crate::sim::config::{require_non_negative, require_positive};
use crate::sim::{ConfigError, Validate};
use crate::ticks_from_millis;

/// Stats for one enemy kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub health: f32,
    /// Pixels per tick along the path
    pub speed: f32,
    /// Gold credited on a kill
    pub reward: u32,
}

impl EnemyStats {
    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        require_positive(field, self.health)?;
        require_positive(field, self.speed)?;
        Ok(())
    }
}

/// Tower build and combat constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerConfig {
    pub cost: u32,
    pub damage: f32,
    pub range: f32,
    pub radius: f32,
    /// Ticks between shots
    pub reload_ticks: u32,
    pub bullet_speed: f32,
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            cost: 50,
            damage: 25.0,
            range: 100.0,
            radius: 20.0,
            reload_ticks: ticks_from_millis(500),
            bullet_speed: 5.0,
        }
    }
}

/// Wave sizing and pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Enemies in wave `w` = `base_size + per_wave * w`
    pub base_size: u32,
    pub per_wave: u32,
    pub fast_from_wave: u32,
    pub fast_chance: f32,
    pub tank_from_wave: u32,
    pub tank_chance: f32,
    /// Ticks between enemies entering the path
    pub spawn_interval_ticks: u32,
    /// Breather between a cleared wave and the next
    pub pause_ticks: u32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            base_size: 8,
            per_wave: 3,
            fast_from_wave: 3,
            fast_chance: 0.3,
            tank_from_wave: 5,
            tank_chance: 0.2,
            spawn_interval_ticks: ticks_from_millis(500),
            pause_ticks: ticks_from_millis(5000),
        }
    }
}

impl WaveConfig {
    /// Number of enemies wave `wave` sends
    pub fn size_of(&self, wave: u32) -> usize {
        self.per_wave.saturating_mul(wave).saturating_add(self.base_size) as usize
    }
}

/// Tuning constants for Stonewall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StonewallConfig {
    pub width: f32,
    pub height: f32,
    pub initial_gold: u32,
    pub starting_wave: u32,
    pub castle_health: u32,
    /// Castle damage per enemy that reaches the end of the path
    pub leak_damage: u32,
    /// Waypoints from the spawn point to the castle
    pub path: Vec<Vec2>,
    /// Towers may not be placed closer than this to the path
    pub path_clearance: f32,
    /// Distance at which an enemy counts as having reached a waypoint
    pub waypoint_tolerance: f32,
    pub enemy_radius: f32,
    pub basic: EnemyStats,
    pub fast: EnemyStats,
    pub tank: EnemyStats,
    pub tower: TowerConfig,
    pub waves: WaveConfig,
}

impl Default for StonewallConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            initial_gold: 400,
            starting_wave: 1,
            castle_health: 100,
            leak_damage: 10,
            path: PATH_WAYPOINTS.to_vec(),
            path_clearance: 40.0,
            waypoint_tolerance: 10.0,
            enemy_radius: 15.0,
            basic: EnemyStats {
                health: 100.0,
                speed: 1.0,
                reward: 10,
            },
            fast: EnemyStats {
                health: 50.0,
                speed: 2.0,
                reward: 15,
            },
            tank: EnemyStats {
                health: 300.0,
                speed: 0.5,
                reward: 25,
            },
            tower: TowerConfig::default(),
            waves: WaveConfig::default(),
        }
    }
}

impl StonewallConfig {
    /// The castle sits on the final waypoint
    pub fn castle(&self) -> Vec2 {
        self.path.last().copied().unwrap_or(Vec2::ZERO)
    }
}

impl Validate for StonewallConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_positive("castle_health", self.castle_health)?;
        require_non_negative("path_clearance", self.path_clearance)?;
        require_positive("waypoint_tolerance", self.waypoint_tolerance)?;
        require_positive("enemy_radius", self.enemy_radius)?;
        self.basic.validate("basic")?;
        self.fast.validate("fast")?;
        self.tank.validate("tank")?;

        require_positive("tower.damage", self.tower.damage)?;
        require_positive("tower.range", self.tower.range)?;
        require_positive("tower.radius", self.tower.radius)?;
        require_positive("tower.bullet_speed", self.tower.bullet_speed)?;

        if self.path.len() < 2 {
            return Err(ConfigError::Invalid {
                field: "path",
                reason: format!("needs at least two waypoints (got {})", self.path.len()),
            });
        }
        if self.waves.base_size + self.waves.per_wave == 0 {
            return Err(ConfigError::Invalid {
                field: "waves",
                reason: "every wave would be empty".to_string(),
            });
        }
        for (field, p) in [
            ("waves.fast_chance", self.waves.fast_chance),
            ("waves.tank_chance", self.waves.tank_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("probability must be within 0..=1 (got {p})"),
                });
            }
        }
        Ok(())
    }
}
