//! Starship Blaster tuning

use serde::{Deserialize, Serialize};

use crate::sim::config::{require_non_negative, require_positive};
use crate::sim::{ConfigError, Validate};

/// Tuning constants for Starship Blaster. Speeds are pixels per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlasterConfig {
    pub width: f32,
    pub height: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    /// Distance from the playfield bottom to the player's top edge
    pub player_bottom_offset: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,
    pub enemy_size: f32,
    pub enemy_min_speed: f32,
    /// Extra random speed on top of `enemy_min_speed`, uniform in `[0, spread)`
    pub enemy_speed_spread: f32,
    /// Spawn once the counter exceeds this many ticks
    pub spawn_interval_ticks: u32,
    pub points_per_kill: u32,
}

impl Default for BlasterConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            player_width: 50.0,
            player_height: 30.0,
            player_speed: 7.0,
            player_bottom_offset: 80.0,
            bullet_width: 8.0,
            bullet_height: 20.0,
            bullet_speed: 10.0,
            enemy_size: 40.0,
            enemy_min_speed: 2.0,
            enemy_speed_spread: 2.0,
            spawn_interval_ticks: 60,
            points_per_kill: 1,
        }
    }
}

impl Validate for BlasterConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_positive("player_width", self.player_width)?;
        require_positive("player_height", self.player_height)?;
        require_positive("player_speed", self.player_speed)?;
        require_positive("player_bottom_offset", self.player_bottom_offset)?;
        require_positive("bullet_width", self.bullet_width)?;
        require_positive("bullet_height", self.bullet_height)?;
        require_positive("bullet_speed", self.bullet_speed)?;
        require_positive("enemy_size", self.enemy_size)?;
        require_positive("enemy_min_speed", self.enemy_min_speed)?;
        require_non_negative("enemy_speed_spread", self.enemy_speed_spread)?;
        require_positive("points_per_kill", self.points_per_kill)?;

        if self.player_width >= self.width {
            return Err(ConfigError::Invalid {
                field: "player_width",
                reason: format!("must be narrower than the playfield ({})", self.width),
            });
        }
        if self.enemy_size >= self.width {
            return Err(ConfigError::Invalid {
                field: "enemy_size",
                reason: format!("must be narrower than the playfield ({})", self.width),
            });
        }
        if self.player_bottom_offset > self.height {
            return Err(ConfigError::Invalid {
                field: "player_bottom_offset",
                reason: "places the player above the playfield".to_string(),
            });
        }
        Ok(())
    }
}
