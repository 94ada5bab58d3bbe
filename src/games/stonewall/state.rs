//! Stonewall game state and tower placement

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::{EnemyStats, StonewallConfig};
use super::path::is_on_path;
use super::wave::WaveManager;
use crate::sim::{ConfigError, GamePhase, GameRng, Validate};

/// Stable handle for an enemy; bullets and towers refer to enemies by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnemyId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TowerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Basic,
    Fast,
    Tank,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub speed: f32,
    pub reward: u32,
    /// Index of the waypoint being walked toward
    pub waypoint: usize,
    pub reached_end: bool,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Remaining health as a fraction of the maximum
    pub fn health_fraction(&self) -> f32 {
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    pub id: TowerId,
    pub pos: Vec2,
    /// Ticks until the tower can fire again
    pub cooldown: u32,
    /// Enemy the barrel points at this tick
    pub target: Option<EnemyId>,
}

/// Homing shot
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub target: EnemyId,
    pub damage: f32,
    pub speed: f32,
}

/// Why a tower could not be built
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PlacementError {
    #[error("the game is over")]
    GameOver,
    #[error("too close to the enemy path")]
    OnPath,
    #[error("overlaps an existing tower")]
    Overlap,
    #[error("too close to the edge of the field")]
    OutOfBounds,
    #[error("not enough gold (need {need}, have {have})")]
    InsufficientGold { need: u32, have: u32 },
}

/// Complete state of one Stonewall run
#[derive(Debug, Clone)]
pub struct StonewallState {
    pub config: StonewallConfig,
    pub rng: GameRng,
    pub phase: GamePhase,
    pub castle_health: u32,
    pub gold: u32,
    pub towers: Vec<Tower>,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub waves: WaveManager,
    /// Pointer over the field, if any
    pub pointer: Option<Vec2>,
    /// Pointer position when a tower could be built there
    pub hover: Option<Vec2>,
    pub time_ticks: u64,
    next_id: u32,
}

impl StonewallState {
    pub fn new(config: StonewallConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Default tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::build(StonewallConfig::default(), seed)
    }

    fn build(config: StonewallConfig, seed: u64) -> Self {
        let mut state = Self {
            rng: GameRng::new(seed),
            phase: GamePhase::Running,
            castle_health: config.castle_health,
            gold: config.initial_gold,
            towers: Vec::new(),
            enemies: Vec::new(),
            bullets: Vec::new(),
            waves: WaveManager::new(config.starting_wave),
            pointer: None,
            hover: None,
            time_ticks: 0,
            next_id: 1,
            config,
        };
        state.waves.start_wave(&mut state.rng, &state.config.waves);
        state
    }

    /// Start over from the configured constants and the same seed
    pub fn reset(&mut self) {
        self.rng.reset();
        self.phase = GamePhase::Running;
        self.castle_health = self.config.castle_health;
        self.gold = self.config.initial_gold;
        self.towers.clear();
        self.enemies.clear();
        self.bullets.clear();
        self.waves = WaveManager::new(self.config.starting_wave);
        self.pointer = None;
        self.hover = None;
        self.time_ticks = 0;
        self.next_id = 1;
        self.waves.start_wave(&mut self.rng, &self.config.waves);
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.config.width, self.config.height)
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn stats(&self, kind: EnemyKind) -> EnemyStats {
        match kind {
            EnemyKind::Basic => self.config.basic,
            EnemyKind::Fast => self.config.fast,
            EnemyKind::Tank => self.config.tank,
        }
    }

    /// Put an enemy of `kind` on the first waypoint
    pub fn spawn_enemy(&mut self, kind: EnemyKind) -> EnemyId {
        let id = EnemyId(self.next_entity_id());
        let stats = self.stats(kind);
        let pos = self.config.path.first().copied().unwrap_or(Vec2::ZERO);
        self.enemies.push(Enemy {
            id,
            kind,
            pos,
            health: stats.health,
            max_health: stats.health,
            speed: stats.speed,
            reward: stats.reward,
            waypoint: 0,
            reached_end: false,
        });
        log::debug!("Spawned {kind:?} enemy {}", id.0);
        id
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Check whether a tower could stand at `pos`, ignoring cost
    pub fn check_site(&self, pos: Vec2) -> Result<(), PlacementError> {
        let tower = &self.config.tower;
        if is_on_path(pos, &self.config.path, self.config.path_clearance) {
            return Err(PlacementError::OnPath);
        }
        if self
            .towers
            .iter()
            .any(|t| t.pos.distance(pos) < tower.radius * 2.0)
        {
            return Err(PlacementError::Overlap);
        }
        let r = tower.radius;
        if pos.x < r || pos.x > self.config.width - r || pos.y < r || pos.y > self.config.height - r {
            return Err(PlacementError::OutOfBounds);
        }
        Ok(())
    }

    /// Build a tower at `pos`, paying its cost
    pub fn place_tower(&mut self, pos: Vec2) -> Result<TowerId, PlacementError> {
        if !self.phase.is_running() {
            return Err(PlacementError::GameOver);
        }
        self.check_site(pos)?;
        let cost = self.config.tower.cost;
        if self.gold < cost {
            return Err(PlacementError::InsufficientGold {
                need: cost,
                have: self.gold,
            });
        }

        self.gold -= cost;
        let id = TowerId(self.next_entity_id());
        self.towers.push(Tower {
            id,
            pos,
            cooldown: 0,
            target: None,
        });
        log::info!("Tower {} built at ({:.0}, {:.0}), {} gold left", id.0, pos.x, pos.y, self.gold);
        Ok(id)
    }

    /// Track the pointer for the placement preview; `None` when it leaves
    /// the field. Movement is ignored once the game is over.
    pub fn hover(&mut self, pointer: Option<Vec2>) {
        match pointer {
            None => {
                self.pointer = None;
                self.hover = None;
            }
            Some(_) if !self.phase.is_running() => {}
            Some(pos) => {
                self.pointer = Some(pos);
                self.hover = self.check_site(pos).ok().map(|_| pos);
            }
        }
    }

    /// Whether `tower`'s range ring should be shown for the current pointer
    pub fn shows_range(&self, tower: &Tower) -> bool {
        self.pointer
            .is_some_and(|p| tower.pos.distance(p) < self.config.tower.radius * 2.0)
    }

    /// Whether the translucent tower preview is drawn
    pub fn shows_preview(&self) -> bool {
        self.hover.is_some() && self.gold >= self.config.tower.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRASS: Vec2 = Vec2::new(100.0, 300.0);

    #[test]
    fn test_initial_state() {
        let state = StonewallState::with_seed(1);
        assert_eq!(state.gold, 400);
        assert_eq!(state.castle_health, 100);
        assert_eq!(state.waves.wave, 1);
        assert_eq!(state.waves.remaining(), 11);
    }

    #[test]
    fn test_place_tower_pays_cost() {
        let mut state = StonewallState::with_seed(1);
        assert!(state.place_tower(GRASS).is_ok());
        assert_eq!(state.gold, 350);
        assert_eq!(state.towers.len(), 1);
    }

    #[test]
    fn test_placement_rejections() {
        let mut state = StonewallState::with_seed(1);
        assert_eq!(
            state.place_tower(Vec2::new(125.0, 100.0)),
            Err(PlacementError::OnPath)
        );

        state.place_tower(GRASS).unwrap();
        assert_eq!(
            state.place_tower(GRASS + Vec2::new(39.0, 0.0)),
            Err(PlacementError::Overlap)
        );
        assert_eq!(
            state.place_tower(Vec2::new(10.0, 300.0)),
            Err(PlacementError::OutOfBounds)
        );

        state.gold = 49;
        assert_eq!(
            state.place_tower(Vec2::new(100.0, 380.0)),
            Err(PlacementError::InsufficientGold { need: 50, have: 49 })
        );
        assert_eq!(state.gold, 49);
        assert_eq!(state.towers.len(), 1);

        state.gold = 400;
        state.phase.enter_over();
        assert_eq!(state.place_tower(Vec2::new(100.0, 380.0)), Err(PlacementError::GameOver));
    }

    #[test]
    fn test_edge_margin_is_inclusive() {
        let mut state = StonewallState::with_seed(1);
        assert!(state.check_site(Vec2::new(20.0, 300.0)).is_ok());
        assert!(state.check_site(Vec2::new(19.9, 300.0)).is_err());
        assert!(state.place_tower(Vec2::new(20.0, 580.0)).is_ok());
    }

    #[test]
    fn test_hover_preview_and_range() {
        let mut state = StonewallState::with_seed(1);
        state.hover(Some(Vec2::new(125.0, 100.0)));
        assert_eq!(state.hover, None);

        state.hover(Some(GRASS));
        assert_eq!(state.hover, Some(GRASS));
        assert!(state.shows_preview());

        state.place_tower(GRASS).unwrap();
        // Over the new tower: no site to build on, but its range shows
        state.hover(Some(GRASS + Vec2::new(10.0, 0.0)));
        assert_eq!(state.hover, None);
        assert!(state.shows_range(&state.towers[0]));
        state.hover(Some(GRASS + Vec2::new(0.0, 40.0)));
        assert!(state.hover.is_some());
        assert!(!state.shows_range(&state.towers[0]));

        state.gold = 0;
        state.hover(Some(Vec2::new(100.0, 400.0)));
        assert!(state.hover.is_some());
        assert!(!state.shows_preview());

        state.hover(None);
        assert_eq!(state.hover, None);
        assert_eq!(state.pointer, None);
    }

    #[test]
    fn test_hover_ignored_once_over() {
        let mut state = StonewallState::with_seed(1);
        state.hover(Some(GRASS));
        state.phase.enter_over();

        let elsewhere = Vec2::new(100.0, 400.0);
        state.hover(Some(elsewhere));
        assert_eq!(state.hover, Some(GRASS));
        assert_eq!(state.pointer, Some(GRASS));
    }

    #[test]
    fn test_reset_restores_wave_and_gold() {
        let mut state = StonewallState::with_seed(8);
        state.place_tower(GRASS).unwrap();
        state.spawn_enemy(EnemyKind::Tank);
        state.castle_health = 0;
        state.waves.wave = 9;
        state.phase.enter_over();

        state.reset();
        state.reset();
        assert_eq!(state.gold, 400);
        assert_eq!(state.castle_health, 100);
        assert_eq!(state.waves.wave, 1);
        assert!(state.towers.is_empty() && state.enemies.is_empty());
        assert_eq!(state.phase, GamePhase::Running);
    }
}
