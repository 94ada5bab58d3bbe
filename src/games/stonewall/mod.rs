//! Stonewall: tower defense
//!
//! Waves of enemies walk a fixed road toward the castle. Towers bought
//! with gold shoot homing bullets at the closest enemy in range; every
//! enemy that reaches the castle chips away at its health.

mod config;
mod draw;
mod path;
mod state;
mod tick;
mod wave;

pub use config::{EnemyStats, StonewallConfig, TowerConfig, WaveConfig};
pub use draw::{draw, health_color};
pub use path::{PATH_WAYPOINTS, distance_to_path, is_on_path};
pub use state::{
    Bullet, Enemy, EnemyId, EnemyKind, PlacementError, StonewallState, Tower, TowerId,
};
pub use tick::{find_target, tick};
pub use wave::{WaveManager, WavePhase, compose};

use glam::Vec2;

use super::Arcade;
use crate::hud::HudItem;
use crate::renderer::DrawList;
use crate::sim::{GamePhase, GameRng, TickInput};

/// Build sites the autopilot fills in order, all clear of the default road
const AUTOPILOT_SITES: [Vec2; 8] = [
    Vec2::new(250.0, 200.0),
    Vec2::new(300.0, 250.0),
    Vec2::new(140.0, 160.0),
    Vec2::new(500.0, 220.0),
    Vec2::new(650.0, 300.0),
    Vec2::new(480.0, 380.0),
    Vec2::new(700.0, 420.0),
    Vec2::new(300.0, 380.0),
];

impl StonewallState {
    /// Text for the wave timer readout
    pub fn wave_timer_text(&self) -> String {
        match self.waves.pause_seconds() {
            Some(0) => "Starting...".to_string(),
            Some(secs) => format!("{secs}s"),
            None => "In Progress".to_string(),
        }
    }
}

impl Arcade for StonewallState {
    fn name(&self) -> &'static str {
        "stonewall"
    }

    fn size(&self) -> Vec2 {
        StonewallState::size(self)
    }

    fn phase(&self) -> GamePhase {
        self.phase
    }

    fn tick(&mut self, input: &TickInput) {
        tick(self, input);
    }

    fn draw(&self, list: &mut DrawList) {
        draw(self, list);
    }

    fn hud(&self) -> Vec<HudItem> {
        vec![
            HudItem::text("castle-health", self.castle_health),
            HudItem::text("gold", self.gold),
            HudItem::text("current-wave", self.waves.wave),
            HudItem::text("wave-timer", self.wave_timer_text()),
            HudItem::visible("game-over", !self.phase.is_running()),
        ]
    }

    fn restart(&mut self, seed: u64) {
        self.rng = GameRng::new(seed);
        self.reset();
        log::info!("Stonewall restarted with seed {seed}");
    }

    /// Buy towers at fixed sites whenever gold allows
    fn autopilot(&self) -> TickInput {
        let mut input = TickInput::default();
        if self.gold < self.config.tower.cost {
            return input;
        }
        if let Some(site) = AUTOPILOT_SITES
            .iter()
            .copied()
            .find(|&site| self.check_site(site).is_ok())
        {
            input.click(site);
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::text_of;

    #[test]
    fn test_hud_readouts() {
        let mut game = StonewallState::with_seed(1);
        let hud = Arcade::hud(&game);
        assert_eq!(text_of(&hud, "gold"), Some("400"));
        assert_eq!(text_of(&hud, "castle-health"), Some("100"));
        assert_eq!(text_of(&hud, "current-wave"), Some("1"));
        assert_eq!(text_of(&hud, "wave-timer"), Some("In Progress"));

        game.waves.phase = WavePhase::Pause { ticks_left: 250 };
        assert_eq!(game.wave_timer_text(), "5s");
        game.waves.phase = WavePhase::Pause { ticks_left: 0 };
        assert_eq!(game.wave_timer_text(), "Starting...");

        game.phase.enter_over();
        assert!(Arcade::hud(&game).contains(&HudItem::visible("game-over", true)));
    }

    #[test]
    fn test_autopilot_sites_are_legal() {
        let game = StonewallState::with_seed(1);
        for (i, site) in AUTOPILOT_SITES.iter().enumerate() {
            assert!(game.check_site(*site).is_ok(), "site {i} is blocked");
        }
    }

    #[test]
    fn test_autopilot_spends_gold() {
        let mut game = StonewallState::with_seed(4);
        for _ in 0..10 {
            let input = game.autopilot();
            Arcade::tick(&mut game, &input);
        }
        assert_eq!(game.towers.len(), 8);
        assert_eq!(game.gold, 0);
    }

    #[test]
    fn test_restart_from_over() {
        let mut game = StonewallState::with_seed(1);
        game.castle_health = 0;
        game.phase.enter_over();
        game.restart(12);
        assert_eq!(game.phase, GamePhase::Running);
        assert_eq!(game.castle_health, 100);
        assert_eq!(game.rng.seed(), 12);
    }
}
