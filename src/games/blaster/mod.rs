//! Starship Blaster: a vertical shooter
//!
//! The ship slides along the bottom edge and shoots straight up. Enemies
//! fall from the top at random columns; one reaching the bottom ends the run.

mod config;
mod draw;
mod state;
mod tick;

pub use config::BlasterConfig;
pub use draw::draw;
pub use state::{BlasterState, Bullet, Enemy};
pub use tick::tick;

use glam::Vec2;

use super::Arcade;
use crate::hud::HudItem;
use crate::renderer::DrawList;
use crate::sim::{GamePhase, GameRng, Key, KeySet, TickInput};

impl Arcade for BlasterState {
    fn name(&self) -> &'static str {
        "blaster"
    }

    fn size(&self) -> Vec2 {
        BlasterState::size(self)
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
            HudItem::text("score", self.score),
            HudItem::text("finalScore", self.score),
            HudItem::visible("gameOverlay", !self.phase.is_running()),
        ]
    }

    fn restart(&mut self, seed: u64) {
        self.rng = GameRng::new(seed);
        self.reset();
        log::info!("Starship Blaster restarted with seed {seed}");
    }

    /// Track the lowest enemy and fire on every other tick
    fn autopilot(&self) -> TickInput {
        let mut input = TickInput::default();
        let ship_center = self.player.center().x;

        if let Some(threat) = self
            .enemies
            .iter()
            .max_by(|a, b| a.rect.pos.y.total_cmp(&b.rect.pos.y))
        {
            let target = threat.rect.center().x;
            if target < ship_center - self.config.player_speed {
                input.held.insert(Key::ArrowLeft);
            } else if target > ship_center + self.config.player_speed {
                input.held.insert(Key::ArrowRight);
            }
        }

        if self.time_ticks % 2 == 0 {
            input.held.insert(Key::Space);
        } else {
            input.released = KeySet::from_iter([Key::Space]);
        }
        input
    }
}
