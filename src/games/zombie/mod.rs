//! Zombie Rush: top-down survival shooter
//!
//! Move with WASD or the arrow keys, aim with the pointer and click to
//! shoot. Zombies shamble in from every edge in growing batches.

mod config;
mod draw;
mod state;
mod tick;

pub use config::ZombieConfig;
pub use draw::draw;
pub use state::{Bullet, Player, Zombie, ZombieState};
pub use tick::tick;

use glam::Vec2;

use super::Arcade;
use crate::hud::HudItem;
use crate::renderer::DrawList;
use crate::sim::{GamePhase, GameRng, Key, TickInput};

/// Ticks between autopilot shots
const AUTOPILOT_FIRE_EVERY: u64 = 12;

impl Arcade for ZombieState {
    fn name(&self) -> &'static str {
        "zombie"
    }

    fn size(&self) -> Vec2 {
        ZombieState::size(self)
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
            HudItem::text("healthText", self.player.health),
            HudItem::meter("healthFill", self.health_fraction()),
            HudItem::text("scoreValue", self.score),
            HudItem::text("finalScore", self.score),
            HudItem::visible("overlay", !self.phase.is_running()),
        ]
    }

    fn restart(&mut self, seed: u64) {
        self.rng = GameRng::new(seed);
        self.reset();
        log::info!("Zombie Rush restarted with seed {seed}");
    }

    /// Shoot at the nearest zombie and back away from it
    fn autopilot(&self) -> TickInput {
        let mut input = TickInput::default();
        let me = self.player.pos;
        let Some(nearest) = self
            .zombies
            .iter()
            .min_by(|a, b| a.pos.distance(me).total_cmp(&b.pos.distance(me)))
        else {
            return input;
        };

        input.pointer_move(nearest.pos);
        if self.time_ticks % AUTOPILOT_FIRE_EVERY == 0 {
            input.click(nearest.pos);
        }

        // Retreat, steering back toward the middle near the walls
        let center = self.size() / 2.0;
        let away = (me - nearest.pos).normalize_or_zero() + (center - me) / center;
        if away.y < -0.3 {
            input.held.insert(Key::W);
        } else if away.y > 0.3 {
            input.held.insert(Key::S);
        }
        if away.x < -0.3 {
            input.held.insert(Key::A);
        } else if away.x > 0.3 {
            input.held.insert(Key::D);
        }
        input
    }
}
