//! Zombie Rush render pass

use glam::Vec2;
use std::f32::consts::PI;

use super::state::ZombieState;
use crate::renderer::{Color, DrawList};
use crate::sim::angle_to_dir;

const GROUND: Color = Color::hex(0x2d2d2d);
const ZOMBIE: Color = Color::hex(0xcc0000);
const ZOMBIE_EYES: Color = Color::hex(0x990000);
const ZOMBIE_MOUTH: Color = Color::hex(0x660000);
const BULLET: Color = Color::hex(0xffff00);
const PLAYER: Color = Color::hex(0x4444ff);
const BARREL: Color = Color::hex(0x6666ff);
const VEIL: Color = Color::BLACK.with_alpha(0.6);

const EYE_OFFSET: Vec2 = Vec2::new(6.0, -5.0);
const EYE_RADIUS: f32 = 3.0;
const BARREL_LENGTH: f32 = 10.0;
const BARREL_WIDTH: f32 = 6.0;

pub fn draw(state: &ZombieState, list: &mut DrawList) {
    let config = &state.config;
    list.clear(GROUND);

    for zombie in &state.zombies {
        let r = config.zombie_radius;
        list.fill_circle(zombie.pos, r, ZOMBIE);
        list.fill_circle(zombie.pos + EYE_OFFSET * Vec2::new(-1.0, 1.0), EYE_RADIUS, ZOMBIE_EYES);
        list.fill_circle(zombie.pos + EYE_OFFSET, EYE_RADIUS, ZOMBIE_EYES);
        // Frown along the lower rim
        list.stroke_arc(zombie.pos, r, (0.2, PI - 0.2), 2.0, ZOMBIE_MOUTH);
    }

    for bullet in &state.bullets {
        list.fill_circle(bullet.pos, config.bullet_radius, BULLET);
    }

    let player = &state.player;
    list.fill_circle(player.pos, player.radius, PLAYER);
    let dir = angle_to_dir(player.angle);
    let muzzle = player.radius - BARREL_LENGTH / 2.0;
    list.line(
        player.pos + dir * muzzle,
        player.pos + dir * (muzzle + BARREL_LENGTH),
        BARREL_WIDTH,
        BARREL,
    );

    if !state.phase.is_running() {
        list.veil(state.size(), VEIL);
    }
}
