//! Stonewall render pass

use glam::Vec2;

use super::state::{EnemyKind, StonewallState};
use crate::renderer::{Color, DrawList};

const GRASS: Color = Color::hex(0x27ae60);
const ROAD: Color = Color::hex(0x8b4513);
const ROAD_EDGE: Color = Color::hex(0x654321);
const STONE: Color = Color::hex(0x7f8c8d);
const STONE_LIGHT: Color = Color::hex(0x95a5a6);
const FLAG: Color = Color::hex(0xe74c3c);
const SLATE: Color = Color::hex(0x2c3e50);
const TOWER: Color = Color::hex(0x3498db);
const TOWER_RIM: Color = Color::hex(0x2980b9);
const RANGE: Color = Color::hex(0x3498db).with_alpha(0.3);
const BULLET: Color = Color::hex(0xecf0f1);
const VEIL: Color = Color::BLACK.with_alpha(0.6);

const BAR_SIZE: Vec2 = Vec2::new(30.0, 6.0);
const BULLET_RADIUS: f32 = 3.0;

fn enemy_color(kind: EnemyKind) -> Color {
    match kind {
        EnemyKind::Basic => Color::hex(0xe74c3c),
        EnemyKind::Fast => Color::hex(0xf1c40f),
        EnemyKind::Tank => Color::hex(0x9b59b6),
    }
}

/// Health bar fill: green above half, amber above a quarter, red below
pub fn health_color(fraction: f32) -> Color {
    if fraction > 0.5 {
        Color::hex(0x27ae60)
    } else if fraction > 0.25 {
        Color::hex(0xf39c12)
    } else {
        Color::hex(0xe74c3c)
    }
}

pub fn draw(state: &StonewallState, list: &mut DrawList) {
    let config = &state.config;
    let tower_radius = config.tower.radius;

    list.clear(GRASS);

    list.polyline(config.path.clone(), 32.0, ROAD_EDGE);
    list.polyline(config.path.clone(), 30.0, ROAD);

    draw_castle(list, config.castle());

    for tower in &state.towers {
        if state.shows_range(tower) {
            list.dashed_circle(tower.pos, config.tower.range, 2.0, RANGE);
        }
        list.fill_circle(tower.pos, tower_radius, TOWER);
        list.stroke_circle(tower.pos, tower_radius, 3.0, TOWER_RIM);

        if let Some(target) = tower.target.and_then(|id| state.enemy(id)) {
            let dir = (target.pos - tower.pos).normalize_or_zero();
            list.line(tower.pos, tower.pos + dir * tower_radius, 4.0, SLATE);
        }
    }

    for enemy in &state.enemies {
        if !enemy.is_alive() {
            continue;
        }
        list.fill_circle(enemy.pos, config.enemy_radius, enemy_color(enemy.kind));

        let bar = Vec2::new(
            enemy.pos.x - BAR_SIZE.x / 2.0,
            enemy.pos.y - config.enemy_radius - 15.0,
        );
        let fraction = enemy.health_fraction();
        list.fill_rect(bar, BAR_SIZE, SLATE);
        list.fill_rect(bar, Vec2::new(BAR_SIZE.x * fraction, BAR_SIZE.y), health_color(fraction));
    }

    for bullet in &state.bullets {
        list.fill_circle(bullet.pos, BULLET_RADIUS, BULLET);
    }

    if let Some(pos) = state.hover
        && state.shows_preview()
    {
        list.fill_circle(pos, tower_radius, TOWER.with_alpha(0.7));
        list.dashed_circle(pos, config.tower.range, 2.0, RANGE.with_alpha(0.21));
    }

    if !state.phase.is_running() {
        list.veil(state.size(), VEIL);
    }
}

fn draw_castle(list: &mut DrawList, at: Vec2) {
    list.fill_rect(at - Vec2::splat(25.0), Vec2::splat(50.0), STONE);
    list.fill_rect(at - Vec2::splat(20.0), Vec2::splat(40.0), STONE_LIGHT);
    list.fill_rect(at + Vec2::new(-5.0, -35.0), Vec2::new(15.0, 10.0), FLAG);
    list.line(at - Vec2::new(0.0, 25.0), at - Vec2::new(0.0, 35.0), 2.0, SLATE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCmd;

    #[test]
    fn test_health_color_bands() {
        assert_eq!(health_color(1.0), Color::hex(0x27ae60));
        assert_eq!(health_color(0.5), Color::hex(0xf39c12));
        assert_eq!(health_color(0.3), Color::hex(0xf39c12));
        assert_eq!(health_color(0.25), Color::hex(0xe74c3c));
    }

    #[test]
    fn test_enemy_health_bar_width() {
        let mut state = StonewallState::with_seed(1);
        state.spawn_enemy(EnemyKind::Tank);
        state.enemies[0].health = 120.0;

        let mut list = DrawList::new();
        draw(&state, &mut list);
        let amber = health_color(0.4);
        let bar = list.commands().iter().find_map(|cmd| match cmd {
            DrawCmd::FillRect { size, color, .. } if *color == amber => Some(*size),
            _ => None,
        });
        let bar = bar.unwrap();
        assert!((bar.x - 12.0).abs() < 1e-4);
        assert_eq!(bar.y, 6.0);
    }

    #[test]
    fn test_range_ring_only_near_hover() {
        let mut state = StonewallState::with_seed(1);
        let site = Vec2::new(100.0, 300.0);
        state.place_tower(site).unwrap();
        let dashed = |list: &DrawList| {
            list.commands()
                .iter()
                .filter(|c| matches!(c, DrawCmd::StrokeCircle { dashed: true, .. }))
                .count()
        };

        let mut list = DrawList::new();
        draw(&state, &mut list);
        assert_eq!(dashed(&list), 0);

        // Pointer on the tower: its range ring, no preview
        state.hover(Some(site + Vec2::new(5.0, 0.0)));
        draw(&state, &mut list);
        assert_eq!(dashed(&list), 1);

        // Pointer on open grass: preview ring only
        state.hover(Some(Vec2::new(100.0, 400.0)));
        draw(&state, &mut list);
        assert_eq!(dashed(&list), 1);
        assert!(list.commands().iter().any(
            |c| matches!(c, DrawCmd::FillCircle { color, .. } if *color == TOWER.with_alpha(0.7))
        ));

        state.gold = 0;
        draw(&state, &mut list);
        assert_eq!(dashed(&list), 0);
    }

    #[test]
    fn test_veil_when_over() {
        let mut state = StonewallState::with_seed(1);
        state.phase.enter_over();
        let mut list = DrawList::new();
        draw(&state, &mut list);
        assert!(matches!(
            list.commands().last(),
            Some(DrawCmd::FillRect { color, .. }) if *color == VEIL
        ));
    }
}
