//! Starship Blaster render pass

use glam::Vec2;

use super::state::BlasterState;
use crate::renderer::{Color, DrawList};

const BACKGROUND: Color = Color::hex(0x000814);
const ENEMY: Color = Color::hex(0x00ff00);
const ENEMY_DETAIL: Color = Color::hex(0xffa500);
const BULLET: Color = Color::hex(0xff0000);
const PLAYER: Color = Color::WHITE;
const VEIL: Color = Color::BLACK.with_alpha(0.6);

pub fn draw(state: &BlasterState, list: &mut DrawList) {
    list.clear(BACKGROUND);

    for enemy in &state.enemies {
        let pos = enemy.rect.pos;
        list.fill_rect(pos, enemy.rect.size, ENEMY);
        // Eyes and mouth
        list.fill_rect(pos + Vec2::new(10.0, 10.0), Vec2::splat(5.0), ENEMY_DETAIL);
        list.fill_rect(pos + Vec2::new(25.0, 10.0), Vec2::splat(5.0), ENEMY_DETAIL);
        list.fill_rect(pos + Vec2::new(15.0, 25.0), Vec2::new(10.0, 5.0), ENEMY_DETAIL);
    }

    for bullet in &state.bullets {
        list.fill_rect(bullet.rect.pos, bullet.rect.size, BULLET);
    }

    let ship = state.player;
    list.fill_rect(ship.pos, ship.size, PLAYER);
    list.fill_triangle(
        Vec2::new(ship.pos.x + ship.size.x / 2.0, ship.top() - 10.0),
        Vec2::new(ship.left() + 10.0, ship.top()),
        Vec2::new(ship.right() - 10.0, ship.top()),
        PLAYER,
    );

    if !state.phase.is_running() {
        list.veil(state.size(), VEIL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCmd;

    #[test]
    fn test_z_order_and_veil() {
        let mut state = BlasterState::with_seed(1);
        state.spawn_enemy_at(100.0, 2.0);
        state.fire();

        let mut list = DrawList::new();
        draw(&state, &mut list);
        let cmds = list.commands();
        // clear, enemy body + 3 details, bullet, ship body, nose
        assert_eq!(cmds.len(), 8);
        assert!(matches!(cmds[0], DrawCmd::Clear(_)));
        assert!(matches!(&cmds[1], DrawCmd::FillRect { color, .. } if *color == ENEMY));
        assert!(matches!(&cmds[5], DrawCmd::FillRect { color, .. } if *color == BULLET));
        assert!(matches!(cmds[7], DrawCmd::FillTriangle { .. }));

        state.phase.enter_over();
        draw(&state, &mut list);
        assert_eq!(list.len(), 9);
        assert!(matches!(&list.commands()[8], DrawCmd::FillRect { color, .. } if *color == VEIL));
    }
}
