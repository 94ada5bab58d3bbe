//! Starship Blaster fixed-timestep update

use super::state::BlasterState;
use crate::sim::{Key, TickInput};

/// Advance the game by one tick
pub fn tick(state: &mut BlasterState, input: &TickInput) {
    // The trigger re-arms on release even while the game is over
    if input.released.contains(Key::Space) {
        state.can_shoot = true;
    }

    if !state.phase.is_running() {
        if input.pressed.contains(Key::Enter) {
            state.reset();
            log::info!("Starship Blaster restarted");
        }
        return;
    }

    state.time_ticks += 1;

    update_player(state, input);
    spawn_enemies(state);
    advance_bullets(state);
    advance_enemies(state);
    resolve_hits(state);
}

fn update_player(state: &mut BlasterState, input: &TickInput) {
    let speed = state.config.player_speed;
    let mut x = state.player.pos.x;
    if input.held.contains(Key::ArrowLeft) {
        x -= speed;
    }
    if input.held.contains(Key::ArrowRight) {
        x += speed;
    }
    state.player.pos.x = x.clamp(0.0, state.config.width - state.config.player_width);

    if input.held.contains(Key::Space) && state.can_shoot {
        state.fire();
        state.can_shoot = false;
    }
}

fn spawn_enemies(state: &mut BlasterState) {
    state.spawn_timer += 1;
    if state.spawn_timer > state.config.spawn_interval_ticks {
        state.spawn_random_enemy();
        state.spawn_timer = 0;
    }
}

fn advance_bullets(state: &mut BlasterState) {
    for bullet in &mut state.bullets {
        bullet.rect.pos.y -= bullet.speed;
    }
    // Gone once fully above the top edge
    state.bullets.retain(|b| b.rect.bottom() >= 0.0);
}

fn advance_enemies(state: &mut BlasterState) {
    let floor = state.config.height;
    let mut breached = false;
    state.enemies.retain_mut(|enemy| {
        enemy.rect.pos.y += enemy.speed;
        if enemy.rect.bottom() >= floor {
            breached = true;
            false
        } else {
            true
        }
    });

    if breached && state.phase.enter_over() {
        log::info!("Starship Blaster over: score {}", state.score);
    }
}

/// Each bullet destroys at most one enemy (the most recently spawned it touches)
fn resolve_hits(state: &mut BlasterState) {
    let mut i = state.bullets.len();
    while i > 0 {
        i -= 1;
        let shot = state.bullets[i].rect;
        if let Some(j) = state.enemies.iter().rposition(|e| e.rect.overlaps(&shot)) {
            state.bullets.remove(i);
            state.enemies.remove(j);
            state.score += state.config.points_per_kill;
        }
    }
}
