//! Zombie Rush fixed-timestep update

use glam::Vec2;

use super::state::ZombieState;
use crate::sim::{
    Key, TickInput, circle_off_screen, circles_overlap, clamp_to_bounds, direction_from_axes,
    facing_angle, step_toward,
};

/// Advance the game by one tick
pub fn tick(state: &mut ZombieState, input: &TickInput) {
    if let Some(pointer) = input.pointer {
        state.aim = pointer;
    }
    if !state.phase.is_running() {
        return;
    }
    state.time_ticks += 1;

    for &click in &input.clicks {
        state.fire_at(click);
    }

    update_player(state, input);
    advance_bullets(state);
    advance_zombies(state);

    if state.phase.is_running() {
        spawn_zombies(state);
    }
}

fn update_player(state: &mut ZombieState, input: &TickInput) {
    let held = &input.held;
    let dir = direction_from_axes(
        held.any(&[Key::W, Key::ArrowUp]),
        held.any(&[Key::S, Key::ArrowDown]),
        held.any(&[Key::A, Key::ArrowLeft]),
        held.any(&[Key::D, Key::ArrowRight]),
    );

    let player = &mut state.player;
    if dir != Vec2::ZERO {
        let r = player.radius;
        player.pos = clamp_to_bounds(
            player.pos + dir * state.config.player_speed,
            Vec2::splat(r),
            Vec2::new(state.config.width - r, state.config.height - r),
        );
    }
    player.angle = facing_angle(player.pos, state.aim);
}

/// Move bullets, drop those off screen, and resolve bullet/zombie hits.
/// A bullet stops at the first zombie it touches.
fn advance_bullets(state: &mut ZombieState) {
    let (w, h) = (state.config.width, state.config.height);
    let bullet_r = state.config.bullet_radius;
    let zombie_r = state.config.zombie_radius;

    let mut i = state.bullets.len();
    while i > 0 {
        i -= 1;
        let bullet = &mut state.bullets[i];
        bullet.pos += bullet.vel;
        let pos = bullet.pos;
        if circle_off_screen(pos, bullet_r, w, h) {
            state.bullets.remove(i);
            continue;
        }

        if let Some(j) = state
            .zombies
            .iter()
            .rposition(|z| circles_overlap(pos, bullet_r, z.pos, zombie_r))
        {
            state.bullets.remove(i);
            let zombie = &mut state.zombies[j];
            zombie.health = zombie.health.saturating_sub(1);
            if zombie.health == 0 {
                state.zombies.remove(j);
                state.score += state.config.points_per_kill;
            }
        }
    }
}

fn advance_zombies(state: &mut ZombieState) {
    let player_pos = state.player.pos;
    let reach = state.player.radius + state.config.zombie_radius;
    let damage = state.config.zombie_damage;
    let mut bites = 0u32;

    state.zombies.retain_mut(|zombie| {
        zombie.pos = step_toward(zombie.pos, player_pos, zombie.speed);
        if zombie.pos.distance(player_pos) < reach {
            bites += 1;
            false
        } else {
            true
        }
    });

    if bites > 0 {
        let player = &mut state.player;
        player.health = player.health.saturating_sub(bites.saturating_mul(damage));
        log::debug!("Bitten {bites}x, health {}", player.health);
        if player.health == 0 && state.phase.enter_over() {
            log::info!("Zombie Rush over: score {}", state.score);
        }
    }
}

fn spawn_zombies(state: &mut ZombieState) {
    state.spawn_timer += 1;
    if state.spawn_timer < state.spawn_interval {
        return;
    }

    let count = state.batch_size();
    for _ in 0..count {
        state.spawn_random_zombie();
    }
    state.spawn_timer = 0;
    log::debug!("Spawned {count} zombies, next batch in {} ticks", state.spawn_interval);

    let floor = state.config.min_spawn_interval_ticks;
    if state.spawn_interval > floor {
        state.spawn_interval = state
            .spawn_interval
            .saturating_sub(state.config.spawn_interval_step)
            .max(floor);
    }

    if state.score > 0 && state.score % state.config.difficulty_score_period == 0 {
        state.difficulty += state.config.difficulty_step;
        log::info!("Difficulty up to {:.1} at score {}", state.difficulty, state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::zombie::ZombieConfig;
    use crate::sim::GamePhase;

    fn idle() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn test_diagonal_speed_matches_axial() {
        let mut state = ZombieState::with_seed(1);
        tick(&mut state, &TickInput::holding(&[Key::D]));
        assert!((state.player.pos - Vec2::new(404.0, 300.0)).length() < 1e-4);

        let mut state = ZombieState::with_seed(1);
        tick(&mut state, &TickInput::holding(&[Key::W, Key::ArrowRight]));
        let moved = state.player.pos - Vec2::new(400.0, 300.0);
        assert!((moved.length() - 4.0).abs() < 1e-4);
        assert!(moved.x > 0.0 && moved.y < 0.0);
    }

    #[test]
    fn test_player_stays_inside() {
        let mut state = ZombieState::with_seed(1);
        state.config.spawn_interval_ticks = u32::MAX;
        state.spawn_interval = u32::MAX;
        let input = TickInput::holding(&[Key::A, Key::W]);
        for _ in 0..300 {
            tick(&mut state, &input);
        }
        assert_eq!(state.player.pos, Vec2::new(15.0, 15.0));
    }

    #[test]
    fn test_facing_follows_pointer() {
        let mut state = ZombieState::with_seed(1);
        let mut input = idle();
        input.pointer_move(Vec2::new(400.0, 500.0));
        tick(&mut state, &input);
        assert!((state.player.angle - std::f32::consts::FRAC_PI_2).abs() < 1e-5);

        // Leaving the canvas keeps the last aim point
        input.pointer_leave();
        tick(&mut state, &input);
        assert_eq!(state.aim, Vec2::new(400.0, 500.0));
    }

    #[test]
    fn test_shot_kills_zombie() {
        let mut state = ZombieState::with_seed(1);
        state.spawn_zombie_at(Vec2::new(500.0, 300.0), 0.0);
        let mut input = idle();
        input.click(Vec2::new(600.0, 300.0));
        tick(&mut state, &input);
        assert_eq!(state.bullets.len(), 1);

        // Bullet at 400 + 8n, touching once within 22 px of x = 500
        for _ in 0..9 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.score, 10);
        assert!(state.zombies.is_empty());
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_tough_zombie_takes_several_hits() {
        let mut state = ZombieState::with_seed(1);
        state.config.zombie_health = 2;
        state.spawn_zombie_at(Vec2::new(500.0, 300.0), 0.0);
        state.fire_at(Vec2::new(600.0, 300.0));
        for _ in 0..12 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.zombies.len(), 1);
        assert_eq!(state.zombies[0].health, 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_bullets_leave_the_field() {
        let mut state = ZombieState::with_seed(1);
        state.fire_at(Vec2::new(800.0, 300.0));
        // 400 px to the edge plus the bullet radius at 8 px per tick
        for _ in 0..50 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.bullets.len(), 1);
        tick(&mut state, &idle());
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_contact_damage_and_game_over() {
        let mut state = ZombieState::with_seed(1);
        state.spawn_zombie_at(Vec2::new(430.0, 300.0), 1.0);
        tick(&mut state, &idle());
        assert_eq!(state.player.health, 90);
        assert!(state.zombies.is_empty());

        state.player.health = 10;
        state.spawn_zombie_at(Vec2::new(400.0, 330.0), 1.0);
        state.spawn_zombie_at(Vec2::new(370.0, 300.0), 1.0);
        tick(&mut state, &idle());
        assert_eq!(state.player.health, 0);
        assert_eq!(state.phase, GamePhase::Over);

        // Clicks are ignored once over
        let mut input = idle();
        input.click(Vec2::new(0.0, 0.0));
        tick(&mut state, &input);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_huge_bite_damage_clamps_health() {
        let config = ZombieConfig {
            zombie_damage: u32::MAX,
            ..Default::default()
        };
        let mut state = ZombieState::new(config, 1).unwrap();
        state.spawn_zombie_at(Vec2::new(400.0, 330.0), 1.0);
        state.spawn_zombie_at(Vec2::new(370.0, 300.0), 1.0);
        tick(&mut state, &idle());
        assert_eq!(state.player.health, 0);
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_spawn_schedule() {
        let mut state = ZombieState::with_seed(3);
        for _ in 0..179 {
            tick(&mut state, &idle());
        }
        assert!(state.zombies.is_empty());
        tick(&mut state, &idle());
        assert_eq!(state.zombies.len(), 1);
        assert_eq!(state.spawn_interval, 178);
    }

    #[test]
    fn test_spawn_interval_floor() {
        let mut state = ZombieState::with_seed(3);
        state.spawn_interval = 61;
        state.spawn_timer = 60;
        spawn_zombies(&mut state);
        assert_eq!(state.spawn_interval, 60);

        state.spawn_timer = 59;
        spawn_zombies(&mut state);
        assert_eq!(state.spawn_interval, 60);
    }

    #[test]
    fn test_difficulty_rises_on_round_scores() {
        let mut state = ZombieState::with_seed(3);
        state.score = 100;
        state.spawn_timer = state.spawn_interval - 1;
        spawn_zombies(&mut state);
        assert!((state.difficulty - 1.2).abs() < 1e-6);

        state.score = 110;
        state.spawn_timer = state.spawn_interval - 1;
        spawn_zombies(&mut state);
        assert!((state.difficulty - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = ZombieState::with_seed(8);
        let mut b = ZombieState::with_seed(8);
        let input = TickInput::holding(&[Key::S]);
        for _ in 0..900 {
            tick(&mut a, &input);
            tick(&mut b, &input);
        }
        assert_eq!(a.zombies, b.zombies);
        assert_eq!(a.player, b.player);
        assert_eq!(a.phase, b.phase);
    }
}
