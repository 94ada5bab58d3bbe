//! Stonewall fixed-timestep update

use glam::Vec2;

use super::state::{Bullet, Enemy, EnemyId, StonewallState};
use crate::sim::{TickInput, step_toward};

/// Advance the game by one tick
pub fn tick(state: &mut StonewallState, input: &TickInput) {
    apply_input(state, input);

    if !state.phase.is_running() {
        return;
    }
    state.time_ticks += 1;

    spawn_from_wave(state);
    advance_enemies(state);
    update_towers(state);
    advance_bullets(state);

    if state.castle_health == 0 && state.phase.enter_over() {
        log::info!(
            "Stonewall over: castle fell on wave {} with {} gold",
            state.waves.wave,
            state.gold
        );
    }
}

fn apply_input(state: &mut StonewallState, input: &TickInput) {
    for &click in &input.clicks {
        if let Err(err) = state.place_tower(click) {
            log::debug!("Tower rejected at ({:.0}, {:.0}): {err}", click.x, click.y);
        }
    }
    state.hover(input.pointer);
}

fn spawn_from_wave(state: &mut StonewallState) {
    let field_clear = state.enemies.is_empty();
    if let Some(kind) = state
        .waves
        .update(&mut state.rng, &state.config.waves, field_clear)
    {
        state.spawn_enemy(kind);
    }
}

/// Walk one enemy toward its current waypoint
fn walk(enemy: &mut Enemy, path: &[Vec2], tolerance: f32) {
    let Some(&target) = path.get(enemy.waypoint) else {
        enemy.reached_end = true;
        return;
    };
    enemy.pos = step_toward(enemy.pos, target, enemy.speed);
    if enemy.pos.distance(target) < tolerance {
        enemy.waypoint += 1;
    }
}

fn advance_enemies(state: &mut StonewallState) {
    let path = &state.config.path;
    let tolerance = state.config.waypoint_tolerance;
    let leak = state.config.leak_damage;
    let mut castle = state.castle_health;
    let mut gold = state.gold;

    state.enemies.retain_mut(|enemy| {
        if !enemy.is_alive() {
            gold = gold.saturating_add(enemy.reward);
            return false;
        }
        walk(enemy, path, tolerance);
        if enemy.reached_end {
            castle = castle.saturating_sub(leak);
            log::debug!("{:?} enemy {} reached the castle", enemy.kind, enemy.id.0);
            return false;
        }
        true
    });

    state.castle_health = castle;
    state.gold = gold;
}

/// Closest live enemy within `range` of `from`
pub fn find_target(from: Vec2, range: f32, enemies: &[Enemy]) -> Option<EnemyId> {
    enemies
        .iter()
        .filter(|e| e.is_alive())
        .map(|e| (e.id, from.distance(e.pos)))
        .filter(|&(_, d)| d <= range)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

fn update_towers(state: &mut StonewallState) {
    let tower_cfg = &state.config.tower;
    for tower in &mut state.towers {
        tower.cooldown = tower.cooldown.saturating_sub(1);
        tower.target = find_target(tower.pos, tower_cfg.range, &state.enemies);

        if let Some(target) = tower.target
            && tower.cooldown == 0
        {
            state.bullets.push(Bullet {
                pos: tower.pos,
                target,
                damage: tower_cfg.damage,
                speed: tower_cfg.bullet_speed,
            });
            tower.cooldown = tower_cfg.reload_ticks;
        }
    }
}

fn advance_bullets(state: &mut StonewallState) {
    let hit_radius = state.config.enemy_radius;
    let enemies = &mut state.enemies;

    state.bullets.retain_mut(|bullet| {
        let Some(target) = enemies
            .iter_mut()
            .find(|e| e.id == bullet.target && e.is_alive())
        else {
            return false;
        };

        bullet.pos = step_toward(bullet.pos, target.pos, bullet.speed);
        if bullet.pos.distance(target.pos) < hit_radius {
            target.health -= bullet.damage;
            return false;
        }
        true
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::stonewall::state::EnemyKind;
    use crate::games::stonewall::wave::WavePhase;
    use crate::sim::GamePhase;

    fn idle() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn test_enemy_enters_on_first_tick() {
        let mut state = StonewallState::with_seed(1);
        tick(&mut state, &idle());
        assert_eq!(state.enemies.len(), 1);
        // Spawned on the first waypoint, which counts as reached
        assert_eq!(state.enemies[0].pos, Vec2::new(50.0, 100.0));
        assert_eq!(state.enemies[0].waypoint, 1);

        tick(&mut state, &idle());
        assert!((state.enemies[0].pos - Vec2::new(51.0, 100.0)).length() < 1e-4);
    }

    #[test]
    fn test_enemy_follows_waypoints() {
        let mut state = StonewallState::with_seed(1);
        let id = state.spawn_enemy(EnemyKind::Fast);
        state.waves.phase = WavePhase::Idle;

        // One tick to claim the spawn waypoint, then 2 px per tick along x
        for _ in 0..70 {
            tick(&mut state, &idle());
        }
        let enemy = state.enemy(id).unwrap();
        assert!((enemy.pos - Vec2::new(188.0, 100.0)).length() < 1e-3);
        assert_eq!(enemy.waypoint, 1);

        // Inside the 10 px tolerance: the corner counts as reached
        tick(&mut state, &idle());
        tick(&mut state, &idle());
        assert_eq!(state.enemy(id).unwrap().waypoint, 2);

        // Now heading down the second leg
        tick(&mut state, &idle());
        assert!(state.enemy(id).unwrap().pos.y > 100.0);
    }

    #[test]
    fn test_leak_damages_castle() {
        let mut state = StonewallState::with_seed(1);
        state.waves.phase = WavePhase::Idle;
        let id = state.spawn_enemy(EnemyKind::Basic);
        let last = state.config.path.len();
        if let Some(e) = state.enemies.iter_mut().find(|e| e.id == id) {
            e.pos = state.config.castle();
            e.waypoint = last;
        }

        tick(&mut state, &idle());
        assert!(state.enemies.is_empty());
        assert_eq!(state.castle_health, 90);
    }

    #[test]
    fn test_castle_health_clamps_and_ends_game() {
        let mut state = StonewallState::with_seed(1);
        state.waves.phase = WavePhase::Idle;
        state.castle_health = 5;
        state.spawn_enemy(EnemyKind::Basic);
        state.enemies[0].waypoint = state.config.path.len();

        tick(&mut state, &idle());
        assert_eq!(state.castle_health, 0);
        assert_eq!(state.phase, GamePhase::Over);

        // Frozen once over
        let ticks = state.time_ticks;
        tick(&mut state, &idle());
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_target_is_closest_in_range() {
        let mut state = StonewallState::with_seed(1);
        let far = state.spawn_enemy(EnemyKind::Basic);
        let near = state.spawn_enemy(EnemyKind::Basic);
        let out = state.spawn_enemy(EnemyKind::Basic);
        state.enemies[0].pos = Vec2::new(190.0, 300.0);
        state.enemies[1].pos = Vec2::new(130.0, 300.0);
        state.enemies[2].pos = Vec2::new(250.0, 300.0);

        let tower = Vec2::new(100.0, 300.0);
        assert_eq!(find_target(tower, 100.0, &state.enemies), Some(near));

        state.enemies[1].health = 0.0;
        assert_eq!(find_target(tower, 100.0, &state.enemies), Some(far));

        // Exactly at range counts
        state.enemies[0].pos = Vec2::new(200.0, 300.0);
        assert_eq!(find_target(tower, 100.0, &state.enemies), Some(far));

        state.enemies[0].pos = Vec2::new(201.0, 300.0);
        assert_eq!(find_target(tower, 100.0, &state.enemies), None);
        assert_ne!(find_target(tower, 200.0, &state.enemies), Some(out));
    }

    #[test]
    fn test_tower_fires_and_reloads() {
        let mut state = StonewallState::with_seed(1);
        state.waves.phase = WavePhase::Idle;
        state.place_tower(Vec2::new(100.0, 180.0)).unwrap();
        state.spawn_enemy(EnemyKind::Tank);
        state.enemies[0].speed = 0.0;

        tick(&mut state, &idle());
        assert_eq!(state.bullets.len(), 1);
        assert!(state.towers[0].target.is_some());

        // The first shot lands while the tower reloads
        for _ in 0..29 {
            tick(&mut state, &idle());
        }
        assert!(state.bullets.is_empty());
        assert_eq!(state.enemies[0].health, 275.0);

        // Second shot comes 30 ticks after the first
        tick(&mut state, &idle());
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn test_kill_credits_reward() {
        let mut state = StonewallState::with_seed(1);
        state.waves.phase = WavePhase::Idle;
        let id = state.spawn_enemy(EnemyKind::Fast);
        state.enemies[0].speed = 0.0;
        state.enemies[0].health = 25.0;
        state.bullets.push(Bullet {
            pos: state.enemies[0].pos + Vec2::new(12.0, 0.0),
            target: id,
            damage: 25.0,
            speed: 5.0,
        });

        tick(&mut state, &idle());
        assert!(state.bullets.is_empty());
        assert!(!state.enemies[0].is_alive());

        // Removed and paid out on the next enemy pass
        tick(&mut state, &idle());
        assert!(state.enemy(id).is_none());
        assert_eq!(state.gold, 415);
    }

    #[test]
    fn test_reward_saturates_gold() {
        let mut state = StonewallState::with_seed(1);
        state.waves.phase = WavePhase::Idle;
        state.gold = u32::MAX - 5;
        state.spawn_enemy(EnemyKind::Basic);
        state.enemies[0].health = 0.0;
        tick(&mut state, &idle());
        assert!(state.enemies.is_empty());
        assert_eq!(state.gold, u32::MAX);
    }

    #[test]
    fn test_bullet_dies_with_missing_target() {
        let mut state = StonewallState::with_seed(1);
        state.waves.phase = WavePhase::Idle;
        state.bullets.push(Bullet {
            pos: Vec2::new(300.0, 300.0),
            target: EnemyId(999),
            damage: 25.0,
            speed: 5.0,
        });
        advance_bullets(&mut state);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_clicks_place_towers() {
        let mut state = StonewallState::with_seed(1);
        let mut input = idle();
        input.click(Vec2::new(100.0, 300.0));
        input.click(Vec2::new(125.0, 100.0));
        tick(&mut state, &input);
        assert_eq!(state.towers.len(), 1);
        assert_eq!(state.gold, 350);
        assert_eq!(state.hover, None, "pointer rests on the last click, which is on the road");
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = StonewallState::with_seed(5);
        let mut b = StonewallState::with_seed(5);
        let mut input = idle();
        input.click(Vec2::new(260.0, 200.0));
        tick(&mut a, &input);
        tick(&mut b, &input);
        for _ in 0..1500 {
            tick(&mut a, &idle());
            tick(&mut b, &idle());
        }
        assert_eq!(a.enemies, b.enemies);
        assert_eq!(a.gold, b.gold);
        assert_eq!(a.waves.wave, b.waves.wave);
    }
}
