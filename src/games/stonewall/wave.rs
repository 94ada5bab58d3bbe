//! Wave state machine
//!
//! A wave spawns its queue one enemy at a time, then idles until the field
//! is clear. Clearing the field advances the wave counter and starts a
//! breather; when the breather runs out the next wave is rolled and starts
//! spawning.

use super::config::WaveConfig;
use super::state::EnemyKind;
use crate::sim::GameRng;

/// Where the wave cycle currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavePhase {
    /// Enemies still queued
    Spawning,
    /// Queue drained, waiting for the field to clear
    Idle,
    /// Breather before the next wave
    Pause { ticks_left: u32 },
}

#[derive(Debug, Clone)]
pub struct WaveManager {
    /// Wave number shown to the player
    pub wave: u32,
    pub phase: WavePhase,
    queue: Vec<EnemyKind>,
    spawned: usize,
    spawn_cooldown: u32,
}

impl WaveManager {
    /// Manager for `starting_wave`, idle until [`Self::start_wave`]
    pub fn new(starting_wave: u32) -> Self {
        Self {
            wave: starting_wave,
            phase: WavePhase::Idle,
            queue: Vec::new(),
            spawned: 0,
            spawn_cooldown: 0,
        }
    }

    /// Roll the current wave's composition and begin spawning it
    pub fn start_wave(&mut self, rng: &mut GameRng, rules: &WaveConfig) {
        self.queue = compose(self.wave, rng, rules);
        self.spawned = 0;
        self.phase = if self.queue.is_empty() {
            WavePhase::Idle
        } else {
            WavePhase::Spawning
        };
        log::info!("Wave {} begins: {} enemies", self.wave, self.queue.len());
    }

    /// Advance one tick. Returns the kind of enemy to put on the road, if any.
    pub fn update(
        &mut self,
        rng: &mut GameRng,
        rules: &WaveConfig,
        field_clear: bool,
    ) -> Option<EnemyKind> {
        self.spawn_cooldown = self.spawn_cooldown.saturating_sub(1);

        match self.phase {
            WavePhase::Pause { ticks_left: 0 } => {
                self.start_wave(rng, rules);
                None
            }
            WavePhase::Pause { ticks_left } => {
                self.phase = WavePhase::Pause {
                    ticks_left: ticks_left - 1,
                };
                None
            }
            WavePhase::Idle => {
                if field_clear {
                    self.wave += 1;
                    self.phase = WavePhase::Pause {
                        ticks_left: rules.pause_ticks,
                    };
                    log::debug!("Field clear, wave {} in {} ticks", self.wave, rules.pause_ticks);
                }
                None
            }
            WavePhase::Spawning => {
                if self.spawn_cooldown > 0 {
                    return None;
                }
                let kind = self.queue.get(self.spawned).copied();
                self.spawned += 1;
                self.spawn_cooldown = rules.spawn_interval_ticks;
                if self.spawned >= self.queue.len() {
                    self.phase = WavePhase::Idle;
                }
                kind
            }
        }
    }

    /// Enemies of the current wave not yet on the road
    pub fn remaining(&self) -> usize {
        self.queue.len().saturating_sub(self.spawned)
    }

    /// Whole seconds left in the breather, if in one
    pub fn pause_seconds(&self) -> Option<u32> {
        match self.phase {
            WavePhase::Pause { ticks_left } => {
                Some(ticks_left.div_ceil(crate::consts::TICKS_PER_SECOND))
            }
            _ => None,
        }
    }
}

/// Roll the enemy kinds for wave `wave`
pub fn compose(wave: u32, rng: &mut GameRng, rules: &WaveConfig) -> Vec<EnemyKind> {
    (0..rules.size_of(wave))
        .map(|_| {
            let mut kind = EnemyKind::Basic;
            if wave >= rules.fast_from_wave && rng.chance(rules.fast_chance) {
                kind = EnemyKind::Fast;
            }
            // A tank roll overrides a fast one
            if wave >= rules.tank_from_wave && rng.chance(rules.tank_chance) {
                kind = EnemyKind::Tank;
            }
            kind
        })
        .collect()
}
