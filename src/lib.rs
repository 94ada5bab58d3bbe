//! Arcade Cabinet - three canvas arcade games on one deterministic tick core
//!
//! Core modules:
//! - `sim`: Shared deterministic pieces (collision, motion, input, RNG, phase)
//! - `games`: Starship Blaster, Stonewall and Zombie Rush
//! - `renderer`: Immediate-mode draw lists and the WebGPU pipeline
//! - `hud`: DOM-facing score/health/wave readouts
//! - `logging`: Logger setup for browser and native builds

pub mod games;
pub mod hud;
pub mod logging;
pub mod renderer;
pub mod sim;

pub use games::GameKind;
pub use hud::HudItem;
pub use games::Arcade;
pub use sim::{GamePhase, TickInput};

/// Frame-driver constants shared by every game
pub mod consts {
    /// Simulation ticks per second. Entity speeds are expressed per tick.
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Convert a millisecond duration into whole simulation ticks (rounded)
#[inline]
pub fn ticks_from_millis(ms: u32) -> u32 {
    (ms * consts::TICKS_PER_SECOND + 500) / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_from_millis() {
        assert_eq!(ticks_from_millis(500), 30);
        assert_eq!(ticks_from_millis(5000), 300);
        assert_eq!(ticks_from_millis(0), 0);
        assert_eq!(ticks_from_millis(16), 1);
    }
}
