//! Deterministic simulation core shared by all three games
//!
//! Everything here must stay pure and deterministic:
//! - Fixed timestep only (speeds are per tick)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod input;
pub mod motion;
pub mod phase;
pub mod rng;

pub use collision::{Rect, circle_off_screen, circles_overlap, distance_to_segment};
pub use config::{ConfigError, Validate};
pub use input::{Key, KeySet, TickInput};
pub use motion::{angle_to_dir, clamp_to_bounds, direction_from_axes, facing_angle, step_toward};
pub use phase::GamePhase;
pub use rng::GameRng;
