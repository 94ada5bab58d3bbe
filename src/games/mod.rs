//! The three games and the trait the frame driver drives them through

pub mod blaster;
pub mod stonewall;
pub mod zombie;

use std::fmt;
use std::str::FromStr;

use glam::Vec2;

use crate::hud::HudItem;
use crate::renderer::DrawList;
use crate::sim::{ConfigError, GamePhase, TickInput};

/// A game as seen by a frame driver (browser loop, headless runner, tests)
pub trait Arcade {
    /// Short identifier (`blaster`, `stonewall`, `zombie`)
    fn name(&self) -> &'static str;

    /// Playfield size in pixels
    fn size(&self) -> Vec2;

    fn phase(&self) -> GamePhase;

    /// Advance one fixed tick
    fn tick(&mut self, input: &TickInput);

    /// Render the current state, back to front
    fn draw(&self, list: &mut DrawList);

    /// DOM readouts for the current state
    fn hud(&self) -> Vec<HudItem>;

    /// Reinitialize from the configured constants with a fresh seed
    fn restart(&mut self, seed: u64);

    /// Scripted input for the next tick, used by the headless runner
    fn autopilot(&self) -> TickInput;
}

/// Which game to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Blaster,
    Stonewall,
    Zombie,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Blaster, GameKind::Stonewall, GameKind::Zombie];

    pub fn name(self) -> &'static str {
        match self {
            GameKind::Blaster => "blaster",
            GameKind::Stonewall => "stonewall",
            GameKind::Zombie => "zombie",
        }
    }

    /// Build the game with its default tuning
    pub fn build(self, seed: u64) -> Box<dyn Arcade> {
        match self {
            GameKind::Blaster => Box::new(blaster::BlasterState::with_seed(seed)),
            GameKind::Stonewall => Box::new(stonewall::StonewallState::with_seed(seed)),
            GameKind::Zombie => Box::new(zombie::ZombieState::with_seed(seed)),
        }
    }

    /// Build the game from a JSON tuning file (missing fields use defaults)
    pub fn build_from_json(self, json: &str, seed: u64) -> Result<Box<dyn Arcade>, ConfigError> {
        use crate::sim::config::from_json;

        Ok(match self {
            GameKind::Blaster => Box::new(blaster::BlasterState::new(from_json(json)?, seed)?),
            GameKind::Stonewall => {
                Box::new(stonewall::StonewallState::new(from_json(json)?, seed)?)
            }
            GameKind::Zombie => Box::new(zombie::ZombieState::new(from_json(json)?, seed)?),
        })
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown game name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game `{0}` (expected blaster, stonewall or zombie)")]
pub struct UnknownGame(pub String);

impl FromStr for GameKind {
    type Err = UnknownGame;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blaster" | "starship-blaster" => Ok(GameKind::Blaster),
            "stonewall" | "tower-defense" => Ok(GameKind::Stonewall),
            "zombie" | "zombie-rush" => Ok(GameKind::Zombie),
            _ => Err(UnknownGame(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("blaster".parse(), Ok(GameKind::Blaster));
        assert_eq!("Zombie-Rush".parse(), Ok(GameKind::Zombie));
        assert_eq!("tower-defense".parse(), Ok(GameKind::Stonewall));
        assert!("tetris".parse::<GameKind>().is_err());
    }

    #[test]
    fn test_build_each_game() {
        for kind in GameKind::ALL {
            let game = kind.build(1);
            assert_eq!(game.name(), kind.name());
            assert_eq!(game.phase(), GamePhase::Running);
            assert_eq!(game.size(), Vec2::new(800.0, 600.0));
            let mut list = DrawList::new();
            game.draw(&mut list);
            assert!(!list.is_empty());
            assert!(!game.hud().is_empty());
        }
    }

    #[test]
    fn test_build_from_json_uses_defaults_and_validates() {
        let game = GameKind::Zombie.build_from_json("{}", 3);
        assert!(game.is_ok());

        let bad = GameKind::Blaster.build_from_json(r#"{"player_speed": 0}"#, 3);
        assert!(matches!(bad, Err(ConfigError::NonPositive { field: "player_speed", .. })));

        let garbage = GameKind::Stonewall.build_from_json("not json", 3);
        assert!(matches!(garbage, Err(ConfigError::Parse(_))));
    }
}
