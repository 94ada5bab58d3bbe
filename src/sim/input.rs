//! Accumulated input state handed to each tick
//!
//! The frame driver collects key and pointer events between frames into a
//! [`TickInput`]. Held keys and the pointer position persist; presses,
//! releases and clicks are one-shot and are cleared once a tick consumes
//! them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Keys any of the games react to. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    W,
    A,
    S,
    D,
    Space,
    Enter,
}

impl Key {
    pub const ALL: [Key; 10] = [
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::ArrowUp,
        Key::ArrowDown,
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::Space,
        Key::Enter,
    ];

    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "w" => Some(Key::W),
            "a" => Some(Key::A),
            "s" => Some(Key::S),
            "d" => Some(Key::D),
            " " => Some(Key::Space),
            "Enter" => Some(Key::Enter),
            _ => None,
        }
    }

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Small bitset of [`Key`]s
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySet(u16);

impl KeySet {
    pub const EMPTY: KeySet = KeySet(0);

    pub fn insert(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn remove(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    /// True if any of `keys` is in the set
    pub fn any(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.contains(*k))
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.into_iter().filter(|k| self.contains(*k))
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut set = KeySet::EMPTY;
        for key in iter {
            set.insert(key);
        }
        set
    }
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Keys currently held down
    pub held: KeySet,
    /// Keys pressed since the last consumed tick
    pub pressed: KeySet,
    /// Keys released since the last consumed tick
    pub released: KeySet,
    /// Latest pointer position over the playfield (None once it leaves)
    pub pointer: Option<Vec2>,
    /// Clicks since the last consumed tick, in playfield coordinates
    pub clicks: Vec<Vec2>,
}

impl TickInput {
    pub fn key_down(&mut self, key: Key) {
        if !self.held.contains(key) {
            self.pressed.insert(key);
        }
        self.held.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(key);
        self.released.insert(key);
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer = None;
    }

    pub fn click(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
        self.clicks.push(pos);
    }

    /// Drop one-shot events after a tick has seen them
    pub fn clear_one_shot(&mut self) {
        self.pressed.clear();
        self.released.clear();
        self.clicks.clear();
    }

    /// Convenience for tests and scripted drivers: hold exactly `keys`
    pub fn holding(keys: &[Key]) -> Self {
        Self {
            held: keys.iter().copied().collect(),
            ..Default::default()
        }
    }
}
