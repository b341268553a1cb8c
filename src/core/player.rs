//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The duel always has exactly two seats, `P1` and `P2`. `P1` is the
//! designated first player: the turn number advances whenever control
//! returns to it.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// First player. Moves first; turn numbers advance on its turns.
    P1,
    /// Second player.
    P2,
}

impl PlayerId {
    /// Both players in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::P1, PlayerId::P2];

    /// The player that opens each turn number.
    pub const FIRST: PlayerId = PlayerId::P1;

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::P1 => 0,
            PlayerId::P2 => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    /// Iterate over both player IDs.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::P1 => f.write_str("P1"),
            PlayerId::P2 => f.write_str("P2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use grid_duel::core::{PlayerId, PlayerMap};
///
/// let mut hp: PlayerMap<u32> = PlayerMap::with_value(10);
/// hp[PlayerId::P2] = 7;
///
/// assert_eq!(hp[PlayerId::P1], 10);
/// assert_eq!(hp[PlayerId::P2], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::P1), factory(PlayerId::P2)],
        }
    }

    /// Create a PlayerMap from explicit per-player values.
    pub fn from_pair(p1: T, p2: T) -> Self {
        Self { data: [p1, p2] }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::P1.index(), 0);
        assert_eq!(PlayerId::P2.index(), 1);
        assert_eq!(PlayerId::P1.opponent(), PlayerId::P2);
        assert_eq!(PlayerId::P2.opponent(), PlayerId::P1);
        assert_eq!(format!("{}", PlayerId::P2), "P2");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::P1], 0);
        assert_eq!(map[PlayerId::P2], 10);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_pair("a", "b");

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::P1, &"a"), (PlayerId::P2, &"b")]);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::default();

        map[PlayerId::P1] = 3;
        for (_, value) in map.iter_mut() {
            *value += 1;
        }

        assert_eq!(map[PlayerId::P1], 4);
        assert_eq!(map[PlayerId::P2], 1);
    }

    #[test]
    fn test_player_id_serialization() {
        let json = serde_json::to_string(&PlayerId::P2).unwrap();
        assert_eq!(json, "\"P2\"");

        let map = PlayerMap::from_pair(1u32, 2u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
