//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Stable seat token. A player keeps the same `PlayerId` for the whole game,
//! even after other seats finish and drop out of the turn order.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a `Vec` (the engine keeps one `Hand` per seat
//! in it). Entries are never removed, so indexing by `PlayerId` stays valid
//! after eliminations.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier; seats are 0-based in dealing order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use rust_president::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use rust_president::core::{PlayerId, PlayerMap};
///
/// let mut cards_played: PlayerMap<u32> = PlayerMap::from_vec(vec![0; 4]).unwrap();
/// cards_played[PlayerId::new(2)] += 3;
/// assert_eq!(cards_played[PlayerId::new(2)], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with one entry per seat, in seat order.
    ///
    /// Returns `None` for an empty vector or more than 255 seats.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Option<Self> {
        if data.is_empty() || data.len() > usize::from(u8::MAX) {
            return None;
        }
        Some(Self { data })
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a seat's entry, or `None` if the seat does not exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert!(p0 < p1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_map_from_vec() {
        let map = PlayerMap::from_vec(vec![13, 13, 13, 13]).unwrap();

        assert_eq!(map.player_count(), 4);
        assert_eq!(map[PlayerId::new(3)], 13);
        assert!(map.get(PlayerId::new(4)).is_none());

        assert!(PlayerMap::<u8>::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<Vec<u8>> = PlayerMap::from_vec(vec![Vec::new(), Vec::new()]).unwrap();

        map[PlayerId::new(0)].push(7);
        if let Some(entry) = map.get_mut(PlayerId::new(1)) {
            entry.push(9);
        }

        assert_eq!(map[PlayerId::new(0)], vec![7]);
        assert_eq!(map[PlayerId::new(1)], vec![9]);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_vec(vec!['a', 'b', 'c']).unwrap();

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &'a'));
        assert_eq!(pairs[2], (PlayerId::new(2), &'c'));
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::from_vec(vec![1, 2]).unwrap();
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
