//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Efficient per-player data storage backed by `Vec` for O(1) access.
//! The engine uses it for current positions (`PlayerMap<u32>`) and
//! per-turn histories (`PlayerMap<Vec<u32>>`).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Largest supported player count; `PlayerId` is a `u8` index.
pub const MAX_PLAYERS: usize = 255;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
/// Turn order and the win tie-break both follow this index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Players are 1-based in all rendered text.
        write!(f, "Player {}", self.0 as u32 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::{PlayerId, PlayerMap};
///
/// // Every player starts on square 1
/// let mut positions: PlayerMap<u32> = PlayerMap::with_value(4, 1);
/// assert_eq!(positions[PlayerId::new(0)], 1);
///
/// positions[PlayerId::new(1)] = 7;
/// assert_eq!(positions[PlayerId::new(1)], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(
            player_count <= MAX_PLAYERS,
            "At most {} players supported",
            MAX_PLAYERS
        );

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
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
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
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
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(
            players,
            vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]
        );
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u32> = PlayerMap::new(4, |p| p.index() as u32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_with_value() {
        let map: PlayerMap<u32> = PlayerMap::with_value(3, 1);

        for player in map.player_ids() {
            assert_eq!(map[player], 1);
        }
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<Vec<u32>> = PlayerMap::with_value(2, vec![1]);

        map[PlayerId::new(1)].push(5);

        assert_eq!(map[PlayerId::new(0)], vec![1]);
        assert_eq!(map[PlayerId::new(1)], vec![1, 5]);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<u32> = PlayerMap::new(3, |p| p.index() as u32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(2, |p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<u32> = PlayerMap::with_value(0, 0);
    }
}
