//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Players are named by the game document ("Alice", "Bob", ...).
//!
//! ## PlayerMap
//!
//! Per-player data keyed by `PlayerId` that remembers insertion order.
//! Anything that depends on "the first opponent" or "every player in
//! turn" iterates a `PlayerMap`, so results never depend on hash order.
//! Serialized as a JSON object whose key order is preserved on the way in
//! and on the way out.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Player identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the player's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Insertion-ordered per-player storage.
///
/// Backed by a `Vec` of pairs: player counts are tiny, so a linear scan
/// beats hashing and keeps iteration deterministic.
///
/// ## Example
///
/// ```
/// use ccg_stack::core::{PlayerId, PlayerMap};
///
/// let mut life = PlayerMap::new();
/// life.insert(PlayerId::new("Bob"), 20);
/// life.insert(PlayerId::new("Alice"), 20);
///
/// life[&PlayerId::new("Bob")] -= 3;
///
/// let order: Vec<_> = life.player_ids().map(|p| p.as_str()).collect();
/// assert_eq!(order, ["Bob", "Alice"]);
/// assert_eq!(life[&PlayerId::new("Bob")], 17);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerMap<T> {
    entries: Vec<(PlayerId, T)>,
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PlayerMap<T> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace a player's value.
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(&mut self, player: PlayerId, value: T) -> Option<T> {
        match self.position(&player) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((player, value));
                None
            }
        }
    }

    /// Number of players in the map.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a player has an entry.
    #[must_use]
    pub fn contains(&self, player: &PlayerId) -> bool {
        self.position(player).is_some()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: &PlayerId) -> Option<&T> {
        self.position(player).map(|idx| &self.entries[idx].1)
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: &PlayerId) -> Option<&mut T> {
        self.position(player).map(|idx| &mut self.entries[idx].1)
    }

    /// Get a player's data, appending a default entry if absent.
    pub fn entry_or_default(&mut self, player: &PlayerId) -> &mut T
    where
        T: Default,
    {
        let idx = match self.position(player) {
            Some(idx) => idx,
            None => {
                self.entries.push((player.clone(), T::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Iterate over (PlayerId, &T) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &T)> {
        self.entries.iter().map(|(p, v)| (p, v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&PlayerId, &mut T)> {
        self.entries.iter_mut().map(|(p, v)| (&*p, v))
    }

    /// Iterate over all player IDs in insertion order.
    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.entries.iter().map(|(p, _)| p)
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Map every value, keeping the player order.
    pub fn map_values<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerMap<U> {
        PlayerMap {
            entries: self.entries.iter().map(|(p, v)| (p.clone(), f(v))).collect(),
        }
    }

    fn position(&self, player: &PlayerId) -> Option<usize> {
        self.entries.iter().position(|(p, _)| p == player)
    }
}

impl<T> FromIterator<(PlayerId, T)> for PlayerMap<T> {
    fn from_iter<I: IntoIterator<Item = (PlayerId, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (player, value) in iter {
            map.insert(player, value);
        }
        map
    }
}

impl<T> IntoIterator for PlayerMap<T> {
    type Item = (PlayerId, T);
    type IntoIter = std::vec::IntoIter<(PlayerId, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T> Index<&PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: &PlayerId) -> &Self::Output {
        match self.get(player) {
            Some(value) => value,
            None => panic!("Unknown player: {}", player),
        }
    }
}

impl<T> IndexMut<&PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: &PlayerId) -> &mut Self::Output {
        match self.position(player) {
            Some(idx) => &mut self.entries[idx].1,
            None => panic!("Unknown player: {}", player),
        }
    }
}

impl<T: Serialize> Serialize for PlayerMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (player, value) in &self.entries {
            map.serialize_entry(player, value)?;
        }
        map.end()
    }
}

struct PlayerMapVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for PlayerMapVisitor<T> {
    type Value = PlayerMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map keyed by player name")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = PlayerMap::new();
        while let Some((player, value)) = access.next_entry::<PlayerId, T>()? {
            if map.contains(&player) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate player `{}`",
                    player
                )));
            }
            map.insert(player, value);
        }
        Ok(map)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PlayerMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PlayerMapVisitor(PhantomData))
    }
}
