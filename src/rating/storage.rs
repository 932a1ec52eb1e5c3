//! Ordered player store
//!
//! The store keeps players in an explicit order that is independent of hash
//! iteration order. Updating a player moves its record to the front, so among
//! players with equal ratings the most recently updated one comes first, and
//! players that were never updated keep the order they were given in.

use crate::error::{LadderError, Result};
use crate::types::{Player, PlayerId};
use std::collections::{BTreeMap, HashMap};

/// Ordered collection of players keyed by id
///
/// Each record sits at a numeric position; iteration walks positions in
/// ascending order. Roster entries take positions `0, 1, 2, ...` and every
/// promotion takes a position below all existing ones, which makes lookup a
/// hash probe and promotion a pair of `BTreeMap` operations.
#[derive(Debug, Clone)]
pub struct PlayerStore {
    positions: HashMap<PlayerId, i64>,
    entries: BTreeMap<i64, Player>,
    next_front: i64,
}

impl PlayerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            entries: BTreeMap::new(),
            next_front: -1,
        }
    }

    /// Build a store that keeps `players` in the given order
    ///
    /// Fails with `DuplicatePlayer` if an id appears twice.
    pub fn from_players<I>(players: I) -> Result<Self>
    where
        I: IntoIterator<Item = Player>,
    {
        let mut store = Self::new();
        for (position, player) in (0_i64..).zip(players) {
            if store.positions.contains_key(&player.id) {
                return Err(LadderError::DuplicatePlayer {
                    player_id: player.id,
                }
                .into());
            }
            store.positions.insert(player.id.clone(), position);
            store.entries.insert(position, player);
        }
        Ok(store)
    }

    /// Get a player's current record
    pub fn lookup(&self, player_id: &str) -> Result<&Player> {
        self.positions
            .get(player_id)
            .and_then(|position| self.entries.get(position))
            .ok_or_else(|| {
                LadderError::UnknownPlayer {
                    player_id: player_id.to_string(),
                }
                .into()
            })
    }

    /// Replace any record for `player.id` and place the new one at the front
    pub fn upsert(mut self, player: Player) -> Self {
        if let Some(old_position) = self.positions.remove(&player.id) {
            self.entries.remove(&old_position);
        }

        let position = self.next_front;
        self.next_front -= 1;
        self.positions.insert(player.id.clone(), position);
        self.entries.insert(position, player);
        self
    }

    /// Display name for an id, if the player is known
    pub fn name_of(&self, player_id: &str) -> Option<&str> {
        self.lookup(player_id).ok().map(|player| player.name.as_str())
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.positions.contains_key(player_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Players from front to back
    pub fn iter(&self) -> impl Iterator<Item = &Player> + '_ {
        self.entries.values()
    }

    /// Ids from front to back
    pub fn ids(&self) -> Vec<PlayerId> {
        self.iter().map(|player| player.id.clone()).collect()
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PlayerStore {
    /// Stores are equal when they hold the same records in the same order
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a> IntoIterator for &'a PlayerStore {
    type Item = &'a Player;
    type IntoIter = std::collections::btree_map::Values<'a, i64, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
