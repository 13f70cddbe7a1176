//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Seat index, 0-based. A game always seats [`PLAYER_COUNT`] players.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! The resource ledger and per-round action-token pool of one seat.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::action::ActionCategory;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 4;

/// Agents per round without the swordmaster.
pub const BASE_AGENTS: u32 = 2;

/// Category tokens drawn per round without the swordmaster.
pub const BASE_TOKENS: usize = 4;

/// Seat identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
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

    /// The next seat clockwise in a game with `player_count` players.
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use thumper::core::PlayerId;
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
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use thumper::core::{PlayerId, PlayerMap};
///
/// let mut spice: PlayerMap<u32> = PlayerMap::new(4, |_| 0);
/// spice[PlayerId::new(1)] = 5;
/// assert_eq!(spice[PlayerId::new(1)], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();

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

    /// Get a reference to a player's data, or `None` for an unknown seat.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data.iter_mut().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over mutable values in seat order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
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

/// Category-token pool. Never holds more than a handful of tokens.
pub type TokenPool = SmallVec<[ActionCategory; 8]>;

/// Resource ledger and action-token pool of one seat.
///
/// Fields are public so front ends can read them freely; rules-respecting
/// mutation goes through `GameEngine`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    // === Resources ===
    pub spice: u32,
    pub solari: u32,
    pub troops_garrison: u32,
    pub troops_deployed: u32,
    pub influence: i32,

    // === One-time upgrades ===
    pub has_palace: bool,
    pub has_swordmaster: bool,
    pub has_holtzman_shield: bool,

    // === Per-round ===
    /// Remaining action-takes this round.
    pub agents_left: u32,
    /// Category tokens still available this round.
    pub tokens: TokenPool,
    /// Tokens granted by political maneuvering, added to next round's pool.
    pub pending_tokens: TokenPool,

    // === Scoring ===
    /// Victory points won in conflicts. Never decreases.
    pub conflict_victory_points: u32,
    /// Total victory points, recomputed after every turn.
    pub victory_points: u32,

    // === Audit counters (never read by rules) ===
    pub turns_taken: u32,
    pub spice_harvested: u32,
    pub solari_earned: u32,
}

impl Player {
    /// A fresh player with `initial_troops` in the garrison.
    ///
    /// The token pool starts empty; the engine draws it at reset.
    #[must_use]
    pub fn new(initial_troops: u32) -> Self {
        Self {
            troops_garrison: initial_troops,
            agents_left: BASE_AGENTS,
            ..Self::default()
        }
    }

    /// Agents this player receives at the start of a round.
    #[must_use]
    pub fn agents_per_round(&self) -> u32 {
        BASE_AGENTS + u32::from(self.has_swordmaster)
    }

    /// Category tokens this player draws at the start of a round.
    #[must_use]
    pub fn tokens_per_round(&self) -> usize {
        BASE_TOKENS + usize::from(self.has_swordmaster)
    }

    /// Total troops, garrisoned and deployed.
    #[must_use]
    pub fn total_troops(&self) -> u32 {
        self.troops_garrison + self.troops_deployed
    }

    /// Number of tokens of a category in the pool.
    #[must_use]
    pub fn token_count(&self, category: ActionCategory) -> usize {
        self.tokens.iter().filter(|&&t| t == category).count()
    }

    /// Check whether the pool holds a token of `category`.
    #[must_use]
    pub fn has_token(&self, category: ActionCategory) -> bool {
        self.tokens.contains(&category)
    }

    /// Remove one token of `category`. Returns false if none was held.
    pub fn take_token(&mut self, category: ActionCategory) -> bool {
        match self.tokens.iter().position(|&t| t == category) {
            Some(pos) => {
                self.tokens.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Gain spice from an action, counted in the audit totals.
    pub fn gain_spice(&mut self, amount: u32) {
        self.spice += amount;
        self.spice_harvested += amount;
    }

    /// Gain solari from an action, counted in the audit totals.
    pub fn gain_solari(&mut self, amount: u32) {
        self.solari += amount;
        self.solari_earned += amount;
    }

    /// Move `troops_produced` into the garrison, then deploy `troops`.
    ///
    /// Callers validate `troops <= troops_garrison + troops_produced` first.
    pub fn produce_and_deploy(&mut self, troops_produced: u32, troops: u32) {
        self.troops_garrison += troops_produced;
        let deployed = troops.min(self.troops_garrison);
        self.troops_garrison -= deployed;
        self.troops_deployed += deployed;
    }

    /// Remove up to `count` troops, deployed ones first. Returns troops lost.
    pub fn lose_troops(&mut self, count: u32) -> u32 {
        let from_deployed = count.min(self.troops_deployed);
        self.troops_deployed -= from_deployed;
        let from_garrison = (count - from_deployed).min(self.troops_garrison);
        self.troops_garrison -= from_garrison;
        from_deployed + from_garrison
    }

    /// Start a new round with a freshly drawn token pool.
    ///
    /// Pending tokens from political maneuvering join the new pool.
    /// Deployed troops do not return to the garrison.
    pub fn begin_round(&mut self, drawn: TokenPool) {
        self.agents_left = self.agents_per_round();
        self.tokens = drawn;
        self.tokens.extend(self.pending_tokens.drain(..));
        self.troops_deployed = 0;
    }
}
