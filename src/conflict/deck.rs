//! Conflict catalog and deck construction.
//!
//! The catalog holds ten conflicts in three difficulty tiers. A deck takes
//! each tier, shuffles it on its own, concatenates the tiers easiest first and
//! keeps the first `MAX_ROUNDS` conflicts. Round 1 therefore always fights the
//! single tier-one conflict, rounds 2-6 fight the tier-two conflicts in random
//! order, and the last rounds draw from tier three.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Player, MAX_ROUNDS};

/// One reward bracket of a conflict.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConflictReward {
    pub victory_points: u32,
    pub influence: i32,
    pub spice: u32,
    pub solari: u32,
}

impl ConflictReward {
    /// Create a reward tier.
    #[must_use]
    pub const fn new(victory_points: u32, influence: i32, spice: u32, solari: u32) -> Self {
        Self {
            victory_points,
            influence,
            spice,
            solari,
        }
    }

    /// Grant this reward to a player.
    ///
    /// Victory points and influence accumulate. Spice and solari are *set* to
    /// the tier's values, replacing whatever the player held. The audit
    /// counters are not touched.
    pub fn apply_to(&self, player: &mut Player) {
        player.conflict_victory_points += self.victory_points;
        player.influence += self.influence;
        player.spice = self.spice;
        player.solari = self.solari;
    }
}

/// A conflict: an identifier and its reward tiers, richest first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Conflict {
    /// Catalog identifier (1-10).
    pub id: u32,
    /// Reward tiers, richest first.
    pub rewards: Vec<ConflictReward>,
}

impl Conflict {
    /// Create a conflict.
    #[must_use]
    pub fn new(id: u32, rewards: Vec<ConflictReward>) -> Self {
        Self { id, rewards }
    }
}

/// The ordered conflict schedule of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictDeck {
    conflicts: Vec<Conflict>,
}

impl ConflictDeck {
    /// The fixed catalog, grouped by difficulty tier (sizes 1, 5, 4).
    #[must_use]
    pub fn catalog() -> [Vec<Conflict>; 3] {
        let r = ConflictReward::new;
        [
            vec![Conflict::new(1, vec![r(0, 1, 0, 2), r(0, 0, 0, 3), r(0, 0, 0, 2)])],
            vec![
                Conflict::new(2, vec![r(1, 0, 0, 0), r(0, 0, 1, 2), r(0, 0, 1, 0)]),
                Conflict::new(3, vec![r(0, 0, 0, 6), r(0, 0, 0, 4), r(0, 0, 0, 2)]),
                Conflict::new(4, vec![r(1, 0, 0, 0), r(0, 0, 2, 0), r(0, 0, 0, 1)]),
                Conflict::new(5, vec![r(0, 2, 0, 0), r(0, 0, 2, 0), r(0, 0, 1, 0)]),
                Conflict::new(6, vec![r(1, 0, 0, 0), r(0, 0, 2, 0), r(0, 0, 1, 0)]),
            ],
            vec![
                Conflict::new(7, vec![r(1, 0, 3, 0), r(0, 0, 5, 0), r(0, 0, 3, 0)]),
                Conflict::new(8, vec![r(2, 0, 0, 0), r(0, 0, 5, 0), r(0, 0, 3, 0)]),
                Conflict::new(9, vec![r(0, 2, 3, 0), r(0, 1, 5, 0), r(0, 0, 3, 0)]),
                Conflict::new(10, vec![r(2, 0, 0, 0), r(1, 0, 0, 0), r(0, 0, 3, 0)]),
            ],
        ]
    }

    /// Build a deck: shuffle each tier independently, concatenate, and keep
    /// one conflict per round.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut conflicts = Vec::with_capacity(MAX_ROUNDS as usize);
        for mut tier in Self::catalog() {
            rng.shuffle(&mut tier);
            conflicts.extend(tier);
        }
        conflicts.truncate(MAX_ROUNDS as usize);
        Self { conflicts }
    }

    /// The conflict fought in `round` (1-based).
    #[must_use]
    pub fn for_round(&self, round: u32) -> Option<&Conflict> {
        let index = usize::try_from(round).ok()?.checked_sub(1)?;
        self.conflicts.get(index)
    }

    /// Number of conflicts in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    /// Whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Consume the deck, yielding conflicts in round order.
    #[must_use]
    pub fn into_conflicts(self) -> Vec<Conflict> {
        self.conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(deck: &ConflictDeck) -> Vec<u32> {
        deck.conflicts.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_catalog_shape() {
        let tiers = ConflictDeck::catalog();
        assert_eq!(tiers.iter().map(Vec::len).collect::<Vec<_>>(), vec![1, 5, 4]);

        for conflict in tiers.iter().flatten() {
            assert_eq!(conflict.rewards.len(), 3);
        }
    }

    #[test]
    fn test_deck_has_one_conflict_per_round() {
        let deck = ConflictDeck::shuffled(&mut GameRng::new(42));
        assert_eq!(deck.len(), MAX_ROUNDS as usize);
        assert!(deck.for_round(0).is_none());
        assert!(deck.for_round(MAX_ROUNDS).is_some());
        assert!(deck.for_round(MAX_ROUNDS + 1).is_none());
    }

    #[test]
    fn test_tiers_stay_in_their_bands() {
        for seed in 0..50 {
            let deck = ConflictDeck::shuffled(&mut GameRng::new(seed));
            let ids = ids(&deck);

            assert_eq!(ids[0], 1);
            let mut middle = ids[1..6].to_vec();
            middle.sort_unstable();
            assert_eq!(middle, vec![2, 3, 4, 5, 6]);
            assert!(ids[6..].iter().all(|id| (7..=10).contains(id)));
            assert_ne!(ids[6], ids[7]);
        }
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let deck1 = ConflictDeck::shuffled(&mut GameRng::new(9));
        let deck2 = ConflictDeck::shuffled(&mut GameRng::new(9));
        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_shuffle_varies_with_seed() {
        let decks: Vec<_> = (0..20).map(|seed| ids(&ConflictDeck::shuffled(&mut GameRng::new(seed)))).collect();
        assert!(decks.iter().any(|d| d != &decks[0]));
    }

    #[test]
    fn test_apply_reward_accumulates_points_and_overwrites_resources() {
        let mut player = Player::new(3);
        player.spice = 5;
        player.solari = 7;
        player.influence = 1;
        player.conflict_victory_points = 1;

        ConflictReward::new(1, 2, 0, 3).apply_to(&mut player);

        assert_eq!(player.conflict_victory_points, 2);
        assert_eq!(player.influence, 3);
        // Resource values are replaced, not added
        assert_eq!(player.spice, 0);
        assert_eq!(player.solari, 3);
    }
}
