//! Conflict resolution.
//!
//! Players with deployed troops contend. Strength is deployed troops, plus one
//! for a Holtzman shield. Players are grouped by strength and groups are
//! walked strongest first against a queue of reward tiers:
//!
//! - a lone player takes the head tier, which is then popped;
//! - a tie burns the head tier, then every tied player receives the next one
//!   (if any is left), which is popped as well;
//! - once the queue runs dry the remaining groups get nothing.
//!
//! So with tiers `[A, B, C]`, strengths `{5, 5, 3}` award `B` to both fives
//! and `C` to the three, while `{5, 4, 3}` award `A`, `B`, `C`. With only
//! `[A, B]`, the three gets nothing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::deck::Conflict;
use crate::core::{Player, PlayerId, PlayerMap};

/// A reward tier granted to one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    /// The rewarded player.
    pub player: PlayerId,
    /// Index of the tier in the conflict's reward list (0 = richest).
    pub tier: usize,
}

/// Everything a resolution handed out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictOutcome {
    /// Conflict identifier.
    pub conflict: u32,
    /// Awards in the order they were granted.
    pub awards: Vec<Award>,
}

impl ConflictOutcome {
    /// The tier a player received, if any.
    #[must_use]
    pub fn tier_for(&self, player: PlayerId) -> Option<usize> {
        self.awards.iter().find(|a| a.player == player).map(|a| a.tier)
    }
}

/// Distributes a conflict's rewards among the players.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConflictResolver;

impl ConflictResolver {
    /// Effective conflict strength of a player.
    #[must_use]
    pub fn strength(player: &Player) -> u32 {
        player.troops_deployed + u32::from(player.has_holtzman_shield)
    }

    /// Decide who gets which tier, without touching the players.
    #[must_use]
    pub fn plan(conflict: &Conflict, players: &PlayerMap<Player>) -> ConflictOutcome {
        let mut groups: BTreeMap<u32, Vec<PlayerId>> = BTreeMap::new();
        for (id, player) in players.iter().filter(|(_, p)| p.troops_deployed > 0) {
            groups.entry(Self::strength(player)).or_default().push(id);
        }

        let mut outcome = ConflictOutcome {
            conflict: conflict.id,
            awards: Vec::new(),
        };
        let mut next_tier = 0;

        for group in groups.values().rev() {
            if next_tier >= conflict.rewards.len() {
                break;
            }
            match group.as_slice() {
                [winner] => {
                    outcome.awards.push(Award {
                        player: *winner,
                        tier: next_tier,
                    });
                    next_tier += 1;
                }
                tied => {
                    // The tie burns the tier it was fighting for.
                    next_tier += 1;
                    if next_tier < conflict.rewards.len() {
                        outcome
                            .awards
                            .extend(tied.iter().map(|&player| Award { player, tier: next_tier }));
                        next_tier += 1;
                    }
                }
            }
        }

        outcome
    }

    /// Resolve a conflict, applying each award to its player.
    pub fn resolve(conflict: &Conflict, players: &mut PlayerMap<Player>) -> ConflictOutcome {
        let outcome = Self::plan(conflict, players);
        for award in &outcome.awards {
            if let (Some(reward), Some(player)) = (conflict.rewards.get(award.tier), players.get_mut(award.player)) {
                reward.apply_to(player);
                debug!(conflict = conflict.id, player = %award.player, tier = award.tier, "Conflict reward granted");
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::ConflictReward;

    fn players(deployed: [u32; 4]) -> PlayerMap<Player> {
        PlayerMap::new(4, |p| Player {
            troops_deployed: deployed[p.index()],
            ..Player::new(0)
        })
    }

    fn tiers() -> Conflict {
        Conflict::new(
            99,
            vec![
                ConflictReward::new(3, 0, 0, 0),
                ConflictReward::new(2, 0, 0, 0),
                ConflictReward::new(1, 0, 0, 0),
            ],
        )
    }

    #[test]
    fn test_distinct_strengths_take_tiers_in_order() {
        let mut players = players([4, 5, 0, 3]);
        let outcome = ConflictResolver::resolve(&tiers(), &mut players);

        assert_eq!(outcome.tier_for(PlayerId::new(1)), Some(0));
        assert_eq!(outcome.tier_for(PlayerId::new(0)), Some(1));
        assert_eq!(outcome.tier_for(PlayerId::new(3)), Some(2));
        assert_eq!(outcome.tier_for(PlayerId::new(2)), None);
        assert_eq!(players[PlayerId::new(1)].conflict_victory_points, 3);
        assert_eq!(players[PlayerId::new(3)].conflict_victory_points, 1);
    }

    #[test]
    fn test_tie_burns_top_tier() {
        let mut players = players([5, 5, 3, 0]);
        let conflict = Conflict::new(1, vec![ConflictReward::new(3, 0, 0, 0), ConflictReward::new(2, 0, 0, 0)]);
        let outcome = ConflictResolver::resolve(&conflict, &mut players);

        assert_eq!(outcome.tier_for(PlayerId::new(0)), Some(1));
        assert_eq!(outcome.tier_for(PlayerId::new(1)), Some(1));
        assert_eq!(outcome.tier_for(PlayerId::new(2)), None);
        assert_eq!(players[PlayerId::new(0)].conflict_victory_points, 2);
        assert_eq!(players[PlayerId::new(1)].conflict_victory_points, 2);
    }

    #[test]
    fn test_group_after_tie_takes_following_tier() {
        let players = players([5, 5, 3, 0]);
        let outcome = ConflictResolver::plan(&tiers(), &players);

        assert_eq!(outcome.tier_for(PlayerId::new(0)), Some(1));
        assert_eq!(outcome.tier_for(PlayerId::new(1)), Some(1));
        assert_eq!(outcome.tier_for(PlayerId::new(2)), Some(2));
    }

    #[test]
    fn test_tie_below_winner() {
        let players = players([6, 2, 2, 1]);
        let outcome = ConflictResolver::plan(&tiers(), &players);

        // Winner takes tier 0; the tie burns tier 1 and shares tier 2.
        assert_eq!(outcome.tier_for(PlayerId::new(0)), Some(0));
        assert_eq!(outcome.tier_for(PlayerId::new(1)), Some(2));
        assert_eq!(outcome.tier_for(PlayerId::new(2)), Some(2));
        assert_eq!(outcome.tier_for(PlayerId::new(3)), None);
    }

    #[test]
    fn test_three_way_tie() {
        let players = players([4, 4, 4, 1]);
        let outcome = ConflictResolver::plan(&tiers(), &players);

        assert_eq!(outcome.awards.len(), 4);
        for seat in 0..3 {
            assert_eq!(outcome.tier_for(PlayerId::new(seat)), Some(1));
        }
        assert_eq!(outcome.tier_for(PlayerId::new(3)), Some(2));
    }

    #[test]
    fn test_tie_on_last_tier_awards_nothing() {
        let players = players([2, 2, 0, 0]);
        let conflict = Conflict::new(1, vec![ConflictReward::new(1, 0, 0, 0)]);
        let outcome = ConflictResolver::plan(&conflict, &players);

        assert!(outcome.awards.is_empty());
    }

    #[test]
    fn test_shield_adds_strength() {
        let mut players = players([3, 3, 0, 0]);
        players[PlayerId::new(1)].has_holtzman_shield = true;
        let outcome = ConflictResolver::plan(&tiers(), &players);

        assert_eq!(outcome.tier_for(PlayerId::new(1)), Some(0));
        assert_eq!(outcome.tier_for(PlayerId::new(0)), Some(1));
    }

    #[test]
    fn test_shield_without_troops_does_not_contend() {
        let mut players = players([0, 1, 0, 0]);
        players[PlayerId::new(0)].has_holtzman_shield = true;
        players[PlayerId::new(0)].troops_garrison = 10;
        let outcome = ConflictResolver::plan(&tiers(), &players);

        assert_eq!(outcome.awards, vec![Award { player: PlayerId::new(1), tier: 0 }]);
    }

    #[test]
    fn test_queue_exhausted() {
        let players = players([4, 3, 2, 1]);
        let outcome = ConflictResolver::plan(&tiers(), &players);

        assert_eq!(outcome.awards.len(), 3);
        assert_eq!(outcome.tier_for(PlayerId::new(3)), None);
    }

    #[test]
    fn test_nobody_deployed() {
        let mut players = players([0, 0, 0, 0]);
        let outcome = ConflictResolver::resolve(&tiers(), &mut players);

        assert!(outcome.awards.is_empty());
        assert!(players.values().all(|p| p.conflict_victory_points == 0));
    }
}
