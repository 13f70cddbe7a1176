//! Victory-point scoring and final ranking.
//!
//! Scores are recomputed from scratch after every turn, never patched.
//!
//! Base score: conflict victory points, +1 at influence 2, +1 more at
//! influence 4, +1 for a palace.
//!
//! Once the game has ended, the influence bonus is added on top:
//!
//! - if the most influential player is strictly ahead of the second, they get
//!   +2 when at 6 or more; the second gets +1 when at 6 or more *and*
//!   strictly ahead of the third;
//! - if the top two are tied and both at 6 or more, each gets +1;
//! - nobody below the top two ever gets a bonus.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap};

/// Influence needed for the first influence point.
pub const INFLUENCE_FIRST_POINT: i32 = 2;
/// Influence needed for the second influence point.
pub const INFLUENCE_SECOND_POINT: i32 = 4;
/// Influence needed to compete for the endgame bonus.
pub const INFLUENCE_BONUS_MIN: i32 = 6;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Players tied on every tiebreaker.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won (alone or shared).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Stateless scoring rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    /// Points a player holds before the endgame bonus.
    #[must_use]
    pub fn base_score(player: &Player) -> u32 {
        player.conflict_victory_points
            + u32::from(player.influence >= INFLUENCE_FIRST_POINT)
            + u32::from(player.influence >= INFLUENCE_SECOND_POINT)
            + u32::from(player.has_palace)
    }

    /// Endgame influence bonus for each player.
    #[must_use]
    pub fn influence_bonus(players: &PlayerMap<Player>) -> PlayerMap<u32> {
        let mut bonus = PlayerMap::with_value(players.player_count(), 0);

        let mut ranked: Vec<(PlayerId, i32)> = players.iter().map(|(id, p)| (id, p.influence)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let influence = |rank: usize| ranked.get(rank).map(|&(_, i)| i);
        let (Some(first), Some(second)) = (influence(0), influence(1)) else {
            return bonus;
        };
        let third = influence(2);

        if first > second {
            if first >= INFLUENCE_BONUS_MIN {
                bonus[ranked[0].0] += 2;
            }
            if second >= INFLUENCE_BONUS_MIN && third.map_or(true, |third| second > third) {
                bonus[ranked[1].0] += 1;
            }
        } else if first >= INFLUENCE_BONUS_MIN && second >= INFLUENCE_BONUS_MIN {
            bonus[ranked[0].0] += 1;
            bonus[ranked[1].0] += 1;
        }

        bonus
    }

    /// Recompute every player's victory points.
    pub fn update(players: &mut PlayerMap<Player>, game_ended: bool) {
        let bonus = game_ended.then(|| Self::influence_bonus(players));
        for (id, player) in players.iter_mut() {
            player.victory_points = Self::base_score(player) + bonus.as_ref().map_or(0, |b| b[id]);
        }
    }

    /// Seats ordered best first.
    ///
    /// Ties on victory points fall to spice, then solari, then influence,
    /// then garrison troops. Seat order settles complete ties.
    #[must_use]
    pub fn ranking(players: &PlayerMap<Player>) -> Vec<PlayerId> {
        let mut seats: Vec<PlayerId> = players.player_ids().collect();
        seats.sort_by(|&a, &b| Self::tiebreak_key(&players[b]).cmp(&Self::tiebreak_key(&players[a])));
        seats
    }

    /// Winner(s) under the ranking order.
    #[must_use]
    pub fn result(players: &PlayerMap<Player>) -> GameResult {
        let ranking = Self::ranking(players);
        let best = Self::tiebreak_key(&players[ranking[0]]);
        let winners: Vec<PlayerId> = ranking
            .into_iter()
            .take_while(|&id| Self::tiebreak_key(&players[id]) == best)
            .collect();

        match winners.as_slice() {
            [single] => GameResult::Winner(*single),
            _ => GameResult::Winners(winners),
        }
    }

    fn tiebreak_key(player: &Player) -> (u32, u32, u32, i32, u32) {
        (
            player.victory_points,
            player.spice,
            player.solari,
            player.influence,
            player.troops_garrison,
        )
    }
}
