//! Turn advancement.
//!
//! Runs after every successful action:
//!
//! 1. the actor spends an agent;
//! 2. the next seat (wrapping, actor last) with an agent left becomes current;
//! 3. if nobody has agents left the round's conflict is resolved, then either
//!    the next round is set up or the game ends;
//! 4. scores are recomputed, with the influence bonus once the game is over.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::scoring::ScoringEngine;
use crate::conflict::{ConflictOutcome, ConflictResolver};
use crate::core::{ActionCategory, ActionId, EngineConfig, GamePhase, GameRng, GameState, PlayerId, TokenPool};

/// What a successful action led to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The round continues with this player.
    NextPlayer(PlayerId),
    /// The conflict was resolved and a new round has started.
    RoundEnded {
        /// Result of the conflict.
        outcome: ConflictOutcome,
        /// The round that just started.
        round: u32,
    },
    /// The final conflict was resolved. Terminal.
    GameEnded {
        /// Result of the final conflict.
        outcome: ConflictOutcome,
    },
}

/// Draw `count` category tokens, with replacement.
pub(crate) fn draw_tokens(rng: &mut GameRng, count: usize) -> TokenPool {
    (0..count).filter_map(|_| rng.choose(&ActionCategory::ALL).copied()).collect()
}

/// Advance past the current player's action.
pub(crate) fn advance(state: &mut GameState, config: &EngineConfig, token_rng: &mut GameRng) -> TurnOutcome {
    let actor = state.current_player;
    let player = state.current_mut();
    player.agents_left = player.agents_left.saturating_sub(1);
    player.turns_taken += 1;

    let count = state.player_count();
    let mut seat = actor;
    for _ in 0..count {
        seat = seat.next(count);
        if state.players[seat].agents_left > 0 {
            state.current_player = seat;
            ScoringEngine::update(&mut state.players, false);
            return TurnOutcome::NextPlayer(seat);
        }
    }

    state.phase = GamePhase::RoundEnd;
    let outcome = resolve_conflict(state);

    let turn = if state.is_final_round() {
        state.phase = GamePhase::GameEnded;
        TurnOutcome::GameEnded { outcome }
    } else {
        begin_next_round(state, config, token_rng);
        TurnOutcome::RoundEnded {
            outcome,
            round: state.round,
        }
    };

    let ended = state.is_ended();
    ScoringEngine::update(&mut state.players, ended);
    if ended && config.log_game_summary {
        log_game_summary(state);
    }
    turn
}

fn resolve_conflict(state: &mut GameState) -> ConflictOutcome {
    let Some(conflict) = state.conflicts.for_round(state.round) else {
        return ConflictOutcome::default();
    };
    let outcome = ConflictResolver::resolve(conflict, &mut state.players);
    info!(
        round = state.round,
        conflict = conflict.id,
        awards = outcome.awards.len(),
        "Conflict resolved"
    );
    outcome
}

fn begin_next_round(state: &mut GameState, config: &EngineConfig, token_rng: &mut GameRng) {
    let count = state.player_count();
    state.round += 1;
    state.first_player = state.first_player.next(count);
    state.current_player = state.first_player;

    state.spice_in_silo = if state.ledger.is_available(ActionId::SpiceSilo) {
        1
    } else {
        (state.spice_in_silo + 1).min(config.max_spice_silo)
    };
    state.ledger.reset();

    for player in state.players.values_mut() {
        let drawn = draw_tokens(token_rng, player.tokens_per_round());
        player.begin_round(drawn);
    }
    state.phase = GamePhase::InRound;

    info!(
        round = state.round,
        first_player = %state.first_player,
        spice_in_silo = state.spice_in_silo,
        "Round started"
    );
}

fn log_game_summary(state: &GameState) {
    for seat in ScoringEngine::ranking(&state.players) {
        let p = &state.players[seat];
        info!(
            player = %seat,
            victory_points = p.victory_points,
            conflict_victory_points = p.conflict_victory_points,
            influence = p.influence,
            spice = p.spice,
            solari = p.solari,
            garrison = p.troops_garrison,
            palace = p.has_palace,
            swordmaster = p.has_swordmaster,
            shield = p.has_holtzman_shield,
            turns = p.turns_taken,
            spice_harvested = p.spice_harvested,
            solari_earned = p.solari_earned,
            "Final standing"
        );
    }
}
