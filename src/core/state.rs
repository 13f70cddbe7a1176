//! Game state.
//!
//! `GameState` holds everything a game needs except the RNG and configuration:
//! the four players, round progression, the spice silo, the round's action
//! ledger, the shuffled conflict deck and the action history.
//!
//! Only the current player's *index* is stored; the player itself is always
//! looked up through it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::MAX_ROUNDS;
use super::ledger::ActionLedger;
use super::player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
use crate::conflict::{Conflict, ConflictDeck};

/// Where the game is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players are taking actions.
    InRound,
    /// Every agent is spent; the conflict is being resolved.
    RoundEnd,
    /// Final round completed. Terminal.
    GameEnded,
}

/// Complete state of one game.
///
/// Uses an `im` vector for the action history so cloning a state (e.g. to
/// branch a search) stays cheap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// All seats, in seating order.
    pub players: PlayerMap<Player>,

    /// Current round, starting at 1.
    pub round: u32,

    /// The player who went first this round.
    pub first_player: PlayerId,

    /// The player whose turn it is.
    pub current_player: PlayerId,

    /// Spice the Spice Silo yields this round.
    pub spice_in_silo: u32,

    /// Action identifiers still unclaimed this round.
    pub ledger: ActionLedger,

    /// One conflict per round, in play order.
    pub conflicts: ConflictDeck,

    /// Current phase.
    pub phase: GamePhase,

    /// Every successful action, in order.
    pub action_history: Vector<ActionRecord>,

    action_sequence: u32,
}

impl GameState {
    /// Create the opening state of a game.
    ///
    /// Token pools are left empty; the engine draws them.
    #[must_use]
    pub fn new(initial_troops: u32, conflicts: ConflictDeck) -> Self {
        Self {
            players: PlayerMap::new(PLAYER_COUNT, |_| Player::new(initial_troops)),
            round: 1,
            first_player: PlayerId::new(0),
            current_player: PlayerId::new(0),
            spice_in_silo: 1,
            ledger: ActionLedger::full(),
            conflicts,
            phase: GamePhase::InRound,
            action_history: Vector::new(),
            action_sequence: 0,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Mutable access to the player whose turn it is.
    pub fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player]
    }

    /// Whether the final round has completed.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::GameEnded
    }

    /// Whether this is the final round.
    #[must_use]
    pub fn is_final_round(&self) -> bool {
        self.round >= MAX_ROUNDS
    }

    /// The conflict fought at the end of the current round.
    #[must_use]
    pub fn current_conflict(&self) -> Option<&Conflict> {
        self.conflicts.for_round(self.round)
    }

    /// Record a successful action in history.
    pub fn record_action(&mut self, player: PlayerId, action: Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.action_history.push_back(ActionRecord {
            player,
            action,
            round: self.round,
            sequence,
        });
    }
}
