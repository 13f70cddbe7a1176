//! # thumper
//!
//! Rules engine for Thumper, a four-player worker-placement game of spice,
//! troops and influence played over eight rounds.
//!
//! ## Game Flow
//!
//! Each round every player draws category tokens and places agents, one action
//! per turn, in seat order starting from the round's first player. Every
//! catalog action can be claimed once per round. When all agents are spent the
//! round's conflict is resolved between the players who deployed troops, and
//! the next round begins with the first player rotated. After the eighth
//! conflict the game ends and influence bonuses are scored.
//!
//! ## Design Principles
//!
//! 1. **All-or-nothing actions**: every action is validated against the state
//!    before anything changes. A rejected action returns a `ThumperError` and
//!    leaves the game untouched.
//!
//! 2. **Reproducible games**: all randomness flows through a seeded
//!    `GameRng`, so a seed fully determines a game.
//!
//! 3. **Cheap snapshots**: the action history lives in an `im` vector, so
//!    cloning an engine to branch a game stays cheap.
//!
//! ## Modules
//!
//! - `core`: players, actions, state, action ledger, RNG, configuration, errors
//! - `conflict`: conflict catalog, deck construction and resolution
//! - `rules`: the game engine, turn advancement, scoring
//!
//! ```
//! use thumper::{EngineConfig, GameEngine};
//!
//! let mut engine = GameEngine::new(EngineConfig::default().with_seed(7));
//! while !engine.is_game_ended() {
//!     let action = engine.legal_actions()[0];
//!     engine.perform(action).unwrap();
//! }
//! assert!(engine.result().is_some());
//! ```

pub mod core;
pub mod conflict;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionCategory, ActionId, ActionLedger, ActionRecord, ActionSpec, ArgumentError, ArgumentKind, Cost, EngineConfig,
    GamePhase, GameRng, GameRngState, GameState, Player, PlayerId, PlayerMap, Resource, Result, ThumperError,
    Upgrade, MAX_ROUNDS, PLAYER_COUNT,
};

pub use crate::conflict::{Award, Conflict, ConflictDeck, ConflictOutcome, ConflictResolver, ConflictReward};

pub use crate::rules::{EngineCheckpoint, GameEngine, GameResult, ScoringEngine, TurnOutcome};
