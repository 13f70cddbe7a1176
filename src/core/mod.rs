//! Core engine types: players, state, actions, the action ledger, RNG,
//! configuration, errors.
//!
//! These are the data the rules operate on. Nothing in this module enforces
//! game rules; that is the job of `rules::GameEngine`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod ledger;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap, TokenPool, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::{EngineConfig, MAX_ROUNDS};
pub use action::{Action, ActionCategory, ActionId, ActionRecord, ActionSpec, ArgumentKind, Cost};
pub use error::{ArgumentError, Resource, Result, ThumperError, Upgrade};
pub use ledger::ActionLedger;
pub use state::{GamePhase, GameState};
