//! Error types for rule validation.
//!
//! Every failure is a synchronous, non-retryable validation error. Actions are
//! all-or-nothing: when an operation returns an error, no state was modified.

use serde::{Deserialize, Serialize};

use super::action::{ActionCategory, ActionId};
use super::player::PlayerId;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ThumperError>;

/// A countable player resource that an action can consume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    /// Spice.
    Spice,
    /// Solari.
    Solari,
    /// Troops held in the garrison.
    Garrison,
}

/// One-time upgrades a player can acquire at most once per game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Upgrade {
    /// Palace (economic).
    Palace,
    /// Swordmaster (political).
    Swordmaster,
    /// Holtzman shield (military).
    HoltzmanShield,
}

/// Why an action argument was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgumentError {
    /// Requested deployment outside `[0, limit]`.
    TroopCount { requested: u32, limit: u32 },
    /// Not enough troops in garrison (after production) to deploy.
    TroopsUnavailable { requested: u32, available: u32 },
    /// Target seat does not exist.
    TargetOutOfRange(PlayerId),
    /// A player cannot target themselves.
    SelfTarget,
    /// Target has neither garrison nor deployed troops.
    TargetHasNoTroops(PlayerId),
    /// Spice amount outside 1..=3.
    SellAmount(u32),
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TroopCount { requested, limit } => {
                write!(f, "cannot deploy {requested} troops, limit is {limit}")
            }
            Self::TroopsUnavailable { requested, available } => {
                write!(f, "cannot deploy {requested} troops, only {available} available")
            }
            Self::TargetOutOfRange(target) => write!(f, "{target} does not exist"),
            Self::SelfTarget => write!(f, "a player cannot target themselves"),
            Self::TargetHasNoTroops(target) => write!(f, "{target} has no troops"),
            Self::SellAmount(amount) => write!(f, "cannot sell {amount} spice, must be 1 to 3"),
        }
    }
}

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThumperError {
    /// Any action attempted after the final round.
    #[error("the game has already ended")]
    GameAlreadyEnded,

    /// The acting player holds no token of the required category.
    #[error("{player} has no {category:?} action token left")]
    ActionUnavailableForPlayer {
        /// The acting player.
        player: PlayerId,
        /// The category the action requires.
        category: ActionCategory,
    },

    /// The action was already claimed this round.
    #[error("{action:?} was already claimed this round")]
    ActionAlreadyClaimed {
        /// The claimed action.
        action: ActionId,
    },

    /// Spice, solari or garrison troops below the action's cost.
    #[error("{resource:?} required: {required}, available: {available}")]
    InsufficientResources {
        /// The lacking resource.
        resource: Resource,
        /// Amount the action needs.
        required: u32,
        /// Amount the player holds.
        available: u32,
    },

    /// Out-of-range troop count, sell amount or target.
    #[error("invalid argument: {0}")]
    InvalidArgument(ArgumentError),

    /// A one-time upgrade was requested again.
    #[error("{player} already acquired {upgrade:?}")]
    AlreadyAcquired {
        /// The acting player.
        player: PlayerId,
        /// The upgrade that was already taken.
        upgrade: Upgrade,
    },

    /// The active player has no agents left. Indicates a caller bug.
    #[error("{player} is active but has no agents left")]
    InternalInvariantViolation {
        /// The active player.
        player: PlayerId,
    },
}
