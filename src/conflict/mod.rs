//! Conflicts: the per-round reward schedule and its resolution.
//!
//! - `deck`: the conflict catalog and the tier-by-tier shuffled deck
//! - `resolver`: distributes a conflict's reward tiers by deployed strength

pub mod deck;
pub mod resolver;

pub use deck::{Conflict, ConflictDeck, ConflictReward};
pub use resolver::{Award, ConflictOutcome, ConflictResolver};
