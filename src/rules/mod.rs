//! Game rules: the engine, turn advancement and scoring.
//!
//! `GameEngine` is the only entry point callers need. It validates actions,
//! applies their effects and drives rounds forward. The other modules are the
//! pieces it is built from.

pub mod engine;
pub mod scoring;
pub mod turn;

pub use engine::{EngineCheckpoint, GameEngine};
pub use scoring::{GameResult, ScoringEngine};
pub use turn::TurnOutcome;
