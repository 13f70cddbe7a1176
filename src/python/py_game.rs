//! Game bindings for Python.

use std::collections::HashMap;

use pyo3::prelude::*;

use crate::core::{EngineConfig, PlayerId};
use crate::rules::{GameEngine, GameResult, TurnOutcome};

use super::py_core::{parse_action_id, to_py_err, PyAction, PyPlayerId};

/// Python wrapper for GameEngine.
#[pyclass(name = "ThumperGame")]
pub struct PyThumperGame {
    engine: GameEngine,
}

#[pymethods]
impl PyThumperGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - max_spice_silo: Cap on the spice silo yield
    /// - initial_troops: Garrison troops each player starts with
    /// - log_game_summary: Emit a per-player summary when the game ends
    #[new]
    #[pyo3(signature = (seed = 42, max_spice_silo = 4, initial_troops = 3, log_game_summary = false))]
    fn new(seed: u64, max_spice_silo: u32, initial_troops: u32, log_game_summary: bool) -> Self {
        let config = EngineConfig::default()
            .with_seed(seed)
            .with_max_spice_silo(max_spice_silo)
            .with_initial_troops(initial_troops)
            .with_game_summary(log_game_summary);
        Self {
            engine: GameEngine::new(config),
        }
    }

    /// Start a new game with a reshuffled conflict deck.
    fn reset(&mut self) {
        self.engine.reset();
    }

    /// Perform an action for the current player.
    ///
    /// Returns "next_player", "round_ended" or "game_ended". Raises
    /// `ValueError` if the action is not allowed.
    fn perform(&mut self, action: &PyAction) -> PyResult<&'static str> {
        let outcome = self.engine.perform(action.0).map_err(to_py_err)?;
        Ok(match outcome {
            TurnOutcome::NextPlayer(_) => "next_player",
            TurnOutcome::RoundEnded { .. } => "round_ended",
            TurnOutcome::GameEnded { .. } => "game_ended",
        })
    }

    /// Spend an agent without acting.
    fn pass_turn(&mut self) -> PyResult<()> {
        self.engine.pass_turn().map(|_| ()).map_err(to_py_err)
    }

    /// Check whether an action would currently succeed.
    fn can_perform(&self, action: &PyAction) -> bool {
        self.engine.can_perform(&action.0)
    }

    /// Every concrete action the current player may take.
    fn legal_actions(&self) -> Vec<PyAction> {
        self.engine.legal_actions().into_iter().map(PyAction).collect()
    }

    /// Names of the unclaimed catalog actions.
    fn available_actions(&self) -> Vec<&'static str> {
        self.engine.available_actions().into_iter().map(|id| id.spec().name).collect()
    }

    /// Whether a catalog action is still unclaimed this round.
    fn is_available(&self, name: &str) -> PyResult<bool> {
        let id = parse_action_id(name)?;
        Ok(self.engine.state().ledger.is_available(id))
    }

    #[getter]
    fn current_player(&self) -> PyPlayerId {
        PyPlayerId(self.engine.current_player())
    }

    #[getter]
    fn round(&self) -> u32 {
        self.engine.round()
    }

    #[getter]
    fn game_ended(&self) -> bool {
        self.engine.is_game_ended()
    }

    #[getter]
    fn spice_in_silo(&self) -> u32 {
        self.engine.spice_in_silo()
    }

    /// Identifier of the conflict fought this round.
    #[getter]
    fn current_conflict(&self) -> Option<u32> {
        self.engine.current_conflict().map(|c| c.id)
    }

    /// A player's resources and standing.
    fn player_stats(&self, player: &PyPlayerId) -> Option<HashMap<&'static str, i64>> {
        let p = self.engine.player(player.0)?;
        Some(HashMap::from([
            ("spice", i64::from(p.spice)),
            ("solari", i64::from(p.solari)),
            ("troops_garrison", i64::from(p.troops_garrison)),
            ("troops_deployed", i64::from(p.troops_deployed)),
            ("influence", i64::from(p.influence)),
            ("agents_left", i64::from(p.agents_left)),
            ("victory_points", i64::from(p.victory_points)),
            ("conflict_victory_points", i64::from(p.conflict_victory_points)),
            ("has_palace", i64::from(p.has_palace)),
            ("has_swordmaster", i64::from(p.has_swordmaster)),
            ("has_holtzman_shield", i64::from(p.has_holtzman_shield)),
        ]))
    }

    /// Seat indices, best first.
    fn ranked_players(&self) -> Vec<usize> {
        self.engine.ranked_players().into_iter().map(PlayerId::index).collect()
    }

    /// Winning seat indices, or None while the game runs.
    fn winners(&self) -> Option<Vec<usize>> {
        match self.engine.result()? {
            GameResult::Winner(p) => Some(vec![p.index()]),
            GameResult::Winners(ps) => Some(ps.into_iter().map(PlayerId::index).collect()),
        }
    }

    /// Copy the game for simulation.
    fn copy(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = if self.engine.is_game_ended() { "ended" } else { "ongoing" };
        format!(
            "ThumperGame(round={}, current=P{}, status={})",
            self.engine.round(),
            self.engine.current_player_index(),
            status
        )
    }
}
