//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Number of rounds in a game.
pub const MAX_ROUNDS: u32 = 8;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the conflict-deck shuffle and token draws.
    /// Same seed produces identical games for identical inputs.
    pub seed: u64,

    /// Cap on the spice the Spice Silo yields.
    pub max_spice_silo: u32,

    /// Troops each player starts with in the garrison.
    pub initial_troops: u32,

    /// Log a per-player summary at `info` level when the game ends.
    pub log_game_summary: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_spice_silo: 4,
            initial_troops: 3,
            log_game_summary: false,
        }
    }
}

impl EngineConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom spice silo cap.
    #[must_use]
    pub fn with_max_spice_silo(mut self, cap: u32) -> Self {
        self.max_spice_silo = cap.max(1);
        self
    }

    /// Create a new config with custom starting troops.
    #[must_use]
    pub fn with_initial_troops(mut self, troops: u32) -> Self {
        self.initial_troops = troops;
        self
    }

    /// Enable or disable the end-of-game summary.
    #[must_use]
    pub fn with_game_summary(mut self, enabled: bool) -> Self {
        self.log_game_summary = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_spice_silo, 4);
        assert_eq!(config.initial_troops, 3);
        assert!(!config.log_game_summary);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_seed(123)
            .with_max_spice_silo(0)
            .with_initial_troops(5)
            .with_game_summary(true);

        assert_eq!(config.seed, 123);
        assert_eq!(config.max_spice_silo, 1);
        assert_eq!(config.initial_troops, 5);
        assert!(config.log_game_summary);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
