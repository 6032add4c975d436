//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Random seed for round draws.
    /// `None` seeds from OS entropy; same seed produces the same rounds.
    pub seed: Option<u64>,

    /// Maximum resolved rounds kept in history (0 = no history).
    /// Oldest rounds are evicted first.
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_capacity: 100,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom history capacity.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Build the RNG described by this config.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.history_capacity, 100);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default().with_seed(123).with_history_capacity(5);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.rng().seed(), 123);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        // missing fields fall back to defaults
        let partial: EngineConfig = serde_json::from_str(r#"{"seed": 3}"#).unwrap();
        assert_eq!(partial.history_capacity, 100);
    }
}
