//! Reinforcement Learning Hyperparameters
//!
//! Values are accepted as given at construction. Range checks run only
//! through `validate()` and produce warnings, never errors.

use serde::Serialize;

/// RL agent hyperparameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningSettings {
    pub learning_rate: f64,
    /// Reward discount (gamma)
    pub discount_factor: f64,
    /// Epsilon for epsilon-greedy exploration
    pub exploration_rate: f64,
    pub batch_size: usize,
    /// Replay memory capacity in transitions
    pub memory_size: usize,
    /// Steps between target network updates
    pub update_frequency: usize,
}

impl Default for LearningSettings {
    fn default() -> Self {
        Self {
            learning_rate: 0.001,
            discount_factor: 0.99,
            exploration_rate: 0.1,
            batch_size: 32,
            memory_size: 10_000,
            update_frequency: 100,
        }
    }
}

impl LearningSettings {
    /// Collect human-readable warnings for out-of-range hyperparameters.
    ///
    /// An empty vector means the settings are fully valid. Only the learning
    /// rate and exploration rate carry documented bounds.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        // NaN fails the containment check as well
        if !(self.learning_rate > 0.0 && self.learning_rate < 1.0) {
            warnings.push(format!(
                "Learning rate {} outside recommended range (0,1)",
                self.learning_rate
            ));
        }

        if !(0.0..=1.0).contains(&self.exploration_rate) {
            warnings.push(format!(
                "Exploration rate {} must be in [0,1]",
                self.exploration_rate
            ));
        }

        warnings
    }
}
