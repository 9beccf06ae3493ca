//! RL hyperparameter parsing.
//!
//! Keys: `RL_LEARNING_RATE`, `RL_DISCOUNT_FACTOR`, `RL_EXPLORATION_RATE`,
//! `RL_BATCH_SIZE`, `RL_MEMORY_SIZE`, `RL_UPDATE_FREQUENCY`.

use super::source::ConfigSource;
use crate::domain::config::LearningSettings;
use anyhow::Result;

pub fn learning_from_source(source: &ConfigSource) -> Result<LearningSettings> {
    let defaults = LearningSettings::default();

    Ok(LearningSettings {
        learning_rate: source.parse_f64("RL_LEARNING_RATE", defaults.learning_rate)?,
        discount_factor: source.parse_f64("RL_DISCOUNT_FACTOR", defaults.discount_factor)?,
        exploration_rate: source.parse_f64("RL_EXPLORATION_RATE", defaults.exploration_rate)?,
        batch_size: source.parse_usize("RL_BATCH_SIZE", defaults.batch_size)?,
        memory_size: source.parse_usize("RL_MEMORY_SIZE", defaults.memory_size)?,
        update_frequency: source.parse_usize("RL_UPDATE_FREQUENCY", defaults.update_frequency)?,
    })
}
