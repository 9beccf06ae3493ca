//! Configuration module for ARL_TE.
//!
//! This module loads every settings group from a key-value source (normally
//! the process environment) and composes them into `ArlteConfig`, which the
//! rest of the application reads at startup.

mod exchange_env_config;
mod learning_env_config;
mod risk_env_config;
mod source;

pub use exchange_env_config::{DEFAULT_EXCHANGES, ExchangeEnvConfig};
pub use learning_env_config::learning_from_source;
pub use risk_env_config::risk_from_source;
pub use source::ConfigSource;

use crate::domain::config::exchange_settings::{DEFAULT_RATE_LIMIT, DEFAULT_TIMEOUT_MS};
use crate::domain::config::{ExchangeSettings, LearningSettings, RiskSettings};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArlteConfig {
    pub exchanges: BTreeMap<String, ExchangeSettings>,
    pub learning: LearningSettings,
    pub risk: RiskSettings,
}

impl Default for ArlteConfig {
    fn default() -> Self {
        let exchange = ExchangeSettings {
            name: DEFAULT_EXCHANGES.to_string(),
            api_key: None,
            secret: None,
            sandbox: true,
            rate_limit: DEFAULT_RATE_LIMIT,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        };
        Self::new(
            [exchange],
            LearningSettings::default(),
            RiskSettings::default(),
        )
    }
}

impl ArlteConfig {
    /// Compose already-validated groups. Exchanges are keyed by name; a later
    /// entry with the same name replaces an earlier one.
    pub fn new(
        exchanges: impl IntoIterator<Item = ExchangeSettings>,
        learning: LearningSettings,
        risk: RiskSettings,
    ) -> Self {
        Self {
            exchanges: exchanges.into_iter().map(|e| (e.name.clone(), e)).collect(),
            learning,
            risk,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_source(&ConfigSource::from_env())
    }

    /// Load configuration from a key-value source.
    ///
    /// Unparseable values and empty exchange names fail. Out-of-range tunables
    /// are logged as warnings and the configuration is still returned.
    pub fn from_source(source: &ConfigSource) -> Result<Self> {
        let exchange = ExchangeEnvConfig::from_source(source)
            .context("Failed to load exchange config")?;
        let learning = learning_from_source(source).context("Failed to load RL config")?;
        let risk = risk_from_source(source).context("Failed to load risk config")?;

        let config = Self {
            exchanges: exchange.exchanges,
            learning,
            risk,
        };

        info!(
            "Configuration loaded: Exchanges={:?}",
            config.exchanges.keys().collect::<Vec<_>>()
        );

        // Credential warnings were already logged when each exchange was built
        let mut warnings = config.learning.validate();
        warnings.extend(config.risk.validate());
        for warning in &warnings {
            warn!("{}", warning);
        }

        Ok(config)
    }

    pub fn exchange(&self, name: &str) -> Option<&ExchangeSettings> {
        self.exchanges.get(name)
    }

    /// All soft warnings: exchanges (by name), then RL, then risk.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings: Vec<String> = self
            .exchanges
            .values()
            .filter_map(ExchangeSettings::credential_warning)
            .collect();
        warnings.extend(self.learning.validate());
        warnings.extend(self.risk.validate());
        warnings
    }
}
