//! Exchange configuration parsing.
//!
//! `EXCHANGES` lists the exchange names (comma-separated, default `binance`).
//! Each exchange reads its own keys under an upper-cased prefix, e.g. for
//! `coinbase-pro`:
//! - `COINBASE_PRO_API_KEY`, `COINBASE_PRO_SECRET`
//! - `COINBASE_PRO_SANDBOX` (default true)
//! - `COINBASE_PRO_RATE_LIMIT` (default 1000)
//! - `COINBASE_PRO_TIMEOUT_MS` (default 30000)

use super::source::ConfigSource;
use crate::domain::config::ExchangeSettings;
use crate::domain::config::exchange_settings::{DEFAULT_RATE_LIMIT, DEFAULT_TIMEOUT_MS};
use crate::domain::errors::ValidationError;
use anyhow::{Context, Result};
use std::collections::BTreeMap;

pub const DEFAULT_EXCHANGES: &str = "binance";

/// Exchange settings keyed by exchange name
#[derive(Debug, Clone, Default)]
pub struct ExchangeEnvConfig {
    pub exchanges: BTreeMap<String, ExchangeSettings>,
}

impl ExchangeEnvConfig {
    pub fn from_source(source: &ConfigSource) -> Result<Self> {
        let names_str = source.string("EXCHANGES", DEFAULT_EXCHANGES);
        let names: Vec<&str> = names_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if names.is_empty() {
            return Err(ValidationError::EmptyExchangeName).context("Invalid EXCHANGES list");
        }

        // Names that map to the same prefix would silently share settings
        let mut prefixes: BTreeMap<String, &str> = BTreeMap::new();
        let mut exchanges = BTreeMap::new();
        for name in names {
            let prefix = Self::env_prefix(name);
            match prefixes.get(&prefix) {
                Some(&first) if first == name => continue,
                Some(&first) => {
                    return Err(ValidationError::ExchangePrefixCollision {
                        first: first.to_string(),
                        second: name.to_string(),
                        prefix,
                    })
                    .context("Invalid EXCHANGES list");
                }
                None => {}
            }

            let settings = Self::exchange_from_source(source, name)
                .with_context(|| format!("Failed to load exchange '{}'", name))?;
            exchanges.insert(name.to_string(), settings);
            prefixes.insert(prefix, name);
        }

        Ok(Self { exchanges })
    }

    fn exchange_from_source(source: &ConfigSource, name: &str) -> Result<ExchangeSettings> {
        let prefix = Self::env_prefix(name);
        let key = |suffix: &str| format!("{}_{}", prefix, suffix);

        let settings = ExchangeSettings::new(
            name,
            source.optional_string(&key("API_KEY")),
            source.optional_string(&key("SECRET")),
            source.parse_bool(&key("SANDBOX"), true)?,
            source.parse_u32(&key("RATE_LIMIT"), DEFAULT_RATE_LIMIT)?,
            source.parse_u64(&key("TIMEOUT_MS"), DEFAULT_TIMEOUT_MS)?,
        )?;
        Ok(settings)
    }

    /// `coinbase-pro` -> `COINBASE_PRO`
    pub fn env_prefix(name: &str) -> String {
        name.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}
