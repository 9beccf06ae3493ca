//! Key-value configuration source.
//!
//! Loaders read from a `ConfigSource` instead of the process environment so
//! that settings can be built from any map of strings (tests, embedded
//! defaults, a captured environment).

use anyhow::{Context, Result, bail};
use std::collections::HashMap;
use std::env;
use std::str::FromStr;

/// Snapshot of string key-value pairs.
///
/// Blank values are treated as absent, so `KEY=` falls back to the default.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    values: HashMap<String, String>,
}

impl ConfigSource {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Capture the current process environment.
    pub fn from_env() -> Self {
        Self::new(env::vars().collect())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    pub fn optional_string(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    pub fn parse_f64(&self, key: &str, default: f64) -> Result<f64> {
        self.parse(key, default)
    }

    pub fn parse_u32(&self, key: &str, default: u32) -> Result<u32> {
        self.parse(key, default)
    }

    pub fn parse_u64(&self, key: &str, default: u64) -> Result<u64> {
        self.parse(key, default)
    }

    pub fn parse_usize(&self, key: &str, default: usize) -> Result<usize> {
        self.parse(key, default)
    }

    /// Accepts true/false, 1/0 and yes/no, case-insensitive.
    pub fn parse_bool(&self, key: &str, default: bool) -> Result<bool> {
        let Some(raw) = self.get(key) else {
            return Ok(default);
        };
        match raw.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => bail!("Failed to parse {}: expected a boolean, got '{}'", key, raw),
        }
    }

    fn parse<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match self.get(key) {
            Some(raw) => raw
                .parse::<T>()
                .with_context(|| format!("Failed to parse {}", key)),
            None => Ok(default),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
