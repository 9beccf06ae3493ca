//! Exchange Connection Settings
//!
//! This module defines the `ExchangeSettings` value object: exchange identity,
//! credentials and connection limits.

use crate::domain::errors::ValidationError;
use serde::Serialize;
use std::fmt;
use tracing::warn;

pub const DEFAULT_RATE_LIMIT: u32 = 1000;
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Exchange connection value object
///
/// # Invariants
///
/// - `name` must not be empty (fatal)
/// - Live trading (`sandbox == false`) should carry both credentials
///   (logged as a warning, never fatal)
#[derive(Clone, PartialEq, Serialize)]
pub struct ExchangeSettings {
    pub name: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    #[serde(skip_serializing)]
    pub secret: Option<String>,
    /// Connect to the exchange test environment. Defaults to `true`.
    pub sandbox: bool,
    /// Requests allowed per rate-limit interval
    pub rate_limit: u32,
    pub timeout_ms: u64,
}

impl ExchangeSettings {
    /// Create a new ExchangeSettings with validation
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyExchangeName` if `name` is empty.
    pub fn new(
        name: impl Into<String>,
        api_key: Option<String>,
        secret: Option<String>,
        sandbox: bool,
        rate_limit: u32,
        timeout_ms: u64,
    ) -> Result<Self, ValidationError> {
        let settings = Self {
            name: name.into(),
            api_key,
            secret,
            sandbox,
            rate_limit,
            timeout_ms,
        };

        if settings.name.is_empty() {
            return Err(ValidationError::EmptyExchangeName);
        }

        if let Some(message) = settings.credential_warning() {
            warn!(exchange = %settings.name, "{}", message);
        }

        Ok(settings)
    }

    /// Sandbox connection without credentials, default limits.
    pub fn sandbox(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, None, None, true, DEFAULT_RATE_LIMIT, DEFAULT_TIMEOUT_MS)
    }

    /// Both credentials present and non-empty
    pub fn has_credentials(&self) -> bool {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.is_empty());
        present(&self.api_key) && present(&self.secret)
    }

    /// Soft check for live trading without credentials.
    pub fn credential_warning(&self) -> Option<String> {
        if !self.sandbox && !self.has_credentials() {
            Some(format!(
                "Live trading enabled for {} but API credentials missing",
                self.name
            ))
        } else {
            None
        }
    }
}

impl fmt::Debug for ExchangeSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |field: &Option<String>| field.as_ref().map(|_| "<redacted>");
        f.debug_struct("ExchangeSettings")
            .field("name", &self.name)
            .field("api_key", &redact(&self.api_key))
            .field("secret", &redact(&self.secret))
            .field("sandbox", &self.sandbox)
            .field("rate_limit", &self.rate_limit)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
