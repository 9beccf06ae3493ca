//! Risk Management Settings
//!
//! This module defines the `RiskSettings` value object. Fraction fields are
//! expressed relative to portfolio value (e.g. 0.1 = 10%).
//!
//! # Position sizing
//!
//! `calculate_position_size` scales the allocation inversely with volatility
//! and caps it at the flat maximum allocation:
//!
//! ```text
//! size = min((max_position_size / volatility) * portfolio_value,
//!            portfolio_value * max_position_size)
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Serialize;

/// Risk thresholds value object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSettings {
    /// Maximum allocation per trade (e.g., 0.1 = 10%)
    pub max_position_size: f64,
    /// Maximum daily loss (e.g., 0.02 = 2%)
    pub max_daily_loss: f64,
    pub stop_loss_pct: f64,
    pub take_profit_pct: f64,
    /// Leverage multiplier, not a fraction
    pub max_leverage: f64,
    pub correlation_threshold: f64,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            max_position_size: 0.1,      // 10%
            max_daily_loss: 0.02,        // 2%
            stop_loss_pct: 0.02,         // 2%
            take_profit_pct: 0.05,       // 5%
            max_leverage: 3.0,
            correlation_threshold: 0.7,
        }
    }
}

impl RiskSettings {
    /// Volatility-adjusted position size, capped at the flat maximum allocation.
    ///
    /// Returns 0 when volatility is zero, negative or NaN.
    pub fn calculate_position_size(&self, portfolio_value: f64, volatility: f64) -> f64 {
        if volatility.is_nan() || volatility <= 0.0 {
            return 0.0;
        }

        let risk_adjusted_size = self.max_position_size / volatility;
        let flat_cap = portfolio_value * self.max_position_size;

        (risk_adjusted_size * portfolio_value).min(flat_cap)
    }

    /// Decimal variant of `calculate_position_size` for order sizing in money units.
    ///
    /// Returns `None` when `max_position_size` has no Decimal representation
    /// (NaN, infinite or beyond `Decimal::MAX`) or the flat cap overflows.
    pub fn calculate_position_size_decimal(
        &self,
        portfolio_value: Decimal,
        volatility: Decimal,
    ) -> Option<Decimal> {
        if volatility <= Decimal::ZERO {
            return Some(Decimal::ZERO);
        }

        let max_position = self.max_position_size_decimal()?;
        let flat_cap = portfolio_value.checked_mul(max_position)?;

        match max_position
            .checked_div(volatility)
            .and_then(|ratio| ratio.checked_mul(portfolio_value))
        {
            Some(risk_adjusted) => Some(risk_adjusted.min(flat_cap)),
            // Overflowing upwards means the adjusted size is above the cap
            None if portfolio_value >= Decimal::ZERO && max_position >= Decimal::ZERO => {
                Some(flat_cap)
            }
            None => None,
        }
    }

    /// Convert max_position_size to Decimal for calculations
    pub fn max_position_size_decimal(&self) -> Option<Decimal> {
        Decimal::from_f64(self.max_position_size)
    }

    /// Soft range checks. Never called at construction.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let fractions = [
            ("max_position_size", self.max_position_size),
            ("max_daily_loss", self.max_daily_loss),
            ("stop_loss_pct", self.stop_loss_pct),
            ("take_profit_pct", self.take_profit_pct),
            ("correlation_threshold", self.correlation_threshold),
        ];
        for (field, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                warnings.push(format!("Risk {} {} must be in [0,1]", field, value));
            }
        }

        if self.max_leverage.is_nan() || self.max_leverage <= 0.0 {
            warnings.push(format!(
                "Risk max_leverage {} must be positive",
                self.max_leverage
            ));
        }

        warnings
    }
}
