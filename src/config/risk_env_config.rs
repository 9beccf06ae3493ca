//! Risk management configuration parsing.
//!
//! Keys: `RISK_MAX_POSITION_SIZE`, `RISK_MAX_DAILY_LOSS`, `RISK_STOP_LOSS_PCT`,
//! `RISK_TAKE_PROFIT_PCT`, `RISK_MAX_LEVERAGE`, `RISK_CORRELATION_THRESHOLD`.

use super::source::ConfigSource;
use crate::domain::config::RiskSettings;
use anyhow::Result;

pub fn risk_from_source(source: &ConfigSource) -> Result<RiskSettings> {
    let defaults = RiskSettings::default();

    Ok(RiskSettings {
        max_position_size: source.parse_f64("RISK_MAX_POSITION_SIZE", defaults.max_position_size)?,
        max_daily_loss: source.parse_f64("RISK_MAX_DAILY_LOSS", defaults.max_daily_loss)?,
        stop_loss_pct: source.parse_f64("RISK_STOP_LOSS_PCT", defaults.stop_loss_pct)?,
        take_profit_pct: source.parse_f64("RISK_TAKE_PROFIT_PCT", defaults.take_profit_pct)?,
        max_leverage: source.parse_f64("RISK_MAX_LEVERAGE", defaults.max_leverage)?,
        correlation_threshold: source
            .parse_f64("RISK_CORRELATION_THRESHOLD", defaults.correlation_threshold)?,
    })
}
