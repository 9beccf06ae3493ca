//! Configuration domain module
//!
//! Value objects for each settings group. Structural checks run at
//! construction; tunable values are checked on demand and reported as warnings.

pub mod exchange_settings;
pub mod learning_settings;
pub mod risk_settings;

pub use exchange_settings::ExchangeSettings;
pub use learning_settings::LearningSettings;
pub use risk_settings::RiskSettings;
