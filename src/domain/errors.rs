use thiserror::Error;

/// Structural configuration errors.
///
/// These are fatal: a settings group that fails one of these checks is never
/// constructed. Tunable values that are merely out of range are reported as
/// warnings instead (see `LearningSettings::validate`).
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Exchange name cannot be empty")]
    EmptyExchangeName,

    #[error("Exchanges '{first}' and '{second}' both read {prefix}_* settings")]
    ExchangePrefixCollision {
        first: String,
        second: String,
        prefix: String,
    },
}
