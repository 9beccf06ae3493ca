use arlte::config::{ArlteConfig, ConfigSource};
use arlte::domain::config::ExchangeSettings;
use arlte::domain::errors::ValidationError;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;

/// Shared buffer the fmt subscriber writes into
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(Level::WARN)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

fn live(api_key: Option<&str>, secret: Option<&str>) -> Result<ExchangeSettings, ValidationError> {
    ExchangeSettings::new(
        "binance",
        api_key.map(str::to_string),
        secret.map(str::to_string),
        false,
        1000,
        30_000,
    )
}

#[test]
fn test_live_without_credentials_warns_and_succeeds() {
    for (api_key, secret) in [(None, None), (Some("key"), None), (None, Some("secret"))] {
        let (result, logs) = capture_logs(|| live(api_key, secret));
        assert!(result.is_ok());
        assert!(logs.contains("WARN"), "logs: {}", logs);
        assert!(
            logs.contains("Live trading enabled for binance but API credentials missing"),
            "logs: {}",
            logs
        );
    }
}

#[test]
fn test_live_with_credentials_is_silent() {
    let (result, logs) = capture_logs(|| live(Some("key"), Some("secret")));
    assert!(result.is_ok());
    assert!(logs.is_empty(), "logs: {}", logs);
}

#[test]
fn test_sandbox_without_credentials_is_silent() {
    let (result, logs) = capture_logs(|| ExchangeSettings::sandbox("binance"));
    assert!(result.is_ok());
    assert!(logs.is_empty(), "logs: {}", logs);
}

#[test]
fn test_empty_name_fails_without_warning() {
    let (result, logs) =
        capture_logs(|| ExchangeSettings::new("", None, None, false, 1000, 30_000));
    assert_eq!(result.unwrap_err(), ValidationError::EmptyExchangeName);
    assert!(logs.is_empty());
}

#[test]
fn test_loader_logs_soft_warnings() {
    let source: ConfigSource = [("RL_LEARNING_RATE", "0"), ("RISK_TAKE_PROFIT_PCT", "3")]
        .into_iter()
        .collect();

    let (result, logs) = capture_logs(|| ArlteConfig::from_source(&source));
    assert!(result.is_ok());
    assert!(logs.contains("Learning rate 0 outside recommended range (0,1)"));
    assert!(logs.contains("take_profit_pct 3"));
}

#[test]
fn test_loader_does_not_log_secrets() {
    let source: ConfigSource = [
        ("BINANCE_API_KEY", "super-secret-key"),
        ("BINANCE_SECRET", "super-secret-value"),
        ("BINANCE_SANDBOX", "false"),
    ]
    .into_iter()
    .collect();

    let (result, logs) = capture_logs(|| ArlteConfig::from_source(&source));
    let config = result.unwrap();
    assert!(!logs.contains("super-secret"));
    assert!(!format!("{:?}", config).contains("super-secret"));
}
