use arlte::domain::config::{ExchangeSettings, LearningSettings, RiskSettings};
use proptest::prelude::*;

#[test]
fn test_position_size_reference_values() {
    let risk = RiskSettings::default();
    assert_eq!(risk.max_position_size, 0.1);

    assert_eq!(risk.calculate_position_size(10_000.0, 0.0), 0.0);

    // min(0.1 / 0.5 * 10000, 10000 * 0.1) = min(2000, 1000)
    let size = risk.calculate_position_size(10_000.0, 0.5);
    assert!((size - 1000.0).abs() < 1e-9, "size = {}", size);
}

#[test]
fn test_position_size_zero_portfolio() {
    let risk = RiskSettings::default();
    assert_eq!(risk.calculate_position_size(0.0, 0.3), 0.0);
}

proptest! {
    #[test]
    fn prop_non_empty_name_always_builds(
        name in "[A-Za-z0-9_-]{1,24}",
        sandbox in any::<bool>(),
        rate_limit in any::<u32>(),
        timeout_ms in any::<u64>(),
    ) {
        let result =
            ExchangeSettings::new(name.clone(), None, None, sandbox, rate_limit, timeout_ms);
        prop_assert!(result.is_ok());
        prop_assert_eq!(result.unwrap().name, name);
    }

    #[test]
    fn prop_empty_name_always_fails(
        sandbox in any::<bool>(),
        api_key in proptest::option::of("[a-z]{1,8}"),
        secret in proptest::option::of("[a-z]{1,8}"),
    ) {
        prop_assert!(ExchangeSettings::new("", api_key, secret, sandbox, 1000, 30_000).is_err());
    }

    #[test]
    fn prop_learning_rate_outside_unit_interval_warns(
        lr in prop_oneof![-1.0e6f64..=0.0, 1.0f64..1.0e6],
    ) {
        let settings = LearningSettings { learning_rate: lr, ..Default::default() };
        let warnings = settings.validate();
        let expected = format!("Learning rate {} outside recommended range (0,1)", lr);
        prop_assert!(warnings.contains(&expected), "warnings: {:?}", warnings);
    }

    #[test]
    fn prop_learning_rate_inside_unit_interval_is_quiet(lr in 1.0e-12f64..1.0) {
        let settings = LearningSettings { learning_rate: lr, ..Default::default() };
        prop_assert!(settings.validate().iter().all(|w| !w.starts_with("Learning rate")));
    }

    #[test]
    fn prop_position_size_never_exceeds_flat_cap(
        portfolio_value in 0.0f64..1.0e9,
        volatility in -10.0f64..10.0,
        max_position_size in 0.0f64..=1.0,
    ) {
        let risk = RiskSettings { max_position_size, ..Default::default() };
        let size = risk.calculate_position_size(portfolio_value, volatility);
        prop_assert!(size <= portfolio_value * max_position_size);
        prop_assert!(size >= 0.0);
    }

    #[test]
    fn prop_non_positive_volatility_sizes_to_zero(
        portfolio_value in 0.0f64..1.0e9,
        volatility in -1.0e3f64..=0.0,
    ) {
        let risk = RiskSettings::default();
        prop_assert_eq!(risk.calculate_position_size(portfolio_value, volatility), 0.0);
    }
}
