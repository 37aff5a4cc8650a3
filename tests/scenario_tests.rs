#![cfg(feature = "serde")]


use bs_greeks::{
    default_scenarios, evaluate_scenario, payoff, render_payoff_chart, ChartConfig, OptionType,
    PayoffCurve, Report, ScenarioConfig,
};
use tempfile::tempdir;
use test_utils::textbook_params;

/// Default grid: 100 points over [50, 150], payoffs are the elementwise max against the strike.
#[test]
fn test_default_payoff_curve() {
    let config = ChartConfig::default();
    let curve = PayoffCurve::build(105.0, &config);

    assert_eq!(curve.len(), 100);
    assert_eq!(curve.spots[0], 50.0);
    assert_eq!(curve.spots[99], 150.0);

    for ((&st, &call), &put) in curve.spots.iter().zip(&curve.call).zip(&curve.put) {
        assert_eq!(call, (st - 105.0).max(0.0));
        assert_eq!(put, (105.0 - st).max(0.0));
        // At most one leg is in the money
        assert!(call == 0.0 || put == 0.0);
    }

    assert_eq!(curve.max_payoff(), 55.0);
    assert_eq!(curve.points(OptionType::Put)[0], (50.0, 55.0));
}

#[test]
fn test_payoff_at_the_strike_is_zero() {
    assert_eq!(payoff(OptionType::Call, 105.0, 105.0), 0.0);
    assert_eq!(payoff(OptionType::Put, 105.0, 105.0), 0.0);
    assert_eq!(payoff(OptionType::Call, 120.0, 105.0), 15.0);
    assert_eq!(payoff(OptionType::Put, 90.0, 105.0), 15.0);
}

#[test]
fn test_csv_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("payoff.csv");

    let curve = PayoffCurve::build(105.0, &ChartConfig::default());
    curve.write_csv(&path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["spot", "call_payoff", "put_payoff"]
    );

    let rows: Vec<(f64, f64, f64)> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 100);
    assert_eq!(rows[0], (50.0, 0.0, 55.0));
    assert_eq!(rows[99], (150.0, 45.0, 0.0));
}

#[test]
fn test_render_chart_writes_svg() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("payoff.svg");

    let config = ChartConfig::default();
    let curve = PayoffCurve::build(105.0, &config);
    render_payoff_chart(&curve, &config, &path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    for label in ["ATM", "Put ITM", "Call ITM", "Strike (K)", "call payoff", "put payoff"] {
        assert!(svg.contains(label), "Missing '{}' in chart", label);
    }
}

#[test]
fn test_render_chart_rejects_single_point() {
    let dir = tempdir().unwrap();
    let curve = PayoffCurve::from_spots(105.0, vec![100.0]);
    let result = render_payoff_chart(&curve, &ChartConfig::default(), dir.path().join("x.svg"));
    assert!(result.is_err());
}

#[test]
fn test_render_chart_rejects_invalid_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.svg");
    let curve = PayoffCurve::build(105.0, &ChartConfig::default());
    let config = ChartConfig {
        width: 0,
        ..ChartConfig::default()
    };

    let err = render_payoff_chart(&curve, &config, &path).unwrap_err();
    assert!(err.to_string().contains("Invalid chart size"), "{}", err);
    assert!(!path.exists());
}

/// Missing tables and fields fall back to the textbook defaults.
#[test]
fn test_scenario_from_partial_toml() {
    let text = r#"
        [option]
        spot = 100.0
        strike = 100.0
        years_to_exp = 0.5
        r = 0.01
        sigma = 0.3

        [chart]
        samples = 11
    "#;
    let scenario = ScenarioConfig::from_toml_str(text).unwrap();
    assert_eq!(scenario.option.strike, 100.0);
    assert_eq!(scenario.chart.samples, 11);
    assert_eq!(scenario.chart.spot_min, 50.0);
    assert_eq!(scenario.chart.spot_max, 150.0);

    let empty = ScenarioConfig::from_toml_str("").unwrap();
    assert_eq!(empty, ScenarioConfig::default());
    assert_eq!(empty.option, textbook_params());
}

#[test]
fn test_scenario_rejects_invalid_values() {
    let bad_vol = r#"
        [option]
        spot = 100.0
        strike = 105.0
        years_to_exp = 1.0
        r = 0.05
        sigma = 0.0
    "#;
    let err = ScenarioConfig::from_toml_str(bad_vol).unwrap_err();
    assert!(err.to_string().contains("Volatility"), "{}", err);

    let bad_grid = "[chart]\nspot_min = 150.0\nspot_max = 50.0\n";
    assert!(ScenarioConfig::from_toml_str(bad_grid).is_err());

    assert!(ScenarioConfig::from_toml_str("[option]\nspot = \"abc\"").is_err());
}

#[test]
fn test_scenario_toml_round_trip() {
    let scenario = default_scenarios::short_dated();
    let text = scenario.to_toml_string().unwrap();
    let parsed = ScenarioConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, scenario);
}

#[test]
fn test_scenario_file_loading() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scenario.toml");
    std::fs::write(&path, "[chart]\nsamples = 5\n").unwrap();

    let scenario = ScenarioConfig::from_toml_file(&path).unwrap();
    assert_eq!(scenario.chart.samples, 5);

    let missing = ScenarioConfig::from_toml_file(dir.path().join("missing.toml"));
    assert!(missing.is_err());
}

#[test]
fn test_evaluate_scenario() {
    let (report, curve) = evaluate_scenario(&default_scenarios::textbook()).unwrap();
    assert_eq!(report, Report::new(textbook_params()));
    assert_eq!(curve.len(), 100);
    assert_eq!(curve.strike, 105.0);

    let mut broken = default_scenarios::textbook();
    broken.option.years_to_exp = 0.0;
    assert!(evaluate_scenario(&broken).is_err());
}

/// An at-the-money call is worth more than the put when rates are positive.
#[test]
fn test_preset_relationships() {
    let atm = Report::new(default_scenarios::at_the_money().option);
    assert!(atm.call.price > atm.put.price);

    let short = Report::new(default_scenarios::short_dated().option);
    let long = Report::new(default_scenarios::textbook().option);
    assert!(short.call.price < long.call.price);
    assert!(short.greeks.vega < long.greeks.vega);
}
