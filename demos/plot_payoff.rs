// demos/plot_payoff.rs

//! Render the call/put payoff diagram of a scenario.
//!
//! Usage:
//!     cargo run --example plot_payoff [-- <scenario.toml>]
//!
//! Writes payoff.svg and payoff.csv to the working directory.

use anyhow::Result;
use bs_greeks::{default_scenarios, evaluate_scenario, render_payoff_chart, ScenarioConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let scenario = match std::env::args().nth(1) {
        Some(path) => ScenarioConfig::from_toml_file(path)?,
        None => default_scenarios::textbook(),
    };

    let (report, curve) = evaluate_scenario(&scenario)?;
    println!("{}\n", report);

    render_payoff_chart(&curve, &scenario.chart, "payoff.svg")?;
    curve.write_csv("payoff.csv")?;

    println!("Chart saved to payoff.svg");
    println!("Curve saved to payoff.csv ({} points)", curve.len());
    Ok(())
}
