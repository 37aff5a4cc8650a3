// demos/pricing_demo.rs

//! Price a European call and put and print their Greeks.
//!
//! Usage:
//!     cargo run --example pricing_demo [-- <scenario.toml>]
//!
//! Without an argument the textbook scenario (S=100, K=105, T=1, r=5%, σ=20%) is used.

use anyhow::Result;
use bs_greeks::{default_scenarios, Report, ScenarioConfig};
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
    scenario.validate()?;

    let p = scenario.option;
    println!("Black-Scholes Pricing Demo");
    println!("==========================");
    println!(
        "S={:.2} K={:.2} T={:.4}y r={:.2}% sigma={:.1}%\n",
        p.spot,
        p.strike,
        p.years_to_exp,
        p.r * 100.0,
        p.sigma * 100.0
    );

    let report = Report::new(p);
    println!("{}", report);
    println!("\nd1={:.5} d2={:.5}", report.call.d1, report.call.d2);

    Ok(())
}
