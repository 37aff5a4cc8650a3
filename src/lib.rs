//! # bs-greeks: Black-Scholes Pricing, Greeks and Payoff Charts
//!
//! `bs-greeks` prices European call and put options with the Black-Scholes closed form
//! and computes their main sensitivities. Everything in the pricing core is a pure
//! function over `f64`; the payoff curve, console report and SVG chart are thin layers
//! on top of it.
//!
//! ## Core Features
//!
//! - **Pricing**: call and put prices together with the standardized distances `d1`, `d2`
//! - **Greeks**: call/put delta, gamma and vega (∂price/∂σ divided by 10)
//! - **Payoff curves**: terminal payoffs sampled on a spot grid, exportable as CSV
//! - **Charts**: SVG payoff diagram with strike marker and moneyness annotations
//! - **Scenarios**: TOML-loadable parameter sets with named presets
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::{greeks, price, OptionParameters, OptionType};
//!
//! let params = OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.2);
//!
//! let call = price(&params, OptionType::Call);
//! let put = price(&params, OptionType::Put);
//! let g = greeks(&params);
//!
//! // Put-call parity: C - P = S - K·e^(-rT)
//! let parity = params.spot - params.strike * params.discount_factor();
//! assert!((call.price - put.price - parity).abs() < 1e-9);
//! assert!((g.delta_call - g.delta_put - 1.0).abs() < 1e-15);
//! ```
//!
//! ## Degenerate Inputs
//!
//! The pricing functions do not validate their inputs. `T = 0` or `sigma = 0` divide by
//! zero and the resulting infinities or NaNs propagate into the outputs. Call
//! [`OptionParameters::validate`] first when inputs come from outside the program;
//! [`ScenarioConfig`] loading does so automatically.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod chart;
pub mod models;
pub mod report;
pub mod scenario;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Pricing core
pub use models::bs::{d1_d2, greeks, price, VEGA_SCALE};
pub use models::utils::{normal_cdf, normal_pdf};

// Data types and configuration
pub use scenario::{
    config::{ChartConfig, ScenarioConfig},
    types::{GreeksResult, OptionParameters, OptionType, PricingResult},
};

// Presentation
pub use chart::render_payoff_chart;
pub use models::payoff::{linspace, payoff, PayoffCurve};
pub use report::Report;

// ================================================================================================
// DEFAULT SCENARIOS
// ================================================================================================

/// Ready-made scenarios for demos, documentation and tests.
///
/// # Available Scenarios
///
/// - [`textbook()`]: S=100, K=105, T=1, r=5%, σ=20%
/// - [`at_the_money()`]: same market with K=100
/// - [`short_dated()`]: textbook strike with one week to expiry
pub mod default_scenarios {
    use crate::scenario::config::ScenarioConfig;

    /// Slightly out-of-the-money call, one year to expiry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_greeks::{default_scenarios, Report};
    ///
    /// let scenario = default_scenarios::textbook();
    /// let report = Report::new(scenario.option);
    /// assert!((report.call.price - 8.02).abs() < 0.01);
    /// ```
    pub fn textbook() -> ScenarioConfig {
        ScenarioConfig::textbook()
    }

    /// Strike equal to spot.
    pub fn at_the_money() -> ScenarioConfig {
        ScenarioConfig::at_the_money()
    }

    /// Seven calendar days to expiry.
    pub fn short_dated() -> ScenarioConfig {
        ScenarioConfig::short_dated()
    }
}

/// Price and Greeks of one scenario plus its payoff curve, the inputs of a full run.
///
/// Validates the scenario first, so unlike [`price`] and [`greeks`] this rejects
/// degenerate parameters with an error.
pub fn evaluate_scenario(scenario: &ScenarioConfig) -> anyhow::Result<(Report, PayoffCurve)> {
    scenario.validate()?;
    let report = Report::new(scenario.option);
    let curve = PayoffCurve::build(scenario.option.strike, &scenario.chart);
    tracing::debug!(
        call = report.call.price,
        put = report.put.price,
        points = curve.len(),
        "Evaluated scenario"
    );
    Ok((report, curve))
}
