// Closed-form Black-Scholes pricing and Greeks for European options on a
// non-dividend-paying underlying. Inputs are not validated: T = 0 or sigma = 0
// give infinite or NaN intermediates and those propagate to the caller.

use crate::models::utils::{log_moneyness, normal_cdf, normal_pdf};
use crate::scenario::types::{GreeksResult, OptionParameters, OptionType, PricingResult};

/// ∂price/∂σ is divided by this factor before it is reported as vega.
pub const VEGA_SCALE: f64 = 10.0;

/// Standardized distances `(d1, d2)` shared by the pricer and the Greeks.
///
/// ```text
/// d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
/// d2 = d1 - σ·√T
/// ```
pub fn d1_d2(params: &OptionParameters) -> (f64, f64) {
    let vol_sqrt_t = params.total_vol();
    let d1 = (log_moneyness(params.spot, params.strike)
        + (params.r + 0.5 * params.sigma * params.sigma) * params.years_to_exp)
        / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    (d1, d2)
}

/// Black-Scholes price of a European option.
///
/// The returned `d1`/`d2` are the call-convention distances for either
/// option type; they are not negated for puts.
///
/// # Example
///
/// ```rust
/// use bs_greeks::{price, OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.2);
/// let call = price(&params, OptionType::Call);
/// assert!((call.price - 8.02).abs() < 0.01);
/// ```
pub fn price(params: &OptionParameters, option_type: OptionType) -> PricingResult {
    let (d1, d2) = d1_d2(params);
    let s = params.spot;
    let k_disc = params.strike * params.discount_factor();

    let price = match option_type {
        OptionType::Call => s * normal_cdf(d1) - k_disc * normal_cdf(d2),
        OptionType::Put => k_disc * normal_cdf(-d2) - s * normal_cdf(-d1),
    };

    PricingResult {
        option_type,
        price,
        d1,
        d2,
    }
}

/// Delta (call and put), gamma and vega of a European option.
pub fn greeks(params: &OptionParameters) -> GreeksResult {
    let (d1, _d2) = d1_d2(params);
    let sqrt_t = params.years_to_exp.sqrt();
    let pdf_d1 = normal_pdf(d1);

    let delta_call = normal_cdf(d1);
    let delta_put = delta_call - 1.0;
    let gamma = pdf_d1 / (params.spot * params.sigma * sqrt_t);
    let vega = params.spot * pdf_d1 * sqrt_t / VEGA_SCALE;

    GreeksResult {
        delta_call,
        delta_put,
        gamma,
        vega,
    }
}
