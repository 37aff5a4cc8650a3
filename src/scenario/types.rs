use anyhow::{anyhow, bail, Result};
use std::fmt;
use std::str::FromStr;

/// Option flavour. Parsing is strict: only "call" and "put" are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(anyhow!("Invalid option type: {}", other)),
        }
    }
}

/// Market and contract inputs of a single European option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Current underlying price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub years_to_exp: f64,
    /// Continuously compounded risk-free rate
    pub r: f64,
    /// Annualised volatility (as decimal, e.g., 0.2 for 20%)
    pub sigma: f64,
}

impl OptionParameters {
    pub fn new(spot: f64, strike: f64, years_to_exp: f64, r: f64, sigma: f64) -> Self {
        Self {
            spot,
            strike,
            years_to_exp,
            r,
            sigma,
        }
    }

    /// Fail-fast domain check.
    ///
    /// The pricing functions never call this; they let NaN and infinities
    /// propagate. Use it where inputs come from outside, e.g. config files.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("years_to_exp", self.years_to_exp),
            ("r", self.r),
            ("sigma", self.sigma),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                bail!("{} must be finite, got: {}", name, value);
            }
        }

        if self.spot <= 0.0 {
            bail!("Spot must be positive, got: {}", self.spot);
        }
        if self.strike <= 0.0 {
            bail!("Strike must be positive, got: {}", self.strike);
        }
        if self.years_to_exp <= 0.0 {
            bail!(
                "Time to expiration must be positive, got: {}",
                self.years_to_exp
            );
        }
        if self.sigma <= 0.0 {
            bail!("Volatility must be positive, got: {}", self.sigma);
        }
        Ok(())
    }

    /// sigma * sqrt(T), the total standard deviation of log-returns to maturity.
    pub fn total_vol(&self) -> f64 {
        self.sigma * self.years_to_exp.sqrt()
    }

    /// Discount factor e^(-rT).
    pub fn discount_factor(&self) -> f64 {
        (-self.r * self.years_to_exp).exp()
    }
}

/// Price of one option together with the standardized distances used to get it.
///
/// `d1` and `d2` are always in call convention, also when `option_type` is a put.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub option_type: OptionType,
    pub price: f64,
    pub d1: f64,
    pub d2: f64,
}

/// First and second order spot sensitivities plus vega.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    pub delta_call: f64,
    /// Always `delta_call - 1`
    pub delta_put: f64,
    pub gamma: f64,
    /// S·φ(d1)·√T / 10, i.e. ∂price/∂σ divided by 10
    pub vega: f64,
}

impl GreeksResult {
    pub fn delta(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.delta_call,
            OptionType::Put => self.delta_put,
        }
    }
}
