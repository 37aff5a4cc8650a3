use crate::scenario::types::OptionParameters;
use anyhow::{bail, Result};

/// Settings of the payoff chart and the spot grid it is sampled on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartConfig {
    /// Lowest underlying price at maturity on the grid
    #[cfg_attr(feature = "serde", serde(default = "default_spot_min"))]
    pub spot_min: f64,

    /// Highest underlying price at maturity on the grid (inclusive)
    #[cfg_attr(feature = "serde", serde(default = "default_spot_max"))]
    pub spot_max: f64,

    /// Number of grid points
    #[cfg_attr(feature = "serde", serde(default = "default_samples"))]
    pub samples: usize,

    #[cfg_attr(feature = "serde", serde(default = "default_width"))]
    pub width: u32,

    #[cfg_attr(feature = "serde", serde(default = "default_height"))]
    pub height: u32,

    #[cfg_attr(feature = "serde", serde(default = "default_title"))]
    pub title: String,

    #[cfg_attr(feature = "serde", serde(default = "default_x_desc"))]
    pub x_desc: String,

    #[cfg_attr(feature = "serde", serde(default = "default_y_desc"))]
    pub y_desc: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            spot_min: default_spot_min(),
            spot_max: default_spot_max(),
            samples: default_samples(),
            width: default_width(),
            height: default_height(),
            title: default_title(),
            x_desc: default_x_desc(),
            y_desc: default_y_desc(),
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.spot_min.is_finite() && self.spot_max.is_finite()) {
            bail!(
                "Spot range must be finite, got: [{}, {}]",
                self.spot_min,
                self.spot_max
            );
        }
        if self.spot_min >= self.spot_max {
            bail!(
                "Empty spot range: spot_min={} spot_max={}",
                self.spot_min,
                self.spot_max
            );
        }
        if self.samples < 2 {
            bail!("At least 2 samples are required, got: {}", self.samples);
        }
        if self.width == 0 || self.height == 0 {
            bail!("Invalid chart size: {}x{}", self.width, self.height);
        }
        Ok(())
    }
}

/// A full pricing scenario: one option plus how to chart its payoff.
///
/// # Example TOML
///
/// ```toml
/// [option]
/// spot = 100.0
/// strike = 105.0
/// years_to_exp = 1.0
/// r = 0.05
/// sigma = 0.2
///
/// [chart]
/// samples = 200
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_option"))]
    pub option: OptionParameters,

    #[cfg_attr(feature = "serde", serde(default))]
    pub chart: ChartConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            option: default_option(),
            chart: ChartConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// Textbook example: S=100, K=105, one year, 5% rate, 20% vol.
    pub fn textbook() -> Self {
        Self::default()
    }

    /// Same market as [`ScenarioConfig::textbook`] struck at the money.
    pub fn at_the_money() -> Self {
        Self {
            option: OptionParameters {
                strike: 100.0,
                ..default_option()
            },
            chart: ChartConfig::default(),
        }
    }

    /// One-week expiry, where gamma dominates near the strike.
    pub fn short_dated() -> Self {
        Self {
            option: OptionParameters {
                years_to_exp: 7.0 / 365.0,
                ..default_option()
            },
            chart: ChartConfig::default(),
        }
    }

    /// Check both tables before anything is priced or drawn.
    pub fn validate(&self) -> Result<()> {
        self.option.validate()?;
        self.chart.validate()
    }

    /// Parse and validate a scenario from TOML text. Missing fields take defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        use anyhow::Context;

        let config: ScenarioConfig =
            toml::from_str(text).context("Failed to parse scenario TOML")?;
        config.validate()?;
        tracing::debug!(
            spot = config.option.spot,
            strike = config.option.strike,
            years_to_exp = config.option.years_to_exp,
            r = config.option.r,
            sigma = config.option.sigma,
            "Loaded scenario"
        );
        Ok(config)
    }

    /// Read a scenario file from disk.
    #[cfg(feature = "serde")]
    pub fn from_toml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid scenario {}", path.display()))
    }

    #[cfg(feature = "serde")]
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn default_option() -> OptionParameters {
    OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.2)
}

fn default_spot_min() -> f64 {
    50.0
}

fn default_spot_max() -> f64 {
    150.0
}

fn default_samples() -> usize {
    100
}

fn default_width() -> u32 {
    1024
}

fn default_height() -> u32 {
    640
}

fn default_title() -> String {
    "Call and Put Payoff".to_string()
}

fn default_x_desc() -> String {
    "Underlying price at maturity".to_string()
}

fn default_y_desc() -> String {
    "Payoff".to_string()
}
