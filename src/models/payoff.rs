//! Terminal payoffs and the sampled payoff curve consumed by the chart renderer.

use anyhow::{Context, Result};
use std::path::Path;

use crate::scenario::config::ChartConfig;
use crate::scenario::types::OptionType;

/// Value of the option at maturity for a given underlying price.
pub fn payoff(option_type: OptionType, spot_at_maturity: f64, strike: f64) -> f64 {
    match option_type {
        OptionType::Call => (spot_at_maturity - strike).max(0.0),
        OptionType::Put => (strike - spot_at_maturity).max(0.0),
    }
}

/// `samples` evenly spaced points from `start` to `end`, both ends included.
///
/// One sample yields `[start]`; zero samples yield an empty grid.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // Pin the last point so rounding never drifts past `end`
            grid[n - 1] = end;
            grid
        }
    }
}

/// Call and put payoffs sampled on a spot grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffCurve {
    pub strike: f64,
    pub spots: Vec<f64>,
    pub call: Vec<f64>,
    pub put: Vec<f64>,
}

impl PayoffCurve {
    /// Sample both payoffs on the grid described by `config`.
    pub fn build(strike: f64, config: &ChartConfig) -> Self {
        Self::from_spots(
            strike,
            linspace(config.spot_min, config.spot_max, config.samples),
        )
    }

    pub fn from_spots(strike: f64, spots: Vec<f64>) -> Self {
        let call = spots
            .iter()
            .map(|&st| payoff(OptionType::Call, st, strike))
            .collect();
        let put = spots
            .iter()
            .map(|&st| payoff(OptionType::Put, st, strike))
            .collect();

        Self {
            strike,
            spots,
            call,
            put,
        }
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    pub fn values(&self, option_type: OptionType) -> &[f64] {
        match option_type {
            OptionType::Call => &self.call,
            OptionType::Put => &self.put,
        }
    }

    /// Points `(spot, payoff)` of one leg, ready for plotting.
    pub fn points(&self, option_type: OptionType) -> Vec<(f64, f64)> {
        self.spots
            .iter()
            .copied()
            .zip(self.values(option_type).iter().copied())
            .collect()
    }

    /// Largest payoff across both legs, 0 for an empty curve.
    pub fn max_payoff(&self) -> f64 {
        self.call
            .iter()
            .chain(self.put.iter())
            .copied()
            .fold(0.0, f64::max)
    }

    /// Write the curve as CSV with a `spot,call_payoff,put_payoff` header.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        self.write_records(&mut writer)?;
        tracing::info!(path = %path.display(), rows = self.len(), "Wrote payoff curve");
        Ok(())
    }

    /// Same layout as [`PayoffCurve::write_csv`], returned in memory.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        self.write_records(&mut writer)?;
        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {}", e))?;
        Ok(String::from_utf8(bytes)?)
    }

    fn write_records<W: std::io::Write>(&self, writer: &mut csv::Writer<W>) -> Result<()> {
        writer.write_record(["spot", "call_payoff", "put_payoff"])?;
        for ((spot, call), put) in self.spots.iter().zip(&self.call).zip(&self.put) {
            writer.write_record(&[spot.to_string(), call.to_string(), put.to_string()])?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(50.0, 150.0, 100);
        assert_eq!(grid.len(), 100);
        assert_eq!(grid[0], 50.0);
        assert_eq!(grid[99], 150.0);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_csv_layout() {
        let curve = PayoffCurve::from_spots(100.0, vec![90.0, 110.0]);
        let text = curve.to_csv_string().unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["spot,call_payoff,put_payoff", "90,0,10", "110,10,0"]);
    }
}
