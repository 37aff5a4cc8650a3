use std::fmt;

use crate::models::bs::{greeks, price};
use crate::scenario::types::{GreeksResult, OptionParameters, OptionType, PricingResult};

/// Call and put prices plus Greeks of one scenario, printable as a console summary.
///
/// Prices are shown with 2 decimals, deltas and vega with 3, gamma with 5.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub params: OptionParameters,
    pub call: PricingResult,
    pub put: PricingResult,
    pub greeks: GreeksResult,
}

impl Report {
    pub fn new(params: OptionParameters) -> Self {
        Self {
            params,
            call: price(&params, OptionType::Call),
            put: price(&params, OptionType::Put),
            greeks: greeks(&params),
        }
    }

    pub fn pricing(&self, option_type: OptionType) -> &PricingResult {
        match option_type {
            OptionType::Call => &self.call,
            OptionType::Put => &self.put,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "call price: {:.2}", self.call.price)?;
        writeln!(f, "put price: {:.2}", self.put.price)?;
        writeln!(f, "delta call:{:.3}", self.greeks.delta_call)?;
        writeln!(f, "delta put :{:.3}", self.greeks.delta_put)?;
        writeln!(f, "gamma:{:.5}", self.greeks.gamma)?;
        write!(f, "vega : {:.3}", self.greeks.vega)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_report_text() {
        let report = Report::new(OptionParameters::new(100.0, 105.0, 1.0, 0.05, 0.2));
        let expected = "call price: 8.02\n\
                        put price: 7.90\n\
                        delta call:0.542\n\
                        delta put :-0.458\n\
                        gamma:0.01984\n\
                        vega : 3.967";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_pricing_selects_leg() {
        let report = Report::new(OptionParameters::new(100.0, 100.0, 0.5, 0.01, 0.3));
        assert_eq!(report.pricing(OptionType::Call), &report.call);
        assert_eq!(report.pricing(OptionType::Put), &report.put);
    }
}
