//! Estimation engine
//!
//! Pure functions deriving the estimated cost and turnaround time of a print
//! job from its configuration. Both are total over the configuration domain.

mod cost;
mod turnaround;

pub use cost::{estimated_cost, Cost};
pub use turnaround::{estimated_time, Turnaround};

use serde::Serialize;

use crate::domain::PrintConfiguration;

/// Live summary figures for a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub cost: Cost,
    pub time: Turnaround,
}

impl Estimate {
    pub fn for_config(config: &PrintConfiguration) -> Self {
        Estimate {
            cost: estimated_cost(config),
            time: estimated_time(config.quality),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Copies, PaperSize, PaperType, PrintQuality};

    #[test]
    fn test_unicorn_scenario() {
        let config = PrintConfiguration {
            size: PaperSize::A4,
            quality: PrintQuality::Normal,
            paper_type: PaperType::Regular,
            copies: Copies::clamped(2),
            ..Default::default()
        };

        let estimate = Estimate::for_config(&config);

        assert_eq!(estimate.cost.to_string(), "4.00");
        assert_eq!(estimate.time.as_str(), "5–8 minutes");
    }

    #[test]
    fn test_premium_scenario() {
        let config = PrintConfiguration {
            size: PaperSize::A3,
            quality: PrintQuality::High,
            paper_type: PaperType::Photo,
            copies: Copies::clamped(3),
            ..Default::default()
        };

        let estimate = Estimate::for_config(&config);

        assert_eq!(estimate.cost.amount(), 27.0);
        assert_eq!(estimate.time.as_str(), "10–15 minutes");
    }

    #[test]
    fn test_estimate_tracks_last_mutation() {
        let mut config = PrintConfiguration::default();
        config.set_quality(PrintQuality::High);
        config.set_quality(PrintQuality::Draft);

        let estimate = Estimate::for_config(&config);
        assert_eq!(estimate.time, Turnaround::Quick);
        assert_eq!(estimate.cost.cents(), 200);
    }
}
