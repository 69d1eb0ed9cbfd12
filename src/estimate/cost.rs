//! Cost rule
//!
//! ```text
//! cost = copies × (A3 ? 3 : 2) × (high ? 1.5 : 1) × (photo ? 2 : 1)
//! ```
//!
//! Computed in whole cents. Every factor is a small integer or a half, and a
//! unit is 100 cents, so the result is exact and needs no rounding.

use serde::{Serialize, Serializer};

use crate::domain::{PaperSize, PaperType, PrintConfiguration, PrintQuality};

const CENTS_PER_UNIT: u32 = 100;

/// Base units per sheet
fn size_units(size: PaperSize) -> u32 {
    match size {
        PaperSize::A4 => 2,
        PaperSize::A3 => 3,
    }
}

/// Quality premium as a ratio (numerator, denominator)
fn quality_ratio(quality: PrintQuality) -> (u32, u32) {
    match quality {
        PrintQuality::High => (3, 2),
        PrintQuality::Draft | PrintQuality::Normal => (1, 1),
    }
}

/// `special` is billed like `regular`.
fn paper_factor(paper_type: PaperType) -> u32 {
    match paper_type {
        PaperType::Photo => 2,
        PaperType::Regular | PaperType::Special => 1,
    }
}

/// Monetary amount with two decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cost {
    cents: u32,
}

impl Cost {
    pub fn from_cents(cents: u32) -> Self {
        Cost { cents }
    }

    pub fn cents(&self) -> u32 {
        self.cents
    }

    pub fn amount(&self) -> f64 {
        self.cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Amount prefixed with a currency symbol, e.g. `R$ 4.00`
    pub fn with_currency(&self, currency: &str) -> String {
        format!("{} {}", currency, self)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / CENTS_PER_UNIT, self.cents % CENTS_PER_UNIT)
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.amount())
    }
}

/// Estimated cost of printing `config`
pub fn estimated_cost(config: &PrintConfiguration) -> Cost {
    let (quality_num, quality_den) = quality_ratio(config.quality);
    let cents = config.copies.get() as u32
        * size_units(config.size)
        * CENTS_PER_UNIT
        * paper_factor(config.paper_type)
        * quality_num
        / quality_den;

    Cost::from_cents(cents)
}
