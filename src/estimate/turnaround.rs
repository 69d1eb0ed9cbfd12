//! Turnaround rule: categorical by quality, independent of every other field

use serde::{Serialize, Serializer};

use crate::domain::PrintQuality;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turnaround {
    Quick,
    Standard,
    Extended,
}

impl Turnaround {
    pub fn as_str(&self) -> &'static str {
        match self {
            Turnaround::Quick => "2–3 minutes",
            Turnaround::Standard => "5–8 minutes",
            Turnaround::Extended => "10–15 minutes",
        }
    }

    /// Bounds in minutes (min, max)
    pub fn minutes(&self) -> (u32, u32) {
        match self {
            Turnaround::Quick => (2, 3),
            Turnaround::Standard => (5, 8),
            Turnaround::Extended => (10, 15),
        }
    }
}

impl std::fmt::Display for Turnaround {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Turnaround {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

pub fn estimated_time(quality: PrintQuality) -> Turnaround {
    match quality {
        PrintQuality::Draft => Turnaround::Quick,
        PrintQuality::Normal => Turnaround::Standard,
        PrintQuality::High => Turnaround::Extended,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_strings() {
        assert_eq!(estimated_time(PrintQuality::Draft).as_str(), "2–3 minutes");
        assert_eq!(estimated_time(PrintQuality::Normal).as_str(), "5–8 minutes");
        assert_eq!(estimated_time(PrintQuality::High).as_str(), "10–15 minutes");
    }

    #[test]
    fn test_strings_are_distinct() {
        let mut seen: Vec<&str> = PrintQuality::ALL.iter().map(|q| estimated_time(*q).as_str()).collect();
        seen.dedup();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_minutes_bounds() {
        assert_eq!(Turnaround::Extended.minutes(), (10, 15));
    }
}
