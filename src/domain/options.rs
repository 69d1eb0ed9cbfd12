//! Print configuration and its value domains
//!
//! Every field of [`PrintConfiguration`] is a closed type, so a configuration
//! can never hold a value outside its domain. Enumerated fields reject unknown
//! values at the boundary; the copy count is absorbed into `[1, 10]` instead of
//! failing.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use utoipa::ToSchema;

/// Option parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("Unknown {field} '{value}'")]
    Unknown { field: &'static str, value: String },
    #[error("Invalid copies input: '{0}'")]
    InvalidCopiesInput(String),
}

impl OptionError {
    pub fn unknown(field: &'static str, value: &str) -> Self {
        OptionError::Unknown { field, value: value.to_string() }
    }
}

/// Implements `Display` and `FromStr` for an option enum from its `ALL` table.
macro_rules! option_str {
    ($ty:ident, $field:literal) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = OptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| OptionError::unknown($field, s))
            }
        }
    };
}

// ============================================================================
// Paper size
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PaperSize {
    #[default]
    A4,
    A3,
}

impl PaperSize {
    pub const ALL: [PaperSize; 2] = [PaperSize::A4, PaperSize::A3];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::A3 => "A3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4 (21 x 29,7 cm)",
            PaperSize::A3 => "A3 (29,7 x 42 cm)",
        }
    }

    /// Sheet dimensions in centimetres, portrait (width, height)
    pub fn dimensions_cm(&self) -> (f64, f64) {
        match self {
            PaperSize::A4 => (21.0, 29.7),
            PaperSize::A3 => (29.7, 42.0),
        }
    }
}

option_str!(PaperSize, "size");

// ============================================================================
// Orientation
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Portrait, Orientation::Landscape];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }

    /// Human-readable name used in order confirmations
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Portrait => "Retrato",
            Orientation::Landscape => "Paisagem",
        }
    }

    /// Preview frame aspect ratio (width, height)
    pub fn aspect_ratio(&self) -> (u32, u32) {
        match self {
            Orientation::Portrait => (3, 4),
            Orientation::Landscape => (4, 3),
        }
    }
}

option_str!(Orientation, "orientation");

// ============================================================================
// Quality
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PrintQuality {
    Draft,
    #[default]
    Normal,
    High,
}

impl PrintQuality {
    pub const ALL: [PrintQuality; 3] = [PrintQuality::Draft, PrintQuality::Normal, PrintQuality::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrintQuality::Draft => "draft",
            PrintQuality::Normal => "normal",
            PrintQuality::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrintQuality::Draft => "Rascunho",
            PrintQuality::Normal => "Normal",
            PrintQuality::High => "Alta Qualidade",
        }
    }
}

option_str!(PrintQuality, "quality");

// ============================================================================
// Paper type
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaperType {
    #[default]
    Regular,
    Photo,
    Special,
}

impl PaperType {
    pub const ALL: [PaperType; 3] = [PaperType::Regular, PaperType::Photo, PaperType::Special];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaperType::Regular => "regular",
            PaperType::Photo => "photo",
            PaperType::Special => "special",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaperType::Regular => "Papel Comum (75g/m²)",
            PaperType::Photo => "Papel Fotográfico",
            PaperType::Special => "Papel Especial (180g/m²)",
        }
    }
}

option_str!(PaperType, "paper type");

// ============================================================================
// Copies
// ============================================================================

/// Raw copy-count input as it arrives from a form field or JSON body
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CopiesInput {
    Number(f64),
    Text(String),
    /// `null`, booleans, arrays and objects
    Other(serde_json::Value),
}

/// Number of copies, always within `[Copies::MIN, Copies::MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "CopiesInput", into = "u8")]
pub struct Copies(u8);

impl Copies {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Clamp any integer into the allowed range
    pub fn clamped(n: i64) -> Self {
        Copies(n.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Interpret free-form text the way a numeric form field does.
    ///
    /// Leading integer digits are honoured (`"3 copies"` is 3), out-of-range
    /// values are clamped, and anything without digits falls back to 1.
    pub fn from_input(input: &str) -> Self {
        match parse_leading_integer(input) {
            Ok(n) => Self::clamped(n),
            Err(e) => {
                debug!(error = %e, "Falling back to default copies");
                Copies::default()
            }
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Copies {
    fn default() -> Self {
        Copies(Self::MIN)
    }
}

impl From<CopiesInput> for Copies {
    fn from(input: CopiesInput) -> Self {
        match input {
            CopiesInput::Number(n) if n.is_finite() => Copies::clamped(n.trunc() as i64),
            CopiesInput::Number(_) => Copies::default(),
            CopiesInput::Text(s) => Copies::from_input(&s),
            CopiesInput::Other(value) => {
                debug!(input = %value, "Falling back to default copies");
                Copies::default()
            }
        }
    }
}

impl From<Copies> for u8 {
    fn from(copies: Copies) -> Self {
        copies.0
    }
}

impl std::fmt::Display for Copies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse an optional sign followed by at least one digit, ignoring the rest.
/// Magnitudes that overflow saturate.
fn parse_leading_integer(input: &str) -> Result<i64, OptionError> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(OptionError::InvalidCopiesInput(input.to_string()));
    }

    let magnitude = rest.as_bytes()[..digits]
        .iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add((d - b'0') as i64));

    Ok(if negative { -magnitude } else { magnitude })
}

// ============================================================================
// Print configuration
// ============================================================================

/// Current selections for one print session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PrintConfiguration {
    #[serde(default)]
    pub size: PaperSize,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub quality: PrintQuality,
    #[serde(default)]
    pub paper_type: PaperType,
    #[serde(default)]
    #[schema(value_type = u8, minimum = 1, maximum = 10)]
    pub copies: Copies,
}

/// Partial update of a [`PrintConfiguration`]; absent fields are left alone
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ConfigUpdate {
    pub size: Option<PaperSize>,
    pub orientation: Option<Orientation>,
    pub quality: Option<PrintQuality>,
    pub paper_type: Option<PaperType>,
    /// Number or numeric string; malformed input (including `null`) becomes 1,
    /// out-of-range input is clamped
    #[serde(default, deserialize_with = "present_copies")]
    #[schema(value_type = Option<String>)]
    pub copies: Option<Copies>,
}

/// A present `copies` key always yields a value, even when it is `null`
fn present_copies<'de, D>(deserializer: D) -> Result<Option<Copies>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Copies::deserialize(deserializer).map(Some)
}

impl PrintConfiguration {
    pub fn set_size(&mut self, size: PaperSize) {
        self.size = size;
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn set_quality(&mut self, quality: PrintQuality) {
        self.quality = quality;
    }

    pub fn set_paper_type(&mut self, paper_type: PaperType) {
        self.paper_type = paper_type;
    }

    pub fn set_copies(&mut self, copies: Copies) {
        self.copies = copies;
    }

    /// Apply every present field of `update`, in field order
    pub fn apply(&mut self, update: &ConfigUpdate) {
        if let Some(size) = update.size {
            self.set_size(size);
        }
        if let Some(orientation) = update.orientation {
            self.set_orientation(orientation);
        }
        if let Some(quality) = update.quality {
            self.set_quality(quality);
        }
        if let Some(paper_type) = update.paper_type {
            self.set_paper_type(paper_type);
        }
        if let Some(copies) = update.copies {
            self.set_copies(copies);
        }
    }
}
