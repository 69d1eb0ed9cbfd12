//! Human-readable order confirmation

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::domain::{Copies, Orientation, PaperSize, PaperType, PrintConfiguration, PrintQuality};

const TITLE: &str = "Pedido de impressão enviado com sucesso!";
const FOOTER: &str = "Seu pedido será processado em breve! 🎨";

/// Summary shown once a submission completes. Not a receipt: nothing here is
/// stored, and it serializes as display text only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub design_name: String,
    pub size: PaperSize,
    pub orientation: Orientation,
    pub quality: PrintQuality,
    pub paper_type: PaperType,
    pub copies: Copies,
}

impl OrderConfirmation {
    pub fn new(design_name: &str, config: &PrintConfiguration) -> Self {
        OrderConfirmation {
            design_name: design_name.to_string(),
            size: config.size,
            orientation: config.orientation,
            quality: config.quality,
            paper_type: config.paper_type,
            copies: config.copies,
        }
    }

    /// One line per field, in display order
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Desenho: {}", self.design_name),
            format!("Tamanho: {}", self.size),
            format!("Orientação: {}", self.orientation.label()),
            format!("Qualidade: {}", self.quality),
            format!("Papel: {}", self.paper_type),
            format!("Cópias: {}", self.copies),
        ]
    }
}

impl std::fmt::Display for OrderConfirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", TITLE)?;
        writeln!(f)?;
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        write!(f, "{}", FOOTER)
    }
}

impl Serialize for OrderConfirmation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("OrderConfirmation", 3)?;
        state.serialize_field("title", TITLE)?;
        state.serialize_field("lines", &self.lines())?;
        state.serialize_field("text", &self.to_string())?;
        state.end()
    }
}

/// Compact configuration line, e.g. `A4 • 2 cópia(s)`
pub fn configuration_summary(config: &PrintConfiguration) -> String {
    format!("{} • {} cópia(s)", config.size, config.copies)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landscape_config() -> PrintConfiguration {
        PrintConfiguration {
            size: PaperSize::A3,
            orientation: Orientation::Landscape,
            quality: PrintQuality::High,
            paper_type: PaperType::Special,
            copies: Copies::clamped(4),
        }
    }

    #[test]
    fn test_lines_cover_every_field() {
        let confirmation = OrderConfirmation::new("Unicorn", &landscape_config());
        assert_eq!(
            confirmation.lines(),
            vec![
                "Desenho: Unicorn",
                "Tamanho: A3",
                "Orientação: Paisagem",
                "Qualidade: high",
                "Papel: special",
                "Cópias: 4",
            ]
        );
    }

    #[test]
    fn test_portrait_is_localized() {
        let confirmation = OrderConfirmation::new("Unicorn", &PrintConfiguration::default());
        assert!(confirmation.to_string().contains("Orientação: Retrato"));
    }

    #[test]
    fn test_text_layout() {
        let text = OrderConfirmation::new("Unicorn", &PrintConfiguration::default()).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], TITLE);
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Desenho: Unicorn");
        assert_eq!(lines.last(), Some(&FOOTER));
    }

    #[test]
    fn test_serializes_as_display_text() {
        let json = serde_json::to_value(OrderConfirmation::new("Unicorn", &landscape_config())).unwrap();
        assert_eq!(json["title"], TITLE);
        assert_eq!(json["lines"].as_array().map(Vec::len), Some(6));
        assert!(json.get("copies").is_none());
    }

    #[test]
    fn test_configuration_summary() {
        assert_eq!(configuration_summary(&landscape_config()), "A3 • 4 cópia(s)");
    }
}
