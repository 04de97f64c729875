use crate::domain::shared::errors::DomainError;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Glyph drawn in a card's badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CardIcon {
    Thermometer,
    CloudRain,
    AlertTriangle,
}

impl CardIcon {
    /// Inline SVG path data, 24×24 viewbox.
    pub fn svg_path(&self) -> &'static str {
        match self {
            CardIcon::Thermometer => "M14 4v10.54a4 4 0 1 1-4 0V4a2 2 0 0 1 4 0Z",
            CardIcon::CloudRain => {
                "M4 14.9A7 7 0 1 1 15.7 8h1.8a4.5 4.5 0 0 1 2.5 8.2M16 14v6M8 14v6M12 16v6"
            }
            CardIcon::AlertTriangle => {
                "m21.7 18-8-14a2 2 0 0 0-3.5 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.7-3ZM12 9v4M12 17h.01"
            }
        }
    }
}

/// Accent color family of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CardTone {
    Red,
    Blue,
    Yellow,
}

impl CardTone {
    pub fn accent(&self) -> &'static str {
        match self {
            CardTone::Red => "#f87171",
            CardTone::Blue => "#60a5fa",
            CardTone::Yellow => "#facc15",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            CardTone::Red => "rgba(127, 29, 29, 0.3)",
            CardTone::Blue => "rgba(30, 58, 138, 0.3)",
            CardTone::Yellow => "rgba(113, 63, 18, 0.3)",
        }
    }
}

/// One informational card on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AlertCard {
    pub title: String,
    pub value: String,
    pub unit: String,
    pub icon: CardIcon,
    pub tone: CardTone,
}

/// The cards shown above the map, passed explicitly to the card renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CardDeck {
    pub cards: Vec<AlertCard>,
}

impl CardDeck {
    /// Parse a deck from JSON of the form `{"cards": [...]}`.
    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        serde_json::from_str(text)
            .map_err(|e| DomainError::ValidationError(format!("invalid card deck: {}", e)))
    }
}

impl Default for CardDeck {
    fn default() -> Self {
        Self {
            cards: vec![
                AlertCard {
                    title: "Current Temperature".into(),
                    value: "31°C".into(),
                    unit: "Hyderabad".into(),
                    icon: CardIcon::Thermometer,
                    tone: CardTone::Red,
                },
                AlertCard {
                    title: "Predicted Rainfall".into(),
                    value: "45 mm/hr".into(),
                    unit: "Next 24 Hours".into(),
                    icon: CardIcon::CloudRain,
                    tone: CardTone::Blue,
                },
                AlertCard {
                    title: "Flood Alert Status".into(),
                    value: "Critical".into(),
                    unit: "4 Regions".into(),
                    icon: CardIcon::AlertTriangle,
                    tone: CardTone::Yellow,
                },
            ],
        }
    }
}
