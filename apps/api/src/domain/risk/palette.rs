//! Fixed display colors for risk levels.

use super::level::RiskLevel;

pub const HIGH_RISK_COLOR: &str = "#ef4444";
pub const MEDIUM_RISK_COLOR: &str = "#fcd34d";
pub const LOW_RISK_COLOR: &str = "#22c55e";
/// Slate, shown for regions with no classification.
pub const NO_RISK_COLOR: &str = "#334155";

/// Region outline at rest.
pub const DEFAULT_STROKE: &str = "#475569";
pub const DEFAULT_STROKE_WIDTH: f64 = 0.5;
/// Region outline while hovered.
pub const HOVER_STROKE: &str = "#00FFFF";
pub const HOVER_STROKE_WIDTH: f64 = 1.5;
pub const HOVER_GLOW: &str = "drop-shadow(0 0 8px rgba(0, 255, 255, 0.8))";

/// Fill color for a risk level. Total over every input, including no level at all.
pub fn fill_color(risk: Option<RiskLevel>) -> &'static str {
    match risk {
        Some(RiskLevel::High) => HIGH_RISK_COLOR,
        Some(RiskLevel::Medium) => MEDIUM_RISK_COLOR,
        Some(RiskLevel::Low) => LOW_RISK_COLOR,
        Some(RiskLevel::Unknown) | None => NO_RISK_COLOR,
    }
}

impl RiskLevel {
    pub fn color(&self) -> &'static str {
        fill_color(Some(*self))
    }
}
