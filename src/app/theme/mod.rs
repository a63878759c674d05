//! Theme
//!
//! Color constants and the risk severity-to-color mapping.

pub mod colors;

use eframe::egui::Color32;

use crate::shared::RiskLevel;

/// The chip color for a risk level. Severities map to distinct colors,
/// with anything unrecognized already folded into the lowest severity
/// at parse time.
pub fn risk_color(level: RiskLevel) -> Color32 {
    match level {
        RiskLevel::None => colors::RISK_NONE,
        RiskLevel::Borderline => colors::RISK_BORDERLINE,
        RiskLevel::EarlyOnset => colors::RISK_EARLY_ONSET,
        RiskLevel::InDanger => colors::RISK_IN_DANGER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_severity_has_a_distinct_color() {
        let all = [
            RiskLevel::None,
            RiskLevel::Borderline,
            RiskLevel::EarlyOnset,
            RiskLevel::InDanger,
        ];
        for a in all {
            for b in all {
                if a != b {
                    assert_ne!(risk_color(a), risk_color(b), "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn test_scenario_e_mapping() {
        // Highest severity renders as the error color.
        assert_eq!(risk_color(RiskLevel::InDanger), colors::ERROR);
        // Borderline is a distinct, lower-severity indicator than
        // early onset.
        assert_ne!(
            risk_color(RiskLevel::Borderline),
            risk_color(RiskLevel::EarlyOnset)
        );
        assert!(RiskLevel::Borderline < RiskLevel::EarlyOnset);
        // The parse fallback lands on the safe color.
        assert_eq!(
            risk_color(RiskLevel::from_label("anything else")),
            colors::RISK_NONE
        );
    }
}
