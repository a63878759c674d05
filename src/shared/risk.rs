//! Risk Level
//!
//! The diabetes risk assessment computed server-side from a patient's
//! note history. The client only parses and renders it; it never
//! derives risk itself.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-computed risk level, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum RiskLevel {
    #[default]
    None,
    Borderline,
    EarlyOnset,
    InDanger,
}

impl RiskLevel {
    /// The label strings the risk service emits.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::None => "None",
            RiskLevel::Borderline => "Borderline",
            RiskLevel::EarlyOnset => "Early onset",
            RiskLevel::InDanger => "In Danger",
        }
    }

    /// Parse a service label. Anything unrecognized maps to `None`, the
    /// lowest severity, so a new label on the service side can never
    /// fail a fetch or render as alarming.
    pub fn from_label(raw: &str) -> Self {
        match raw {
            "Borderline" => RiskLevel::Borderline,
            "Early onset" => RiskLevel::EarlyOnset,
            "In Danger" => RiskLevel::InDanger,
            _ => RiskLevel::None,
        }
    }

    /// Numeric severity, 0 = lowest.
    pub fn severity(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RiskLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RiskLevel::from_label(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for level in [
            RiskLevel::None,
            RiskLevel::Borderline,
            RiskLevel::EarlyOnset,
            RiskLevel::InDanger,
        ] {
            assert_eq!(RiskLevel::from_label(level.label()), level);
        }
    }

    #[test]
    fn test_unrecognized_label_is_lowest_severity() {
        assert_eq!(RiskLevel::from_label("Unknown"), RiskLevel::None);
        assert_eq!(RiskLevel::from_label(""), RiskLevel::None);
        assert_eq!(RiskLevel::from_label("in danger"), RiskLevel::None);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(RiskLevel::None < RiskLevel::Borderline);
        assert!(RiskLevel::Borderline < RiskLevel::EarlyOnset);
        assert!(RiskLevel::EarlyOnset < RiskLevel::InDanger);
        assert_eq!(RiskLevel::InDanger.severity(), 3);
    }

    #[test]
    fn test_deserializes_from_wire_string() {
        let level: RiskLevel = serde_json::from_str("\"In Danger\"").unwrap();
        assert_eq!(level, RiskLevel::InDanger);
        let fallback: RiskLevel = serde_json::from_str("\"something new\"").unwrap();
        assert_eq!(fallback, RiskLevel::None);
    }
}
