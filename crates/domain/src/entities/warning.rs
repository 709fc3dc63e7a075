//! Classification result

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{ConditionTag, Severity};

/// Label introducing the list of detected conditions in a description
const DETECTED_CONDITIONS_LABEL: &str = "Detected conditions";

/// Hazard assessment of one snapshot
///
/// Built only through [`Warning::from_conditions`], which keeps `severity`
/// equal to the maximum severity among `conditions` (or `Normal` when no
/// condition fired). Deserialization goes through the same constructor:
/// only `conditions` is read, `severity` and `description` are rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TriggeredConditions")]
pub struct Warning {
    severity: Severity,
    conditions: Vec<ConditionTag>,
    description: String,
}

/// Serialized form accepted when reading a [`Warning`] back
#[derive(Deserialize)]
struct TriggeredConditions {
    conditions: Vec<ConditionTag>,
}

impl From<TriggeredConditions> for Warning {
    fn from(record: TriggeredConditions) -> Self {
        Self::from_conditions(record.conditions)
    }
}

impl Warning {
    /// Build a warning from the tags that fired, in trigger order
    pub fn from_conditions(conditions: Vec<ConditionTag>) -> Self {
        let severity = conditions
            .iter()
            .map(|tag| tag.severity())
            .fold(Severity::Normal, Severity::max);

        let mut description = severity.headline().to_string();
        if !conditions.is_empty() {
            let phrases = conditions
                .iter()
                .map(|tag| tag.phrase())
                .collect::<Vec<_>>()
                .join(", ");
            description.push_str(&format!("\n{DETECTED_CONDITIONS_LABEL}: {phrases}"));
        }

        Self {
            severity,
            conditions,
            description,
        }
    }

    /// Overall severity
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Triggered conditions in evaluation order
    #[must_use]
    pub fn conditions(&self) -> &[ConditionTag] {
        &self.conditions
    }

    /// Human-readable description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether a specific condition fired
    #[must_use]
    pub fn has(&self, tag: ConditionTag) -> bool {
        self.conditions.contains(&tag)
    }

    /// Whether anything hazardous was detected
    #[must_use]
    pub fn is_hazardous(&self) -> bool {
        self.severity > Severity::Normal
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.emoji(), self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_warning_is_normal() {
        let warning = Warning::from_conditions(Vec::new());
        assert_eq!(warning.severity(), Severity::Normal);
        assert!(warning.conditions().is_empty());
        assert_eq!(warning.description(), "Weather conditions are normal.");
        assert!(!warning.is_hazardous());
    }

    #[test]
    fn severity_is_max_of_conditions() {
        let warning =
            Warning::from_conditions(vec![ConditionTag::ExtremeCold, ConditionTag::ExtremeWind]);
        assert_eq!(warning.severity(), Severity::Extreme);
    }

    #[test]
    fn description_lists_phrases_in_order() {
        let warning =
            Warning::from_conditions(vec![ConditionTag::ExtremeHeat, ConditionTag::StrongWind]);
        assert_eq!(
            warning.description(),
            "Caution: Adverse weather conditions detected.\n\
             Detected conditions: Extremely high temperature, Strong wind"
        );
    }

    #[test]
    fn has_checks_membership() {
        let warning = Warning::from_conditions(vec![ConditionTag::HeavySnow]);
        assert!(warning.has(ConditionTag::HeavySnow));
        assert!(!warning.has(ConditionTag::ExtremeSnow));
    }

    #[test]
    fn serializes_tags_as_strings() {
        let warning = Warning::from_conditions(vec![ConditionTag::PoorVisibility]);
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["severity"], "severe");
        assert_eq!(json["conditions"][0], "poor_visibility");
    }

    #[test]
    fn deserializing_recomputes_severity_and_description() {
        let warning: Warning = serde_json::from_str(
            r#"{"severity":"normal","conditions":["extreme_wind"],"description":"fine"}"#,
        )
        .unwrap();

        assert_eq!(warning.severity(), Severity::Extreme);
        assert_eq!(warning.conditions(), &[ConditionTag::ExtremeWind]);
        assert_eq!(
            warning.description(),
            "Warning: Extreme weather conditions detected!\nDetected conditions: Dangerous wind speed"
        );
    }

    #[test]
    fn serialized_warning_reads_back_unchanged() {
        let warning =
            Warning::from_conditions(vec![ConditionTag::ExtremeCold, ConditionTag::HeavySnow]);
        let json = serde_json::to_string(&warning).unwrap();
        assert_eq!(serde_json::from_str::<Warning>(&json).unwrap(), warning);
    }

    #[test]
    fn deserializing_requires_conditions() {
        assert!(serde_json::from_str::<Warning>(r#"{"severity":"severe"}"#).is_err());
    }

    #[test]
    fn display_prefixes_emoji() {
        let warning = Warning::from_conditions(vec![ConditionTag::ExtremeRain]);
        assert!(warning.to_string().starts_with("🔴 Warning"));
    }
}
