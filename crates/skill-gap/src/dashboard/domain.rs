use serde::{Deserialize, Serialize};

pub const THRESHOLD_MIN: u8 = 0;
pub const THRESHOLD_MAX: u8 = 100;
pub const THRESHOLD_STEP: u8 = 5;
pub const DEFAULT_THRESHOLD: u8 = 50;

/// One row of the demand table: how much a field asks for a given skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandRecord {
    pub education_field: String,
    pub skill_needed: String,
    pub demand_percent: u8,
}

impl DemandRecord {
    pub fn new(
        education_field: impl Into<String>,
        skill_needed: impl Into<String>,
        demand_percent: u8,
    ) -> Self {
        Self {
            education_field: education_field.into(),
            skill_needed: skill_needed.into(),
            demand_percent,
        }
    }

    pub fn matches(&self, education_field: &str, skill_needed: &str) -> bool {
        self.education_field == education_field && self.skill_needed == skill_needed
    }
}

/// Current values of the three dashboard controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSelection {
    pub education_field: String,
    pub skill_needed: String,
    #[serde(default = "default_threshold")]
    pub demand_threshold: u8,
}

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

impl DashboardSelection {
    pub fn new(
        education_field: impl Into<String>,
        skill_needed: impl Into<String>,
        demand_threshold: u8,
    ) -> Self {
        Self {
            education_field: education_field.into(),
            skill_needed: skill_needed.into(),
            demand_threshold,
        }
    }

    /// Field and skill are free-form (unknown values fall through to the
    /// "no data" message); only the threshold has a hard range.
    pub fn validate(&self) -> Result<(), SelectionError> {
        if self.demand_threshold > THRESHOLD_MAX {
            return Err(SelectionError::ThresholdOutOfRange {
                value: self.demand_threshold,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("demand threshold {value}% is outside 0..=100")]
    ThresholdOutOfRange { value: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_defaults_threshold_when_omitted() {
        let selection: DashboardSelection = serde_json::from_str(
            r#"{"education_field":"Engineering","skill_needed":"Matlab"}"#,
        )
        .expect("selection parses");
        assert_eq!(selection.demand_threshold, DEFAULT_THRESHOLD);
        assert!(selection.validate().is_ok());
    }

    #[test]
    fn threshold_above_hundred_is_rejected() {
        let selection = DashboardSelection::new("Engineering", "Matlab", 120);
        assert_eq!(
            selection.validate(),
            Err(SelectionError::ThresholdOutOfRange { value: 120 })
        );
    }

    #[test]
    fn threshold_bounds_are_inclusive() {
        assert!(DashboardSelection::new("a", "b", 0).validate().is_ok());
        assert!(DashboardSelection::new("a", "b", 100).validate().is_ok());
    }
}
