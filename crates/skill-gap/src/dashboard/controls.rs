use super::dataset::SkillDemandDataset;
use super::domain::{
    DashboardSelection, DEFAULT_THRESHOLD, THRESHOLD_MAX, THRESHOLD_MIN, THRESHOLD_STEP,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dropdown {
    pub id: &'static str,
    pub label: &'static str,
    pub options: Vec<DropdownOption>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliderMark {
    pub value: u8,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slider {
    pub id: &'static str,
    pub label: &'static str,
    pub min: u8,
    pub max: u8,
    pub step: u8,
    pub value: u8,
    pub marks: Vec<SliderMark>,
}

/// The three inputs rendered above the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlPanel {
    pub education_field: Dropdown,
    pub skill_needed: Dropdown,
    pub demand_threshold: Slider,
}

impl ControlPanel {
    /// Dropdowns list distinct values in table order and default to the first.
    pub fn from_dataset(dataset: &SkillDemandDataset) -> Self {
        Self {
            education_field: dropdown(
                "education-field-dropdown",
                "Select Education Field:",
                dataset.education_fields(),
            ),
            skill_needed: dropdown(
                "skill-needed-dropdown",
                "Select Skill Needed:",
                dataset.skills(),
            ),
            demand_threshold: Slider {
                id: "demand-threshold-slider",
                label: "Demand Threshold:",
                min: THRESHOLD_MIN,
                max: THRESHOLD_MAX,
                step: THRESHOLD_STEP,
                value: DEFAULT_THRESHOLD,
                marks: (THRESHOLD_MIN..=THRESHOLD_MAX)
                    .step_by(10)
                    .map(|value| SliderMark {
                        value,
                        label: format!("{value}%"),
                    })
                    .collect(),
            },
        }
    }

    pub fn default_selection(&self) -> DashboardSelection {
        DashboardSelection::new(
            self.education_field.value.clone(),
            self.skill_needed.value.clone(),
            self.demand_threshold.value,
        )
    }
}

fn dropdown(id: &'static str, label: &'static str, values: Vec<&str>) -> Dropdown {
    let value = values.first().map(|v| v.to_string()).unwrap_or_default();
    let options = values
        .into_iter()
        .map(|v| DropdownOption {
            label: v.to_string(),
            value: v.to_string(),
        })
        .collect();

    Dropdown {
        id,
        label,
        options,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_mirrors_sample_dataset() {
        let panel = ControlPanel::from_dataset(&SkillDemandDataset::sample());

        assert_eq!(panel.education_field.options.len(), 2);
        assert_eq!(panel.education_field.value, "Computer Science");
        assert_eq!(panel.skill_needed.options.len(), 4);
        assert_eq!(panel.skill_needed.value, "Python");

        let slider = &panel.demand_threshold;
        assert_eq!((slider.min, slider.max, slider.step, slider.value), (0, 100, 5, 50));
        assert_eq!(slider.marks.len(), 11);
        assert_eq!(slider.marks[10].label, "100%");
    }

    #[test]
    fn default_selection_uses_first_options() {
        let panel = ControlPanel::from_dataset(&SkillDemandDataset::sample());
        assert_eq!(
            panel.default_selection(),
            DashboardSelection::new("Computer Science", "Python", 50)
        );
    }
}
