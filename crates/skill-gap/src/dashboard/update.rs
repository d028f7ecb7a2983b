use super::charts::{bar_chart, pie_chart, BarChart, PieChart};
use super::dataset::SkillDemandDataset;
use super::domain::{DashboardSelection, DemandRecord};
use super::svg::{render_bar, render_pie};
use serde::Serialize;

/// Everything the page redraws after a control changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardUpdate {
    pub filtered: Vec<DemandRecord>,
    pub pie_chart: PieChart,
    pub bar_chart: BarChart,
    pub prediction: String,
    pub projection: String,
}

/// An update plus both charts rendered as inline SVG.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    #[serde(flatten)]
    pub update: DashboardUpdate,
    pub pie_svg: String,
    pub bar_svg: String,
}

impl From<DashboardUpdate> for DashboardView {
    fn from(update: DashboardUpdate) -> Self {
        let pie_svg = render_pie(&update.pie_chart);
        let bar_svg = render_bar(&update.bar_chart);
        Self {
            update,
            pie_svg,
            bar_svg,
        }
    }
}

pub fn predict_skill_demand(education_field: &str, skill_needed: &str) -> String {
    format!("Predicted demand for {skill_needed} in {education_field} will rise by 10%.")
}

pub fn project_skill_demand(current_demand: u8) -> String {
    format!("Projected future demand based on current demand of {current_demand}%.")
}

pub fn no_data_message(education_field: &str, skill_needed: &str) -> String {
    format!("No data available for {skill_needed} in {education_field}.")
}

/// Recomputes the charts and both messages for a selection.
///
/// The charts only see rows at or above the threshold; the messages look the
/// (field, skill) pair up in the whole table.
pub fn update_dashboard(
    dataset: &SkillDemandDataset,
    selection: &DashboardSelection,
) -> DashboardUpdate {
    let DashboardSelection {
        education_field,
        skill_needed,
        demand_threshold,
    } = selection;

    let filtered = dataset.filter(education_field, *demand_threshold);
    let pie_chart = pie_chart(&filtered);
    let bar_chart = bar_chart(&filtered);

    let (prediction, projection) = match dataset.lookup(education_field, skill_needed) {
        Some(record) => (
            predict_skill_demand(education_field, skill_needed),
            project_skill_demand(record.demand_percent),
        ),
        None => (no_data_message(education_field, skill_needed), String::new()),
    };

    DashboardUpdate {
        filtered: filtered.into_iter().cloned().collect(),
        pie_chart,
        bar_chart,
        prediction,
        projection,
    }
}
