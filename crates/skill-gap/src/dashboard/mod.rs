//! Skill demand dashboard: the demand table, the update rules driven by the
//! three controls, and the page that renders their outputs.

pub mod charts;
pub mod controls;
pub mod dataset;
pub mod domain;
pub mod page;
pub mod router;
pub mod svg;
pub mod update;

#[cfg(test)]
mod tests;

pub const PAGE_PATH: &str = "/";
pub const CONTROLS_PATH: &str = "/api/v1/dashboard/controls";
pub const UPDATE_PATH: &str = "/api/v1/dashboard/update";

pub use charts::{Bar, BarChart, PieChart, PieSlice};
pub use controls::ControlPanel;
pub use dataset::{DatasetError, SkillDemandDataset};
pub use domain::{DashboardSelection, DemandRecord, SelectionError, DEFAULT_THRESHOLD};
pub use router::{dashboard_router, DashboardState};
pub use update::{
    no_data_message, predict_skill_demand, project_skill_demand, update_dashboard, DashboardUpdate,
    DashboardView,
};
