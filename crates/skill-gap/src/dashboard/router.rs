use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

use super::controls::ControlPanel;
use super::dataset::SkillDemandDataset;
use super::domain::DashboardSelection;
use super::page::render_page;
use super::update::{update_dashboard, DashboardView};
use super::{CONTROLS_PATH, PAGE_PATH, UPDATE_PATH};
use crate::error::AppError;

/// Shared, read-only state behind every dashboard route.
#[derive(Debug)]
pub struct DashboardState {
    pub dataset: Arc<SkillDemandDataset>,
    pub panel: ControlPanel,
    pub debug: bool,
}

impl DashboardState {
    pub fn new(dataset: Arc<SkillDemandDataset>, debug: bool) -> Self {
        let panel = ControlPanel::from_dataset(&dataset);
        Self {
            dataset,
            panel,
            debug,
        }
    }
}

/// Router builder exposing the page and its JSON update endpoint.
pub fn dashboard_router(state: Arc<DashboardState>) -> Router {
    Router::new()
        .route(PAGE_PATH, get(page_handler))
        .route(CONTROLS_PATH, get(controls_handler))
        .route(UPDATE_PATH, post(update_handler))
        .with_state(state)
}

pub(crate) async fn page_handler(State(state): State<Arc<DashboardState>>) -> Response {
    let selection = state.panel.default_selection();
    let view = DashboardView::from(update_dashboard(&state.dataset, &selection));
    let body = Html(render_page(&state.panel, &view));

    if state.debug {
        ([(header::CACHE_CONTROL, "no-store")], body).into_response()
    } else {
        body.into_response()
    }
}

pub(crate) async fn controls_handler(
    State(state): State<Arc<DashboardState>>,
) -> Json<ControlPanel> {
    Json(state.panel.clone())
}

pub(crate) async fn update_handler(
    State(state): State<Arc<DashboardState>>,
    payload: Result<Json<DashboardSelection>, JsonRejection>,
) -> Result<Json<DashboardView>, AppError> {
    let Json(selection) = payload?;
    selection.validate()?;

    let update = update_dashboard(&state.dataset, &selection);
    debug!(
        field = %selection.education_field,
        skill = %selection.skill_needed,
        threshold = selection.demand_threshold,
        rows = update.filtered.len(),
        "dashboard updated"
    );

    Ok(Json(DashboardView::from(update)))
}
