use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;

use crate::dashboard::{dashboard_router, DashboardSelection, DashboardState, SkillDemandDataset};

const BODY_LIMIT: usize = 256 * 1024;

pub(super) fn sample_state(debug: bool) -> Arc<DashboardState> {
    Arc::new(DashboardState::new(
        Arc::new(SkillDemandDataset::sample()),
        debug,
    ))
}

pub(super) fn sample_router() -> axum::Router {
    dashboard_router(sample_state(false))
}

pub(super) fn update_request(selection: &DashboardSelection) -> Request<Body> {
    json_request(serde_json::to_vec(selection).expect("selection serializes"))
}

pub(super) fn json_request(body: Vec<u8>) -> Request<Body> {
    Request::post(crate::dashboard::UPDATE_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request builds")
}

pub(super) async fn read_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
