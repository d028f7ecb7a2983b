use crate::cli::ServeArgs;
use crate::infra::{load_dataset, AppState};
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use skill_gap::config::AppConfig;
use skill_gap::dashboard::DashboardState;
use skill_gap::error::AppError;
use skill_gap::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.dataset.take() {
        config.dashboard.dataset_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let dataset = Arc::new(load_dataset(config.dashboard.dataset_path.clone())?);
    let dashboard = Arc::new(DashboardState::new(
        dataset.clone(),
        config.dashboard.debug,
    ));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_dashboard_routes(dashboard)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        debug = config.dashboard.debug,
        rows = dataset.len(),
        "skill gap dashboard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
