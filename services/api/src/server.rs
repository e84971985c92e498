use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use guesthouse_safety::assessment::AssessmentEngine;
use guesthouse_safety::config::AppConfig;
use guesthouse_safety::error::AppError;
use guesthouse_safety::telemetry;
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

    telemetry::init(&config.telemetry)?;

    let cost_config = config.assessment.cost_config()?;
    info!(
        currency = %cost_config.currency,
        custom_table = config.assessment.cost_table.is_some(),
        "cost table loaded"
    );
    let engine = Arc::new(AssessmentEngine::new(cost_config));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_assessment_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "guesthouse safety service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
