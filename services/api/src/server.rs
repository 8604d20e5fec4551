use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAssessmentRepository, StaticQuestionCatalog};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use career_manifest::assessment::{build_narrator, AssessmentService, ScoringEngine};
use career_manifest::config::AppConfig;
use career_manifest::error::AppError;
use career_manifest::telemetry;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let narrator = build_narrator(&config.narration)?;
    let narrator_name = narrator.as_ref().map_or("none", |narrator| narrator.name());
    let engine = ScoringEngine::standard();
    let catalog_version = engine.catalog().version().to_string();
    let assessment_service = Arc::new(
        AssessmentService::new(
            Arc::new(StaticQuestionCatalog::default()),
            Arc::new(InMemoryAssessmentRepository::default()),
            engine,
        )
        .with_narrator(narrator, config.narration.timeout),
    );

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        narrator = narrator_name,
        weight_matrix = %catalog_version,
        "career recommendation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
