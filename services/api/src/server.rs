use crate::cli::ServeArgs;
use crate::infra::{build_engine, AppState};
use crate::routes::screener_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use essy_report::config::AppConfig;
use essy_report::error::AppError;
use essy_report::screener::{validate_configuration, IssueSeverity};
use essy_report::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(rules) = args.rules.take() {
        config.screener.rules_path = Some(rules);
    }
    if let Some(policy) = args.policy.take() {
        config.screener.missing_rule_policy = policy;
    }

    telemetry::init(&config.telemetry)?;

    let engine = build_engine(&config.screener)?;
    let issues = validate_configuration(engine.registry());
    for issue in &issues {
        warn!(severity = ?issue.severity(), %issue, "field configuration issue");
    }
    let errors = issues
        .iter()
        .filter(|issue| issue.severity() == IssueSeverity::Error)
        .count();
    if errors > 0 {
        return Err(AppError::InvalidConfiguration { errors });
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        engine,
    };

    let app = screener_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        policy = %config.screener.missing_rule_policy,
        "essy report service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
