use crate::infra::{parse_domains, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use essy_report::error::AppError;
use essy_report::screener::{
    validate_configuration, ConfigIssue, Diagnostic, Domain, IssueSeverity, MissingRulePolicy,
    ReportBuilder, ScreenerRecord, ScreeningReport,
};
use essy_report::telemetry::log_diagnostics;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct ReportRequest {
    /// Flat field-code to value object for one screener.
    pub(crate) record: serde_json::Value,
    #[serde(default)]
    pub(crate) domains: Vec<String>,
    #[serde(default)]
    pub(crate) policy: Option<MissingRulePolicy>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReportResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) policy: MissingRulePolicy,
    pub(crate) report: ScreeningReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DomainConfigurationEntry {
    pub(crate) domain: Domain,
    pub(crate) domain_label: &'static str,
    pub(crate) rating_field: Option<&'static str>,
    pub(crate) items: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConfigurationIssueView {
    pub(crate) severity: IssueSeverity,
    pub(crate) message: String,
    pub(crate) issue: ConfigIssue,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConfigurationResponse {
    pub(crate) policy: MissingRulePolicy,
    pub(crate) fields: usize,
    pub(crate) cross_loaded_groups: usize,
    pub(crate) domains: Vec<DomainConfigurationEntry>,
    pub(crate) issues: Vec<ConfigurationIssueView>,
}

pub(crate) fn screener_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/essy/reports",
            axum::routing::post(screening_report_endpoint),
        )
        .route(
            "/api/v1/essy/configuration",
            axum::routing::get(configuration_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn screening_report_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ReportRequest>,
) -> Result<Json<ReportResponse>, AppError> {
    let ReportRequest {
        record,
        domains,
        policy,
    } = payload;

    let domains = parse_domains(&domains).map_err(AppError::InvalidRequest)?;
    let engine = match policy {
        Some(policy) => state.engine.clone().with_policy(policy),
        None => state.engine.clone(),
    };

    let (record, mut diagnostics) =
        ScreenerRecord::from_json(engine.registry(), &record)?.into_parts();
    let (report, report_diagnostics) = ReportBuilder::new(&engine)
        .build(&record, &domains)?
        .into_parts();
    diagnostics.extend(report_diagnostics);
    log_diagnostics("screening_report", &diagnostics);

    Ok(Json(ReportResponse {
        generated_at: Utc::now(),
        policy: engine.policy(),
        report,
        diagnostics,
    }))
}

pub(crate) async fn configuration_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<ConfigurationResponse> {
    let registry = state.engine.registry();

    let domains = Domain::ordered()
        .into_iter()
        .map(|domain| DomainConfigurationEntry {
            domain,
            domain_label: domain.label(),
            rating_field: registry.rating_field(domain),
            items: registry.fields_in_domain(domain).count(),
        })
        .collect();

    let issues = validate_configuration(registry)
        .into_iter()
        .map(|issue| ConfigurationIssueView {
            severity: issue.severity(),
            message: issue.to_string(),
            issue,
        })
        .collect();

    Json(ConfigurationResponse {
        policy: state.engine.policy(),
        fields: registry.fields().len(),
        cross_loaded_groups: registry.groups().len(),
        domains,
        issues,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::engine_with_store;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use essy_report::screener::{Frequency, InMemoryRuleStore};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(ready: bool, store: InMemoryRuleStore) -> axum::Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            engine: engine_with_store(store, MissingRulePolicy::Concatenate),
        };
        screener_routes().layer(Extension(state))
    }

    async fn post_json(
        app: axum::Router,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");
        let response = app.oneshot(request).await.expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body collects");
        let json = serde_json::from_slice(&bytes).expect("json body");
        (status, json)
    }

    #[tokio::test]
    async fn readiness_reflects_startup_flag() {
        let app = test_app(false, InMemoryRuleStore::new());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let app = test_app(true, InMemoryRuleStore::new());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn report_endpoint_returns_daggered_sentences() {
        let app = test_app(true, InMemoryRuleStore::new());
        let (status, body) = post_json(
            app,
            "/api/v1/essy/reports",
            json!({
                "record": {
                    "A_DOMAIN": "an area of some concern",
                    "P_DOMAIN": "an area of some concern",
                    "A_P_S_ARTICULATE_CL1": "Sometimes",
                    "A_P_S_ARTICULATE_CL2": null,
                },
                "domains": ["Physical Health"],
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["policy"], "concatenate");
        let physical = &body["report"]["domains"][0];
        assert_eq!(physical["domain"], "physical_health");
        assert_eq!(
            physical["monitor"][0]["text"],
            "Sometimes articulates clearly enough to be understood. †"
        );
        assert_eq!(body["diagnostics"][0]["kind"], "missing_decision_rule");
    }

    #[tokio::test]
    async fn report_endpoint_honors_policy_override() {
        let store = InMemoryRuleStore::new().with_rule(
            "B_BULLY",
            Frequency::AlmostNever,
            "Does not engage in bullying behavior.",
        );
        let app = test_app(true, store);
        let (status, body) = post_json(
            app,
            "/api/v1/essy/reports",
            json!({
                "record": { "B_BULLY": "almost never", "B_SNEAK": "Frequently" },
                "domains": ["behavior"],
                "policy": "skip",
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["policy"], "skip");
        let behavior = &body["report"]["domains"][0];
        assert_eq!(
            behavior["strengths"][0]["text"],
            "Does not engage in bullying behavior."
        );
        assert_eq!(behavior["concerns"], json!([]));
    }

    #[tokio::test]
    async fn report_endpoint_rejects_bad_input() {
        let (status, body) = post_json(
            test_app(true, InMemoryRuleStore::new()),
            "/api/v1/essy/reports",
            json!({ "record": ["A_READ"] }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().expect("message").contains("an array"));

        let (status, _) = post_json(
            test_app(true, InMemoryRuleStore::new()),
            "/api/v1/essy/reports",
            json!({ "record": {}, "domains": ["recess"] }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn configuration_endpoint_reports_clean_tables() {
        let app = test_app(true, InMemoryRuleStore::new());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/essy/configuration")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body collects");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["issues"], json!([]));
        assert_eq!(body["domains"].as_array().map(Vec::len), Some(6));
        assert_eq!(body["cross_loaded_groups"], 11);
    }
}
