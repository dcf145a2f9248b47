use essy_report::config::ScreenerConfig;
use essy_report::error::AppError;
use essy_report::screener::{
    load_rules_from_path, DecisionRuleStore, Domain, FieldRegistry, InMemoryRuleStore,
    MissingRulePolicy, ScreenerEngine,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: ScreenerEngine,
}

/// Empty store when no seed is configured; every item then takes the missing-rule policy.
pub(crate) fn load_rule_store(path: Option<&Path>) -> Result<InMemoryRuleStore, AppError> {
    let Some(path) = path else {
        info!("no decision rule seed configured");
        return Ok(InMemoryRuleStore::new());
    };

    let store = load_rules_from_path(path)?;
    info!(path = %path.display(), rules = store.len(), "decision rules loaded");
    Ok(store)
}

pub(crate) fn build_engine(config: &ScreenerConfig) -> Result<ScreenerEngine, AppError> {
    let store = load_rule_store(config.rules_path.as_deref())?;
    Ok(engine_with_store(store, config.missing_rule_policy))
}

pub(crate) fn engine_with_store(
    store: InMemoryRuleStore,
    policy: MissingRulePolicy,
) -> ScreenerEngine {
    let store: Arc<dyn DecisionRuleStore> = Arc::new(store);
    ScreenerEngine::new(Arc::new(FieldRegistry::standard()), store, policy)
}

pub(crate) fn parse_domain(raw: &str) -> Result<Domain, String> {
    Domain::from_label(raw).ok_or_else(|| {
        let known: Vec<_> = Domain::ordered().iter().map(|domain| domain.label()).collect();
        format!("unknown domain '{raw}' (expected one of: {})", known.join(", "))
    })
}

/// Caller order is kept; an empty selection means every domain.
pub(crate) fn parse_domains(raw: &[String]) -> Result<Vec<Domain>, String> {
    if raw.is_empty() {
        return Ok(Domain::ordered().to_vec());
    }
    raw.iter().map(|value| parse_domain(value)).collect()
}
