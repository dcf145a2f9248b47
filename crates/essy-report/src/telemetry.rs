use crate::config::TelemetryConfig;
use crate::screener::Diagnostic;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter { value: String, source: ParseError },
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::EnvFilter {
                value: config.log_level.clone(),
                source,
            })
        }
    }
}

/// Emits engine diagnostics as tracing events. Coverage gaps go out at debug, input
/// problems at warn.
pub fn log_diagnostics(context: &str, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        match diagnostic {
            Diagnostic::MissingDecisionRule {
                item_code,
                frequency,
                skipped,
            } => tracing::debug!(
                context,
                item_code = %item_code,
                frequency = %frequency,
                skipped,
                "no decision rule"
            ),
            Diagnostic::UnregisteredField { code } => {
                tracing::warn!(context, code = %code, "unregistered field")
            }
            Diagnostic::DuplicateField { code, source_key } => tracing::warn!(
                context,
                code = %code,
                source_key = %source_key,
                "duplicate field in record"
            ),
            Diagnostic::UnrecognizedFrequency { item_code, value } => tracing::warn!(
                context,
                item_code = %item_code,
                value = %value,
                "unrecognized frequency, treated as concern"
            ),
            Diagnostic::UnrecognizedRating { domain, value } => tracing::warn!(
                context,
                domain = domain.label(),
                value = %value,
                "unrecognized domain rating, treated as not a concern"
            ),
        }
    }
}
